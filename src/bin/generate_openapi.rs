//! Emits the service's OpenAPI document as JSON.
//!
//! Usage:
//!   cargo run --bin generate_openapi > openapi.json
//!   cargo run --bin generate_openapi -- --output openapi.json

use std::{
    env, fs,
    io::{self, Write},
    process,
};

use soil_monitor_service::api::handlers::ApiDoc;
use utoipa::OpenApi;

fn main() {
    let json = ApiDoc::openapi()
        .to_pretty_json()
        .expect("Failed to serialise OpenAPI spec");

    let mut args = env::args().skip(1);
    let output_path = match args.next().as_deref() {
        Some("--output") => match args.next() {
            Some(path) => Some(path),
            None => {
                eprintln!("--output requires a path");
                process::exit(1);
            }
        },
        Some(other) => {
            eprintln!("Unknown argument: {other}");
            process::exit(1);
        }
        None => None,
    };

    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(&path, &json) {
                eprintln!("Error writing to {path}: {e}");
                process::exit(1);
            }
            eprintln!("OpenAPI spec written to {path}");
        }
        None => {
            io::stdout()
                .write_all(json.as_bytes())
                .expect("Failed to write to stdout");
        }
    }
}
