//! Command-line interface for gib
//! This binary converts GIB go game records into SGF.
//!
//! Usage:
//!   gib convert `<path>` [--output `<path>`] [--format `<format>`]

use clap::{Arg, Command};
use std::path::Path;

use gib::sgf;
use gib::GibRecord;

fn main() {
    let matches = Command::new("gib")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting GIB go game records to SGF")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("convert")
                .about("Convert a GIB file")
                .arg(
                    Arg::new("path")
                        .help("Path to the GIB file to convert")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Write the result to this file instead of stdout"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('sgf', or 'json' for the decoded record)")
                        .default_value("sgf"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("convert", convert_matches)) => {
            let path = convert_matches.get_one::<String>("path").unwrap();
            let output = convert_matches.get_one::<String>("output");
            let format = convert_matches.get_one::<String>("format").unwrap();
            handle_convert_command(path, output, format);
        }
        _ => unreachable!(),
    }
}

/// Handle the convert command
fn handle_convert_command(path: &str, output: Option<&String>, format: &str) {
    let record = GibRecord::from_path(Path::new(path)).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let rendered = match format {
        "sgf" => sgf::write_tree(&sgf::project(&record)),
        "json" => serde_json::to_string_pretty(&record.summary()).unwrap_or_else(|e| {
            eprintln!("Error serializing record: {}", e);
            std::process::exit(1);
        }),
        other => {
            eprintln!("Unknown format '{}' (expected 'sgf' or 'json')", other);
            std::process::exit(1);
        }
    };

    match output {
        Some(output_path) => {
            if let Err(e) = std::fs::write(output_path, rendered) {
                eprintln!("Error writing output file: {}", e);
                std::process::exit(1);
            }
        }
        None => println!("{}", rendered),
    }
}
