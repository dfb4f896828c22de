//! Command-line interface for stat-block extraction
//!
//! This binary extracts every stat block found in an HTML page and prints
//! the records in the selected output format.
//!
//! Usage:
//!   statblock `<path>` [--format `<format>`]   - Extract stat blocks from an HTML file
//!   statblock --list-formats                 - List registered formats

use clap::{Arg, ArgAction, Command};
use std::io::Read;

fn main() {
    let matches = Command::new("statblock")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract monster stat blocks from HTML and serialize them")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the HTML file, or - for stdin")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (yaml or json)")
                .default_value("yaml"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List registered formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let path = matches
        .get_one::<String>("path")
        .expect("path is required unless listing formats");
    let format = matches
        .get_one::<String>("format")
        .expect("format has a default");
    handle_extract_command(path, format);
}

/// Handle the extract command
fn handle_extract_command(path: &str, format: &str) {
    let registry = statblock::FormatRegistry::with_defaults();

    let source = read_source(path).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {}", path, e);
        std::process::exit(1);
    });

    let blocks = registry.parse(&source, "html").unwrap_or_else(|e| {
        eprintln!("Extraction error: {}", e);
        std::process::exit(1);
    });

    if blocks.is_empty() {
        eprintln!("No stat blocks found in {}", path);
        std::process::exit(1);
    }

    for (index, block) in blocks.iter().enumerate() {
        let rendered = registry.serialize(block, format).unwrap_or_else(|e| {
            eprintln!("Serialization error: {}", e);
            eprintln!(
                "Available formats: {}",
                registry.list_formats().join(", ")
            );
            std::process::exit(1);
        });

        if index > 0 {
            // YAML documents get a separator; JSON records a blank line.
            if format == "yaml" {
                println!("---");
            } else {
                println!();
            }
        }
        print!("{}", rendered);
        if !rendered.ends_with('\n') {
            println!();
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = statblock::FormatRegistry::with_defaults();
    println!("Registered formats:\n");

    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            println!("  {} - {}", name, format.description());
        }
    }
}

fn read_source(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        std::fs::read_to_string(path)
    }
}
