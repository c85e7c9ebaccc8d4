//! Validate command implementation.

use std::path::Path;

use signup_core::config::loader::ConfigLoader;
use signup_core::config::types::PreviewFormat;
use signup_core::inspect::FsInspector;
use signup_core::record::load_record;
use signup_core::schema::{ValidationErrors, validate_record};

use crate::cmd::output::{print_validation_errors, render_preview};
use crate::{OutputFormat, ValidateArgs};

pub fn run(config: Option<&Path>, profile: Option<&str>, args: ValidateArgs) {
    // Load configuration
    let rc = match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };
    crate::logging::init(&rc, true);

    if !args.file.exists() {
        eprintln!("Error: File not found: {}", args.file.display());
        std::process::exit(1);
    }

    let record = match load_record(&args.file, &FsInspector) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error reading record: {}", e);
            std::process::exit(1);
        }
    };

    tracing::debug!(file = %args.file.display(), "validating record");

    match validate_record(&rc.schema, &record) {
        Ok(normalized) => match resolve_format(args.output, args.json, args.quiet) {
            OutputFormat::Quiet => {}
            OutputFormat::Json => println!("{}", render_preview(&normalized, PreviewFormat::Json)),
            OutputFormat::Table => {
                println!("Record is valid.");
                println!();
                println!("{}", render_preview(&normalized, rc.preview));
            }
        },
        Err(errors) => {
            match resolve_format(args.output, args.json, args.quiet) {
                OutputFormat::Table => {
                    println!("Record has {} problem(s):", errors.len());
                    print_validation_errors(&errors);
                }
                OutputFormat::Json => print_errors_json(&errors),
                OutputFormat::Quiet => print_errors_quiet(&errors),
            }
            std::process::exit(1);
        }
    }
}

fn print_errors_json(errors: &ValidationErrors) {
    #[derive(serde::Serialize)]
    struct Output<'a> {
        valid: bool,
        errors: &'a ValidationErrors,
    }

    let output = Output { valid: false, errors };
    match serde_json::to_string_pretty(&output) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Error rendering JSON: {e}"),
    }
}

fn print_errors_quiet(errors: &ValidationErrors) {
    for error in errors {
        println!("{}", error.path);
    }
}

fn resolve_format(output: OutputFormat, json: bool, quiet: bool) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else if quiet {
        OutputFormat::Quiet
    } else {
        output
    }
}
