//! coderabbit-validate: check a .coderabbit.yaml before pushing it
//!
//! Usage:
//!   coderabbit-validate                          # validates ./.coderabbit.yaml
//!   coderabbit-validate --config path/to.yaml --max-custom-checks 5
//!
//! Exit code 0 when there are no errors (warnings allowed), 1 otherwise.

use clap::Parser;
use coderabbit_validate::{load_config, validate, Limits};
use std::fs;
use std::path::PathBuf;
use std::process;

/// Validate a .coderabbit.yaml file.
#[derive(Parser, Debug)]
#[command(name = "coderabbit-validate")]
struct Args {
    /// Path to the CodeRabbit YAML config
    #[arg(long, default_value = ".coderabbit.yaml")]
    config: PathBuf,

    #[arg(long, default_value_t = 5)]
    max_custom_checks: usize,

    #[arg(long, default_value_t = 50)]
    max_name_length: usize,
}

fn main() {
    let args = Args::parse();

    if !args.config.exists() {
        eprintln!("Config not found: {}", args.config.display());
        process::exit(1);
    }

    let contents = fs::read_to_string(&args.config).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {}", args.config.display(), e);
        process::exit(1);
    });
    let config = load_config(&contents).unwrap_or_else(|e| {
        eprintln!("{}", e);
        process::exit(1);
    });

    let findings = validate(
        &config,
        Limits {
            max_checks: args.max_custom_checks,
            max_name_length: args.max_name_length,
        },
    );

    if !findings.warnings.is_empty() {
        println!("Warnings:");
        for w in &findings.warnings {
            println!("- {}", w);
        }
    }

    if !findings.passed() {
        eprintln!("Errors:");
        for e in &findings.errors {
            eprintln!("- {}", e);
        }
        process::exit(1);
    }

    println!("Validation passed.");
}
