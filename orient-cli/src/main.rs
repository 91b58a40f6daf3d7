//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use std::error::Error;

fn main() {
    if let Err(err) = orient_cli::run() {
        if let orient_cli::CliError::ArgumentParsing(clap_err) = &err {
            clap_err.exit();
        }
        eprintln!("orient: {err}");
        let mut source = err.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = cause.source();
        }
        std::process::exit(1);
    }
}
