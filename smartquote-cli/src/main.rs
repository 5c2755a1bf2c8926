//! smartquote - convert straight quotes into typographic quotes in place

use clap::Parser;
use smartquote_cli::commands::ConvertArgs;
use std::process::ExitCode;

/// Convert straight quotes in prose files into German or English typographic quotes
#[derive(Debug, Parser)]
#[command(name = "smartquote", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    args: ConvertArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.args.execute() {
        Ok(summary) if summary.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
