// crates/cli/src/main.rs
use std::process::ExitCode;

use clap::Parser;
use gitver_cli::args::Args;

fn main() -> ExitCode {
    let args = Args::parse();
    match gitver_cli::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
