// crates/report/src/main.rs
use std::io;
use std::process::ExitCode;

use gitver_report::{baked_descriptor, report};

fn main() -> ExitCode {
    let descriptor = match baked_descriptor() {
        Ok(descriptor) => descriptor,
        Err(e) => {
            eprintln!("Version Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match report::render(&descriptor, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Report Error: {e}");
            ExitCode::FAILURE
        }
    }
}
