//! textstat - count lines, words, letters and bytes

use std::process::ExitCode;

fn main() -> ExitCode {
    match textstat::cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
