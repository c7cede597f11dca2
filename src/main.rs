//! kamehandle entry point.
//!
//! Runs the generator and maps errors to their exit codes.

use std::process::ExitCode;

fn main() -> ExitCode {
    match kamehandle::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("kamehandle: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
