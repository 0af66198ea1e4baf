//! Diagnostic Inference - batch driver
//!
//! Reads a disease/patient record file, runs the posterior, bound and
//! best-test queries for every patient and writes the report.

use clap::Parser;
use dx_core::cli::{execute, Cli};
use dx_core::exit_codes::ExitCode;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version are not errors
            let code = if err.use_stderr() {
                ExitCode::ArgsError
            } else {
                ExitCode::Clean
            };
            let _ = err.print();
            std::process::exit(code.as_i32());
        }
    };

    let exit_code = execute(&cli);
    std::process::exit(exit_code.as_i32());
}
