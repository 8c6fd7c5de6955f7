//! Writes the istanbul coverage of the files touched by a change into a
//! document, replacing the summary of an earlier run when there is one.
//!
//! ```bash
//! coverage-summary --compare compare.json --document body.md --in-place
//! git diff --name-only --diff-filter=AM main | coverage-summary --touched-files -
//! ```

use std::process::ExitCode;

use clap::Parser;

mod cli;
mod error;
mod exclude;
mod loaders;
mod log;
mod options;
mod runner;

use cli::Cli;

fn main() -> ExitCode {
    match runner::run(Cli::parse()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
