//! Mkcpp: scaffolding tool for C++/CMake projects.
//!
//! This is the main entry point for the `mkcpp` CLI. It parses arguments,
//! hands the resulting request to the project materializer, and maps errors
//! to exit codes.

mod cli;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod project;
pub mod templates;
#[cfg(test)]
mod test_support;

use clap::Parser;
use cli::Cli;
use error::MkcppError;
use project::ProjectRequest;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and usage errors share this path: `--help` is deliberately
            // a non-success exit, matching the tool this replaces.
            let _ = err.print();
            return ExitCode::from(exit_codes::USER_ERROR as u8);
        }
    };

    let request = match build_request(cli) {
        Ok(request) => request,
        Err(err) => return report(err),
    };

    match project::create_project(&request) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => report(err),
    }
}

/// Turn parsed arguments into a [`ProjectRequest`], resolving the default
/// target path to the current working directory.
fn build_request(cli: Cli) -> error::Result<ProjectRequest> {
    let name = cli.effective_name();
    let path = match cli.path {
        Some(path) => path,
        None => std::env::current_dir().map_err(|e| MkcppError::Filesystem {
            context: "failed to resolve current directory".to_string(),
            source: e,
        })?,
    };

    Ok(ProjectRequest { name, path })
}

fn report(err: MkcppError) -> ExitCode {
    eprintln!("{}", err);
    ExitCode::from(err.exit_code() as u8)
}
