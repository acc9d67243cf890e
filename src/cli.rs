//! CLI argument parsing for mkcpp.
//!
//! Uses clap derive macros for declarative argument definitions. The parser
//! only collects values; validation of the project name happens in the
//! materializer so it stays testable without clap.

use clap::Parser;
use std::path::PathBuf;

/// Scaffold a new C++/CMake project.
///
/// Creates `<path>/<name>` containing a CMakeLists.txt, a configure script,
/// a build-and-run script, a hello-world source file, an empty include
/// directory, and a .gitignore.
#[derive(Parser, Debug)]
#[command(name = "mkcpp")]
pub struct Cli {
    /// Project name.
    pub name: Option<String>,

    /// Project name (flag form; takes precedence over the positional).
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    pub name_flag: Option<String>,

    /// Directory to create the project in (defaults to the current directory).
    #[arg(short = 'p', long = "path", value_name = "DIR")]
    pub path: Option<PathBuf>,
}

impl Cli {
    /// The project name, whichever way it was supplied.
    pub fn effective_name(&self) -> Option<String> {
        self.name_flag.clone().or_else(|| self.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn parses_positional_name() {
        let cli = Cli::try_parse_from(["mkcpp", "widget"]).unwrap();
        assert_eq!(cli.effective_name().as_deref(), Some("widget"));
    }

    #[test]
    fn parses_short_name_flag() {
        let cli = Cli::try_parse_from(["mkcpp", "-n", "widget"]).unwrap();
        assert_eq!(cli.effective_name().as_deref(), Some("widget"));
    }

    #[test]
    fn flag_takes_precedence_over_positional() {
        let cli = Cli::try_parse_from(["mkcpp", "other", "--name", "widget"]).unwrap();
        assert_eq!(cli.effective_name().as_deref(), Some("widget"));
    }

    #[test]
    fn parses_path_flag() {
        let cli = Cli::try_parse_from(["mkcpp", "widget", "-p", "/srv/projects"]).unwrap();
        assert_eq!(cli.path, Some(PathBuf::from("/srv/projects")));
    }

    #[test]
    fn path_defaults_to_none() {
        let cli = Cli::try_parse_from(["mkcpp", "widget"]).unwrap();
        assert!(cli.path.is_none());
    }

    #[test]
    fn missing_name_is_accepted_by_the_parser() {
        let cli = Cli::try_parse_from(["mkcpp"]).unwrap();
        assert!(cli.effective_name().is_none());
    }

    #[test]
    fn help_is_a_parse_error() {
        let err = Cli::try_parse_from(["mkcpp", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }
}
