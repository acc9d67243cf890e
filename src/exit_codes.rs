//! Exit code constants for the mkcpp CLI.
//!
//! The tool only distinguishes success from failure. Note that `--help`
//! also exits non-zero, matching the behavior of the tool this replaces.

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Any failure: missing name, existing target, filesystem error, or help.
pub const USER_ERROR: i32 = 1;
