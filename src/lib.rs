//! Echoes command line arguments back to stdout
//!
//! ```text
//! $ echo-args -s a b c
//! -s a b c
//! abc
//! ```
//!
//! Flag | Effect
//! -|-
//! `-s` | Values are joined without a separating space
//! `-n` | No trailing newline is written
//!
//!
//! # Syntax
//!
//! - An argument starting with `-` is a flag. Flags other than `-s` and `-n` are accepted and
//! ignored.
//! - Everything else (including the empty string) is a value to echo.
//! - Before the formatted values, the raw arguments are always echoed on their own line,
//! space separated.

mod args;
mod cmdline;
pub mod echo;
pub mod logging;

pub use args::{is_flag, split_args, Args};
pub use cmdline::Cmdline;
pub use echo::{run, EchoOptions, Error};
