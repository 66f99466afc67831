use crate::args::Args;
use crate::cmdline::Cmdline;
use std::io::{self, Write};

pub mod format;

/// Drops the space between echoed values
pub const NO_SEPARATOR_FLAG: &str = "-s";
/// Drops the trailing newline
pub const NO_NEWLINE_FLAG: &str = "-n";

/// Returned when the echoed output could not be written
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not write to stdout")]
    Stdout(#[from] io::Error),
}

/// How the values of a command line get joined and terminated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EchoOptions {
    separator: &'static str,
    terminator: &'static str,
}

impl Default for EchoOptions {
    fn default() -> Self {
        EchoOptions {
            separator: " ",
            terminator: "\n",
        }
    }
}

impl EchoOptions {
    /// Derives the options from the flags in `args`.
    ///
    /// Only the exact tokens `-s` and `-n` have an effect, every other flag is ignored.
    pub fn from_flags(args: &Args) -> Self {
        let mut options = EchoOptions::default();

        if args.has_flag(NO_SEPARATOR_FLAG) {
            options = options.without_separator();
        }

        if args.has_flag(NO_NEWLINE_FLAG) {
            options = options.without_newline();
        }

        tracing::debug!(
            separator = ?options.separator,
            terminator = ?options.terminator,
            "echo options"
        );
        options
    }

    pub fn without_separator(mut self) -> Self {
        self.separator = "";
        self
    }

    pub fn without_newline(mut self) -> Self {
        self.terminator = "";
        self
    }

    /// Inserted between consecutive values
    pub fn separator(&self) -> &'static str {
        self.separator
    }

    /// Appended after the last value
    pub fn terminator(&self) -> &'static str {
        self.terminator
    }
}

/// Echoes `cmdline` to `w`.
///
/// The raw arguments are always written first on their own line, followed by the values
/// formatted according to the flags.
pub fn run(mut w: impl Write, cmdline: &Cmdline) -> Result<(), Error> {
    format::write_raw(&mut w, cmdline.raw())?;

    let args = cmdline.split();
    let options = EchoOptions::from_flags(&args);
    format::write_echo(&mut w, &args.values, options)?;
    Ok(())
}
