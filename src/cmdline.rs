use crate::args::Args;

/// The raw command line, captured once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cmdline {
    raw: Vec<String>,
}

impl Cmdline {
    /// Captures the arguments of the current process.
    ///
    /// Arguments that are not valid unicode are converted lossily instead of panicking the way
    /// [args()](std::env::args) would.
    pub fn from_env() -> Self {
        Self::parse_from(
            std::env::args_os().map(|arg| arg.to_string_lossy().into_owned()),
        )
    }

    /// Captures `args` as a command line. The input is expected to be in the same format
    /// that [args()](std::env::args) returns (i.e. the name of the executable is first)
    pub fn parse_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut iter = args.into_iter().map(|s| s.into());
        let name: String = iter.next().unwrap_or_default();
        let raw: Vec<String> = iter.collect();

        tracing::trace!(%name, ?raw, "captured command line");
        Cmdline { raw }
    }

    /// Every argument after the executable name, untouched
    pub fn raw(&self) -> &[String] {
        &self.raw
    }

    pub fn split(&self) -> Args {
        Args::parse_from(self.raw.iter().cloned())
    }
}
