use itertools::{Either, Itertools};

/// Command line arguments split into flags and values
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[non_exhaustive]
pub struct Args {
    pub flags: Vec<String>,
    pub values: Vec<String>,
}

impl Args {
    /// Classifies `args` into flags and values. Unlike [`Cmdline::parse_from`](crate::Cmdline::parse_from),
    /// the input is expected to be the arguments only (i.e. without the name of the executable)
    pub fn parse_from<I, T>(args: I) -> Args
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let (flags, values) = args.into_iter().map(Into::into).partition_map(|arg: String| {
            if is_flag(&arg) {
                Either::Left(arg)
            } else {
                Either::Right(arg)
            }
        });

        let args = Args { flags, values };
        tracing::debug!(
            flags = args.flags.len(),
            values = args.values.len(),
            "classified arguments"
        );
        args
    }

    /// Returns true if the exact token `flag` was passed (e.g. `-n`, but not `-ns`)
    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.iter().any(|f| f == flag)
    }
}

/// Returns true if `arg` should be treated as a flag.
///
/// Anything starting with `-` is a flag, including a lone `-`. The empty string is a value.
pub fn is_flag(arg: &str) -> bool {
    arg.starts_with('-')
}

/// Splits `args` and returns the flags separated from the rest.
///
/// ```
/// use echo_args::split_args;
///
/// let (flags, rest) = split_args(["-n", "foo", "bar"]);
/// assert_eq!(flags, ["-n"]);
/// assert_eq!(rest, ["foo", "bar"]);
///
/// let (flags, rest) = split_args(["-n", "foo", "-s", "bar"]);
/// assert_eq!(flags, ["-n", "-s"]);
/// assert_eq!(rest, ["foo", "bar"]);
/// ```
pub fn split_args<I, T>(args: I) -> (Vec<String>, Vec<String>)
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let Args { flags, values } = Args::parse_from(args);
    (flags, values)
}
