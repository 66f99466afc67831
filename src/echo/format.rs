use super::EchoOptions;
use itertools::Itertools;
use std::io::{self, Write};

/// Writes every raw argument joined by a single space, followed by a newline
pub fn write_raw(mut w: impl Write, raw: &[String]) -> io::Result<()> {
    writeln!(&mut w, "{}", raw.iter().join(" "))?;
    w.flush()
}

/// Writes `values` joined and terminated as `options` dictates
pub fn write_echo(mut w: impl Write, values: &[String], options: EchoOptions) -> io::Result<()> {
    let line = format_echo(values, options);
    w.write_all(line.as_bytes())?;
    w.flush()
}

fn format_echo(values: &[String], options: EchoOptions) -> String {
    let mut line = values.iter().join(options.separator());
    line.push_str(options.terminator());
    line
}
