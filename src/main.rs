use anyhow::Context;
use echo_args::{logging, Cmdline};
use std::io::stdout;

fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    let cmdline = Cmdline::from_env();
    echo_args::run(stdout().lock(), &cmdline)
        .with_context(|| format!("failed to echo {} argument(s)", cmdline.raw().len()))
}
