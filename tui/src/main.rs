mod args;
mod driver;
#[cfg(feature = "tui")]
mod tui;

use anyhow::Result;
use args::Args;
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse()?;

    #[cfg(feature = "tui")]
    {
        use std::io::IsTerminal;
        if args.use_tui(io::stdout().is_terminal()) {
            return tui::run_with_tui(&args.config);
        }
    }

    driver::run(&args.config, &mut io::stdout().lock())
}
