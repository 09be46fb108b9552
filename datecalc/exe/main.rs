use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use datecalc::{Args, LocalClock, Session};

fn main() -> Result<()> {
  let args = Args::parse();

  // RUST_LOG wins over the configured level.
  let filter = EnvFilter::try_from_default_env()
                 .or_else(|_| EnvFilter::try_new(&args.log_level))
                 .context("invalid log filter")?;
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .compact()
    .init();

  tracing::info!(once = args.once, "starting date calculator");

  let stdin  = std::io::stdin();
  let stdout = std::io::stdout();
  Session::new(stdin.lock(), stdout.lock(), LocalClock)
    .once(args.once)
    .run()
    .context("date calculator session failed")
}
