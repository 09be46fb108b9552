use clap::Parser;

/// Default log filter when neither `--log-level` nor `RUST_LOG` is given.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "datecalc")]
#[command(about = "Days, weekdays and second counts between two dates")]
pub struct Args {
  /// Log filter directive, e.g. `info` or `datecalc=debug`.
  #[arg(long, default_value = DEFAULT_LOG_LEVEL, env = "DATECALC_LOG")]
  pub log_level: String,

  /// Exit after the first pair of dates.
  #[arg(long)]
  pub once: bool,
}
