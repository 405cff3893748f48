//! Logging setup for the evaluation CLI

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Initialize console logging on stderr.
///
/// Stdout is reserved for the report. `RUST_LOG` overrides the level chosen
/// by `--verbose`.
pub fn init_logging(verbose: bool) {
  let level = if verbose { Level::DEBUG } else { Level::INFO };
  let env_filter = EnvFilter::builder()
    .with_default_directive(level.into())
    .from_env_lossy();

  // A second init (tests, embedding) keeps the first subscriber.
  let _ = tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_target(false)
    .with_writer(std::io::stderr)
    .try_init();
}
