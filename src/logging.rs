//! Tracing setup for the standalone binary.

use tracing_subscriber::EnvFilter;

/// Environment variable overriding the default log filter.
const LOG_ENV: &str = "BACKDROP_LOG";
/// Filter applied when the environment provides none.
const DEFAULT_FILTER: &str = "warn";

/// Install the global tracing subscriber.
///
/// Safe to call more than once: an already installed subscriber wins and
/// later calls are no-ops.
pub fn init() {
	let filter =
		EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.try_init();
}
