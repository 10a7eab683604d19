use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr so stdout stays the human summary. `RUST_LOG` overrides the level.
pub fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	// Ignore the error if a subscriber is already installed
	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.try_init();
}
