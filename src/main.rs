use cmd::cmd_run;
use consts::DEFAULT_LOG_FILTER;
use tracing_subscriber::EnvFilter;

mod cmd;
mod consts;
mod error;
mod prelude;
mod render;
mod s3w;
mod stats;

#[cfg(test)]
mod _test_support;

pub use error::{Error, Result};

// Buckets and pages are processed one at a time, no need for a multi thread runtime.
#[tokio::main(flavor = "current_thread")]
async fn main() {
	// Logs go to stderr so stdout stays clean for the json output.
	tracing_subscriber::fmt()
		.with_writer(std::io::stderr)
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
		.init();

	if let Err(e) = cmd_run().await {
		eprintln!("Error:\n  {}", e);
		std::process::exit(1);
	}
}
