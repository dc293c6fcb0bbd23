use std::io;

use overtime_report::config::ReportConfig;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Initialize tracing on stderr so the report on stdout stays untouched.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let config = ReportConfig::default();
    if let Err(err) = overtime_report::run(&config, io::stdout().lock()) {
        // The exit status is 0 either way.
        error!(error = %err, "Failed to write report");
    }
}
