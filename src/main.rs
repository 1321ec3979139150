//! Study Tracker - personal study-progress tracker
//!
//! Records module progress, labs, notes and certifications in a local
//! JSON document and reports on them.

use study_tracker::cli;

fn main() -> anyhow::Result<()> {
    // Initialize logging (RUST_LOG when set, otherwise WARN)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    cli::run()
}
