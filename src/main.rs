//! Inventory Dashboard - Main Entry Point

use inventory_dashboard::app::run_app;
use inventory_dashboard::helpers::get_or_create_log_dir;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Console plus daily rolling file logging; the guard flushes the file on drop
fn init_logging() -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer());

    match get_or_create_log_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "inventory-dashboard.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            registry
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .init();
            Some(guard)
        }
        Err(e) => {
            registry.init();
            tracing::warn!(error = %e, "Log directory unavailable, logging to console only");
            None
        }
    }
}

fn main() {
    let _guard = init_logging();

    tracing::info!("Starting Inventory Dashboard...");

    run_app();
}
