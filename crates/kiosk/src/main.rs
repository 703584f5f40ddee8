//! Pizzeria simulator entry point.

use std::io;
use std::process::ExitCode;

use kiosk::{Config, LogFormat};
use menu::Catalog;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs the tracing subscriber. Logs go to stderr so they never mix with
/// the console dialogue on stdout.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(io::stderr),
            )
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
    }
}

fn main() -> ExitCode {
    // 1. Load configuration and initialize tracing
    let config = Config::from_env();
    init_tracing(&config);

    // 2. Seed the menu
    let catalog = Catalog::default();

    // 3. Run the session on the console
    let stdin = io::stdin();
    let stdout = io::stdout();
    match kiosk::run(&catalog, stdin.lock(), stdout.lock(), &config) {
        Ok(order) => {
            tracing::info!(items = order.len(), total = %order.total(), "session finished");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "session aborted");
            ExitCode::FAILURE
        }
    }
}
