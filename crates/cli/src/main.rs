use std::env;

use anyhow::Context;
use tracing::{error, info, instrument};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Registry};
use wallet_shell_core::logging::formatter::ShellFormatter;

mod application_service_factory;
mod cli_adapter;

use application_service_factory::ApplicationServiceFactory;
use cli_adapter::CliAdapter;

/// Set to a file path to mirror logs there without ANSI colors.
const LOG_FILE_ENV: &str = "WALLET_SHELL_LOG";

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing()?;
    setup_panic_hook();

    let args: Vec<String> = env::args().collect();

    info!("Starting wallet-shell CLI");

    let context = ApplicationServiceFactory::create()?;
    let cli_adapter = CliAdapter::new(context);

    match cli_adapter.run(args).await {
        Ok(_) => {
            info!("CLI execution completed successfully");
            Ok(())
        }
        Err(e) => {
            error!("CLI execution failed: {:?}", e);
            Err(e)
        }
    }
}

fn setup_tracing() -> anyhow::Result<()> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .event_format(ShellFormatter::new(true))
        .with_writer(std::io::stderr);

    let log_file_layer = match env::var(LOG_FILE_ENV) {
        Ok(path) => {
            let file = std::fs::File::create(&path)
                .with_context(|| format!("Failed to create log file {path}"))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .event_format(ShellFormatter::new(false))
                    .with_writer(file)
                    .with_ansi(false),
            )
        }
        Err(_) => None,
    };

    Registry::default()
        .with(
            tracing_subscriber::filter::Targets::new()
                .with_target("wallet_shell", tracing::Level::INFO)
                .with_target("wallet_shell_core", tracing::Level::TRACE),
        )
        .with(log_file_layer)
        .with(stderr_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

fn setup_panic_hook() {
    tracing::trace!("Setting panic hook");
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("panic: {info}");
    }));
}
