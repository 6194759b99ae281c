use std::io;
use std::process::ExitCode;

use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use transit_router::config::RouterConfig;
use transit_router::ingest::{load_network, load_passengers};
use transit_router::menu::Menu;

fn main() -> ExitCode {
    // Logs, the menu and prompts go to stderr; stdout carries only results
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = match RouterConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let network = match load_network(&config.data, &config.cache) {
        Ok(network) => network,
        Err(e) => {
            error!("Failed to load network: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Routes between stop ids still work without passengers
    let passengers = load_passengers(&config.data.passengers).unwrap_or_else(|e| {
        warn!("Passenger list unavailable: {e}");
        Vec::new()
    });

    let menu = Menu::new(&network, &passengers, config.output);
    if let Err(e) = menu.run(io::stdin().lock(), io::stdout().lock(), io::stderr()) {
        error!("Console error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
