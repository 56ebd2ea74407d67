//! Guardian supply-chain demo service: the workload shipped in the signed image.

use guardian_demos::config::load_from_env;
use guardian_demos::lifecycle::{signals::wait_for_signal, startup::bind_listener};
use guardian_demos::observability::logging::init_logging;
use guardian_demos::supply_chain;
use guardian_demos::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_from_env(supply_chain::SERVICE_NAME)?;
    init_logging(&config.logging)?;

    tracing::info!(
        bind_address = %config.listener.bind_address(),
        "Supply chain demo starting"
    );

    let listener = bind_listener(&config.listener).await?;

    HttpServer::new(supply_chain::router(&config.timeouts))
        .run(listener, wait_for_signal())
        .await?;

    tracing::info!("Supply chain demo stopped");
    Ok(())
}
