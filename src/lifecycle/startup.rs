//! Startup helpers shared by the service binaries.

use tokio::net::TcpListener;

use crate::config::ListenerConfig;

/// Error type for fatal startup failures.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
}

/// Bind the TCP listener described by `config`.
pub async fn bind_listener(config: &ListenerConfig) -> Result<TcpListener, StartupError> {
    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| StartupError::Bind {
            address: address.clone(),
            source,
        })?;

    match listener.local_addr() {
        Ok(local) => tracing::info!(address = %local, "Listening for connections"),
        Err(_) => tracing::info!(address = %address, "Listening for connections"),
    }
    Ok(listener)
}
