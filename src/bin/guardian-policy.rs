//! Guardian policy demo service.
//!
//! Serves an HTML page and a JSON health endpoint reporting the user id the
//! container runs as and whether it has root access. Unix only: the user id
//! comes from `getuid`.

use guardian_demos::config::load_from_env;
use guardian_demos::lifecycle::{signals::wait_for_signal, startup::bind_listener};
use guardian_demos::observability::logging::init_logging;
use guardian_demos::policy::{self, PolicyState, ProcessIdentity};
use guardian_demos::HttpServer;

#[cfg(unix)]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_from_env(policy::SERVICE_NAME)?;
    init_logging(&config.logging)?;

    let identity = ProcessIdentity::current();
    tracing::info!(
        port = config.listener.port,
        user_id = identity.user_id,
        root_access = identity.root_status(),
        health_endpoint = %format!("http://localhost:{}/health", config.listener.port),
        "Guardian policy demo starting"
    );
    if identity.is_root() {
        tracing::warn!("Running as root; admission policy should reject this container");
    }

    let listener = bind_listener(&config.listener).await?;

    let router = policy::router(PolicyState::new(identity), &config.timeouts);
    HttpServer::new(router).run(listener, wait_for_signal()).await?;

    tracing::info!("Guardian policy demo stopped");
    Ok(())
}

#[cfg(not(unix))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    Err("guardian-policy reports a unix user id and requires a unix host".into())
}
