use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Loads configuration, builds the product store, wires the use cases and
/// starts the HTTP server.
/// - config/: Application configuration (server, CORS, product store)
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers, DTOs and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Initialize the product store
    let repository = database_config::init_repository(&config.store).await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(repository, config.store.kind());

    // 6. Run server
    Server::run(config, container).await
}
