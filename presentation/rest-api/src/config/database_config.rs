use std::env;
use std::sync::Arc;

use business::domain::product::repository::ProductRepository;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use persistence::product::memory::ProductRepositoryInMemory;
use persistence::product::repository::ProductRepositoryPostgres;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("config.invalid_max_connections: {0}")]
    InvalidMaxConnections(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostgresSettings {
    pub url: String,
    pub max_connections: u32,
    pub migrations_path: String,
}

/// Which product store backs the service.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreConfig {
    Postgres(PostgresSettings),
    InMemory,
}

impl StoreConfig {
    /// Load store configuration from environment variables
    ///
    /// Environment variables:
    /// - DATABASE_URL: PostgreSQL connection string; the in-memory store is used when unset
    /// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
    /// - MIGRATIONS_PATH: SQL migrations directory (default: "infrastructure/persistence/migrations")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            env::var("DATABASE_URL").ok(),
            env::var("DATABASE_MAX_CONNECTIONS").ok(),
            env::var("MIGRATIONS_PATH").ok(),
        )
    }

    fn from_vars(
        database_url: Option<String>,
        max_connections: Option<String>,
        migrations_path: Option<String>,
    ) -> Result<Self, ConfigError> {
        let Some(url) = database_url.filter(|url| !url.trim().is_empty()) else {
            return Ok(StoreConfig::InMemory);
        };

        let max_connections = match max_connections {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::InvalidMaxConnections(raw))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(StoreConfig::Postgres(PostgresSettings {
            url,
            max_connections,
            migrations_path: migrations_path
                .unwrap_or_else(|| DEFAULT_MIGRATIONS_PATH.to_string()),
        }))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            StoreConfig::Postgres(_) => "postgres",
            StoreConfig::InMemory => "memory",
        }
    }
}

/// Builds the product repository selected by `config`
///
/// For PostgreSQL this connects the pool and applies pending migrations.
///
/// # Errors
/// Returns error if the connection or the migrations fail
pub async fn init_repository(config: &StoreConfig) -> anyhow::Result<Arc<dyn ProductRepository>> {
    match config {
        StoreConfig::Postgres(settings) => {
            let pool = create_postgres_pool(
                &DatabaseConfig::new(settings.url.clone())
                    .with_max_connections(settings.max_connections),
            )
            .await?;
            run_migrations(&pool, &settings.migrations_path).await?;
            tracing::info!("Using PostgreSQL product store");
            Ok(Arc::new(ProductRepositoryPostgres::new(pool)))
        }
        StoreConfig::InMemory => {
            tracing::warn!("DATABASE_URL not set, products are kept in memory only");
            Ok(Arc::new(ProductRepositoryInMemory::new()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_fall_back_to_memory_without_database_url() {
        let config = StoreConfig::from_vars(None, None, None).unwrap();

        assert_eq!(config, StoreConfig::InMemory);
        assert_eq!(config.kind(), "memory");
    }

    #[test]
    fn should_treat_blank_database_url_as_unset() {
        let config = StoreConfig::from_vars(Some("  ".to_string()), None, None).unwrap();

        assert_eq!(config, StoreConfig::InMemory);
    }

    #[test]
    fn should_use_postgres_defaults_when_url_given() {
        let config =
            StoreConfig::from_vars(Some("postgres://localhost/products".to_string()), None, None)
                .unwrap();

        assert_eq!(
            config,
            StoreConfig::Postgres(PostgresSettings {
                url: "postgres://localhost/products".to_string(),
                max_connections: DEFAULT_MAX_CONNECTIONS,
                migrations_path: DEFAULT_MIGRATIONS_PATH.to_string(),
            })
        );
        assert_eq!(config.kind(), "postgres");
    }

    #[test]
    fn should_reject_invalid_pool_size() {
        let result = StoreConfig::from_vars(
            Some("postgres://localhost/products".to_string()),
            Some("zero".to_string()),
            None,
        );

        assert_eq!(
            result.unwrap_err(),
            ConfigError::InvalidMaxConnections("zero".to_string())
        );
    }

    #[tokio::test]
    async fn should_build_in_memory_repository() {
        let repository = init_repository(&StoreConfig::InMemory).await.unwrap();

        assert!(repository.find_all().await.unwrap().is_empty());
    }
}
