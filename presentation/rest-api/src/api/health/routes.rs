use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
    /// Product store backend in use (`postgres` or `memory`)
    pub store: String,
}

/// Liveness probe for orchestrators and load balancers.
pub struct Api {
    store: &'static str,
}

impl Api {
    pub fn new(store: &'static str) -> Self {
        Self { store }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Returns `healthy` while the process is serving requests, together with the
    /// server time, the crate version and the configured store backend.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            store: self.store.to_string(),
        })
    }
}
