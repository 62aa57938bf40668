//! Application state for the Axum router.

use crate::config::AuthConfig;
use crate::db::AsyncDbPool;
use crate::repositories::Repositories;
use crate::services::Services;

/// Shared state available to every request handler.
///
/// Cloning is cheap: services hold `Arc`-backed repositories and the pool
/// is reference-counted internally.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
    /// Direct pool access for health checks
    pub db_pool: AsyncDbPool,
    /// Token verification configuration
    pub auth_config: AuthConfig,
}

impl AppState {
    /// Creates state with Postgres-backed repositories sharing `pool`.
    pub fn new(pool: AsyncDbPool, auth_config: AuthConfig) -> Self {
        let repos = Repositories::postgres(pool.clone());
        let services = Services::new(repos);
        Self {
            services,
            db_pool: pool,
            auth_config,
        }
    }
}
