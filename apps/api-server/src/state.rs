//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::PostRepository;
use blog_infra::{DatabaseConfig, SqlPostRepository, connect};

/// Shared application state.
///
/// The repository is an injected capability, not a process-wide singleton,
/// so handlers stay testable against an in-memory implementation.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Connect to the configured store and build the state around it.
    pub async fn new(config: &DatabaseConfig) -> anyhow::Result<Self> {
        let db = connect(config).await?;

        tracing::info!("Application state initialized");

        Ok(Self {
            posts: Arc::new(SqlPostRepository::new(db)),
        })
    }
}
