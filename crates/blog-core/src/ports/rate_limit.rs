//! Rate limiting port.

use async_trait::async_trait;
use std::time::Duration;

/// Process-wide rate limiter - one budget shared across all clients.
#[async_trait]
pub trait RateLimiter: Send + Sync {
    /// Check whether the next request fits the budget and update the counter.
    async fn check(&self) -> Result<RateLimitResult, RateLimitError>;
}

/// Result of a rate limit check.
#[derive(Debug, Clone)]
pub struct RateLimitResult {
    pub allowed: bool,
    pub remaining: u32,
    pub reset_after: Duration,
}

/// Rate limit errors.
#[derive(Debug, thiserror::Error)]
pub enum RateLimitError {
    #[error("Backend error: {0}")]
    Backend(String),
}
