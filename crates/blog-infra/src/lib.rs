//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`:
//! the SeaORM-backed entity store and the governor-based rate limiter.

pub mod database;
pub mod rate_limit;

pub use database::{DatabaseConfig, SqlPostRepository, connect};
pub use rate_limit::{InMemoryRateLimiter, RateLimitConfig};
