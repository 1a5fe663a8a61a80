//! Ports - trait boundaries implemented by the infrastructure layer.

pub mod rate_limit;
pub mod repository;

pub use rate_limit::{RateLimitError, RateLimitResult, RateLimiter};
pub use repository::PostRepository;
