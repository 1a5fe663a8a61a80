//! Database connection management and the blog post repository.

mod connections;
pub mod entity;
mod repo;

pub use connections::{DatabaseConfig, connect};
pub use repo::SqlPostRepository;
