//! # Blog Core
//!
//! The domain layer of the blog CMS.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{FieldError, RepoError};
