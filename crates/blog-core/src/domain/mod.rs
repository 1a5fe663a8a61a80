//! Domain entities and pure business rules.

pub mod post;
pub mod query;

pub use post::{BlogPost, NewPost, validate_fields};
pub use query::{PostPage, PostQuery};
