use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FieldError;

/// Maximum length of the title field.
pub const TITLE_MAX_LEN: usize = 150;
/// Minimum length of the content field.
pub const CONTENT_MIN_LEN: usize = 10;
/// Maximum length of the author field.
pub const AUTHOR_MAX_LEN: usize = 100;

/// BlogPost entity - the sole entity of the system.
///
/// `id` is store-assigned and immutable; `created_at` is set once at creation.
/// `created_at <= updated_at` holds for every persisted row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A blog post draft - everything but the store-assigned id.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewPost {
    /// Create a draft with both timestamps stamped to the same UTC instant.
    pub fn new(title: String, content: String, author: String) -> Self {
        let now = Utc::now();
        Self {
            title,
            content,
            author,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Validate the mutable fields of a post, collecting one message per violation.
///
/// Invoked before any store mutation; an empty result means the fields are
/// acceptable for persistence.
pub fn validate_fields(title: &str, content: &str, author: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if title.trim().is_empty() {
        errors.push(FieldError::new("title", "The title field is required."));
    } else if title.chars().count() > TITLE_MAX_LEN {
        errors.push(FieldError::new(
            "title",
            format!("The title field must be at most {TITLE_MAX_LEN} characters."),
        ));
    }

    if content.trim().is_empty() {
        errors.push(FieldError::new("content", "The content field is required."));
    } else if content.chars().count() < CONTENT_MIN_LEN {
        errors.push(FieldError::new(
            "content",
            format!("The content field must be at least {CONTENT_MIN_LEN} characters."),
        ));
    }

    if author.trim().is_empty() {
        errors.push(FieldError::new("author", "The author field is required."));
    } else if author.chars().count() > AUTHOR_MAX_LEN {
        errors.push(FieldError::new(
            "author",
            format!("The author field must be at most {AUTHOR_MAX_LEN} characters."),
        ));
    }

    errors
}
