use async_trait::async_trait;

use crate::domain::{BlogPost, NewPost, PostPage, PostQuery};
use crate::error::RepoError;

/// Blog post repository - the Entity Store boundary.
///
/// The store assigns ids on insert; callers never pick them. Updates replace
/// the mutable fields of an existing row and are last-write-wins.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Persist a draft and return the stored row with its assigned id.
    async fn insert(&self, draft: NewPost) -> Result<BlogPost, RepoError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: i32) -> Result<Option<BlogPost>, RepoError>;

    /// Replace the mutable fields of an existing row.
    /// Fails with [`RepoError::NotFound`] if the row no longer exists.
    async fn update(&self, post: BlogPost) -> Result<BlogPost, RepoError>;

    /// Delete a post by id.
    /// Fails with [`RepoError::NotFound`] if no row was removed.
    async fn delete(&self, id: i32) -> Result<(), RepoError>;

    /// Execute a normalized list query, returning one page of rows ordered by
    /// `created_at` descending plus the pre-pagination total.
    async fn list(&self, query: &PostQuery) -> Result<PostPage, RepoError>;
}
