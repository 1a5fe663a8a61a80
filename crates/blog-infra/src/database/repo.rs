//! SeaORM-backed blog post repository.

use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DbConn, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Select,
};

use blog_core::domain::{BlogPost, NewPost, PostPage, PostQuery};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use super::entity::blog_post::{self, Entity as BlogPostEntity};

/// Blog post repository over a SeaORM connection (postgres or sqlite).
pub struct SqlPostRepository {
    db: DbConn,
}

impl SqlPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

/// Compose the filtered read query for a normalized [`PostQuery`].
///
/// All present filters are AND-combined; the text search is itself an OR over
/// title and content. Pagination and ordering are applied by the caller so
/// that the same select can feed the pre-pagination count.
pub(crate) fn filtered(query: &PostQuery) -> Select<BlogPostEntity> {
    let mut cond = Condition::all();

    if let Some(author) = &query.author {
        cond = cond.add(blog_post::Column::Author.contains(author));
    }
    if let Some(from) = query.from {
        cond = cond.add(blog_post::Column::CreatedAt.gte(from));
    }
    if let Some(to) = query.to {
        cond = cond.add(blog_post::Column::CreatedAt.lte(to));
    }
    if let Some(search) = &query.search {
        cond = cond.add(
            Condition::any()
                .add(blog_post::Column::Title.contains(search))
                .add(blog_post::Column::Content.contains(search)),
        );
    }

    BlogPostEntity::find().filter(cond)
}

fn query_err(e: DbErr) -> RepoError {
    RepoError::Query(e.to_string())
}

#[async_trait]
impl PostRepository for SqlPostRepository {
    async fn insert(&self, draft: NewPost) -> Result<BlogPost, RepoError> {
        let active = blog_post::ActiveModel {
            id: NotSet,
            title: Set(draft.title),
            content: Set(draft.content),
            author: Set(draft.author),
            created_at: Set(draft.created_at.into()),
            updated_at: Set(draft.updated_at.into()),
        };

        let model = active.insert(&self.db).await.map_err(query_err)?;
        Ok(model.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<BlogPost>, RepoError> {
        let result = BlogPostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }

    async fn update(&self, post: BlogPost) -> Result<BlogPost, RepoError> {
        // id and created_at are immutable and stay out of the UPDATE statement.
        let active = blog_post::ActiveModel {
            id: Unchanged(post.id),
            title: Set(post.title),
            content: Set(post.content),
            author: Set(post.author),
            created_at: Unchanged(post.created_at.into()),
            updated_at: Set(post.updated_at.into()),
        };

        let model = active.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => RepoError::NotFound,
            other => query_err(other),
        })?;

        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let result = BlogPostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }

    async fn list(&self, query: &PostQuery) -> Result<PostPage, RepoError> {
        let base = filtered(query);

        let total = base.clone().count(&self.db).await.map_err(query_err)?;

        let items = base
            .order_by_desc(blog_post::Column::CreatedAt)
            .offset(query.offset())
            .limit(query.page_size)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(PostPage {
            total,
            items: items.into_iter().map(Into::into).collect(),
        })
    }
}
