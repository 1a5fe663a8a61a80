//! Blog post CRUD handlers.

use actix_web::{HttpResponse, http::header, web};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;

use blog_core::domain::{NewPost, PostQuery, validate_fields};
use blog_shared::dto::{
    BlogPostResponse, CreateBlogPostRequest, PagedResponse, UpdateBlogPostRequest,
};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /blogs
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreateBlogPostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let errors = validate_fields(&req.title, &req.content, &req.author);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    // Server assigns the timestamps; anything client-supplied was dropped at
    // deserialization.
    let draft = NewPost::new(req.title, req.content, req.author);
    let post = state.posts.insert(draft).await?;

    let location = format!("/blogs/{}", post.id);
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .json(BlogPostResponse::from(post)))
}

/// Query parameters for GET /blogs.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogListParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub author: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub search: Option<String>,
}

/// GET /blogs
pub async fn get_all(
    state: web::Data<AppState>,
    params: web::Query<BlogListParams>,
) -> AppResult<HttpResponse> {
    let params = params.into_inner();

    let from = params
        .from
        .as_deref()
        .map(|raw| parse_bound(raw, "from"))
        .transpose()?;
    let to = params
        .to
        .as_deref()
        .map(|raw| parse_bound(raw, "to"))
        .transpose()?;

    let query = PostQuery::normalized(
        params.page.unwrap_or(1),
        params.page_size.unwrap_or(10),
        params.author,
        from,
        to,
        params.search,
    );

    let page = state.posts.list(&query).await?;

    Ok(HttpResponse::Ok().json(PagedResponse {
        page: query.page,
        page_size: query.page_size,
        total: page.total,
        items: page
            .items
            .into_iter()
            .map(BlogPostResponse::from)
            .collect::<Vec<_>>(),
    }))
}

/// GET /blogs/{id}
pub async fn get_by_id(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(HttpResponse::Ok().json(BlogPostResponse::from(post)))
}

/// PUT /blogs/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<UpdateBlogPostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    // Keep payload and route consistent
    if id != req.id {
        return Err(AppError::BadRequest("Mismatched id".to_string()));
    }

    let errors = validate_fields(&req.title, &req.content, &req.author);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let mut post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound)?;

    // Wholesale replacement of the mutable fields; id and created_at stay.
    post.title = req.title;
    post.content = req.content;
    post.author = req.author;
    post.updated_at = Utc::now();

    let post = state.posts.update(post).await?;

    Ok(HttpResponse::Ok().json(BlogPostResponse::from(post)))
}

/// DELETE /blogs/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    state.posts.delete(id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Parse an inclusive `created_at` bound: RFC 3339, or a bare date taken as
/// midnight UTC.
fn parse_bound(raw: &str, field: &'static str) -> Result<DateTime<Utc>, AppError> {
    if let Ok(ts) = raw.parse::<DateTime<Utc>>() {
        return Ok(ts);
    }
    if let Ok(date) = raw.parse::<NaiveDate>() {
        return Ok(DateTime::from_naive_utc_and_offset(
            date.and_time(NaiveTime::MIN),
            Utc,
        ));
    }
    Err(AppError::BadRequest(format!("Invalid '{field}' date")))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::time::Duration;

    use actix_web::{App, test};
    use async_trait::async_trait;
    use serde_json::{Value, json};

    use blog_core::domain::{BlogPost, NewPost, PostPage, PostQuery};
    use blog_core::error::RepoError;
    use blog_core::ports::PostRepository;

    use super::*;
    use crate::handlers::configure_routes;

    /// In-memory repository mirroring the store contract.
    struct MemoryPostRepository {
        posts: Mutex<Vec<BlogPost>>,
        next_id: AtomicI32,
    }

    impl MemoryPostRepository {
        fn new() -> Self {
            Self {
                posts: Mutex::new(Vec::new()),
                next_id: AtomicI32::new(1),
            }
        }
    }

    #[async_trait]
    impl PostRepository for MemoryPostRepository {
        async fn insert(&self, draft: NewPost) -> Result<BlogPost, RepoError> {
            let post = BlogPost {
                id: self.next_id.fetch_add(1, Ordering::SeqCst),
                title: draft.title,
                content: draft.content,
                author: draft.author,
                created_at: draft.created_at,
                updated_at: draft.updated_at,
            };
            self.posts.lock().unwrap().push(post.clone());
            Ok(post)
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<BlogPost>, RepoError> {
            Ok(self
                .posts
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.id == id)
                .cloned())
        }

        async fn update(&self, post: BlogPost) -> Result<BlogPost, RepoError> {
            let mut posts = self.posts.lock().unwrap();
            let slot = posts
                .iter_mut()
                .find(|p| p.id == post.id)
                .ok_or(RepoError::NotFound)?;
            *slot = post.clone();
            Ok(post)
        }

        async fn delete(&self, id: i32) -> Result<(), RepoError> {
            let mut posts = self.posts.lock().unwrap();
            let before = posts.len();
            posts.retain(|p| p.id != id);
            if posts.len() == before {
                return Err(RepoError::NotFound);
            }
            Ok(())
        }

        async fn list(&self, query: &PostQuery) -> Result<PostPage, RepoError> {
            let posts = self.posts.lock().unwrap();
            let mut matching: Vec<BlogPost> = posts
                .iter()
                .filter(|p| {
                    query
                        .author
                        .as_ref()
                        .map_or(true, |a| p.author.contains(a.as_str()))
                        && query.from.map_or(true, |f| p.created_at >= f)
                        && query.to.map_or(true, |t| p.created_at <= t)
                        && query.search.as_ref().map_or(true, |s| {
                            p.title.contains(s.as_str()) || p.content.contains(s.as_str())
                        })
                })
                .cloned()
                .collect();
            matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

            let total = matching.len() as u64;
            let items = matching
                .into_iter()
                .skip(query.offset() as usize)
                .take(query.page_size as usize)
                .collect();

            Ok(PostPage { total, items })
        }
    }

    fn test_state() -> AppState {
        AppState {
            posts: Arc::new(MemoryPostRepository::new()),
        }
    }

    macro_rules! test_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state.clone()))
                    .configure(configure_routes),
            )
            .await
        };
    }

    fn valid_body(title: &str) -> Value {
        json!({
            "title": title,
            "content": "This is a sufficiently long body.",
            "author": "Jane",
        })
    }

    #[actix_web::test]
    async fn create_returns_201_with_location_and_fresh_timestamps() {
        let app = test_app!(test_state());

        let req = test::TestRequest::post()
            .uri("/blogs")
            .set_json(valid_body("Hello"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), 201);
        let location = res.headers().get(header::LOCATION).unwrap();
        assert_eq!(location.to_str().unwrap(), "/blogs/1");

        let body: BlogPostResponse = test::read_body_json(res).await;
        assert_eq!(body.id, 1);
        assert_eq!(body.title, "Hello");
        assert_eq!(body.created_at, body.updated_at);
    }

    #[actix_web::test]
    async fn created_ids_are_unique_and_fresh() {
        let app = test_app!(test_state());

        let mut seen = Vec::new();
        for i in 0..3 {
            let req = test::TestRequest::post()
                .uri("/blogs")
                .set_json(valid_body(&format!("Post {i}")))
                .to_request();
            let body: BlogPostResponse =
                test::call_and_read_body_json(&app, req).await;
            assert!(!seen.contains(&body.id));
            seen.push(body.id);
        }
    }

    #[actix_web::test]
    async fn create_with_short_content_names_the_content_field() {
        let app = test_app!(test_state());

        let req = test::TestRequest::post()
            .uri("/blogs")
            .set_json(json!({"title": "Hello", "content": "short", "author": "Jane"}))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), 400);
        let body: Value = test::read_body_json(res).await;
        let messages = body["errors"]["content"].as_array().unwrap();
        assert!(messages[0].as_str().unwrap().contains("at least 10"));
    }

    #[actix_web::test]
    async fn create_with_missing_fields_reports_each_field() {
        let app = test_app!(test_state());

        let req = test::TestRequest::post()
            .uri("/blogs")
            .set_json(json!({}))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), 400);
        let body: Value = test::read_body_json(res).await;
        for field in ["title", "content", "author"] {
            assert!(body["errors"][field].is_array(), "missing {field}");
        }
    }

    #[actix_web::test]
    async fn get_missing_post_returns_404() {
        let app = test_app!(test_state());

        let req = test::TestRequest::get().uri("/blogs/999").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), 404);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "Blog post not found");
    }

    #[actix_web::test]
    async fn update_with_mismatched_id_leaves_the_row_unchanged() {
        let app = test_app!(test_state());

        let req = test::TestRequest::post()
            .uri("/blogs")
            .set_json(valid_body("Original"))
            .to_request();
        let created: BlogPostResponse = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::put()
            .uri(&format!("/blogs/{}", created.id))
            .set_json(json!({
                "id": created.id + 1,
                "title": "Changed",
                "content": "This is a sufficiently long body.",
                "author": "Jane",
            }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), 400);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "Mismatched id");

        let req = test::TestRequest::get()
            .uri(&format!("/blogs/{}", created.id))
            .to_request();
        let fetched: BlogPostResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched.title, "Original");
    }

    #[actix_web::test]
    async fn update_of_missing_post_returns_404() {
        let app = test_app!(test_state());

        let req = test::TestRequest::put()
            .uri("/blogs/42")
            .set_json(json!({
                "id": 42,
                "title": "Hello",
                "content": "This is a sufficiently long body.",
                "author": "Jane",
            }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), 404);
    }

    #[actix_web::test]
    async fn full_lifecycle_create_read_update_delete() {
        let app = test_app!(test_state());

        // Create
        let req = test::TestRequest::post()
            .uri("/blogs")
            .set_json(valid_body("Hello"))
            .to_request();
        let created: BlogPostResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(created.created_at, created.updated_at);

        // Read back
        let req = test::TestRequest::get()
            .uri(&format!("/blogs/{}", created.id))
            .to_request();
        let fetched: BlogPostResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched.title, created.title);

        // Update; keep the clock moving so updated_at strictly grows
        tokio::time::sleep(Duration::from_millis(5)).await;
        let req = test::TestRequest::put()
            .uri(&format!("/blogs/{}", created.id))
            .set_json(json!({
                "id": created.id,
                "title": "Hello 2",
                "content": "This is a sufficiently long body.",
                "author": "Jane",
            }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 200);
        let updated: BlogPostResponse = test::read_body_json(res).await;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Hello 2");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);

        // Delete
        let req = test::TestRequest::delete()
            .uri(&format!("/blogs/{}", created.id))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 204);

        // Gone
        let req = test::TestRequest::get()
            .uri(&format!("/blogs/{}", created.id))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 404);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "Blog post not found");
    }

    #[actix_web::test]
    async fn delete_of_missing_post_returns_404() {
        let app = test_app!(test_state());

        let req = test::TestRequest::delete().uri("/blogs/7").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), 404);
    }

    #[actix_web::test]
    async fn list_coerces_out_of_range_paging() {
        let app = test_app!(test_state());

        let req = test::TestRequest::get()
            .uri("/blogs?page=0&pageSize=500")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["page"], 1);
        assert_eq!(body["pageSize"], 10);
    }

    #[actix_web::test]
    async fn list_orders_newest_first_and_counts_all_matches() {
        let state = test_state();
        let app = test_app!(state);

        for title in ["First", "Second", "Third"] {
            let req = test::TestRequest::post()
                .uri("/blogs")
                .set_json(valid_body(title))
                .to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), 201);
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        let req = test::TestRequest::get()
            .uri("/blogs?page=1&pageSize=2")
            .to_request();
        let body: PagedResponse<BlogPostResponse> =
            test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.total, 3);
        assert_eq!(body.items.len(), 2);
        assert_eq!(body.items[0].title, "Third");
        assert_eq!(body.items[1].title, "Second");
        assert!(body.items[0].created_at > body.items[1].created_at);
    }

    #[actix_web::test]
    async fn list_filters_by_author_and_search() {
        let app = test_app!(test_state());

        for (title, content, author) in [
            ("Rust tips", "This is a post about borrowing.", "Jane"),
            ("Gardening", "Bananas need plenty of sunshine.", "Jane"),
            ("Rust intro", "This is a beginner level overview.", "John"),
        ] {
            let req = test::TestRequest::post()
                .uri("/blogs")
                .set_json(json!({"title": title, "content": content, "author": author}))
                .to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), 201);
        }

        // Author substring match
        let req = test::TestRequest::get().uri("/blogs?author=Jane").to_request();
        let body: PagedResponse<BlogPostResponse> =
            test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.total, 2);

        // Search hits title OR content
        let req = test::TestRequest::get().uri("/blogs?search=Rust").to_request();
        let body: PagedResponse<BlogPostResponse> =
            test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.total, 2);

        let req = test::TestRequest::get()
            .uri("/blogs?search=Bananas")
            .to_request();
        let body: PagedResponse<BlogPostResponse> =
            test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.total, 1);

        // Conjunctive: author AND search
        let req = test::TestRequest::get()
            .uri("/blogs?author=Jane&search=Rust")
            .to_request();
        let body: PagedResponse<BlogPostResponse> =
            test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.total, 1);
    }

    #[actix_web::test]
    async fn list_filters_by_creation_date_bounds() {
        let state = test_state();
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/blogs")
            .set_json(valid_body("Dated"))
            .to_request();
        let created: BlogPostResponse = test::call_and_read_body_json(&app, req).await;

        // A bound in the future excludes the post
        let req = test::TestRequest::get()
            .uri("/blogs?from=2999-01-01")
            .to_request();
        let body: PagedResponse<BlogPostResponse> =
            test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.total, 0);

        // An inclusive bound at the exact timestamp keeps it
        let uri = format!(
            "/blogs?from={}",
            created.created_at.to_rfc3339().replace('+', "%2B")
        );
        let req = test::TestRequest::get().uri(&uri).to_request();
        let body: PagedResponse<BlogPostResponse> =
            test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.total, 1);
    }

    #[actix_web::test]
    async fn invalid_date_bound_is_a_bad_request() {
        let app = test_app!(test_state());

        let req = test::TestRequest::get()
            .uri("/blogs?from=not-a-date")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), 400);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "Invalid 'from' date");
    }
}
