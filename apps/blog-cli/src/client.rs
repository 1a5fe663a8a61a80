//! Typed HTTP client for the blog API.

use std::collections::BTreeMap;

use reqwest::StatusCode;
use thiserror::Error;

use blog_shared::dto::{
    BlogPostResponse, CreateBlogPostRequest, PagedResponse, UpdateBlogPostRequest,
};
use blog_shared::{ErrorBody, ValidationErrorBody};

/// Client-side error taxonomy mirroring the server's status mapping.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("blog post not found")]
    NotFound,

    /// Field-keyed validation messages as returned by the server.
    #[error("validation failed")]
    Validation(BTreeMap<String, Vec<String>>),

    /// Any other error the server reported with a message body.
    #[error("{0}")]
    Api(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Optional query parameters for the list view.
///
/// Values are passed through verbatim; the server normalizes paging and
/// parses the date bounds.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub author: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub search: Option<String>,
}

/// Typed API client over the `/blogs` surface.
pub struct BlogApiClient {
    http: reqwest::Client,
    base: String,
}

impl BlogApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub async fn create(
        &self,
        req: &CreateBlogPostRequest,
    ) -> Result<BlogPostResponse, ClientError> {
        let res = self.http.post(self.url("/blogs")).json(req).send().await?;
        decode(res).await
    }

    pub async fn list(
        &self,
        opts: &ListOptions,
    ) -> Result<PagedResponse<BlogPostResponse>, ClientError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(page) = opts.page {
            query.push(("page", page.to_string()));
        }
        if let Some(size) = opts.page_size {
            query.push(("pageSize", size.to_string()));
        }
        if let Some(author) = &opts.author {
            query.push(("author", author.clone()));
        }
        if let Some(from) = &opts.from {
            query.push(("from", from.clone()));
        }
        if let Some(to) = &opts.to {
            query.push(("to", to.clone()));
        }
        if let Some(search) = &opts.search {
            query.push(("search", search.clone()));
        }

        let res = self
            .http
            .get(self.url("/blogs"))
            .query(&query)
            .send()
            .await?;
        decode(res).await
    }

    pub async fn get(&self, id: i32) -> Result<BlogPostResponse, ClientError> {
        let res = self.http.get(self.url(&format!("/blogs/{id}"))).send().await?;
        decode(res).await
    }

    pub async fn update(
        &self,
        req: &UpdateBlogPostRequest,
    ) -> Result<BlogPostResponse, ClientError> {
        let res = self
            .http
            .put(self.url(&format!("/blogs/{}", req.id)))
            .json(req)
            .send()
            .await?;
        decode(res).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), ClientError> {
        let res = self
            .http
            .delete(self.url(&format!("/blogs/{id}")))
            .send()
            .await?;

        if res.status().is_success() {
            Ok(())
        } else {
            Err(error_from(res).await)
        }
    }
}

async fn decode<T: serde::de::DeserializeOwned>(res: reqwest::Response) -> Result<T, ClientError> {
    if res.status().is_success() {
        Ok(res.json::<T>().await?)
    } else {
        Err(error_from(res).await)
    }
}

async fn error_from(res: reqwest::Response) -> ClientError {
    let status = res.status();
    let body = res.text().await.unwrap_or_default();
    parse_error(status, &body)
}

/// Map a non-success response body to a structured client error.
fn parse_error(status: StatusCode, body: &str) -> ClientError {
    if let Ok(validation) = serde_json::from_str::<ValidationErrorBody>(body) {
        return ClientError::Validation(validation.errors);
    }
    if let Ok(simple) = serde_json::from_str::<ErrorBody>(body) {
        if status == StatusCode::NOT_FOUND {
            return ClientError::NotFound;
        }
        return ClientError::Api(simple.error);
    }
    ClientError::Api(format!("unexpected response ({status})"))
}
