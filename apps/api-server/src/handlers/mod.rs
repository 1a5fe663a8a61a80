//! HTTP handlers and route configuration.

mod blogs;
mod health;

use actix_web::{HttpResponse, error::InternalError, web};
use blog_shared::ErrorBody;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(ErrorBody::new("Malformed request body"));
        InternalError::from_response(err, response).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(ErrorBody::new("Invalid query parameters"));
        InternalError::from_response(err, response).into()
    }))
    .route("/health", web::get().to(health::health_check))
    .service(
        web::scope("/blogs")
            .route("", web::post().to(blogs::create))
            .route("", web::get().to(blogs::get_all))
            .route("/{id}", web::get().to(blogs::get_by_id))
            .route("/{id}", web::put().to(blogs::update))
            .route("/{id}", web::delete().to(blogs::delete)),
    );
}
