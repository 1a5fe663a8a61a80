//! # Blog API Server
//!
//! The main entry point for the Actix-web HTTP server.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

use blog_core::ports::RateLimiter;
use blog_infra::InMemoryRateLimiter;

mod config;
mod handlers;
mod middleware;
mod state;

use config::AppConfig;
use middleware::rate_limit::RateLimitMiddleware;
use state::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    // Load configuration
    let config = AppConfig::from_env()?;

    tracing::info!(
        "Starting Blog API server on {}:{}",
        config.host,
        config.port
    );

    // Build application state. A misconfigured or unreachable store aborts
    // startup instead of falling back to an alternate backend.
    let state = AppState::new(&config.database)
        .await
        .context("failed to connect to the database")?;

    let limiter: Arc<dyn RateLimiter> = Arc::new(InMemoryRateLimiter::from_env());
    let cors_origin = config.cors_allowed_origin.clone();

    // Start HTTP server
    HttpServer::new(move || {
        let cors = match &cors_origin {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .allow_any_header()
                .allow_any_method()
                .supports_credentials(),
            None => Cors::permissive(),
        };

        // Middleware runs in reverse registration order: logging, then CORS,
        // then the rate limit check.
        App::new()
            .wrap(RateLimitMiddleware::new(limiter.clone()))
            .wrap(cors)
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,api_server=debug,blog_infra=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}
