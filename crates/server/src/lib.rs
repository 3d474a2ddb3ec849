//! NewsLens HTTP Server
//!
//! Actix-web REST API for fake news detection and article summarization

mod routes;
mod state;
mod types;

pub use state::AppState;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use newslens_common::{AppConfig, NewsLensError, Result};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

/// Start the HTTP server; runs until shutdown
pub async fn start_server(config: AppConfig) -> Result<()> {
    config.validate()?;

    let bind_address = config.server_bind_address();
    let frontend_url = config.frontend_url.clone();
    let state = Arc::new(AppState::new(config)?);

    info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        // Only the configured frontend origin is allowed when one is set
        let cors = match &frontend_url {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .allow_any_method()
                .allow_any_header()
                .supports_credentials(),
            None => Cors::permissive(),
        };

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(web::Data::new(state.clone()))
            .service(routes::detect_fake_news)
            .service(routes::summarize_article)
            .service(routes::health)
    })
    .bind(&bind_address)
    .map_err(|e| NewsLensError::config(format!("Failed to bind {}: {}", bind_address, e)))?
    .run()
    .await?;

    Ok(())
}
