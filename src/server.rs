//! Handlers not linked to the webhook integration

use crate::{config::AppConfig, errors, webhook::instagram::client::ImplMessenger};
use ntex::web;
use serde_json::json;

/// Shared per-worker application state.
///
/// Built once per server worker from the startup configuration; nothing in
/// it is mutated after construction.
pub struct AppState {
    pub config: AppConfig,
    pub messenger: ImplMessenger,
}

/// Endpoint with basic service information
#[web::get("/")]
pub async fn index(
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    Ok(web::HttpResponse::Ok().json(&json!({
        "service": "insta-reply",
        "env": app_state.config.env,
        "status": "running",
    })))
}

/// Liveness endpoint
#[web::get("/health")]
pub async fn health() -> Result<impl web::Responder, web::Error> {
    Ok(web::HttpResponse::Ok().json(&json!({ "status": "ok" })))
}

/// Return a [UrlNotFound](errors::UserError::UrlNotFound) error for urls not defined
pub async fn serve_not_found() -> Result<web::HttpResponse, web::Error> {
    Err(errors::UserError::UrlNotFound.into())
}
