//! # Insta Reply
//!
//! Webhook service bridging Instagram comment, mention and direct-message
//! events to automated replies. Verifies each delivery's signature, routes
//! its sub-events through keyword triggers and answers over the Graph API.

pub mod config;
pub mod consts;
pub mod errors;
pub mod keepalive;
pub mod logger;
pub mod server;
pub mod webhook;

use anyhow::Context;
use envconfig::Envconfig;
use ntex::web;
use webhook::instagram::client::GraphClient;

#[ntex::main]
async fn main() -> anyhow::Result<()> {
    logger::setup_simple_logger()?;
    logger::install_panic_hook();

    let app_config = config::AppConfig::init_from_env()
        .context("failed to load application configuration")?;
    app_config.warn_missing_secrets();

    keepalive::start(app_config.keepalive_interval_secs);

    configure_and_run_server(app_config).await
}

/// Configures and starts the web server
async fn configure_and_run_server(app_config: config::AppConfig) -> anyhow::Result<()> {
    let graph_client = GraphClient::new(&app_config)
        .context("failed to create the Graph API client")?;

    let server_addr = (
        app_config.web_server_host.clone(),
        app_config.web_server_port,
    );

    log::info!(
        "starting web server on {host}:{port}",
        host = server_addr.0,
        port = server_addr.1
    );

    web::server(move || {
        web::App::new()
            .wrap(web::middleware::Logger::default())
            .wrap(web::middleware::Compress::default())
            .state(server::AppState {
                config: app_config.clone(),
                messenger: Box::new(graph_client.clone()),
            })
            .configure(webhook::routes::instagram)
            .service((server::index, server::health))
            .default_service(web::route().to(server::serve_not_found))
    })
    .bind(server_addr)?
    .run()
    .await
    .map_err(|e| anyhow::anyhow!("server error: {e}"))
}
