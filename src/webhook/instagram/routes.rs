//! Webhook endpoint handlers.
//!
//! Implements the two endpoints the platform talks to: the subscription
//! verification handshake (GET) and the event receiver (POST).
//!
//! # Security
//!
//! The POST endpoint authenticates every delivery with the
//! `X-Hub-Signature-256` header before the body is parsed; see
//! [`super::security`]. A delivery that fails authentication is rejected
//! with 403 and its body is never processed. Once authenticated, the
//! delivery is always acknowledged with 200, whatever the handlers did —
//! the platform retries on error statuses and must not retry-storm over
//! handler failures.

use super::{handler, schemas, security};
use crate::{consts, errors, server::AppState};
use ntex::{util::Bytes, web};
use serde::Deserialize;

/// Query parameters for webhook verification
#[derive(Debug, Deserialize)]
pub struct VerifyQuery {
    /// The mode parameter, should be "subscribe"
    #[serde(rename = "hub.mode")]
    pub mode: String,
    /// The verification token configured on the platform dashboard
    #[serde(rename = "hub.verify_token")]
    pub verify_token: String,
    /// The challenge string to echo back
    #[serde(rename = "hub.challenge")]
    pub challenge: String,
}

/// Webhook verification endpoint (GET)
///
/// The platform sends a GET request when the webhook URL is subscribed.
/// Responds 200 with the raw challenge when the mode is "subscribe" and the
/// token matches the configured one, 403 otherwise.
#[web::get("")]
pub async fn verify(
    query: web::types::Query<VerifyQuery>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    if query.mode != "subscribe" {
        log::warn!(
            "webhook verification with unexpected mode '{mode}'",
            mode = query.mode
        );
        return Err(errors::UserError::Forbidden.into());
    }

    // an unset token must never verify
    let expected_token = &app_state.config.insta_verify_token;
    if expected_token.is_empty() || query.verify_token != *expected_token {
        log::warn!("webhook verification with wrong verify token");
        return Err(errors::UserError::Forbidden.into());
    }

    log::info!("webhook subscription verified");

    Ok(web::HttpResponse::Ok()
        .content_type("text/plain")
        .body(query.challenge.clone()))
}

/// Webhook receiver endpoint (POST)
///
/// Verifies the payload signature over the exact bytes received, decodes the
/// payload and hands it to the event router. Only authentication failures
/// surface as an error status; a verified delivery is acknowledged 200 even
/// when decoding or one of the handlers failed.
#[web::post("")]
pub async fn receive(
    req: web::HttpRequest,
    body: Bytes,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let signature = match req.headers().get(consts::SIGNATURE_HEADER) {
        Some(header_value) => match header_value.to_str() {
            Ok(value) => value,
            Err(_) => {
                log::warn!("{} header is not valid UTF-8", consts::SIGNATURE_HEADER);
                return Err(errors::UserError::Forbidden.into());
            }
        },
        None => {
            log::warn!("webhook delivery without {} header", consts::SIGNATURE_HEADER);
            return Err(errors::UserError::Forbidden.into());
        }
    };

    let app_secret = &app_state.config.insta_app_secret;
    if app_secret.is_empty() {
        log::warn!("rejecting webhook delivery: INSTA_APP_SECRET is not configured");
        return Err(errors::UserError::Forbidden.into());
    }

    if !security::verify_signature(signature, &body, app_secret) {
        return Err(errors::UserError::Forbidden.into());
    }

    match serde_json::from_slice::<schemas::WebhookPayload>(&body) {
        Ok(payload) => {
            handler::process_webhook(
                payload,
                &app_state.messenger,
                &app_state.config.insta_account_id,
            )
            .await;
        }
        Err(e) => {
            // authenticated but undecodable: acknowledge so the platform
            // does not redeliver a payload we will never understand
            log::error!("failed to decode webhook payload: {e}");
        }
    }

    Ok(web::HttpResponse::Ok().json(&serde_json::json!({
        "status": "received"
    })))
}
