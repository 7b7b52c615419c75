//! # Graph API Client
//!
//! Outbound side of the integration: sending direct messages and posting
//! comment replies through the Graph API.
//!
//! Every call is a single attempt with an explicit request timeout. There is
//! no retry and no deduplication: if the platform redelivers an event, the
//! reply is sent again. Callers that need at-most-once semantics have to
//! deduplicate on their side.

use super::outgoing_schemas::{
    CommentReplyResponse, OutgoingCommentReply, OutgoingDirectMessage, SendMessageResponse,
};
use crate::config::AppConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Outbound messaging operations the event router depends on.
///
/// Both operations report success or failure for exactly one attempt; the
/// caller decides what to do with a failure (the router logs and drops it).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Messenger {
    /// Sends a text direct message to the given scoped user id
    async fn send_direct_message(&self, recipient_id: &str, text: &str) -> Result<()>;

    /// Posts a public reply under the given comment
    async fn reply_to_comment(&self, comment_id: &str, text: &str) -> Result<()>;
}

pub type ImplMessenger = Box<dyn Messenger>;

/// Graph API client for sending messages and comment replies
#[derive(Clone)]
pub struct GraphClient {
    /// HTTP client for making API requests
    client: reqwest::Client,
    /// Application configuration (endpoints and access token)
    config: AppConfig,
}

impl GraphClient {
    /// Creates a new Graph API client with the configured request timeout
    pub fn new(app_config: &AppConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(app_config.graph_request_timeout_secs))
            .build()
            .context("failed to build the Graph API http client")?;

        Ok(Self {
            client,
            config: app_config.clone(),
        })
    }

    /// Posts a JSON body to a Graph API endpoint and decodes the response
    async fn post_json<T, R>(&self, endpoint: &str, body: &T) -> Result<R>
    where
        T: serde::Serialize + Sync,
        R: serde::de::DeserializeOwned,
    {
        let response = self
            .client
            .post(endpoint)
            .header(
                "Authorization",
                format!("Bearer {}", self.config.insta_access_token),
            )
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .context("failed to send request to the Graph API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read response body".to_string());

            anyhow::bail!("Graph API returned error status {status}: {body}");
        }

        response
            .json()
            .await
            .context("failed to parse the Graph API response")
    }
}

#[async_trait]
impl Messenger for GraphClient {
    async fn send_direct_message(&self, recipient_id: &str, text: &str) -> Result<()> {
        let message = OutgoingDirectMessage::new(recipient_id.to_string(), text.to_string());

        let response: SendMessageResponse = self
            .post_json(&self.config.send_message_endpoint(), &message)
            .await?;

        log::info!(
            "direct message accepted: message_id={id}",
            id = response.message_id.as_deref().unwrap_or("<unknown>")
        );

        Ok(())
    }

    async fn reply_to_comment(&self, comment_id: &str, text: &str) -> Result<()> {
        let reply = OutgoingCommentReply::new(text.to_string());

        let response: CommentReplyResponse = self
            .post_json(&self.config.comment_reply_endpoint(comment_id), &reply)
            .await?;

        log::info!("comment reply created: id={id}", id = response.id);

        Ok(())
    }
}
