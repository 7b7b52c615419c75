//! # Instagram Webhook Schemas
//!
//! Data structures for the webhook payloads the Graph API delivers when
//! subscribed events occur (comments, mentions, direct messages).
//!
//! The payload is decoded exactly once, at the HTTP boundary; everything
//! downstream works on these types. Fields the platform may omit are
//! `Option`s, and unknown fields are ignored by serde, so a shape this
//! service does not understand is skipped instead of failing the request.

use serde::{Deserialize, Serialize};

/// Root webhook payload
#[derive(Debug, Deserialize, Serialize)]
pub struct WebhookPayload {
    /// The object type, "instagram" for the events this service handles
    pub object: String,
    /// Array of entry objects containing the actual data
    pub entry: Vec<Entry>,
}

/// One unit of account activity.
///
/// A single entry may carry both field changes (comments, mentions) and
/// messaging events; the two lists are independent and both are processed.
#[derive(Debug, Deserialize, Serialize)]
pub struct Entry {
    /// Id of the account the entry belongs to
    pub id: String,
    /// Unix timestamp of the delivery
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
    /// Field changes (comment and mention activity)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changes: Option<Vec<Change>>,
    /// Direct-message events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messaging: Option<Vec<MessagingEvent>>,
}

/// Change object containing the actual webhook data
#[derive(Debug, Deserialize, Serialize)]
pub struct Change {
    /// The field that changed ("comments", "mentions", ...)
    pub field: String,
    /// The value containing the actual data
    pub value: ChangeValue,
}

/// Value of a field change.
///
/// Comment changes populate `id`, `text` and `from`; mention changes
/// populate `comment_id` and `media_id`. Everything is optional so one
/// struct covers both shapes.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ChangeValue {
    /// Comment id (comment changes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Comment text (comment changes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Comment author (comment changes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Author>,
    /// Media the comment was left on (comment changes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Media>,
    /// Id of the comment mentioning the account (mention changes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_id: Option<String>,
    /// Id of the media mentioning the account (mention changes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_id: Option<String>,
}

/// Author of a comment
#[derive(Debug, Deserialize, Serialize)]
pub struct Author {
    /// Scoped user id of the author
    pub id: String,
    /// Handle of the author
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// Media reference
#[derive(Debug, Deserialize, Serialize)]
pub struct Media {
    /// Media id
    pub id: String,
}

/// One direct-message event
#[derive(Debug, Deserialize, Serialize)]
pub struct MessagingEvent {
    /// Sender of the message
    pub sender: Party,
    /// Recipient of the message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<Party>,
    /// Unix timestamp in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    /// Message content; absent for non-message events (reads, reactions)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<MessageContent>,
}

/// Conversation participant
#[derive(Debug, Deserialize, Serialize)]
pub struct Party {
    /// Scoped user id of the participant
    pub id: String,
}

/// Content of a direct message
#[derive(Debug, Deserialize, Serialize)]
pub struct MessageContent {
    /// Message id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mid: Option<String>,
    /// Text body; absent for attachment-only messages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Set when the event is this account's own outbound message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_echo: Option<bool>,
}
