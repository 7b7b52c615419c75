//! # Outgoing Graph API Schemas
//!
//! Request and response bodies for the two calls this service makes:
//! sending a direct message and replying to a comment.

use serde::{Deserialize, Serialize};

/// Direct message to send through the Graph API
#[derive(Debug, Serialize, Deserialize)]
pub struct OutgoingDirectMessage {
    /// Recipient of the message
    pub recipient: MessageRecipient,
    /// Message content
    pub message: MessageBody,
}

impl OutgoingDirectMessage {
    /// Creates a new text direct message
    pub fn new(recipient_id: String, text: String) -> Self {
        Self {
            recipient: MessageRecipient { id: recipient_id },
            message: MessageBody { text },
        }
    }
}

/// Recipient of a direct message
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageRecipient {
    /// Scoped user id of the recipient
    pub id: String,
}

/// Text body of a direct message
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageBody {
    /// Message text
    pub text: String,
}

/// Public reply to post under a comment
#[derive(Debug, Serialize, Deserialize)]
pub struct OutgoingCommentReply {
    /// Reply text
    pub message: String,
}

impl OutgoingCommentReply {
    /// Creates a new comment reply
    pub fn new(message: String) -> Self {
        Self { message }
    }
}

/// Response from the send-message endpoint
#[derive(Debug, Deserialize)]
pub struct SendMessageResponse {
    /// Scoped id of the recipient the message was accepted for
    pub recipient_id: Option<String>,
    /// Id assigned to the sent message
    pub message_id: Option<String>,
}

/// Response from the comment-replies endpoint
#[derive(Debug, Deserialize)]
pub struct CommentReplyResponse {
    /// Id of the created reply comment
    pub id: String,
}
