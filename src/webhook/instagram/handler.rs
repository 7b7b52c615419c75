//! # Webhook Event Router
//!
//! Walks a verified webhook payload and dispatches every sub-event to its
//! handler: comment changes, mention changes and direct-message events.
//!
//! Handler invocations are isolated from each other: a failure inside one
//! handler is logged with its context and never aborts the remaining
//! sub-events, and nothing from here reaches the HTTP response. The platform
//! delivers at-least-once and retries on error statuses, so the webhook has
//! to acknowledge a verified delivery no matter what happened downstream.

use super::{
    client::ImplMessenger,
    policy,
    schemas::{ChangeValue, MessagingEvent, WebhookPayload},
};
use crate::consts;
use anyhow::{Context, Result};

/// Dispatches every sub-event of the payload to its handler.
///
/// Payloads for objects other than the supported one are accepted and
/// dropped without invoking any handler.
pub async fn process_webhook(
    payload: WebhookPayload,
    messenger: &ImplMessenger,
    account_id: &str,
) {
    if payload.object != consts::SUPPORTED_OBJECT {
        log::info!(
            "ignoring webhook delivery for unsupported object '{object}'",
            object = payload.object
        );
        return;
    }

    for entry in &payload.entry {
        for change in entry.changes.as_deref().unwrap_or_default() {
            match change.field.as_str() {
                "comments" => {
                    if let Err(e) = handle_comment(&change.value, messenger, account_id).await {
                        log::error!(
                            "comment handler failed for entry {entry_id}: {e:#}",
                            entry_id = entry.id
                        );
                    }
                }
                "mentions" => {
                    if let Err(e) = handle_mention(&change.value, messenger).await {
                        log::error!(
                            "mention handler failed for entry {entry_id}: {e:#}",
                            entry_id = entry.id
                        );
                    }
                }
                other => {
                    log::debug!("skipping change with unhandled field '{other}'");
                }
            }
        }

        for event in entry.messaging.as_deref().unwrap_or_default() {
            if let Err(e) = handle_message(event, messenger, account_id).await {
                log::error!(
                    "message handler failed for entry {entry_id}: {e:#}",
                    entry_id = entry.id
                );
            }
        }
    }
}

/// Handles one comment change.
///
/// A comment matching a trigger phrase gets a public reply pointing at the
/// inbox plus a direct message with the canned response. Comments authored
/// by the configured account are skipped so the bot never answers its own
/// replies.
async fn handle_comment(
    value: &ChangeValue,
    messenger: &ImplMessenger,
    account_id: &str,
) -> Result<()> {
    let comment_id = value.id.as_deref().context("comment change without an id")?;
    let text = value.text.as_deref().unwrap_or_default();
    let author_id = value.from.as_ref().map(|author| author.id.as_str());

    if author_id == Some(account_id) {
        log::debug!("skipping own comment {comment_id}");
        return Ok(());
    }

    if !policy::should_act(text) {
        log::debug!("comment {comment_id} does not match any trigger");
        return Ok(());
    }

    messenger
        .reply_to_comment(comment_id, consts::COMMENT_ACK_REPLY)
        .await
        .with_context(|| format!("failed to reply to comment {comment_id}"))?;

    if let Some(author_id) = author_id {
        messenger
            .send_direct_message(author_id, policy::respond(text))
            .await
            .with_context(|| format!("failed to send direct message to {author_id}"))?;
    }

    Ok(())
}

/// Handles one mention change by thanking under the mentioning comment.
async fn handle_mention(value: &ChangeValue, messenger: &ImplMessenger) -> Result<()> {
    let comment_id = value
        .comment_id
        .as_deref()
        .context("mention change without a comment id")?;

    messenger
        .reply_to_comment(comment_id, consts::MENTION_REPLY)
        .await
        .with_context(|| format!("failed to reply to mentioning comment {comment_id}"))
}

/// Handles one direct-message event.
///
/// Echoes of the bot's own messages and events without text are skipped;
/// everything else gets the canned response for its content.
async fn handle_message(
    event: &MessagingEvent,
    messenger: &ImplMessenger,
    account_id: &str,
) -> Result<()> {
    let Some(message) = event.message.as_ref() else {
        return Ok(());
    };

    if message.is_echo.unwrap_or(false) || event.sender.id == account_id {
        log::debug!("skipping echo of an outbound message");
        return Ok(());
    }

    let Some(text) = message.text.as_deref().filter(|text| !text.is_empty()) else {
        log::debug!("skipping direct-message event without text");
        return Ok(());
    };

    messenger
        .send_direct_message(&event.sender.id, policy::respond(text))
        .await
        .with_context(|| format!("failed to send direct message to {id}", id = event.sender.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::webhook::instagram::{
        client::{MockMessenger, Messenger},
        schemas::*,
    };
    use mockall::predicate::*;

    const ACCOUNT_ID: &str = "17841400000000000";

    fn comment_entry(comment_id: &str, text: &str, author_id: &str) -> Entry {
        Entry {
            id: ACCOUNT_ID.to_string(),
            time: Some(1_700_000_000),
            changes: Some(vec![Change {
                field: "comments".to_string(),
                value: ChangeValue {
                    id: Some(comment_id.to_string()),
                    text: Some(text.to_string()),
                    from: Some(Author {
                        id: author_id.to_string(),
                        username: Some("someone".to_string()),
                    }),
                    media: Some(Media {
                        id: "media-1".to_string(),
                    }),
                    ..Default::default()
                },
            }]),
            messaging: None,
        }
    }

    fn message_entry(sender_id: &str, text: Option<&str>) -> Entry {
        Entry {
            id: ACCOUNT_ID.to_string(),
            time: Some(1_700_000_000),
            changes: None,
            messaging: Some(vec![MessagingEvent {
                sender: Party {
                    id: sender_id.to_string(),
                },
                recipient: Some(Party {
                    id: ACCOUNT_ID.to_string(),
                }),
                timestamp: Some(1_700_000_000_000),
                message: Some(MessageContent {
                    mid: Some("mid-1".to_string()),
                    text: text.map(str::to_string),
                    is_echo: None,
                }),
            }]),
        }
    }

    fn payload(object: &str, entry: Vec<Entry>) -> WebhookPayload {
        WebhookPayload {
            object: object.to_string(),
            entry,
        }
    }

    fn boxed(mock: MockMessenger) -> ImplMessenger {
        Box::new(mock) as Box<dyn Messenger>
    }

    #[ntex::test]
    async fn test_triggered_comment_gets_reply_and_direct_message() {
        let mut mock = MockMessenger::new();
        mock.expect_reply_to_comment()
            .with(eq("c-1"), eq(crate::consts::COMMENT_ACK_REPLY))
            .times(1)
            .returning(|_, _| Ok(()));
        mock.expect_send_direct_message()
            .with(eq("user-9"), eq(crate::consts::PRICING_REPLY))
            .times(1)
            .returning(|_, _| Ok(()));
        let messenger = boxed(mock);

        let payload = payload(
            "instagram",
            vec![comment_entry("c-1", "what's the price? dm me", "user-9")],
        );

        process_webhook(payload, &messenger, ACCOUNT_ID).await;
    }

    #[ntex::test]
    async fn test_comment_without_trigger_is_ignored() {
        // no expectations set: any outbound call fails the test
        let messenger = boxed(MockMessenger::new());

        let payload = payload("instagram", vec![comment_entry("c-2", "nice photo", "user-9")]);

        process_webhook(payload, &messenger, ACCOUNT_ID).await;
    }

    #[ntex::test]
    async fn test_own_comment_is_skipped() {
        let messenger = boxed(MockMessenger::new());

        let payload = payload(
            "instagram",
            vec![comment_entry("c-3", "dm me for the price", ACCOUNT_ID)],
        );

        process_webhook(payload, &messenger, ACCOUNT_ID).await;
    }

    #[ntex::test]
    async fn test_unsupported_object_invokes_no_handler() {
        let messenger = boxed(MockMessenger::new());

        let payload = payload("page", vec![comment_entry("c-4", "dm me", "user-9")]);

        process_webhook(payload, &messenger, ACCOUNT_ID).await;
    }

    #[ntex::test]
    async fn test_failing_comment_handler_does_not_block_message_handler() {
        let mut mock = MockMessenger::new();
        mock.expect_reply_to_comment()
            .times(1)
            .returning(|_, _| Err(anyhow::anyhow!("upstream unavailable")));
        mock.expect_send_direct_message()
            .with(eq("user-5"), eq(crate::consts::DEFAULT_REPLY))
            .times(1)
            .returning(|_, _| Ok(()));
        let messenger = boxed(mock);

        let payload = payload(
            "instagram",
            vec![
                comment_entry("c-5", "I'm interested, dm me", "user-9"),
                message_entry("user-5", Some("hello")),
            ],
        );

        process_webhook(payload, &messenger, ACCOUNT_ID).await;
    }

    #[ntex::test]
    async fn test_mention_gets_thank_you_reply() {
        let mut mock = MockMessenger::new();
        mock.expect_reply_to_comment()
            .with(eq("c-77"), eq(crate::consts::MENTION_REPLY))
            .times(1)
            .returning(|_, _| Ok(()));
        let messenger = boxed(mock);

        let payload = payload(
            "instagram",
            vec![Entry {
                id: ACCOUNT_ID.to_string(),
                time: None,
                changes: Some(vec![Change {
                    field: "mentions".to_string(),
                    value: ChangeValue {
                        comment_id: Some("c-77".to_string()),
                        media_id: Some("media-2".to_string()),
                        ..Default::default()
                    },
                }]),
                messaging: None,
            }],
        );

        process_webhook(payload, &messenger, ACCOUNT_ID).await;
    }

    #[ntex::test]
    async fn test_unrecognized_change_field_is_skipped() {
        let messenger = boxed(MockMessenger::new());

        let payload = payload(
            "instagram",
            vec![Entry {
                id: ACCOUNT_ID.to_string(),
                time: None,
                changes: Some(vec![Change {
                    field: "story_insights".to_string(),
                    value: ChangeValue::default(),
                }]),
                messaging: None,
            }],
        );

        process_webhook(payload, &messenger, ACCOUNT_ID).await;
    }

    #[ntex::test]
    async fn test_direct_message_always_gets_response() {
        let mut mock = MockMessenger::new();
        mock.expect_send_direct_message()
            .with(eq("user-3"), eq(crate::consts::DEFAULT_REPLY))
            .times(1)
            .returning(|_, _| Ok(()));
        let messenger = boxed(mock);

        let payload = payload("instagram", vec![message_entry("user-3", Some("hello"))]);

        process_webhook(payload, &messenger, ACCOUNT_ID).await;
    }

    #[ntex::test]
    async fn test_textless_message_event_is_skipped() {
        let messenger = boxed(MockMessenger::new());

        let payload = payload("instagram", vec![message_entry("user-3", None)]);

        process_webhook(payload, &messenger, ACCOUNT_ID).await;
    }

    #[ntex::test]
    async fn test_echo_message_is_skipped() {
        let messenger = boxed(MockMessenger::new());

        let mut entry = message_entry(ACCOUNT_ID, Some("Thanks for reaching out"));
        if let Some(events) = entry.messaging.as_mut() {
            events[0].message.as_mut().unwrap().is_echo = Some(true);
        }

        let payload = payload("instagram", vec![entry]);

        process_webhook(payload, &messenger, ACCOUNT_ID).await;
    }
}
