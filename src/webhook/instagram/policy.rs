//! Trigger and canned-response policy.
//!
//! Pure functions the event router consults: [`should_act`] decides whether
//! a piece of free text deserves a reaction, [`respond`] picks the canned
//! reply for it. No I/O, no state; the tables live in [`crate::consts`].

use crate::consts;

/// Whether the given text matches any trigger phrase.
///
/// Matching is case-insensitive substring containment.
pub fn should_act(text: &str) -> bool {
    let text = text.to_lowercase();

    consts::TRIGGER_PHRASES
        .iter()
        .any(|phrase| text.contains(phrase))
}

/// Picks the canned reply for the given text.
///
/// Texts asking about price get the pricing message, everything else gets
/// the default greeting.
pub fn respond(text: &str) -> &'static str {
    let text = text.to_lowercase();

    if consts::PRICING_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        return consts::PRICING_REPLY;
    }

    consts::DEFAULT_REPLY
}
