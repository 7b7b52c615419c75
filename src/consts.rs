pub const SUPPORTED_OBJECT: &str = "instagram";
pub const SIGNATURE_HEADER: &str = "X-Hub-Signature-256";

/// Phrases that make a comment worth acting on
pub const TRIGGER_PHRASES: [&str; 5] = ["dm me", "price", "interested", "how much", "info"];

/// Keywords that select the pricing reply over the default one
pub const PRICING_KEYWORDS: [&str; 3] = ["price", "cost", "how much"];

pub const COMMENT_ACK_REPLY: &str = "Thanks for your comment! Just sent you a DM 📩";
pub const MENTION_REPLY: &str = "Thanks for the mention! We appreciate the shout-out 🙌";
pub const PRICING_REPLY: &str =
    "Our current plans: Starter $29/mo, Pro $79/mo and Studio $199/mo. Reply here and we can help you pick the right one.";
pub const DEFAULT_REPLY: &str =
    "Hey! Thanks for reaching out 👋 How can we help you today? Ask about plans, pricing or anything else.";
