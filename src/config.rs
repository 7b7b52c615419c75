//! Application configuration management with security considerations.
//!
//! All configuration comes from process environment variables, read once at
//! startup. The resulting [`AppConfig`] is immutable and is handed to the web
//! server state and the Graph API client explicitly; nothing reads the
//! environment after startup.
//!
//! # Security Notes
//! - Sensitive fields are clearly marked and should never be logged
//! - Production environments should use secure secret management systems

use envconfig::Envconfig;

/// Application configuration with security-aware field management.
///
/// Platform credentials default to empty strings on purpose: a missing
/// credential must not prevent the service from booting (see
/// [`AppConfig::warn_missing_secrets`]), it only makes the calls that depend
/// on it fail later.
#[derive(Envconfig, Clone)]
pub struct AppConfig {
    /// Environment name the app is deployed to (NON-SENSITIVE)
    /// Values: "local", "dev", "staging", "prod"
    #[envconfig(default = "local")]
    pub env: String,

    /// Host address for web server binding (NON-SENSITIVE)
    #[envconfig(default = "0.0.0.0")]
    pub web_server_host: String,

    /// Port for web server binding (NON-SENSITIVE)
    #[envconfig(default = "8080")]
    pub web_server_port: u16,

    /// Base URL of the Graph API, version included (NON-SENSITIVE)
    #[envconfig(default = "https://graph.facebook.com/v23.0")]
    pub graph_api_base_url: String,

    /// 🔒 SENSITIVE: Graph API access token used for every outbound call
    /// Security: store in a secret management system, rotate regularly
    #[envconfig(default = "")]
    pub insta_access_token: String,

    /// 🔒 SENSITIVE: token the platform echoes during webhook subscription
    #[envconfig(default = "")]
    pub insta_verify_token: String,

    /// 🔒 SENSITIVE: app secret the platform signs webhook payloads with
    /// Access: signature verification only, never sent anywhere
    #[envconfig(default = "")]
    pub insta_app_secret: String,

    /// Instagram professional account id (SEMI-SENSITIVE)
    /// Used to address the send-message endpoint and to drop self-authored
    /// events so the bot never answers itself
    #[envconfig(default = "")]
    pub insta_account_id: String,

    /// Timeout applied to every outbound Graph API request, in seconds
    #[envconfig(default = "10")]
    pub graph_request_timeout_secs: u64,

    /// Interval of the background keep-alive task, in seconds
    #[envconfig(default = "840")]
    pub keepalive_interval_secs: u64,
}

impl AppConfig {
    /// Constructs the Graph API endpoint for sending direct messages
    pub fn send_message_endpoint(&self) -> String {
        format!(
            "{base}/{id}/messages",
            base = self.graph_api_base_url,
            id = self.insta_account_id
        )
    }

    /// Constructs the Graph API endpoint for replying to a comment
    pub fn comment_reply_endpoint(&self, comment_id: &str) -> String {
        format!(
            "{base}/{id}/replies",
            base = self.graph_api_base_url,
            id = comment_id
        )
    }

    /// Logs a warning for every platform credential left unset.
    ///
    /// Missing credentials are not fatal at startup; the first request that
    /// needs one fails instead.
    pub fn warn_missing_secrets(&self) {
        let secrets = [
            ("INSTA_ACCESS_TOKEN", &self.insta_access_token),
            ("INSTA_VERIFY_TOKEN", &self.insta_verify_token),
            ("INSTA_APP_SECRET", &self.insta_app_secret),
            ("INSTA_ACCOUNT_ID", &self.insta_account_id),
        ];

        for (name, value) in secrets {
            if value.is_empty() {
                log::warn!("{name} is not set; requests that depend on it will fail");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AppConfig {
        AppConfig {
            env: "local".to_string(),
            web_server_host: "0.0.0.0".to_string(),
            web_server_port: 8080,
            graph_api_base_url: "https://graph.facebook.com/v23.0".to_string(),
            insta_access_token: "token".to_string(),
            insta_verify_token: "verify".to_string(),
            insta_app_secret: "secret".to_string(),
            insta_account_id: "17841400000000000".to_string(),
            graph_request_timeout_secs: 10,
            keepalive_interval_secs: 840,
        }
    }

    #[test]
    fn test_send_message_endpoint() {
        let config = test_config();
        assert_eq!(
            config.send_message_endpoint(),
            "https://graph.facebook.com/v23.0/17841400000000000/messages"
        );
    }

    #[test]
    fn test_comment_reply_endpoint() {
        let config = test_config();
        assert_eq!(
            config.comment_reply_endpoint("9876"),
            "https://graph.facebook.com/v23.0/9876/replies"
        );
    }
}
