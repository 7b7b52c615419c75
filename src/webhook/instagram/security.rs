//! Signature verification for incoming webhook requests.
//!
//! The platform signs every webhook delivery with HMAC-SHA256 over the raw
//! request body using the app secret, and sends the result in the
//! `X-Hub-Signature-256` header as `sha256=<hex>`. A request whose signature
//! does not match was not sent by the platform and must be rejected before
//! its body is parsed.
//!
//! Two details are load-bearing here:
//! - the MAC is computed over the exact bytes received, never over a
//!   re-serialized JSON value, so key order and whitespace cannot cause
//!   false rejections
//! - the comparison is constant-time to prevent timing attacks

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Verifies the `X-Hub-Signature-256` header against the request payload.
///
/// Returns `true` only when the header carries the `sha256=` prefix, decodes
/// as hex, and matches the MAC of `payload` under `app_secret`. Every other
/// outcome, including a malformed header, is `false`; this function never
/// fails, the caller turns `false` into an authentication rejection.
pub fn verify_signature(signature_header: &str, payload: &[u8], app_secret: &str) -> bool {
    let signature_hex = match signature_header.strip_prefix("sha256=") {
        Some(sig) => sig,
        None => {
            log::warn!("signature header does not carry the 'sha256=' prefix");
            return false;
        }
    };

    let expected_signature = match hex::decode(signature_hex) {
        Ok(sig) => sig,
        Err(e) => {
            log::warn!("signature header is not valid hex: {e}");
            return false;
        }
    };

    // HMAC accepts keys of any length, so this only fails on internal errors
    let mut mac = match HmacSha256::new_from_slice(app_secret.as_bytes()) {
        Ok(m) => m,
        Err(e) => {
            log::error!("failed to initialize hmac: {e}");
            return false;
        }
    };

    mac.update(payload);
    let computed_signature = mac.finalize().into_bytes();

    let is_valid: bool = computed_signature.ct_eq(&expected_signature[..]).into();

    if !is_valid {
        log::warn!("webhook signature verification failed: signatures do not match");
    }

    is_valid
}
