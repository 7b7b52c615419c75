use ntex::web;

/// Configures the Instagram webhook routes.
///
/// These are public endpoints addressed by the platform, not by users; the
/// POST endpoint authenticates deliveries with a payload signature.
///
/// # Routes
/// - `GET /webhook` - subscription verification handshake
/// - `POST /webhook` - event receiver
pub fn instagram(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/webhook").service((super::instagram::verify, super::instagram::receive)),
    );
}
