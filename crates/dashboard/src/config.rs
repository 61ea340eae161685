//! Deploy-time configuration. Everything here is a literal baked into the
//! build; there are no runtime flags.

use tankview_domain::auth::Credentials;

/// The tank status endpoint. Replace with the deployed endpoint URL.
pub const STATUS_ENDPOINT: &str = "https://YOUR_API_ENDPOINT/prod/status";

/// Marker substring left in [`STATUS_ENDPOINT`] until it is configured.
/// The fetch cycle refuses to issue a request while it is present.
pub const ENDPOINT_PLACEHOLDER: &str = "YOUR_API_ENDPOINT";

/// Interval between automatic fetch cycles.
pub const REFRESH_INTERVAL_MS: u32 = 30_000;

/// The fixed credential pair the access gate compares against.
#[must_use]
pub fn credentials() -> Credentials {
    Credentials::new("host", "login123")
}
