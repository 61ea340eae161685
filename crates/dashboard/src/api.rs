//! HTTP client for the tank status endpoint, wrapping `gloo-net`.
//!
//! One GET per fetch cycle: no retry, no timeout override, no backoff.
//! Failure is reported to the caller and forgotten; the next timer tick or
//! manual refresh starts a fresh cycle.

use gloo_net::http::Request;
use tankview_domain::reading::TankReading;

use crate::config;

/// Static hint block appended to the fetch-failure alert.
pub const TROUBLESHOOTING_HINTS: &str = "Please check:\n\
    1. The status endpoint URL is correct\n\
    2. CORS is enabled on the endpoint\n\
    3. The tank sensor is sending data";

/// Error raised by a fetch cycle. All variants collapse into the same
/// user-visible path: an offline indicator and a blocking alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The endpoint URL still contains the deploy-time placeholder; no
    /// network call was made.
    EndpointPlaceholder,
    /// Transport-level failure reaching the endpoint.
    Network(String),
    /// Non-2xx HTTP response.
    Status(u16),
    /// The response body was not valid JSON.
    Parse(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EndpointPlaceholder => {
                f.write_str("the status endpoint URL has not been configured")
            }
            Self::Network(message) => write!(f, "network error: {message}"),
            Self::Status(code) => write!(f, "HTTP error! status: {code}"),
            Self::Parse(message) => write!(f, "invalid response body: {message}"),
        }
    }
}

/// Fetch one tank reading from the status endpoint.
///
/// # Errors
///
/// Returns a [`FetchError`] when the endpoint is unconfigured, unreachable,
/// answers with a non-2xx status, or returns a body that is not JSON. A
/// well-formed JSON body always yields a reading; missing fields take their
/// documented defaults.
pub async fn fetch_tank_status() -> Result<TankReading, FetchError> {
    if config::STATUS_ENDPOINT.contains(config::ENDPOINT_PLACEHOLDER) {
        return Err(FetchError::EndpointPlaceholder);
    }

    let response = Request::get(config::STATUS_ENDPOINT)
        .send()
        .await
        .map_err(|err| FetchError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|err| FetchError::Network(err.to_string()))?;
    let payload: serde_json::Value =
        serde_json::from_str(&body).map_err(|err| FetchError::Parse(err.to_string()))?;

    Ok(TankReading::from_json(&payload))
}
