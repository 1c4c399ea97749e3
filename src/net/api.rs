//! Status endpoint access.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, cookies included so
//! the freshly issued session cookie rides along.
//! Everywhere else the gate talks to whatever [`StatusSource`] it is handed,
//! which is how the retry loop is tested without a network.
//!
//! ERROR HANDLING
//! ==============
//! Only a rejected fetch or an unreadable `200` body is an error. Any other
//! status is a normal [`StatusReply::NotReady`] answer.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::StatusReply;
#[cfg(any(test, feature = "hydrate"))]
use super::types::ProfileStatus;
use crate::error::GateError;

/// Source of profile-status answers for the redirect gate.
#[async_trait::async_trait(?Send)]
pub trait StatusSource {
    /// Issue one status request against `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns a [`GateError`] when no usable response was obtained.
    async fn fetch_status(&self, endpoint: &str) -> Result<StatusReply, GateError>;
}

/// Only an exact `200` settles the question; `204` and friends keep polling.
#[cfg(any(test, feature = "hydrate"))]
fn is_ready_status(status: u16) -> bool {
    status == 200
}

#[cfg(any(test, feature = "hydrate"))]
fn reply_from_parts(status: u16, body: Option<&str>) -> Result<StatusReply, GateError> {
    if !is_ready_status(status) {
        return Ok(StatusReply::NotReady { status });
    }
    let body = body.ok_or_else(|| GateError::BodyParse("empty response body".into()))?;
    ProfileStatus::from_json(body).map(StatusReply::Ready)
}

/// [`StatusSource`] backed by the browser's `fetch`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStatusSource;

#[cfg(feature = "hydrate")]
#[async_trait::async_trait(?Send)]
impl StatusSource for BrowserStatusSource {
    async fn fetch_status(&self, endpoint: &str) -> Result<StatusReply, GateError> {
        let resp = gloo_net::http::Request::get(endpoint)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| GateError::Transport(e.to_string()))?;

        let status = resp.status();
        if !is_ready_status(status) {
            return reply_from_parts(status, None);
        }
        let body = resp.text().await.map_err(|e| GateError::BodyParse(e.to_string()))?;
        reply_from_parts(status, Some(&body))
    }
}
