//! Wire DTOs for the profile-status endpoint.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

use crate::error::GateError;

/// Body of a `200` from the status endpoint.
///
/// Every field is optional on the wire. A body without `exists` reads as
/// "no profile", and `null` names read as absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ProfileStatus {
    /// Whether the authenticated user already has a profile record.
    #[serde(default)]
    pub exists: bool,
    /// Account email, used to prefill the profile form.
    #[serde(default)]
    pub email: Option<String>,
    /// Display name, used to prefill the profile form.
    #[serde(default)]
    pub name: Option<String>,
}

impl ProfileStatus {
    /// Parse a `200` body.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::BodyParse`] if the body is not a JSON object of
    /// the expected shape.
    pub fn from_json(body: &str) -> Result<Self, GateError> {
        serde_json::from_str(body).map_err(|e| GateError::BodyParse(e.to_string()))
    }
}

/// What a single status request produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusReply {
    /// HTTP 200 with a usable body.
    Ready(ProfileStatus),
    /// Any other HTTP status; the session is not settled yet.
    NotReady { status: u16 },
}
