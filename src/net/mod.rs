//! Networking for the profile-status endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema, `api` performs the browser request.

pub mod api;
pub mod types;
