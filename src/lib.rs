//! # profile-gate
//!
//! Post-login bootstrap for the browser: once per page load, poll the
//! profile-status endpoint for a few seconds and send users without a profile
//! record to the profile-completion form.
//!
//! The gate logic (`gate`, `guard`, `redirect`, `config`) is plain Rust and
//! runs natively under test. Browser bindings (`fetch`, `location`, timers,
//! the load hook) sit behind the `hydrate` feature, as in the other WASM
//! client crates.

pub mod config;
pub mod error;
pub mod gate;
pub mod guard;
pub mod net;
pub mod redirect;

#[cfg(feature = "hydrate")]
pub mod browser;

pub use config::GateConfig;
pub use error::GateError;
pub use gate::{GateOutcome, Navigator, Pause, RedirectGate};
pub use guard::PathGuard;
pub use net::api::StatusSource;
pub use net::types::{ProfileStatus, StatusReply};
