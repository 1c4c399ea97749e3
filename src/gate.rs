//! Redirect gate: poll profile status after login, send profile-less users to
//! the profile form.
//!
//! DESIGN
//! ======
//! The gate owns no browser handles. Status lookups, navigation and the
//! inter-attempt pause are injected through [`StatusSource`], [`Navigator`]
//! and [`Pause`], so the same loop runs on the page event loop and under a
//! native test executor.
//!
//! The loop makes at most `max_attempts` requests with `retry_delay` between
//! consecutive ones. The first usable `200` ends it. Everything else (non-200
//! statuses, rejected fetches, unreadable bodies, a throwing
//! `location.replace`) means "not ready yet". Running out of attempts ends
//! silently.
//!
//! There is no cancellation. Navigating away tears down the page and the
//! pending future with it.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use std::time::Duration;

use crate::config::GateConfig;
use crate::error::GateError;
use crate::guard::PathGuard;
use crate::net::api::StatusSource;
use crate::net::types::StatusReply;
use crate::redirect::profile_redirect_target;

/// Replaces the current document location without adding a history entry.
pub trait Navigator {
    /// # Errors
    ///
    /// Returns [`GateError::Navigation`] if the browser refused the change.
    fn replace(&self, target: &str) -> Result<(), GateError>;
}

/// Suspends the loop between attempts.
#[async_trait::async_trait(?Send)]
pub trait Pause {
    async fn sleep(&self, delay: Duration);
}

/// How a gate run ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateOutcome {
    /// The current path is excluded; no request was made.
    Skipped,
    /// The user already has a profile.
    ProfileExists { attempts: u32 },
    /// The browser was sent to the profile form.
    Redirected { target: String, attempts: u32 },
    /// Every attempt came back not-ready.
    Exhausted { attempts: u32 },
    /// A failure that polling cannot fix (e.g. no browsing context).
    Aborted { attempts: u32 },
}

pub struct RedirectGate<S, N, P> {
    config: GateConfig,
    guard: PathGuard,
    source: S,
    navigator: N,
    pause: P,
}

impl<S, N, P> RedirectGate<S, N, P>
where
    S: StatusSource,
    N: Navigator,
    P: Pause,
{
    pub fn new(config: GateConfig, source: S, navigator: N, pause: P) -> Self {
        let guard = config.guard();
        Self { config, guard, source, navigator, pause }
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn pause(&self) -> &P {
        &self.pause
    }

    /// Run the gate once for the page at `path`.
    pub async fn run(&self, path: &str) -> GateOutcome {
        if self.guard.is_excluded(path) {
            log::debug!("profile gate skipped for {path}");
            return GateOutcome::Skipped;
        }

        let max = self.config.max_attempts;
        for attempt in 1..=max {
            match self.attempt(attempt).await {
                Ok(Some(outcome)) => {
                    log::info!("profile gate finished: {outcome:?}");
                    return outcome;
                }
                Ok(None) => {}
                Err(e) if e.retryable() => {
                    log::debug!("profile status attempt {attempt}/{max} failed: {e}");
                }
                Err(e) => {
                    log::warn!("profile gate aborted after {attempt} attempt(s): {e}");
                    return GateOutcome::Aborted { attempts: attempt };
                }
            }
            if attempt < max {
                self.pause.sleep(self.config.retry_delay).await;
            }
        }

        log::debug!("profile gate gave up after {max} attempt(s)");
        GateOutcome::Exhausted { attempts: max }
    }

    /// One request. `Ok(None)` means not ready yet.
    async fn attempt(&self, attempt: u32) -> Result<Option<GateOutcome>, GateError> {
        match self.source.fetch_status(&self.config.status_endpoint).await? {
            StatusReply::NotReady { status } => {
                log::debug!("profile status attempt {attempt}/{}: HTTP {status}", self.config.max_attempts);
                Ok(None)
            }
            StatusReply::Ready(status) if status.exists => Ok(Some(GateOutcome::ProfileExists { attempts: attempt })),
            StatusReply::Ready(status) => {
                let target = profile_redirect_target(&self.config.profile_path, &status);
                self.navigator.replace(&target)?;
                Ok(Some(GateOutcome::Redirected { target, attempts: attempt }))
            }
        }
    }
}
