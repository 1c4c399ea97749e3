//! Browser wiring for the redirect gate.
//!
//! Installs the gate once per page load: immediately when the document has
//! already finished loading (the WASM module usually initialises late),
//! otherwise from a one-shot `load` listener. Requires a browser environment.
//!
//! Configuration is read from `<meta name="profile-gate:KEY" content="...">`
//! tags; see [`crate::config`] for the keys.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here may break the host page. Bad config falls back to defaults,
//! a missing `window` skips the gate, and every failure is only logged.

use std::time::Duration;

use js_sys::Function;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::config::{GateConfig, meta_selector};
use crate::error::GateError;
use crate::gate::{Navigator, Pause, RedirectGate};
use crate::net::api::BrowserStatusSource;

/// [`Navigator`] over `window.location.replace`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn replace(&self, target: &str) -> Result<(), GateError> {
        let window = web_sys::window().ok_or(GateError::Unavailable)?;
        window
            .location()
            .replace(target)
            .map_err(|e| GateError::Navigation(format!("{e:?}")))
    }
}

/// [`Pause`] backed by `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimerPause;

#[async_trait::async_trait(?Send)]
impl Pause for TimerPause {
    async fn sleep(&self, delay: Duration) {
        gloo_timers::future::sleep(delay).await;
    }
}

/// Module entry point, run by `wasm-bindgen` when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let parsed = GateConfig::from_lookup(|key| meta_content(&document, key));
    let level = match &parsed {
        Ok(config) => config.log_level,
        Err(_) => crate::config::DEFAULT_LOG_LEVEL,
    };
    if console_log::init_with_level(level).is_err() {
        log::debug!("console logger already installed");
    }
    let config = match parsed {
        Ok(config) => config,
        Err(e) => {
            log::warn!("profile gate config ignored: {e}");
            GateConfig::default()
        }
    };

    if document.ready_state() == "complete" {
        spawn_gate(config);
        return;
    }

    let options = web_sys::AddEventListenerOptions::new();
    options.set_once(true);
    let on_load = Closure::once_into_js(move || spawn_gate(config));
    if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
        "load",
        on_load.unchecked_ref::<Function>(),
        &options,
    ) {
        log::warn!("profile gate could not attach load listener: {e:?}");
    }
}

fn spawn_gate(config: GateConfig) {
    wasm_bindgen_futures::spawn_local(async move {
        let path = match current_path() {
            Ok(path) => path,
            Err(e) => {
                log::warn!("profile gate skipped: {e}");
                return;
            }
        };
        let gate = RedirectGate::new(config, BrowserStatusSource, LocationNavigator, TimerPause);
        gate.run(&path).await;
    });
}

fn current_path() -> Result<String, GateError> {
    let window = web_sys::window().ok_or(GateError::Unavailable)?;
    window.location().pathname().map_err(|_| GateError::Unavailable)
}

fn meta_content(document: &web_sys::Document, key: &str) -> Option<String> {
    match document.query_selector(&meta_selector(key)) {
        Ok(Some(meta)) => meta.get_attribute("content"),
        _ => None,
    }
}
