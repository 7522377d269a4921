//! Bootstrap wiring for the Docquery page enhancements.
//!
//! # Design
//! - Initialize once per page load, after the DOM is ready.
//! - Controllers own disjoint DOM regions and are never torn down; the page
//!   lifetime is the scope of every listener and timer registered here.

use crate::services::api::ApiClient;
use gloo::console;
use gloo::events::EventListener;
use gloo::utils::{document, window};
use std::rc::Rc;

mod chat;
mod clipboard;
mod debounce;
mod global;
mod notify;
mod preferences;
mod refresh;
mod theme;
mod upload;

pub use clipboard::copy_to_clipboard;
pub use debounce::Debounce;

/// Wire all page behaviors. Called once from the wasm entry point.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if document().ready_state() == "loading" {
        EventListener::once(&document(), "DOMContentLoaded", |_event| init()).forget();
    } else {
        init();
    }
}

fn init() {
    // Same-origin endpoints; one client shared by everything that talks
    // to the backend.
    let client = Rc::new(ApiClient::new(String::new()));
    theme::init();
    upload::init();
    refresh::init();
    chat::init(&client);
    global::init();
}

/// Full-page reload; server-rendered state is the single source of truth.
pub(crate) fn reload_page() {
    if let Err(err) = window().location().reload() {
        console::error!("page reload failed", format!("{err:?}"));
    }
}
