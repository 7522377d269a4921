//! Page-wide error surfacing, keyboard shortcuts, and focus conveniences.

use crate::app::{chat, clipboard, notify};
use crate::logic::{AUTOFOCUS_DELAY_MS, ShortcutOutcome, interpret_shortcut, is_benign_error};
use crate::models::ToastKind;
use gloo::console;
use gloo::events::EventListener;
use gloo::utils::{document, window};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, ErrorEvent, HtmlElement, KeyboardEvent};

const TEXT_INPUT_SELECTOR: &str = "input[type='text'], input[type='email'], textarea";
const COPY_ATTRIBUTE: &str = "data-copy-text";

pub(crate) fn init() {
    wire_error_handler();
    wire_shortcuts();
    wire_copy_controls();
    schedule_autofocus();
}

/// Log every uncaught error; toast it unless it is the undiagnosable
/// cross-origin placeholder.
fn wire_error_handler() {
    EventListener::new(&window(), "error", |event| {
        let Some(event) = event.dyn_ref::<ErrorEvent>() else {
            return;
        };
        let message = event.message();
        console::error!("uncaught error", message.clone());
        if !is_benign_error(&message) {
            notify::show_toast(
                "An unexpected error occurred. Please refresh the page.",
                ToastKind::Danger,
            );
        }
    })
    .forget();
}

fn wire_shortcuts() {
    EventListener::new(&document(), "keydown", |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let ctrl_or_meta = event.ctrl_key() || event.meta_key();
        match interpret_shortcut(&event.key(), ctrl_or_meta) {
            Some(ShortcutOutcome::FocusChatInput) => {
                event.prevent_default();
                if let Some(input) = chat_or_first_text_input() {
                    let _ = input.focus();
                }
            }
            Some(ShortcutOutcome::BlurActive) => {
                if let Some(active) = document()
                    .active_element()
                    .and_then(|element| element.dyn_into::<HtmlElement>().ok())
                {
                    let _ = active.blur();
                }
            }
            None => {}
        }
    })
    .forget();
}

/// Delegated click handling for `data-copy-text` elements.
fn wire_copy_controls() {
    EventListener::new(&document(), "click", |event| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let Ok(Some(control)) = target.closest(&format!("[{COPY_ATTRIBUTE}]")) else {
            return;
        };
        if let Some(text) = control.get_attribute(COPY_ATTRIBUTE) {
            clipboard::copy_to_clipboard(&text);
        }
    })
    .forget();
}

fn chat_or_first_text_input() -> Option<HtmlElement> {
    document()
        .get_element_by_id(chat::CHAT_INPUT_ID)
        .or_else(|| {
            document()
                .query_selector("input[type='text']")
                .ok()
                .flatten()
        })
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

/// Focus the first text-like input shortly after load to save a click.
fn schedule_autofocus() {
    Timeout::new(AUTOFOCUS_DELAY_MS, || {
        let Ok(Some(first)) = document().query_selector(TEXT_INPUT_SELECTOR) else {
            return;
        };
        if first.has_attribute("disabled") {
            return;
        }
        if let Ok(input) = first.dyn_into::<HtmlElement>() {
            let _ = input.focus();
        }
    })
    .forget();
}
