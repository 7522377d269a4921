//! Toast notifications and the loading overlay.
//!
//! # Design
//! - One toast container per page, created lazily at the first toast.
//! - Each toast is self-removing: the node leaves the DOM when its hide
//!   transition finishes, whether dismissal was the timer or the user.
//! - The loading overlay is a singleton and `show_loading` is idempotent.
//! - DOM mutation only; no storage or network access from this module.

use crate::models::ToastKind;
use gloo::events::EventListener;
use gloo::utils::{body, document};
use gloo_timers::callback::Timeout;
use js_sys::Date;
use web_sys::Element;

const OVERLAY_CLASS: &str = "loading-overlay";
const CONTAINER_CLASS: &str = "toast-container";
const VISIBLE_CLASS: &str = "show";
const TOAST_LINGER_MS: u32 = 4_000;
// One tick between insertion and the `show` class so the enter transition
// actually runs.
const TOAST_ENTER_MS: u32 = 10;

/// Show the full-page busy overlay. No-op when one is already present.
pub(crate) fn show_loading(message: &str) {
    if find(OVERLAY_CLASS).is_some() {
        return;
    }
    let Some(overlay) = create_div(OVERLAY_CLASS) else {
        return;
    };
    if let Some(spinner) = create_div("spinner") {
        let _ = spinner.set_attribute("role", "status");
        let _ = overlay.append_child(&spinner);
    }
    if let Some(text) = create_div("loading-message") {
        text.set_text_content(Some(message));
        let _ = overlay.append_child(&text);
    }
    let _ = body().append_child(&overlay);
}

/// Remove the busy overlay if present; safe to call when absent.
pub(crate) fn hide_loading() {
    if let Some(overlay) = find(OVERLAY_CLASS) {
        overlay.remove();
    }
}

/// Append a self-dismissing toast to the shared container.
pub(crate) fn show_toast(message: &str, kind: ToastKind) {
    let Some(container) = toast_container() else {
        return;
    };
    let Some(toast) = create_div(&format!("toast toast-{}", kind.as_str())) else {
        return;
    };
    toast.set_id(&format!("toast-{}", Date::now() as u64));
    let _ = toast.set_attribute("role", "alert");

    if let Some(text) = create_div("toast-body") {
        text.set_text_content(Some(message));
        let _ = toast.append_child(&text);
    }
    if let Ok(button) = document().create_element("button") {
        button.set_class_name("toast-close");
        let _ = button.set_attribute("type", "button");
        let _ = button.set_attribute("aria-label", "Dismiss");
        let _ = toast.append_child(&button);
        let dismissed = toast.clone();
        EventListener::once(&button, "click", move |_event| {
            dismiss(&dismissed);
        })
        .forget();
    }
    let _ = container.append_child(&toast);

    {
        let toast = toast.clone();
        Timeout::new(TOAST_ENTER_MS, move || {
            let _ = toast.class_list().add_1(VISIBLE_CLASS);
        })
        .forget();
    }
    {
        // The enter transition fires `transitionend` too; only remove once
        // the toast is back in its hidden state.
        let toast = toast.clone();
        let target = toast.clone();
        EventListener::new(&target, "transitionend", move |_event| {
            if !toast.class_list().contains(VISIBLE_CLASS) {
                toast.remove();
            }
        })
        .forget();
    }
    Timeout::new(TOAST_LINGER_MS, move || dismiss(&toast)).forget();
}

fn dismiss(toast: &Element) {
    let _ = toast.class_list().remove_1(VISIBLE_CLASS);
}

fn toast_container() -> Option<Element> {
    if let Some(existing) = find(CONTAINER_CLASS) {
        return Some(existing);
    }
    let container = create_div(CONTAINER_CLASS)?;
    body().append_child(&container).ok()?;
    Some(container)
}

fn find(class: &str) -> Option<Element> {
    document()
        .query_selector(&format!(".{class}"))
        .ok()
        .flatten()
}

fn create_div(class: &str) -> Option<Element> {
    let element = document().create_element("div").ok()?;
    element.set_class_name(class);
    Some(element)
}
