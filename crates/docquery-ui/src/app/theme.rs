//! Theme controller: applies the persisted theme and wires the toggle.

use crate::app::preferences::{load_theme, persist_theme};
use crate::theme::ThemeMode;
use gloo::events::EventListener;
use gloo::utils::document;
use std::cell::Cell;
use std::rc::Rc;
use web_sys::Element;

const THEME_ATTRIBUTE: &str = "data-theme";
const TOGGLE_ID: &str = "theme-toggle";

/// Apply the persisted preference and wire the toggle control. A page
/// without the control still gets the persisted theme applied.
pub(crate) fn init() {
    let mode = load_theme();
    apply(mode);
    let Some(toggle) = document().get_element_by_id(TOGGLE_ID) else {
        return;
    };
    update_toggle(&toggle, mode);

    let current = Rc::new(Cell::new(mode));
    let target = toggle.clone();
    EventListener::new(&target, "click", move |_event| {
        let next = current.get().toggled();
        current.set(next);
        // Attribute and stored preference must agree after every toggle.
        apply(next);
        persist_theme(next);
        update_toggle(&toggle, next);
    })
    .forget();
}

fn apply(mode: ThemeMode) {
    if let Some(root) = document().document_element() {
        if let Err(err) = root.set_attribute(THEME_ATTRIBUTE, mode.as_str()) {
            gloo::console::error!("applying theme failed", format!("{err:?}"));
        }
    }
}

fn update_toggle(toggle: &Element, mode: ThemeMode) {
    if let Ok(Some(icon)) = toggle.query_selector("i") {
        icon.set_class_name(mode.icon_class());
    }
    let _ = toggle.set_attribute("title", mode.toggle_hint());
}
