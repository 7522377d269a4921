//! Drag-and-drop intake for the upload zone.
//!
//! # Design
//! - Drops are fed into the paired file input and a synthetic `change` event
//!   is dispatched, so picker and drop share one intake pipeline.
//! - Browser default drop handling (navigate to the file) is suppressed on
//!   the zone and on the document body for every drag-family event.
//! - The shared change pipeline validates the selection; invalid files are
//!   rejected with one toast per broken rule.

use crate::app::notify;
use crate::logic::{ALLOWED_FILE_TYPES, MAX_FILE_BYTES, validate_file};
use crate::models::ToastKind;
use gloo::events::EventListener;
use gloo::utils::{body, document};
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, EventInit, HtmlInputElement};

const ZONE_ID: &str = "upload-zone";
const INPUT_ID: &str = "file-input";
const HIGHLIGHT_CLASS: &str = "drag-over";
const DRAG_EVENTS: [&str; 4] = ["dragenter", "dragover", "dragleave", "drop"];

/// Wire the drop zone. A page without the zone or its input is left alone.
pub(crate) fn init() {
    let Some(zone) = document().get_element_by_id(ZONE_ID) else {
        return;
    };
    let Some(input) = document()
        .get_element_by_id(INPUT_ID)
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
    else {
        return;
    };

    for name in DRAG_EVENTS {
        EventListener::new(&zone, name, suppress_default).forget();
        EventListener::new(&body(), name, suppress_default).forget();
    }
    for name in ["dragenter", "dragover"] {
        let zone = zone.clone();
        let target = zone.clone();
        EventListener::new(&target, name, move |_event| {
            let _ = zone.class_list().add_1(HIGHLIGHT_CLASS);
        })
        .forget();
    }
    for name in ["dragleave", "drop"] {
        let zone = zone.clone();
        let target = zone.clone();
        EventListener::new(&target, name, move |_event| {
            let _ = zone.class_list().remove_1(HIGHLIGHT_CLASS);
        })
        .forget();
    }

    {
        let input = input.clone();
        EventListener::new(&zone, "drop", move |event| {
            let Some(drag) = event.dyn_ref::<DragEvent>() else {
                return;
            };
            let Some(files) = drag.data_transfer().and_then(|transfer| transfer.files())
            else {
                return;
            };
            if files.length() == 0 {
                return;
            }
            input.set_files(Some(&files));
            dispatch_change(&input);
        })
        .forget();
    }

    let target = input.clone();
    EventListener::new(&target, "change", move |_event| {
        reject_invalid_selection(&input);
    })
    .forget();
}

fn suppress_default(event: &Event) {
    event.prevent_default();
    event.stop_propagation();
}

/// Re-dispatch the picker's `change` so drag and pick run the same path.
fn dispatch_change(input: &HtmlInputElement) {
    let init = EventInit::new();
    init.set_bubbles(true);
    if let Ok(change) = Event::new_with_event_init_dict("change", &init) {
        let _ = input.dispatch_event(&change);
    }
}

/// Validate the selected files; clear the selection and toast every broken
/// rule when any file fails, so bad files never reach the upload path.
fn reject_invalid_selection(input: &HtmlInputElement) {
    let Some(files) = input.files() else {
        return;
    };
    let mut rejected = false;
    for index in 0..files.length() {
        let Some(file) = files.get(index) else {
            continue;
        };
        let check = validate_file(
            &file.name(),
            &file.type_(),
            file.size() as u64,
            &ALLOWED_FILE_TYPES,
            MAX_FILE_BYTES,
        );
        if !check.is_valid() {
            rejected = true;
            for error in &check.errors {
                notify::show_toast(error, ToastKind::Danger);
            }
        }
    }
    if rejected {
        input.set_value("");
    }
}
