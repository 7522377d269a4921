//! Chat form wiring: question submission and conversation reset.
//!
//! # Design
//! - The transcript is server-rendered; a successful request is followed by
//!   a full-page reload rather than any incremental DOM patch.
//! - Failures hide the overlay and surface the request error as a toast.

use crate::app::notify;
use crate::models::ToastKind;
use crate::services::api::ApiClient;
use gloo::events::EventListener;
use gloo::utils::document;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

/// Canonical chat input, also the Ctrl/Cmd+K focus target.
pub(crate) const CHAT_INPUT_ID: &str = "question-input";
const CHAT_FORM_ID: &str = "chat-form";
const CLEAR_CHAT_ID: &str = "clear-chat";
const DOCUMENT_FILTER_SELECTOR: &str = "input[data-document-name]:checked";

/// Wire the chat form and the clear-chat control when the page has them.
pub(crate) fn init(client: &Rc<ApiClient>) {
    wire_ask(Rc::clone(client));
    wire_clear(Rc::clone(client));
}

fn wire_ask(client: Rc<ApiClient>) {
    let Some(form) = document().get_element_by_id(CHAT_FORM_ID) else {
        return;
    };
    let input = document()
        .get_element_by_id(CHAT_INPUT_ID)
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok());

    EventListener::new(&form, "submit", move |event| {
        event.prevent_default();
        let Some(input) = &input else {
            return;
        };
        let question = input.value().trim().to_string();
        if question.is_empty() {
            return;
        }
        let client = Rc::clone(&client);
        notify::show_loading("Searching your documents...");
        wasm_bindgen_futures::spawn_local(async move {
            match client.send_message(&question, selected_document_names()).await {
                Ok(_answer) => super::reload_page(),
                Err(err) => {
                    notify::hide_loading();
                    notify::show_toast(&err.message, ToastKind::Danger);
                }
            }
        });
    })
    .forget();
}

fn wire_clear(client: Rc<ApiClient>) {
    let Some(button) = document().get_element_by_id(CLEAR_CHAT_ID) else {
        return;
    };
    EventListener::new(&button, "click", move |_event| {
        let client = Rc::clone(&client);
        notify::show_loading("Clearing conversation...");
        wasm_bindgen_futures::spawn_local(async move {
            match client.clear_chat().await {
                Ok(_ack) => super::reload_page(),
                Err(err) => {
                    notify::hide_loading();
                    notify::show_toast(&err.message, ToastKind::Danger);
                }
            }
        });
    })
    .forget();
}

/// Checked document filters; `None` when the question is unscoped.
fn selected_document_names() -> Option<Vec<String>> {
    let Ok(checked) = document().query_selector_all(DOCUMENT_FILTER_SELECTOR) else {
        return None;
    };
    let mut names = Vec::new();
    for index in 0..checked.length() {
        let Some(node) = checked.get(index) else {
            continue;
        };
        if let Some(name) = node
            .dyn_ref::<web_sys::Element>()
            .and_then(|element| element.get_attribute("data-document-name"))
        {
            names.push(name);
        }
    }
    if names.is_empty() { None } else { Some(names) }
}
