//! Clipboard helper with toast feedback.

use crate::app::notify;
use crate::models::ToastKind;
use gloo::console;
use gloo::utils::window;
use wasm_bindgen_futures::JsFuture;

/// Write `text` to the system clipboard and report the outcome as a toast.
pub fn copy_to_clipboard(text: &str) {
    let clipboard = window().navigator().clipboard();
    let text = text.to_string();
    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(clipboard.write_text(&text)).await {
            Ok(_value) => notify::show_toast("Copied to clipboard!", ToastKind::Success),
            Err(err) => {
                console::error!("clipboard write failed", format!("{err:?}"));
                notify::show_toast("Failed to copy to clipboard", ToastKind::Danger);
            }
        }
    });
}
