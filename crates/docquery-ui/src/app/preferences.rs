//! Persistence helpers for client-local preferences.

use crate::theme::ThemeMode;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};

pub(crate) const THEME_KEY: &str = "docquery.theme";

pub(crate) fn load_theme() -> ThemeMode {
    LocalStorage::get::<String>(THEME_KEY)
        .map_or(ThemeMode::Light, |value| ThemeMode::from_value(&value))
}

pub(crate) fn persist_theme(mode: ThemeMode) {
    if let Err(err) = LocalStorage::set(THEME_KEY, mode.as_str()) {
        console::error!("storage operation failed", THEME_KEY, err.to_string());
    }
}
