#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Docquery browser behavior layer.
//!
//! The page markup is rendered server-side; this crate compiles to wasm and
//! enhances it: theme persistence, drag-and-drop upload intake, bounded
//! auto-refresh while documents are processing, a JSON request client, and
//! transient notifications. Pure behavior lives in DOM-free modules so it can
//! be tested natively; everything touching the DOM is wasm-only.

pub mod logic;
pub mod models;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod services;

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
pub use app::{Debounce, copy_to_clipboard, run_app};

#[cfg(test)]
mod tests {
    use crate::logic::{ALLOWED_FILE_TYPES, MAX_FILE_BYTES, validate_file};
    use crate::theme::ThemeMode;

    #[test]
    fn default_allow_list_accepts_the_shipped_formats() {
        for name in ["a.pdf", "b.docx", "c.txt", "d.png", "e.jpg"] {
            let check = validate_file(name, "", 1, &ALLOWED_FILE_TYPES, MAX_FILE_BYTES);
            assert!(check.is_valid(), "{name} should be accepted");
        }
    }

    #[test]
    fn theme_attribute_values_are_storage_values() {
        assert_eq!(ThemeMode::from_value("light").as_str(), "light");
        assert_eq!(ThemeMode::from_value("dark").as_str(), "dark");
    }
}
