//! Network-facing services (wasm-only).

pub mod api;
