//! Bounded auto-refresh while documents are still processing.
//!
//! # Design
//! - One polling session per page load, started only when the rendered page
//!   carries processing badges.
//! - The reload is unconditional; server-rendered state is re-fetched whole.
//! - The expiry timer owns the interval handle, so the repeating reload
//!   always stops once the cap elapses. Navigation discards both timers.

use crate::logic::{POLL_EXPIRY_MS, POLL_INTERVAL_MS};
use gloo::console;
use gloo::utils::document;
use gloo_timers::callback::{Interval, Timeout};

const PROCESSING_BADGE_SELECTOR: &str = ".badge.status-processing";

/// Start the page's polling session when processing badges are present.
pub(crate) fn init() {
    let Ok(badges) = document().query_selector_all(PROCESSING_BADGE_SELECTOR) else {
        return;
    };
    if badges.length() == 0 {
        return;
    }
    console::log!(
        "processing documents found, starting auto-refresh",
        badges.length()
    );

    let poll = Interval::new(POLL_INTERVAL_MS, super::reload_page);
    Timeout::new(POLL_EXPIRY_MS, move || {
        poll.cancel();
        console::log!("auto-refresh stopped after 5 minutes");
    })
    .forget();
}
