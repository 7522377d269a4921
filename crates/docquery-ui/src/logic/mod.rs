//! Pure behavior helpers kept DOM-free so they can run in native tests.

use crate::models::FileCheck;

/// Milliseconds between auto-refresh page reloads.
pub const POLL_INTERVAL_MS: u32 = 5_000;
/// Milliseconds after which the auto-refresh loop stops unconditionally.
pub const POLL_EXPIRY_MS: u32 = 300_000;
/// Delay before the first text input is focused on page load.
pub const AUTOFOCUS_DELAY_MS: u32 = 100;

/// Largest upload accepted client-side (10 MiB, matching the server cap).
pub const MAX_FILE_BYTES: u64 = 10 * 1024 * 1024;
/// Accepted upload types. Dot-prefixed entries match the filename extension,
/// bare entries match as a MIME substring.
pub const ALLOWED_FILE_TYPES: [&str; 5] = [".pdf", ".docx", ".txt", ".png", ".jpg"];

/// Semantic action for a global keyboard shortcut.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShortcutOutcome {
    /// Focus the canonical chat input.
    FocusChatInput,
    /// Blur whatever element currently holds focus.
    BlurActive,
}

/// Map a key press to a shortcut outcome.
#[must_use]
pub fn interpret_shortcut(key: &str, ctrl_or_meta: bool) -> Option<ShortcutOutcome> {
    match key {
        "k" | "K" if ctrl_or_meta => Some(ShortcutOutcome::FocusChatInput),
        "Escape" => Some(ShortcutOutcome::BlurActive),
        _ => None,
    }
}

/// Validate one file against the type allow-list and the size cap.
///
/// Both rules are evaluated even when the first fails, so a file can surface
/// one message per broken rule.
#[must_use]
pub fn validate_file(
    name: &str,
    mime: &str,
    size: u64,
    allowed: &[&str],
    max_bytes: u64,
) -> FileCheck {
    let extension = name
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    let mime = mime.to_ascii_lowercase();
    let type_ok = allowed.iter().any(|entry| {
        let entry = entry.to_ascii_lowercase();
        entry
            .strip_prefix('.')
            .map_or_else(|| mime.contains(&entry), |ext| extension == ext)
    });

    let mut errors = Vec::new();
    if !type_ok {
        errors.push(format!(
            "File type not supported. Allowed types: {}",
            allowed.join(", ")
        ));
    }
    if size > max_bytes {
        errors.push(format!(
            "File too large. Maximum size: {}",
            format_file_size(max_bytes)
        ));
    }
    FileCheck { errors }
}

/// Human-friendly byte formatter (base 1024, at most two decimals).
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;
    const GB: u64 = 1024 * 1024 * 1024;
    if bytes >= GB {
        format_scaled(bytes, GB, "GB")
    } else if bytes >= MB {
        format_scaled(bytes, MB, "MB")
    } else if bytes >= KB {
        format_scaled(bytes, KB, "KB")
    } else {
        format!("{bytes} Bytes")
    }
}

fn format_scaled(value: u64, unit: u64, label: &str) -> String {
    let mut whole = value / unit;
    // Round to hundredths, carrying when the fraction rounds up to one.
    let mut hundredths = ((value % unit) * 100 + unit / 2) / unit;
    if hundredths == 100 {
        whole += 1;
        hundredths = 0;
    }
    if hundredths == 0 {
        format!("{whole} {label}")
    } else if hundredths % 10 == 0 {
        format!("{whole}.{} {label}", hundredths / 10)
    } else {
        format!("{whole}.{hundredths:02} {label}")
    }
}

/// Pick the user-facing message for a failed request: the server's `error`
/// field when present, otherwise a generic message naming the status code.
#[must_use]
pub fn http_error_message(status: u16, body_error: Option<&str>) -> String {
    body_error
        .filter(|detail| !detail.trim().is_empty())
        .map_or_else(
            || format!("HTTP error! status: {status}"),
            ToString::to_string,
        )
}

/// Whether an uncaught error is the cross-origin placeholder browsers emit
/// for scripts they will not describe; those are logged but never toasted.
#[must_use]
pub fn is_benign_error(message: &str) -> bool {
    message.contains("Script error")
}

/// Leading-edge decision for the debounce wrapper: immediate mode fires at
/// once only when no invocation is already pending.
#[must_use]
pub const fn should_fire_leading(immediate: bool, pending: bool) -> bool {
    immediate && !pending
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_file_passes_both_rules() {
        let check = validate_file(
            "report.pdf",
            "application/pdf",
            1024,
            &ALLOWED_FILE_TYPES,
            MAX_FILE_BYTES,
        );
        assert!(check.is_valid());
        assert!(check.errors.is_empty());
    }

    #[test]
    fn wrong_type_yields_one_error() {
        let check = validate_file("notes.exe", "application/x-msdownload", 10, &[".pdf"], 1_000);
        assert_eq!(check.errors.len(), 1);
        assert!(check.errors[0].contains("File type not supported"));
    }

    #[test]
    fn oversized_file_yields_one_error() {
        let check = validate_file("a.pdf", "application/pdf", 2_000, &[".pdf"], 1_000);
        assert_eq!(check.errors.len(), 1);
        assert!(check.errors[0].contains("File too large"));
    }

    #[test]
    fn both_rules_fail_together() {
        let check = validate_file("a.txt", "text/plain", 2_000, &[".pdf"], 1_000);
        assert!(!check.is_valid());
        assert_eq!(check.errors.len(), 2);
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let check = validate_file(
            "SCAN.PDF",
            "application/pdf",
            10,
            &[".pdf"],
            MAX_FILE_BYTES,
        );
        assert!(check.is_valid());
    }

    #[test]
    fn bare_entries_match_mime_substrings() {
        let check = validate_file("photo", "image/png", 10, &["image/"], MAX_FILE_BYTES);
        assert!(check.is_valid());
        let miss = validate_file("photo", "video/mp4", 10, &["image/"], MAX_FILE_BYTES);
        assert!(!miss.is_valid());
    }

    #[test]
    fn size_message_names_the_cap() {
        let check = validate_file("a.pdf", "application/pdf", MAX_FILE_BYTES + 1, &[".pdf"], MAX_FILE_BYTES);
        assert_eq!(
            check.errors,
            vec!["File too large. Maximum size: 10 MB".to_string()]
        );
    }

    #[test]
    fn file_sizes_format_per_unit() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(2_560), "2.5 KB");
        assert_eq!(format_file_size(1_100), "1.07 KB");
        assert_eq!(format_file_size(1_535), "1.5 KB");
        assert_eq!(format_file_size(2_047), "2 KB");
        assert_eq!(format_file_size(10 * 1024 * 1024), "10 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
    }

    #[test]
    fn server_error_field_wins() {
        assert_eq!(http_error_message(400, Some("bad input")), "bad input");
    }

    #[test]
    fn fallback_message_names_the_status() {
        assert_eq!(http_error_message(502, None), "HTTP error! status: 502");
        assert!(http_error_message(404, Some("  ")).contains("404"));
    }

    #[test]
    fn benign_errors_are_recognised() {
        assert!(is_benign_error("Script error."));
        assert!(!is_benign_error("TypeError: x is undefined"));
    }

    #[test]
    fn shortcuts_require_their_modifiers() {
        assert_eq!(
            interpret_shortcut("k", true),
            Some(ShortcutOutcome::FocusChatInput)
        );
        assert_eq!(
            interpret_shortcut("K", true),
            Some(ShortcutOutcome::FocusChatInput)
        );
        assert!(interpret_shortcut("k", false).is_none());
        assert_eq!(
            interpret_shortcut("Escape", false),
            Some(ShortcutOutcome::BlurActive)
        );
        assert!(interpret_shortcut("Enter", true).is_none());
    }

    #[test]
    fn leading_edge_fires_only_when_idle() {
        assert!(should_fire_leading(true, false));
        assert!(!should_fire_leading(true, true));
        assert!(!should_fire_leading(false, false));
        assert!(!should_fire_leading(false, true));
    }

    #[test]
    fn polling_expiry_spans_whole_intervals() {
        assert_eq!(POLL_EXPIRY_MS % POLL_INTERVAL_MS, 0);
        assert_eq!(POLL_EXPIRY_MS / POLL_INTERVAL_MS, 60);
    }
}
