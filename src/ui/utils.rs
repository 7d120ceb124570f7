//! Display formatting shared by the page models.

use chrono::{DateTime, Utc};

/// Formats seconds as `m:ss`.
///
/// Negative or non-finite input renders as `0:00`.
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }

    // Truncation is intended: 59.9s is still 0:59
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Formats a creation timestamp for track rows, e.g. `Jan 2, 2026`.
#[must_use]
pub fn format_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y").to_string()
}

/// Shortens `text` to at most `max_chars` characters, marking the cut with
/// an ellipsis.
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}...", &text[..byte_index]),
        None => text.to_string(),
    }
}
