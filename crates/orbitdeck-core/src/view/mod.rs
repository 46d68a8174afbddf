//! Presentation normalizers.
//!
//! Raw documents are bags of optional fields; the display layer never
//! touches them directly. Each document type maps into a
//! fully-defaulted view model here, so every fallback rule lives in
//! one place and is testable without a UI.
//!
//! Fallback rules (shared by all views):
//! - absent or empty scalar text -> "N/A" (a few ship fields default
//!   to empty, matching their display)
//! - absent or zero numeric -> "N/A"
//! - collection rendered as a count -> "N/A" when empty
//! - absent boolean status -> negative
//! - empty collection -> the section is omitted entirely

mod launch;
mod payload;
mod ship;

pub use launch::{
    CapsuleView, FailureView, LaunchView, LaunchpadView, PayloadCardView, RocketView, ShipCardView,
};
pub use payload::{LaunchSummaryView, OrbitalView, PayloadView};
pub use ship::{ShipLaunchView, ShipView};

/// Placeholder for absent display values.
pub const NA: &str = "N/A";

/// Text fallback: absent and zero-length both read as "N/A".
pub(crate) fn text_or_na(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => NA.to_string(),
    }
}

/// Integer fallback: absent and zero both read as "N/A".
pub(crate) fn int_or_na(value: Option<i64>) -> String {
    match value {
        Some(n) if n != 0 => n.to_string(),
        _ => NA.to_string(),
    }
}

/// Float fallback: absent and zero both read as "N/A".
pub(crate) fn float_or_na(value: Option<f64>) -> String {
    match value {
        Some(n) if n != 0.0 => n.to_string(),
        _ => NA.to_string(),
    }
}

/// Collection-length fallback: an empty list counts as "N/A".
pub(crate) fn count_or_na(len: usize) -> String {
    if len == 0 {
        NA.to_string()
    } else {
        len.to_string()
    }
}

/// Format an RFC 3339 timestamp for display, e.g.
/// "March 24 2006, 10:30:00 PM". Absent or unparseable dates read as
/// "N/A".
pub(crate) fn format_timestamp(value: Option<&str>) -> String {
    value
        .and_then(|raw| chrono::DateTime::parse_from_rfc3339(raw).ok())
        .map(|date| date.format("%B %-d %Y, %-I:%M:%S %p").to_string())
        .unwrap_or_else(|| NA.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_fallbacks() {
        assert_eq!(text_or_na(Some("Falcon 9")), "Falcon 9");
        assert_eq!(text_or_na(Some("")), NA);
        assert_eq!(text_or_na(None), NA);
    }

    #[test]
    fn numeric_fallbacks_treat_zero_as_absent() {
        assert_eq!(int_or_na(Some(12)), "12");
        assert_eq!(int_or_na(Some(0)), NA);
        assert_eq!(int_or_na(None), NA);
        assert_eq!(float_or_na(Some(53.0043)), "53.0043");
        assert_eq!(float_or_na(Some(0.0)), NA);
        assert_eq!(float_or_na(None), NA);
    }

    #[test]
    fn count_fallback() {
        assert_eq!(count_or_na(0), NA);
        assert_eq!(count_or_na(3), "3");
    }

    #[test]
    fn timestamp_formatting() {
        assert_eq!(
            format_timestamp(Some("2006-03-24T22:30:00.000Z")),
            "March 24 2006, 10:30:00 PM"
        );
        assert_eq!(format_timestamp(Some("not a date")), NA);
        assert_eq!(format_timestamp(None), NA);
    }
}
