//! Video identifier extraction from webcast URLs.

use std::sync::LazyLock;

use regex::Regex;

/// Matches the 11-character video id in canonical (`watch?v=`), short
/// (`youtu.be/`), embed (`/embed/`) and `/v/` YouTube URL shapes.
static VIDEO_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?:youtube\.com/(?:[^/]+/.+/|(?:v|e(?:mbed)?)/|.*[?&]v=)|youtu\.be/)([^"&?/ ]{11})"#,
    )
    .expect("video id pattern")
});

/// Extract the video identifier from a freeform video-hosting URL.
///
/// Returns the first matching 11-character identifier, or `None` when
/// the URL matches no known shape.
pub fn video_id(url: &str) -> Option<&str> {
    VIDEO_ID
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_watch_url() {
        assert_eq!(
            video_id("https://www.youtube.com/watch?v=dLQ2tZEH6G0"),
            Some("dLQ2tZEH6G0")
        );
    }

    #[test]
    fn short_url() {
        assert_eq!(video_id("https://youtu.be/dLQ2tZEH6G0"), Some("dLQ2tZEH6G0"));
    }

    #[test]
    fn embed_url() {
        assert_eq!(
            video_id("https://www.youtube.com/embed/dLQ2tZEH6G0"),
            Some("dLQ2tZEH6G0")
        );
    }

    #[test]
    fn legacy_v_url() {
        assert_eq!(
            video_id("https://www.youtube.com/v/dLQ2tZEH6G0"),
            Some("dLQ2tZEH6G0")
        );
    }

    #[test]
    fn watch_url_with_extra_query_params() {
        assert_eq!(
            video_id("https://www.youtube.com/watch?feature=share&v=dLQ2tZEH6G0"),
            Some("dLQ2tZEH6G0")
        );
    }

    #[test]
    fn non_matching_url_yields_none() {
        assert_eq!(video_id("https://spacex.com/webcast"), None);
        assert_eq!(video_id(""), None);
        assert_eq!(video_id("https://youtube.com/watch?v=short"), None);
    }
}
