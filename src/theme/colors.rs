//! Color constants for the Orbitdeck palette.
//!
//! Clean mission-control look: white cards on a pale slate ground,
//! steel blue for links and accents, green/red for status icons.

#![allow(dead_code)]

// === GROUND (Backgrounds) ===
pub const GROUND: &str = "#f4f6f8";
pub const CARD: &str = "#ffffff";
pub const CARD_INSET: &str = "#f1f3f5";
pub const BORDER: &str = "#e2e6ea";

// === INK (Text) ===
pub const INK: &str = "#1d242b";
pub const INK_SOFT: &str = "#5b6672";
pub const INK_FAINT: &str = "#8b949e";

// === ACCENT ===
pub const ACCENT: &str = "#2d6cdf";
pub const ACCENT_DEEP: &str = "#1d4fa8";

// === STATUS ===
pub const GO: &str = "#1e9e50";
pub const NO_GO: &str = "#d6403a";
