//! Visual theme for Orbitdeck.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
