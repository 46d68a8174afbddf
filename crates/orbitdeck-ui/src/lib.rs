//! Orbitdeck UI Components
//!
//! Generic presentational Dioxus components shared by the detail
//! pages: status icons, labeled field rows, section cards, the loading
//! spinner, framed images with a built-in placeholder, and external
//! links with safe-link attributes.
//!
//! Everything here is display-only: no component in this crate issues
//! a query or owns navigation. Data arrives fully defaulted from the
//! presentation normalizers.

pub mod components;

pub use components::*;
