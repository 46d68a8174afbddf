//! Orbitdeck Core Library
//!
//! Query client and presentation models for browsing spaceflight
//! records (launches, payloads, ships, rockets, launchpads, capsules)
//! from a remote document-query API.
//!
//! ## Overview
//!
//! Every detail view follows the same fetch-populate-render shape:
//! fetch one document by identifier with related documents populated,
//! normalize its optional fields into a fully-defaulted view model,
//! render. This crate holds everything below the UI:
//!
//! - [`QueryClient`]: `POST {resource}/query` with an `_id` filter and
//!   a populate list, answered by a `{docs: [...]}` envelope
//! - [`DetailState`]: the per-mount lifecycle (`Loading` ->
//!   `Populated` or terminal `NavigatedAway`), single transition
//!   guaranteed
//! - [`types`]: the externally-owned documents, loosely typed
//! - [`view`]: presentation normalizers applying the "N/A" / omitted
//!   section fallback policy
//!
//! ## Quick Start
//!
//! ```ignore
//! use orbitdeck_core::{LaunchView, QueryClient, Resource};
//! use orbitdeck_core::types::Launch;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = QueryClient::default();
//!     let launch: Launch = client
//!         .query_one(
//!             Resource::Launches,
//!             "5eb87cd9ffd86e000604b32a",
//!             &["payloads", "launchpad", "rocket", "capsules", "ships"],
//!         )
//!         .await?;
//!     let view = LaunchView::from(&launch);
//!     println!("{} ({})", view.name, view.date);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod detail;
pub mod error;
pub mod query;
pub mod types;
pub mod video;
pub mod view;

// Re-exports
pub use client::{QueryClient, DEFAULT_BASE_URL};
pub use detail::DetailState;
pub use error::{ApiError, ApiResult, ErrorNotice};
pub use query::{QueryRequest, QueryResponse, Resource};
pub use video::video_id;
pub use view::{LaunchView, PayloadView, ShipView};
