//! Shared context for Orbitdeck.
//!
//! Provides the query client and the pending error notice to all
//! components via use_context.

use std::sync::Arc;

use dioxus::prelude::*;
use orbitdeck_core::{ErrorNotice, QueryClient};

/// Shared client type for context.
///
/// The client is wrapped in an Arc so every page clones a handle to
/// the same connection pool.
pub type SharedClient = Arc<QueryClient>;

/// Hook to access the QueryClient from context.
pub fn use_client() -> Signal<SharedClient> {
    use_context::<Signal<SharedClient>>()
}

/// Hook to access the pending error notice from context.
///
/// The detail lifecycle sets this immediately before navigating to
/// `/error`; the error page reads it. This is the sole channel by
/// which a failed query reaches the error surface.
pub fn use_pending_error() -> Signal<Option<ErrorNotice>> {
    use_context::<Signal<Option<ErrorNotice>>>()
}
