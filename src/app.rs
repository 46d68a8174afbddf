use std::sync::Arc;

use dioxus::prelude::*;

use orbitdeck_core::{ErrorNotice, QueryClient};

use crate::context::SharedClient;
use crate::pages::{
    ErrorPage, Home, LaunchDetail, LaunchpadDetail, PayloadDetail, RocketDetail, ShipDetail,
};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page with open-by-identifier inputs
/// - `/launches/:id`, `/payloads/:id`, `/ships/:id`, `/rockets/:id`,
///   `/launchpads/:id` - Detail pages for a single document
/// - `/error` - Generic failure surface; the notice travels via
///   context, set immediately before navigating here
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/launches/:id")]
    LaunchDetail { id: String },
    #[route("/payloads/:id")]
    PayloadDetail { id: String },
    #[route("/ships/:id")]
    ShipDetail { id: String },
    #[route("/rockets/:id")]
    RocketDetail { id: String },
    #[route("/launchpads/:id")]
    LaunchpadDetail { id: String },
    #[route("/error")]
    ErrorPage {},
}

/// Root application component.
///
/// Provides global styles, the shared query client, the pending error
/// notice slot, and routing.
#[component]
pub fn App() -> Element {
    // One client for the whole session; detail pages read it from
    // context.
    let client: Signal<SharedClient> =
        use_signal(|| Arc::new(QueryClient::new(crate::get_api_url())));
    let pending_error: Signal<Option<ErrorNotice>> = use_signal(|| None);

    use_context_provider(|| client);
    use_context_provider(|| pending_error);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
