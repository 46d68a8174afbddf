//! The shared fetch-populate-render lifecycle.
//!
//! Every detail page is a thin configuration (resource, populate
//! list, field layout) over this one hook. Contract: exactly one
//! query per mount, resolving into exactly one of two outcomes — a
//! populated document handed to the renderer, or a navigation to the
//! error surface carrying `{code, text}`.

use dioxus::prelude::*;
use serde::de::DeserializeOwned;

use orbitdeck_core::{DetailState, Resource};

use crate::app::Route;
use crate::context::{use_client, use_pending_error};

/// Fetch one document by identifier with the given relations
/// populated, driving a [`DetailState`] signal.
///
/// The fetch task is scoped to the component, so unmount cancels it;
/// independently, `DetailState::resolve` only acts from `Loading`, so
/// a stale resolution can never overwrite a settled view. On failure
/// the notice is stored in context and the router is pushed to
/// `/error` — the page itself renders nothing further.
pub fn use_detail_query<T>(
    resource: Resource,
    id: String,
    populate: &'static [&'static str],
) -> Signal<DetailState<T>>
where
    T: DeserializeOwned + Clone + PartialEq + 'static,
{
    let client = use_client();
    let navigator = use_navigator();
    let mut pending_error = use_pending_error();
    let mut state: Signal<DetailState<T>> = use_signal(|| DetailState::Loading);

    use_effect(move || {
        // Gate on the lifecycle state, not the effect: a settled view
        // never re-fetches, whatever re-runs this closure.
        if !state.peek().is_loading() {
            return;
        }

        let client = client.peek().clone();
        let id = id.clone();
        spawn(async move {
            let outcome = client.query_one::<T>(resource, &id, populate).await;
            if let Err(ref err) = outcome {
                tracing::error!(%resource, id = %id, error = %err, "detail query failed");
            }

            if let Some(notice) = state.write().resolve(outcome) {
                pending_error.set(Some(notice));
                navigator.push(Route::ErrorPage {});
            }
        });
    });

    state
}
