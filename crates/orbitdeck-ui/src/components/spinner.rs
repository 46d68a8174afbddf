//! Loading Spinner Component
//!
//! Shown while a detail query is in flight; the page renders this and
//! nothing else until the lifecycle resolves.

use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div { class: "loading-state",
            div {
                class: "loading-spinner",
                role: "status",
                "aria-label": "Loading",
            }
        }
    }
}
