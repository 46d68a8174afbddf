//! Error page - the terminal failure surface.
//!
//! Every failed detail query lands here: the lifecycle stores the
//! normalized `{code, text}` notice in context and navigates. Opening
//! `/error` directly shows a generic notice.

use dioxus::prelude::*;

use orbitdeck_core::ErrorNotice;

use crate::app::Route;
use crate::context::use_pending_error;

#[component]
pub fn ErrorPage() -> Element {
    let pending = use_pending_error();
    let notice = pending().unwrap_or_else(|| ErrorNotice {
        code: 0,
        text: "Something went wrong".to_string(),
    });

    rsx! {
        main { class: "error-page",
            div { class: "error-card",
                h1 { class: "error-code", "{notice.code}" }
                p { class: "error-text", "{notice.text}" }
                Link { to: Route::Home {}, class: "inline-link", "Back to Orbitdeck" }
            }
        }
    }
}
