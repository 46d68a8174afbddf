//! Navigation Header Component
//!
//! Slim top bar: app title linking back to the landing page, plus the
//! current page heading.

use dioxus::prelude::*;

use crate::app::Route;

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Heading of the current page, already normalized
    pub heading: String,
}

#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    rsx! {
        header { class: "nav-header",
            div { class: "nav-header-inner",
                Link { to: Route::Home {}, class: "nav-title", "Orbitdeck" }
                h1 { class: "nav-heading", "{props.heading}" }
            }
        }
    }
}
