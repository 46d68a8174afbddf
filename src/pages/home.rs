//! Home page - Entry point to Orbitdeck.
//!
//! Detail pages are addressed by document identifier; this page is
//! the manual way in when you are not following a cross-link.

use dioxus::prelude::*;

use crate::app::Route;

/// Example identifier shown as a hint (CRS-20).
const SAMPLE_LAUNCH_ID: &str = "5eb87cd9ffd86e000604b32a";

/// Landing page with open-by-identifier inputs.
#[component]
pub fn Home() -> Element {
    let navigator = use_navigator();
    let mut identifier = use_signal(String::new);

    let open = move |make: fn(String) -> Route| {
        let id = identifier().trim().to_string();
        if !id.is_empty() {
            navigator.push(make(id));
        }
    };

    rsx! {
        main { class: "home",
            header { class: "home-header",
                h1 { class: "page-title", "Orbitdeck" }
                p { class: "tagline", "launches, payloads and ships from the public record" }
            }

            section { class: "home-open",
                h2 { class: "section-title", "Open a record" }
                input {
                    class: "id-input",
                    r#type: "text",
                    value: "{identifier()}",
                    placeholder: "document identifier, e.g. {SAMPLE_LAUNCH_ID}",
                    oninput: move |e| identifier.set(e.value()),
                }
                div { class: "home-actions",
                    button {
                        class: "open-btn",
                        onclick: move |_| open(|id| Route::LaunchDetail { id }),
                        "Open Launch"
                    }
                    button {
                        class: "open-btn",
                        onclick: move |_| open(|id| Route::PayloadDetail { id }),
                        "Open Payload"
                    }
                    button {
                        class: "open-btn",
                        onclick: move |_| open(|id| Route::ShipDetail { id }),
                        "Open Ship"
                    }
                }
                p { class: "home-hint",
                    "Try the sample launch: "
                    Link {
                        to: Route::LaunchDetail { id: SAMPLE_LAUNCH_ID.to_string() },
                        class: "inline-link",
                        "CRS-20"
                    }
                }
            }
        }
    }
}
