//! Payload rail on the launch detail page.

use dioxus::prelude::*;

use orbitdeck_core::view::PayloadCardView;
use orbitdeck_ui::{LabeledField, SectionCard};

use crate::app::Route;

#[component]
pub fn PayloadRail(payloads: Vec<PayloadCardView>) -> Element {
    rsx! {
        SectionCard { title: Some("Payloads".to_string()),
            div { class: "card-rail",
                for payload in &payloads {
                    div { key: "{payload.id}", class: "rail-card",
                        Link {
                            to: Route::PayloadDetail { id: payload.id.clone() },
                            class: "card-title-link",
                            h3 { class: "rail-card-title", "{payload.name}" }
                        }
                        LabeledField {
                            label: "Type:".to_string(),
                            value: payload.kind.clone(),
                        }
                        LabeledField {
                            label: "Mass:".to_string(),
                            value: payload.mass.clone(),
                        }
                        LabeledField {
                            label: "Orbit:".to_string(),
                            value: payload.orbit.clone(),
                        }
                        LabeledField {
                            label: "Inclination:".to_string(),
                            value: payload.inclination.clone(),
                        }
                    }
                }
            }
        }
    }
}
