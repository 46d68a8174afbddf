//! Capsule rail on the launch detail page.
//!
//! Capsules have no detail route of their own; the cards are plain.

use dioxus::prelude::*;

use orbitdeck_core::view::CapsuleView;
use orbitdeck_ui::{LabeledField, SectionCard};

#[component]
pub fn CapsuleRail(capsules: Vec<CapsuleView>) -> Element {
    rsx! {
        SectionCard { title: Some("Capsules".to_string()),
            div { class: "card-rail",
                for capsule in &capsules {
                    div { key: "{capsule.serial}", class: "rail-card",
                        h3 { class: "rail-card-title", "{capsule.serial}" }
                        LabeledField {
                            label: "Type:".to_string(),
                            value: capsule.kind.clone(),
                        }
                        LabeledField {
                            label: "Status:".to_string(),
                            value: capsule.status.clone(),
                        }
                        LabeledField {
                            label: "Land Landings:".to_string(),
                            value: capsule.land_landings.clone(),
                        }
                        LabeledField {
                            label: "Water Landings:".to_string(),
                            value: capsule.water_landings.clone(),
                        }
                        LabeledField {
                            label: "Last Update:".to_string(),
                            value: capsule.last_update.clone(),
                        }
                    }
                }
            }
        }
    }
}
