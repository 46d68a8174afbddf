//! Ship rail on the launch detail page.

use dioxus::prelude::*;

use orbitdeck_core::view::ShipCardView;
use orbitdeck_ui::{LabeledField, SectionCard, StatusField};

use crate::app::Route;

#[component]
pub fn ShipRail(ships: Vec<ShipCardView>) -> Element {
    rsx! {
        SectionCard { title: Some("Ships".to_string()),
            div { class: "card-rail",
                for ship in &ships {
                    div { key: "{ship.id}", class: "rail-card",
                        Link {
                            to: Route::ShipDetail { id: ship.id.clone() },
                            class: "card-title-link",
                            h3 { class: "rail-card-title", "{ship.name}" }
                        }
                        LabeledField {
                            label: "Type:".to_string(),
                            value: ship.kind.clone(),
                        }
                        LabeledField {
                            label: "Home Port:".to_string(),
                            value: ship.home_port.clone(),
                        }
                        LabeledField {
                            label: "Number of Launches:".to_string(),
                            value: ship.launch_count.clone(),
                        }
                        StatusField { label: "Active:".to_string(), value: ship.active }
                    }
                }
            }
        }
    }
}
