//! Rocket card on the launch detail page.

use dioxus::prelude::*;

use orbitdeck_core::view::RocketView;
use orbitdeck_ui::{ImageFrame, LabeledField, SectionCard, StatusField};

use crate::app::Route;

#[component]
pub fn RocketCard(rocket: RocketView) -> Element {
    rsx! {
        SectionCard {
            Link {
                to: Route::RocketDetail { id: rocket.id.clone() },
                class: "card-title-link",
                h2 { class: "section-title", "Rocket: {rocket.name}" }
            }
            div { class: "card-media-row",
                ImageFrame {
                    src: rocket.image.clone(),
                    alt: rocket.name.clone(),
                    class: Some("card-photo".to_string()),
                }
                div {
                    LabeledField {
                        label: "Cost per launch:".to_string(),
                        value: format!("{} USD", rocket.cost_per_launch),
                    }
                    LabeledField {
                        label: "Success Rate:".to_string(),
                        value: format!("{}%", rocket.success_rate),
                    }
                    LabeledField {
                        label: "First Flight:".to_string(),
                        value: rocket.first_flight.clone(),
                    }
                    StatusField { label: "Active:".to_string(), value: rocket.active }
                }
            }
        }
    }
}
