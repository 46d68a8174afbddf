//! Rocket Detail - `/rockets/:id`
//!
//! Target of the rocket cross-link on the launch page. Rockets embed
//! no relations, so the populate list is empty.

use dioxus::prelude::*;

use orbitdeck_core::types::Rocket;
use orbitdeck_core::view::RocketView;
use orbitdeck_core::{DetailState, Resource};
use orbitdeck_ui::{ImageFrame, LabeledField, LoadingSpinner, SectionCard, StatusField};

use crate::components::NavHeader;
use crate::lifecycle::use_detail_query;

const POPULATE: &[&str] = &[];

#[component]
pub fn RocketDetail(id: String) -> Element {
    let state = use_detail_query::<Rocket>(Resource::Rockets, id, POPULATE);

    match &*state.read() {
        DetailState::Loading => rsx! { LoadingSpinner {} },
        DetailState::NavigatedAway => rsx! {},
        DetailState::Populated(rocket) => {
            let view = RocketView::from(rocket);
            rsx! {
                main { class: "detail-page",
                    NavHeader { heading: view.name.clone() }
                    div { class: "detail-column",
                        SectionCard { title: Some("Details".to_string()),
                            div { class: "card-media-row",
                                ImageFrame {
                                    src: view.image.clone(),
                                    alt: view.name.clone(),
                                    class: Some("card-photo-wide".to_string()),
                                }
                                div {
                                    LabeledField {
                                        label: "Cost per launch:".to_string(),
                                        value: format!("{} USD", view.cost_per_launch),
                                    }
                                    LabeledField {
                                        label: "Success Rate:".to_string(),
                                        value: format!("{}%", view.success_rate),
                                    }
                                    LabeledField {
                                        label: "First Flight:".to_string(),
                                        value: view.first_flight.clone(),
                                    }
                                    StatusField { label: "Active:".to_string(), value: view.active }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
