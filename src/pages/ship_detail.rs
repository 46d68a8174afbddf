//! Ship Detail - `/ships/:id`

use dioxus::prelude::*;

use orbitdeck_core::types::Ship;
use orbitdeck_core::view::ShipView;
use orbitdeck_core::{DetailState, Resource};
use orbitdeck_ui::{ExternalLink, ImageFrame, LabeledField, LoadingSpinner, SectionCard, StatusField};

use crate::components::cards::LaunchHistory;
use crate::components::NavHeader;
use crate::lifecycle::use_detail_query;

/// Relations embedded in the ship query.
const POPULATE: &[&str] = &["launches"];

#[component]
pub fn ShipDetail(id: String) -> Element {
    let state = use_detail_query::<Ship>(Resource::Ships, id, POPULATE);

    match &*state.read() {
        DetailState::Loading => rsx! { LoadingSpinner {} },
        DetailState::NavigatedAway => rsx! {},
        DetailState::Populated(ship) => {
            let view = ShipView::from(ship);
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
                                        label: "Type:".to_string(),
                                        value: view.kind.clone(),
                                    }
                                    LabeledField {
                                        label: "Home Port:".to_string(),
                                        value: view.home_port.clone(),
                                    }
                                    if let Some(mass) = &view.mass {
                                        LabeledField {
                                            label: "Mass:".to_string(),
                                            value: mass.clone(),
                                        }
                                    }
                                    if let Some(year_built) = &view.year_built {
                                        LabeledField {
                                            label: "Year Built:".to_string(),
                                            value: year_built.clone(),
                                        }
                                    }
                                    if !view.roles.is_empty() {
                                        div { class: "field-row",
                                            span { class: "field-label", "Roles: " }
                                            ul { class: "role-badges",
                                                for (index, role) in view.roles.iter().enumerate() {
                                                    li { key: "{index}", class: "role-badge", "{role}" }
                                                }
                                            }
                                        }
                                    }
                                    LabeledField {
                                        label: "Number of Launches:".to_string(),
                                        value: view.launch_count.to_string(),
                                    }
                                    StatusField { label: "Active:".to_string(), value: view.active }
                                    ExternalLink {
                                        href: view.link.clone(),
                                        label: "Link".to_string(),
                                        class: Some("ship-link".to_string()),
                                    }
                                }
                            }
                        }

                        if !view.launches.is_empty() {
                            LaunchHistory { launches: view.launches.clone() }
                        }
                    }
                }
            }
        }
    }
}
