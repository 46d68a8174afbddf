//! Launch history grid on the ship detail page.

use dioxus::prelude::*;

use orbitdeck_core::view::ShipLaunchView;
use orbitdeck_ui::{ExternalLink, ImageFrame, LabeledField, SectionCard, StatusField};

use crate::app::Route;

#[component]
pub fn LaunchHistory(launches: Vec<ShipLaunchView>) -> Element {
    rsx! {
        SectionCard { title: Some("Launches".to_string()),
            ul { class: "launch-grid",
                for launch in &launches {
                    li { key: "{launch.id}", class: "launch-entry",
                        div {
                            Link {
                                to: Route::LaunchDetail { id: launch.id.clone() },
                                class: "card-title-link",
                                h3 { class: "rail-card-title", "{launch.name}" }
                            }
                            LabeledField {
                                label: "Flight Number:".to_string(),
                                value: launch.flight_number.clone(),
                            }
                            LabeledField {
                                label: "Number of Ships:".to_string(),
                                value: launch.ship_count.to_string(),
                            }
                            LabeledField {
                                label: "Number of Capsules:".to_string(),
                                value: launch.capsule_count.to_string(),
                            }
                            LabeledField {
                                label: "Number of Payloads:".to_string(),
                                value: launch.payload_count.to_string(),
                            }
                            StatusField { label: "Success:".to_string(), value: launch.success }
                            div { class: "link-row",
                                ExternalLink {
                                    href: launch.article.clone(),
                                    label: "Article".to_string(),
                                }
                                ExternalLink {
                                    href: launch.wikipedia.clone(),
                                    label: "Wikipedia".to_string(),
                                }
                            }
                        }
                        ImageFrame {
                            src: launch.patch.clone(),
                            alt: launch.name.clone(),
                            class: Some("card-patch".to_string()),
                        }
                    }
                }
            }
        }
    }
}
