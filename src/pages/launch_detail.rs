//! Launch Detail - `/launches/:id`
//!
//! One query per mount with every relation populated, then a grid of
//! sections rendered from the normalized view. Sections backed by
//! empty collections are not mounted at all.

use dioxus::prelude::*;

use orbitdeck_core::types::Launch;
use orbitdeck_core::view::LaunchView;
use orbitdeck_core::{DetailState, Resource};
use orbitdeck_ui::{ExternalLink, ImageFrame, LabeledField, LoadingSpinner, SectionCard, StatusField};

use crate::components::cards::{
    CapsuleRail, FailurePanel, LaunchpadCard, PayloadRail, RocketCard, ShipRail,
};
use crate::components::{NavHeader, YoutubeEmbed};
use crate::lifecycle::use_detail_query;

/// Relations embedded in the launch query.
const POPULATE: &[&str] = &["payloads", "launchpad", "rocket", "capsules", "ships"];

#[component]
pub fn LaunchDetail(id: String) -> Element {
    let state = use_detail_query::<Launch>(Resource::Launches, id, POPULATE);

    match &*state.read() {
        DetailState::Loading => rsx! { LoadingSpinner {} },
        // Navigation to the error surface is already in flight.
        DetailState::NavigatedAway => rsx! {},
        DetailState::Populated(launch) => {
            let view = LaunchView::from(launch);
            rsx! {
                main { class: "detail-page",
                    NavHeader { heading: view.name.clone() }
                    div { class: "detail-grid",
                        SectionCard { title: Some("Details".to_string()),
                            div { class: "card-media-row",
                                ImageFrame {
                                    src: view.patch.clone(),
                                    alt: view.name.clone(),
                                    class: Some("card-patch".to_string()),
                                }
                                div {
                                    LabeledField {
                                        label: "Launch Date:".to_string(),
                                        value: view.date.clone(),
                                    }
                                    StatusField { label: "Success:".to_string(), value: view.success }
                                }
                            }
                            p { class: "details-text", "{view.details}" }
                            div { class: "link-row",
                                ExternalLink {
                                    href: view.article.clone(),
                                    label: "Article".to_string(),
                                }
                                ExternalLink {
                                    href: view.wikipedia.clone(),
                                    label: "Wikipedia".to_string(),
                                }
                            }
                        }

                        if let Some(video_id) = &view.video_id {
                            SectionCard { class: Some("webcast-card".to_string()),
                                YoutubeEmbed { video_id: video_id.clone() }
                            }
                        }

                        if view.has_failures() {
                            FailurePanel { failures: view.failures.clone() }
                        }

                        if let Some(rocket) = &view.rocket {
                            RocketCard { rocket: rocket.clone() }
                        }

                        if let Some(pad) = &view.launchpad {
                            LaunchpadCard { pad: pad.clone() }
                        }

                        if !view.payloads.is_empty() {
                            PayloadRail { payloads: view.payloads.clone() }
                        }

                        if !view.ships.is_empty() {
                            ShipRail { ships: view.ships.clone() }
                        }

                        if !view.capsules.is_empty() {
                            CapsuleRail { capsules: view.capsules.clone() }
                        }
                    }
                }
            }
        }
    }
}
