//! Payload Detail - `/payloads/:id`

use dioxus::prelude::*;

use orbitdeck_core::types::Payload;
use orbitdeck_core::view::PayloadView;
use orbitdeck_core::{DetailState, Resource};
use orbitdeck_ui::{LabeledField, LoadingSpinner, SectionCard, StatusField};

use crate::components::cards::LaunchSummaryCard;
use crate::components::{NavHeader, YoutubeEmbed};
use crate::lifecycle::use_detail_query;

/// Relations embedded in the payload query. The nested rocket and
/// launchpad ride along with the launch document.
const POPULATE: &[&str] = &["launch.rocket", "launch", "launch.launchpad"];

#[component]
pub fn PayloadDetail(id: String) -> Element {
    let state = use_detail_query::<Payload>(Resource::Payloads, id, POPULATE);

    match &*state.read() {
        DetailState::Loading => rsx! { LoadingSpinner {} },
        DetailState::NavigatedAway => rsx! {},
        DetailState::Populated(payload) => {
            let view = PayloadView::from(payload);
            rsx! {
                main { class: "detail-page",
                    NavHeader { heading: view.name.clone() }
                    div { class: "detail-grid",
                        SectionCard { title: Some("Details".to_string()),
                            LabeledField {
                                label: "Type:".to_string(),
                                value: view.kind.clone(),
                            }
                            LabeledField {
                                label: "Orbit:".to_string(),
                                value: view.orbit.clone(),
                            }
                            if let Some(mass) = &view.mass {
                                LabeledField {
                                    label: "Mass:".to_string(),
                                    value: mass.clone(),
                                }
                            }
                            StatusField { label: "Reused:".to_string(), value: view.reused }
                        }

                        SectionCard { title: Some("Orbital parameters".to_string()),
                            if let Some(reference_system) = &view.orbital.reference_system {
                                LabeledField {
                                    label: "Reference System:".to_string(),
                                    value: reference_system.clone(),
                                }
                            }
                            if let Some(regime) = &view.orbital.regime {
                                LabeledField {
                                    label: "Regime:".to_string(),
                                    value: regime.clone(),
                                }
                            }
                            if let Some(semi_major_axis) = &view.orbital.semi_major_axis {
                                LabeledField {
                                    label: "Semi-major axis:".to_string(),
                                    value: semi_major_axis.clone(),
                                }
                            }
                            if let Some(eccentricity) = &view.orbital.eccentricity {
                                LabeledField {
                                    label: "Eccentricity:".to_string(),
                                    value: eccentricity.clone(),
                                }
                            }
                            if let Some(periapsis) = &view.orbital.periapsis {
                                LabeledField {
                                    label: "Perigee altitude:".to_string(),
                                    value: format!("{} km", periapsis),
                                }
                            }
                            if let Some(apoapsis) = &view.orbital.apoapsis {
                                LabeledField {
                                    label: "Apogee altitude:".to_string(),
                                    value: format!("{} km", apoapsis),
                                }
                            }
                            if let Some(inclination) = &view.orbital.inclination {
                                LabeledField {
                                    label: "Inclination:".to_string(),
                                    value: format!("{}\u{00b0}", inclination),
                                }
                            }
                            if let Some(period) = &view.orbital.period {
                                LabeledField {
                                    label: "Period:".to_string(),
                                    value: format!("{} minutes", period),
                                }
                            }
                            if let Some(epoch) = &view.orbital.epoch {
                                LabeledField {
                                    label: "Epoch:".to_string(),
                                    value: epoch.clone(),
                                }
                            }
                        }

                        if let Some(launch) = &view.launch {
                            if let Some(video_id) = &launch.video_id {
                                SectionCard { class: Some("webcast-card".to_string()),
                                    YoutubeEmbed { video_id: video_id.clone() }
                                }
                            }
                            LaunchSummaryCard { launch: launch.clone() }
                        }
                    }
                }
            }
        }
    }
}
