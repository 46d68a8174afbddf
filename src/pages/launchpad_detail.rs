//! Launchpad Detail - `/launchpads/:id`
//!
//! Target of the launchpad cross-link on the launch page.

use dioxus::prelude::*;

use orbitdeck_core::types::Launchpad;
use orbitdeck_core::view::LaunchpadView;
use orbitdeck_core::{DetailState, Resource};
use orbitdeck_ui::{ImageFrame, LabeledField, LoadingSpinner, SectionCard, StatusField};

use crate::components::NavHeader;
use crate::lifecycle::use_detail_query;

const POPULATE: &[&str] = &[];

#[component]
pub fn LaunchpadDetail(id: String) -> Element {
    let state = use_detail_query::<Launchpad>(Resource::Launchpads, id, POPULATE);

    match &*state.read() {
        DetailState::Loading => rsx! { LoadingSpinner {} },
        DetailState::NavigatedAway => rsx! {},
        DetailState::Populated(pad) => {
            let view = LaunchpadView::from(pad);
            rsx! {
                main { class: "detail-page",
                    NavHeader { heading: view.full_name.clone() }
                    div { class: "detail-column",
                        SectionCard { title: Some("Details".to_string()),
                            div { class: "card-media-row",
                                ImageFrame {
                                    src: view.image.clone(),
                                    alt: view.full_name.clone(),
                                    class: Some("card-photo-wide".to_string()),
                                }
                                div {
                                    LabeledField {
                                        label: "Region:".to_string(),
                                        value: view.region.clone(),
                                    }
                                    LabeledField {
                                        label: "Locality:".to_string(),
                                        value: view.locality.clone(),
                                    }
                                    LabeledField {
                                        label: "Timezone:".to_string(),
                                        value: view.timezone.clone(),
                                    }
                                    LabeledField {
                                        label: "Number of Launches:".to_string(),
                                        value: view.launch_count.clone(),
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
