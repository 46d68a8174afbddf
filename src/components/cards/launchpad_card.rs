//! Launchpad card on the launch detail page.

use dioxus::prelude::*;

use orbitdeck_core::view::LaunchpadView;
use orbitdeck_ui::{ImageFrame, LabeledField, SectionCard, StatusField};

use crate::app::Route;

#[component]
pub fn LaunchpadCard(pad: LaunchpadView) -> Element {
    rsx! {
        SectionCard {
            Link {
                to: Route::LaunchpadDetail { id: pad.id.clone() },
                class: "card-title-link",
                h2 { class: "section-title", "Launch Pad: {pad.full_name}" }
            }
            div { class: "card-media-row",
                ImageFrame {
                    src: pad.image.clone(),
                    alt: pad.full_name.clone(),
                    class: Some("card-photo".to_string()),
                }
                div {
                    LabeledField {
                        label: "Region:".to_string(),
                        value: pad.region.clone(),
                    }
                    LabeledField {
                        label: "Locality:".to_string(),
                        value: pad.locality.clone(),
                    }
                    LabeledField {
                        label: "Timezone:".to_string(),
                        value: pad.timezone.clone(),
                    }
                    LabeledField {
                        label: "Number of Launches:".to_string(),
                        value: pad.launch_count.clone(),
                    }
                    StatusField { label: "Active:".to_string(), value: pad.active }
                }
            }
        }
    }
}
