//! Launch summary card on the payload detail page.

use dioxus::prelude::*;

use orbitdeck_core::view::LaunchSummaryView;
use orbitdeck_ui::{ExternalLink, ImageFrame, LabeledField, SectionCard, StatusField};

use crate::app::Route;

#[component]
pub fn LaunchSummaryCard(launch: LaunchSummaryView) -> Element {
    rsx! {
        SectionCard { title: Some("Launch Details".to_string()),
            Link {
                to: Route::LaunchDetail { id: launch.id.clone() },
                class: "card-title-link",
                h3 { class: "rail-card-title", "{launch.name}" }
            }
            div { class: "card-media-row",
                ImageFrame {
                    src: launch.patch.clone(),
                    alt: launch.name.clone(),
                    class: Some("card-patch".to_string()),
                }
                div {
                    LabeledField {
                        label: "Launch Date:".to_string(),
                        value: launch.date.clone(),
                    }
                    StatusField { label: "Success:".to_string(), value: launch.success }
                }
            }
            p { class: "details-text", "{launch.details}" }
            div { class: "link-row",
                ExternalLink { href: launch.article.clone(), label: "Article".to_string() }
                ExternalLink { href: launch.wikipedia.clone(), label: "Wikipedia".to_string() }
            }
        }
    }
}
