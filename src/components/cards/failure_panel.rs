//! Failure panel on the launch detail page.
//!
//! Only mounted for an unsuccessful launch with recorded failures.

use dioxus::prelude::*;

use orbitdeck_core::view::FailureView;
use orbitdeck_ui::{LabeledField, SectionCard};

#[component]
pub fn FailurePanel(failures: Vec<FailureView>) -> Element {
    rsx! {
        SectionCard { title: Some("Failures".to_string()),
            div { class: "failure-list",
                for (index, failure) in failures.iter().enumerate() {
                    div { key: "{index}", class: "failure-entry",
                        LabeledField {
                            label: "Time:".to_string(),
                            value: format!("{} seconds", failure.time),
                        }
                        LabeledField {
                            label: "Reason:".to_string(),
                            value: failure.reason.clone(),
                        }
                    }
                }
            }
        }
    }
}
