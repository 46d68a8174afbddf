//! Labeled Field Row Components
//!
//! One label/value row inside a detail card. Values arrive already
//! normalized ("N/A" fallbacks applied); these components never
//! inspect them.

use dioxus::prelude::*;

use super::status_icon::StatusIcon;

/// Properties for the LabeledField component
#[derive(Clone, PartialEq, Props)]
pub struct LabeledFieldProps {
    /// Field label, e.g. "Launch Date:"
    pub label: String,
    /// Pre-normalized display value
    pub value: String,
}

/// Text field row
#[component]
pub fn LabeledField(props: LabeledFieldProps) -> Element {
    rsx! {
        p { class: "field-row",
            span { class: "field-label", "{props.label} " }
            span { class: "field-value", "{props.value}" }
        }
    }
}

/// Properties for the StatusField component
#[derive(Clone, PartialEq, Props)]
pub struct StatusFieldProps {
    /// Field label, e.g. "Success:"
    pub label: String,
    /// Normalized boolean value
    pub value: bool,
}

/// Boolean field row: label followed by the two-state status icon
#[component]
pub fn StatusField(props: StatusFieldProps) -> Element {
    rsx! {
        p { class: "field-row",
            span { class: "field-label", "{props.label} " }
            StatusIcon { value: props.value }
        }
    }
}
