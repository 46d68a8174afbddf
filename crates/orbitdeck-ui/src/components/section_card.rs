//! Section Card Component
//!
//! The white bordered card every detail section sits in. Sections for
//! empty collections are never mounted at all, so this component has
//! no empty state.

use dioxus::prelude::*;

/// Properties for the SectionCard component
#[derive(Clone, PartialEq, Props)]
pub struct SectionCardProps {
    /// Card heading; omitted entirely when `None`
    #[props(default)]
    pub title: Option<String>,
    /// Card body
    pub children: Element,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn SectionCard(props: SectionCardProps) -> Element {
    let extra_class = props.class.as_deref().unwrap_or("");
    let full_class = if extra_class.is_empty() {
        "section-card".to_string()
    } else {
        format!("section-card {}", extra_class)
    };

    rsx! {
        div { class: "{full_class}",
            if let Some(title) = &props.title {
                h2 { class: "section-title", "{title}" }
            }
            {props.children}
        }
    }
}
