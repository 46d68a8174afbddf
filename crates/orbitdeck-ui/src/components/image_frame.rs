//! Framed Image Component
//!
//! Document imagery (mission patches, pad photos, ship photos) is
//! frequently absent; this renders a styled placeholder block instead
//! of shipping a fallback asset.

use dioxus::prelude::*;

/// Properties for the ImageFrame component
#[derive(Clone, PartialEq, Props)]
pub struct ImageFrameProps {
    /// Image URL, verbatim from the document
    pub src: Option<String>,
    /// Alternative text for the image
    pub alt: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn ImageFrame(props: ImageFrameProps) -> Element {
    let extra_class = props.class.as_deref().unwrap_or("");
    let full_class = if extra_class.is_empty() {
        "image-frame".to_string()
    } else {
        format!("image-frame {}", extra_class)
    };

    rsx! {
        if let Some(src) = &props.src {
            img {
                class: "{full_class}",
                src: "{src}",
                alt: "{props.alt}",
            }
        } else {
            div {
                class: "{full_class} image-frame--empty",
                "aria-label": "No image",
                span { class: "image-frame__glyph", "∅" }
            }
        }
    }
}
