//! External Link Component
//!
//! Outbound links carry URLs taken verbatim from fetched documents,
//! so they always open in a new window with `rel="noopener
//! noreferrer"`. An absent URL falls back to "#".

use dioxus::prelude::*;

/// Resolve the href for an optional document URL.
pub fn href_or_hash(url: Option<&str>) -> String {
    match url {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => "#".to_string(),
    }
}

/// Properties for the ExternalLink component
#[derive(Clone, PartialEq, Props)]
pub struct ExternalLinkProps {
    /// Target URL, verbatim from the document
    pub href: Option<String>,
    /// Link text
    pub label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Outbound link with safe-link attributes
#[component]
pub fn ExternalLink(props: ExternalLinkProps) -> Element {
    let href = href_or_hash(props.href.as_deref());
    let extra_class = props.class.as_deref().unwrap_or("");
    let full_class = if extra_class.is_empty() {
        "external-link".to_string()
    } else {
        format!("external-link {}", extra_class)
    };

    rsx! {
        a {
            class: "{full_class}",
            href: "{href}",
            target: "_blank",
            rel: "noopener noreferrer",
            "{props.label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_url_is_used_verbatim() {
        assert_eq!(
            href_or_hash(Some("https://en.wikipedia.org/wiki/SpaceX_CRS-20")),
            "https://en.wikipedia.org/wiki/SpaceX_CRS-20"
        );
    }

    #[test]
    fn absent_url_falls_back_to_hash() {
        assert_eq!(href_or_hash(None), "#");
        assert_eq!(href_or_hash(Some("")), "#");
    }
}
