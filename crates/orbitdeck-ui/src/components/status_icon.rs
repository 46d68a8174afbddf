//! Boolean Status Icon Component
//!
//! Renders one of two fixed iconographic states for boolean-like
//! document fields (success, active, reused). There is no third
//! "unknown" state: the normalizers collapse an absent value to
//! negative before it reaches this component.

use dioxus::prelude::*;

/// The two displayable status states.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StatusKind {
    /// Green check circle.
    Affirmative,
    /// Red cross circle.
    Negative,
}

impl StatusKind {
    /// Map a normalized boolean onto its icon state.
    pub fn from_flag(value: bool) -> Self {
        if value {
            StatusKind::Affirmative
        } else {
            StatusKind::Negative
        }
    }

    /// Returns the CSS class for this state
    pub fn class(&self) -> &'static str {
        match self {
            StatusKind::Affirmative => "status-icon affirmative",
            StatusKind::Negative => "status-icon negative",
        }
    }

    /// Accessible label for screen readers
    pub fn label(&self) -> &'static str {
        match self {
            StatusKind::Affirmative => "Yes",
            StatusKind::Negative => "No",
        }
    }
}

/// Properties for the StatusIcon component
#[derive(Clone, PartialEq, Props)]
pub struct StatusIconProps {
    /// Normalized boolean value to display
    pub value: bool,
}

/// Check-circle / cross-circle icon for boolean document fields
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     StatusIcon { value: view.success }
/// }
/// ```
#[component]
pub fn StatusIcon(props: StatusIconProps) -> Element {
    let kind = StatusKind::from_flag(props.value);

    rsx! {
        span {
            class: kind.class(),
            role: "img",
            "aria-label": kind.label(),
            {render_status_icon(kind)}
        }
    }
}

/// Render the Lucide icon for a status state
fn render_status_icon(kind: StatusKind) -> Element {
    match kind {
        StatusKind::Affirmative => rsx! {
            // Lucide circle-check icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "18",
                height: "18",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                circle { cx: "12", cy: "12", r: "10" }
                path { d: "m9 12 2 2 4-4" }
            }
        },
        StatusKind::Negative => rsx! {
            // Lucide circle-x icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "18",
                height: "18",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                circle { cx: "12", cy: "12", r: "10" }
                path { d: "m15 9-6 6" }
                path { d: "m9 9 6 6" }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_kind_from_flag() {
        assert_eq!(StatusKind::from_flag(true), StatusKind::Affirmative);
        assert_eq!(StatusKind::from_flag(false), StatusKind::Negative);
    }

    #[test]
    fn status_kind_classes() {
        assert_eq!(StatusKind::Affirmative.class(), "status-icon affirmative");
        assert_eq!(StatusKind::Negative.class(), "status-icon negative");
    }

    #[test]
    fn status_kind_labels() {
        assert_eq!(StatusKind::Affirmative.label(), "Yes");
        assert_eq!(StatusKind::Negative.label(), "No");
    }
}
