//! Payload detail view model.

use crate::types::{Launch, Payload};
use crate::video;

use super::{format_timestamp, text_or_na};

/// Fully-defaulted payload detail, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct PayloadView {
    pub name: String,
    pub kind: String,
    pub orbit: String,
    /// Mass row, only shown when the document carries a mass.
    pub mass: Option<String>,
    pub reused: bool,
    pub orbital: OrbitalView,
    pub launch: Option<LaunchSummaryView>,
}

impl From<&Payload> for PayloadView {
    fn from(payload: &Payload) -> Self {
        Self {
            name: text_or_na(payload.name.as_deref()),
            kind: text_or_na(payload.kind.as_deref()),
            orbit: text_or_na(payload.orbit.as_deref()),
            mass: payload
                .mass_lbs
                .filter(|m| *m != 0.0)
                .map(|m| format!("{} lbs", m)),
            reused: payload.reused.unwrap_or(false),
            orbital: OrbitalView::from(payload),
            launch: payload
                .launch
                .as_ref()
                .and_then(|rel| rel.doc())
                .map(LaunchSummaryView::from),
        }
    }
}

/// Orbital-parameter rows; each row is omitted when the document
/// carries no value for it.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalView {
    pub reference_system: Option<String>,
    pub regime: Option<String>,
    pub semi_major_axis: Option<String>,
    pub eccentricity: Option<String>,
    pub periapsis: Option<String>,
    pub apoapsis: Option<String>,
    pub inclination: Option<String>,
    pub period: Option<String>,
    pub epoch: Option<String>,
}

impl From<&Payload> for OrbitalView {
    fn from(payload: &Payload) -> Self {
        let number = |value: Option<f64>| value.filter(|n| *n != 0.0).map(|n| n.to_string());
        let text =
            |value: Option<&str>| value.filter(|s| !s.is_empty()).map(|s| s.to_string());
        Self {
            reference_system: text(payload.reference_system.as_deref()),
            regime: text(payload.regime.as_deref()),
            semi_major_axis: number(payload.semi_major_axis_km),
            eccentricity: number(payload.eccentricity),
            periapsis: number(payload.periapsis_km),
            apoapsis: number(payload.apoapsis_km),
            inclination: number(payload.inclination_deg),
            period: number(payload.period_min),
            epoch: payload
                .epoch
                .as_deref()
                .map(|raw| format_timestamp(Some(raw)))
                .filter(|formatted| formatted != super::NA),
        }
    }
}

/// Summary card of the payload's (or a ship's) populated launch.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchSummaryView {
    pub id: String,
    pub name: String,
    pub date: String,
    pub success: bool,
    pub details: String,
    pub patch: Option<String>,
    pub article: Option<String>,
    pub wikipedia: Option<String>,
    pub video_id: Option<String>,
}

impl From<&Launch> for LaunchSummaryView {
    fn from(launch: &Launch) -> Self {
        Self {
            id: launch.id.clone(),
            name: text_or_na(launch.name.as_deref()),
            date: format_timestamp(launch.date_utc.as_deref()),
            success: launch.success.unwrap_or(false),
            details: launch.details.clone().unwrap_or_default(),
            patch: launch.links.patch.large.clone(),
            article: launch.links.article.clone(),
            wikipedia: launch.links.wikipedia.clone(),
            video_id: launch
                .links
                .webcast
                .as_deref()
                .and_then(video::video_id)
                .map(str::to_string),
        }
    }
}
