//! Payload document.

use serde::Deserialize;

use super::{Launch, Relation};

/// A payload record, optionally carrying its populated launch.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Payload {
    pub id: String,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub orbit: Option<String>,
    pub mass_lbs: Option<f64>,
    pub reused: Option<bool>,

    // Orbital parameters
    pub reference_system: Option<String>,
    pub regime: Option<String>,
    pub semi_major_axis_km: Option<f64>,
    pub eccentricity: Option<f64>,
    pub periapsis_km: Option<f64>,
    pub apoapsis_km: Option<f64>,
    pub inclination_deg: Option<f64>,
    pub period_min: Option<f64>,
    /// RFC 3339 orbital epoch.
    pub epoch: Option<String>,

    pub launch: Option<Relation<Launch>>,
}
