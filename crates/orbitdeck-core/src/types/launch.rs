//! Launch document and its nested link/failure records.

use serde::Deserialize;

use super::{Capsule, Launchpad, Payload, Relation, Rocket, Ship};

/// A launch record with its optionally-populated relations.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Launch {
    pub id: String,
    pub name: Option<String>,
    pub flight_number: Option<i64>,
    /// RFC 3339 launch timestamp.
    pub date_utc: Option<String>,
    pub success: Option<bool>,
    pub details: Option<String>,
    #[serde(default)]
    pub links: LaunchLinks,
    #[serde(default)]
    pub failures: Vec<LaunchFailure>,
    pub rocket: Option<Relation<Rocket>>,
    pub launchpad: Option<Relation<Launchpad>>,
    #[serde(default)]
    pub payloads: Vec<Relation<Payload>>,
    #[serde(default)]
    pub ships: Vec<Relation<Ship>>,
    #[serde(default)]
    pub capsules: Vec<Relation<Capsule>>,
}

/// External link block of a launch.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct LaunchLinks {
    #[serde(default)]
    pub patch: MissionPatch,
    pub article: Option<String>,
    pub wikipedia: Option<String>,
    pub webcast: Option<String>,
}

/// Mission patch imagery.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MissionPatch {
    pub small: Option<String>,
    pub large: Option<String>,
}

/// One in-flight failure entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LaunchFailure {
    /// Seconds after liftoff.
    pub time: Option<i64>,
    pub altitude: Option<i64>,
    pub reason: Option<String>,
}
