//! Ship document.

use serde::Deserialize;

use super::{Launch, Relation};

/// A recovery/support ship record with its optionally-populated
/// launch history.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Ship {
    pub id: String,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub home_port: Option<String>,
    pub mass_lbs: Option<f64>,
    pub year_built: Option<i64>,
    #[serde(default)]
    pub roles: Vec<String>,
    pub image: Option<String>,
    /// External page about the ship (e.g. MarineTraffic).
    pub link: Option<String>,
    pub active: Option<bool>,
    #[serde(default)]
    pub launches: Vec<Relation<Launch>>,
}
