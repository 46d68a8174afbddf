//! Capsule document.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Capsule {
    pub id: String,
    pub serial: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub status: Option<String>,
    pub land_landings: Option<i64>,
    pub water_landings: Option<i64>,
    pub last_update: Option<String>,
}
