//! Rocket document.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Rocket {
    pub id: String,
    pub name: Option<String>,
    pub cost_per_launch: Option<i64>,
    pub success_rate_pct: Option<f64>,
    /// ISO date of the first flight.
    pub first_flight: Option<String>,
    pub active: Option<bool>,
    #[serde(default)]
    pub flickr_images: Vec<String>,
}
