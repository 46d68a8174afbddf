//! Launchpad document.

use serde::Deserialize;

use super::{Launch, Relation};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Launchpad {
    pub id: String,
    pub full_name: Option<String>,
    pub region: Option<String>,
    pub locality: Option<String>,
    pub timezone: Option<String>,
    pub active: Option<bool>,
    #[serde(default)]
    pub launches: Vec<Relation<Launch>>,
    #[serde(default)]
    pub images: LaunchpadImages,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct LaunchpadImages {
    #[serde(default)]
    pub large: Vec<String>,
}
