//! Ship detail view model.

use crate::types::{Launch, Ship};

use super::{int_or_na, text_or_na};

/// Fully-defaulted ship detail, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct ShipView {
    pub name: String,
    /// Type and home port default to empty, matching their inline
    /// display next to a label.
    pub kind: String,
    pub home_port: String,
    pub mass: Option<String>,
    pub year_built: Option<String>,
    pub roles: Vec<String>,
    pub image: Option<String>,
    pub link: Option<String>,
    /// Plain count; a ship with no recorded launches shows 0 here.
    pub launch_count: usize,
    pub active: bool,
    pub launches: Vec<ShipLaunchView>,
}

impl From<&Ship> for ShipView {
    fn from(ship: &Ship) -> Self {
        Self {
            name: text_or_na(ship.name.as_deref()),
            kind: ship.kind.clone().unwrap_or_default(),
            home_port: ship.home_port.clone().unwrap_or_default(),
            mass: ship
                .mass_lbs
                .filter(|m| *m != 0.0)
                .map(|m| format!("{} lbs", m)),
            year_built: ship
                .year_built
                .filter(|y| *y != 0)
                .map(|y| y.to_string()),
            roles: ship.roles.clone(),
            image: ship.image.clone(),
            link: ship.link.clone(),
            launch_count: ship.launches.len(),
            active: ship.active.unwrap_or(false),
            launches: ship
                .launches
                .iter()
                .filter_map(|rel| rel.doc())
                .map(ShipLaunchView::from)
                .collect(),
        }
    }
}

/// One entry in the ship page's launch history grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ShipLaunchView {
    pub id: String,
    pub name: String,
    pub flight_number: String,
    /// Fleet sizes are shown as plain counts, zero included.
    pub ship_count: usize,
    pub capsule_count: usize,
    pub payload_count: usize,
    pub success: bool,
    pub article: Option<String>,
    pub wikipedia: Option<String>,
    pub patch: Option<String>,
}

impl From<&Launch> for ShipLaunchView {
    fn from(launch: &Launch) -> Self {
        Self {
            id: launch.id.clone(),
            name: text_or_na(launch.name.as_deref()),
            flight_number: int_or_na(launch.flight_number),
            ship_count: launch.ships.len(),
            capsule_count: launch.capsules.len(),
            payload_count: launch.payloads.len(),
            success: launch.success.unwrap_or(false),
            article: launch.links.article.clone(),
            wikipedia: launch.links.wikipedia.clone(),
            patch: launch.links.patch.large.clone(),
        }
    }
}
