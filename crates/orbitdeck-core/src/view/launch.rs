//! Launch detail view model and the card views embedded in it.

use crate::types::{Capsule, Launch, LaunchFailure, Launchpad, Payload, Rocket, Ship};
use crate::video;

use super::{count_or_na, float_or_na, format_timestamp, int_or_na, text_or_na};

/// Fully-defaulted launch detail, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchView {
    pub name: String,
    pub date: String,
    pub success: bool,
    /// Details paragraph; empty rather than "N/A" when absent.
    pub details: String,
    pub patch: Option<String>,
    pub article: Option<String>,
    pub wikipedia: Option<String>,
    pub video_id: Option<String>,
    pub rocket: Option<RocketView>,
    pub launchpad: Option<LaunchpadView>,
    pub payloads: Vec<PayloadCardView>,
    pub ships: Vec<ShipCardView>,
    pub capsules: Vec<CapsuleView>,
    pub failures: Vec<FailureView>,
}

impl LaunchView {
    /// The failures panel only appears for an unsuccessful launch
    /// that actually recorded failures.
    pub fn has_failures(&self) -> bool {
        !self.success && !self.failures.is_empty()
    }
}

impl From<&Launch> for LaunchView {
    fn from(launch: &Launch) -> Self {
        Self {
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
            rocket: launch
                .rocket
                .as_ref()
                .and_then(|rel| rel.doc())
                .map(RocketView::from),
            launchpad: launch
                .launchpad
                .as_ref()
                .and_then(|rel| rel.doc())
                .map(LaunchpadView::from),
            payloads: launch
                .payloads
                .iter()
                .filter_map(|rel| rel.doc())
                .map(PayloadCardView::from)
                .collect(),
            ships: launch
                .ships
                .iter()
                .filter_map(|rel| rel.doc())
                .map(ShipCardView::from)
                .collect(),
            capsules: launch
                .capsules
                .iter()
                .filter_map(|rel| rel.doc())
                .map(CapsuleView::from)
                .collect(),
            failures: launch.failures.iter().map(FailureView::from).collect(),
        }
    }
}

/// Rocket card on the launch page (and the rocket detail page).
#[derive(Debug, Clone, PartialEq)]
pub struct RocketView {
    pub id: String,
    pub name: String,
    pub cost_per_launch: String,
    pub success_rate: String,
    pub first_flight: String,
    pub active: bool,
    pub image: Option<String>,
}

impl From<&Rocket> for RocketView {
    fn from(rocket: &Rocket) -> Self {
        Self {
            id: rocket.id.clone(),
            name: text_or_na(rocket.name.as_deref()),
            cost_per_launch: int_or_na(rocket.cost_per_launch),
            success_rate: float_or_na(rocket.success_rate_pct),
            first_flight: text_or_na(rocket.first_flight.as_deref()),
            active: rocket.active.unwrap_or(false),
            image: rocket.flickr_images.first().cloned(),
        }
    }
}

/// Launchpad card on the launch page (and the launchpad detail page).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchpadView {
    pub id: String,
    pub full_name: String,
    pub region: String,
    pub locality: String,
    pub timezone: String,
    pub launch_count: String,
    pub active: bool,
    pub image: Option<String>,
}

impl From<&Launchpad> for LaunchpadView {
    fn from(pad: &Launchpad) -> Self {
        Self {
            id: pad.id.clone(),
            full_name: text_or_na(pad.full_name.as_deref()),
            region: text_or_na(pad.region.as_deref()),
            locality: text_or_na(pad.locality.as_deref()),
            timezone: text_or_na(pad.timezone.as_deref()),
            launch_count: count_or_na(pad.launches.len()),
            active: pad.active.unwrap_or(false),
            image: pad.images.large.first().cloned(),
        }
    }
}

/// Payload card in the launch page's payload rail.
#[derive(Debug, Clone, PartialEq)]
pub struct PayloadCardView {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub mass: String,
    pub orbit: String,
    pub inclination: String,
}

impl From<&Payload> for PayloadCardView {
    fn from(payload: &Payload) -> Self {
        Self {
            id: payload.id.clone(),
            name: text_or_na(payload.name.as_deref()),
            kind: text_or_na(payload.kind.as_deref()),
            mass: payload
                .mass_lbs
                .filter(|m| *m != 0.0)
                .map(|m| format!("{} lbs", m))
                .unwrap_or_else(|| super::NA.to_string()),
            orbit: text_or_na(payload.orbit.as_deref()),
            inclination: float_or_na(payload.inclination_deg),
        }
    }
}

/// Ship card in the launch page's ship rail.
#[derive(Debug, Clone, PartialEq)]
pub struct ShipCardView {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub home_port: String,
    pub launch_count: String,
    pub active: bool,
}

impl From<&Ship> for ShipCardView {
    fn from(ship: &Ship) -> Self {
        Self {
            id: ship.id.clone(),
            name: text_or_na(ship.name.as_deref()),
            kind: text_or_na(ship.kind.as_deref()),
            home_port: text_or_na(ship.home_port.as_deref()),
            launch_count: count_or_na(ship.launches.len()),
            active: ship.active.unwrap_or(false),
        }
    }
}

/// Capsule card in the launch page's capsule rail.
#[derive(Debug, Clone, PartialEq)]
pub struct CapsuleView {
    pub serial: String,
    pub kind: String,
    pub status: String,
    pub land_landings: String,
    pub water_landings: String,
    pub last_update: String,
}

impl From<&Capsule> for CapsuleView {
    fn from(capsule: &Capsule) -> Self {
        Self {
            serial: text_or_na(capsule.serial.as_deref()),
            kind: text_or_na(capsule.kind.as_deref()),
            status: text_or_na(capsule.status.as_deref()),
            land_landings: int_or_na(capsule.land_landings),
            water_landings: int_or_na(capsule.water_landings),
            last_update: text_or_na(capsule.last_update.as_deref()),
        }
    }
}

/// One failure row in the failures panel.
#[derive(Debug, Clone, PartialEq)]
pub struct FailureView {
    /// Seconds after liftoff, as display text.
    pub time: String,
    pub reason: String,
}

impl From<&LaunchFailure> for FailureView {
    fn from(failure: &LaunchFailure) -> Self {
        Self {
            time: int_or_na(failure.time),
            reason: text_or_na(failure.reason.as_deref()),
        }
    }
}
