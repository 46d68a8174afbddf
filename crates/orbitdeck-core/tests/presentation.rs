//! Document parsing and presentation-normalizer tests.
//!
//! These cover the end-to-end path below the UI: a `{docs: [...]}`
//! envelope parses into a document, the document normalizes into a
//! fully-defaulted view model, and the fallback policy holds for
//! absent fields and empty collections.

use orbitdeck_core::types::{Launch, Payload, Ship};
use orbitdeck_core::view::{LaunchView, PayloadView, ShipView};
use orbitdeck_core::QueryResponse;
use serde_json::json;

// ============================================================================
// Launch presentation
// ============================================================================

fn populated_launch() -> serde_json::Value {
    json!({
        "id": "5eb87cd9ffd86e000604b32a",
        "name": "CRS-20",
        "flight_number": 91,
        "date_utc": "2020-03-07T04:50:31.000Z",
        "success": true,
        "details": "SpaceX's 20th and final Crew Resupply Mission under the original NASA CRS contract.",
        "links": {
            "patch": { "small": null, "large": "https://images2.imgbox.com/ab/79/Wyc9K7fv_o.png" },
            "article": "https://spaceflightnow.com/2020/03/07/late-night-launch",
            "wikipedia": "https://en.wikipedia.org/wiki/SpaceX_CRS-20",
            "webcast": "https://youtu.be/1MkcWK2PnsU"
        },
        "failures": [],
        "rocket": {
            "id": "5e9d0d95eda69973a809d1ec",
            "name": "Falcon 9",
            "cost_per_launch": 50000000,
            "success_rate_pct": 98.0,
            "first_flight": "2010-06-04",
            "active": true,
            "flickr_images": ["https://farm1.staticflickr.com/929/28787338307_3453a11a77_b.jpg"]
        },
        "launchpad": {
            "id": "5e9e4501f509094ba4566f84",
            "full_name": "Cape Canaveral Space Launch Complex 40",
            "region": "Florida",
            "locality": "Cape Canaveral",
            "timezone": "America/New_York",
            "active": true,
            "launches": ["5eb87cd9ffd86e000604b32a", "5eb87cdaffd86e000604b32b"],
            "images": { "large": ["https://i.imgur.com/9oEMXwa.png"] }
        },
        "payloads": [{
            "id": "5eb0e4d0b6c3bb0006eeb253",
            "name": "CRS-20",
            "type": "Dragon 1.1",
            "orbit": "ISS",
            "mass_lbs": 4300.2,
            "inclination_deg": 51.64
        }],
        "ships": [{
            "id": "5ea6ed30080df4000697c913",
            "name": "GO Navigator",
            "type": "Cargo",
            "home_port": "Port Canaveral",
            "active": true,
            "launches": ["5eb87cd9ffd86e000604b32a"]
        }],
        "capsules": [{
            "id": "5e9e2c5cf359185d753b266f",
            "serial": "C112",
            "type": "Dragon 1.1",
            "status": "active",
            "land_landings": 0,
            "water_landings": 3,
            "last_update": "Final flight of Dragon 1."
        }]
    })
}

/// The example scenario: a successful launch renders the affirmative
/// status and omits the failures section entirely.
#[test]
fn successful_launch_omits_failures_section() {
    let launch: Launch = serde_json::from_value(populated_launch()).unwrap();
    let view = LaunchView::from(&launch);

    assert!(view.success);
    assert!(!view.has_failures());
    assert_eq!(view.name, "CRS-20");
    assert_eq!(view.date, "March 7 2020, 4:50:31 AM");
}

#[test]
fn populated_relations_become_card_views() {
    let launch: Launch = serde_json::from_value(populated_launch()).unwrap();
    let view = LaunchView::from(&launch);

    let rocket = view.rocket.expect("rocket card");
    assert_eq!(rocket.name, "Falcon 9");
    assert_eq!(rocket.cost_per_launch, "50000000");
    assert_eq!(rocket.success_rate, "98");
    assert!(rocket.active);

    let pad = view.launchpad.expect("launchpad card");
    assert_eq!(pad.full_name, "Cape Canaveral Space Launch Complex 40");
    assert_eq!(pad.launch_count, "2");

    assert_eq!(view.payloads.len(), 1);
    assert_eq!(view.payloads[0].mass, "4300.2 lbs");
    assert_eq!(view.payloads[0].inclination, "51.64");

    assert_eq!(view.ships.len(), 1);
    assert_eq!(view.ships[0].home_port, "Port Canaveral");
    assert_eq!(view.ships[0].launch_count, "1");

    // Zero land landings read as the placeholder, like the other
    // zero-valued numerics.
    assert_eq!(view.capsules.len(), 1);
    assert_eq!(view.capsules[0].land_landings, "N/A");
    assert_eq!(view.capsules[0].water_landings, "3");
}

#[test]
fn webcast_video_id_is_extracted() {
    let launch: Launch = serde_json::from_value(populated_launch()).unwrap();
    let view = LaunchView::from(&launch);
    assert_eq!(view.video_id.as_deref(), Some("1MkcWK2PnsU"));
}

/// A document carrying nothing but its identifier must normalize
/// without panicking, with every scalar at its placeholder and every
/// section omitted.
#[test]
fn bare_launch_normalizes_to_placeholders() {
    let launch: Launch =
        serde_json::from_value(json!({ "id": "5eb87cd9ffd86e000604b32a" })).unwrap();
    let view = LaunchView::from(&launch);

    assert_eq!(view.name, "N/A");
    assert_eq!(view.date, "N/A");
    assert!(!view.success);
    assert_eq!(view.details, "");
    assert!(view.patch.is_none());
    assert!(view.video_id.is_none());
    assert!(view.rocket.is_none());
    assert!(view.launchpad.is_none());
    assert!(view.payloads.is_empty());
    assert!(view.ships.is_empty());
    assert!(view.capsules.is_empty());
    assert!(!view.has_failures());
}

#[test]
fn failed_launch_shows_failures_panel() {
    let launch: Launch = serde_json::from_value(json!({
        "id": "5eb87cd906164297eabb32a",
        "name": "FalconSat",
        "success": false,
        "failures": [
            { "time": 33, "altitude": null, "reason": "merlin engine failure" },
            { "time": 0, "altitude": null, "reason": null }
        ]
    }))
    .unwrap();
    let view = LaunchView::from(&launch);

    assert!(view.has_failures());
    assert_eq!(view.failures[0].time, "33");
    assert_eq!(view.failures[0].reason, "merlin engine failure");
    // Zero seconds and an absent reason both fall back.
    assert_eq!(view.failures[1].time, "N/A");
    assert_eq!(view.failures[1].reason, "N/A");
}

/// Unpopulated relations (bare identifiers) are skipped by the rails
/// rather than rendered as empty cards.
#[test]
fn identifier_relations_are_skipped() {
    let launch: Launch = serde_json::from_value(json!({
        "id": "5eb87cd9ffd86e000604b32a",
        "rocket": "5e9d0d95eda69973a809d1ec",
        "payloads": ["5eb0e4d0b6c3bb0006eeb253"],
        "ships": ["5ea6ed30080df4000697c913"]
    }))
    .unwrap();
    let view = LaunchView::from(&launch);

    assert!(view.rocket.is_none());
    assert!(view.payloads.is_empty());
    assert!(view.ships.is_empty());
}

// ============================================================================
// Payload presentation
// ============================================================================

#[test]
fn payload_with_populated_launch() {
    let payload: Payload = serde_json::from_value(json!({
        "id": "5eb0e4d0b6c3bb0006eeb253",
        "name": "Starlink-1",
        "type": "Satellite",
        "orbit": "VLEO",
        "mass_lbs": 34172.8,
        "reused": false,
        "reference_system": "geocentric",
        "regime": "very-low-earth",
        "inclination_deg": 53.0043,
        "period_min": 91.6,
        "epoch": "2020-07-10T05:24:00.000Z",
        "launch": {
            "id": "5eb87d30ffd86e000604b378",
            "name": "Starlink 1",
            "date_utc": "2019-11-11T14:56:00.000Z",
            "success": true,
            "links": {
                "patch": { "large": "https://images2.imgbox.com/9a/96/nLppz9HW_o.png" },
                "webcast": "https://www.youtube.com/watch?v=pIDuv0Ta0XQ"
            }
        }
    }))
    .unwrap();
    let view = PayloadView::from(&payload);

    assert_eq!(view.name, "Starlink-1");
    assert_eq!(view.mass.as_deref(), Some("34172.8 lbs"));
    assert!(!view.reused);
    assert_eq!(view.orbital.inclination.as_deref(), Some("53.0043"));
    assert_eq!(view.orbital.epoch.as_deref(), Some("July 10 2020, 5:24:00 AM"));
    // Rows with no value are omitted, not rendered as placeholders.
    assert!(view.orbital.semi_major_axis.is_none());
    assert!(view.orbital.eccentricity.is_none());

    let launch = view.launch.expect("launch summary");
    assert_eq!(launch.name, "Starlink 1");
    assert!(launch.success);
    assert_eq!(launch.video_id.as_deref(), Some("pIDuv0Ta0XQ"));
}

#[test]
fn payload_without_launch_omits_summary() {
    let payload: Payload = serde_json::from_value(json!({
        "id": "5eb0e4d0b6c3bb0006eeb253",
        "launch": "5eb87d30ffd86e000604b378"
    }))
    .unwrap();
    let view = PayloadView::from(&payload);

    assert_eq!(view.name, "N/A");
    assert!(view.mass.is_none());
    assert!(view.launch.is_none());
}

// ============================================================================
// Ship presentation
// ============================================================================

#[test]
fn ship_with_launch_history() {
    let ship: Ship = serde_json::from_value(json!({
        "id": "5ea6ed30080df4000697c913",
        "name": "GO Ms Tree",
        "type": "High Speed Craft",
        "home_port": "Port Canaveral",
        "year_built": 2015,
        "roles": ["Fairing Recovery"],
        "active": false,
        "launches": [{
            "id": "5eb87d30ffd86e000604b378",
            "name": "Starlink 1",
            "flight_number": 83,
            "success": true,
            "links": {
                "patch": { "large": "https://images2.imgbox.com/9a/96/nLppz9HW_o.png" },
                "article": "https://spaceflightnow.com/2019/11/11/starlink",
                "wikipedia": "https://en.wikipedia.org/wiki/Starlink"
            },
            "ships": ["5ea6ed30080df4000697c913", "5ea6ed2f080df4000697c90b"],
            "capsules": [],
            "payloads": ["5eb0e4d2b6c3bb0006eeb257"]
        }]
    }))
    .unwrap();
    let view = ShipView::from(&ship);

    assert_eq!(view.name, "GO Ms Tree");
    assert_eq!(view.kind, "High Speed Craft");
    assert_eq!(view.year_built.as_deref(), Some("2015"));
    assert_eq!(view.roles, vec!["Fairing Recovery".to_string()]);
    assert_eq!(view.launch_count, 1);
    assert!(!view.active);

    let entry = &view.launches[0];
    assert_eq!(entry.flight_number, "83");
    assert_eq!(entry.ship_count, 2);
    assert_eq!(entry.capsule_count, 0);
    assert_eq!(entry.payload_count, 1);
    assert!(entry.success);
    assert!(entry.article.is_some());
}

/// Ship type and home port default to empty text; the launch count is
/// a plain number even at zero.
#[test]
fn bare_ship_defaults() {
    let ship: Ship =
        serde_json::from_value(json!({ "id": "5ea6ed30080df4000697c913" })).unwrap();
    let view = ShipView::from(&ship);

    assert_eq!(view.name, "N/A");
    assert_eq!(view.kind, "");
    assert_eq!(view.home_port, "");
    assert!(view.roles.is_empty());
    assert_eq!(view.launch_count, 0);
    assert!(view.launches.is_empty());
    assert!(view.link.is_none());
}

// ============================================================================
// Response envelope
// ============================================================================

#[test]
fn envelope_takes_first_document_only() {
    let envelope: QueryResponse<Launch> = serde_json::from_value(json!({
        "docs": [
            { "id": "first-doc" },
            { "id": "second-doc" }
        ],
        "totalDocs": 2
    }))
    .unwrap();
    let launch = envelope.into_first().expect("first document");
    assert_eq!(launch.id, "first-doc");
}
