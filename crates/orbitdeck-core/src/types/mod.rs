//! Remote document types.
//!
//! These records are externally owned and loosely typed: presence of
//! any field is not guaranteed, so scalars are `Option` and
//! collections default to empty. The query API embeds a relation
//! inline when asked to populate it and returns a bare identifier
//! otherwise; [`Relation`] covers both forms.

mod capsule;
mod launch;
mod launchpad;
mod payload;
mod rocket;
mod ship;

pub use capsule::Capsule;
pub use launch::{Launch, LaunchFailure, LaunchLinks, MissionPatch};
pub use launchpad::{Launchpad, LaunchpadImages};
pub use payload::Payload;
pub use rocket::Rocket;
pub use ship::Ship;

use serde::Deserialize;

/// A related document: either populated inline or a bare identifier.
///
/// Deserialization tries the document form first, so an object that
/// fails to parse is an error rather than silently degrading to a
/// string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Relation<T> {
    Doc(Box<T>),
    Id(String),
}

impl<T> Relation<T> {
    /// The populated document, if this relation was embedded.
    pub fn doc(&self) -> Option<&T> {
        match self {
            Relation::Doc(doc) => Some(doc),
            Relation::Id(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Probe {
        id: String,
    }

    #[test]
    fn relation_parses_bare_identifier() {
        let rel: Relation<Probe> =
            serde_json::from_value(serde_json::json!("5ea6ed2d080df4000697c901")).unwrap();
        assert_eq!(rel, Relation::Id("5ea6ed2d080df4000697c901".to_string()));
        assert!(rel.doc().is_none());
    }

    #[test]
    fn relation_parses_populated_document() {
        let rel: Relation<Probe> =
            serde_json::from_value(serde_json::json!({ "id": "abc" })).unwrap();
        assert_eq!(rel.doc().map(|p| p.id.as_str()), Some("abc"));
    }
}
