//! Wire types for the document-query endpoint.
//!
//! Every resource exposes the same contract: `POST {resource}/query`
//! with a filter and a list of relations to populate, answered by a
//! `{docs: [...]}` envelope. Paging metadata the server appends is
//! ignored.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A queryable resource collection, with its versioned API path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Launches,
    Payloads,
    Ships,
    Rockets,
    Launchpads,
}

impl Resource {
    /// Path of this collection relative to the API base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Launches => "v5/launches",
            Resource::Payloads => "v4/payloads",
            Resource::Ships => "v4/ships",
            Resource::Rockets => "v4/rockets",
            Resource::Launchpads => "v4/launchpads",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Request body for a by-identifier query.
#[derive(Debug, Clone, Serialize)]
pub struct QueryRequest {
    pub query: DocFilter,
    pub options: QueryOptions,
}

impl QueryRequest {
    /// Build the standard detail-view request: filter on `_id`,
    /// embed the given relations.
    pub fn by_id(id: &str, populate: &[&str]) -> Self {
        Self {
            query: DocFilter { id: id.to_string() },
            options: QueryOptions {
                populate: populate.iter().map(|s| s.to_string()).collect(),
            },
        }
    }
}

/// The document filter. Only identity lookups are issued.
#[derive(Debug, Clone, Serialize)]
pub struct DocFilter {
    #[serde(rename = "_id")]
    pub id: String,
}

/// Query options. `populate` names related collections to embed
/// inline rather than as bare references.
#[derive(Debug, Clone, Serialize)]
pub struct QueryOptions {
    pub populate: Vec<String>,
}

/// Response envelope. Documents beyond the first are ignored by the
/// detail lifecycle; multiplicity is a server concern, not ours.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse<T> {
    #[serde(default = "Vec::new")]
    pub docs: Vec<T>,
}

impl<T> QueryResponse<T> {
    /// Take the first returned document, if any.
    pub fn into_first(self) -> Option<T> {
        self.docs.into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_matches_wire_contract() {
        let req = QueryRequest::by_id("5eb87cd9ffd86e000604b32a", &["rocket", "payloads"]);
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "query": { "_id": "5eb87cd9ffd86e000604b32a" },
                "options": { "populate": ["rocket", "payloads"] }
            })
        );
    }

    #[test]
    fn first_document_wins() {
        let resp: QueryResponse<String> = serde_json::from_value(serde_json::json!({
            "docs": ["first", "second"],
            "totalDocs": 2,
            "page": 1
        }))
        .unwrap();
        assert_eq!(resp.into_first(), Some("first".to_string()));
    }

    #[test]
    fn empty_docs_yields_none() {
        let resp: QueryResponse<String> =
            serde_json::from_value(serde_json::json!({ "docs": [] })).unwrap();
        assert_eq!(resp.into_first(), None);
    }

    #[test]
    fn missing_docs_field_defaults_to_empty() {
        let resp: QueryResponse<String> = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(resp.docs.is_empty());
    }

    #[test]
    fn resource_paths() {
        assert_eq!(Resource::Launches.path(), "v5/launches");
        assert_eq!(Resource::Payloads.path(), "v4/payloads");
        assert_eq!(Resource::Ships.path(), "v4/ships");
        assert_eq!(Resource::Rockets.path(), "v4/rockets");
        assert_eq!(Resource::Launchpads.path(), "v4/launchpads");
    }
}
