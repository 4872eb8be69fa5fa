use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Team record as returned by the listing API.
///
/// Only the fields the list view reads are named; everything else the API
/// sends is kept in `extra` so the record serializes back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    #[serde(rename = "$id")]
    pub id: String,
    pub name: String,
    /// Upstream timestamp text, untouched
    #[serde(rename = "$createdAt")]
    pub created_at: String,
    /// Number of memberships in the team
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Team {
    pub fn created(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.created_at).ok()
    }
}

/// One page of teams plus the total number of matching teams
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamList {
    pub total: u64,
    pub teams: Vec<Team>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
