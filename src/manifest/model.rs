use serde::{Deserialize, Serialize};

use crate::metadata::Category;

/// The JSON document describing every track in the repository.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Manifest {
    pub version: String,
    /// UTC, `YYYY-MM-DDTHH:MM:SSZ`.
    #[serde(rename = "lastUpdated")]
    pub last_updated: String,
    pub music: Vec<TrackRecord>,
}

/// One manifest entry; field order is the serialized order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TrackRecord {
    pub id: String,
    pub title: String,
    pub artist: String,
    /// Whole seconds.
    pub duration: u64,
    pub url: String,
    pub category: Category,
    pub tags: Vec<String>,
}
