use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of the catalog's `vulnerabilities` list. The upstream feed owns
/// its fields, so it is kept as an ordered JSON object.
pub type VulnerabilityRecord = Map<String, Value>;

/// The decoded Known Exploited Vulnerabilities feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub title: String,
    pub catalog_version: String,
    pub date_released: String,
    pub count: u64,
    pub vulnerabilities: Vec<VulnerabilityRecord>,
    /// Top-level keys this crate does not model, re-emitted untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Catalog {
    /// `dateReleased` as a UTC timestamp, if the feed used RFC 3339.
    pub fn released_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.date_released)
            .ok()
            .map(|date| date.with_timezone(&Utc))
    }

    pub fn count_matches(&self) -> bool {
        self.count == self.vulnerabilities.len() as u64
    }
}
