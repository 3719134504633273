//! Traffic segment records from the city congestion feed.

use serde::{Deserialize, Serialize};

/// One traffic-segment entry from the congestion dataset.
///
/// Every field is textual in the source feed, including the geospatial and
/// speed values. Field presence is best-effort: keys absent from the feed
/// decode to empty strings, and nothing validates that a field is populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficSegmentRecord {
    #[serde(rename = "_direction", default)]
    pub direction: String,
    #[serde(rename = "_fromst", default)]
    pub from_street: String,
    #[serde(rename = "_last_updt", default)]
    pub last_updated: String,
    #[serde(rename = "_length", default)]
    pub segment_length: String,
    #[serde(rename = "_lif_lat", default)]
    pub start_latitude: String,
    #[serde(rename = "_lit_lat", default)]
    pub end_latitude: String,
    #[serde(rename = "_lit_lon", default)]
    pub end_longitude: String,
    #[serde(rename = "_strheading", default)]
    pub street_heading: String,
    #[serde(rename = "_tost", default)]
    pub to_street: String,
    #[serde(rename = "_traffic", default)]
    pub speed: String,
    #[serde(rename = "segmentid", default)]
    pub segment_id: String,
    #[serde(rename = "start_lon", default)]
    pub start_longitude: String,
    #[serde(rename = "street", default)]
    pub street: String,
}

/// Decode a raw feed body as a JSON array of segment records.
///
/// Unknown keys in each element are ignored. Anything other than a top-level
/// array of objects is an error.
pub fn decode_records(body: &[u8]) -> Result<Vec<TrafficSegmentRecord>, serde_json::Error> {
    serde_json::from_slice(body)
}
