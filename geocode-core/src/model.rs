use serde::{Deserialize, Serialize};

/// A matched place, with coordinates exactly as the service reported them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Location {
    pub latitude: String,
    pub longitude: String,
    pub display_name: String,
}

/// Outcome of a single lookup.
///
/// Serializes either as the three `Location` keys or as `{"error": "..."}`, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeocodeResult {
    Found(Location),
    Error { error: String },
}

impl GeocodeResult {
    pub fn error(message: impl Into<String>) -> Self {
        GeocodeResult::Error { error: message.into() }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, GeocodeResult::Error { .. })
    }

    /// Single-line JSON rendering used for stdout.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<Location> for GeocodeResult {
    fn from(location: Location) -> Self {
        GeocodeResult::Found(location)
    }
}
