//! Common types and data structures

use reqwest::StatusCode;

/// Outcome of the most recent catalog query, driving the status line.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum QueryStatus {
    Idle,
    Loading,
    Found(usize),
    NoResults,
    /// Select held a value outside the known continent set. Defensive; the
    /// select is populated from the same set the resolver knows.
    InvalidContinent,
    Failed,
}

impl QueryStatus {
    /// User-facing status text. Failure detail never surfaces here; it goes
    /// to the log file instead.
    pub fn message(&self) -> Option<String> {
        match self {
            QueryStatus::Idle => None,
            QueryStatus::Loading => Some("Loading earthquakes...".to_string()),
            QueryStatus::Found(n) => Some(format!("Found {} earthquakes.", n)),
            QueryStatus::NoResults => {
                Some("No earthquakes found for your criteria.".to_string())
            }
            QueryStatus::InvalidContinent => Some("Invalid continent selection.".to_string()),
            QueryStatus::Failed => {
                Some("Error retrieving earthquake data. Please try again later.".to_string())
            }
        }
    }
}

/// State shared between the UI thread and the fetch task. The event list is
/// replaced wholesale on every outcome, so the renderer can never mix old
/// and new results.
pub struct FetchState {
    pub status: QueryStatus,
    pub events: Vec<EarthquakeEvent>,
}

impl Default for FetchState {
    fn default() -> Self {
        Self {
            status: QueryStatus::Idle,
            events: Vec::new(),
        }
    }
}

/// Errors from the fetch path. Both variants collapse to the same generic
/// status message in the UI.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned HTTP {0}")]
    Status(StatusCode),
}

/// One rendered earthquake, extracted from a GeoJSON feature.
#[derive(Clone, Debug, PartialEq)]
pub struct EarthquakeEvent {
    pub magnitude: f64,
    pub place: String,
    pub time_ms: i64,
    pub depth_km: f64,
    pub detail_url: String,
}

// ============================================================================
// USGS GEOJSON RESPONSE
// ============================================================================

/// Top-level response document from the catalog endpoint.
#[derive(serde::Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// One earthquake record in the response.
#[derive(serde::Deserialize)]
pub struct Feature {
    pub properties: EventProperties,
    pub geometry: EventGeometry,
}

#[derive(serde::Deserialize)]
pub struct EventProperties {
    pub mag: f64,
    pub place: String,
    /// Epoch milliseconds.
    pub time: i64,
    pub url: String,
}

#[derive(serde::Deserialize)]
pub struct EventGeometry {
    /// `[longitude, latitude, depth_km]`
    pub coordinates: Vec<f64>,
}

impl Feature {
    pub fn into_event(self) -> EarthquakeEvent {
        let depth_km = self.geometry.coordinates.get(2).copied().unwrap_or_default();
        EarthquakeEvent {
            magnitude: self.properties.mag,
            place: self.properties.place,
            time_ms: self.properties.time,
            depth_km,
            detail_url: self.properties.url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_feature_and_extracts_the_event() {
        let body = r#"{
            "features": [{
                "properties": {
                    "mag": 5.2,
                    "place": "10km N of Testville",
                    "time": 1700000000000,
                    "url": "http://example.com/e1"
                },
                "geometry": { "coordinates": [0, 0, 12.3] }
            }]
        }"#;

        let collection: FeatureCollection = serde_json::from_str(body).unwrap();
        assert_eq!(collection.features.len(), 1);

        let event = collection.features.into_iter().next().unwrap().into_event();
        assert_eq!(
            event,
            EarthquakeEvent {
                magnitude: 5.2,
                place: "10km N of Testville".to_string(),
                time_ms: 1700000000000,
                depth_km: 12.3,
                detail_url: "http://example.com/e1".to_string(),
            }
        );
    }

    #[test]
    fn missing_features_key_parses_as_empty() {
        let collection: FeatureCollection = serde_json::from_str(r#"{"type":"FeatureCollection"}"#).unwrap();
        assert!(collection.features.is_empty());
    }

    #[test]
    fn short_coordinate_array_defaults_depth() {
        let body = r#"{
            "features": [{
                "properties": { "mag": 1.0, "place": "x", "time": 0, "url": "u" },
                "geometry": { "coordinates": [10.5, 20.5] }
            }]
        }"#;
        let collection: FeatureCollection = serde_json::from_str(body).unwrap();
        let event = collection.features.into_iter().next().unwrap().into_event();
        assert_eq!(event.depth_km, 0.0);
    }

    #[test]
    fn status_messages_match_the_outcome() {
        assert_eq!(QueryStatus::Idle.message(), None);
        assert_eq!(
            QueryStatus::Found(3).message().as_deref(),
            Some("Found 3 earthquakes.")
        );
        assert_eq!(
            QueryStatus::NoResults.message().as_deref(),
            Some("No earthquakes found for your criteria.")
        );
        assert!(QueryStatus::Failed
            .message()
            .unwrap()
            .contains("Error retrieving earthquake data"));
    }
}
