//! Query submission and fetch logic

use super::App;
use crate::query::{build_query_url, resolve_bounds, validate};
use crate::types::*;
use eframe::egui;
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Issue one catalog request and extract the event list.
async fn fetch_events(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<EarthquakeEvent>, FetchError> {
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }
    let collection: FeatureCollection = response.json().await?;
    Ok(collection
        .features
        .into_iter()
        .map(Feature::into_event)
        .collect())
}

/// Spawn the fetch task. The task races the request against the cancellation
/// token; a cancelled task never touches the shared state, so a superseding
/// submission is the only writer of the next outcome.
fn spawn_fetch(
    url: String,
    state: Arc<Mutex<FetchState>>,
    client: reqwest::Client,
    token: CancellationToken,
    ctx: egui::Context,
    runtime: &tokio::runtime::Runtime,
) {
    runtime.spawn(async move {
        tokio::select! {
            _ = token.cancelled() => {}
            result = fetch_events(&client, &url) => {
                let mut s = state.lock().unwrap();
                match result {
                    Ok(events) if events.is_empty() => {
                        info!(url = %url, "Query returned no events");
                        s.status = QueryStatus::NoResults;
                        s.events.clear();
                    }
                    Ok(events) => {
                        info!(url = %url, count = events.len(), "Query succeeded");
                        s.status = QueryStatus::Found(events.len());
                        s.events = events;
                    }
                    Err(e) => {
                        // Operator-facing detail only; the UI shows a generic message
                        error!(error = %e, url = %url, "Earthquake query failed");
                        s.status = QueryStatus::Failed;
                        s.events.clear();
                    }
                }
                drop(s);
                ctx.request_repaint();
            }
        }
    });
}

impl App {
    /// Submission handler: validate, resolve, build the URL, and launch the
    /// fetch. Any outstanding fetch is cancelled first so only the latest
    /// response is ever displayed.
    pub fn submit_query(&mut self, ctx: &egui::Context) {
        // Clear old messages and results
        self.errors.clear();
        {
            let mut s = self.fetch_state.lock().unwrap();
            s.status = QueryStatus::Idle;
            s.events.clear();
        }

        let params = match validate(
            &self.continent_id,
            &self.start_date,
            &self.min_magnitude,
            &self.limit,
        ) {
            Ok(params) => params,
            Err(errors) => {
                self.errors = errors;
                return;
            }
        };

        let bounds = match resolve_bounds(&params) {
            Some(bounds) => bounds,
            None => {
                self.fetch_state.lock().unwrap().status = QueryStatus::InvalidContinent;
                return;
            }
        };

        let url = build_query_url(&params, &bounds);
        info!(url = %url, continent = %params.continent_id, "Submitting earthquake query");

        // Supersede any in-flight request
        if let Some(token) = self.cancel_token.take() {
            token.cancel();
        }
        let token = CancellationToken::new();
        self.cancel_token = Some(token.clone());

        self.fetch_state.lock().unwrap().status = QueryStatus::Loading;

        spawn_fetch(
            url,
            self.fetch_state.clone(),
            self.client.clone(),
            token,
            ctx.clone(),
            &self.runtime,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_app() -> App {
        App {
            continent_id: String::new(),
            start_date: String::new(),
            min_magnitude: String::new(),
            limit: String::new(),
            picker_date: chrono::Local::now().date_naive(),
            errors: crate::query::FieldErrors::default(),
            fetch_state: Arc::new(Mutex::new(FetchState::default())),
            cancel_token: None,
            runtime: tokio::runtime::Runtime::new().unwrap(),
            client: reqwest::Client::new(),
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir: std::path::PathBuf::new(),
        }
    }

    #[test]
    fn invalid_form_aborts_before_any_request() {
        let mut app = test_app();
        app.min_magnitude = "abc".to_string();

        app.submit_query(&egui::Context::default());

        assert!(app.errors.continent.is_some());
        assert!(app.errors.start_date.is_some());
        assert!(app.errors.magnitude.is_some());
        // No fetch was launched: state never left Idle
        let s = app.fetch_state.lock().unwrap();
        assert_eq!(s.status, QueryStatus::Idle);
        assert!(s.events.is_empty());
        assert!(app.cancel_token.is_none());
    }

    #[test]
    fn unknown_continent_reports_invalid_selection() {
        let mut app = test_app();
        app.continent_id = "atlantis".to_string();
        app.start_date = "2024-01-01".to_string();
        app.min_magnitude = "5".to_string();

        app.submit_query(&egui::Context::default());

        assert!(app.errors.continent.is_none());
        let s = app.fetch_state.lock().unwrap();
        assert_eq!(s.status, QueryStatus::InvalidContinent);
        assert!(app.cancel_token.is_none());
    }

    fn sample_feature() -> serde_json::Value {
        serde_json::json!({
            "properties": {
                "mag": 5.2,
                "place": "10km N of Testville",
                "time": 1_700_000_000_000_i64,
                "url": "http://example.com/e1"
            },
            "geometry": { "coordinates": [0, 0, 12.3] }
        })
    }

    #[tokio::test]
    async fn fetch_maps_features_to_events() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/fdsnws/event/1/query"))
            .and(query_param("format", "geojson"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "type": "FeatureCollection",
                "features": [sample_feature()]
            })))
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let url = format!(
            "{}/fdsnws/event/1/query?format=geojson&starttime=2024-01-01",
            mock_server.uri()
        );

        let events = fetch_events(&client, &url).await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].magnitude, 5.2);
        assert_eq!(events[0].place, "10km N of Testville");
        assert_eq!(events[0].depth_km, 12.3);
        assert_eq!(events[0].detail_url, "http://example.com/e1");
    }

    #[tokio::test]
    async fn fetch_with_zero_features_is_ok_and_empty() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "type": "FeatureCollection",
                "features": []
            })))
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let events = fetch_events(&client, &mock_server.uri()).await.unwrap();
        assert!(events.is_empty());
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let result = fetch_events(&client, &mock_server.uri()).await;
        match result {
            Err(FetchError::Status(status)) => assert_eq!(status.as_u16(), 500),
            other => panic!("expected status error, got {:?}", other.map(|v| v.len())),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_an_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let result = fetch_events(&client, &mock_server.uri()).await;
        assert!(matches!(result, Err(FetchError::Http(_))));
    }

    #[tokio::test]
    async fn transport_failure_is_an_error() {
        // Nothing is listening on this port
        let client = reqwest::Client::new();
        let result = fetch_events(&client, "http://127.0.0.1:1/query").await;
        assert!(matches!(result, Err(FetchError::Http(_))));
    }
}
