//! Form validation and request URL construction

use crate::constants::{DEFAULT_LIMIT, QUERY_BASE_URL};
use crate::continents::{Continent, ContinentBounds};

/// Validated query parameters, built once per submission and discarded
/// after the request is issued.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryParams {
    pub continent_id: String,
    pub start_date: String,
    pub min_magnitude: f64,
    pub limit: u32,
}

/// Per-field validation messages. Fields are checked independently so the
/// user sees every problem at once.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors {
    pub continent: Option<String>,
    pub start_date: Option<String>,
    pub magnitude: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.continent.is_none() && self.start_date.is_none() && self.magnitude.is_none()
    }

    pub fn clear(&mut self) {
        *self = FieldErrors::default();
    }
}

/// Validate the four raw form inputs.
///
/// Magnitude must be a finite number in [0, 10]. The limit is forgiving:
/// empty or unparsable input falls back to `DEFAULT_LIMIT` and is never an
/// error.
pub fn validate(
    continent_id: &str,
    start_date: &str,
    min_magnitude: &str,
    limit: &str,
) -> Result<QueryParams, FieldErrors> {
    let mut errors = FieldErrors::default();

    if continent_id.is_empty() {
        errors.continent = Some("Please select a continent.".to_string());
    }

    if start_date.trim().is_empty() {
        errors.start_date = Some("Please select a start date.".to_string());
    }

    let magnitude = match min_magnitude.trim().parse::<f64>() {
        Ok(m) if (0.0..=10.0).contains(&m) => Some(m),
        _ => {
            errors.magnitude = Some("Magnitude must be between 0 and 10.".to_string());
            None
        }
    };

    let limit = limit
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|&n| n > 0)
        .unwrap_or(DEFAULT_LIMIT);

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(QueryParams {
        continent_id: continent_id.to_string(),
        start_date: start_date.trim().to_string(),
        // magnitude is Some whenever errors is empty
        min_magnitude: magnitude.unwrap_or_default(),
        limit,
    })
}

/// Resolve the validated continent id to its bounding box. `None` here means
/// the select held a value outside the known set, which the UI reports as a
/// generic status rather than a field error.
pub fn resolve_bounds(params: &QueryParams) -> Option<ContinentBounds> {
    Continent::from_id(&params.continent_id).map(Continent::bounds)
}

/// Build the catalog request URL. Dates and numbers need no escaping beyond
/// what their formatting already guarantees.
pub fn build_query_url(params: &QueryParams, bounds: &ContinentBounds) -> String {
    format!(
        "{}?format=geojson&starttime={}&minmagnitude={}&limit={}\
         &minlatitude={}&maxlatitude={}&minlongitude={}&maxlongitude={}",
        QUERY_BASE_URL,
        params.start_date,
        params.min_magnitude,
        params.limit,
        bounds.min_lat,
        bounds.max_lat,
        bounds.min_lon,
        bounds.max_lon,
    )
}
