//! Application constants and configuration

/// USGS FDSN event service query endpoint.
/// API docs: https://earthquake.usgs.gov/fdsnws/event/1/
pub const QUERY_BASE_URL: &str = "https://earthquake.usgs.gov/fdsnws/event/1/query";

pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result limit used when the limit field is empty or unparsable.
pub const DEFAULT_LIMIT: u32 = 20;
