use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a single upstream fetch degraded.
///
/// Fetchers recover every one of these locally and store the error alongside
/// the fields that did succeed; nothing here ever propagates out of a fetch
/// surface as an `Err`. Keeping the kind tagged (instead of a bare message
/// string) lets the presentation layer style failures distinctly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Connection failure, timeout, or other transport-level problem.
    #[error("transport error: {0}")]
    Transport(String),

    /// The upstream answered with a non-success status.
    #[error("HTTP status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// Malformed XML, or JSON that does not match the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// The response parsed, but an expected field was absent.
    #[error("missing data: {0}")]
    MissingData(String),
}

/// A value fetched from an upstream, or the reason it could not be.
pub type Fetched<T> = Result<T, FetchError>;

/// Location queried for measurements, as decimal-degree strings.
///
/// Kept as strings because the provider URL embeds them verbatim and the
/// deployment uses one fixed pair; there is no arithmetic to do on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: String,
    pub longitude: String,
}

impl Coordinate {
    pub fn new(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        Self { latitude: latitude.into(), longitude: longitude.into() }
    }

    /// `lat,lon` as embedded in measurement query URLs.
    pub fn pair(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

/// Outcome of fetching one syndication feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSummary {
    pub source_url: String,
    /// First item's description, the no-description sentinel, or the
    /// degradation reason.
    pub text: Fetched<String>,
}

/// One batch of scalar measurements, each independently fetched.
///
/// A provider-side outage on one measurement type must not blank out the
/// other three, so every field carries its own success-or-error state.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementBatch {
    /// Air temperature at 2 m, degrees Celsius.
    pub temperature: Fetched<f64>,
    /// Condition-symbol index; translated via the symbol catalog downstream.
    pub weather_symbol: Fetched<f64>,
    /// Precipitation over the last hour, millimetres.
    pub heavy_rain_warning: Fetched<f64>,
    /// Fine-particulate (PM2.5) concentration, µg/m³.
    pub air_quality: Fetched<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_pair_formats_lat_comma_lon() {
        let coord = Coordinate::new("33.4473", "-84.1469");
        assert_eq!(coord.pair(), "33.4473,-84.1469");
    }

    #[test]
    fn fetch_error_display_names_the_kind() {
        let err = FetchError::HttpStatus { status: 503, body: "Service Unavailable".into() };
        assert_eq!(err.to_string(), "HTTP status 503: Service Unavailable");

        let err = FetchError::MissingData("no coordinates entry".into());
        assert_eq!(err.to_string(), "missing data: no coordinates entry");
    }
}
