use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::config::Credentials;
use crate::model::{Coordinate, FetchError, Fetched, MeasurementBatch};

use super::{HTTP_TIMEOUT, MeasurementSource, truncate_body};

pub const METEOMATICS_BASE: &str = "https://api.meteomatics.com";

/// The four scalar quantities queried per dashboard render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Measurement {
    Temperature,
    WeatherSymbol,
    HeavyRainWarning,
    AirQuality,
}

impl Measurement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Measurement::Temperature => "temperature",
            Measurement::WeatherSymbol => "weather_symbol",
            Measurement::HeavyRainWarning => "heavy_rain_warning",
            Measurement::AirQuality => "air_quality",
        }
    }

    /// Provider measurement spec: physical quantity and unit.
    pub fn spec_code(&self) -> &'static str {
        match self {
            Measurement::Temperature => "t_2m:C",
            Measurement::WeatherSymbol => "weather_symbol_1h:idx",
            Measurement::HeavyRainWarning => "precip_1h:mm",
            Measurement::AirQuality => "pm2p5:ugm3",
        }
    }

    pub const fn all() -> &'static [Measurement] {
        &[
            Measurement::Temperature,
            Measurement::WeatherSymbol,
            Measurement::HeavyRainWarning,
            Measurement::AirQuality,
        ]
    }
}

impl std::fmt::Display for Measurement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Queries the Meteomatics single-value API, one request per measurement.
#[derive(Debug, Clone)]
pub struct MeasurementFetcher {
    credentials: Credentials,
    http: Client,
    base_url: String,
}

impl MeasurementFetcher {
    pub fn new(credentials: Credentials) -> anyhow::Result<Self> {
        let http = Client::builder().timeout(HTTP_TIMEOUT).build()?;

        Ok(Self { credentials, http, base_url: METEOMATICS_BASE.to_string() })
    }

    fn query_url(
        &self,
        measurement: Measurement,
        coordinate: &Coordinate,
        as_of: DateTime<Utc>,
    ) -> String {
        format!(
            "{}/{}Z/{}/{}/json",
            self.base_url,
            as_of.format("%Y-%m-%dT%H:%M:%S"),
            measurement.spec_code(),
            coordinate.pair(),
        )
    }

    async fn fetch_one(
        &self,
        measurement: Measurement,
        coordinate: &Coordinate,
        as_of: DateTime<Utc>,
    ) -> Fetched<f64> {
        let url = self.query_url(measurement, coordinate, as_of);
        tracing::debug!("querying {measurement} at {url}");

        let res = self
            .http
            .get(&url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = res.status();
        let body = res.text().await.map_err(|e| FetchError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let parsed: QueryResponse = serde_json::from_str(&body)
            .map_err(|e| FetchError::Parse(format!("unexpected measurement JSON: {e}")))?;

        extract_value(parsed)
    }
}

#[async_trait]
impl MeasurementSource for MeasurementFetcher {
    async fn fetch_all(&self, coordinate: &Coordinate, as_of: DateTime<Utc>) -> MeasurementBatch {
        // The caller samples `as_of` once, so all four readings refer to the
        // same instant. The queries run concurrently; each already resolves
        // to its own Result, so one outage cannot touch the other three.
        let (temperature, weather_symbol, heavy_rain_warning, air_quality) = tokio::join!(
            self.fetch_one(Measurement::Temperature, coordinate, as_of),
            self.fetch_one(Measurement::WeatherSymbol, coordinate, as_of),
            self.fetch_one(Measurement::HeavyRainWarning, coordinate, as_of),
            self.fetch_one(Measurement::AirQuality, coordinate, as_of),
        );

        let batch = MeasurementBatch { temperature, weather_symbol, heavy_rain_warning, air_quality };

        for (measurement, outcome) in Measurement::all().iter().zip([
            &batch.temperature,
            &batch.weather_symbol,
            &batch.heavy_rain_warning,
            &batch.air_quality,
        ]) {
            if let Err(err) = outcome {
                tracing::warn!("{measurement} query degraded: {err}");
            }
        }

        batch
    }
}

/// Response envelope: only the first element at each nesting level carries
/// the single requested value.
#[derive(Debug, Deserialize)]
struct QueryResponse {
    data: Vec<QuerySeries>,
}

#[derive(Debug, Deserialize)]
struct QuerySeries {
    coordinates: Vec<QueryCoordinate>,
}

#[derive(Debug, Deserialize)]
struct QueryCoordinate {
    dates: Vec<QueryDate>,
}

#[derive(Debug, Deserialize)]
struct QueryDate {
    value: f64,
}

fn extract_value(response: QueryResponse) -> Fetched<f64> {
    let series = response
        .data
        .into_iter()
        .next()
        .ok_or_else(|| FetchError::MissingData("empty data array".into()))?;

    let coordinate = series
        .coordinates
        .into_iter()
        .next()
        .ok_or_else(|| FetchError::MissingData("no coordinates entry".into()))?;

    let date = coordinate
        .dates
        .into_iter()
        .next()
        .ok_or_else(|| FetchError::MissingData("no dates entry".into()))?;

    Ok(date.value)
}
