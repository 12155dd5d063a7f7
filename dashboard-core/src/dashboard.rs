//! Gathers both feeds and the measurement batch into one render-ready value.

use anyhow::Result;
use chrono::Utc;

use crate::config::Config;
use crate::model::{Coordinate, FeedSummary, Fetched};
use crate::source::{FeedFetcher, MeasurementFetcher, MeasurementSource, SummarySource};
use crate::symbol::{self, WeatherSymbol};

/// NHC Atlantic tropical-cyclone advisory feed.
pub const NHC_FEED_URL: &str = "https://www.nhc.noaa.gov/nhc_at1.xml";

/// SPC severe-storm watch/warning feed.
pub const SPC_FEED_URL: &str = "https://www.spc.noaa.gov/products/spcwwrss.xml";

// McDonough, GA. Fixed for this deployment.
pub const LATITUDE: &str = "33.4473";
pub const LONGITUDE: &str = "-84.1469";

pub fn default_coordinate() -> Coordinate {
    Coordinate::new(LATITUDE, LONGITUDE)
}

/// Everything one dashboard render needs, built fresh per call.
///
/// Every field is independently degradable; a `Fetched` error here means
/// that upstream failed while the rest of the struct is still populated.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub nhc_summary: FeedSummary,
    pub spc_summary: FeedSummary,
    pub temperature: Fetched<f64>,
    pub symbol: WeatherSymbol,
    pub heavy_rain_warning: Fetched<f64>,
    pub air_quality: Fetched<f64>,
}

/// Orchestrates the feed and measurement sources for one location.
pub struct DashboardAssembler {
    feeds: Box<dyn SummarySource>,
    measurements: Box<dyn MeasurementSource>,
    coordinate: Coordinate,
}

impl DashboardAssembler {
    pub fn new(
        feeds: Box<dyn SummarySource>,
        measurements: Box<dyn MeasurementSource>,
        coordinate: Coordinate,
    ) -> Self {
        Self { feeds, measurements, coordinate }
    }

    /// Construct the real assembler from config, for the fixed deployment
    /// coordinate. Fails only when credentials are absent or the HTTP
    /// clients cannot be built; fetch-time failures never surface here.
    pub fn from_config(config: &Config) -> Result<Self> {
        let credentials = config.credentials()?.clone();

        Ok(Self::new(
            Box::new(FeedFetcher::new()?),
            Box::new(MeasurementFetcher::new(credentials)?),
            default_coordinate(),
        ))
    }

    /// Build one dashboard. Always returns a fully populated value.
    pub async fn build(&self) -> DashboardData {
        let as_of = Utc::now();

        let (nhc_summary, spc_summary, batch) = tokio::join!(
            self.feeds.first_summary(NHC_FEED_URL),
            self.feeds.first_summary(SPC_FEED_URL),
            self.measurements.fetch_all(&self.coordinate, as_of),
        );

        // A missing or failed symbol reading falls back to code 0, the
        // provider's own "could not be determined" entry.
        let code = batch.weather_symbol.as_ref().map_or(0, |v| *v as i64);

        DashboardData {
            nhc_summary,
            spc_summary,
            temperature: batch.temperature,
            symbol: symbol::lookup(code),
            heavy_rain_warning: batch.heavy_rain_warning,
            air_quality: batch.air_quality,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FetchError, MeasurementBatch};
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};

    /// Repeats one canned summary for every feed URL.
    #[derive(Debug)]
    struct FakeFeeds {
        text: Fetched<String>,
    }

    #[async_trait]
    impl SummarySource for FakeFeeds {
        async fn first_summary(&self, url: &str) -> FeedSummary {
            FeedSummary { source_url: url.to_string(), text: self.text.clone() }
        }
    }

    #[derive(Debug)]
    struct FakeMeasurements {
        batch: MeasurementBatch,
    }

    #[async_trait]
    impl MeasurementSource for FakeMeasurements {
        async fn fetch_all(&self, _coordinate: &Coordinate, _as_of: DateTime<Utc>) -> MeasurementBatch {
            self.batch.clone()
        }
    }

    fn assembler(batch: MeasurementBatch) -> DashboardAssembler {
        DashboardAssembler::new(
            Box::new(FakeFeeds { text: Ok("Tropical Storm Alpha forms".into()) }),
            Box::new(FakeMeasurements { batch }),
            default_coordinate(),
        )
    }

    fn all_ok() -> MeasurementBatch {
        MeasurementBatch {
            temperature: Ok(21.4),
            weather_symbol: Ok(3.0),
            heavy_rain_warning: Ok(0.0),
            air_quality: Ok(7.5),
        }
    }

    #[tokio::test]
    async fn symbol_value_resolves_through_the_catalog() {
        let data = assembler(all_ok()).build().await;

        assert_eq!(data.symbol.code, 3);
        assert_eq!(data.symbol.description, "Partly cloudy");
        assert_eq!(data.symbol.icon, "⛅");
    }

    #[tokio::test]
    async fn failed_symbol_query_falls_back_to_code_zero() {
        let mut batch = all_ok();
        batch.weather_symbol =
            Err(FetchError::HttpStatus { status: 503, body: "Service Unavailable".into() });

        let data = assembler(batch).build().await;

        assert_eq!(data.symbol.code, 0);
        assert_eq!(data.symbol.description, "A weather symbol could not be determined");
        assert_eq!(data.symbol.icon, "❓");
    }

    #[tokio::test]
    async fn one_failed_measurement_leaves_the_rest_populated() {
        let mut batch = all_ok();
        batch.air_quality = Err(FetchError::Transport("connection refused".into()));

        let data = assembler(batch).build().await;

        assert_eq!(data.temperature, Ok(21.4));
        assert_eq!(data.heavy_rain_warning, Ok(0.0));
        assert!(data.air_quality.is_err());
        assert_eq!(data.nhc_summary.text.as_deref(), Ok("Tropical Storm Alpha forms"));
        assert_eq!(data.spc_summary.source_url, SPC_FEED_URL);
    }

    #[tokio::test]
    async fn both_feed_sources_are_queried() {
        let data = assembler(all_ok()).build().await;

        assert_eq!(data.nhc_summary.source_url, NHC_FEED_URL);
        assert_eq!(data.spc_summary.source_url, SPC_FEED_URL);
    }
}
