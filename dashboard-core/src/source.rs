use crate::model::{Coordinate, FeedSummary, MeasurementBatch};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::{fmt::Debug, time::Duration};

pub mod feed;
pub mod meteomatics;

pub use feed::FeedFetcher;
pub use meteomatics::MeasurementFetcher;

/// Bounded timeout for every upstream request, so one dead endpoint cannot
/// hang a whole dashboard render.
pub(crate) const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// A source of hazard-advisory feed summaries.
#[async_trait]
pub trait SummarySource: Send + Sync + Debug {
    /// Fetch one feed and reduce it to its first item's summary text.
    ///
    /// Never fails outward; any degradation is carried inside the returned
    /// value.
    async fn first_summary(&self, url: &str) -> FeedSummary;
}

/// A source of scalar weather measurements.
#[async_trait]
pub trait MeasurementSource: Send + Sync + Debug {
    /// Fetch the full measurement batch for one coordinate, all readings
    /// referring to the single instant `as_of`.
    ///
    /// Never fails outward; each field of the batch degrades independently.
    async fn fetch_all(&self, coordinate: &Coordinate, as_of: DateTime<Utc>) -> MeasurementBatch;
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    // Cut on a char boundary: upstream error pages are not ASCII-only, and
    // this runs on the error-reporting path where a panic is never allowed.
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
