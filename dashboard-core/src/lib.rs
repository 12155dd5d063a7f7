//! Core library for the hazard/weather dashboard.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Fetchers for the two upstream sources (agency RSS feeds, Meteomatics
//!   measurement API) behind trait seams
//! - The weather-symbol catalog
//! - The assembler that gathers everything into one render-ready value
//!
//! It is used by `dashboard-cli`, but can also be reused by other binaries or
//! services. The one guarantee every public fetch surface upholds: a dead or
//! misbehaving upstream degrades its own field and nothing else, so the
//! dashboard always has something to render.

pub mod config;
pub mod dashboard;
pub mod model;
pub mod source;
pub mod symbol;

pub use config::{Config, Credentials};
pub use dashboard::{DashboardAssembler, DashboardData};
pub use model::{Coordinate, FeedSummary, FetchError, Fetched, MeasurementBatch};
pub use source::{MeasurementSource, SummarySource};
pub use symbol::WeatherSymbol;
