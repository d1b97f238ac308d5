//! Data-access layer for the vibe-etf portfolio front end.
//!
//! Talks to the vibe-etf backend over plain GET requests and hands back
//! canonical records. The [`fixtures`] module carries a static sample
//! dataset for development and design previews, with no network involved.

mod api;
mod config;
mod errors;
pub mod fixtures;
mod logging;
mod models;

pub use api::ApiClient;
pub use config::ApiConfig;
pub use errors::FetchError;
pub use logging::{init_logging, LoggingConfig};
pub use models::{Holding, Portfolio, Side, StockInfo, TotalPerformance, Transaction};
