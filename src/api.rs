use std::collections::BTreeMap;

use tracing::debug;

use crate::config::ApiConfig;
use crate::errors::FetchError;
use crate::models::{
    normalize_portfolio, Portfolio, RawHolding, StockInfo, TotalPerformance, Transaction,
};

/// Client for the vibe-etf backend. Every method is one GET round trip;
/// calls share nothing beyond the connection pool inside `reqwest::Client`,
/// so concurrent calls need no coordination. There are no retries and no
/// timeouts here; a caller wanting a deadline wraps the future itself.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url,
        }
    }

    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    /// Fetch all holdings. The backend keys the response by ticker and omits
    /// the symbol from each value; the symbol is injected here so every
    /// holding is self-describing.
    pub async fn fetch_portfolio(&self) -> Result<Portfolio, FetchError> {
        let url = format!("{}/portfolio", self.base_url);
        debug!("GET {}", url);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(FetchError::Status("portfolio data"));
        }

        let raw: BTreeMap<String, RawHolding> = resp
            .json()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))?;

        Ok(normalize_portfolio(raw))
    }

    pub async fn fetch_total_performance(&self) -> Result<TotalPerformance, FetchError> {
        let url = format!("{}/total", self.base_url);
        debug!("GET {}", url);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(FetchError::Status("total performance data"));
        }

        resp.json()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))
    }

    /// Fetch the transaction history in whatever order the backend returns it.
    pub async fn fetch_transactions(&self) -> Result<Vec<Transaction>, FetchError> {
        let url = format!("{}/transactions", self.base_url);
        debug!("GET {}", url);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(FetchError::Status("transactions data"));
        }

        resp.json()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))
    }

    /// Fetch metadata for one ticker. The ticker is interpolated into the
    /// path verbatim; callers supply URL-safe tickers.
    pub async fn fetch_stock_info(&self, ticker: &str) -> Result<StockInfo, FetchError> {
        let url = format!("{}/stock/{}", self.base_url, ticker);
        debug!("GET {}", url);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(FetchError::Status("stock info"));
        }

        resp.json()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))
    }

    pub async fn fetch_all_stock_info(&self) -> Result<Vec<StockInfo>, FetchError> {
        let url = format!("{}/stock", self.base_url);
        debug!("GET {}", url);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(FetchError::Status("stock info"));
        }

        resp.json()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))
    }
}
