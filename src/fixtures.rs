//! Hand-authored sample data for local development and design previews.
//!
//! Stands in for the live backend when no network is available. The shapes
//! here are richer than the wire records (shares, cost basis, daily moves)
//! and stay preview-only; they are never fed through the API models.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::models::Side;

/// Fixed portfolio total every sample percentage is derived from.
pub const TOTAL_PORTFOLIO_VALUE: f64 = 47_537.50;

#[derive(Debug, Clone, Serialize)]
pub struct FixtureStock {
    pub symbol: String,
    pub name: String,
    pub shares: i32,
    pub avg_price: f64,
    pub current_price: f64,
    pub total_value: f64,
    pub daily_change: f64,
    pub daily_change_percent: f64,
    pub description: String,
    /// Always `total_value / TOTAL_PORTFOLIO_VALUE * 100`; derived in
    /// `stock`, never hand-entered.
    pub portfolio_percentage: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FixtureTransaction {
    pub date: NaiveDate,
    pub side: Side,
    pub symbol: String,
    pub shares: i32,
    pub price: f64,
    pub total: f64,
}

// Headline numbers for the summary card.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioStats {
    pub total_value: f64,
    pub daily_change_percent: f64,
    pub monthly_change_percent: f64,
    pub yearly_change_percent: f64,
}

#[allow(clippy::too_many_arguments)]
fn stock(
    symbol: &str,
    name: &str,
    shares: i32,
    avg_price: f64,
    current_price: f64,
    total_value: f64,
    daily_change: f64,
    daily_change_percent: f64,
    description: &str,
) -> FixtureStock {
    FixtureStock {
        symbol: symbol.to_string(),
        name: name.to_string(),
        shares,
        avg_price,
        current_price,
        total_value,
        daily_change,
        daily_change_percent,
        description: description.to_string(),
        portfolio_percentage: total_value / TOTAL_PORTFOLIO_VALUE * 100.0,
    }
}

fn day(year: i32, month: u32, dom: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, dom).expect("valid fixture date")
}

pub static STOCKS: Lazy<Vec<FixtureStock>> = Lazy::new(|| {
    vec![
        stock(
            "VTI",
            "Vanguard Total Stock Market ETF",
            100,
            250.50,
            260.75,
            26_075.0,
            2.50,
            0.97,
            "Core holding for broad market exposure. Provides diversification \
             across the entire US stock market.",
        ),
        stock(
            "QQQ",
            "Invesco QQQ Trust",
            50,
            350.25,
            365.80,
            18_290.0,
            3.20,
            0.88,
            "Tech-focused ETF tracking the NASDAQ-100. Betting on continued \
             tech innovation and growth.",
        ),
        stock(
            "ARKK",
            "ARK Innovation ETF",
            75,
            45.60,
            42.30,
            3_172.50,
            -0.75,
            -1.74,
            "High-risk, high-reward play on disruptive innovation. Smaller \
             position due to higher volatility.",
        ),
    ]
});

pub static TRANSACTIONS: Lazy<Vec<FixtureTransaction>> = Lazy::new(|| {
    vec![
        FixtureTransaction {
            date: day(2024, 4, 25),
            side: Side::Buy,
            symbol: "VTI".to_string(),
            shares: 20,
            price: 258.50,
            total: 5_170.0,
        },
        FixtureTransaction {
            date: day(2024, 4, 24),
            side: Side::Sell,
            symbol: "QQQ".to_string(),
            shares: 10,
            price: 362.75,
            total: 3_627.50,
        },
        FixtureTransaction {
            date: day(2024, 4, 23),
            side: Side::Buy,
            symbol: "ARKK".to_string(),
            shares: 25,
            price: 43.20,
            total: 1_080.0,
        },
    ]
});

pub static STATS: Lazy<PortfolioStats> = Lazy::new(|| PortfolioStats {
    total_value: TOTAL_PORTFOLIO_VALUE,
    daily_change_percent: 0.13,
    monthly_change_percent: 2.7,
    yearly_change_percent: 22.5,
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_is_derived_from_total_value() {
        for s in STOCKS.iter() {
            let expected = s.total_value / TOTAL_PORTFOLIO_VALUE * 100.0;
            assert_eq!(s.portfolio_percentage, expected, "{}", s.symbol);
        }
    }

    #[test]
    fn percentages_sum_to_aggregate_share() {
        let value_sum: f64 = STOCKS.iter().map(|s| s.total_value).sum();
        let pct_sum: f64 = STOCKS.iter().map(|s| s.portfolio_percentage).sum();

        let expected = value_sum / TOTAL_PORTFOLIO_VALUE * 100.0;
        assert!((pct_sum - expected).abs() < 1e-9);
    }

    #[test]
    fn stats_total_matches_derivation_base() {
        assert_eq!(STATS.total_value, TOTAL_PORTFOLIO_VALUE);
    }

    #[test]
    fn sample_set_is_complete() {
        assert_eq!(STOCKS.len(), 3);
        assert_eq!(TRANSACTIONS.len(), 3);
        assert_eq!(TRANSACTIONS[0].symbol, "VTI");
        assert_eq!(TRANSACTIONS[1].side, Side::Sell);
    }
}
