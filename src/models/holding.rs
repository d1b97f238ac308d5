use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A portfolio keyed by ticker symbol. Every holding's `symbol` field equals
/// the key it is stored under; `normalize_portfolio` establishes that.
pub type Portfolio = BTreeMap<String, Holding>;

// One owned security position, as handed to consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub symbol: String,
    pub current_price: f64,
    /// Share of the portfolio, 0-100.
    pub percentage: f64,
    /// Signed percent since purchase.
    pub performance: f64,
    /// Period label to whatever detail the backend attaches to it.
    pub monthly_performance: BTreeMap<String, serde_json::Value>,
}

// Wire form of a holding. The backend keys the portfolio map by symbol and
// leaves that field out of the value.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawHolding {
    pub current_price: f64,
    pub percentage: f64,
    pub performance: f64,
    pub monthly_performance: BTreeMap<String, serde_json::Value>,
}

impl RawHolding {
    fn into_holding(self, symbol: String) -> Holding {
        Holding {
            symbol,
            current_price: self.current_price,
            percentage: self.percentage,
            performance: self.performance,
            monthly_performance: self.monthly_performance,
        }
    }
}

/// Inject each map key into its holding. Every entry becomes an independent
/// owned record; no key is dropped or duplicated.
pub(crate) fn normalize_portfolio(raw: BTreeMap<String, RawHolding>) -> Portfolio {
    raw.into_iter()
        .map(|(symbol, stock)| {
            let holding = stock.into_holding(symbol.clone());
            (symbol, holding)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(price: f64) -> RawHolding {
        RawHolding {
            current_price: price,
            percentage: 50.0,
            performance: 1.0,
            monthly_performance: BTreeMap::new(),
        }
    }

    #[test]
    fn symbol_matches_key_for_every_entry() {
        let mut wire = BTreeMap::new();
        wire.insert("VTI".to_string(), raw(260.75));
        wire.insert("QQQ".to_string(), raw(365.80));
        wire.insert("ARKK".to_string(), raw(42.30));

        let portfolio = normalize_portfolio(wire);

        for (key, holding) in &portfolio {
            assert_eq!(&holding.symbol, key);
        }
    }

    #[test]
    fn every_key_survives_normalization() {
        let mut wire = BTreeMap::new();
        wire.insert("VTI".to_string(), raw(260.75));
        wire.insert("QQQ".to_string(), raw(365.80));

        let portfolio = normalize_portfolio(wire);

        assert_eq!(portfolio.len(), 2);
        assert!(portfolio.contains_key("VTI"));
        assert!(portfolio.contains_key("QQQ"));
    }

    #[test]
    fn entries_are_independent_records() {
        let mut wire = BTreeMap::new();
        wire.insert("VTI".to_string(), raw(260.75));
        wire.insert("QQQ".to_string(), raw(365.80));

        let portfolio = normalize_portfolio(wire);

        assert_eq!(portfolio["VTI"].current_price, 260.75);
        assert_eq!(portfolio["QQQ"].current_price, 365.80);
        assert_ne!(portfolio["VTI"], portfolio["QQQ"]);
    }

    #[test]
    fn decodes_wire_shape_without_symbol() {
        let body = r#"{"VTI": {"current_price": 260.75, "percentage": 54.8, "performance": 4.1, "monthly_performance": {}}}"#;

        let wire: BTreeMap<String, RawHolding> = serde_json::from_str(body).unwrap();
        let portfolio = normalize_portfolio(wire);

        let holding = &portfolio["VTI"];
        assert_eq!(holding.symbol, "VTI");
        assert_eq!(holding.current_price, 260.75);
        assert_eq!(holding.percentage, 54.8);
        assert_eq!(holding.performance, 4.1);
        assert!(holding.monthly_performance.is_empty());
    }
}
