use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

// Represents a buy or sell event that affected the portfolio's holdings.
// The backend decides the order transactions come back in; it is kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub ticker: String,
    pub action: Side,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_uses_lowercase_tags() {
        let tx: Transaction =
            serde_json::from_str(r#"{"date": "2024-04-25", "ticker": "VTI", "action": "buy"}"#)
                .unwrap();

        assert_eq!(tx.action, Side::Buy);
        assert_eq!(tx.date, NaiveDate::from_ymd_opt(2024, 4, 25).unwrap());
        assert_eq!(serde_json::to_value(Side::Sell).unwrap(), "sell");
    }
}
