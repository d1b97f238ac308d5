use serde::{Deserialize, Serialize};

// Static descriptive metadata for one ticker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockInfo {
    pub ticker: String,
    pub name: String,
    pub description: String,
}
