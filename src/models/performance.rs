use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// Aggregate performance across the whole portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalPerformance {
    pub performance: f64,
    pub monthly_performance: BTreeMap<String, serde_json::Value>,
}
