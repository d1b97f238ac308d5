mod holding;
mod performance;
mod stock_info;
mod transaction;

pub use holding::{Holding, Portfolio};
pub use performance::TotalPerformance;
pub use stock_info::StockInfo;
pub use transaction::{Side, Transaction};

pub(crate) use holding::{normalize_portfolio, RawHolding};
