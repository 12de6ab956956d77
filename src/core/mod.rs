pub mod average_cost;
pub mod dividend;
pub mod error;
pub mod ex_price;

// Flat public surface for domain types and functions.
pub use average_cost::{AverageCostInput, AverageCostResult};
pub use dividend::{DividendInput, DividendResult};
pub use error::CalcError;
pub use ex_price::{Adjustment, ExPriceInput, ExPriceResult};
