pub mod money;
pub mod quote;

pub use money::Money;
pub use quote::{BudgetQuote, FeeBreakdown};
