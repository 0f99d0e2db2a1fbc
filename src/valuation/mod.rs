pub mod engine;
pub mod types;

pub use engine::{collect_quotes, value_portfolio, GOLD_PRICE_FIELD};
pub use types::{ClassValuation, PortfolioValuation, PriceBook};
