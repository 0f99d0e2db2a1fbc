use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::market_data::PriceQuote;

/// Every quote gathered for one render pass. Nothing in here outlives the
/// run; the next pass re-fetches from scratch.
#[derive(Debug, Clone, Default)]
pub struct PriceBook {
    pub gold: PriceQuote,
    /// Keyed by the crypto position's price-source identifier.
    pub crypto: HashMap<String, PriceQuote>,
    /// Keyed by ETF ticker symbol.
    pub etf: HashMap<String, PriceQuote>,
}

/// Value and profit for one asset class.
#[derive(Debug, Clone)]
pub struct ClassValuation {
    pub label: &'static str,
    pub current_value: Decimal,
    pub cost_basis: Decimal,
    /// Identifiers that had no usable quote this run. Each contributed zero
    /// value and is surfaced as a warning by the renderer.
    pub unpriced: Vec<String>,
}

impl ClassValuation {
    pub fn profit(&self) -> Decimal {
        self.current_value - self.cost_basis
    }
}

/// Per-class and total valuation for one run. Totals are derived from the
/// class entries, never accumulated separately.
#[derive(Debug, Clone)]
pub struct PortfolioValuation {
    pub gold: ClassValuation,
    pub crypto: ClassValuation,
    pub etfs: ClassValuation,
}

impl PortfolioValuation {
    pub fn classes(&self) -> [&ClassValuation; 3] {
        [&self.gold, &self.crypto, &self.etfs]
    }

    pub fn total_value(&self) -> Decimal {
        self.classes().iter().map(|c| c.current_value).sum()
    }

    pub fn total_invested(&self) -> Decimal {
        self.classes().iter().map(|c| c.cost_basis).sum()
    }

    pub fn total_profit(&self) -> Decimal {
        self.total_value() - self.total_invested()
    }
}
