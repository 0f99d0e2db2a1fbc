use rust_decimal::Decimal;

/// A fetched unit price, or an explicit marker that the fetch failed.
/// Distinct from a price that is legitimately zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceQuote {
    Available(Decimal),
    Unavailable,
}

impl PriceQuote {
    pub fn is_available(&self) -> bool {
        matches!(self, PriceQuote::Available(_))
    }

    pub fn price(&self) -> Option<Decimal> {
        match self {
            PriceQuote::Available(price) => Some(*price),
            PriceQuote::Unavailable => None,
        }
    }
}

impl Default for PriceQuote {
    fn default() -> Self {
        PriceQuote::Unavailable
    }
}
