use rust_decimal::Decimal;

/// A bullion holding, measured in grams.
#[derive(Debug, Clone)]
pub struct GoldPosition {
    pub quantity_grams: Decimal,
    pub cost_basis: Decimal,
}

/// A cryptocurrency holding. `price_source_id` is the identifier the crypto
/// quote API understands (e.g. "ethereum"). The quantity is baked in from
/// historical purchase lots (amount spent / price at purchase, summed);
/// individual lots are not tracked.
#[derive(Debug, Clone)]
pub struct CryptoPosition {
    pub price_source_id: String,
    pub cost_basis: Decimal,
    pub quantity: Decimal,
}

/// An exchange-traded-fund holding. Units are not stored; valuation derives
/// them from the cost basis and the current price.
#[derive(Debug, Clone)]
pub struct EtfPosition {
    pub ticker_symbol: String,
    pub cost_basis: Decimal,
}
