use async_trait::async_trait;
use rust_decimal::Decimal;

use super::MarketDataError;

/// Capability shared by all price fetchers: yield a current unit price in USD
/// for one identifier, or signal unavailability through the error. The three
/// upstream sources cover different asset classes, so the fetchers are
/// independent and swappable behind this trait.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Short name used in logs and error messages.
    fn id(&self) -> &'static str;

    async fn unit_price(&self, identifier: &str) -> Result<Decimal, MarketDataError>;
}
