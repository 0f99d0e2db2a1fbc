use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use tracing::instrument;
use url::Url;

use super::source::PriceSource;
use super::MarketDataError;
use crate::config::Config;

const SOURCE_ID: &str = "coingecko";
const VS_CURRENCY: &str = "usd";

/// Quote API for crypto assets. One identifier per call; the response is an
/// object keyed by identifier, then by currency code.
#[derive(Debug, Clone)]
pub struct CoinGeckoSource {
    http_client: Client,
    base_url: String,
}

impl CoinGeckoSource {
    pub fn new(config: &Config) -> Self {
        Self {
            http_client: config.http_client.clone(),
            base_url: config.coingecko_base_url.clone(),
        }
    }
}

#[async_trait]
impl PriceSource for CoinGeckoSource {
    fn id(&self) -> &'static str {
        SOURCE_ID
    }

    #[instrument(skip(self))]
    async fn unit_price(&self, identifier: &str) -> Result<Decimal, MarketDataError> {
        let url = Url::parse(&format!("{}/api/v3/simple/price", self.base_url))?;
        let params = [("ids", identifier), ("vs_currencies", VS_CURRENCY)];
        let body: HashMap<String, HashMap<String, Decimal>> = self
            .http_client
            .get(url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        price_from_quote_map(&body, identifier)
    }
}

fn price_from_quote_map(
    body: &HashMap<String, HashMap<String, Decimal>>,
    identifier: &str,
) -> Result<Decimal, MarketDataError> {
    body.get(identifier)
        .and_then(|quotes| quotes.get(VS_CURRENCY))
        .copied()
        .ok_or_else(|| MarketDataError::MissingPrice {
            source_id: SOURCE_ID,
            identifier: identifier.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    fn body_with(identifier: &str, currency: &str, price: Decimal) -> HashMap<String, HashMap<String, Decimal>> {
        let mut quotes = HashMap::new();
        quotes.insert(currency.to_string(), price);
        let mut body = HashMap::new();
        body.insert(identifier.to_string(), quotes);
        body
    }

    #[test]
    fn reads_usd_price_for_identifier() {
        let body = body_with("ethereum", "usd", dec!(3000));
        assert_eq!(price_from_quote_map(&body, "ethereum").unwrap(), dec!(3000));
    }

    #[test]
    fn missing_identifier_is_missing_price() {
        let body = body_with("ethereum", "usd", dec!(3000));
        let result = price_from_quote_map(&body, "solana");
        assert!(matches!(result, Err(MarketDataError::MissingPrice { .. })));
    }

    #[test]
    fn missing_currency_key_is_missing_price() {
        let body = body_with("ethereum", "eur", dec!(2800));
        let result = price_from_quote_map(&body, "ethereum");
        assert!(matches!(result, Err(MarketDataError::MissingPrice { .. })));
    }

    #[test]
    fn empty_body_is_missing_price() {
        let body = HashMap::new();
        let result = price_from_quote_map(&body, "ethereum");
        assert!(matches!(result, Err(MarketDataError::MissingPrice { .. })));
    }
}
