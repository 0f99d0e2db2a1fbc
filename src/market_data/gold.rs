use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::instrument;
use url::Url;

use super::source::PriceSource;
use super::MarketDataError;
use crate::config::Config;

const SOURCE_ID: &str = "spot_metals";

/// Spot-price feed for bullion. The feed answers with a list of records, each
/// a map of metal name to price; the first record carrying the requested
/// metal field is read as the USD price per gram.
#[derive(Debug, Clone)]
pub struct SpotMetalsSource {
    http_client: Client,
    endpoint: String,
}

impl SpotMetalsSource {
    pub fn new(config: &Config) -> Self {
        Self {
            http_client: config.http_client.clone(),
            endpoint: config.spot_metals_url.clone(),
        }
    }
}

#[async_trait]
impl PriceSource for SpotMetalsSource {
    fn id(&self) -> &'static str {
        SOURCE_ID
    }

    #[instrument(skip(self))]
    async fn unit_price(&self, identifier: &str) -> Result<Decimal, MarketDataError> {
        let url = Url::parse(&self.endpoint)?;
        let body: Value = self
            .http_client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        price_from_spot_records(&body, identifier)
    }
}

/// Scans the feed payload for the first record exposing the requested metal.
/// Non-object records are skipped, matching the feed's loose shape.
fn price_from_spot_records(body: &Value, identifier: &str) -> Result<Decimal, MarketDataError> {
    let records = body
        .as_array()
        .ok_or_else(|| MarketDataError::MalformedResponse {
            source_id: SOURCE_ID,
            detail: "expected a list of spot records".to_string(),
        })?;

    for record in records {
        if let Some(field) = record.get(identifier) {
            return field
                .as_f64()
                .and_then(Decimal::from_f64)
                .ok_or_else(|| MarketDataError::MalformedResponse {
                    source_id: SOURCE_ID,
                    detail: format!("non-numeric {} field", identifier),
                });
        }
    }

    Err(MarketDataError::MissingPrice {
        source_id: SOURCE_ID,
        identifier: identifier.to_string(),
    })
}
