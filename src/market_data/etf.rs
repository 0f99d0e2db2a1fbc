use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;
use url::Url;

use super::source::PriceSource;
use super::MarketDataError;
use crate::config::Config;

const SOURCE_ID: &str = "yahoo_chart";

/// Historical-data feed for listed funds. Asks for the most recent one-day
/// window and reads the closing price of the last row.
#[derive(Debug, Clone)]
pub struct YahooChartSource {
    http_client: Client,
    base_url: String,
}

impl YahooChartSource {
    pub fn new(config: &Config) -> Self {
        Self {
            http_client: config.http_client.clone(),
            base_url: config.yahoo_base_url.clone(),
        }
    }
}

#[async_trait]
impl PriceSource for YahooChartSource {
    fn id(&self) -> &'static str {
        SOURCE_ID
    }

    #[instrument(skip(self))]
    async fn unit_price(&self, identifier: &str) -> Result<Decimal, MarketDataError> {
        let url = Url::parse(&format!(
            "{}/v8/finance/chart/{}",
            self.base_url, identifier
        ))?;
        let params = [("range", "1d"), ("interval", "1d")];
        let body: ChartResponse = self
            .http_client
            .get(url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        latest_close(&body, identifier)
    }
}

// Chart API response structures

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartBody,
}

#[derive(Debug, Deserialize)]
struct ChartBody {
    result: Option<Vec<ChartResult>>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteBlock>,
}

#[derive(Debug, Deserialize)]
struct QuoteBlock {
    close: Option<Vec<Option<Decimal>>>,
}

/// The most recent non-null close in the window. The feed pads rows with
/// nulls outside trading hours, so the scan runs from the end.
fn latest_close(body: &ChartResponse, identifier: &str) -> Result<Decimal, MarketDataError> {
    body.chart
        .result
        .as_deref()
        .and_then(|results| results.first())
        .and_then(|result| result.indicators.quote.first())
        .and_then(|quote| quote.close.as_deref())
        .and_then(|closes| closes.iter().rev().find_map(|close| *close))
        .ok_or_else(|| MarketDataError::MissingPrice {
            source_id: SOURCE_ID,
            identifier: identifier.to_string(),
        })
}
