pub mod crypto;
pub mod etf;
pub mod gold;
pub mod quote;
pub mod source;

pub use crypto::CoinGeckoSource;
pub use etf::YahooChartSource;
pub use gold::SpotMetalsSource;
pub use quote::PriceQuote;
pub use source::PriceSource;

use thiserror::Error;

/// Failures a price fetch can surface. Every variant degrades to an explicit
/// unavailable quote at collection time; none of them aborts a valuation run.
#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid endpoint url: {0}")]
    Url(#[from] url::ParseError),

    #[error("{source_id} returned an unexpected response shape: {detail}")]
    MalformedResponse {
        source_id: &'static str,
        detail: String,
    },

    #[error("{source_id} has no price for {identifier}")]
    MissingPrice {
        source_id: &'static str,
        identifier: String,
    },
}
