use dotenvy::dotenv;
use eyre::Result;
use reqwest::Client;
use std::env;
use std::time::Duration;

const SPOT_METALS_URL_DEFAULT: &str = "https://api.metals.live/v1/spot";
const COINGECKO_BASE_URL_DEFAULT: &str = "https://api.coingecko.com";
const YAHOO_BASE_URL_DEFAULT: &str = "https://query1.finance.yahoo.com";

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Runtime configuration: the shared HTTP client and the upstream endpoints.
/// Base URLs can be overridden through the environment; the holdings set
/// itself is compiled in and not configurable here.
pub struct Config {
    pub http_client: Client,
    pub spot_metals_url: String,
    pub coingecko_base_url: String,
    pub yahoo_base_url: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        dotenv().ok();

        let spot_metals_url =
            env::var("SPOT_METALS_URL").unwrap_or_else(|_| SPOT_METALS_URL_DEFAULT.to_string());
        let coingecko_base_url = env::var("COINGECKO_BASE_URL")
            .unwrap_or_else(|_| COINGECKO_BASE_URL_DEFAULT.to_string());
        let yahoo_base_url =
            env::var("YAHOO_BASE_URL").unwrap_or_else(|_| YAHOO_BASE_URL_DEFAULT.to_string());

        let http_client = Client::builder().timeout(HTTP_TIMEOUT).build()?;

        Ok(Config {
            http_client,
            spot_metals_url,
            coingecko_base_url,
            yahoo_base_url,
        })
    }
}
