use dotenvy::dotenv;
use tracing::info;

use portfolio_dashboard::config::Config;
use portfolio_dashboard::dashboard::render;
use portfolio_dashboard::holdings::HoldingsRegistry;
use portfolio_dashboard::logging;
use portfolio_dashboard::market_data::{CoinGeckoSource, SpotMetalsSource, YahooChartSource};
use portfolio_dashboard::valuation::{collect_quotes, value_portfolio};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging
    logging::init_logging();

    // Load configuration
    let cfg = Config::load()?;
    info!("Configuration loaded and logging initialized");

    // Build the compiled-in holdings registry
    let registry = HoldingsRegistry::personal_holdings()?;
    info!(
        crypto_positions = registry.crypto_positions().len(),
        etf_positions = registry.etf_positions().len(),
        "Holdings registry initialized"
    );

    // One price source per asset class
    let gold_source = SpotMetalsSource::new(&cfg);
    let crypto_source = CoinGeckoSource::new(&cfg);
    let etf_source = YahooChartSource::new(&cfg);

    // Fetch quotes, value the portfolio, render
    let book = collect_quotes(&registry, &gold_source, &crypto_source, &etf_source).await;
    let valuation = value_portfolio(&registry, &book);
    info!(
        total_value = %valuation.total_value(),
        total_invested = %valuation.total_invested(),
        total_profit = %valuation.total_profit(),
        "Valuation computed"
    );

    let mut stdout = std::io::stdout();
    render::render_metrics(&mut stdout, &valuation)?;
    render::render_allocation(&valuation);

    Ok(())
}
