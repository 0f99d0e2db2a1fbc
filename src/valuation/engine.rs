use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::{info, instrument, warn};

use super::types::{ClassValuation, PortfolioValuation, PriceBook};
use crate::holdings::HoldingsRegistry;
use crate::market_data::{PriceQuote, PriceSource};

/// Field name the spot-metals feed uses for the gold price.
pub const GOLD_PRICE_FIELD: &str = "gold";

/// Gathers every quote the registry needs, one fetch at a time: gold first,
/// then crypto positions, then ETF tickers, in registry order. A failed fetch
/// becomes an explicit unavailable quote; it never stops the pass.
#[instrument(skip_all)]
pub async fn collect_quotes(
    registry: &HoldingsRegistry,
    gold_source: &dyn PriceSource,
    crypto_source: &dyn PriceSource,
    etf_source: &dyn PriceSource,
) -> PriceBook {
    let gold = quote_or_unavailable(gold_source, GOLD_PRICE_FIELD).await;

    let mut crypto = HashMap::new();
    for position in registry.crypto_positions() {
        let quote = quote_or_unavailable(crypto_source, &position.price_source_id).await;
        crypto.insert(position.price_source_id.clone(), quote);
    }

    let mut etf = HashMap::new();
    for position in registry.etf_positions() {
        let quote = quote_or_unavailable(etf_source, &position.ticker_symbol).await;
        etf.insert(position.ticker_symbol.clone(), quote);
    }

    let available = usize::from(gold.is_available())
        + crypto.values().filter(|q| q.is_available()).count()
        + etf.values().filter(|q| q.is_available()).count();
    info!(
        available = available,
        requested = 1 + crypto.len() + etf.len(),
        "Quotes collected"
    );

    PriceBook { gold, crypto, etf }
}

async fn quote_or_unavailable(source: &dyn PriceSource, identifier: &str) -> PriceQuote {
    match source.unit_price(identifier).await {
        Ok(price) => PriceQuote::Available(price),
        Err(e) => {
            warn!(
                source = source.id(),
                identifier = %identifier,
                error = %e,
                "Price fetch failed"
            );
            PriceQuote::Unavailable
        }
    }
}

/// Pure valuation over the registry and one run's price book. An unavailable
/// quote contributes zero value and lands in the class's unpriced list; cost
/// bases always count toward the invested totals.
pub fn value_portfolio(registry: &HoldingsRegistry, book: &PriceBook) -> PortfolioValuation {
    let gold_position = registry.gold();
    let mut gold_unpriced = Vec::new();
    let gold_value = match book.gold {
        PriceQuote::Available(price_per_gram) => gold_position.quantity_grams * price_per_gram,
        PriceQuote::Unavailable => {
            gold_unpriced.push(GOLD_PRICE_FIELD.to_string());
            Decimal::ZERO
        }
    };
    let gold = ClassValuation {
        label: "Gold",
        current_value: gold_value,
        cost_basis: gold_position.cost_basis,
        unpriced: gold_unpriced,
    };

    let mut crypto_value = Decimal::ZERO;
    let mut crypto_invested = Decimal::ZERO;
    let mut crypto_unpriced = Vec::new();
    for position in registry.crypto_positions() {
        crypto_invested += position.cost_basis;
        match book.crypto.get(&position.price_source_id).copied() {
            Some(PriceQuote::Available(price)) => crypto_value += position.quantity * price,
            _ => crypto_unpriced.push(position.price_source_id.clone()),
        }
    }
    let crypto = ClassValuation {
        label: "Crypto",
        current_value: crypto_value,
        cost_basis: crypto_invested,
        unpriced: crypto_unpriced,
    };

    let mut etf_value = Decimal::ZERO;
    let mut etf_invested = Decimal::ZERO;
    let mut etf_unpriced = Vec::new();
    for position in registry.etf_positions() {
        etf_invested += position.cost_basis;
        match book.etf.get(&position.ticker_symbol).copied() {
            Some(PriceQuote::Available(price)) if !price.is_zero() => {
                // Units are re-derived from the cost basis each run; the
                // position stores no purchase history.
                let units = position.cost_basis / price;
                etf_value += units * price;
            }
            Some(PriceQuote::Available(_)) => {} // zero price: zero units, zero value
            _ => etf_unpriced.push(position.ticker_symbol.clone()),
        }
    }
    let etfs = ClassValuation {
        label: "ETFs",
        current_value: etf_value,
        cost_basis: etf_invested,
        unpriced: etf_unpriced,
    };

    PortfolioValuation { gold, crypto, etfs }
}
