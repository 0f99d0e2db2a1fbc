// Integration tests: quote collection and valuation driven end-to-end
// through mock price sources.

use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::{dec, Decimal};

use portfolio_dashboard::holdings::{CryptoPosition, EtfPosition, GoldPosition, HoldingsRegistry};
use portfolio_dashboard::market_data::{MarketDataError, PriceQuote, PriceSource};
use portfolio_dashboard::valuation::{collect_quotes, value_portfolio};

// ------------------------------------------------------------------
// Mock sources
// ------------------------------------------------------------------

struct FixedPriceSource {
    prices: HashMap<String, Decimal>,
}

impl FixedPriceSource {
    fn new(pairs: &[(&str, Decimal)]) -> Self {
        Self {
            prices: pairs
                .iter()
                .map(|(id, price)| (id.to_string(), *price))
                .collect(),
        }
    }
}

#[async_trait]
impl PriceSource for FixedPriceSource {
    fn id(&self) -> &'static str {
        "fixed"
    }

    async fn unit_price(&self, identifier: &str) -> Result<Decimal, MarketDataError> {
        self.prices
            .get(identifier)
            .copied()
            .ok_or_else(|| MarketDataError::MissingPrice {
                source_id: "fixed",
                identifier: identifier.to_string(),
            })
    }
}

/// A source that always fails, for exercising the degrade-to-unavailable path.
struct FailingSource;

#[async_trait]
impl PriceSource for FailingSource {
    fn id(&self) -> &'static str {
        "failing"
    }

    async fn unit_price(&self, identifier: &str) -> Result<Decimal, MarketDataError> {
        Err(MarketDataError::MalformedResponse {
            source_id: "failing",
            detail: format!("simulated failure for {}", identifier),
        })
    }
}

fn sample_registry() -> HoldingsRegistry {
    HoldingsRegistry::new(
        GoldPosition {
            quantity_grams: dec!(150),
            cost_basis: dec!(24000),
        },
        vec![
            CryptoPosition {
                price_source_id: "ethereum".to_string(),
                cost_basis: dec!(2611.23),
                quantity: dec!(1.26),
            },
            CryptoPosition {
                price_source_id: "solana".to_string(),
                cost_basis: dec!(2491.58),
                quantity: dec!(16.6),
            },
        ],
        vec![
            EtfPosition {
                ticker_symbol: "NDQ.AX".to_string(),
                cost_basis: dec!(2880),
            },
            EtfPosition {
                ticker_symbol: "VGS.AX".to_string(),
                cost_basis: dec!(2160),
            },
        ],
    )
    .unwrap()
}

// ------------------------------------------------------------------
// Quote collection
// ------------------------------------------------------------------

#[tokio::test]
async fn collects_a_quote_for_every_registry_entry() {
    let registry = sample_registry();
    let gold = FixedPriceSource::new(&[("gold", dec!(74.52))]);
    let crypto = FixedPriceSource::new(&[("ethereum", dec!(3000)), ("solana", dec!(150))]);
    let etf = FixedPriceSource::new(&[("NDQ.AX", dec!(18.40)), ("VGS.AX", dec!(102.11))]);

    let book = collect_quotes(&registry, &gold, &crypto, &etf).await;

    assert_eq!(book.gold, PriceQuote::Available(dec!(74.52)));
    assert_eq!(book.crypto.len(), 2);
    assert_eq!(
        book.crypto.get("ethereum"),
        Some(&PriceQuote::Available(dec!(3000)))
    );
    assert_eq!(book.etf.len(), 2);
    assert_eq!(
        book.etf.get("VGS.AX"),
        Some(&PriceQuote::Available(dec!(102.11)))
    );
}

#[tokio::test]
async fn failed_fetches_become_explicit_unavailable_quotes() {
    let registry = sample_registry();
    let crypto = FixedPriceSource::new(&[("ethereum", dec!(3000))]); // no solana
    let etf = FixedPriceSource::new(&[("NDQ.AX", dec!(18.40)), ("VGS.AX", dec!(102.11))]);

    let book = collect_quotes(&registry, &FailingSource, &crypto, &etf).await;

    assert_eq!(book.gold, PriceQuote::Unavailable);
    assert_eq!(book.crypto.get("solana"), Some(&PriceQuote::Unavailable));
    assert_eq!(
        book.crypto.get("ethereum"),
        Some(&PriceQuote::Available(dec!(3000)))
    );
}

// ------------------------------------------------------------------
// End-to-end valuation scenarios
// ------------------------------------------------------------------

#[tokio::test]
async fn gold_unavailable_surfaces_warning_and_contributes_zero() {
    let registry = sample_registry();
    let crypto = FixedPriceSource::new(&[("ethereum", dec!(3000)), ("solana", dec!(150))]);
    let etf = FixedPriceSource::new(&[("NDQ.AX", dec!(18.40)), ("VGS.AX", dec!(102.11))]);

    let book = collect_quotes(&registry, &FailingSource, &crypto, &etf).await;
    let valuation = value_portfolio(&registry, &book);

    assert_eq!(valuation.gold.current_value, Decimal::ZERO);
    assert_eq!(valuation.gold.unpriced, vec!["gold".to_string()]);
    // Gold still counts toward invested, so the class shows a full loss
    assert_eq!(valuation.gold.profit(), -dec!(24000));
    // The other classes are unaffected
    assert!(valuation.crypto.current_value > Decimal::ZERO);
    assert!(valuation.etfs.current_value > Decimal::ZERO);
}

#[tokio::test]
async fn crypto_class_value_is_the_sum_over_positions() {
    let registry = sample_registry();
    let gold = FixedPriceSource::new(&[("gold", dec!(74.52))]);
    let crypto = FixedPriceSource::new(&[("ethereum", dec!(3000)), ("solana", dec!(150))]);
    let etf = FixedPriceSource::new(&[("NDQ.AX", dec!(18.40)), ("VGS.AX", dec!(102.11))]);

    let book = collect_quotes(&registry, &gold, &crypto, &etf).await;
    let valuation = value_portfolio(&registry, &book);

    // 1.26 * 3000 + 16.6 * 150
    assert_eq!(
        valuation.crypto.current_value,
        dec!(3780) + dec!(16.6) * dec!(150)
    );
    assert_eq!(
        valuation.crypto.profit(),
        valuation.crypto.current_value - dec!(2611.23) - dec!(2491.58)
    );
}

#[tokio::test]
async fn etf_values_round_trip_to_cost_basis() {
    let registry = sample_registry();
    let gold = FixedPriceSource::new(&[("gold", dec!(74.52))]);
    let crypto = FixedPriceSource::new(&[("ethereum", dec!(3000)), ("solana", dec!(150))]);
    let etf = FixedPriceSource::new(&[("NDQ.AX", dec!(18.40)), ("VGS.AX", dec!(102.11))]);

    let book = collect_quotes(&registry, &gold, &crypto, &etf).await;
    let valuation = value_portfolio(&registry, &book);

    let expected = dec!(2880) + dec!(2160);
    assert!((valuation.etfs.current_value - expected).abs() < dec!(0.01));
    assert!(valuation.etfs.profit().abs() < dec!(0.01));
}

#[tokio::test]
async fn every_source_failing_still_produces_a_full_valuation() {
    let registry = sample_registry();

    let book = collect_quotes(&registry, &FailingSource, &FailingSource, &FailingSource).await;
    let valuation = value_portfolio(&registry, &book);

    assert_eq!(valuation.total_value(), Decimal::ZERO);
    assert_eq!(valuation.total_profit(), -registry.total_invested());
    assert_eq!(valuation.crypto.unpriced.len(), 2);
    assert_eq!(valuation.etfs.unpriced.len(), 2);
}

#[tokio::test]
async fn one_failing_class_never_blocks_the_others() {
    let registry = sample_registry();
    let gold = FixedPriceSource::new(&[("gold", dec!(74.52))]);
    let etf = FixedPriceSource::new(&[("NDQ.AX", dec!(18.40)), ("VGS.AX", dec!(102.11))]);

    let book = collect_quotes(&registry, &gold, &FailingSource, &etf).await;
    let valuation = value_portfolio(&registry, &book);

    assert_eq!(valuation.crypto.current_value, Decimal::ZERO);
    assert_eq!(
        valuation.total_value(),
        valuation.gold.current_value + valuation.etfs.current_value
    );
}
