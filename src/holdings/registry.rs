use std::collections::HashSet;

use rust_decimal::{dec, Decimal};
use thiserror::Error;

use super::positions::{CryptoPosition, EtfPosition, GoldPosition};

#[derive(Debug, Error)]
pub enum HoldingsError {
    #[error("negative cost basis for {identifier}: {amount}")]
    NegativeCostBasis { identifier: String, amount: Decimal },
    #[error("negative quantity for {identifier}: {amount}")]
    NegativeQuantity { identifier: String, amount: Decimal },
    #[error("blank identifier in holdings entry")]
    BlankIdentifier,
    #[error("duplicate holdings entry: {identifier}")]
    DuplicateIdentifier { identifier: String },
}

/// Immutable description of the investor's assets. Built once at startup,
/// validated at construction, and passed explicitly into valuation.
#[derive(Debug, Clone)]
pub struct HoldingsRegistry {
    gold: GoldPosition,
    crypto: Vec<CryptoPosition>,
    etfs: Vec<EtfPosition>,
}

impl HoldingsRegistry {
    /// Rejects negative amounts, blank identifiers, and duplicate entries.
    pub fn new(
        gold: GoldPosition,
        crypto: Vec<CryptoPosition>,
        etfs: Vec<EtfPosition>,
    ) -> Result<Self, HoldingsError> {
        check_non_negative("gold", gold.cost_basis, gold.quantity_grams)?;

        let mut seen = HashSet::new();
        for position in &crypto {
            if position.price_source_id.trim().is_empty() {
                return Err(HoldingsError::BlankIdentifier);
            }
            if !seen.insert(position.price_source_id.clone()) {
                return Err(HoldingsError::DuplicateIdentifier {
                    identifier: position.price_source_id.clone(),
                });
            }
            check_non_negative(&position.price_source_id, position.cost_basis, position.quantity)?;
        }

        let mut seen = HashSet::new();
        for position in &etfs {
            if position.ticker_symbol.trim().is_empty() {
                return Err(HoldingsError::BlankIdentifier);
            }
            if !seen.insert(position.ticker_symbol.clone()) {
                return Err(HoldingsError::DuplicateIdentifier {
                    identifier: position.ticker_symbol.clone(),
                });
            }
            if position.cost_basis < Decimal::ZERO {
                return Err(HoldingsError::NegativeCostBasis {
                    identifier: position.ticker_symbol.clone(),
                    amount: position.cost_basis,
                });
            }
        }

        Ok(Self { gold, crypto, etfs })
    }

    /// The compiled-in holdings set. Crypto quantities are precomputed from
    /// purchase lots; ETF entries carry only a ticker and cost basis.
    pub fn personal_holdings() -> Result<Self, HoldingsError> {
        Self::new(
            GoldPosition {
                quantity_grams: dec!(150),
                cost_basis: dec!(24000),
            },
            vec![
                CryptoPosition {
                    price_source_id: "ethereum".to_string(),
                    cost_basis: dec!(2611.23),
                    quantity: dec!(1460) / dec!(2661) + dec!(1151.23) / dec!(1602),
                },
                CryptoPosition {
                    price_source_id: "solana".to_string(),
                    cost_basis: dec!(2491.58),
                    quantity: dec!(1500) / dec!(168.4) + dec!(991.58) / dec!(129),
                },
                CryptoPosition {
                    price_source_id: "binancecoin".to_string(),
                    cost_basis: dec!(1001.37),
                    quantity: dec!(1001.37) / dec!(588),
                },
                CryptoPosition {
                    price_source_id: "cardano".to_string(),
                    cost_basis: dec!(591),
                    quantity: dec!(591) / dec!(0.6516),
                },
            ],
            vec![
                EtfPosition {
                    ticker_symbol: "NDQ.AX".to_string(),
                    cost_basis: dec!(2880),
                },
                EtfPosition {
                    ticker_symbol: "A200.AX".to_string(),
                    cost_basis: dec!(2160),
                },
                EtfPosition {
                    ticker_symbol: "VGS.AX".to_string(),
                    cost_basis: dec!(2160),
                },
            ],
        )
    }

    pub fn gold(&self) -> &GoldPosition {
        &self.gold
    }

    pub fn crypto_positions(&self) -> &[CryptoPosition] {
        &self.crypto
    }

    pub fn etf_positions(&self) -> &[EtfPosition] {
        &self.etfs
    }

    /// Sum of every cost basis across all three asset classes.
    pub fn total_invested(&self) -> Decimal {
        self.gold.cost_basis
            + self.crypto.iter().map(|p| p.cost_basis).sum::<Decimal>()
            + self.etfs.iter().map(|p| p.cost_basis).sum::<Decimal>()
    }
}

fn check_non_negative(
    identifier: &str,
    cost_basis: Decimal,
    quantity: Decimal,
) -> Result<(), HoldingsError> {
    if cost_basis < Decimal::ZERO {
        return Err(HoldingsError::NegativeCostBasis {
            identifier: identifier.to_string(),
            amount: cost_basis,
        });
    }
    if quantity < Decimal::ZERO {
        return Err(HoldingsError::NegativeQuantity {
            identifier: identifier.to_string(),
            amount: quantity,
        });
    }
    Ok(())
}
