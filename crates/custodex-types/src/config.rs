//! Construction-time configuration for the two ledgers.
//!
//! Both configurations are immutable after the ledger is created.

use serde::{Deserialize, Serialize};

use crate::Address;

/// Parameters for deploying a token ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Human-readable token name (e.g., "Dapp University").
    pub name: String,
    /// Ticker symbol (e.g., "DAPP").
    pub symbol: String,
    /// Initial supply in whole tokens; scaled by 10^18 and minted entirely
    /// to the deploying account.
    pub initial_supply: u64,
}

impl TokenConfig {
    #[must_use]
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, initial_supply: u64) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            initial_supply,
        }
    }
}

/// Parameters for deploying an exchange ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeConfig {
    /// The account credited with the fee portion of every filled order.
    pub fee_account: Address,
    /// Integer fee percentage applied to the amount received by the filler.
    pub fee_percent: u64,
}

impl ExchangeConfig {
    #[must_use]
    pub fn new(fee_account: Address, fee_percent: u64) -> Self {
        Self {
            fee_account,
            fee_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_config_serde_roundtrip() {
        let cfg = TokenConfig::new("Dapp University", "DAPP", 1_000_000);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: TokenConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }

    #[test]
    fn exchange_config_serde_roundtrip() {
        let cfg = ExchangeConfig::new(Address([7u8; 20]), 10);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: ExchangeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
        assert_eq!(back.fee_percent, 10);
    }
}
