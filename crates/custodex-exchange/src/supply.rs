//! Supply conservation invariant checker.
//!
//! Invariant enforced over the custody mapping:
//! ```text
//! ∀ token: Σ custodied balances == Σ(deposits) - Σ(withdrawals)
//! ```
//!
//! Settlement only moves custody between users (creator, filler, fee
//! account), so it must never change a token's total. If this invariant
//! ever breaks, accounting has gone catastrophically wrong.

use std::collections::HashMap;

use custodex_types::{Address, Amount, LedgerError, Result};

/// Tracks per-token deposit and withdrawal totals and validates
/// conservation against the custody mapping.
#[derive(Default)]
pub struct SupplyTracker {
    /// Total deposits per token since genesis.
    deposits: HashMap<Address, Amount>,
    /// Total withdrawals per token since genesis.
    withdrawals: HashMap<Address, Amount>,
}

impl SupplyTracker {
    /// Create a new supply tracker.
    #[must_use]
    pub fn new() -> Self {
        Self {
            deposits: HashMap::new(),
            withdrawals: HashMap::new(),
        }
    }

    /// Record a deposit.
    pub fn record_deposit(&mut self, token: Address, amount: Amount) -> Result<()> {
        let entry = self.deposits.entry(token).or_default();
        *entry = entry.checked_add(amount)?;
        Ok(())
    }

    /// Record a withdrawal.
    pub fn record_withdrawal(&mut self, token: Address, amount: Amount) -> Result<()> {
        let entry = self.withdrawals.entry(token).or_default();
        *entry = entry.checked_add(amount)?;
        Ok(())
    }

    /// Expected total custody for a token: deposits - withdrawals.
    ///
    /// # Errors
    /// Returns `SupplyInvariantViolation` if withdrawals exceed deposits.
    /// No well-formed operation sequence produces that state: each
    /// withdrawal is debited from a custodied balance that deposits funded.
    pub fn expected_supply(&self, token: Address) -> Result<Amount> {
        let deposited = self.total_deposits(token);
        let withdrawn = self.total_withdrawals(token);
        if withdrawn > deposited {
            return Err(LedgerError::SupplyInvariantViolation {
                reason: format!(
                    "token {token}: withdrawals {withdrawn} exceed deposits {deposited}"
                ),
            });
        }
        deposited.checked_sub(withdrawn)
    }

    /// Verify that the actual custody total matches deposits - withdrawals.
    ///
    /// # Errors
    /// Returns `SupplyInvariantViolation` if actual ≠ expected.
    pub fn verify(&self, token: Address, actual: Amount) -> Result<()> {
        let expected = self.expected_supply(token)?;
        if actual != expected {
            return Err(LedgerError::SupplyInvariantViolation {
                reason: format!(
                    "token {token}: custody total {actual} != expected {expected} \
                     (deposits={}, withdrawals={})",
                    self.total_deposits(token),
                    self.total_withdrawals(token),
                ),
            });
        }
        Ok(())
    }

    /// Total deposits for a token.
    #[must_use]
    pub fn total_deposits(&self, token: Address) -> Amount {
        self.deposits.get(&token).copied().unwrap_or_default()
    }

    /// Total withdrawals for a token.
    #[must_use]
    pub fn total_withdrawals(&self, token: Address) -> Amount {
        self.withdrawals.get(&token).copied().unwrap_or_default()
    }
}
