//! Custody accounting for the exchange ledger.
//!
//! Tracks per-(token, user) balances deposited into the exchange. All
//! mutations are atomic: either the full operation succeeds or the custody
//! mapping is unchanged. Unlike the token ledger, custody balances carry no
//! allowance concept — only the exchange's own operations mutate them.

use std::collections::HashMap;

use custodex_types::{Address, Amount, LedgerError, Result};

/// Per-(token, user) custodied balances.
///
/// This mapping is exclusively owned by the exchange ledger: increased only
/// by deposits and fill-time credits, decreased only by withdrawals and
/// fill-time debits.
#[derive(Default)]
pub struct CustodyLedger {
    balances: HashMap<(Address, Address), Amount>,
}

impl CustodyLedger {
    /// Create a new empty custody ledger.
    #[must_use]
    pub fn new() -> Self {
        Self {
            balances: HashMap::new(),
        }
    }

    /// The custodied balance of (token, user). Zero for unknown pairs.
    #[must_use]
    pub fn balance(&self, token: Address, user: Address) -> Amount {
        self.balances
            .get(&(token, user))
            .copied()
            .unwrap_or_default()
    }

    /// Credit a user's custodied balance.
    ///
    /// # Errors
    /// Returns `AmountOverflow` if the balance would wrap.
    pub fn credit(&mut self, token: Address, user: Address, amount: Amount) -> Result<()> {
        let new = self.balance(token, user).checked_add(amount)?;
        self.balances.insert((token, user), new);
        Ok(())
    }

    /// Debit a user's custodied balance.
    ///
    /// # Errors
    /// Returns `InsufficientBalance` if the balance is less than `amount`.
    pub fn debit(&mut self, token: Address, user: Address, amount: Amount) -> Result<()> {
        let current = self.balance(token, user);
        if current < amount {
            return Err(LedgerError::InsufficientBalance {
                needed: amount,
                available: current,
            });
        }
        let new = current.checked_sub(amount)?;
        self.balances.insert((token, user), new);
        Ok(())
    }

    /// Apply a set of debits and credits as one indivisible mutation.
    ///
    /// Deltas are netted per (token, user) key first, so aliased entries
    /// (the same account on both sides of a fill) settle exactly once. Every
    /// resulting balance is computed and validated before anything is
    /// written: either all entries change or none do.
    ///
    /// # Errors
    /// - `InsufficientBalance` if any netted debit exceeds the entry's
    ///   credited balance
    /// - `AmountOverflow` if any intermediate sum wraps
    pub fn apply_batch(
        &mut self,
        debits: &[(Address, Address, Amount)],
        credits: &[(Address, Address, Amount)],
    ) -> Result<()> {
        let mut net: HashMap<(Address, Address), (Amount, Amount)> = HashMap::new();
        for (token, user, amount) in debits {
            let entry = net.entry((*token, *user)).or_default();
            entry.0 = entry.0.checked_add(*amount)?;
        }
        for (token, user, amount) in credits {
            let entry = net.entry((*token, *user)).or_default();
            entry.1 = entry.1.checked_add(*amount)?;
        }

        let mut staged = Vec::with_capacity(net.len());
        for ((token, user), (debit, credit)) in &net {
            let credited = self.balance(*token, *user).checked_add(*credit)?;
            if credited < *debit {
                return Err(LedgerError::InsufficientBalance {
                    needed: *debit,
                    available: credited,
                });
            }
            staged.push(((*token, *user), credited.checked_sub(*debit)?));
        }
        for (key, value) in staged {
            self.balances.insert(key, value);
        }
        Ok(())
    }

    /// Total custodied amount of a token across all users.
    ///
    /// # Errors
    /// Returns `AmountOverflow` if the sum wraps.
    pub fn token_total(&self, token: Address) -> Result<Amount> {
        let mut total = Amount::ZERO;
        for ((t, _), amount) in &self.balances {
            if *t == token {
                total = total.checked_add(*amount)?;
            }
        }
        Ok(total)
    }
}
