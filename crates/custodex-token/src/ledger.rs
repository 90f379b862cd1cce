//! The fungible token ledger.
//!
//! Invariant: the sum of all balances equals the total supply at all times.
//! Transfers only move value between accounts; nothing mints or burns after
//! construction.

use std::collections::HashMap;

use custodex_types::{
    Address, Amount, LedgerError, Result, TokenConfig, TokenEvent, constants,
};

/// A fungible-asset ledger with owner balances and delegated allowances.
///
/// Each `TokenLedger` carries its own [`Address`] identity — the exchange
/// keys its custody mapping by that address, mirroring one deployed token
/// contract per ledger instance.
pub struct TokenLedger {
    address: Address,
    name: String,
    symbol: String,
    decimals: u32,
    total_supply: Amount,
    /// Per-owner balances.
    balances: HashMap<Address, Amount>,
    /// Per-(owner, spender) remaining allowances.
    allowances: HashMap<(Address, Address), Amount>,
    /// Append-only event log.
    events: Vec<TokenEvent>,
}

impl TokenLedger {
    /// Deploy a new token ledger, minting the full supply to `deployer`.
    #[must_use]
    pub fn new(address: Address, config: TokenConfig, deployer: Address) -> Self {
        let total_supply = Amount::from_tokens(config.initial_supply);
        let mut balances = HashMap::new();
        balances.insert(deployer, total_supply);

        tracing::debug!(
            token = %address.short(),
            symbol = %config.symbol,
            supply = %total_supply,
            deployer = %deployer.short(),
            "Token ledger deployed"
        );

        Self {
            address,
            name: config.name,
            symbol: config.symbol,
            decimals: constants::DECIMALS,
            total_supply,
            balances,
            allowances: HashMap::new(),
            events: Vec::new(),
        }
    }

    /// Transfer the sender's own funds to `to`.
    ///
    /// # Errors
    /// - `InvalidRecipient` if `to` is the zero address
    /// - `InsufficientBalance` if the sender's balance is less than `amount`
    pub fn transfer(&mut self, sender: Address, to: Address, amount: Amount) -> Result<TokenEvent> {
        self.move_balance(sender, to, amount)?;

        tracing::debug!(
            token = %self.address.short(),
            from = %sender.short(),
            to = %to.short(),
            value = %amount,
            "Transfer"
        );

        let event = TokenEvent::Transfer {
            from: sender,
            to,
            value: amount,
        };
        self.events.push(event.clone());
        Ok(event)
    }

    /// Set `spender`'s allowance over the owner's funds to exactly `amount`.
    ///
    /// Overwrite semantics: a second approval replaces the first, it does
    /// not add to it.
    ///
    /// # Errors
    /// Returns `InvalidRecipient` if `spender` is the zero address.
    pub fn approve(
        &mut self,
        owner: Address,
        spender: Address,
        amount: Amount,
    ) -> Result<TokenEvent> {
        if spender.is_zero() {
            return Err(LedgerError::InvalidRecipient);
        }

        self.allowances.insert((owner, spender), amount);

        tracing::debug!(
            token = %self.address.short(),
            owner = %owner.short(),
            spender = %spender.short(),
            value = %amount,
            "Approval"
        );

        let event = TokenEvent::Approval {
            owner,
            spender,
            value: amount,
        };
        self.events.push(event.clone());
        Ok(event)
    }

    /// Transfer an owner's funds on behalf of an authorized spender.
    ///
    /// On success the (owner, spender) allowance is decremented by `amount`.
    ///
    /// # Errors
    /// - `InvalidRecipient` if `to` is the zero address
    /// - `InsufficientBalance` if `from`'s balance is less than `amount`
    /// - `InsufficientAllowance` if the spender's remaining allowance is
    ///   less than `amount`
    pub fn transfer_from(
        &mut self,
        spender: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<TokenEvent> {
        if to.is_zero() {
            return Err(LedgerError::InvalidRecipient);
        }

        let balance = self.balance_of(from);
        if balance < amount {
            return Err(LedgerError::InsufficientBalance {
                needed: amount,
                available: balance,
            });
        }

        let allowance = self.allowance(from, spender);
        if allowance < amount {
            return Err(LedgerError::InsufficientAllowance {
                needed: amount,
                available: allowance,
            });
        }

        // Preconditions all hold; the allowance update and balance move
        // below cannot fail.
        let remaining = allowance.checked_sub(amount)?;
        self.allowances.insert((from, spender), remaining);
        self.move_balance(from, to, amount)?;

        tracing::debug!(
            token = %self.address.short(),
            spender = %spender.short(),
            from = %from.short(),
            to = %to.short(),
            value = %amount,
            remaining_allowance = %remaining,
            "Delegated transfer"
        );

        let event = TokenEvent::Transfer {
            from,
            to,
            value: amount,
        };
        self.events.push(event.clone());
        Ok(event)
    }

    /// Debit `from` and credit `to` atomically: both writes happen only
    /// after every precondition has been checked.
    fn move_balance(&mut self, from: Address, to: Address, amount: Amount) -> Result<()> {
        if to.is_zero() {
            return Err(LedgerError::InvalidRecipient);
        }

        let from_balance = self.balance_of(from);
        if from_balance < amount {
            return Err(LedgerError::InsufficientBalance {
                needed: amount,
                available: from_balance,
            });
        }
        // Overflow pre-check on the receiving side. The credit applied after
        // the debit can only be smaller or equal, so it cannot fail.
        self.balance_of(to).checked_add(amount)?;

        let new_from = from_balance.checked_sub(amount)?;
        self.balances.insert(from, new_from);
        // Re-read after the debit so a self-transfer nets to zero.
        let new_to = self.balance_of(to).checked_add(amount)?;
        self.balances.insert(to, new_to);
        Ok(())
    }

    // -----------------------------------------------------------------
    // Read-only queries
    // -----------------------------------------------------------------

    /// The balance of `owner` (zero for unknown accounts).
    #[must_use]
    pub fn balance_of(&self, owner: Address) -> Amount {
        self.balances.get(&owner).copied().unwrap_or_default()
    }

    /// The remaining allowance of `spender` over `owner`'s funds.
    #[must_use]
    pub fn allowance(&self, owner: Address, spender: Address) -> Amount {
        self.allowances
            .get(&(owner, spender))
            .copied()
            .unwrap_or_default()
    }

    /// The ledger's own identity address.
    #[must_use]
    pub fn address(&self) -> Address {
        self.address
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    #[must_use]
    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    #[must_use]
    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// The ordered append-only event log.
    #[must_use]
    pub fn events(&self) -> &[TokenEvent] {
        &self.events
    }

    /// Verify the conservation invariant: Σ balances == total supply.
    ///
    /// # Errors
    /// Returns `SupplyInvariantViolation` if the sums diverge.
    pub fn verify_supply(&self) -> Result<()> {
        let mut actual = Amount::ZERO;
        for balance in self.balances.values() {
            actual = actual.checked_add(*balance)?;
        }
        if actual != self.total_supply {
            return Err(LedgerError::SupplyInvariantViolation {
                reason: format!(
                    "token {}: sum of balances {actual} != total supply {}",
                    self.address, self.total_supply
                ),
            });
        }
        Ok(())
    }
}
