//! The exchange ledger: deposits, withdrawals, and the order lifecycle.
//!
//! Every mutating operation runs to completion as an indivisible unit: it
//! either appends exactly one [`ExchangeEvent`] to the log and returns it,
//! or fails with zero state mutation. The token ledger is an external
//! capability — its failures propagate unchanged, and at the withdraw
//! boundary custody state is fully mutated before the external transfer is
//! invoked (checks-effects-interactions).

use chrono::Utc;
use custodex_token::TokenLedger;
use custodex_types::{
    Address, Amount, ExchangeConfig, ExchangeEvent, LedgerError, Order, OrderId, Result,
};

use crate::custody::CustodyLedger;
use crate::orders::OrderBook;
use crate::settlement::settle_fill;
use crate::supply::SupplyTracker;

/// The exchange ledger.
///
/// Holds custodied per-user per-token balances (separate from the token
/// ledger's own balances) and the order book. The fee destination and fee
/// percentage are fixed at construction and never mutated.
pub struct Exchange {
    /// The exchange's own account on the token ledgers (custody account).
    address: Address,
    fee_account: Address,
    fee_percent: u64,
    custody: CustodyLedger,
    orders: OrderBook,
    supply: SupplyTracker,
    /// Append-only event log.
    events: Vec<ExchangeEvent>,
}

impl Exchange {
    /// Deploy a new exchange ledger.
    #[must_use]
    pub fn new(address: Address, config: ExchangeConfig) -> Self {
        tracing::debug!(
            exchange = %address.short(),
            fee_account = %config.fee_account.short(),
            fee_percent = config.fee_percent,
            "Exchange ledger deployed"
        );
        Self {
            address,
            fee_account: config.fee_account,
            fee_percent: config.fee_percent,
            custody: CustodyLedger::new(),
            orders: OrderBook::new(),
            supply: SupplyTracker::new(),
            events: Vec::new(),
        }
    }

    /// Move `amount` of the caller's tokens into exchange custody.
    ///
    /// The caller must have pre-approved the exchange for at least `amount`
    /// on the token ledger. Any token-ledger failure propagates unchanged
    /// with no custody change.
    ///
    /// # Errors
    /// - `InsufficientAllowance` / `InsufficientBalance` from the token
    ///   ledger's delegated transfer
    pub fn deposit_token(
        &mut self,
        token: &mut TokenLedger,
        caller: Address,
        amount: Amount,
    ) -> Result<ExchangeEvent> {
        let token_addr = token.address();

        // Pre-validate the custody-side updates so nothing can fail after
        // the token ledger has moved funds. The running deposit total never
        // shrinks, so it is the binding overflow check, not the net supply.
        let new_balance = self.custody.balance(token_addr, caller).checked_add(amount)?;
        self.supply.total_deposits(token_addr).checked_add(amount)?;

        token.transfer_from(self.address, caller, self.address, amount)?;

        self.custody.credit(token_addr, caller, amount)?;
        self.supply.record_deposit(token_addr, amount)?;

        tracing::debug!(
            token = %token_addr.short(),
            user = %caller.short(),
            amount = %amount,
            balance = %new_balance,
            "Deposit"
        );

        let event = ExchangeEvent::Deposit {
            token: token_addr,
            user: caller,
            amount,
            balance: new_balance,
        };
        self.events.push(event.clone());
        Ok(event)
    }

    /// Move `amount` of the caller's custodied tokens back to their wallet.
    ///
    /// Custody is debited BEFORE the external token transfer is invoked, so
    /// a re-entrant call through the transfer capability cannot observe or
    /// double-spend the pre-withdrawal balance.
    ///
    /// # Errors
    /// Returns `InsufficientBalance` if the custodied balance is less than
    /// `amount`; token-ledger failures propagate unchanged.
    pub fn withdraw_token(
        &mut self,
        token: &mut TokenLedger,
        caller: Address,
        amount: Amount,
    ) -> Result<ExchangeEvent> {
        let token_addr = token.address();

        let balance = self.custody.balance(token_addr, caller);
        if balance < amount {
            return Err(LedgerError::InsufficientBalance {
                needed: amount,
                available: balance,
            });
        }

        // Effects first. The withdrawal total never exceeds the deposit
        // total, so recording it cannot overflow once the deposit side is
        // bounded.
        self.custody.debit(token_addr, caller, amount)?;
        self.supply.record_withdrawal(token_addr, amount)?;
        let new_balance = self.custody.balance(token_addr, caller);

        // External interaction last.
        token.transfer(self.address, caller, amount)?;

        tracing::debug!(
            token = %token_addr.short(),
            user = %caller.short(),
            amount = %amount,
            balance = %new_balance,
            "Withdraw"
        );

        let event = ExchangeEvent::Withdraw {
            token: token_addr,
            user: caller,
            amount,
            balance: new_balance,
        };
        self.events.push(event.clone());
        Ok(event)
    }

    /// Place an order: the caller offers `amount_give` of `token_give` for
    /// `amount_get` of `token_get`.
    ///
    /// Orders must be 100% backed by already-custodied funds, but no funds
    /// move at creation time; they remain in the creator's custody until
    /// fill.
    ///
    /// # Errors
    /// Returns `InsufficientBalance` if the caller's custodied `token_give`
    /// balance is less than `amount_give`. No order is created on failure.
    pub fn make_order(
        &mut self,
        caller: Address,
        token_get: Address,
        amount_get: Amount,
        token_give: Address,
        amount_give: Amount,
    ) -> Result<ExchangeEvent> {
        let backing = self.custody.balance(token_give, caller);
        if backing < amount_give {
            return Err(LedgerError::InsufficientBalance {
                needed: amount_give,
                available: backing,
            });
        }

        let order = self
            .orders
            .create(caller, token_get, amount_get, token_give, amount_give);

        tracing::info!(
            order = %order.id,
            user = %caller.short(),
            token_get = %token_get.short(),
            amount_get = %amount_get,
            token_give = %token_give.short(),
            amount_give = %amount_give,
            "Order placed"
        );

        let event = ExchangeEvent::Order {
            id: order.id,
            user: order.user,
            token_get: order.token_get,
            amount_get: order.amount_get,
            token_give: order.token_give,
            amount_give: order.amount_give,
            timestamp: order.created_at,
        };
        self.events.push(event.clone());
        Ok(event)
    }

    /// Cancel an open order. Only the creator may cancel.
    ///
    /// # Errors
    /// - `InvalidOrder` if no order with `id` exists
    /// - `Unauthorized` if the caller is not the creator
    /// - `OrderAlreadyFilled` / `OrderCancelled` if already terminal
    pub fn cancel_order(&mut self, caller: Address, id: OrderId) -> Result<ExchangeEvent> {
        let order = self.orders.get(id).ok_or(LedgerError::InvalidOrder(id))?;
        if order.user != caller {
            return Err(LedgerError::Unauthorized(id));
        }

        let order = self.orders.mark_cancelled(id)?;

        tracing::info!(order = %id, user = %caller.short(), "Order cancelled");

        let event = ExchangeEvent::Cancel {
            id: order.id,
            user: order.user,
            token_get: order.token_get,
            amount_get: order.amount_get,
            token_give: order.token_give,
            amount_give: order.amount_give,
            timestamp: Utc::now(),
        };
        self.events.push(event.clone());
        Ok(event)
    }

    /// Fill an open order, settling both legs and the fee atomically.
    ///
    /// # Errors
    /// - `InvalidOrder` if `id` is outside [1, order_count]
    /// - `OrderAlreadyFilled` / `OrderCancelled` if already terminal
    /// - `InsufficientBalance` from settlement (filler checked first,
    ///   creator's give-side second); the fill aborts with no state change
    pub fn fill_order(&mut self, caller: Address, id: OrderId) -> Result<ExchangeEvent> {
        if id.0 < OrderId::FIRST.0 || id.0 > self.orders.count() {
            return Err(LedgerError::InvalidOrder(id));
        }
        let order = self
            .orders
            .get(id)
            .ok_or(LedgerError::InvalidOrder(id))?
            .clone();
        if order.is_filled() {
            return Err(LedgerError::OrderAlreadyFilled(id));
        }
        if order.is_cancelled() {
            return Err(LedgerError::OrderCancelled(id));
        }

        let fee = settle_fill(
            &mut self.custody,
            &order,
            caller,
            self.fee_account,
            self.fee_percent,
        )?;
        self.orders.mark_filled(id)?;

        tracing::info!(
            order = %id,
            filler = %caller.short(),
            creator = %order.user.short(),
            amount_get = %order.amount_get,
            amount_give = %order.amount_give,
            fee = %fee,
            "Order filled"
        );

        let event = ExchangeEvent::Trade {
            id: order.id,
            user: caller,
            token_get: order.token_get,
            amount_get: order.amount_get,
            token_give: order.token_give,
            amount_give: order.amount_give,
            creator: order.user,
            timestamp: Utc::now(),
        };
        self.events.push(event.clone());
        Ok(event)
    }

    // -----------------------------------------------------------------
    // Read-only queries
    // -----------------------------------------------------------------

    /// The custodied balance of (token, user).
    #[must_use]
    pub fn balance_of(&self, token: Address, user: Address) -> Amount {
        self.custody.balance(token, user)
    }

    /// Look up an order by id.
    #[must_use]
    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.orders.get(id)
    }

    /// Total number of orders ever created.
    #[must_use]
    pub fn order_count(&self) -> u64 {
        self.orders.count()
    }

    /// Whether the order is cancelled (false for unknown ids).
    #[must_use]
    pub fn order_cancelled(&self, id: OrderId) -> bool {
        self.orders.is_cancelled(id)
    }

    /// Whether the order is filled (false for unknown ids).
    #[must_use]
    pub fn order_filled(&self, id: OrderId) -> bool {
        self.orders.is_filled(id)
    }

    /// The exchange's own custody account address.
    #[must_use]
    pub fn address(&self) -> Address {
        self.address
    }

    /// The immutable fee destination account.
    #[must_use]
    pub fn fee_account(&self) -> Address {
        self.fee_account
    }

    /// The immutable fee percentage.
    #[must_use]
    pub fn fee_percent(&self) -> u64 {
        self.fee_percent
    }

    /// The ordered append-only event log.
    #[must_use]
    pub fn events(&self) -> &[ExchangeEvent] {
        &self.events
    }

    /// Verify custody conservation for a token:
    /// Σ custodied balances == deposits - withdrawals.
    ///
    /// # Errors
    /// Returns `SupplyInvariantViolation` if the invariant is broken.
    pub fn verify_supply(&self, token: Address) -> Result<()> {
        self.supply.verify(token, self.custody.token_total(token)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use custodex_types::TokenConfig;

    struct World {
        exchange: Exchange,
        token1: TokenLedger,
        token2: TokenLedger,
        deployer: Address,
        fee_account: Address,
        user1: Address,
        user2: Address,
    }

    /// Mirrors the canonical deployment: two tokens with 1,000,000 supply,
    /// a 10% fee exchange, and user1 funded with 100 DAPP.
    fn world() -> World {
        let deployer = Address::random();
        let fee_account = Address::random();
        let user1 = Address::random();
        let user2 = Address::random();

        let mut token1 = TokenLedger::new(
            Address::random(),
            TokenConfig::new("Dapp University", "DAPP", 1_000_000),
            deployer,
        );
        let token2 = TokenLedger::new(
            Address::random(),
            TokenConfig::new("Mock Dai", "mDAI", 1_000_000),
            deployer,
        );

        token1
            .transfer(deployer, user1, Amount::from_tokens(100))
            .unwrap();

        let exchange = Exchange::new(
            Address::random(),
            ExchangeConfig::new(fee_account, 10),
        );

        World {
            exchange,
            token1,
            token2,
            deployer,
            fee_account,
            user1,
            user2,
        }
    }

    fn deposit(exchange: &mut Exchange, token: &mut TokenLedger, user: Address, amount: Amount) {
        token.approve(user, exchange.address(), amount).unwrap();
        exchange.deposit_token(token, user, amount).unwrap();
    }

    #[test]
    fn tracks_fee_configuration() {
        let w = world();
        assert_eq!(w.exchange.fee_account(), w.fee_account);
        assert_eq!(w.exchange.fee_percent(), 10);
    }

    #[test]
    fn deposit_tracks_custody_and_wallet() {
        let mut w = world();
        let amount = Amount::from_tokens(10);
        deposit(&mut w.exchange, &mut w.token1, w.user1, amount);

        assert_eq!(w.token1.balance_of(w.exchange.address()), amount);
        assert_eq!(
            w.exchange.balance_of(w.token1.address(), w.user1),
            amount
        );
        w.exchange.verify_supply(w.token1.address()).unwrap();
    }

    #[test]
    fn deposit_emits_event_with_running_balance() {
        let mut w = world();
        deposit(&mut w.exchange, &mut w.token1, w.user1, Amount::from_tokens(10));

        let events = w.exchange.events();
        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0],
            ExchangeEvent::Deposit {
                token: w.token1.address(),
                user: w.user1,
                amount: Amount::from_tokens(10),
                balance: Amount::from_tokens(10),
            }
        );
    }

    #[test]
    fn deposit_without_approval_fails() {
        let mut w = world();
        let err = w
            .exchange
            .deposit_token(&mut w.token1, w.user1, Amount::from_tokens(10))
            .unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientAllowance { .. }));
        // No custody change, no event.
        assert_eq!(
            w.exchange.balance_of(w.token1.address(), w.user1),
            Amount::ZERO
        );
        assert!(w.exchange.events().is_empty());
    }

    #[test]
    fn deposit_overflowing_running_total_leaves_state_untouched() {
        let deployer = Address::random();
        let user = Address::random();
        let mut token = TokenLedger::new(
            Address::random(),
            TokenConfig::new("Max Cap", "MAX", u64::MAX),
            deployer,
        );
        let mut exchange = Exchange::new(
            Address::random(),
            ExchangeConfig::new(Address::random(), 10),
        );
        let supply = token.total_supply();
        token.transfer(deployer, user, supply).unwrap();

        // Cycle the entire supply through custody. The net custodied amount
        // returns to zero each time, but the running deposit total keeps
        // growing; 18 cycles bring it within one supply of u128::MAX.
        for _ in 0..18 {
            token.approve(user, exchange.address(), supply).unwrap();
            exchange.deposit_token(&mut token, user, supply).unwrap();
            exchange.withdraw_token(&mut token, user, supply).unwrap();
        }

        token.approve(user, exchange.address(), supply).unwrap();
        let events_before = exchange.events().len();
        let err = exchange
            .deposit_token(&mut token, user, supply)
            .unwrap_err();
        assert!(matches!(err, LedgerError::AmountOverflow));

        // The failed deposit must be invisible: wallet, custody, and the
        // event log all unchanged, and conservation still verifiable.
        assert_eq!(token.balance_of(user), supply);
        assert_eq!(token.balance_of(exchange.address()), Amount::ZERO);
        assert_eq!(exchange.balance_of(token.address(), user), Amount::ZERO);
        assert_eq!(exchange.events().len(), events_before);
        exchange.verify_supply(token.address()).unwrap();
    }

    #[test]
    fn withdraw_round_trips() {
        let mut w = world();
        let amount = Amount::from_tokens(10);
        let wallet_before = w.token1.balance_of(w.user1);

        deposit(&mut w.exchange, &mut w.token1, w.user1, amount);
        w.exchange
            .withdraw_token(&mut w.token1, w.user1, amount)
            .unwrap();

        assert_eq!(w.token1.balance_of(w.exchange.address()), Amount::ZERO);
        assert_eq!(
            w.exchange.balance_of(w.token1.address(), w.user1),
            Amount::ZERO
        );
        assert_eq!(w.token1.balance_of(w.user1), wallet_before);
        w.exchange.verify_supply(w.token1.address()).unwrap();
    }

    #[test]
    fn withdraw_emits_event() {
        let mut w = world();
        deposit(&mut w.exchange, &mut w.token1, w.user1, Amount::from_tokens(10));
        let event = w
            .exchange
            .withdraw_token(&mut w.token1, w.user1, Amount::from_tokens(10))
            .unwrap();
        assert_eq!(
            event,
            ExchangeEvent::Withdraw {
                token: w.token1.address(),
                user: w.user1,
                amount: Amount::from_tokens(10),
                balance: Amount::ZERO,
            }
        );
    }

    #[test]
    fn withdraw_without_deposit_fails() {
        let mut w = world();
        let err = w
            .exchange
            .withdraw_token(&mut w.token1, w.user1, Amount::from_tokens(10))
            .unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientBalance { .. }));
    }

    #[test]
    fn make_order_assigns_sequential_ids() {
        let mut w = world();
        deposit(&mut w.exchange, &mut w.token1, w.user1, Amount::from_tokens(10));

        for expected in 1..=3u64 {
            let event = w
                .exchange
                .make_order(
                    w.user1,
                    w.token2.address(),
                    Amount::from_tokens(1),
                    w.token1.address(),
                    Amount::from_tokens(1),
                )
                .unwrap();
            assert!(
                matches!(event, ExchangeEvent::Order { id, .. } if id == OrderId(expected))
            );
        }
        assert_eq!(w.exchange.order_count(), 3);
    }

    #[test]
    fn make_order_requires_full_backing() {
        let mut w = world();
        // Nothing deposited: order must be rejected and no id consumed.
        let err = w
            .exchange
            .make_order(
                w.user1,
                w.token2.address(),
                Amount::from_tokens(1),
                w.token1.address(),
                Amount::from_tokens(1),
            )
            .unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientBalance { .. }));
        assert_eq!(w.exchange.order_count(), 0);
    }

    #[test]
    fn make_order_moves_no_funds() {
        let mut w = world();
        deposit(&mut w.exchange, &mut w.token1, w.user1, Amount::from_tokens(10));
        w.exchange
            .make_order(
                w.user1,
                w.token2.address(),
                Amount::from_tokens(1),
                w.token1.address(),
                Amount::from_tokens(1),
            )
            .unwrap();
        assert_eq!(
            w.exchange.balance_of(w.token1.address(), w.user1),
            Amount::from_tokens(10)
        );
    }

    #[test]
    fn cancel_order_by_creator() {
        let mut w = world();
        deposit(&mut w.exchange, &mut w.token1, w.user1, Amount::from_tokens(1));
        w.exchange
            .make_order(
                w.user1,
                w.token2.address(),
                Amount::from_tokens(1),
                w.token1.address(),
                Amount::from_tokens(1),
            )
            .unwrap();

        let event = w.exchange.cancel_order(w.user1, OrderId(1)).unwrap();
        assert!(w.exchange.order_cancelled(OrderId(1)));
        assert!(matches!(
            event,
            ExchangeEvent::Cancel { id: OrderId(1), user, .. } if user == w.user1
        ));
    }

    #[test]
    fn cancel_order_by_non_creator_fails() {
        let mut w = world();
        deposit(&mut w.exchange, &mut w.token1, w.user1, Amount::from_tokens(1));
        w.exchange
            .make_order(
                w.user1,
                w.token2.address(),
                Amount::from_tokens(1),
                w.token1.address(),
                Amount::from_tokens(1),
            )
            .unwrap();

        let err = w.exchange.cancel_order(w.user2, OrderId(1)).unwrap_err();
        assert!(matches!(err, LedgerError::Unauthorized(_)));
        assert!(!w.exchange.order_cancelled(OrderId(1)));
    }

    #[test]
    fn cancel_unknown_order_fails() {
        let mut w = world();
        let err = w.exchange.cancel_order(w.user1, OrderId(99_999)).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidOrder(_)));
    }

    #[test]
    fn fill_order_settles_and_charges_fee() {
        let mut w = world();
        // user1: 1 DAPP custodied; user2: 2 mDAI custodied.
        deposit(&mut w.exchange, &mut w.token1, w.user1, Amount::from_tokens(1));
        let mdai_for_user2 = Amount::from_tokens(100);
        w.token2.transfer(w.deployer, w.user2, mdai_for_user2).unwrap();
        deposit(&mut w.exchange, &mut w.token2, w.user2, Amount::from_tokens(2));

        w.exchange
            .make_order(
                w.user1,
                w.token2.address(),
                Amount::from_tokens(1),
                w.token1.address(),
                Amount::from_tokens(1),
            )
            .unwrap();
        let event = w.exchange.fill_order(w.user2, OrderId(1)).unwrap();

        let dapp = w.token1.address();
        let mdai = w.token2.address();
        let tenth = Amount::from_base_units(custodex_types::constants::SCALE / 10);

        // token_give side (DAPP).
        assert_eq!(w.exchange.balance_of(dapp, w.user1), Amount::ZERO);
        assert_eq!(w.exchange.balance_of(dapp, w.user2), Amount::from_tokens(1));
        assert_eq!(w.exchange.balance_of(dapp, w.fee_account), Amount::ZERO);

        // token_get side (mDAI): user2 gave 1 to user1 and 0.1 to the fee account.
        assert_eq!(w.exchange.balance_of(mdai, w.user1), Amount::from_tokens(1));
        assert_eq!(
            w.exchange.balance_of(mdai, w.user2),
            Amount::from_base_units(9 * custodex_types::constants::SCALE / 10)
        );
        assert_eq!(w.exchange.balance_of(mdai, w.fee_account), tenth);

        assert!(w.exchange.order_filled(OrderId(1)));
        assert!(matches!(
            event,
            ExchangeEvent::Trade { id: OrderId(1), user, creator, .. }
                if user == w.user2 && creator == w.user1
        ));

        w.exchange.verify_supply(dapp).unwrap();
        w.exchange.verify_supply(mdai).unwrap();
    }

    #[test]
    fn fill_order_twice_fails() {
        let mut w = world();
        deposit(&mut w.exchange, &mut w.token1, w.user1, Amount::from_tokens(1));
        w.token2.transfer(w.deployer, w.user2, Amount::from_tokens(100)).unwrap();
        deposit(&mut w.exchange, &mut w.token2, w.user2, Amount::from_tokens(4));

        w.exchange
            .make_order(
                w.user1,
                w.token2.address(),
                Amount::from_tokens(1),
                w.token1.address(),
                Amount::from_tokens(1),
            )
            .unwrap();
        w.exchange.fill_order(w.user2, OrderId(1)).unwrap();

        let err = w.exchange.fill_order(w.user2, OrderId(1)).unwrap_err();
        assert!(matches!(err, LedgerError::OrderAlreadyFilled(_)));
    }

    #[test]
    fn fill_cancelled_order_fails() {
        let mut w = world();
        deposit(&mut w.exchange, &mut w.token1, w.user1, Amount::from_tokens(1));
        w.token2.transfer(w.deployer, w.user2, Amount::from_tokens(100)).unwrap();
        deposit(&mut w.exchange, &mut w.token2, w.user2, Amount::from_tokens(2));

        w.exchange
            .make_order(
                w.user1,
                w.token2.address(),
                Amount::from_tokens(1),
                w.token1.address(),
                Amount::from_tokens(1),
            )
            .unwrap();
        w.exchange.cancel_order(w.user1, OrderId(1)).unwrap();

        let err = w.exchange.fill_order(w.user2, OrderId(1)).unwrap_err();
        assert!(matches!(err, LedgerError::OrderCancelled(_)));
    }

    #[test]
    fn fill_order_beyond_count_fails() {
        let mut w = world();
        let err = w.exchange.fill_order(w.user2, OrderId(99_999)).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidOrder(_)));
        let err = w.exchange.fill_order(w.user2, OrderId(0)).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidOrder(_)));
    }

    #[test]
    fn fill_after_creator_withdraws_backing_fails() {
        let mut w = world();
        deposit(&mut w.exchange, &mut w.token1, w.user1, Amount::from_tokens(1));
        w.token2.transfer(w.deployer, w.user2, Amount::from_tokens(100)).unwrap();
        deposit(&mut w.exchange, &mut w.token2, w.user2, Amount::from_tokens(2));

        w.exchange
            .make_order(
                w.user1,
                w.token2.address(),
                Amount::from_tokens(1),
                w.token1.address(),
                Amount::from_tokens(1),
            )
            .unwrap();
        // Creator pulls the backing out after placing the order.
        w.exchange
            .withdraw_token(&mut w.token1, w.user1, Amount::from_tokens(1))
            .unwrap();

        let err = w.exchange.fill_order(w.user2, OrderId(1)).unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientBalance { .. }));
        // The order stays open and the filler's custody is untouched.
        assert!(!w.exchange.order_filled(OrderId(1)));
        assert_eq!(
            w.exchange.balance_of(w.token2.address(), w.user2),
            Amount::from_tokens(2)
        );
    }
}
