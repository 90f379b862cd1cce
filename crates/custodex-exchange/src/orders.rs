//! The order book: a monotonically growing mapping of orders with
//! lifecycle tracking.
//!
//! Orders are never deleted. Ids are 1-based and sequential; cancellation
//! and fill do not consume or skip ids. `Cancelled` and `Filled` are
//! terminal: the state machine refuses any transition out of them.

use std::collections::BTreeMap;

use chrono::Utc;
use custodex_types::{Address, Amount, LedgerError, Order, OrderId, OrderStatus, Result};

/// Order storage and lifecycle state machine.
#[derive(Default)]
pub struct OrderBook {
    orders: BTreeMap<OrderId, Order>,
    count: u64,
}

impl OrderBook {
    /// Create a new empty order book.
    #[must_use]
    pub fn new() -> Self {
        Self {
            orders: BTreeMap::new(),
            count: 0,
        }
    }

    /// Record a new order in the Open state and allocate the next id.
    ///
    /// The first order ever created gets id 1; each subsequent order
    /// increments the id by exactly 1.
    pub fn create(
        &mut self,
        user: Address,
        token_get: Address,
        amount_get: Amount,
        token_give: Address,
        amount_give: Amount,
    ) -> &Order {
        self.count += 1;
        let id = OrderId(self.count);
        let order = Order {
            id,
            user,
            token_get,
            amount_get,
            token_give,
            amount_give,
            status: OrderStatus::Open,
            created_at: Utc::now(),
        };
        self.orders.insert(id, order);
        // Just inserted under this key.
        &self.orders[&id]
    }

    /// Look up an order by id.
    #[must_use]
    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.orders.get(&id)
    }

    /// Total number of orders ever created.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Whether the order with this id is cancelled (false for unknown ids,
    /// mapping semantics).
    #[must_use]
    pub fn is_cancelled(&self, id: OrderId) -> bool {
        self.orders.get(&id).is_some_and(Order::is_cancelled)
    }

    /// Whether the order with this id is filled (false for unknown ids).
    #[must_use]
    pub fn is_filled(&self, id: OrderId) -> bool {
        self.orders.get(&id).is_some_and(Order::is_filled)
    }

    /// Transition an open order to Cancelled.
    ///
    /// # Errors
    /// - `InvalidOrder` if no order with `id` exists
    /// - `OrderAlreadyFilled` / `OrderCancelled` if already terminal
    pub fn mark_cancelled(&mut self, id: OrderId) -> Result<&Order> {
        let order = self
            .orders
            .get_mut(&id)
            .ok_or(LedgerError::InvalidOrder(id))?;
        Self::ensure_open(order)?;
        order.status = OrderStatus::Cancelled;
        Ok(order)
    }

    /// Transition an open order to Filled.
    ///
    /// # Errors
    /// - `InvalidOrder` if no order with `id` exists
    /// - `OrderAlreadyFilled` / `OrderCancelled` if already terminal
    pub fn mark_filled(&mut self, id: OrderId) -> Result<&Order> {
        let order = self
            .orders
            .get_mut(&id)
            .ok_or(LedgerError::InvalidOrder(id))?;
        Self::ensure_open(order)?;
        order.status = OrderStatus::Filled;
        Ok(order)
    }

    fn ensure_open(order: &Order) -> Result<()> {
        match order.status {
            OrderStatus::Open => Ok(()),
            OrderStatus::Filled => Err(LedgerError::OrderAlreadyFilled(order.id)),
            OrderStatus::Cancelled => Err(LedgerError::OrderCancelled(order.id)),
        }
    }
}
