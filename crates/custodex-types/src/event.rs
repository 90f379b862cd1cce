//! Event model — the durable externally observable log.
//!
//! Every mutating ledger operation appends exactly one event to its ledger's
//! append-only log and returns it to the caller. Off-chain indexers
//! reconstruct order-book and balance state from these events alone, so the
//! field sets are part of the external interface and must not change shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Address, Amount, OrderId};

/// Events emitted by the token ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenEvent {
    /// Funds moved between two accounts (direct or delegated).
    Transfer {
        from: Address,
        to: Address,
        value: Amount,
    },
    /// An owner set a spender's allowance (overwrite, not additive).
    Approval {
        owner: Address,
        spender: Address,
        value: Amount,
    },
}

/// Events emitted by the exchange ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExchangeEvent {
    /// A user moved tokens into exchange custody.
    Deposit {
        token: Address,
        user: Address,
        amount: Amount,
        /// The user's custodied balance after the deposit.
        balance: Amount,
    },
    /// A user moved tokens out of exchange custody.
    Withdraw {
        token: Address,
        user: Address,
        amount: Amount,
        /// The user's custodied balance after the withdrawal.
        balance: Amount,
    },
    /// A new order entered the book in the Open state.
    Order {
        id: OrderId,
        user: Address,
        token_get: Address,
        amount_get: Amount,
        token_give: Address,
        amount_give: Amount,
        timestamp: DateTime<Utc>,
    },
    /// The creator cancelled an open order.
    Cancel {
        id: OrderId,
        user: Address,
        token_get: Address,
        amount_get: Amount,
        token_give: Address,
        amount_give: Amount,
        /// When the cancellation happened (not the order's creation time).
        timestamp: DateTime<Utc>,
    },
    /// An open order was filled and settled.
    Trade {
        id: OrderId,
        /// The filler's account.
        user: Address,
        token_get: Address,
        amount_get: Amount,
        token_give: Address,
        amount_give: Amount,
        /// The original order creator.
        creator: Address,
        timestamp: DateTime<Utc>,
    },
}
