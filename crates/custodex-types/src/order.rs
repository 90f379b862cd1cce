//! Order model for the exchange ledger.
//!
//! An order is a standing offer by its creator to give up `amount_give` of
//! `token_give` in exchange for `amount_get` of `token_get`. Orders are
//! backed 100% by custodied funds at creation time; no funds move until the
//! order is filled.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Address, Amount, OrderId};

/// Lifecycle status of an order.
///
/// `Cancelled` and `Filled` are mutually exclusive terminal states; an order
/// never transitions out of a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Open,
    Cancelled,
    Filled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "OPEN"),
            Self::Cancelled => write!(f, "CANCELLED"),
            Self::Filled => write!(f, "FILLED"),
        }
    }
}

/// An order record. Never deleted; queryable by id for the lifetime of the
/// ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// The creator's account.
    pub user: Address,
    /// The token the creator wants to receive.
    pub token_get: Address,
    pub amount_get: Amount,
    /// The token the creator gives up.
    pub token_give: Address,
    pub amount_give: Amount,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.status == OrderStatus::Open
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.status == OrderStatus::Cancelled
    }

    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.status == OrderStatus::Filled
    }
}
