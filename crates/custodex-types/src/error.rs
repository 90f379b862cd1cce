//! Error types for the Custodex exchange core.
//!
//! All errors use the `DX_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Token / balance errors
//! - 2xx: Order errors
//! - 3xx: Invariant errors
//!
//! Every failure is synchronous and caller-visible, and aborts the entire
//! operation with zero state mutation.

use thiserror::Error;

use crate::{Amount, OrderId};

/// Central error enum for all Custodex operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    // =================================================================
    // Token / Balance Errors (1xx)
    // =================================================================
    /// Not enough balance (wallet or custodied) to perform the operation.
    #[error("DX_ERR_100: Insufficient balance: need {needed}, have {available}")]
    InsufficientBalance { needed: Amount, available: Amount },

    /// The spender's remaining allowance does not cover the delegated transfer.
    #[error("DX_ERR_101: Insufficient allowance: need {needed}, have {available}")]
    InsufficientAllowance { needed: Amount, available: Amount },

    /// The recipient or spender is the null address.
    #[error("DX_ERR_102: Invalid recipient: the zero address cannot receive funds")]
    InvalidRecipient,

    /// An amount computation would wrap outside u128 range.
    #[error("DX_ERR_103: Amount overflow")]
    AmountOverflow,

    // =================================================================
    // Order Errors (2xx)
    // =================================================================
    /// No order exists with this id.
    #[error("DX_ERR_200: Invalid order: {0} does not exist")]
    InvalidOrder(OrderId),

    /// The caller is not the order's creator.
    #[error("DX_ERR_201: Unauthorized: caller is not the creator of {0}")]
    Unauthorized(OrderId),

    /// The order is already in the Filled terminal state.
    #[error("DX_ERR_202: Order already filled: {0}")]
    OrderAlreadyFilled(OrderId),

    /// The order is already in the Cancelled terminal state.
    #[error("DX_ERR_203: Order cancelled: {0}")]
    OrderCancelled(OrderId),

    // =================================================================
    // Invariant Errors (3xx)
    // =================================================================
    /// Supply conservation invariant violated — critical safety alert.
    #[error("DX_ERR_300: Supply invariant violation: {reason}")]
    SupplyInvariantViolation { reason: String },
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, LedgerError>;
