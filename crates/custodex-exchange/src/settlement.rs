//! Fill settlement: the fee-adjusted atomic balance transfer.
//!
//! The exact sequence, reproduced from the exchange's settlement contract:
//! 1. `fee = amount_get * fee_percent / 100` (truncating), charged to the
//!    filler, denominated in `token_get`
//! 2. debit filler's `token_get` custody by `amount_get + fee`
//! 3. credit creator's `token_get` custody by `amount_get`
//! 4. credit fee account's `token_get` custody by `fee`
//! 5. debit creator's `token_give` custody by `amount_give`
//! 6. credit filler's `token_give` custody by `amount_give`
//!
//! All balance mutations apply as one indivisible batch: any precondition
//! failure aborts the fill with zero custody change. The filler's balance is
//! checked first; the creator's `token_give` side is validated second (the
//! order was fully backed at creation, but the creator may have withdrawn
//! custody since).

use custodex_types::{Address, Amount, LedgerError, Order, Result};

use crate::custody::CustodyLedger;

/// Settle a fill against the custody ledger. Returns the fee charged.
///
/// # Errors
/// - `InsufficientBalance` if the filler cannot cover `amount_get + fee`,
///   or the creator no longer holds `amount_give`
/// - `AmountOverflow` if the fee computation wraps
pub fn settle_fill(
    custody: &mut CustodyLedger,
    order: &Order,
    filler: Address,
    fee_account: Address,
    fee_percent: u64,
) -> Result<Amount> {
    let fee = order.amount_get.fee(fee_percent)?;
    let filler_cost = order.amount_get.checked_add(fee)?;

    // Filler's side first: this is the settlement-time precondition.
    let filler_balance = custody.balance(order.token_get, filler);
    if filler_balance < filler_cost {
        return Err(LedgerError::InsufficientBalance {
            needed: filler_cost,
            available: filler_balance,
        });
    }

    // Creator's side second: backed at creation time, re-validated here so
    // a post-creation withdrawal surfaces as InsufficientBalance instead of
    // corrupting custody mid-settlement.
    let creator_balance = custody.balance(order.token_give, order.user);
    if creator_balance < order.amount_give {
        return Err(LedgerError::InsufficientBalance {
            needed: order.amount_give,
            available: creator_balance,
        });
    }

    custody.apply_batch(
        &[
            (order.token_get, filler, filler_cost),
            (order.token_give, order.user, order.amount_give),
        ],
        &[
            (order.token_get, order.user, order.amount_get),
            (order.token_get, fee_account, fee),
            (order.token_give, filler, order.amount_give),
        ],
    )?;

    Ok(fee)
}
