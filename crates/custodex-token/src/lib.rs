//! # custodex-token
//!
//! The **Token Ledger**: a standard fungible-asset ledger with owner
//! balances and delegated spending allowances.
//!
//! ## Semantics
//!
//! - The full supply is minted to the deploying account at creation;
//!   no further minting or burning.
//! - `transfer` moves the caller's own funds.
//! - `approve` grants a spender a delegated allowance (overwrite semantics).
//! - `transfer_from` moves an owner's funds on behalf of an authorized
//!   spender, decrementing the allowance.
//!
//! Every mutation either completes — appending a [`TokenEvent`] to the
//! ledger's append-only log — or fails with zero state change.
//!
//! [`TokenEvent`]: custodex_types::TokenEvent

pub mod ledger;

pub use ledger::TokenLedger;
