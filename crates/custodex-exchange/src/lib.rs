//! # custodex-exchange
//!
//! The **Exchange Ledger**: custodied per-user per-token balances, the
//! order book's full lifecycle (Open → Cancelled | Filled), and atomic,
//! fee-correct settlement on fill.
//!
//! ## Architecture
//!
//! - [`CustodyLedger`]: per-(token, user) balances held in custody
//! - [`OrderBook`]: monotonically growing order mapping with lifecycle state
//! - [`settlement`]: the six-step fee-adjusted balance transfer on fill
//! - [`SupplyTracker`]: per-token conservation invariant checking
//! - [`Exchange`]: ties the pieces together behind the public operations
//!
//! ## Operation flow
//!
//! ```text
//! approve (token ledger) → deposit_token → make_order
//!                                        → cancel_order
//!                                        → fill_order → settlement
//! custody → withdraw_token (custody debited before the token transfer)
//! ```
//!
//! The token ledger is an external capability: the exchange only ever calls
//! its `transfer` / `transfer_from` primitives, and never swallows their
//! failures.

pub mod custody;
pub mod exchange;
pub mod orders;
pub mod settlement;
pub mod supply;

pub use custody::CustodyLedger;
pub use exchange::Exchange;
pub use orders::OrderBook;
pub use supply::SupplyTracker;
