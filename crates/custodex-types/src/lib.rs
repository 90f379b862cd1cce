//! # custodex-types
//!
//! Shared types, errors, and configuration for the **Custodex** exchange core.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`Address`], [`OrderId`]
//! - **Amounts**: [`Amount`] — unsigned fixed-point, 18 implied decimals
//! - **Order model**: [`Order`], [`OrderStatus`]
//! - **Event model**: [`TokenEvent`], [`ExchangeEvent`]
//! - **Configuration**: [`TokenConfig`], [`ExchangeConfig`]
//! - **Errors**: [`LedgerError`] with `DX_ERR_` prefix codes
//! - **Constants**: scaling factors and system-wide defaults

pub mod amount;
pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod ids;
pub mod order;

// Re-export all primary types at crate root for ergonomic imports:
//   use custodex_types::{Address, Amount, Order, ExchangeEvent, ...};

pub use amount::*;
pub use config::*;
pub use error::*;
pub use event::*;
pub use ids::*;
pub use order::*;

// Constants are accessed via `custodex_types::constants::FOO`
// (not re-exported to avoid name collisions).
