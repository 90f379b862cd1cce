//! System-wide constants for the Custodex exchange core.

/// Implied decimal places for all monetary amounts.
pub const DECIMALS: u32 = 18;

/// Scaling factor between whole tokens and base units (10^18).
pub const SCALE: u128 = 1_000_000_000_000_000_000;

/// Denominator for fee-percent arithmetic (fee = amount * percent / 100).
pub const FEE_DENOMINATOR: u128 = 100;

/// Order identifiers are 1-based; id 0 never refers to an order.
pub const FIRST_ORDER_ID: u64 = 1;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "Custodex";
