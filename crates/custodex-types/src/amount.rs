//! Fixed-point monetary amounts.
//!
//! All balances, allowances, and order quantities are unsigned integers in
//! base units with 18 implied decimal places (`SCALE` = 10^18). The ledger
//! computes exclusively in base units; [`rust_decimal::Decimal`] is used only
//! to render human-readable values for display and logging.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{DECIMALS, FEE_DENOMINATOR, SCALE};
use crate::error::{LedgerError, Result};

/// An unsigned fixed-point amount in base units (10^-18 of a whole token).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize,
)]
pub struct Amount(pub u128);

impl Amount {
    /// The zero amount.
    pub const ZERO: Self = Self(0);

    /// An amount from raw base units.
    #[must_use]
    pub fn from_base_units(units: u128) -> Self {
        Self(units)
    }

    /// An amount from a whole-token count: `n` × 10^18.
    #[must_use]
    pub fn from_tokens(n: u64) -> Self {
        Self(u128::from(n) * SCALE)
    }

    /// Raw base units.
    #[must_use]
    pub fn base_units(self) -> u128 {
        self.0
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Overflow-checked addition.
    pub fn checked_add(self, rhs: Self) -> Result<Self> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or(LedgerError::AmountOverflow)
    }

    /// Underflow-checked subtraction.
    pub fn checked_sub(self, rhs: Self) -> Result<Self> {
        self.0
            .checked_sub(rhs.0)
            .map(Self)
            .ok_or(LedgerError::AmountOverflow)
    }

    /// The fee charged on this amount: `amount * percent / 100`.
    ///
    /// Integer division truncates toward zero — never rounds. This exact
    /// truncation is what keeps settlement balance-conserving.
    pub fn fee(self, percent: u64) -> Result<Self> {
        let scaled = self
            .0
            .checked_mul(u128::from(percent))
            .ok_or(LedgerError::AmountOverflow)?;
        Ok(Self(scaled / FEE_DENOMINATOR))
    }

    /// Decimal rendering with 18 places, for display only.
    ///
    /// Returns `None` for amounts beyond `Decimal`'s 96-bit mantissa.
    #[must_use]
    pub fn to_decimal(self) -> Option<Decimal> {
        let units = i128::try_from(self.0).ok()?;
        Decimal::try_from_i128_with_scale(units, DECIMALS).ok()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_decimal() {
            Some(d) => write!(f, "{}", d.normalize()),
            None => write!(f, "{}e-18", self.0),
        }
    }
}
