use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::MAX_DISPLAY_SCALE;
use crate::errors::{AmortizeError, Result};

/// display-rounded monetary amount
///
/// Schedules are computed in `f64`; `Money` only exists at the presentation
/// boundary, so rounding here never feeds back into the balance recurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// create from decimal, capped at the maximum display scale
    pub fn from_decimal(d: Decimal) -> Self {
        Money(d.round_dp(MAX_DISPLAY_SCALE))
    }

    /// round a computed amount to `dp` places (banker's rounding), keeping trailing zeros
    pub fn from_f64(value: f64, dp: u32) -> Result<Self> {
        let d = Decimal::from_f64(value).ok_or_else(|| AmortizeError::NumericOverflow {
            quantity: format!("display amount {value}"),
        })?;
        Ok(Money(d).round_dp(dp))
    }

    /// create from integer amount (dollars, rupees, etc)
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// round to specified decimal places; zero is never signed
    pub fn round_dp(&self, dp: u32) -> Self {
        let mut d = self.0.round_dp(dp);
        if d.is_zero() {
            d = Decimal::ZERO;
        }
        d.rescale(dp);
        Money(d)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Money::from_decimal(Decimal::from_str(s)?))
    }
}

impl From<Decimal> for Money {
    fn from(d: Decimal) -> Self {
        Money::from_decimal(d)
    }
}
