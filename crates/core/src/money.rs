//! Money amounts in the smallest currency unit.
//!
//! Prices and inventory values are kept as integer cents so that totals are
//! exact. Parsing accepts the decimal text people type into a form
//! (`"199.90"`, `"199,90"`, `"45"`). Digits past the cent are rounded half
//! up, so `"1.999"` is 2.00.

use core::iter::Sum;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

const CENTS_PER_UNIT: u64 = 100;

/// A non-negative amount of money, in cents.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Whole units plus cents, e.g. `Money::new(199, 90)` is 199.90.
    ///
    /// Returns `None` if `cents` is not below 100 or the amount overflows.
    pub fn new(units: u64, cents: u64) -> Option<Self> {
        if cents >= CENTS_PER_UNIT {
            return None;
        }
        units
            .checked_mul(CENTS_PER_UNIT)
            .and_then(|c| c.checked_add(cents))
            .map(Self)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Price × quantity, clamped at `u64::MAX` cents.
    pub fn saturating_mul(self, quantity: u64) -> Self {
        Self(self.0.saturating_mul(quantity))
    }

    pub fn saturating_add(self, other: Money) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl ValueObject for Money {}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / CENTS_PER_UNIT, self.0 % CENTS_PER_UNIT)
    }
}

impl FromStr for Money {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(rest) = s.strip_prefix('-') {
            // Distinguish "-5" (a negative price) from plain garbage.
            if rest.parse::<Money>().is_ok() {
                return Err(DomainError::validation("price cannot be negative"));
            }
            return Err(invalid_price());
        }

        let normalized = s.replace(',', ".");
        let (units, fraction) = match normalized.split_once('.') {
            Some((units, fraction)) => (units, fraction),
            None => (normalized.as_str(), ""),
        };

        if units.is_empty() && fraction.is_empty() {
            return Err(invalid_price());
        }
        if !all_digits(units) || !all_digits(fraction) {
            return Err(invalid_price());
        }

        let units: u64 = if units.is_empty() {
            0
        } else {
            units.parse().map_err(|_| invalid_price())?
        };
        let digit = |i: usize| fraction.as_bytes().get(i).map_or(0, |b| u64::from(b - b'0'));
        let cents = digit(0) * 10 + digit(1);
        let round_up = u64::from(digit(2) >= 5);

        units
            .checked_mul(CENTS_PER_UNIT)
            .and_then(|c| c.checked_add(cents + round_up))
            .map(Money)
            .ok_or_else(invalid_price)
    }
}

impl TryFrom<String> for Money {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Money> for String {
    fn from(value: Money) -> Self {
        value.to_string()
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Money::saturating_add)
    }
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

fn invalid_price() -> DomainError {
    DomainError::validation("invalid price")
}
