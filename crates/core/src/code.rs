//! Product codes: positive integers assigned sequentially by the inventory table.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Identifier of a product in the inventory table.
///
/// Always positive. Codes are handed out by the table (`max + 1`) and never
/// reused.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct ProductCode(u64);

impl ProductCode {
    /// The code assigned to the first product of an empty table.
    pub const FIRST: ProductCode = ProductCode(1);

    pub fn new(value: u64) -> DomainResult<Self> {
        if value == 0 {
            return Err(DomainError::validation("code must be greater than 0"));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// The code following this one, or `None` on overflow.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl core::fmt::Display for ProductCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<u64> for ProductCode {
    type Error = DomainError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for ProductCode {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let value = u64::try_from(value)
            .map_err(|_| DomainError::validation("code must be greater than 0"))?;
        Self::new(value)
    }
}

impl From<ProductCode> for u64 {
    fn from(value: ProductCode) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_negative_codes_are_rejected() {
        assert!(ProductCode::new(0).is_err());
        assert!(ProductCode::try_from(-3_i64).is_err());
        assert_eq!(ProductCode::try_from(7_i64).unwrap().get(), 7);
    }

    #[test]
    fn next_increments() {
        assert_eq!(ProductCode::FIRST.next(), Some(ProductCode::new(2).unwrap()));
        assert_eq!(ProductCode::new(u64::MAX).unwrap().next(), None);
    }

    #[test]
    fn serde_rejects_zero() {
        assert!(serde_json::from_str::<ProductCode>("0").is_err());
        let code: ProductCode = serde_json::from_str("12").unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "12");
    }
}
