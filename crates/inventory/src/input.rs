//! Parsing of untyped form input into the table's argument types.
//!
//! A presentation layer receives text. These helpers turn it into typed
//! values and report malformed input with the same messages the table uses,
//! so that every caller produces identical feedback.
//!
//! "Not a number" and "a number out of range" are different failures: an
//! integer too large for any machine type is still an integer, so it goes on
//! to the table's existence and stock checks instead of being reported as
//! malformed.

use core::num::IntErrorKind;

use stockroom_core::{DomainError, DomainResult, Money, ProductCode};

/// A parsed sale/restock request.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MovementRequest {
    pub code: ProductCode,
    /// Range-checked by the table, not here. Out-of-range text saturates.
    pub quantity: i128,
}

/// A parsed "add product" form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub unit_price: Money,
    pub quantity: i64,
}

/// Parse a code typed by a user for a lookup.
///
/// Non-integer text is a validation error; an integer that cannot be a code
/// (zero, negative, or beyond `u64`) simply does not exist.
pub fn parse_code(raw: &str) -> DomainResult<ProductCode> {
    let code = parse_integer(raw).ok_or_else(|| DomainError::validation("invalid code"))?;
    existing_code(code)
}

/// Parse the code/quantity pair of a sale or restock.
pub fn parse_movement(raw_code: &str, raw_quantity: &str) -> DomainResult<MovementRequest> {
    let (code, quantity) = match (parse_integer(raw_code), parse_integer(raw_quantity)) {
        (Some(code), Some(quantity)) => (code, quantity),
        _ => return Err(DomainError::validation("invalid code/quantity")),
    };

    Ok(MovementRequest {
        code: existing_code(code)?,
        quantity,
    })
}

/// Parse the "add product" form fields.
///
/// Malformed fields are reported before out-of-range ones: name, then price
/// format, then quantity format, then price sign, then quantity sign and size.
pub fn parse_new_product(raw_name: &str, raw_price: &str, raw_quantity: &str) -> DomainResult<NewProduct> {
    let name = raw_name.trim();
    if name.is_empty() {
        return Err(DomainError::validation("name cannot be empty"));
    }

    let price = raw_price.trim();
    let (negative, magnitude) = match price.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, price),
    };
    // Only one sign, directly followed by the number: "--5" is malformed.
    if magnitude.starts_with(|c: char| c == '-' || c.is_whitespace()) {
        return Err(DomainError::validation("invalid price"));
    }
    let unit_price: Money = magnitude.parse()?;

    let quantity =
        parse_integer(raw_quantity).ok_or_else(|| DomainError::validation("invalid quantity"))?;

    if negative && !unit_price.is_zero() {
        return Err(DomainError::validation("price cannot be negative"));
    }
    if quantity < 0 {
        return Err(DomainError::validation("quantity cannot be negative"));
    }
    let quantity =
        i64::try_from(quantity).map_err(|_| DomainError::validation("quantity too large"))?;

    Ok(NewProduct {
        name: name.to_string(),
        unit_price,
        quantity,
    })
}

/// Parse an integer, saturating at the `i128` bounds on overflow.
///
/// `None` means the text is not an integer at all.
fn parse_integer(raw: &str) -> Option<i128> {
    match raw.trim().parse::<i128>() {
        Ok(value) => Some(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i128::MAX),
            IntErrorKind::NegOverflow => Some(i128::MIN),
            _ => None,
        },
    }
}

fn existing_code(code: i128) -> DomainResult<ProductCode> {
    u64::try_from(code)
        .ok()
        .and_then(|code| ProductCode::new(code).ok())
        .ok_or_else(|| DomainError::not_found("code does not exist"))
}
