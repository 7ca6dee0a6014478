use stockroom_core::Money;

/// Stored attributes of a product: name, unit price and stock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    name: String,
    unit_price: Money,
    quantity: u64,
}

impl ProductRecord {
    /// Only the table builds records, after validating the name.
    pub(crate) fn new(name: impl Into<String>, unit_price: Money, quantity: u64) -> Self {
        Self {
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Value of the stock on hand (`unit_price × quantity`).
    pub fn line_total(&self) -> Money {
        self.unit_price.saturating_mul(self.quantity)
    }

    pub(crate) fn set_quantity(&mut self, quantity: u64) {
        self.quantity = quantity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_total_multiplies_price_by_stock() {
        let record = ProductRecord::new("HDMI Cable", Money::from_cents(2_990), 30);
        assert_eq!(record.line_total(), Money::from_cents(89_700));

        let empty = ProductRecord::new("Gaming Chair", Money::from_cents(89_000), 0);
        assert!(empty.line_total().is_zero());
    }
}
