use std::collections::BTreeMap;

use stockroom_core::{DomainError, DomainResult, Money, ProductCode};

use crate::record::ProductRecord;

/// The in-memory product table: the single owner of every record.
///
/// Codes are assigned by the table as `max(existing) + 1` (or 1 when empty)
/// and never reused. Records are kept in ascending code order, which is also
/// insertion order since codes only grow.
///
/// Every mutation validates first and writes last, so a rejected call leaves
/// the table untouched. The table is not synchronized; callers sharing it
/// across threads must wrap it in a lock.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryTable {
    products: BTreeMap<ProductCode, ProductRecord>,
}

/// Direction of a successful stock movement.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MovementKind {
    Sale,
    Restock,
}

/// Outcome of a successful sale or restock.
///
/// `Display` renders the confirmation shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockMovement {
    pub kind: MovementKind,
    pub code: ProductCode,
    pub name: String,
    pub quantity: u64,
    pub stock_after: u64,
}

impl core::fmt::Display for StockMovement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            MovementKind::Sale => write!(
                f,
                "sold {}x '{}' (stock now: {})",
                self.quantity, self.name, self.stock_after
            ),
            MovementKind::Restock => write!(
                f,
                "restocked +{} of '{}' (stock now: {})",
                self.quantity, self.name, self.stock_after
            ),
        }
    }
}

impl InventoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All products in ascending code order.
    pub fn products(&self) -> impl Iterator<Item = (ProductCode, &ProductRecord)> + '_ {
        self.products.iter().map(|(code, record)| (*code, record))
    }

    /// The code the next added product will receive.
    pub fn next_code(&self) -> DomainResult<ProductCode> {
        match self.products.last_key_value() {
            None => Ok(ProductCode::FIRST),
            Some((last, _)) => last
                .next()
                .ok_or_else(|| DomainError::validation("no product codes left")),
        }
    }

    /// Add a new product and return its assigned code with the stored record.
    pub fn add_product(
        &mut self,
        name: &str,
        unit_price: Money,
        quantity: i64,
    ) -> DomainResult<(ProductCode, ProductRecord)> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        let quantity =
            u64::try_from(quantity).map_err(|_| DomainError::validation("quantity cannot be negative"))?;

        let record = ProductRecord::new(name, unit_price, quantity);
        let code = self.push(record.clone())?;
        Ok((code, record))
    }

    /// Look up a product. `None` when the code is not in the table.
    pub fn find_product(&self, code: ProductCode) -> Option<&ProductRecord> {
        self.products.get(&code)
    }

    /// Record a sale: decrease stock by `quantity`.
    ///
    /// Checks, first failure wins: the code exists, `quantity > 0`,
    /// `quantity <= stock`. Quantities are taken as `i128` so that any
    /// integer a caller parsed, however large, reaches the stock check.
    pub fn sell_product(&mut self, code: ProductCode, quantity: i128) -> DomainResult<StockMovement> {
        let record = self.products.get_mut(&code).ok_or_else(code_does_not_exist)?;
        let quantity = positive_quantity(quantity)?;

        let in_stock = record.quantity();
        let Some((quantity, remaining)) = u64::try_from(quantity)
            .ok()
            .and_then(|q| in_stock.checked_sub(q).map(|r| (q, r)))
        else {
            return Err(DomainError::validation(format!(
                "insufficient stock: in stock: {in_stock}"
            )));
        };

        record.set_quantity(remaining);
        Ok(movement(MovementKind::Sale, code, record, quantity))
    }

    /// Restock: increase stock by `quantity`. No ceiling besides `u64`.
    pub fn restock_product(&mut self, code: ProductCode, quantity: i128) -> DomainResult<StockMovement> {
        let record = self.products.get_mut(&code).ok_or_else(code_does_not_exist)?;
        let quantity = positive_quantity(quantity)?;

        let in_stock = record.quantity();
        let (quantity, new_stock) = u64::try_from(quantity)
            .ok()
            .and_then(|q| in_stock.checked_add(q).map(|n| (q, n)))
            .ok_or_else(|| DomainError::validation("quantity too large"))?;

        record.set_quantity(new_stock);
        Ok(movement(MovementKind::Restock, code, record, quantity))
    }

    pub(crate) fn push(&mut self, record: ProductRecord) -> DomainResult<ProductCode> {
        let code = self.next_code()?;
        self.products.insert(code, record);
        Ok(code)
    }
}

fn movement(kind: MovementKind, code: ProductCode, record: &ProductRecord, quantity: u64) -> StockMovement {
    StockMovement {
        kind,
        code,
        name: record.name().to_string(),
        quantity,
        stock_after: record.quantity(),
    }
}

fn code_does_not_exist() -> DomainError {
    DomainError::not_found("code does not exist")
}

fn positive_quantity(quantity: i128) -> DomainResult<u128> {
    match u128::try_from(quantity) {
        Ok(q) if q > 0 => Ok(q),
        _ => Err(DomainError::validation(
            "invalid quantity, must be greater than 0",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(n: u64) -> ProductCode {
        ProductCode::new(n).unwrap()
    }

    fn price(units: u64) -> Money {
        Money::new(units, 0).unwrap()
    }

    fn table_with_mouse() -> InventoryTable {
        let mut table = InventoryTable::new();
        table.add_product("Mouse", price(100), 10).unwrap();
        table
    }

    #[test]
    fn add_to_empty_table_assigns_code_one() {
        let mut table = InventoryTable::new();
        let (assigned, record) = table.add_product("Mouse", price(100), 10).unwrap();

        assert_eq!(assigned, code(1));
        assert_eq!(record.name(), "Mouse");
        assert_eq!(record.unit_price(), price(100));
        assert_eq!(record.quantity(), 10);
        assert_eq!(table.len(), 1);
        assert_eq!(table.find_product(code(1)), Some(&record));
    }

    #[test]
    fn add_assigns_max_plus_one() {
        let mut table = table_with_mouse();
        let (second, _) = table.add_product("Keyboard", price(80), 15).unwrap();
        let (third, _) = table.add_product("Monitor", price(750), 8).unwrap();

        assert_eq!(second, code(2));
        assert_eq!(third, code(3));
        assert_eq!(table.next_code().unwrap(), code(4));
    }

    #[test]
    fn add_trims_and_rejects_empty_name() {
        let mut table = InventoryTable::new();
        let err = table.add_product("   ", price(1), 1).unwrap_err();
        assert_eq!(err, DomainError::validation("name cannot be empty"));
        assert!(table.is_empty());

        let (_, record) = table.add_product("  Webcam  ", price(150), 7).unwrap();
        assert_eq!(record.name(), "Webcam");
    }

    #[test]
    fn add_rejects_negative_quantity() {
        let mut table = InventoryTable::new();
        let err = table.add_product("Mouse", price(100), -1).unwrap_err();
        assert_eq!(err, DomainError::validation("quantity cannot be negative"));
        assert!(table.is_empty());
    }

    #[test]
    fn add_accepts_zero_price_and_zero_stock() {
        let mut table = InventoryTable::new();
        let (_, record) = table.add_product("Sticker", Money::ZERO, 0).unwrap();
        assert!(record.unit_price().is_zero());
        assert_eq!(record.quantity(), 0);
    }

    #[test]
    fn find_absent_code_returns_none() {
        let table = table_with_mouse();
        assert!(table.find_product(code(2)).is_none());
        assert!(InventoryTable::new().find_product(code(1)).is_none());
    }

    #[test]
    fn sell_decrements_stock() {
        let mut table = table_with_mouse();
        let movement = table.sell_product(code(1), 4).unwrap();

        assert_eq!(movement.kind, MovementKind::Sale);
        assert_eq!(movement.quantity, 4);
        assert_eq!(movement.stock_after, 6);
        assert_eq!(movement.to_string(), "sold 4x 'Mouse' (stock now: 6)");
        assert_eq!(table.find_product(code(1)).unwrap().quantity(), 6);
    }

    #[test]
    fn sell_entire_stock_reaches_zero() {
        let mut table = table_with_mouse();
        table.sell_product(code(1), 10).unwrap();
        assert_eq!(table.find_product(code(1)).unwrap().quantity(), 0);
    }

    #[test]
    fn oversell_fails_and_leaves_stock_unchanged() {
        let mut table = table_with_mouse();
        let err = table.sell_product(code(1), 999).unwrap_err();

        assert_eq!(err, DomainError::validation("insufficient stock: in stock: 10"));
        assert_eq!(table.find_product(code(1)).unwrap().quantity(), 10);
    }

    #[test]
    fn sell_unknown_code_is_not_found() {
        let mut table = table_with_mouse();
        let err = table.sell_product(code(42), 1).unwrap_err();
        assert_eq!(err, DomainError::not_found("code does not exist"));
    }

    #[test]
    fn unknown_code_wins_over_bad_quantity() {
        let mut table = table_with_mouse();
        let err = table.sell_product(code(42), 0).unwrap_err();
        assert!(err.is_not_found());
        let err = table.restock_product(code(42), -5).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn non_positive_quantities_are_rejected() {
        let mut table = table_with_mouse();
        for q in [0, -1, i128::MIN] {
            let err = table.sell_product(code(1), q).unwrap_err();
            assert_eq!(err.message(), "invalid quantity, must be greater than 0");
            let err = table.restock_product(code(1), q).unwrap_err();
            assert_eq!(err.message(), "invalid quantity, must be greater than 0");
        }
        assert_eq!(table.find_product(code(1)).unwrap().quantity(), 10);
    }

    #[test]
    fn restock_increments_stock() {
        let mut table = table_with_mouse();
        let movement = table.restock_product(code(1), 5).unwrap();

        assert_eq!(movement.kind, MovementKind::Restock);
        assert_eq!(movement.stock_after, 15);
        assert_eq!(movement.to_string(), "restocked +5 of 'Mouse' (stock now: 15)");
    }

    #[test]
    fn restock_overflow_is_rejected_without_mutation() {
        let mut table = table_with_mouse();
        table.restock_product(code(1), i128::from(u64::MAX - 10)).unwrap();
        assert_eq!(table.find_product(code(1)).unwrap().quantity(), u64::MAX);

        let err = table.restock_product(code(1), 1).unwrap_err();
        assert_eq!(err.message(), "quantity too large");
        assert_eq!(table.find_product(code(1)).unwrap().quantity(), u64::MAX);
    }

    #[test]
    fn quantities_beyond_u64_hit_the_stock_checks() {
        let mut table = table_with_mouse();
        let huge = i128::from(u64::MAX) + 1;

        let err = table.sell_product(code(1), huge).unwrap_err();
        assert_eq!(err, DomainError::validation("insufficient stock: in stock: 10"));
        let err = table.sell_product(code(1), i128::MAX).unwrap_err();
        assert_eq!(err, DomainError::validation("insufficient stock: in stock: 10"));

        let err = table.restock_product(code(1), i128::MAX).unwrap_err();
        assert_eq!(err.message(), "quantity too large");
        assert_eq!(table.find_product(code(1)).unwrap().quantity(), 10);
    }

    #[test]
    fn sell_from_a_stock_above_i64_range() {
        let mut table = table_with_mouse();
        table.restock_product(code(1), i128::from(u64::MAX - 10)).unwrap();

        let movement = table.sell_product(code(1), i128::from(u64::MAX)).unwrap();
        assert_eq!(movement.stock_after, 0);
    }

    #[test]
    fn products_iterate_in_code_order() {
        let mut table = InventoryTable::new();
        for name in ["a", "b", "c"] {
            table.add_product(name, price(1), 1).unwrap();
        }
        let codes: Vec<u64> = table.products().map(|(c, _)| c.get()).collect();
        assert_eq!(codes, vec![1, 2, 3]);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: codes from successive adds are 1, 2, 3, ... with no gaps.
            #[test]
            fn codes_are_sequential_from_one(
                products in prop::collection::vec(("[A-Za-z][A-Za-z0-9 ]{0,20}", 0u64..1_000_000, 0i64..1_000), 1..40)
            ) {
                let mut table = InventoryTable::new();
                for (i, (name, cents, qty)) in products.iter().enumerate() {
                    let (assigned, _) = table.add_product(name, Money::from_cents(*cents), *qty).unwrap();
                    prop_assert_eq!(assigned.get(), i as u64 + 1);
                }
                prop_assert_eq!(table.len(), products.len());
            }

            /// Property: selling q then restocking q restores the original stock.
            #[test]
            fn sell_then_restock_is_identity(stock in 1i64..10_000, fraction in 0.0f64..=1.0) {
                let mut table = InventoryTable::new();
                let (c, _) = table.add_product("Item", Money::from_cents(100), stock).unwrap();
                let q = ((stock as f64) * fraction).ceil().max(1.0) as i128;

                table.sell_product(c, q).unwrap();
                table.restock_product(c, q).unwrap();

                prop_assert_eq!(table.find_product(c).unwrap().quantity(), stock as u64);
            }

            /// Property: a failed oversell never changes stock.
            #[test]
            fn oversell_never_mutates(stock in 0i64..1_000, extra in 1i64..1_000) {
                let mut table = InventoryTable::new();
                let (c, _) = table.add_product("Item", Money::from_cents(100), stock).unwrap();
                let before = table.clone();

                prop_assert!(table.sell_product(c, i128::from(stock + extra)).is_err());
                prop_assert_eq!(table, before);
            }

            /// Property: after any sequence of movements, total value equals an
            /// independent recomputation and stock never underflows.
            #[test]
            fn total_value_tracks_every_mutation(
                prices in prop::collection::vec(0u64..100_000, 1..10),
                ops in prop::collection::vec((any::<bool>(), 0usize..10, -5i128..50), 0..60)
            ) {
                let mut table = InventoryTable::new();
                for cents in &prices {
                    table.add_product("Item", Money::from_cents(*cents), 10).unwrap();
                }

                for (sell, idx, q) in ops {
                    let c = ProductCode::new((idx % prices.len()) as u64 + 1).unwrap();
                    let _ = if sell {
                        table.sell_product(c, q)
                    } else {
                        table.restock_product(c, q)
                    };

                    let expected: u64 = table
                        .products()
                        .map(|(_, r)| r.unit_price().cents() * r.quantity())
                        .sum();
                    prop_assert_eq!(table.total_value().cents(), expected);
                }
            }
        }
    }
}
