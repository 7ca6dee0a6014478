//! The fixed catalog a fresh process starts with.

use stockroom_core::{DomainResult, Money};

use crate::record::ProductRecord;
use crate::table::InventoryTable;

/// (name, unit price in cents, quantity), in code order starting at 1.
/// Product names are English renderings of the shop's Portuguese labels.
pub const SEED_CATALOG: &[(&str, u64, u64)] = &[
    ("Mouse", 10_000, 10),
    ("Keyboard", 8_000, 15),
    ("Monitor 24\"", 75_000, 8),
    ("Gaming Headset", 19_990, 12),
    ("Large Mousepad", 4_500, 25),
    ("HDMI Cable", 2_990, 30),
    ("Full HD Webcam", 15_000, 7),
    ("SSD 480GB", 22_000, 14),
    ("HDD 1TB", 26_000, 9),
    ("GTX 1650 Graphics Card", 120_000, 3),
    ("500W Power Supply", 18_000, 11),
    ("Gaming Case", 21_000, 6),
    ("Wi-Fi Router", 13_000, 20),
    ("Mechanical Keyboard", 35_000, 5),
    ("Gaming Chair", 89_000, 2),
];

impl InventoryTable {
    /// A table pre-populated with [`SEED_CATALOG`] under codes 1..=15.
    pub fn seeded() -> DomainResult<Self> {
        let mut table = Self::new();
        for &(name, cents, quantity) in SEED_CATALOG {
            table.push(ProductRecord::new(name, Money::from_cents(cents), quantity))?;
        }
        Ok(table)
    }
}
