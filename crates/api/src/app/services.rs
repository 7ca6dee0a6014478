use std::sync::{Mutex, MutexGuard, PoisonError};

use stockroom_inventory::InventoryTable;

/// Application state shared by every handler.
///
/// The table itself is not synchronized. All access goes through one mutex,
/// held for the whole of each operation, so sell/restock read-modify-write
/// cycles never interleave.
#[derive(Debug)]
pub struct AppServices {
    inventory: Mutex<InventoryTable>,
    low_stock_threshold: u64,
}

impl AppServices {
    pub fn new(table: InventoryTable, low_stock_threshold: u64) -> Self {
        Self {
            inventory: Mutex::new(table),
            low_stock_threshold,
        }
    }

    pub fn low_stock_threshold(&self) -> u64 {
        self.low_stock_threshold
    }

    pub fn read<R>(&self, f: impl FnOnce(&InventoryTable) -> R) -> R {
        let guard = self.lock();
        f(&*guard)
    }

    pub fn write<R>(&self, f: impl FnOnce(&mut InventoryTable) -> R) -> R {
        let mut guard = self.lock();
        f(&mut *guard)
    }

    fn lock(&self) -> MutexGuard<'_, InventoryTable> {
        // Table mutations validate before writing, so a panic elsewhere
        // cannot leave a half-applied change behind.
        self.inventory.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
