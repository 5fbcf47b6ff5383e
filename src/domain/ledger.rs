//! Per-location stock bookkeeping: product quantities and ledger merging.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use super::product::Product;

/// Id of the reserved placeholder entry every ledger is seeded with.
pub const INVALID_PRODUCT_ID: i32 = -2;

/// Quantity map for one location, keyed by product identity (id order).
///
/// Quantities are `u32`, so the on-hand/requested count can never go
/// negative. Inserting an id that is already present leaves the existing
/// entry untouched (first insert wins).
#[derive(Clone, Debug)]
pub struct StockLedger {
    entries: BTreeMap<Product, u32>,
}

impl StockLedger {
    /// Creates an empty ledger holding only the reserved placeholder entry.
    pub fn new() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(Product::new("Invalid ID", INVALID_PRODUCT_ID, 0.0), 0);
        Self { entries }
    }

    /// Records `quantity` units of `product`, taking ownership of the record.
    ///
    /// Returns `false` without touching the ledger when an entry with the
    /// same id already exists.
    pub fn insert(&mut self, product: Product, quantity: u32) -> bool {
        match self.entries.entry(product) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(quantity);
                true
            }
        }
    }

    /// Convenience for [`insert`](Self::insert) that builds the product
    /// record in place.
    pub fn insert_new(&mut self, name: impl Into<String>, id: i32, weight: f32, quantity: u32) -> bool {
        self.insert(Product::new(name, id, weight), quantity)
    }

    /// Finds the stored product with the given id, scanning entries in key
    /// order. `None` when no entry matches.
    pub fn lookup_by_id(&self, id: i32) -> Option<&Product> {
        self.entries.keys().find(|product| product.id == id)
    }

    /// Quantity on hand for the given product id, if present.
    pub fn quantity_of(&self, id: i32) -> Option<u32> {
        self.entries
            .iter()
            .find(|(product, _)| product.id == id)
            .map(|(_, quantity)| *quantity)
    }

    /// Folds another ledger into this one, consuming it.
    ///
    /// Afterwards this ledger holds the union of both key sets, and every
    /// product present in either carries the larger of the two quantities.
    /// Taking `other` by value means the source cannot be read, re-merged,
    /// or merged with itself after the fold.
    pub fn merge(&mut self, other: StockLedger) {
        for (product, quantity) in other.entries {
            match self.entries.entry(product) {
                Entry::Vacant(slot) => {
                    slot.insert(quantity);
                }
                Entry::Occupied(mut slot) => {
                    let current = slot.get_mut();
                    *current = (*current).max(quantity);
                }
            }
        }
    }

    /// Number of real product entries (the placeholder is not counted).
    pub fn product_count(&self) -> usize {
        self.entries
            .keys()
            .filter(|product| product.id != INVALID_PRODUCT_ID)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.product_count() == 0
    }

    /// Entries in id order, placeholder excluded.
    pub fn iter(&self) -> impl Iterator<Item = (&Product, u32)> {
        self.entries
            .iter()
            .filter(|(product, _)| product.id != INVALID_PRODUCT_ID)
            .map(|(product, quantity)| (product, *quantity))
    }
}

impl Default for StockLedger {
    fn default() -> Self {
        Self::new()
    }
}
