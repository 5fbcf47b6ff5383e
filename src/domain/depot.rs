//! Named, addressed stock locations and their reconciliation.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ledger::StockLedger;
use super::product::Product;

/// What side of the network a depot sits on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DepotRole {
    /// Supplies stock (warehouse side).
    #[default]
    Storage,
    /// Requests stock (delivery side).
    Receiver,
}

impl DepotRole {
    pub fn label(&self) -> &'static str {
        match self {
            DepotRole::Storage => "storage",
            DepotRole::Receiver => "receiver",
        }
    }
}

#[derive(Debug, Error)]
pub enum ReconcileError {
    /// The two records disagree on name or address. Carries the rejected
    /// depot back to the caller so its stock is not silently dropped.
    #[error("cannot reconcile depots at different locations: {ours} vs {theirs}")]
    LocationMismatch {
        ours: String,
        theirs: String,
        rejected: Box<Depot>,
    },
}

/// A named, addressed location owning one [`StockLedger`].
///
/// Identity is the numeric `id`; whether two depot records describe the same
/// physical site is answered by [`Depot::same_location`], and folding two
/// records of one site together is the explicit [`Depot::reconcile`] call.
#[derive(Clone, Debug)]
pub struct Depot {
    pub name: String,
    pub id: i32,
    pub address: String,
    pub role: DepotRole,
    pub annotations: HashMap<String, String>,
    ledger: StockLedger,
}

impl Depot {
    pub fn new(name: impl Into<String>, id: i32, address: impl Into<String>, role: DepotRole) -> Self {
        Self {
            name: name.into(),
            id,
            address: address.into(),
            role,
            annotations: HashMap::new(),
            ledger: StockLedger::new(),
        }
    }

    pub fn ledger(&self) -> &StockLedger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut StockLedger {
        &mut self.ledger
    }

    /// Records stock at this depot; see [`StockLedger::insert`].
    pub fn insert(&mut self, product: Product, quantity: u32) -> bool {
        self.ledger.insert(product, quantity)
    }

    /// Builds and records a product in one call; see [`StockLedger::insert_new`].
    pub fn insert_new(&mut self, name: impl Into<String>, id: i32, weight: f32, quantity: u32) -> bool {
        self.ledger.insert_new(name, id, weight, quantity)
    }

    pub fn lookup_by_id(&self, id: i32) -> Option<&Product> {
        self.ledger.lookup_by_id(id)
    }

    pub fn quantity_of(&self, id: i32) -> Option<u32> {
        self.ledger.quantity_of(id)
    }

    /// True if both records point at the same physical site: matching name
    /// and address. Pure; never touches either ledger.
    pub fn same_location(&self, other: &Depot) -> bool {
        self.name == other.name && self.address == other.address
    }

    /// Folds another record of the same site into this one, merging the two
    /// ledgers (union of products, larger quantity kept per product).
    ///
    /// Errors when the records disagree on name or address, leaving `self`
    /// untouched and handing `other` back inside the error.
    pub fn reconcile(&mut self, other: Depot) -> Result<(), ReconcileError> {
        if !self.same_location(&other) {
            return Err(ReconcileError::LocationMismatch {
                ours: format!("{} @ {}", self.name, self.address),
                theirs: format!("{} @ {}", other.name, other.address),
                rejected: Box::new(other),
            });
        }
        self.absorb(other);
        Ok(())
    }

    /// Ledger fold without the location check; callers must have matched
    /// the records already.
    pub(crate) fn absorb(&mut self, other: Depot) {
        self.ledger.merge(other.ledger);
    }
}

impl Default for Depot {
    fn default() -> Self {
        Self::new("Unnamed", -1, "No address", DepotRole::default())
    }
}

impl PartialEq for Depot {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Depot {}

impl PartialOrd for Depot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Depot {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_depot_is_unnamed_and_empty() {
        let depot = Depot::default();
        assert_eq!(depot.name, "Unnamed");
        assert_eq!(depot.id, -1);
        assert_eq!(depot.address, "No address");
        assert_eq!(depot.role, DepotRole::Storage);
        assert!(depot.ledger().is_empty());
    }

    #[test]
    fn ledger_operations_forward() {
        let mut depot = Depot::new("north", 1, "Dock 4", DepotRole::Storage);
        assert!(depot.insert_new("crate", 7, 12.5, 3));
        assert_eq!(depot.lookup_by_id(7).map(|p| p.name.as_str()), Some("crate"));
        assert_eq!(depot.quantity_of(7), Some(3));
        assert!(depot.lookup_by_id(8).is_none());
    }

    #[test]
    fn same_location_ignores_id_and_role() {
        let a = Depot::new("north", 1, "Dock 4", DepotRole::Storage);
        let b = Depot::new("north", 9, "Dock 4", DepotRole::Receiver);
        let c = Depot::new("north", 1, "Dock 5", DepotRole::Storage);
        assert!(a.same_location(&b));
        assert!(!a.same_location(&c));
    }

    #[test]
    fn equality_is_by_id_and_has_no_side_effects() {
        let mut a = Depot::new("north", 1, "Dock 4", DepotRole::Storage);
        a.insert_new("crate", 7, 12.5, 3);
        let b = Depot::new("north", 1, "Dock 4", DepotRole::Storage);
        assert_eq!(a, b);
        // Comparing must not have folded b's (empty) ledger into a or vice versa.
        assert_eq!(a.quantity_of(7), Some(3));
        assert!(b.ledger().is_empty());
    }

    #[test]
    fn reconcile_merges_ledgers_of_matching_sites() {
        let mut a = Depot::new("north", 1, "Dock 4", DepotRole::Storage);
        a.insert_new("p1", 1, 1.0, 5);
        a.insert_new("p2", 2, 1.0, 3);

        let mut b = Depot::new("north", 2, "Dock 4", DepotRole::Storage);
        b.insert_new("p2", 2, 1.0, 7);
        b.insert_new("p3", 3, 1.0, 1);

        a.reconcile(b).unwrap();
        assert_eq!(a.quantity_of(1), Some(5));
        assert_eq!(a.quantity_of(2), Some(7));
        assert_eq!(a.quantity_of(3), Some(1));
    }

    #[test]
    fn reconcile_rejects_different_locations() {
        let mut a = Depot::new("north", 1, "Dock 4", DepotRole::Storage);
        a.insert_new("p1", 1, 1.0, 5);
        let mut b = Depot::new("south", 2, "Dock 9", DepotRole::Storage);
        b.insert_new("p2", 2, 1.0, 7);

        let err = a.reconcile(b).unwrap_err();
        let ReconcileError::LocationMismatch { rejected, .. } = err;
        // Both sides untouched.
        assert_eq!(a.ledger().product_count(), 1);
        assert_eq!(rejected.quantity_of(2), Some(7));
    }
}
