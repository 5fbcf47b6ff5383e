//! Product identity and content comparison.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Id given to a product that has not been assigned one yet.
pub const UNASSIGNED_ID: i32 = -1;

/// A product moving through the distribution network.
///
/// Identity (and therefore ledger-key ordering) is the numeric `id` alone.
/// Whether two entries describe the same physical goods is a separate
/// question answered by [`Product::same_goods`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub weight: f32,
    /// Open-ended key/value annotations carried alongside the record
    /// (supplier codes, handling notes, import metadata).
    #[serde(default)]
    pub annotations: HashMap<String, String>,
}

impl Product {
    pub fn new(name: impl Into<String>, id: i32, weight: f32) -> Self {
        Self {
            id,
            name: name.into(),
            weight,
            annotations: HashMap::new(),
        }
    }

    /// True if the two records describe the same goods: matching name and
    /// weight. Independent of `id` — two listings imported from different
    /// sources may carry distinct ids for identical goods.
    pub fn same_goods(&self, other: &Product) -> bool {
        self.name == other.name && self.weight == other.weight
    }
}

impl Default for Product {
    fn default() -> Self {
        Self::new("Unnamed", UNASSIGNED_ID, -1.0)
    }
}

// Identity relation by id only, so map-key ordering and equality agree.
impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}

impl PartialOrd for Product {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Product {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unassigned() {
        let product = Product::default();
        assert_eq!(product.id, UNASSIGNED_ID);
        assert_eq!(product.name, "Unnamed");
        assert_eq!(product.weight, -1.0);
        assert!(product.annotations.is_empty());
    }

    #[test]
    fn ordering_follows_id_regardless_of_content() {
        let light = Product::new("anvil", 1, 120.0);
        let heavy = Product::new("feather", 2, 0.01);
        assert!(light < heavy);
        assert!(heavy > light);
        assert!(!(light < light));
    }

    #[test]
    fn same_goods_is_independent_of_id() {
        let a = Product::new("a", 1, 1.0);
        let b = Product::new("a", 2, 1.0);
        // Same goods, but distinct identities with a strict order between them.
        assert!(a.same_goods(&b));
        assert_ne!(a, b);
        assert!(a < b);
    }

    #[test]
    fn same_goods_compares_name_and_weight() {
        let a = Product::new("apple", 0, 0.5);
        assert!(!a.same_goods(&Product::new("apple", 0, 0.6)));
        assert!(!a.same_goods(&Product::new("pear", 0, 0.5)));
        assert!(a.same_goods(&Product::new("apple", 7, 0.5)));
    }
}
