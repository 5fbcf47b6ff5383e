//! Vehicle records used to move stock between depots.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A vehicle available for deliveries. Pure data; identity is the numeric
/// `id`, content comparison goes through [`Transport::same_model`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Transport {
    pub id: i32,
    pub name: String,
    /// Maximum load the vehicle can lift, in the same unit as product weight.
    pub weight_lift: f32,
    /// Relative fuel cost factor used when routes are priced.
    pub fuel_cost: f32,
    #[serde(default)]
    pub annotations: HashMap<String, String>,
}

impl Transport {
    pub fn new(name: impl Into<String>, id: i32, weight_lift: f32) -> Self {
        Self {
            id,
            name: name.into(),
            weight_lift,
            fuel_cost: 1.0,
            annotations: HashMap::new(),
        }
    }

    /// True if the two records describe the same vehicle model: matching
    /// name and lift capacity, regardless of id.
    pub fn same_model(&self, other: &Transport) -> bool {
        self.name == other.name && self.weight_lift == other.weight_lift
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self::new("Unnamed", -1, -1.0)
    }
}

impl PartialEq for Transport {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Transport {}

impl PartialOrd for Transport {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Transport {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_transport_is_unassigned() {
        let transport = Transport::default();
        assert_eq!(transport.id, -1);
        assert_eq!(transport.name, "Unnamed");
        assert_eq!(transport.weight_lift, -1.0);
        assert_eq!(transport.fuel_cost, 1.0);
    }

    #[test]
    fn ordering_by_id_and_model_matching_are_independent() {
        let a = Transport::new("flatbed", 1, 500.0);
        let b = Transport::new("flatbed", 2, 500.0);
        assert!(a < b);
        assert_ne!(a, b);
        assert!(a.same_model(&b));
        assert!(!a.same_model(&Transport::new("flatbed", 3, 750.0)));
    }
}
