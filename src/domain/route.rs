//! Routes between depots and the per-product route grid.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::product::Product;

/// A delivery leg from a storage depot to a receiver depot.
///
/// Endpoints are depot ids rather than references, so routes can be stored,
/// serialized, and validated against whatever depot set is current.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Route {
    pub id: i32,
    /// Leg length in network distance units.
    pub length: f32,
    pub storage_id: i32,
    pub receiver_id: i32,
    /// Raw provider payload the leg was built from (distance, duration,
    /// polyline), kept verbatim for later inspection.
    #[serde(default)]
    pub input_data: HashMap<String, String>,
}

impl Route {
    pub fn new(id: i32, length: f32, storage_id: i32, receiver_id: i32) -> Self {
        Self {
            id,
            length,
            storage_id,
            receiver_id,
            input_data: HashMap::new(),
        }
    }

    /// True if both legs connect the same pair of depots, regardless of id
    /// or measured length.
    pub fn same_endpoints(&self, other: &Route) -> bool {
        self.storage_id == other.storage_id && self.receiver_id == other.receiver_id
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::new(-1, -1.0, -1, -1)
    }
}

impl PartialEq for Route {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Route {}

impl PartialOrd for Route {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Route {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

/// Storage × receiver route grid for one product.
///
/// Axes keep insertion order; cells are keyed by the (storage, receiver)
/// depot-id pair. Missing cells are `None` — there is no placeholder route.
#[derive(Clone, Debug, Default)]
pub struct RouteMatrix {
    product: Product,
    storage_ids: Vec<i32>,
    receiver_ids: Vec<i32>,
    cells: HashMap<(i32, i32), Route>,
}

impl RouteMatrix {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            storage_ids: Vec::new(),
            receiver_ids: Vec::new(),
            cells: HashMap::new(),
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn add_storage(&mut self, storage_id: i32) {
        if !self.storage_ids.contains(&storage_id) {
            self.storage_ids.push(storage_id);
        }
    }

    pub fn add_receiver(&mut self, receiver_id: i32) {
        if !self.receiver_ids.contains(&receiver_id) {
            self.receiver_ids.push(receiver_id);
        }
    }

    /// Places a route in the grid, registering both endpoints on their axes.
    /// A later route for the same pair replaces the earlier one.
    pub fn set_at(&mut self, storage_id: i32, receiver_id: i32, route: Route) {
        self.add_storage(storage_id);
        self.add_receiver(receiver_id);
        self.cells.insert((storage_id, receiver_id), route);
    }

    pub fn get_at(&self, storage_id: i32, receiver_id: i32) -> Option<&Route> {
        self.cells.get(&(storage_id, receiver_id))
    }

    /// Cell addressed by axis positions instead of depot ids.
    pub fn get_by_indices(&self, storage_index: usize, receiver_index: usize) -> Option<&Route> {
        let storage_id = *self.storage_ids.get(storage_index)?;
        let receiver_id = *self.receiver_ids.get(receiver_index)?;
        self.get_at(storage_id, receiver_id)
    }

    pub fn rows(&self) -> usize {
        self.storage_ids.len()
    }

    pub fn columns(&self) -> usize {
        self.receiver_ids.len()
    }

    pub fn storage_ids(&self) -> &[i32] {
        &self.storage_ids
    }

    pub fn receiver_ids(&self) -> &[i32] {
        &self.receiver_ids
    }
}
