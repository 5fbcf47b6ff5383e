//! Aggregate network state: depots, transports, routes, and snapshots.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::depot::{Depot, DepotRole};
use super::ledger::StockLedger;
use super::product::Product;
use super::route::{Route, RouteMatrix};
use super::transport::Transport;

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("route {route_id} references unknown storage depot {depot_id}")]
    UnknownStorage { route_id: i32, depot_id: i32 },
    #[error("route {route_id} references unknown receiver depot {depot_id}")]
    UnknownReceiver { route_id: i32, depot_id: i32 },
    #[error("route {route_id} endpoint {depot_id} is a {actual} depot, expected {expected}")]
    RoleMismatch {
        route_id: i32,
        depot_id: i32,
        expected: &'static str,
        actual: &'static str,
    },
}

/// The whole distribution network for one planning session.
#[derive(Clone, Debug, Default)]
pub struct DistributionNetwork {
    depots: Vec<Depot>,
    transports: Vec<Transport>,
    routes: Vec<Route>,
}

impl DistributionNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a depot. Returns `false` when a depot with the same id is
    /// already present (the existing one stays).
    pub fn add_depot(&mut self, depot: Depot) -> bool {
        if self.depot_by_id(depot.id).is_some() {
            return false;
        }
        self.depots.push(depot);
        true
    }

    pub fn depot_by_id(&self, id: i32) -> Option<&Depot> {
        self.depots.iter().find(|depot| depot.id == id)
    }

    pub fn depot_by_id_mut(&mut self, id: i32) -> Option<&mut Depot> {
        self.depots.iter_mut().find(|depot| depot.id == id)
    }

    pub fn depots(&self) -> &[Depot] {
        &self.depots
    }

    pub fn add_transport(&mut self, transport: Transport) {
        self.transports.push(transport);
    }

    pub fn transports(&self) -> &[Transport] {
        &self.transports
    }

    /// Registers a delivery leg after checking both endpoints: they must
    /// name known depots, with the storage endpoint on a storage-role depot
    /// and the receiver endpoint on a receiver-role one.
    pub fn add_route(&mut self, route: Route) -> Result<(), NetworkError> {
        self.check_endpoint(&route, route.storage_id, DepotRole::Storage)?;
        self.check_endpoint(&route, route.receiver_id, DepotRole::Receiver)?;
        self.routes.push(route);
        Ok(())
    }

    fn check_endpoint(&self, route: &Route, depot_id: i32, expected: DepotRole) -> Result<(), NetworkError> {
        let depot = self.depot_by_id(depot_id).ok_or(match expected {
            DepotRole::Storage => NetworkError::UnknownStorage {
                route_id: route.id,
                depot_id,
            },
            DepotRole::Receiver => NetworkError::UnknownReceiver {
                route_id: route.id,
                depot_id,
            },
        })?;
        if depot.role != expected {
            return Err(NetworkError::RoleMismatch {
                route_id: route.id,
                depot_id,
                expected: expected.label(),
                actual: depot.role.label(),
            });
        }
        Ok(())
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Folds together depots that describe the same physical site (matched
    /// by name + address), keeping the first record of each site and merging
    /// the later ledgers into it. Depots at distinct sites are untouched.
    pub fn consolidate(&mut self) {
        let mut kept: Vec<Depot> = Vec::with_capacity(self.depots.len());
        for depot in self.depots.drain(..) {
            match kept.iter_mut().find(|existing| existing.same_location(&depot)) {
                Some(existing) => existing.absorb(depot),
                None => kept.push(depot),
            }
        }
        self.depots = kept;
    }

    /// Builds the storage × receiver route grid for one product, from the
    /// legs whose storage endpoint actually stocks it.
    pub fn route_matrix_for(&self, product: &Product) -> RouteMatrix {
        let mut matrix = RouteMatrix::new(product.clone());
        for route in &self.routes {
            let stocked = self
                .depot_by_id(route.storage_id)
                .and_then(|depot| depot.lookup_by_id(product.id))
                .is_some();
            if stocked {
                matrix.set_at(route.storage_id, route.receiver_id, route.clone());
            }
        }
        matrix
    }

    pub fn to_persisted(&self) -> PersistedNetwork {
        PersistedNetwork {
            depots: self.depots.iter().map(PersistedDepot::from_depot).collect(),
            transports: self.transports.clone(),
            routes: self.routes.clone(),
        }
    }

    pub fn apply_persisted(&mut self, persisted: PersistedNetwork) {
        self.depots = persisted.depots.into_iter().map(PersistedDepot::into_depot).collect();
        self.transports = persisted.transports;
        self.routes = persisted.routes;
    }
}

/// One ledger entry flattened for the snapshot file. JSON object keys must
/// be strings, so the ledger map is stored as a list of pairs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StockEntry {
    pub product: Product,
    pub quantity: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PersistedDepot {
    pub name: String,
    pub id: i32,
    pub address: String,
    #[serde(default)]
    pub role: DepotRole,
    #[serde(default)]
    pub annotations: HashMap<String, String>,
    pub stock: Vec<StockEntry>,
}

impl PersistedDepot {
    fn from_depot(depot: &Depot) -> Self {
        Self {
            name: depot.name.clone(),
            id: depot.id,
            address: depot.address.clone(),
            role: depot.role,
            annotations: depot.annotations.clone(),
            stock: depot
                .ledger()
                .iter()
                .map(|(product, quantity)| StockEntry {
                    product: product.clone(),
                    quantity,
                })
                .collect(),
        }
    }

    fn into_depot(self) -> Depot {
        let mut depot = Depot::new(self.name, self.id, self.address, self.role);
        depot.annotations = self.annotations;
        let ledger: &mut StockLedger = depot.ledger_mut();
        for entry in self.stock {
            ledger.insert(entry.product, entry.quantity);
        }
        depot
    }
}

/// Snapshot of the whole network, written to disk as JSON.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PersistedNetwork {
    pub depots: Vec<PersistedDepot>,
    #[serde(default)]
    pub transports: Vec<Transport>,
    #[serde(default)]
    pub routes: Vec<Route>,
}
