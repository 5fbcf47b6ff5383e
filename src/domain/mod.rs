//! Domain model for the distribution network lives here.

pub mod depot;
pub mod ledger;
pub mod network;
pub mod product;
pub mod route;
pub mod transport;

pub use depot::{Depot, DepotRole, ReconcileError};
pub use ledger::{StockLedger, INVALID_PRODUCT_ID};
pub use network::{
    DistributionNetwork, NetworkError, PersistedDepot, PersistedNetwork, StockEntry,
};
pub use product::{Product, UNASSIGNED_ID};
pub use route::{Route, RouteMatrix};
pub use transport::Transport;
