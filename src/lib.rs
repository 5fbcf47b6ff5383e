//! Stock ledger core for a logistics distribution network.
//!
//! Models products, the per-location quantity ledgers that track them, the
//! storage/receiver depots owning those ledgers, and the routes and
//! transports connecting them. Ledgers reconcile by consuming merge: the
//! destination ends up with the union of both stocks, keeping the larger
//! quantity per product.

pub mod domain;
pub mod util;

pub use domain::{
    Depot, DepotRole, DistributionNetwork, NetworkError, PersistedNetwork, Product,
    ReconcileError, Route, RouteMatrix, StockLedger, Transport,
};
