//! End-to-end flows: stocking a depot, reconciling duplicate imports, and
//! snapshotting the network to disk.

use std::fs;

use stock_ledger::domain::{Depot, DepotRole, DistributionNetwork, Product, Route, Transport};
use stock_ledger::util::persistence::{load_network_from, save_network_to};

#[test]
fn stocking_and_lookup() {
    let mut storage = Depot::default();
    assert!(storage.insert(Product::new("apple", 0, 0.5), 5));
    assert!(storage.insert_new("Orange", 5, 10.0, 110));

    assert_eq!(storage.lookup_by_id(0).map(|p| p.name.as_str()), Some("apple"));
    assert_eq!(storage.lookup_by_id(5).map(|p| p.name.as_str()), Some("Orange"));
    assert!(storage.lookup_by_id(3).is_none());

    assert_eq!(storage.quantity_of(0), Some(5));
    assert_eq!(storage.quantity_of(5), Some(110));
}

#[test]
fn duplicate_site_imports_reconcile_into_one_depot() {
    let mut network = DistributionNetwork::new();

    let mut morning = Depot::new("zavod", 0, "addr1", DepotRole::Storage);
    morning.insert_new("apple", 0, 2.0, 2);
    morning.insert_new("orange", 1, 0.5, 6);
    network.add_depot(morning);

    let mut evening = Depot::new("zavod", 10, "addr1", DepotRole::Storage);
    evening.insert_new("orange", 1, 0.5, 9);
    evening.insert_new("lemon", 2, 2.5, 10);
    network.add_depot(evening);

    let receiver = Depot::new("rec1", 100, "addr101", DepotRole::Receiver);
    network.add_depot(receiver);

    network.consolidate();

    assert_eq!(network.depots().len(), 2);
    let site = network.depot_by_id(0).expect("consolidated site survives");
    assert_eq!(site.quantity_of(0), Some(2));
    assert_eq!(site.quantity_of(1), Some(9));
    assert_eq!(site.quantity_of(2), Some(10));
}

#[test]
fn snapshot_round_trip_through_a_file() {
    let mut network = DistributionNetwork::new();
    let mut storage = Depot::new("stor1", 1, "addr1", DepotRole::Storage);
    storage.insert_new("P1", 1, 2.0, 12);
    network.add_depot(storage);
    network.add_depot(Depot::new("rec1", 100, "addr101", DepotRole::Receiver));
    network.add_transport(Transport::new("flatbed", 1, 500.0));
    network.add_route(Route::new(1, 3.5, 1, 100)).unwrap();

    let path = std::env::temp_dir().join(format!(
        "stock_ledger_snapshot_{}_{}.json",
        std::process::id(),
        line!()
    ));
    save_network_to(&network.to_persisted(), &path).unwrap();

    let snapshot = load_network_from(&path).expect("snapshot loads back");
    let mut restored = DistributionNetwork::new();
    restored.apply_persisted(snapshot);

    assert_eq!(restored.depots().len(), 2);
    assert_eq!(restored.depot_by_id(1).unwrap().quantity_of(1), Some(12));
    assert_eq!(restored.routes().len(), 1);
    assert_eq!(restored.transports().len(), 1);

    let _ = fs::remove_file(path);
}
