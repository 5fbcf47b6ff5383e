//! JSON snapshots of the network on disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde_json::Error as SerdeError;

use crate::domain::network::PersistedNetwork;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "StockLedger";
const APP_NAME: &str = "StockLedger";

fn snapshot_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("network.json"))
}

/// Loads the default snapshot, if one exists and parses.
pub fn load_network() -> Option<PersistedNetwork> {
    let path = snapshot_file()?;
    load_network_from(&path)
}

/// Saves to the default snapshot location.
pub fn save_network(network: &PersistedNetwork) -> Result<(), PersistSaveError> {
    let path = snapshot_file().ok_or(PersistSaveError::StorageUnavailable)?;
    save_network_to(network, &path)
}

pub fn load_network_from(path: &Path) -> Option<PersistedNetwork> {
    if !path.exists() {
        println!("[snapshot] No network snapshot at {}", path.display());
        return None;
    }
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<PersistedNetwork>(&content) {
            Ok(network) => {
                println!(
                    "[snapshot] Loaded {} depots, {} routes from {}",
                    network.depots.len(),
                    network.routes.len(),
                    path.display()
                );
                Some(network)
            }
            Err(e) => {
                println!("[snapshot] Failed to parse snapshot: {e}");
                None
            }
        },
        Err(e) => {
            println!("[snapshot] Failed to read snapshot: {e}");
            None
        }
    }
}

pub fn save_network_to(network: &PersistedNetwork, path: &Path) -> Result<(), PersistSaveError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(network)?;
    fs::write(path, json)?;
    println!(
        "[snapshot] Saved {} depots, {} routes to {}",
        network.depots.len(),
        network.routes.len(),
        path.display()
    );
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum PersistSaveError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}
