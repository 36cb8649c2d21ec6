// src/storage/file.rs
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::{info, warn};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::models::server::ServerRecord;
use crate::storage::error::StoreError;
use crate::storage::memory::ServerStore;

/// What a read of the data file found.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(ServerStore),
    Missing,
    Corrupt(String),
}

pub fn load_outcome(path: &Path) -> LoadOutcome {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return LoadOutcome::Missing,
        Err(e) => return LoadOutcome::Corrupt(e.to_string()),
    };

    match serde_json::from_str::<Vec<ServerRecord>>(&text) {
        Ok(records) => LoadOutcome::Loaded(ServerStore::from_records(records)),
        Err(e) => LoadOutcome::Corrupt(e.to_string()),
    }
}

/// Reads the fleet from `path`. Never fails: a missing or corrupt file yields an empty store.
pub fn load(path: &Path) -> ServerStore {
    match load_outcome(path) {
        LoadOutcome::Loaded(store) => {
            info!("Loaded {} server(s) from {}", store.len(), path.display());
            store
        }
        LoadOutcome::Missing => {
            info!("No data file at {}, starting with an empty fleet", path.display());
            ServerStore::new()
        }
        LoadOutcome::Corrupt(reason) => {
            warn!("Ignoring unreadable data file {}: {}", path.display(), reason);
            ServerStore::new()
        }
    }
}

/// Overwrites `path` with the whole fleet as a 4-space indented JSON array.
pub fn save(path: &Path, store: &ServerStore) -> Result<(), StoreError> {
    let file = fs::File::create(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    store.records().serialize(&mut serializer)?;

    writer.flush().map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Saved {} server(s) to {}", store.len(), path.display());
    Ok(())
}
