use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gudang_core::{PartId, TransactionId};
use gudang_inventory::Part;
use gudang_ledger::TransactionRecord;

use crate::error::StoreError;
use crate::state::WarehouseState;
use crate::traits::{InventoryStore, StockCommit, TransactionLedger, WarehouseStore};

/// Current schema version of the data file.
const SCHEMA_VERSION: u32 = 1;

/// On-disk layout: one document with the two collections.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot {
    schema_version: u32,
    parts: Vec<Part>,
    transactions: Vec<TransactionRecord>,
}

/// Store persisting to a single JSON document.
///
/// A missing file means "no data yet". Every write serializes the full
/// snapshot to a sibling temp file and renames it into place, so a commit
/// is either fully on disk or not at all.
#[derive(Debug)]
pub struct JsonFileWarehouseStore {
    path: PathBuf,
    inner: RwLock<WarehouseState>,
}

impl JsonFileWarehouseStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let state = load(&path)?;
        Ok(Self {
            path,
            inner: RwLock::new(state),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, WarehouseState>, StoreError> {
        self.inner.read().map_err(|_| StoreError::Poisoned)
    }

    /// Run a mutation against a copy of the state, persist it, then swap it
    /// in. Memory only changes once the snapshot is safely on disk.
    fn mutate<T>(
        &self,
        f: impl FnOnce(&mut WarehouseState) -> T,
    ) -> Result<T, StoreError> {
        let mut guard = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let mut next = guard.clone();
        let out = f(&mut next);
        persist(&self.path, &next)?;
        *guard = next;
        Ok(out)
    }
}

fn load(path: &Path) -> Result<WarehouseState, StoreError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "data file absent, starting empty");
        return Ok(WarehouseState::default());
    }
    let raw = fs::read_to_string(path)?;
    let snapshot: Snapshot = serde_json::from_str(&raw)?;
    if snapshot.schema_version > SCHEMA_VERSION {
        return Err(StoreError::UnsupportedSchema {
            found: snapshot.schema_version,
            supported: SCHEMA_VERSION,
        });
    }
    Ok(WarehouseState {
        parts: snapshot.parts,
        transactions: snapshot.transactions,
    })
}

fn persist(path: &Path, state: &WarehouseState) -> Result<(), StoreError> {
    let snapshot = Snapshot {
        schema_version: SCHEMA_VERSION,
        parts: state.parts.clone(),
        transactions: state.transactions.clone(),
    };
    let raw = serde_json::to_string_pretty(&snapshot)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, raw)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

impl InventoryStore for JsonFileWarehouseStore {
    fn get(&self, id: PartId) -> Result<Option<Part>, StoreError> {
        Ok(self.read()?.get(id))
    }

    fn find_by_barcode(&self, barcode: &str) -> Result<Option<Part>, StoreError> {
        Ok(self.read()?.find_by_barcode(barcode))
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Part>, StoreError> {
        Ok(self.read()?.find_by_name(name))
    }

    fn list(&self) -> Result<Vec<Part>, StoreError> {
        Ok(self.read()?.parts.clone())
    }

    fn put(&self, part: Part) -> Result<(), StoreError> {
        self.mutate(|state| state.upsert(part))
    }

    fn delete(&self, id: PartId) -> Result<(), StoreError> {
        self.mutate(|state| state.delete(id))
    }
}

impl TransactionLedger for JsonFileWarehouseStore {
    fn append(&self, record: TransactionRecord) -> Result<TransactionId, StoreError> {
        self.mutate(|state| state.append(record))
    }

    fn records(&self) -> Result<Vec<TransactionRecord>, StoreError> {
        Ok(self.read()?.transactions.clone())
    }

    fn records_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<TransactionRecord>, StoreError> {
        Ok(self.read()?.records_between(from, to))
    }

    fn record(&self, id: TransactionId) -> Result<Option<TransactionRecord>, StoreError> {
        Ok(self.read()?.record(id))
    }
}

impl WarehouseStore for JsonFileWarehouseStore {
    fn apply(&self, commit: StockCommit) -> Result<(), StoreError> {
        self.mutate(|state| state.apply(commit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gudang_inventory::{PartCategory, PartInput};
    use gudang_ledger::{TransactionItem, TransactionKind};

    fn part(name: &str) -> Part {
        Part::create(PartInput {
            name: name.to_string(),
            quantity: 7,
            price: 65_000,
            storage_location: "Rak Oli".to_string(),
            category: PartCategory::FluidsAndChemicals,
            min_stock: 3,
            barcode: Some("899000111".to_string()),
        })
        .unwrap()
    }

    #[test]
    fn missing_file_is_an_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileWarehouseStore::open(dir.path().join("gudang.json")).unwrap();
        assert!(store.list().unwrap().is_empty());
        assert!(store.records().unwrap().is_empty());
    }

    #[test]
    fn commits_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gudang.json");

        let p = part("Oli Mesin Federal Oil");
        let record = TransactionRecord::new(
            TransactionKind::In,
            vec![TransactionItem {
                part_id: p.id,
                part_name: p.name.clone(),
                quantity: 7,
                price: p.price,
            }],
            "new part added",
        )
        .unwrap();
        let record_id = record.id;

        {
            let store = JsonFileWarehouseStore::open(&path).unwrap();
            store.apply(StockCommit::upsert(p.clone(), record)).unwrap();
        }

        let reopened = JsonFileWarehouseStore::open(&path).unwrap();
        assert_eq!(reopened.get(p.id).unwrap(), Some(p));
        let stored = reopened.record(record_id).unwrap().unwrap();
        assert_eq!(stored.total_amount, 7 * 65_000);
    }

    #[test]
    fn document_carries_schema_version_and_both_collections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gudang.json");

        let store = JsonFileWarehouseStore::open(&path).unwrap();
        store.put(part("Kampas Kopling Set")).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(doc["schemaVersion"], 1);
        assert!(doc["parts"].is_array());
        assert!(doc["transactions"].is_array());
    }

    #[test]
    fn newer_schema_versions_are_refused() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gudang.json");
        fs::write(
            &path,
            r#"{"schemaVersion": 99, "parts": [], "transactions": []}"#,
        )
        .unwrap();

        let err = JsonFileWarehouseStore::open(&path).unwrap_err();
        assert!(matches!(err, StoreError::UnsupportedSchema { found: 99, .. }));
    }

    #[test]
    fn corrupt_document_is_an_error_not_a_reset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gudang.json");
        fs::write(&path, "not json").unwrap();

        let err = JsonFileWarehouseStore::open(&path).unwrap_err();
        assert!(matches!(err, StoreError::Serde(_)));
    }
}
