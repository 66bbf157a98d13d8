use std::sync::RwLock;

use chrono::{DateTime, Utc};

use gudang_core::{PartId, TransactionId};
use gudang_inventory::Part;
use gudang_ledger::TransactionRecord;

use crate::error::StoreError;
use crate::state::WarehouseState;
use crate::traits::{InventoryStore, StockCommit, TransactionLedger, WarehouseStore};

/// In-memory store for dev/tests.
#[derive(Debug, Default)]
pub struct InMemoryWarehouseStore {
    inner: RwLock<WarehouseState>,
}

impl InMemoryWarehouseStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, WarehouseState>, StoreError> {
        self.inner.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, WarehouseState>, StoreError> {
        self.inner.write().map_err(|_| StoreError::Poisoned)
    }
}

impl InventoryStore for InMemoryWarehouseStore {
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
        self.write()?.upsert(part);
        Ok(())
    }

    fn delete(&self, id: PartId) -> Result<(), StoreError> {
        self.write()?.delete(id);
        Ok(())
    }
}

impl TransactionLedger for InMemoryWarehouseStore {
    fn append(&self, record: TransactionRecord) -> Result<TransactionId, StoreError> {
        Ok(self.write()?.append(record))
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

impl WarehouseStore for InMemoryWarehouseStore {
    fn apply(&self, commit: StockCommit) -> Result<(), StoreError> {
        self.write()?.apply(commit);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gudang_inventory::{PartCategory, PartInput};
    use gudang_ledger::{TransactionItem, TransactionKind};

    fn part(name: &str, barcode: Option<&str>) -> Part {
        Part::create(PartInput {
            name: name.to_string(),
            quantity: 10,
            price: 1_000,
            storage_location: "Shelf A-1".to_string(),
            category: PartCategory::EngineParts,
            min_stock: 2,
            barcode: barcode.map(str::to_string),
        })
        .unwrap()
    }

    fn record_for(part: &Part, quantity: u32) -> TransactionRecord {
        TransactionRecord::new(
            TransactionKind::Out,
            vec![TransactionItem {
                part_id: part.id,
                part_name: part.name.clone(),
                quantity,
                price: part.price,
            }],
            "outgoing/sale transaction",
        )
        .unwrap()
    }

    #[test]
    fn put_then_get_and_secondary_lookups() {
        let store = InMemoryWarehouseStore::new();
        let p = part("Spark Plug NGK CR7HSA", Some("8991234"));
        store.put(p.clone()).unwrap();

        assert_eq!(store.get(p.id).unwrap(), Some(p.clone()));
        assert_eq!(store.find_by_barcode("8991234").unwrap(), Some(p.clone()));
        assert_eq!(store.find_by_name(" spark plug ngk cr7hsa ").unwrap(), Some(p));
        assert_eq!(store.find_by_barcode("nope").unwrap(), None);
    }

    #[test]
    fn rereads_without_writes_are_identical() {
        let store = InMemoryWarehouseStore::new();
        store.put(part("Oil Filter", None)).unwrap();
        store.put(part("Brake Pads Front Set", None)).unwrap();
        assert_eq!(store.list().unwrap(), store.list().unwrap());
    }

    #[test]
    fn apply_commits_part_and_record_together() {
        let store = InMemoryWarehouseStore::new();
        let mut p = part("Oil Filter", None);
        store.put(p.clone()).unwrap();

        let record = record_for(&p, 4);
        let record_id = record.id;
        p.quantity -= 4;
        store.apply(StockCommit::upsert(p.clone(), record)).unwrap();

        assert_eq!(store.get(p.id).unwrap().unwrap().quantity, 6);
        assert!(store.record(record_id).unwrap().is_some());
        assert_eq!(store.records().unwrap().len(), 1);
    }

    #[test]
    fn records_between_is_half_open() {
        let store = InMemoryWarehouseStore::new();
        let p = part("Chain Lube Motul C2+", None);
        let record = record_for(&p, 1);
        let ts = record.timestamp;
        store.append(record).unwrap();

        assert_eq!(store.records_between(ts, ts).unwrap().len(), 0);
        assert_eq!(
            store
                .records_between(ts, ts + chrono::Duration::seconds(1))
                .unwrap()
                .len(),
            1
        );
    }
}
