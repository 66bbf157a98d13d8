use chrono::{DateTime, Utc};

use gudang_core::{PartId, TransactionId};
use gudang_inventory::Part;
use gudang_ledger::TransactionRecord;

use crate::error::StoreError;

/// Current-state part collection, keyed by id with a secondary unique
/// barcode lookup.
pub trait InventoryStore: Send + Sync {
    fn get(&self, id: PartId) -> Result<Option<Part>, StoreError>;
    fn find_by_barcode(&self, barcode: &str) -> Result<Option<Part>, StoreError>;
    /// Trimmed, case-insensitive name match.
    fn find_by_name(&self, name: &str) -> Result<Option<Part>, StoreError>;
    fn list(&self) -> Result<Vec<Part>, StoreError>;
    fn put(&self, part: Part) -> Result<(), StoreError>;
    fn delete(&self, id: PartId) -> Result<(), StoreError>;
}

/// Append-only stock-movement log. There is deliberately no update or
/// delete on this interface.
pub trait TransactionLedger: Send + Sync {
    fn append(&self, record: TransactionRecord) -> Result<TransactionId, StoreError>;
    fn records(&self) -> Result<Vec<TransactionRecord>, StoreError>;
    /// Records with `from <= timestamp < to`.
    fn records_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<TransactionRecord>, StoreError>;
    fn record(&self, id: TransactionId) -> Result<Option<TransactionRecord>, StoreError>;
}

/// Part mutations and the matching ledger entry, applied as one unit.
#[derive(Debug, Clone)]
pub struct StockCommit {
    pub upserts: Vec<Part>,
    pub deletes: Vec<PartId>,
    pub record: TransactionRecord,
}

impl StockCommit {
    pub fn upsert(part: Part, record: TransactionRecord) -> Self {
        Self {
            upserts: vec![part],
            deletes: Vec::new(),
            record,
        }
    }

    pub fn delete(id: PartId, record: TransactionRecord) -> Self {
        Self {
            upserts: Vec::new(),
            deletes: vec![id],
            record,
        }
    }
}

/// Combined store: both collections plus the atomic commit.
pub trait WarehouseStore: InventoryStore + TransactionLedger {
    /// Apply every part upsert/delete and append the record atomically:
    /// either the whole commit is visible (and persisted) or none of it is.
    fn apply(&self, commit: StockCommit) -> Result<(), StoreError>;
}
