use chrono::{DateTime, Utc};

use gudang_core::{PartId, TransactionId};
use gudang_inventory::{normalize_name, Part};
use gudang_ledger::TransactionRecord;

use crate::traits::StockCommit;

/// Plain in-memory form of the two collections, shared by both adapters.
///
/// Parts keep insertion order; the ledger keeps append order.
#[derive(Debug, Clone, Default)]
pub(crate) struct WarehouseState {
    pub(crate) parts: Vec<Part>,
    pub(crate) transactions: Vec<TransactionRecord>,
}

impl WarehouseState {
    pub(crate) fn get(&self, id: PartId) -> Option<Part> {
        self.parts.iter().find(|p| p.id == id).cloned()
    }

    pub(crate) fn find_by_barcode(&self, barcode: &str) -> Option<Part> {
        self.parts
            .iter()
            .find(|p| p.barcode.as_deref() == Some(barcode))
            .cloned()
    }

    pub(crate) fn find_by_name(&self, name: &str) -> Option<Part> {
        let wanted = normalize_name(name);
        self.parts
            .iter()
            .find(|p| normalize_name(&p.name) == wanted)
            .cloned()
    }

    pub(crate) fn upsert(&mut self, part: Part) {
        match self.parts.iter_mut().find(|p| p.id == part.id) {
            Some(existing) => *existing = part,
            None => self.parts.push(part),
        }
    }

    pub(crate) fn delete(&mut self, id: PartId) {
        self.parts.retain(|p| p.id != id);
    }

    pub(crate) fn append(&mut self, record: TransactionRecord) -> TransactionId {
        let id = record.id;
        self.transactions.push(record);
        id
    }

    pub(crate) fn record(&self, id: TransactionId) -> Option<TransactionRecord> {
        self.transactions.iter().find(|r| r.id == id).cloned()
    }

    pub(crate) fn records_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Vec<TransactionRecord> {
        self.transactions
            .iter()
            .filter(|r| from <= r.timestamp && r.timestamp < to)
            .cloned()
            .collect()
    }

    pub(crate) fn apply(&mut self, commit: StockCommit) {
        for part in commit.upserts {
            self.upsert(part);
        }
        for id in commit.deletes {
            self.delete(id);
        }
        self.append(commit.record);
    }
}
