use std::sync::Arc;

use serde::{Deserialize, Serialize};

use gudang_core::{DomainError, PartId};
use gudang_inventory::{Part, PartInput};
use gudang_ledger::{TransactionItem, TransactionKind, TransactionRecord};
use gudang_store::{InventoryStore, StockCommit, WarehouseStore};

use crate::error::WarehouseError;
use crate::notes;

/// Warning raised when a part's quantity falls to or below its minimum.
///
/// Alerts never block the operation that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LowStockAlert {
    pub part_id: PartId,
    pub name: String,
    pub remaining: u32,
    pub min_stock: u32,
}

impl LowStockAlert {
    fn check(part: &Part) -> Option<Self> {
        part.is_low_stock().then(|| Self {
            part_id: part.id,
            name: part.name.clone(),
            remaining: part.quantity,
            min_stock: part.min_stock,
        })
    }
}

/// Outcome of [`WarehouseService::add_part`].
#[derive(Debug, Clone)]
pub struct PartAdded {
    pub part: Part,
    /// True when the input merged into an existing part by name.
    pub restocked: bool,
    pub record: TransactionRecord,
    pub low_stock: Vec<LowStockAlert>,
}

/// Outcome of [`WarehouseService::update_part`].
#[derive(Debug, Clone)]
pub struct PartUpdated {
    pub part: Part,
    /// Absent when the update left the quantity unchanged.
    pub record: Option<TransactionRecord>,
    pub low_stock: Vec<LowStockAlert>,
}

/// Outcome of [`WarehouseService::delete_part`].
#[derive(Debug, Clone)]
pub struct PartDeleted {
    pub part: Part,
    pub record: TransactionRecord,
}

/// One requested line of an outgoing batch.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutgoingLine {
    pub part_id: PartId,
    pub quantity: u32,
}

/// Outcome of [`WarehouseService::create_outgoing`].
#[derive(Debug, Clone)]
pub struct OutgoingCommitted {
    pub record: TransactionRecord,
    pub low_stock: Vec<LowStockAlert>,
}

/// The reconciliation core: validates a mutation, applies it to the
/// inventory and appends the matching ledger record in one commit.
#[derive(Clone)]
pub struct WarehouseService {
    store: Arc<dyn WarehouseStore>,
}

impl WarehouseService {
    pub fn new(store: Arc<dyn WarehouseStore>) -> Self {
        Self { store }
    }

    /// Read access for presentation-layer queries.
    pub fn store(&self) -> &Arc<dyn WarehouseStore> {
        &self.store
    }

    /// Add a part, or restock an existing one when the (trimmed,
    /// case-insensitive) name already exists. Either way exactly one `in`
    /// record lands in the ledger.
    pub fn add_part(&self, input: PartInput) -> Result<PartAdded, WarehouseError> {
        input.validate()?;

        if let Some(barcode) = input.normalized_barcode() {
            if self.store.find_by_barcode(&barcode)?.is_some() {
                return Err(DomainError::duplicate_barcode(barcode).into());
            }
        }

        if let Some(existing) = self.store.find_by_name(&input.name)? {
            return self.restock(existing, input);
        }

        let part = Part::create(input)?;
        let record = TransactionRecord::new(
            TransactionKind::In,
            vec![TransactionItem {
                part_id: part.id,
                part_name: part.name.clone(),
                quantity: part.quantity,
                price: part.price,
            }],
            notes::NEW_PART,
        )?;
        let low_stock = LowStockAlert::check(&part).into_iter().collect::<Vec<_>>();

        self.store
            .apply(StockCommit::upsert(part.clone(), record.clone()))?;
        self.warn_low_stock(&low_stock);

        tracing::info!(part = %part.name, quantity = part.quantity, "part added");
        Ok(PartAdded {
            part,
            restocked: false,
            record,
            low_stock,
        })
    }

    fn restock(&self, mut part: Part, input: PartInput) -> Result<PartAdded, WarehouseError> {
        part.quantity = part
            .quantity
            .checked_add(input.quantity)
            .ok_or_else(|| DomainError::validation("quantity overflow"))?;
        part.price = input.price;
        part.storage_location = input.storage_location.trim().to_string();
        part.category = input.category;
        part.min_stock = input.min_stock;
        part.barcode = input.normalized_barcode();

        let record = TransactionRecord::new(
            TransactionKind::In,
            vec![TransactionItem {
                part_id: part.id,
                part_name: part.name.clone(),
                quantity: input.quantity,
                price: part.price,
            }],
            notes::RESTOCK,
        )?;
        let low_stock = LowStockAlert::check(&part).into_iter().collect::<Vec<_>>();

        self.store
            .apply(StockCommit::upsert(part.clone(), record.clone()))?;
        self.warn_low_stock(&low_stock);

        tracing::info!(part = %part.name, added = input.quantity, "existing part restocked");
        Ok(PartAdded {
            part,
            restocked: true,
            record,
            low_stock,
        })
    }

    /// Full field update. A quantity delta produces one `in`/`out`
    /// adjustment record for `abs(delta)`; an unchanged quantity produces
    /// no record at all.
    pub fn update_part(&self, id: PartId, input: PartInput) -> Result<PartUpdated, WarehouseError> {
        input.validate()?;

        let current = self.store.get(id)?.ok_or(DomainError::NotFound)?;

        let barcode = input.normalized_barcode();
        if let Some(barcode) = &barcode {
            if let Some(other) = self.store.find_by_barcode(barcode)? {
                if other.id != id {
                    return Err(DomainError::duplicate_barcode(barcode.clone()).into());
                }
            }
        }

        let part = Part {
            id,
            name: input.name.trim().to_string(),
            quantity: input.quantity,
            price: input.price,
            storage_location: input.storage_location.trim().to_string(),
            category: input.category,
            min_stock: input.min_stock,
            barcode,
        };

        let delta = i64::from(input.quantity) - i64::from(current.quantity);
        let record = if delta != 0 {
            let kind = if delta > 0 {
                TransactionKind::In
            } else {
                TransactionKind::Out
            };
            Some(TransactionRecord::new(
                kind,
                vec![TransactionItem {
                    part_id: id,
                    part_name: part.name.clone(),
                    quantity: delta.unsigned_abs() as u32,
                    price: part.price,
                }],
                notes::ADJUSTMENT,
            )?)
        } else {
            None
        };
        let low_stock = LowStockAlert::check(&part).into_iter().collect::<Vec<_>>();

        match &record {
            Some(record) => self
                .store
                .apply(StockCommit::upsert(part.clone(), record.clone()))?,
            None => self.store.put(part.clone())?,
        }
        self.warn_low_stock(&low_stock);

        tracing::info!(part = %part.name, delta, "part updated");
        Ok(PartUpdated {
            part,
            record,
            low_stock,
        })
    }

    /// Remove a part, closing it out with one `out` record covering the
    /// full remaining quantity.
    pub fn delete_part(&self, id: PartId) -> Result<PartDeleted, WarehouseError> {
        let part = self.store.get(id)?.ok_or(DomainError::NotFound)?;

        let record = TransactionRecord::new(
            TransactionKind::Out,
            vec![TransactionItem {
                part_id: part.id,
                part_name: part.name.clone(),
                quantity: part.quantity,
                price: part.price,
            }],
            notes::REMOVED,
        )?;

        self.store.apply(StockCommit::delete(id, record.clone()))?;

        tracing::info!(part = %part.name, quantity = part.quantity, "part removed");
        Ok(PartDeleted { part, record })
    }

    /// Apply a multi-item outgoing batch atomically with respect to stock
    /// sufficiency: either every line fits and all decrements commit with
    /// one `out` record, or nothing is applied.
    pub fn create_outgoing(
        &self,
        lines: Vec<OutgoingLine>,
    ) -> Result<OutgoingCommitted, WarehouseError> {
        if lines.is_empty() {
            return Err(
                DomainError::validation("a transaction must contain at least one item").into(),
            );
        }
        if lines.iter().any(|l| l.quantity == 0) {
            return Err(DomainError::validation("item quantity must be positive").into());
        }

        // Repeated lines for one part count against the same shelf, so
        // merge them (submission order preserved) before checking stock.
        let mut merged: Vec<OutgoingLine> = Vec::new();
        for line in lines {
            match merged.iter_mut().find(|m| m.part_id == line.part_id) {
                Some(m) => {
                    m.quantity = m
                        .quantity
                        .checked_add(line.quantity)
                        .ok_or_else(|| DomainError::validation("quantity overflow"))?;
                }
                None => merged.push(line),
            }
        }

        let mut upserts = Vec::with_capacity(merged.len());
        let mut items = Vec::with_capacity(merged.len());
        let mut low_stock = Vec::new();

        for line in &merged {
            // An unknown part rejects the whole batch.
            let part = self.store.get(line.part_id)?.ok_or(DomainError::NotFound)?;

            let Some(remaining) = part.quantity.checked_sub(line.quantity) else {
                return Err(DomainError::insufficient_stock(
                    part.name,
                    part.quantity,
                    line.quantity,
                )
                .into());
            };

            items.push(TransactionItem {
                part_id: part.id,
                part_name: part.name.clone(),
                quantity: line.quantity,
                price: part.price,
            });

            let mut updated = part;
            updated.quantity = remaining;
            if let Some(alert) = LowStockAlert::check(&updated) {
                low_stock.push(alert);
            }
            upserts.push(updated);
        }

        let record = TransactionRecord::new(TransactionKind::Out, items, notes::SALE)?;
        self.store.apply(StockCommit {
            upserts,
            deletes: Vec::new(),
            record: record.clone(),
        })?;
        self.warn_low_stock(&low_stock);

        tracing::info!(
            items = record.items.len(),
            total = record.total_amount,
            "outgoing transaction committed"
        );
        Ok(OutgoingCommitted { record, low_stock })
    }

    fn warn_low_stock(&self, alerts: &[LowStockAlert]) {
        for alert in alerts {
            tracing::warn!(
                part = %alert.name,
                remaining = alert.remaining,
                min_stock = alert.min_stock,
                "low stock"
            );
        }
    }
}
