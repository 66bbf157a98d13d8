use gudang_core::{DomainError, DomainResult, PartId};
use gudang_inventory::Part;
use gudang_ledger::TransactionItem;

use crate::service::OutgoingLine;

/// An in-progress outgoing batch.
///
/// Lines merge per part by summing quantities, and every addition is checked
/// against the part's current stock minus what the draft already stages.
/// A barcode scan that would oversell is refused at staging time, not at
/// submission.
#[derive(Debug, Clone, Default)]
pub struct OutgoingDraft {
    items: Vec<TransactionItem>,
}

impl OutgoingDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage `quantity` units of `part`, merging with an existing line.
    pub fn add(&mut self, part: &Part, quantity: u32) -> DomainResult<()> {
        if quantity == 0 {
            return Err(DomainError::validation("item quantity must be positive"));
        }

        let staged = self.staged(part.id);
        let wanted = staged
            .checked_add(quantity)
            .ok_or_else(|| DomainError::validation("quantity overflow"))?;
        if wanted > part.quantity {
            return Err(DomainError::insufficient_stock(
                part.name.clone(),
                part.quantity - staged,
                quantity,
            ));
        }

        match self.items.iter_mut().find(|i| i.part_id == part.id) {
            Some(item) => item.quantity = wanted,
            None => self.items.push(TransactionItem {
                part_id: part.id,
                part_name: part.name.clone(),
                quantity,
                price: part.price,
            }),
        }
        Ok(())
    }

    /// Barcode-scan entry: one unit per scan.
    pub fn scan(&mut self, part: &Part) -> DomainResult<()> {
        self.add(part, 1)
    }

    pub fn remove(&mut self, part_id: PartId) {
        self.items.retain(|i| i.part_id != part_id);
    }

    /// Units already staged for a part.
    pub fn staged(&self, part_id: PartId) -> u32 {
        self.items
            .iter()
            .find(|i| i.part_id == part_id)
            .map(|i| i.quantity)
            .unwrap_or(0)
    }

    pub fn items(&self) -> &[TransactionItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_amount(&self) -> u64 {
        self.items.iter().map(TransactionItem::subtotal).sum()
    }

    /// Convert into the line batch `create_outgoing` consumes.
    pub fn into_lines(self) -> Vec<OutgoingLine> {
        self.items
            .into_iter()
            .map(|i| OutgoingLine {
                part_id: i.part_id,
                quantity: i.quantity,
            })
            .collect()
    }
}
