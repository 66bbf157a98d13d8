use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gudang_core::{DomainError, DomainResult, PartId, TransactionId};

/// Direction of a stock movement.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    In,
    Out,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::In => "in",
            TransactionKind::Out => "out",
        }
    }
}

/// One line of a transaction.
///
/// `part_name` and `price` are snapshots taken when the record is created,
/// not live references to the part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionItem {
    pub part_id: PartId,
    pub part_name: String,
    pub quantity: u32,
    /// Unit price in whole rupiah at transaction time.
    pub price: u64,
}

impl TransactionItem {
    pub fn subtotal(&self) -> u64 {
        self.price * u64::from(self.quantity)
    }
}

/// An immutable ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub id: TransactionId,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub items: Vec<TransactionItem>,
    pub timestamp: DateTime<Utc>,
    /// Sum over items of `price * quantity`, fixed at creation.
    pub total_amount: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TransactionRecord {
    /// Create a record stamped "now" with a fresh time-ordered id.
    pub fn new(
        kind: TransactionKind,
        items: Vec<TransactionItem>,
        notes: impl Into<String>,
    ) -> DomainResult<Self> {
        Self::new_at(kind, items, notes, Utc::now())
    }

    /// Create a record at an explicit instant (tests, imports).
    pub fn new_at(
        kind: TransactionKind,
        items: Vec<TransactionItem>,
        notes: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if items.is_empty() {
            return Err(DomainError::validation(
                "a transaction must contain at least one item",
            ));
        }
        let total_amount = items.iter().map(TransactionItem::subtotal).sum();
        Ok(Self {
            id: TransactionId::new(),
            kind,
            items,
            timestamp,
            total_amount,
            notes: Some(notes.into()),
        })
    }

    /// Total units moved across all items.
    pub fn total_units(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, quantity: u32, price: u64) -> TransactionItem {
        TransactionItem {
            part_id: PartId::new(),
            part_name: name.to_string(),
            quantity,
            price,
        }
    }

    #[test]
    fn total_is_the_sum_of_subtotals() {
        let record = TransactionRecord::new(
            TransactionKind::Out,
            vec![item("Brake Pads Front Set", 2, 375_000), item("Chain Lube Motul C2+", 1, 187_500)],
            "outgoing/sale transaction",
        )
        .unwrap();
        assert_eq!(record.total_amount, 2 * 375_000 + 187_500);
        assert_eq!(record.total_units(), 3);
    }

    #[test]
    fn empty_item_list_is_rejected() {
        let err = TransactionRecord::new(TransactionKind::In, vec![], "new part added").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn kind_serializes_under_the_type_key() {
        let record = TransactionRecord::new(
            TransactionKind::In,
            vec![item("Oil Filter", 5, 134_850)],
            "stock added to existing part",
        )
        .unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "in");
        assert_eq!(json["totalAmount"], 5 * 134_850);
        assert!(json["items"][0].get("partName").is_some());
    }

    #[test]
    fn json_round_trip_preserves_the_record() {
        let record = TransactionRecord::new(
            TransactionKind::Out,
            vec![item("Battery Yuasa YTZ10S", 1, 1_432_500)],
            "part removed",
        )
        .unwrap();
        let json = serde_json::to_string(&record).unwrap();
        let back: TransactionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
