use serde::Deserialize;

use gudang_ledger::{ReportPeriod, TransactionKind};
use gudang_warehouse::{OutgoingCommitted, OutgoingLine, PartAdded, PartDeleted, PartUpdated};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    pub items: Vec<OutgoingLine>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub period: Option<ReportPeriod>,
}

#[derive(Debug, Deserialize)]
pub struct TopMovingQuery {
    pub direction: Option<TransactionKind>,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub period: Option<ReportPeriod>,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn part_added_to_json(outcome: PartAdded) -> serde_json::Value {
    serde_json::json!({
        "part": outcome.part,
        "restocked": outcome.restocked,
        "transactionId": outcome.record.id,
        "lowStock": outcome.low_stock,
    })
}

pub fn part_updated_to_json(outcome: PartUpdated) -> serde_json::Value {
    serde_json::json!({
        "part": outcome.part,
        "transactionId": outcome.record.map(|r| r.id),
        "lowStock": outcome.low_stock,
    })
}

pub fn part_deleted_to_json(outcome: PartDeleted) -> serde_json::Value {
    serde_json::json!({
        "part": outcome.part,
        "transactionId": outcome.record.id,
    })
}

pub fn outgoing_to_json(outcome: OutgoingCommitted) -> serde_json::Value {
    serde_json::json!({
        "record": outcome.record,
        "lowStock": outcome.low_stock,
    })
}
