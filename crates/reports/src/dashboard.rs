use std::collections::HashMap;

use serde::Serialize;

use gudang_ledger::{TransactionKind, TransactionRecord};

/// Units moved for one part name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCount {
    pub name: String,
    pub quantity: u64,
}

/// The most-moved parts in one direction: units summed per part name,
/// sorted descending (name ascending on ties), truncated to `limit`.
pub fn top_moving(
    records: &[TransactionRecord],
    kind: TransactionKind,
    limit: usize,
) -> Vec<ItemCount> {
    let mut counts: HashMap<String, u64> = HashMap::new();
    for record in records.iter().filter(|r| r.kind == kind) {
        for item in &record.items {
            *counts.entry(item.part_name.clone()).or_insert(0) += u64::from(item.quantity);
        }
    }

    let mut ranked: Vec<ItemCount> = counts
        .into_iter()
        .map(|(name, quantity)| ItemCount { name, quantity })
        .collect();
    ranked.sort_by(|a, b| b.quantity.cmp(&a.quantity).then(a.name.cmp(&b.name)));
    ranked.truncate(limit);
    ranked
}
