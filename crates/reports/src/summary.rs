use chrono::{DateTime, Utc};
use serde::Serialize;

use gudang_ledger::{ReportPeriod, TransactionKind, TransactionRecord};

use crate::dashboard::{top_moving, ItemCount};

const TOP_ITEMS: usize = 5;

/// Aggregated inventory activity for one reporting window.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityReport {
    pub period: ReportPeriod,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub transactions_in: u64,
    pub transactions_out: u64,
    pub value_in: u64,
    pub value_out: u64,
    pub units_in: u64,
    pub units_out: u64,
    pub top_in: Vec<ItemCount>,
    pub top_out: Vec<ItemCount>,
}

impl ActivityReport {
    /// Fold the records falling inside `period` (anchored to `now`) into
    /// the report totals.
    pub fn compute(records: &[TransactionRecord], period: ReportPeriod, now: DateTime<Utc>) -> Self {
        let (start, end) = period.interval(now);
        let within: Vec<TransactionRecord> = records
            .iter()
            .filter(|r| start <= r.timestamp && r.timestamp < end)
            .cloned()
            .collect();

        let mut report = Self {
            period,
            start,
            end,
            transactions_in: 0,
            transactions_out: 0,
            value_in: 0,
            value_out: 0,
            units_in: 0,
            units_out: 0,
            top_in: Vec::new(),
            top_out: Vec::new(),
        };

        for record in &within {
            match record.kind {
                TransactionKind::In => {
                    report.transactions_in += 1;
                    report.value_in += record.total_amount;
                    report.units_in += record.total_units();
                }
                TransactionKind::Out => {
                    report.transactions_out += 1;
                    report.value_out += record.total_amount;
                    report.units_out += record.total_units();
                }
            }
        }

        report.top_in = top_moving(&within, TransactionKind::In, TOP_ITEMS);
        report.top_out = top_moving(&within, TransactionKind::Out, TOP_ITEMS);
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use gudang_core::PartId;
    use gudang_ledger::TransactionItem;

    fn record_at(
        kind: TransactionKind,
        name: &str,
        quantity: u32,
        price: u64,
        timestamp: DateTime<Utc>,
    ) -> TransactionRecord {
        TransactionRecord::new_at(
            kind,
            vec![TransactionItem {
                part_id: PartId::new(),
                part_name: name.to_string(),
                quantity,
                price,
            }],
            "manual stock adjustment",
            timestamp,
        )
        .unwrap()
    }

    #[test]
    fn totals_split_by_direction() {
        let now = Utc::now();
        let records = vec![
            record_at(TransactionKind::In, "Oil Filter", 10, 100, now),
            record_at(TransactionKind::Out, "Oil Filter", 3, 100, now),
            record_at(TransactionKind::Out, "Spark Plug", 2, 500, now),
        ];

        let report = ActivityReport::compute(&records, ReportPeriod::Day, now);
        assert_eq!(report.transactions_in, 1);
        assert_eq!(report.transactions_out, 2);
        assert_eq!(report.value_in, 1_000);
        assert_eq!(report.value_out, 300 + 1_000);
        assert_eq!(report.units_in, 10);
        assert_eq!(report.units_out, 5);
        assert_eq!(report.top_out[0].name, "Spark Plug");
        assert_eq!(report.top_out[0].quantity, 2);
    }

    #[test]
    fn records_outside_the_window_are_ignored() {
        let now = Utc::now();
        let records = vec![
            record_at(TransactionKind::In, "Oil Filter", 10, 100, now),
            record_at(TransactionKind::In, "Oil Filter", 10, 100, now - Duration::days(40)),
        ];

        let report = ActivityReport::compute(&records, ReportPeriod::Month, now);
        assert_eq!(report.transactions_in, 1);
        assert_eq!(report.units_in, 10);
    }

    #[test]
    fn top_lists_cap_at_five() {
        let now = Utc::now();
        let records: Vec<TransactionRecord> = (0..7)
            .map(|i| record_at(TransactionKind::Out, &format!("Part {i}"), i + 1, 100, now))
            .collect();

        let report = ActivityReport::compute(&records, ReportPeriod::Day, now);
        assert_eq!(report.top_out.len(), 5);
        assert_eq!(report.top_out[0].name, "Part 6");
    }
}
