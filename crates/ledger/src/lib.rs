//! `gudang-ledger` — append-only record of stock movements.
//!
//! Every quantity change in the warehouse produces exactly one
//! [`TransactionRecord`]; records are immutable once appended and the
//! ledger never edits past entries.

pub mod period;
pub mod record;

pub use period::ReportPeriod;
pub use record::{TransactionItem, TransactionKind, TransactionRecord};
