//! `gudang-reports` — read-side views over the transaction ledger.
//!
//! Dashboard top-movers, period activity summaries, and printable text
//! receipts. Everything here is a pure function of ledger records; nothing
//! writes.

pub mod dashboard;
pub mod money;
pub mod receipt;
pub mod summary;

pub use dashboard::{top_moving, ItemCount};
pub use money::format_rupiah;
pub use receipt::render_receipt;
pub use summary::ActivityReport;
