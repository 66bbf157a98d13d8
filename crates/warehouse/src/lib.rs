//! `gudang-warehouse` — stock reconciliation.
//!
//! Every quantity mutation flows through [`WarehouseService`], which reads
//! the inventory, computes the delta, and commits the updated part together
//! with exactly one matching ledger record. Multi-item outgoing batches are
//! all-or-nothing: one short line rejects the whole batch before anything
//! is written.

pub mod draft;
pub mod error;
pub mod service;

/// Ledger note attached to each kind of stock movement.
pub mod notes {
    pub const NEW_PART: &str = "new part added";
    pub const RESTOCK: &str = "stock added to existing part";
    pub const ADJUSTMENT: &str = "manual stock adjustment";
    pub const REMOVED: &str = "part removed";
    pub const SALE: &str = "outgoing/sale transaction";
}

pub use draft::OutgoingDraft;
pub use error::WarehouseError;
pub use service::{
    LowStockAlert, OutgoingCommitted, OutgoingLine, PartAdded, PartDeleted, PartUpdated,
    WarehouseService,
};
