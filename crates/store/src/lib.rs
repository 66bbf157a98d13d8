//! `gudang-store` — persistence boundary for parts and the transaction ledger.
//!
//! The warehouse service talks to storage through two narrow collaborator
//! interfaces ([`InventoryStore`], [`TransactionLedger`]) plus an atomic
//! commit on the combined [`WarehouseStore`]: a part mutation and its ledger
//! entry are applied as one unit so the two collections cannot diverge.
//!
//! Two adapters ship with the crate:
//! - [`InMemoryWarehouseStore`] for dev and tests
//! - [`JsonFileWarehouseStore`] persisting a single JSON document

pub mod error;
pub mod json_file;
pub mod memory;
mod state;
pub mod traits;

pub use error::StoreError;
pub use json_file::JsonFileWarehouseStore;
pub use memory::InMemoryWarehouseStore;
pub use traits::{InventoryStore, StockCommit, TransactionLedger, WarehouseStore};
