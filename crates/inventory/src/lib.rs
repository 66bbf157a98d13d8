//! `gudang-inventory` — the Part entity and its invariants.
//!
//! A part is a stock-keeping unit: current quantity, unit price, shelf
//! location, category, minimum-stock threshold and an optional barcode.
//! Everything that changes a part's quantity goes through the warehouse
//! service so the movement lands in the transaction ledger.

pub mod category;
pub mod filter;
pub mod part;

pub use category::PartCategory;
pub use filter::{available_locations, PartFilter};
pub use part::{normalize_name, Part, PartInput};
