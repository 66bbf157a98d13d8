use thiserror::Error;

use gudang_core::DomainError;
use gudang_store::StoreError;

/// Caller-facing error for every warehouse operation.
#[derive(Debug, Error)]
pub enum WarehouseError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("persistence failure: {0}")]
    Store(#[from] StoreError),
}
