use thiserror::Error;

/// Persistence-layer failure.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization failure: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("data file uses schema version {found}, this build supports up to {supported}")]
    UnsupportedSchema { found: u32, supported: u32 },

    #[error("store lock poisoned")]
    Poisoned,
}
