#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt store data: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
