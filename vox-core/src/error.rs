#[derive(Debug, thiserror::Error)]
pub enum VoxError {
    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error("Session error: {0}")]
    Session(String),

    #[error("Tool error: {0}")]
    Tool(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VoxError>;

impl VoxError {
    /// Create a not-found error for a catalog or line-item id.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// Create an invalid-arguments error for a malformed tool request.
    pub fn invalid_args(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}
