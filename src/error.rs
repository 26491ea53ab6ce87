use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("{what} cannot be empty")]
    EmptyInput { what: &'static str },

    #[error("{what} must contain positive sizes, got 0 at position {index}")]
    ZeroSize { what: &'static str, index: usize },

    #[error("invalid size list: {0}")]
    InvalidSizeList(String),

    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error("invalid block ID: {0}")]
    UnknownBlock(usize),

    #[error("block {0} is already allocated")]
    BlockNotFree(usize),

    #[error("block {block} ({size} KB) cannot hold a request of {requested} KB")]
    BlockTooSmall {
        block: usize,
        size: u64,
        requested: u64,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
