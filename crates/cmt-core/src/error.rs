//! Error types for cmt-core

use thiserror::Error;

/// Main error type for cmt-core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommentError {
    /// A setter received a value that fails its field constraint
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Attempt to change an already-assigned comment id
    #[error("Comment id is already set to '{current}' and cannot be changed to '{attempted}'")]
    IllegalIdentityChange { current: String, attempted: String },

    /// Message exceeds the maximum length
    #[error("Message exceeds the maximum length of {limit} bytes")]
    MessageTooLong { limit: usize },
}

/// Result type alias for cmt-core
pub type Result<T> = std::result::Result<T, CommentError>;
