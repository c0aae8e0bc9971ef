//! Comment field validation

use crate::error::{CommentError, Result};

/// Maximum message length in bytes
pub const MAX_MESSAGE_LENGTH: usize = 1000;

/// Validate message content against the length bound
pub fn validate_message(message: &str) -> Result<()> {
    if message.len() > MAX_MESSAGE_LENGTH {
        return Err(CommentError::MessageTooLong {
            limit: MAX_MESSAGE_LENGTH,
        });
    }

    Ok(())
}

/// Validate a verb: any non-empty string names an action
pub fn validate_verb(verb: &str) -> Result<()> {
    if verb.is_empty() {
        return Err(CommentError::InvalidInput(
            "verb cannot be empty".to_string(),
        ));
    }

    Ok(())
}
