//! Mention data model

use serde::{Deserialize, Serialize};

/// Kind of participant a mention refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MentionKind {
    /// A full user identity
    User,
    /// A guest participant, identified by a `guest/`-prefixed token
    Guest,
}

impl MentionKind {
    /// The wire name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            MentionKind::User => "user",
            MentionKind::Guest => "guest",
        }
    }
}

impl std::fmt::Display for MentionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed mention reference extracted from a message.
///
/// Transient scan output, never stored as entity state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mention {
    /// Kind of participant addressed
    #[serde(rename = "type")]
    pub kind: MentionKind,
    /// Identifier of the participant; for guests this keeps the `guest/` prefix
    pub id: String,
}

impl Mention {
    /// Create a user mention
    pub fn user(id: impl Into<String>) -> Self {
        Self {
            kind: MentionKind::User,
            id: id.into(),
        }
    }

    /// Create a guest mention
    pub fn guest(id: impl Into<String>) -> Self {
        Self {
            kind: MentionKind::Guest,
            id: id.into(),
        }
    }
}
