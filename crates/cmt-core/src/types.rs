//! Core type definitions for cmt-core

use crate::error::{CommentError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Slot for the comment's own identifier.
///
/// The identifier is write-once: once assigned a non-empty value, it can only
/// be re-assigned the same value. Assigning the empty string always resets the
/// slot to `Unset`. Serializes as a plain string, with the empty string
/// standing for `Unset`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IdentitySlot {
    /// No identifier assigned yet
    #[default]
    Unset,
    /// Identifier assigned; further changes are rejected
    Assigned(String),
}

impl IdentitySlot {
    /// Assign a value, enforcing the write-once rule.
    ///
    /// An empty value resets the slot to `Unset`. A non-empty value succeeds
    /// if the slot is unset or already holds the same value.
    pub fn assign(&mut self, value: impl Into<String>) -> Result<()> {
        let value = value.into();

        if value.is_empty() {
            *self = IdentitySlot::Unset;
            return Ok(());
        }

        match self {
            IdentitySlot::Assigned(current) if *current != value => {
                Err(CommentError::IllegalIdentityChange {
                    current: current.clone(),
                    attempted: value,
                })
            }
            _ => {
                *self = IdentitySlot::Assigned(value);
                Ok(())
            }
        }
    }

    /// Get the assigned value, or the empty string when unset
    pub fn as_str(&self) -> &str {
        match self {
            IdentitySlot::Unset => "",
            IdentitySlot::Assigned(value) => value,
        }
    }

    /// Check whether a value is currently assigned
    pub fn is_assigned(&self) -> bool {
        matches!(self, IdentitySlot::Assigned(_))
    }
}

impl From<String> for IdentitySlot {
    fn from(value: String) -> Self {
        if value.is_empty() {
            IdentitySlot::Unset
        } else {
            IdentitySlot::Assigned(value)
        }
    }
}

impl From<IdentitySlot> for String {
    fn from(slot: IdentitySlot) -> Self {
        match slot {
            IdentitySlot::Unset => String::new(),
            IdentitySlot::Assigned(value) => value,
        }
    }
}

impl fmt::Display for IdentitySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A `(type, id)` pair naming a participant role: the comment's actor or the
/// object it is attached to.
///
/// Both parts must contain at least one non-whitespace character. Values are
/// stored verbatim; no trimming is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    #[serde(rename = "type")]
    kind: String,
    id: String,
}

impl Role {
    /// Create a role pair, validating both parts
    pub fn new(kind: impl Into<String>, id: impl Into<String>) -> Result<Self> {
        let kind = kind.into();
        let id = id.into();

        if kind.trim().is_empty() {
            return Err(CommentError::InvalidInput(
                "role type must contain at least one non-whitespace character".to_string(),
            ));
        }
        if id.trim().is_empty() {
            return Err(CommentError::InvalidInput(
                "role id must contain at least one non-whitespace character".to_string(),
            ));
        }

        Ok(Self { kind, id })
    }

    /// The role type, e.g. "users" or "files"
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The role id within its type
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_first_assignment() {
        let mut slot = IdentitySlot::default();
        assert!(!slot.is_assigned());
        assert_eq!(slot.as_str(), "");

        slot.assign("c23").unwrap();
        assert!(slot.is_assigned());
        assert_eq!(slot.as_str(), "c23");
    }

    #[test]
    fn test_identity_change_rejected() {
        let mut slot = IdentitySlot::default();
        slot.assign("c23").unwrap();

        let err = slot.assign("c17").unwrap_err();
        assert_eq!(
            err,
            CommentError::IllegalIdentityChange {
                current: "c23".to_string(),
                attempted: "c17".to_string(),
            }
        );
        // Slot keeps its prior value
        assert_eq!(slot.as_str(), "c23");
    }

    #[test]
    fn test_identity_same_value_is_accepted() {
        let mut slot = IdentitySlot::default();
        slot.assign("c23").unwrap();
        assert!(slot.assign("c23").is_ok());
        assert_eq!(slot.as_str(), "c23");
    }

    #[test]
    fn test_identity_reset_and_reassign() {
        let mut slot = IdentitySlot::default();
        slot.assign("c23").unwrap();

        slot.assign("").unwrap();
        assert!(!slot.is_assigned());
        assert_eq!(slot.as_str(), "");

        slot.assign("c17").unwrap();
        assert_eq!(slot.as_str(), "c17");
    }

    #[test]
    fn test_identity_serializes_as_string() {
        let slot = IdentitySlot::Assigned("c23".to_string());
        assert_eq!(serde_json::to_string(&slot).unwrap(), "\"c23\"");

        let unset: IdentitySlot = serde_json::from_str("\"\"").unwrap();
        assert_eq!(unset, IdentitySlot::Unset);
    }

    #[test]
    fn test_role_valid() {
        let role = Role::new("users", "alice").unwrap();
        assert_eq!(role.kind(), "users");
        assert_eq!(role.id(), "alice");
    }

    #[test]
    fn test_role_rejects_empty_parts() {
        assert!(Role::new("", "alice").is_err());
        assert!(Role::new("users", "").is_err());
    }

    #[test]
    fn test_role_rejects_whitespace_only_parts() {
        assert!(Role::new(" ", " ").is_err());
        assert!(Role::new("users", "\t\n").is_err());
    }

    #[test]
    fn test_role_stores_values_verbatim() {
        // Validation checks for non-whitespace content but does not trim
        let role = Role::new(" users ", " alice ").unwrap();
        assert_eq!(role.kind(), " users ");
        assert_eq!(role.id(), " alice ");
    }

    #[test]
    fn test_role_serialization_uses_type_key() {
        let role = Role::new("users", "alice").unwrap();
        let json = serde_json::to_string(&role).unwrap();
        assert_eq!(json, r#"{"type":"users","id":"alice"}"#);
    }
}
