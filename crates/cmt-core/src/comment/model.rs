//! Comment data model

use super::validator;
use crate::error::Result;
use crate::mention::{extract_mentions, Mention};
use crate::types::{IdentitySlot, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single comment attached to an object, with threading and authorship.
///
/// All fields start unassigned/default and are mutated through validated
/// setters. A failed setter leaves the prior value in place.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    /// Identifier, write-once from the unassigned state
    id: IdentitySlot,
    /// Identifier of the direct parent comment, empty = no parent
    parent_id: String,
    /// Identifier of the thread root comment, empty = no thread root
    topmost_parent_id: String,
    /// Number of direct child comments
    children_count: usize,
    /// Message text, bounded by [`validator::MAX_MESSAGE_LENGTH`]
    message: String,
    /// Semantic action of the comment, e.g. "comment"
    verb: String,
    /// Who authored the comment
    actor: Option<Role>,
    /// What the comment is attached to
    object: Option<Role>,
    creation_date_time: Option<DateTime<Utc>>,
    latest_child_date_time: Option<DateTime<Utc>>,
}

impl Comment {
    /// Create a comment with all fields unassigned/default
    pub fn new() -> Self {
        Self::default()
    }

    /// The comment identifier, empty when unassigned
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Set the identifier.
    ///
    /// The id is write-once: changing an assigned id to a different non-empty
    /// value fails with `IllegalIdentityChange`. Setting the empty string
    /// always resets the id to unassigned.
    pub fn set_id(&mut self, id: impl Into<String>) -> Result<()> {
        self.id.assign(id)
    }

    /// The direct parent id, empty when the comment has no parent
    pub fn parent_id(&self) -> &str {
        &self.parent_id
    }

    /// Set the direct parent id
    pub fn set_parent_id(&mut self, parent_id: impl Into<String>) {
        self.parent_id = parent_id.into();
    }

    /// The thread root id, empty when the comment starts a thread
    pub fn topmost_parent_id(&self) -> &str {
        &self.topmost_parent_id
    }

    /// Set the thread root id
    pub fn set_topmost_parent_id(&mut self, topmost_parent_id: impl Into<String>) {
        self.topmost_parent_id = topmost_parent_id.into();
    }

    /// Number of direct child comments
    pub fn children_count(&self) -> usize {
        self.children_count
    }

    /// Set the number of direct child comments
    pub fn set_children_count(&mut self, children_count: usize) {
        self.children_count = children_count;
    }

    /// The message text, empty when unset
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Set the message text.
    ///
    /// Fails with `MessageTooLong` when the text exceeds
    /// [`validator::MAX_MESSAGE_LENGTH`] bytes; the error carries the limit.
    pub fn set_message(&mut self, message: impl Into<String>) -> Result<()> {
        let message = message.into();
        validator::validate_message(&message)?;
        self.message = message;
        Ok(())
    }

    /// The comment's semantic action, empty when unset
    pub fn verb(&self) -> &str {
        &self.verb
    }

    /// Set the semantic action. Fails with `InvalidInput` on an empty string.
    pub fn set_verb(&mut self, verb: impl Into<String>) -> Result<()> {
        let verb = verb.into();
        validator::validate_verb(&verb)?;
        self.verb = verb;
        Ok(())
    }

    /// The authoring role, if assigned
    pub fn actor(&self) -> Option<&Role> {
        self.actor.as_ref()
    }

    /// The actor type, empty when unassigned
    pub fn actor_type(&self) -> &str {
        self.actor.as_ref().map(Role::kind).unwrap_or("")
    }

    /// The actor id, empty when unassigned
    pub fn actor_id(&self) -> &str {
        self.actor.as_ref().map(Role::id).unwrap_or("")
    }

    /// Set the authoring role. Both parts must contain at least one
    /// non-whitespace character, else `InvalidInput`.
    pub fn set_actor(&mut self, kind: impl Into<String>, id: impl Into<String>) -> Result<()> {
        self.actor = Some(Role::new(kind, id)?);
        Ok(())
    }

    /// The object role the comment is attached to, if assigned
    pub fn object(&self) -> Option<&Role> {
        self.object.as_ref()
    }

    /// The object type, empty when unassigned
    pub fn object_type(&self) -> &str {
        self.object.as_ref().map(Role::kind).unwrap_or("")
    }

    /// The object id, empty when unassigned
    pub fn object_id(&self) -> &str {
        self.object.as_ref().map(Role::id).unwrap_or("")
    }

    /// Set the object role. Both parts must contain at least one
    /// non-whitespace character, else `InvalidInput`.
    pub fn set_object(&mut self, kind: impl Into<String>, id: impl Into<String>) -> Result<()> {
        self.object = Some(Role::new(kind, id)?);
        Ok(())
    }

    /// When the comment was created, if known
    pub fn creation_date_time(&self) -> Option<DateTime<Utc>> {
        self.creation_date_time
    }

    /// Set the creation timestamp
    pub fn set_creation_date_time(&mut self, dt: DateTime<Utc>) {
        self.creation_date_time = Some(dt);
    }

    /// When the latest child comment was created, if known
    pub fn latest_child_date_time(&self) -> Option<DateTime<Utc>> {
        self.latest_child_date_time
    }

    /// Set the latest-child timestamp
    pub fn set_latest_child_date_time(&mut self, dt: DateTime<Utc>) {
        self.latest_child_date_time = Some(dt);
    }

    /// Extract the mentions contained in the current message.
    ///
    /// Recomputed on every call; returns an empty list when the message is
    /// unset. See [`extract_mentions`] for the grammar.
    pub fn mentions(&self) -> Vec<Mention> {
        extract_mentions(&self.message)
    }
}
