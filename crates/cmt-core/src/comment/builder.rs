//! Comment builder for fluent API

use super::model::Comment;
use crate::error::Result;
use chrono::{DateTime, Utc};

/// Builder for creating comments with fluent API.
///
/// Every provided value is funneled through the entity's validated setters
/// when [`CommentBuilder::build`] is called, so the builder enforces exactly
/// the same rules as mutating a [`Comment`] directly.
#[derive(Debug, Default)]
pub struct CommentBuilder {
    id: Option<String>,
    parent_id: Option<String>,
    topmost_parent_id: Option<String>,
    children_count: Option<usize>,
    message: Option<String>,
    verb: Option<String>,
    actor: Option<(String, String)>,
    object: Option<(String, String)>,
    creation_date_time: Option<DateTime<Utc>>,
    latest_child_date_time: Option<DateTime<Utc>>,
}

impl CommentBuilder {
    /// Create a new builder with nothing set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the comment identifier
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the direct parent id
    pub fn parent_id(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Set the thread root id
    pub fn topmost_parent_id(mut self, topmost_parent_id: impl Into<String>) -> Self {
        self.topmost_parent_id = Some(topmost_parent_id.into());
        self
    }

    /// Set the number of direct child comments
    pub fn children_count(mut self, children_count: usize) -> Self {
        self.children_count = Some(children_count);
        self
    }

    /// Set the message text
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set the semantic action
    pub fn verb(mut self, verb: impl Into<String>) -> Self {
        self.verb = Some(verb.into());
        self
    }

    /// Set the authoring role
    pub fn actor(mut self, kind: impl Into<String>, id: impl Into<String>) -> Self {
        self.actor = Some((kind.into(), id.into()));
        self
    }

    /// Set the object role the comment is attached to
    pub fn object(mut self, kind: impl Into<String>, id: impl Into<String>) -> Self {
        self.object = Some((kind.into(), id.into()));
        self
    }

    /// Set the creation timestamp
    pub fn creation_date_time(mut self, dt: DateTime<Utc>) -> Self {
        self.creation_date_time = Some(dt);
        self
    }

    /// Set the latest-child timestamp
    pub fn latest_child_date_time(mut self, dt: DateTime<Utc>) -> Self {
        self.latest_child_date_time = Some(dt);
        self
    }

    /// Build the comment, surfacing the first validation failure
    pub fn build(self) -> Result<Comment> {
        let mut comment = Comment::new();

        if let Some(id) = self.id {
            comment.set_id(id)?;
        }
        if let Some(parent_id) = self.parent_id {
            comment.set_parent_id(parent_id);
        }
        if let Some(topmost_parent_id) = self.topmost_parent_id {
            comment.set_topmost_parent_id(topmost_parent_id);
        }
        if let Some(children_count) = self.children_count {
            comment.set_children_count(children_count);
        }
        if let Some(message) = self.message {
            comment.set_message(message)?;
        }
        if let Some(verb) = self.verb {
            comment.set_verb(verb)?;
        }
        if let Some((kind, id)) = self.actor {
            comment.set_actor(kind, id)?;
        }
        if let Some((kind, id)) = self.object {
            comment.set_object(kind, id)?;
        }
        if let Some(dt) = self.creation_date_time {
            comment.set_creation_date_time(dt);
        }
        if let Some(dt) = self.latest_child_date_time {
            comment.set_latest_child_date_time(dt);
        }

        Ok(comment)
    }
}
