//! Mention extraction module
//!
//! Scans message text for `@` mention tokens, distinguishing true mentions
//! from incidental `@` characters inside URLs and emails.

pub mod model;
pub mod scanner;

pub use model::{Mention, MentionKind};
pub use scanner::extract_mentions;
