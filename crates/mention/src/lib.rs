//! Mention views and stream-synchronized mention activation
//!
//! This crate provides:
//! - EntityMention: Entity view redirecting the generic Label/Type roles
//!   to per-mention concrete fields, with an optional document span
//! - MentionBuilder: buffers candidate mentions and flushes them into a
//!   TokenizedEntityIndex as the document scan passes their span

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod mention;

pub use builder::{CandidateOutcome, MentionBuilder};
pub use mention::{declared_type_field, selected_text_field, EntityMention};
