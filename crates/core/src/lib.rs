//! Core types and traits for the comention entity index
//!
//! This crate defines the foundational types used throughout the system:
//! - EntityId: Unique identifier for entities and mentions
//! - Label: Language-tagged text value
//! - Field: Field selector with the two generic linker roles (Label, Type)
//! - Span: Character span of a mention within a document
//! - Token: Callback datum from the linear document scan
//! - Entity: Trait for id + per-field values/references
//! - Traits: LabelTokenizer, EntitySearcher, LinkingStateAware
//! - MentionConfig: Policy knobs for candidate registration
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod entity;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types and traits
pub use config::{MentionConfig, DEFAULT_MIN_CONFIDENCE, DEFAULT_MIN_TOKEN_COUNT};
pub use entity::{BasicEntity, Entity};
pub use error::{Error, Result};
pub use traits::{EntitySearcher, LabelTokenizer, LinkingStateAware};
pub use types::{EntityId, Field, Label, Span, Token};
