//! Core types for the comention index
//!
//! This module defines the foundational types:
//! - EntityId: Unique identifier for entities and mentions
//! - Label: Language-tagged text value of an entity field
//! - Field: Field selector, including the two generic linker roles
//! - Span: Character span within the processed document
//! - Token: Datum reported by the linear document scan

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Unique identifier for an entity or mention
///
/// A thin wrapper around a shared string, cheap to clone. For mentions this
/// is typically the identifier of the annotation the mention was built from;
/// for pre-existing entities it is whatever identifier the upstream caller
/// assigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(Arc<str>);

impl EntityId {
    /// Create an EntityId from any string-like value
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A language-tagged text value of an entity field
///
/// The language tag is optional: `None` marks a plain literal without any
/// language information. Tag comparison is exact; the index does not fold
/// regional variants ("en" and "en-GB" are distinct tags).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label {
    /// The text value
    pub text: String,
    /// Optional language tag (e.g. "en")
    pub language: Option<String>,
}

impl Label {
    /// Create a label with a language tag
    pub fn tagged(text: impl Into<String>, language: impl Into<String>) -> Self {
        Label {
            text: text.into(),
            language: Some(language.into()),
        }
    }

    /// Create a label without a language tag
    pub fn untagged(text: impl Into<String>) -> Self {
        Label {
            text: text.into(),
            language: None,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.language {
            Some(lang) => write!(f, "\"{}\"@{}", self.text, lang),
            None => write!(f, "\"{}\"", self.text),
        }
    }
}

/// Field selector for entity values and references
///
/// The linking algorithm always queries the two generic roles `Label` (the
/// canonical name of an entity) and `Type` (its declared type). Which
/// concrete field actually holds that data may differ per entity; a mention
/// view redirects the roles to its own concrete fields at construction
/// time. `Named` addresses a concrete field directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    /// Generic "canonical label" role queried by the linker
    Label,
    /// Generic "canonical type" role queried by the linker
    Type,
    /// A concrete, named field
    Named(Arc<str>),
}

impl Field {
    /// Create a concrete named field
    pub fn named(name: impl Into<Arc<str>>) -> Self {
        Field::Named(name.into())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Label => write!(f, "<label-role>"),
            Field::Type => write!(f, "<type-role>"),
            Field::Named(name) => write!(f, "{name}"),
        }
    }
}

/// Character span of a mention within the processed document
///
/// Offsets are absolute character positions; `start < end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start offset (inclusive)
    pub start: u32,
    /// End offset (exclusive)
    pub end: u32,
}

impl Span {
    /// Create a span
    ///
    /// # Panics
    ///
    /// Panics if `start >= end`. Use [`Span::try_new`] for offsets coming
    /// from untrusted annotation data.
    pub fn new(start: u32, end: u32) -> Self {
        assert!(start < end, "invalid span: start {start} >= end {end}");
        Span { start, end }
    }

    /// Create a span, rejecting invalid offsets
    pub fn try_new(start: u32, end: u32) -> crate::error::Result<Self> {
        if start < end {
            Ok(Span { start, end })
        } else {
            Err(crate::error::Error::InvalidSpan { start, end })
        }
    }

    /// Length of the span in characters
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{}]", self.start, self.end)
    }
}

/// A token reported by the external linear document scan
///
/// Only `start` drives the activation logic; `end` and the optional surface
/// text are carried for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Absolute character offset where the token starts
    pub start: u32,
    /// Absolute character offset where the token ends
    pub end: u32,
    /// Surface text, if the scanner provides it
    pub text: Option<String>,
}

impl Token {
    /// Create a token from its offsets
    pub fn new(start: u32, end: u32) -> Self {
        Token {
            start,
            end,
            text: None,
        }
    }

    /// Builder: attach the surface text
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.text {
            Some(text) => write!(f, "[{}..{}] \"{}\"", self.start, self.end, text),
            None => write!(f, "[{}..{}]", self.start, self.end),
        }
    }
}
