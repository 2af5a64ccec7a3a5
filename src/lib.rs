//! comention - In-document entity co-mention index
//!
//! An in-memory, incrementally built, tokenized entity index that lets a
//! left-to-right entity-linking pass resolve a later occurrence of a name
//! (a repeated "Obama" after "Barack Obama" was linked) against entities
//! discovered earlier in the same document, while never leaking entities
//! the linear scan has not yet passed.
//!
//! # Quick Start
//!
//! ```
//! use comention::{
//!     EntitySearcher, Field, LinkingStateAware, MentionBuilder, MentionConfig,
//!     SimpleTokenizer, Token,
//! };
//! use std::sync::Arc;
//!
//! # fn main() -> comention::Result<()> {
//! let mut builder = MentionBuilder::new(
//!     Arc::new(SimpleTokenizer),
//!     MentionConfig::for_language("en"),
//! )?;
//!
//! // An upstream linker found "Barack Obama" at characters 0..12.
//! builder.register_candidate("urn:anno:1", "Barack Obama", Some(0.9), Some(0), Some(12), &[]);
//!
//! // Once the scan passes the span, the mention becomes searchable.
//! builder.start_token(&Token::new(40, 45).with_text("Obama"));
//! let hits = builder.lookup(&Field::Label, &["Obama Barack"], &[Some("en")], 5, 0);
//! assert_eq!(hits.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! One [`MentionBuilder`] plus its [`TokenizedEntityIndex`] is scoped to
//! exactly one document's linking pass; everything is single-threaded,
//! in-memory, and discarded with the document. The tokenizer is an
//! injected capability ([`LabelTokenizer`]) so labels and document text
//! tokenize identically.

pub use comention_core::{
    BasicEntity, Entity, EntityId, EntitySearcher, Error, Field, Label, LabelTokenizer,
    LinkingStateAware, MentionConfig, Result, Span, Token, DEFAULT_MIN_CONFIDENCE,
    DEFAULT_MIN_TOKEN_COUNT,
};
pub use comention_index::{SimpleTokenizer, TokenizedEntityIndex};
pub use comention_mention::{
    declared_type_field, selected_text_field, CandidateOutcome, EntityMention, MentionBuilder,
};
