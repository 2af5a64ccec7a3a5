//! Tokenized in-memory entity index
//!
//! This crate provides:
//! - TokenizedEntityIndex with token posting lists and ranked lookup
//! - SimpleTokenizer, a language-agnostic default LabelTokenizer
//!
//! The index is document-scoped: one instance serves exactly one linking
//! pass and is discarded with it.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod index;
pub mod tokenizer;

pub use index::TokenizedEntityIndex;
pub use tokenizer::SimpleTokenizer;
