//! Default label tokenizer
//!
//! Tokenization is an injected capability; pipelines with a real analyzer
//! should implement `LabelTokenizer` over it so labels and document text
//! tokenize identically. `SimpleTokenizer` is the fallback for tests and
//! standalone use: split on non-alphanumeric characters, keep everything
//! else.

use comention_core::LabelTokenizer;

/// Language-agnostic tokenizer splitting on non-alphanumeric characters
///
/// Unlike a search tokenizer there is no minimum token length: entity
/// labels legitimately contain short tokens ("L.A.", "U2") and filtering
/// is the caller's policy, not the tokenizer's.
///
/// # Example
///
/// ```
/// use comention_core::LabelTokenizer;
/// use comention_index::SimpleTokenizer;
///
/// let tokens = SimpleTokenizer.tokenize("New York City", Some("en"));
/// assert_eq!(tokens, Some(vec!["New".into(), "York".into(), "City".into()]));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleTokenizer;

impl LabelTokenizer for SimpleTokenizer {
    fn tokenize(&self, text: &str, _language: Option<&str>) -> Option<Vec<String>> {
        Some(
            text.split(|c: char| !c.is_alphanumeric())
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
        )
    }
}
