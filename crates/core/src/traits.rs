//! Trait seams between the index and its collaborators
//!
//! Three capabilities cross the library boundary:
//! - `LabelTokenizer`: injected tokenization capability
//! - `EntitySearcher`: ranked lookup surface consumed by the linking pass
//! - `LinkingStateAware`: callback contract driven by the linear token scan

use crate::entity::Entity;
use crate::types::{EntityId, Field, Span, Token};
use std::sync::Arc;

/// Injected tokenization capability
///
/// The index never implements tokenization itself; whatever analyzer the
/// hosting pipeline uses for document text must also be used for entity
/// labels and search phrases, otherwise tokens will not line up.
pub trait LabelTokenizer: Send + Sync {
    /// Split `text` into an ordered list of tokens
    ///
    /// `language` is a hint for language-specific analyzers; implementations
    /// may ignore it. Returns `None` when the text cannot be tokenized at
    /// all. Callers treat both `None` and an empty list as "contributes
    /// nothing", never as an error.
    fn tokenize(&self, text: &str, language: Option<&str>) -> Option<Vec<String>>;
}

/// Ranked entity lookup surface consumed by the linking pass
pub trait EntitySearcher {
    /// Ranked multi-phrase lookup
    ///
    /// Returns entities matched by at least one phrase, ordered by
    /// descending cumulative matched-phrase character length. At most
    /// `limit` entities are returned starting at `offset`, except that a
    /// group of equally-scored entities is never split at the result
    /// boundary.
    ///
    /// # Panics
    ///
    /// Panics if `field` is not the field this searcher indexes, or if
    /// `languages` has no overlap with its active language set. Both are
    /// caller bugs, not runtime conditions.
    fn lookup(
        &self,
        field: &Field,
        phrases: &[&str],
        languages: &[Option<&str>],
        limit: usize,
        offset: usize,
    ) -> Vec<Arc<dyn Entity>>;

    /// Exact-id lookup
    fn get(&self, id: &EntityId) -> Option<Arc<dyn Entity>>;

    /// Whether this searcher works without network access
    ///
    /// Always true for in-memory searchers; advertised so generic linking
    /// code can keep running in offline mode.
    fn supports_offline_mode(&self) -> bool {
        true
    }

    /// Hard upper bound on result sizes, if any
    ///
    /// `None` means unbounded; the `limit` argument of [`lookup`] is
    /// advisory only.
    ///
    /// [`lookup`]: EntitySearcher::lookup
    fn result_limit(&self) -> Option<usize> {
        None
    }
}

/// Callback contract driven by the external linear token scan
///
/// The scanner walks the document left to right and reports each section
/// and token it enters or leaves. `start_token` must be called with
/// non-decreasing `token.start` values across the whole document scan.
/// All methods default to no-ops so implementors only override what they
/// observe.
pub trait LinkingStateAware {
    /// The scan entered a section (sentence, chunk)
    fn start_section(&mut self, _span: &Span) {}

    /// The scan left a section
    fn end_section(&mut self, _span: &Span) {}

    /// The scan reached a token; called before the token is linked
    fn start_token(&mut self, _token: &Token) {}

    /// The scan finished linking a token
    fn end_token(&mut self, _token: &Token) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoopScanner;
    impl LinkingStateAware for NoopScanner {}

    #[test]
    fn test_linking_state_aware_defaults() {
        // Default methods must be callable without any override.
        let mut scanner = NoopScanner;
        scanner.start_section(&Span::new(0, 10));
        scanner.start_token(&Token::new(0, 5));
        scanner.end_token(&Token::new(0, 5));
        scanner.end_section(&Span::new(0, 10));
    }

    struct SplitTokenizer;
    impl LabelTokenizer for SplitTokenizer {
        fn tokenize(&self, text: &str, _language: Option<&str>) -> Option<Vec<String>> {
            Some(text.split_whitespace().map(String::from).collect())
        }
    }

    #[test]
    fn test_label_tokenizer_object_safety() {
        let tokenizer: Arc<dyn LabelTokenizer> = Arc::new(SplitTokenizer);
        assert_eq!(
            tokenizer.tokenize("New York", Some("en")),
            Some(vec!["New".to_string(), "York".to_string()])
        );
    }
}
