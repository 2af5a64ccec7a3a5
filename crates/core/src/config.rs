//! Configuration for candidate mention registration
//!
//! Policy knobs controlling which annotation candidates become co-mention
//! anchors. Defaults match the original engine policy: two or more tokens,
//! confidence at least 0.85.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default minimum confidence for a candidate with a confidence value
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.85;

/// Default minimum number of tokens in a candidate's selected text
///
/// Single-token names are excluded because they produce excessive false
/// positives as later-mention anchors. This is a precision/recall
/// trade-off, not an oversight.
pub const DEFAULT_MIN_TOKEN_COUNT: usize = 2;

/// Policy configuration for a mention builder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentionConfig {
    /// Candidates with a confidence below this value are dropped
    pub min_confidence: f64,
    /// Candidates whose selected text yields fewer tokens are dropped
    pub min_token_count: usize,
    /// Language of the processed document; used to tag mention labels and
    /// to tokenize candidate text
    pub document_language: Option<String>,
    /// Fallback matching language activated alongside the document language
    pub default_language: Option<String>,
}

impl Default for MentionConfig {
    fn default() -> Self {
        MentionConfig {
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            min_token_count: DEFAULT_MIN_TOKEN_COUNT,
            document_language: None,
            default_language: None,
        }
    }
}

impl MentionConfig {
    /// Configuration for a document in the given language
    pub fn for_language(language: impl Into<String>) -> Self {
        MentionConfig {
            document_language: Some(language.into()),
            ..Default::default()
        }
    }

    /// Builder: set the confidence threshold
    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    /// Builder: set the minimum token count
    pub fn with_min_token_count(mut self, min_token_count: usize) -> Self {
        self.min_token_count = min_token_count;
        self
    }

    /// Builder: set the fallback matching language
    pub fn with_default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = Some(language.into());
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(Error::InvalidConfig(format!(
                "min_confidence must be within [0, 1], got {}",
                self.min_confidence
            )));
        }
        if self.min_token_count == 0 {
            return Err(Error::InvalidConfig(
                "min_token_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// The language set activated for the mention index
    ///
    /// Untagged labels are always active, plus the document language and
    /// the fallback language when configured. Duplicates collapse.
    pub fn active_languages(&self) -> Vec<Option<String>> {
        let mut languages = vec![None];
        for lang in [&self.document_language, &self.default_language]
            .into_iter()
            .flatten()
        {
            if !languages.iter().any(|l| l.as_deref() == Some(lang.as_str())) {
                languages.push(Some(lang.clone()));
            }
        }
        languages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_values() {
        let config = MentionConfig::default();
        assert_eq!(config.min_confidence, DEFAULT_MIN_CONFIDENCE);
        assert_eq!(config.min_token_count, DEFAULT_MIN_TOKEN_COUNT);
        assert!(config.document_language.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = MentionConfig::for_language("en")
            .with_min_confidence(0.5)
            .with_min_token_count(3)
            .with_default_language("de");
        assert_eq!(config.document_language.as_deref(), Some("en"));
        assert_eq!(config.default_language.as_deref(), Some("de"));
        assert_eq!(config.min_confidence, 0.5);
        assert_eq!(config.min_token_count, 3);
    }

    #[test]
    fn test_validate_rejects_bad_confidence() {
        let config = MentionConfig::default().with_min_confidence(1.5);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let config = MentionConfig::default().with_min_confidence(-0.1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_token_count() {
        let config = MentionConfig::default().with_min_token_count(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_active_languages_untagged_only() {
        let config = MentionConfig::default();
        assert_eq!(config.active_languages(), vec![None]);
    }

    #[test]
    fn test_active_languages_document_and_default() {
        let config = MentionConfig::for_language("en").with_default_language("de");
        let langs = config.active_languages();
        assert_eq!(langs.len(), 3);
        assert!(langs.contains(&None));
        assert!(langs.contains(&Some("en".to_string())));
        assert!(langs.contains(&Some("de".to_string())));
    }

    #[test]
    fn test_active_languages_collapse_duplicates() {
        let config = MentionConfig::for_language("en").with_default_language("en");
        assert_eq!(config.active_languages().len(), 2);
    }
}
