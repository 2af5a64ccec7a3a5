//! Stream-synchronized mention activation
//!
//! The builder receives candidate mentions from the annotation store and
//! holds them back until the linear document scan has passed their span,
//! so a `lookup` can only ever see entities mentioned *earlier* in the
//! document. Pending mentions are keyed by span end offset; every
//! `start_token` callback flushes the range the cursor moved over.

use crate::mention::{declared_type_field, selected_text_field, EntityMention};
use comention_core::{
    BasicEntity, Entity, EntityId, EntitySearcher, Field, Label, LabelTokenizer,
    LinkingStateAware, MentionConfig, Result, Span, Token,
};
use comention_index::TokenizedEntityIndex;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// What became of a registered candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateOutcome {
    /// Added to the index immediately: spanless, or the scan already
    /// passed the span
    Active,
    /// Buffered until the scan passes the candidate's span
    Pending,
    /// Dropped: the selected text could not be tokenized
    Untokenizable,
    /// Dropped: fewer tokens than the configured minimum
    TooShort,
    /// Dropped: confidence below the configured threshold
    LowConfidence,
    /// Dropped: start/end offsets do not form a valid span
    InvalidSpan,
}

impl CandidateOutcome {
    /// Whether the candidate was kept (active or pending)
    pub fn is_registered(&self) -> bool {
        matches!(self, CandidateOutcome::Active | CandidateOutcome::Pending)
    }
}

/// Builds the in-document co-mention index for one linking pass
///
/// Owns a [`TokenizedEntityIndex`] over the generic label role plus the
/// queue of not-yet-visible mentions. Driven by two inbound streams on the
/// same thread: candidate registrations from the annotation store and
/// [`LinkingStateAware`] callbacks from the token scan. The scan contract
/// requires non-decreasing `token.start` values; a decreasing offset is
/// logged and ignored without flushing anything.
pub struct MentionBuilder {
    index: TokenizedEntityIndex,
    tokenizer: Arc<dyn LabelTokenizer>,
    config: MentionConfig,
    /// Pending mentions keyed by span end offset
    pending: BTreeMap<u32, Vec<Arc<EntityMention>>>,
    /// Highest token start offset observed so far
    last_index: u32,
}

impl MentionBuilder {
    /// Create a builder for one document
    ///
    /// The index activates the untagged language plus the configured
    /// document and fallback languages.
    pub fn new(tokenizer: Arc<dyn LabelTokenizer>, config: MentionConfig) -> Result<Self> {
        config.validate()?;
        let index = TokenizedEntityIndex::new(
            tokenizer.clone(),
            Field::Label,
            config.active_languages(),
        );
        Ok(MentionBuilder {
            index,
            tokenizer,
            config,
            pending: BTreeMap::new(),
            last_index: 0,
        })
    }

    /// The underlying index
    pub fn index(&self) -> &TokenizedEntityIndex {
        &self.index
    }

    /// Number of mentions still waiting for activation
    pub fn pending_count(&self) -> usize {
        self.pending.values().map(Vec::len).sum()
    }

    // ========================================================================
    // Candidate registration
    // ========================================================================

    /// Register an annotation candidate as a potential co-mention anchor
    ///
    /// Applies the registration policy (tokenizable, at least
    /// `min_token_count` tokens, confidence at or above `min_confidence`,
    /// well-formed span) and builds an [`EntityMention`] carrying the
    /// selected text under the mention label field and `types` under the
    /// mention type field. Rejected candidates are logged and dropped;
    /// rejection is a data-quality outcome, never an error.
    pub fn register_candidate(
        &mut self,
        id: impl Into<EntityId>,
        selected_text: &str,
        confidence: Option<f64>,
        start: Option<u32>,
        end: Option<u32>,
        types: &[EntityId],
    ) -> CandidateOutcome {
        let id = id.into();
        let language = self.config.document_language.as_deref();
        let tokens = match self.tokenizer.tokenize(selected_text, language) {
            Some(tokens) => tokens,
            None => {
                warn!(%id, selected_text, "candidate not tokenizable, dropped");
                return CandidateOutcome::Untokenizable;
            }
        };
        if tokens.len() < self.config.min_token_count {
            debug!(%id, selected_text, token_count = tokens.len(), "candidate too short, dropped");
            return CandidateOutcome::TooShort;
        }
        if let Some(confidence) = confidence {
            if confidence < self.config.min_confidence {
                debug!(%id, selected_text, confidence, "candidate below confidence threshold, dropped");
                return CandidateOutcome::LowConfidence;
            }
        }
        let span = match (start, end) {
            (Some(start), Some(end)) => match Span::try_new(start, end) {
                Ok(span) => Some(span),
                Err(err) => {
                    warn!(%id, %err, "candidate has malformed span, dropped");
                    return CandidateOutcome::InvalidSpan;
                }
            },
            _ => None,
        };

        let label = Label {
            text: selected_text.to_string(),
            language: self.config.document_language.clone(),
        };
        let mut entity = BasicEntity::new(id)
            .with_value(selected_text_field().clone(), label);
        for declared_type in types {
            entity = entity.with_reference(declared_type_field().clone(), declared_type.clone());
        }
        let mention = Arc::new(EntityMention::new(
            Arc::new(entity),
            selected_text_field().clone(),
            declared_type_field().clone(),
            span,
        ));
        self.register_mention(mention)
    }

    /// Register an already-built mention
    ///
    /// Spanless mentions have no "not yet seen" semantics and go straight
    /// into the index, as do mentions whose span the cursor has already
    /// passed: the flush range only ever moves forward, so queueing behind
    /// the cursor would strand the mention. Everything else waits until
    /// the scan cursor passes its end offset.
    pub fn register_mention(&mut self, mention: Arc<EntityMention>) -> CandidateOutcome {
        match mention.span() {
            None => {
                debug!(mention = ?mention, "spanless mention active immediately");
                self.index.add_entity(mention);
                CandidateOutcome::Active
            }
            Some(span) if span.end < self.last_index => {
                debug!(
                    mention = ?mention,
                    last_index = self.last_index,
                    "span already elapsed, mention active immediately"
                );
                self.index.add_entity(mention);
                CandidateOutcome::Active
            }
            Some(span) => {
                self.pending.entry(span.end).or_default().push(mention);
                CandidateOutcome::Pending
            }
        }
    }

    // ========================================================================
    // Activation
    // ========================================================================

    /// Flush pending mentions with an end offset in `[last_index, act_index)`
    fn activate_until(&mut self, act_index: u32) {
        let elapsed: Vec<u32> = self
            .pending
            .range(self.last_index..act_index)
            .map(|(end, _)| *end)
            .collect();
        for end in elapsed {
            if let Some(mentions) = self.pending.remove(&end) {
                for mention in mentions {
                    debug!(mention = ?mention, act_index, "mention activated");
                    self.index.add_entity(mention);
                }
            }
        }
        self.last_index = act_index;
    }
}

impl LinkingStateAware for MentionBuilder {
    fn start_token(&mut self, token: &Token) {
        use std::cmp::Ordering;
        match token.start.cmp(&self.last_index) {
            Ordering::Greater => self.activate_until(token.start),
            Ordering::Equal => {}
            Ordering::Less => {
                // Cursor never moves backward; flushing here would leak
                // mentions the scan has not passed.
                warn!(
                    token = %token,
                    last_index = self.last_index,
                    "out-of-order token callback ignored"
                );
            }
        }
    }
}

impl EntitySearcher for MentionBuilder {
    fn lookup(
        &self,
        field: &Field,
        phrases: &[&str],
        languages: &[Option<&str>],
        limit: usize,
        offset: usize,
    ) -> Vec<Arc<dyn Entity>> {
        self.index.lookup(field, phrases, languages, limit, offset)
    }

    fn get(&self, id: &EntityId) -> Option<Arc<dyn Entity>> {
        self.index.get(id)
    }
}

// ============================================================================
// Tests
// ============================================================================
