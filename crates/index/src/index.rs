//! Tokenized entity index with ranked multi-phrase lookup
//!
//! This module provides:
//! - TokenizedEntityIndex with token -> entity posting lists
//! - Smallest-posting-first multi-term join
//! - Ranked lookup scored by cumulative matched-phrase character length
//! - Tie-inclusive pagination (a tied score group is never split)
//!
//! The index is built incrementally by a single linear consumer and read by
//! the same thread; there is no internal locking.

use comention_core::{Entity, EntityId, EntitySearcher, Field, LabelTokenizer};
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::Arc;
use tracing::debug;

/// In-memory inverted index over entity labels of one field
///
/// Postings map each lower-cased label token to the entities whose indexed
/// label produced it, in insertion order. Entities are shared read-only
/// handles; the index never hands out mutable access to a posting list.
///
/// # Language activation
///
/// Only labels whose language tag is in the active set are indexed. An
/// empty set at construction activates exactly the untagged language
/// (`None`); a non-empty set activates exactly its members. There is no
/// implicit accept-any mode.
pub struct TokenizedEntityIndex {
    tokenizer: Arc<dyn LabelTokenizer>,
    name_field: Field,
    languages: FxHashSet<Option<String>>,
    postings: FxHashMap<String, Vec<Arc<dyn Entity>>>,
    entities: FxHashMap<EntityId, Arc<dyn Entity>>,
}

impl TokenizedEntityIndex {
    /// Create an empty index for `name_field` and the given language set
    pub fn new(
        tokenizer: Arc<dyn LabelTokenizer>,
        name_field: Field,
        languages: impl IntoIterator<Item = Option<String>>,
    ) -> Self {
        let mut languages: FxHashSet<Option<String>> = languages.into_iter().collect();
        if languages.is_empty() {
            languages.insert(None);
        }
        TokenizedEntityIndex {
            tokenizer,
            name_field,
            languages,
            postings: FxHashMap::default(),
            entities: FxHashMap::default(),
        }
    }

    // ========================================================================
    // Index updates
    // ========================================================================

    /// Add an entity to the index
    ///
    /// Every label under the index's name field whose language is active is
    /// tokenized; the entity is appended to the posting list of each
    /// lower-cased token. Labels the tokenizer cannot handle contribute
    /// nothing. Adding the same entity twice only duplicates postings; it
    /// does not change lookup results (scores are per matched phrase, not
    /// per posting occurrence).
    pub fn add_entity(&mut self, entity: Arc<dyn Entity>) {
        self.entities.insert(entity.id().clone(), entity.clone());
        for label in entity.values(&self.name_field) {
            if !self.languages.contains(&label.language) {
                continue;
            }
            let tokens = match self.tokenizer.tokenize(&label.text, label.language.as_deref()) {
                Some(tokens) if !tokens.is_empty() => tokens,
                _ => {
                    debug!(entity = %entity.id(), label = %label, "label yields no tokens, skipped");
                    continue;
                }
            };
            for token in tokens {
                self.postings
                    .entry(token.to_lowercase())
                    .or_default()
                    .push(entity.clone());
            }
        }
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    /// Number of entities added to the index
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Number of distinct tokens with a posting list
    pub fn token_count(&self) -> usize {
        self.postings.len()
    }

    /// Whether the index holds no entities
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// The field this index was built over
    pub fn name_field(&self) -> &Field {
        &self.name_field
    }

    // ========================================================================
    // Query
    // ========================================================================

    /// Exact-id lookup
    pub fn get(&self, id: &EntityId) -> Option<Arc<dyn Entity>> {
        self.entities.get(id).cloned()
    }

    /// Ranked multi-phrase lookup
    ///
    /// Each phrase is tokenized and joined against the postings; an entity
    /// scores the summed character length of every phrase whose join
    /// contains it. The original engine scored phrase *character length*
    /// rather than token count or term frequency; that behavior is kept
    /// exactly for compatibility. Results are sorted by descending score,
    /// paginated by `offset`/`limit`, and a group of equally-scored
    /// entities at the boundary is always returned whole.
    ///
    /// # Panics
    ///
    /// Panics if `field` is not this index's name field or `languages` has
    /// no overlap with the active language set (caller contract).
    pub fn lookup(
        &self,
        field: &Field,
        phrases: &[&str],
        languages: &[Option<&str>],
        limit: usize,
        offset: usize,
    ) -> Vec<Arc<dyn Entity>> {
        assert!(
            *field == self.name_field,
            "lookup field {field} does not match index field {}",
            self.name_field
        );
        assert!(
            languages
                .iter()
                .any(|lang| self.languages.iter().any(|active| active.as_deref() == *lang)),
            "lookup languages {languages:?} have no overlap with the active language set"
        );
        let phrase_language = languages.first().copied().flatten();

        // Length-weighted OR across phrases: each phrase whose join contains
        // an entity contributes its full character length to that entity.
        let mut scores: FxHashMap<EntityId, (Arc<dyn Entity>, usize)> = FxHashMap::default();
        for phrase in phrases {
            let weight = phrase.chars().count();
            for entity in self.join(phrase, phrase_language) {
                scores
                    .entry(entity.id().clone())
                    .and_modify(|(_, score)| *score += weight)
                    .or_insert((entity, weight));
            }
        }

        let mut ranked: Vec<(Arc<dyn Entity>, usize)> = scores.into_values().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        // Pagination with tie inclusion: once limit is reached, keep taking
        // entities whose score equals the last included one.
        let mut results = Vec::new();
        let mut last_score = None;
        for (entity, score) in ranked.into_iter().skip(offset) {
            if results.len() < limit {
                last_score = Some(score);
                results.push(entity);
            } else if last_score == Some(score) {
                results.push(entity);
            } else {
                break;
            }
        }
        results
    }

    /// Entities present in the posting list of every token of `phrase`
    ///
    /// Intersects starting from the smallest posting list to minimize
    /// comparisons; short-circuits to empty when any token has no postings.
    /// The result is deduplicated by entity id.
    fn join(&self, phrase: &str, language: Option<&str>) -> Vec<Arc<dyn Entity>> {
        let tokens = match self.tokenizer.tokenize(phrase, language) {
            Some(tokens) if !tokens.is_empty() => tokens,
            _ => {
                debug!(phrase, "search phrase yields no tokens, skipped");
                return Vec::new();
            }
        };

        let mut lists: Vec<&Vec<Arc<dyn Entity>>> = Vec::with_capacity(tokens.len());
        for token in &tokens {
            match self.postings.get(&token.to_lowercase()) {
                Some(list) if !list.is_empty() => lists.push(list),
                _ => return Vec::new(),
            }
        }
        lists.sort_by_key(|list| list.len());

        let mut seen = FxHashSet::default();
        let mut joined: Vec<Arc<dyn Entity>> = lists[0]
            .iter()
            .filter(|entity| seen.insert(entity.id().clone()))
            .cloned()
            .collect();
        for list in &lists[1..] {
            if joined.is_empty() {
                break;
            }
            let ids: FxHashSet<&EntityId> = list.iter().map(|entity| entity.id()).collect();
            joined.retain(|entity| ids.contains(entity.id()));
        }
        joined
    }
}

impl EntitySearcher for TokenizedEntityIndex {
    fn lookup(
        &self,
        field: &Field,
        phrases: &[&str],
        languages: &[Option<&str>],
        limit: usize,
        offset: usize,
    ) -> Vec<Arc<dyn Entity>> {
        self.lookup(field, phrases, languages, limit, offset)
    }

    fn get(&self, id: &EntityId) -> Option<Arc<dyn Entity>> {
        self.get(id)
    }
}

// ============================================================================
// Tests
// ============================================================================
