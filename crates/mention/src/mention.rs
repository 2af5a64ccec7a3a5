//! Entity view with role redirection and an optional document span
//!
//! The linking algorithm always queries the generic `Field::Label` and
//! `Field::Type` roles. A mention stores its label and type under concrete
//! per-mention fields; `EntityMention` resolves the two roles to those
//! fields at query time. The redirect targets are fixed at construction,
//! so resolution is a plain enum match with no runtime field-identity
//! tricks.

use comention_core::{Entity, EntityId, Field, Label, Span};
use once_cell::sync::Lazy;
use std::fmt;
use std::sync::Arc;

/// Concrete field holding the selected text of a mention built from an
/// in-text annotation
pub fn selected_text_field() -> &'static Field {
    static FIELD: Lazy<Field> = Lazy::new(|| Field::named("comention:selected-text"));
    Lazy::force(&FIELD)
}

/// Concrete field holding the declared types of a mention
pub fn declared_type_field() -> &'static Field {
    static FIELD: Lazy<Field> = Lazy::new(|| Field::named("comention:declared-type"));
    Lazy::force(&FIELD)
}

/// A mention of an entity, valid from a position in the document
///
/// Wraps the entity carrying the mention data and redirects the generic
/// label/type roles to the mention's concrete fields. The span is the
/// occurrence that established the mention; a mention without a span (for
/// example one derived from document metadata) is valid from the beginning
/// of the document.
///
/// Immutable once constructed. Owned by the [`MentionBuilder`] until its
/// span elapses, then shared read-only with the index.
///
/// [`MentionBuilder`]: crate::builder::MentionBuilder
pub struct EntityMention {
    entity: Arc<dyn Entity>,
    name_field: Field,
    type_field: Field,
    span: Option<Span>,
}

impl EntityMention {
    /// Create a mention over `entity`
    ///
    /// `name_field` and `type_field` are the concrete fields the generic
    /// label/type roles resolve to for this mention.
    pub fn new(
        entity: Arc<dyn Entity>,
        name_field: Field,
        type_field: Field,
        span: Option<Span>,
    ) -> Self {
        EntityMention {
            entity,
            name_field,
            type_field,
            span,
        }
    }

    /// The occurrence that established this mention, if any
    pub fn span(&self) -> Option<Span> {
        self.span
    }

    /// Start offset of the establishing occurrence
    pub fn start(&self) -> Option<u32> {
        self.span.map(|span| span.start)
    }

    /// End offset of the establishing occurrence
    pub fn end(&self) -> Option<u32> {
        self.span.map(|span| span.end)
    }

    fn resolve<'a>(&'a self, field: &'a Field) -> &'a Field {
        match field {
            Field::Label => &self.name_field,
            Field::Type => &self.type_field,
            other => other,
        }
    }
}

impl Entity for EntityMention {
    fn id(&self) -> &EntityId {
        self.entity.id()
    }

    fn values(&self, field: &Field) -> &[Label] {
        self.entity.values(self.resolve(field))
    }

    fn references(&self, field: &Field) -> &[EntityId] {
        self.entity.references(self.resolve(field))
    }
}

impl fmt::Debug for EntityMention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.span {
            Some(span) => write!(f, "EntityMention({} @ {span})", self.id()),
            None => write!(f, "EntityMention({})", self.id()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use comention_core::BasicEntity;

    fn mention_over(span: Option<Span>) -> EntityMention {
        let entity = BasicEntity::new(EntityId::new("urn:anno:1"))
            .with_value(selected_text_field().clone(), Label::tagged("Barack Obama", "en"))
            .with_reference(declared_type_field().clone(), EntityId::new("dbp-ont:Person"))
            .with_value(Field::named("dc:subject"), Label::untagged("politics"));
        EntityMention::new(
            Arc::new(entity),
            selected_text_field().clone(),
            declared_type_field().clone(),
            span,
        )
    }

    #[test]
    fn test_label_role_redirects_to_name_field() {
        let mention = mention_over(None);
        let labels = mention.values(&Field::Label);
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].text, "Barack Obama");
    }

    #[test]
    fn test_type_role_redirects_to_type_field() {
        let mention = mention_over(None);
        let refs = mention.references(&Field::Type);
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].as_str(), "dbp-ont:Person");
    }

    #[test]
    fn test_other_fields_pass_through() {
        let mention = mention_over(None);
        let values = mention.values(&Field::named("dc:subject"));
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].text, "politics");
        // The concrete fields stay reachable under their own names too.
        assert_eq!(mention.values(selected_text_field()).len(), 1);
    }

    #[test]
    fn test_identity_is_wrapped_entity() {
        let mention = mention_over(None);
        assert_eq!(mention.id().as_str(), "urn:anno:1");
    }

    #[test]
    fn test_span_accessors() {
        let mention = mention_over(Some(Span::new(0, 12)));
        assert_eq!(mention.start(), Some(0));
        assert_eq!(mention.end(), Some(12));
        assert_eq!(format!("{mention:?}"), "EntityMention(urn:anno:1 @ [0..12])");
    }

    #[test]
    fn test_spanless_accessors() {
        let mention = mention_over(None);
        assert!(mention.span().is_none());
        assert!(mention.start().is_none());
        assert!(mention.end().is_none());
    }
}
