//! Entity data model
//!
//! This module defines the `Entity` trait consumed by the index and a
//! map-backed `BasicEntity` implementation for upstream callers and tests.
//! Entities are immutable once constructed and shared as `Arc<dyn Entity>`
//! after being handed to an index.

use crate::types::{EntityId, Field, Label};
use rustc_hash::FxHashMap;
use std::fmt;

/// Multi-valued, per-language attribute view of an entity
///
/// The index only reads through this interface; it never mutates an entity.
/// Both accessors return an empty slice for fields the entity does not
/// carry.
pub trait Entity: Send + Sync {
    /// The identity of this entity
    fn id(&self) -> &EntityId;

    /// Language-tagged text values stored under `field`
    fn values(&self, field: &Field) -> &[Label];

    /// Entity references stored under `field`
    fn references(&self, field: &Field) -> &[EntityId];
}

impl fmt::Debug for dyn Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({})", self.id())
    }
}

/// In-memory entity backed by per-field value and reference maps
///
/// Built once with the builder methods, then treated as immutable.
#[derive(Debug, Clone)]
pub struct BasicEntity {
    id: EntityId,
    values: FxHashMap<Field, Vec<Label>>,
    references: FxHashMap<Field, Vec<EntityId>>,
}

impl BasicEntity {
    /// Create an entity with no fields
    pub fn new(id: impl Into<EntityId>) -> Self {
        BasicEntity {
            id: id.into(),
            values: FxHashMap::default(),
            references: FxHashMap::default(),
        }
    }

    /// Builder: append a value under a field
    pub fn with_value(mut self, field: Field, label: Label) -> Self {
        self.values.entry(field).or_default().push(label);
        self
    }

    /// Builder: append a reference under a field
    pub fn with_reference(mut self, field: Field, target: EntityId) -> Self {
        self.references.entry(field).or_default().push(target);
        self
    }
}

impl Entity for BasicEntity {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn values(&self, field: &Field) -> &[Label] {
        self.values.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    fn references(&self, field: &Field) -> &[EntityId] {
        self.references.get(field).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_entity_empty_fields() {
        let entity = BasicEntity::new(EntityId::new("urn:test:1"));
        assert_eq!(entity.id().as_str(), "urn:test:1");
        assert!(entity.values(&Field::Label).is_empty());
        assert!(entity.references(&Field::Type).is_empty());
    }

    #[test]
    fn test_basic_entity_values() {
        let entity = BasicEntity::new(EntityId::new("urn:test:nyc"))
            .with_value(Field::Label, Label::tagged("New York City", "en"))
            .with_value(Field::Label, Label::tagged("Nueva York", "es"));

        let labels = entity.values(&Field::Label);
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].text, "New York City");
        assert_eq!(labels[1].language.as_deref(), Some("es"));
    }

    #[test]
    fn test_basic_entity_references() {
        let entity = BasicEntity::new(EntityId::new("urn:test:nyc"))
            .with_reference(Field::Type, EntityId::new("dbp-ont:Place"));

        let refs = entity.references(&Field::Type);
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].as_str(), "dbp-ont:Place");
        assert!(entity.references(&Field::Label).is_empty());
    }

    #[test]
    fn test_basic_entity_distinct_fields() {
        let entity = BasicEntity::new(EntityId::new("urn:test:1"))
            .with_value(Field::named("skos:prefLabel"), Label::untagged("Athens"))
            .with_value(Field::named("skos:altLabel"), Label::untagged("Athina"));

        assert_eq!(entity.values(&Field::named("skos:prefLabel")).len(), 1);
        assert_eq!(entity.values(&Field::named("skos:altLabel")).len(), 1);
        assert!(entity.values(&Field::Label).is_empty());
    }

    #[test]
    fn test_entity_trait_object() {
        let entity: std::sync::Arc<dyn Entity> = std::sync::Arc::new(
            BasicEntity::new(EntityId::new("urn:test:1"))
                .with_value(Field::Label, Label::untagged("Athens")),
        );
        assert_eq!(entity.values(&Field::Label).len(), 1);
        assert_eq!(format!("{entity:?}"), "Entity(urn:test:1)");
    }
}
