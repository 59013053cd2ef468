//! CAD entity types and dispatch
//!
//! Each entity is parsed from one record block whose first record is the
//! structural opener `(0, <TYPE>)`.  Group codes an entity recognizes
//! become typed fields; everything else is preserved verbatim in the
//! entity's leftover records.

use crate::error::{DxfError, Result};
use crate::record::DxfRecord;
use crate::registry::Registry;
use once_cell::sync::Lazy;

pub mod arc;
pub mod circle;
pub mod line;
pub mod polyline;
pub mod seqend;
pub mod vertex;

pub use arc::Arc;
pub use circle::Circle;
pub use line::Line;
pub use polyline::Polyline;
pub use seqend::SeqEnd;
pub use vertex::Vertex;

/// Base trait for all CAD entities
pub trait Entity {
    /// The entity's type name (the value of its opener record)
    fn entity_type(&self) -> &str;

    /// The entity's layer name
    fn layer(&self) -> &str;

    /// Records not decoded into typed fields, in original order
    fn records(&self) -> &[DxfRecord];
}

/// An entity whose type has no registered constructor.
///
/// Stores the layer name and every other record verbatim so nothing from
/// the source block is lost.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericEntity {
    /// Type name read from the opener record
    pub name: String,
    /// Layer name (group code 8)
    pub layer: String,
    records: Vec<DxfRecord>,
}

impl GenericEntity {
    /// Build a generic entity from a record block.
    pub fn from_records(records: &[DxfRecord]) -> Result<Self> {
        let mut entity = GenericEntity {
            name: records[0].value.clone(),
            layer: String::new(),
            records: Vec::new(),
        };

        for rec in &records[1..] {
            if rec.code == 8 {
                entity.layer = rec.value.clone();
            } else {
                entity.records.push(rec.clone());
            }
        }

        Ok(entity)
    }
}

impl Entity for GenericEntity {
    fn entity_type(&self) -> &str {
        &self.name
    }

    fn layer(&self) -> &str {
        &self.layer
    }

    fn records(&self) -> &[DxfRecord] {
        &self.records
    }
}

/// A parsed entity of any supported kind
#[derive(Debug, Clone, PartialEq)]
pub enum EntityType {
    /// Line entity
    Line(Line),
    /// Circle entity
    Circle(Circle),
    /// Arc entity
    Arc(Arc),
    /// Polyline entity (vertices follow as sibling entities)
    Polyline(Polyline),
    /// Polyline vertex entity
    Vertex(Vertex),
    /// Vertex sequence terminator
    SeqEnd(SeqEnd),
    /// Any entity without a registered constructor
    Generic(GenericEntity),
}

static ENTITY_FACTORIES: Lazy<Registry<EntityType>> = Lazy::new(EntityType::default_registry);

impl EntityType {
    /// Construct an entity from a record block using the built-in
    /// registry.
    ///
    /// The discriminator is the first record's value.  Unknown types fall
    /// back to [`GenericEntity`].
    pub fn from_records(records: &[DxfRecord]) -> Result<EntityType> {
        Self::from_records_with(&ENTITY_FACTORIES, records)
    }

    /// Construct an entity from a record block using a caller-supplied
    /// registry.
    pub fn from_records_with(
        registry: &Registry<EntityType>,
        records: &[DxfRecord],
    ) -> Result<EntityType> {
        if records.is_empty() {
            return Err(DxfError::Parse(
                "entities must have at least one record".to_string(),
            ));
        }
        registry.construct(&records[0].value, records)
    }

    /// The registry with every built-in entity constructor registered.
    ///
    /// Extend a copy of this (or a fresh one) with [`Registry::register`]
    /// to support vendor-specific entity types.
    pub fn default_registry() -> Registry<EntityType> {
        let mut registry = Registry::new(
            (|records| GenericEntity::from_records(records).map(EntityType::Generic))
                as fn(&[DxfRecord]) -> Result<EntityType>,
        );
        registry.register(Line::ENTITY_TYPE, |records| {
            Line::from_records(records).map(EntityType::Line)
        });
        registry.register(Circle::ENTITY_TYPE, |records| {
            Circle::from_records(records).map(EntityType::Circle)
        });
        registry.register(Arc::ENTITY_TYPE, |records| {
            Arc::from_records(records).map(EntityType::Arc)
        });
        registry.register(Polyline::ENTITY_TYPE, |records| {
            Polyline::from_records(records).map(EntityType::Polyline)
        });
        registry.register(Vertex::ENTITY_TYPE, |records| {
            Vertex::from_records(records).map(EntityType::Vertex)
        });
        registry.register(SeqEnd::ENTITY_TYPE, |records| {
            SeqEnd::from_records(records).map(EntityType::SeqEnd)
        });
        registry
    }
}

impl Entity for EntityType {
    fn entity_type(&self) -> &str {
        match self {
            EntityType::Line(e) => e.entity_type(),
            EntityType::Circle(e) => e.entity_type(),
            EntityType::Arc(e) => e.entity_type(),
            EntityType::Polyline(e) => e.entity_type(),
            EntityType::Vertex(e) => e.entity_type(),
            EntityType::SeqEnd(e) => e.entity_type(),
            EntityType::Generic(e) => e.entity_type(),
        }
    }

    fn layer(&self) -> &str {
        match self {
            EntityType::Line(e) => e.layer(),
            EntityType::Circle(e) => e.layer(),
            EntityType::Arc(e) => e.layer(),
            EntityType::Polyline(e) => e.layer(),
            EntityType::Vertex(e) => e.layer(),
            EntityType::SeqEnd(e) => e.layer(),
            EntityType::Generic(e) => e.layer(),
        }
    }

    fn records(&self) -> &[DxfRecord] {
        match self {
            EntityType::Line(e) => e.records(),
            EntityType::Circle(e) => e.records(),
            EntityType::Arc(e) => e.records(),
            EntityType::Polyline(e) => e.records(),
            EntityType::Vertex(e) => e.records(),
            EntityType::SeqEnd(e) => e.records(),
            EntityType::Generic(e) => e.records(),
        }
    }
}

/// Decode a record's value as a double, raising a format error on bad
/// input.
pub(crate) fn float_value(rec: &DxfRecord) -> Result<f64> {
    rec.as_double().ok_or_else(|| {
        DxfError::Parse(format!(
            "group {} value <{}> is not a number",
            rec.code, rec.value
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(pairs: &[(i32, &str)]) -> Vec<DxfRecord> {
        pairs.iter().map(|(c, v)| DxfRecord::new(*c, *v)).collect()
    }

    #[test]
    fn test_dispatch_known_type() {
        let recs = records(&[(0, "LINE"), (8, "walls"), (10, "1.0"), (20, "2.0")]);
        let entity = EntityType::from_records(&recs).unwrap();
        assert!(matches!(entity, EntityType::Line(_)));
        assert_eq!(entity.layer(), "walls");
    }

    #[test]
    fn test_unknown_type_falls_back_to_generic() {
        let recs = records(&[(0, "ACME_WIDGET"), (8, "0"), (1001, "vendor data")]);
        let entity = EntityType::from_records(&recs).unwrap();
        match entity {
            EntityType::Generic(ref g) => {
                assert_eq!(g.name, "ACME_WIDGET");
                assert_eq!(g.layer, "0");
                assert_eq!(g.records(), &records(&[(1001, "vendor data")])[..]);
            }
            other => panic!("expected generic entity, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_block_is_error() {
        assert!(EntityType::from_records(&[]).is_err());
    }

    #[test]
    fn test_custom_registration_wins() {
        let mut registry = EntityType::default_registry();
        registry.register("LINE", |records| {
            GenericEntity::from_records(records).map(EntityType::Generic)
        });

        let recs = records(&[(0, "LINE"), (8, "0")]);
        let entity = EntityType::from_records_with(&registry, &recs).unwrap();
        assert!(matches!(entity, EntityType::Generic(_)));
    }
}
