//! ENTITIES section

use crate::entities::EntityType;
use crate::partition::RecordBlockIter;
use crate::record::{DxfRecord, RecordPattern};
use crate::Result;

/// The ENTITIES section: drawable entities in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct EntitiesSection {
    entities: Vec<EntityType>,
    records: Vec<DxfRecord>,
}

impl EntitiesSection {
    /// Discriminator value of the name record
    pub const SECTION_TYPE: &'static str = "ENTITIES";

    /// Build the entities section from a validated section record block.
    ///
    /// Every code-0 record both closes the previous entity block and
    /// opens the next, so entities are the runs between consecutive
    /// code-0 records.  The trailing terminator run is dropped by the
    /// partitioner.
    pub fn from_records(records: &[DxfRecord]) -> Result<Self> {
        let mut entities = Vec::new();

        let mut blocks = RecordBlockIter::new(
            records[2..].to_vec().into_iter(),
            RecordPattern::any(0),
            RecordPattern::any(0),
            false,
        );
        for block in blocks.by_ref() {
            entities.push(EntityType::from_records(&block)?);
        }

        Ok(EntitiesSection {
            entities,
            records: blocks.into_top_level_records(),
        })
    }

    /// Entities in original file order
    pub fn entities(&self) -> &[EntityType] {
        &self.entities
    }

    /// Mutable access for post-processing passes
    pub fn entities_mut(&mut self) -> &mut [EntityType] {
        &mut self.entities
    }

    /// Number of entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the section holds no entities
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterate over entities in original file order
    pub fn iter(&self) -> std::slice::Iter<'_, EntityType> {
        self.entities.iter()
    }

    /// Records that were not part of any entity block
    pub fn records(&self) -> &[DxfRecord] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a EntitiesSection {
    type Item = &'a EntityType;
    type IntoIter = std::slice::Iter<'a, EntityType>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Entity;

    fn records(pairs: &[(i32, &str)]) -> Vec<DxfRecord> {
        pairs.iter().map(|(c, v)| DxfRecord::new(*c, *v)).collect()
    }

    #[test]
    fn test_two_lines() {
        let recs = records(&[
            (0, "SECTION"),
            (2, "ENTITIES"),
            (0, "LINE"),
            (8, "0"),
            (10, "0.0"),
            (0, "LINE"),
            (8, "0"),
            (10, "1.0"),
            (0, "ENDSEC"),
        ]);
        let section = EntitiesSection::from_records(&recs).unwrap();

        assert_eq!(section.len(), 2);
        match (&section.entities()[0], &section.entities()[1]) {
            (EntityType::Line(a), EntityType::Line(b)) => {
                assert_eq!(a.x1, 0.0);
                assert_eq!(b.x1, 1.0);
            }
            other => panic!("expected two lines, got {:?}", other),
        }
    }

    #[test]
    fn test_comment_before_first_entity() {
        let recs = records(&[
            (0, "SECTION"),
            (2, "ENTITIES"),
            (999, "machine generated"),
            (0, "CIRCLE"),
            (40, "1.0"),
            (0, "ENDSEC"),
        ]);
        let section = EntitiesSection::from_records(&recs).unwrap();

        assert_eq!(section.len(), 1);
        assert_eq!(section.records(), &records(&[(999, "machine generated")])[..]);
    }

    #[test]
    fn test_empty_section() {
        let recs = records(&[(0, "SECTION"), (2, "ENTITIES"), (0, "ENDSEC")]);
        let section = EntitiesSection::from_records(&recs).unwrap();
        assert!(section.is_empty());
    }

    #[test]
    fn test_entity_order_preserved() {
        let recs = records(&[
            (0, "SECTION"),
            (2, "ENTITIES"),
            (0, "POLYLINE"),
            (8, "a"),
            (0, "VERTEX"),
            (10, "0"),
            (20, "0"),
            (0, "VERTEX"),
            (10, "1"),
            (20, "1"),
            (0, "SEQEND"),
            (0, "ENDSEC"),
        ]);
        let section = EntitiesSection::from_records(&recs).unwrap();
        let names: Vec<&str> = section.iter().map(|e| e.entity_type()).collect();
        assert_eq!(names, vec!["POLYLINE", "VERTEX", "VERTEX", "SEQEND"]);
    }
}
