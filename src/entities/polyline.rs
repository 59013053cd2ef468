//! Polyline entity
//!
//! A POLYLINE carries no geometry of its own; its vertices arrive as
//! sibling [`crate::entities::Vertex`] entities terminated by a
//! [`crate::entities::SeqEnd`].

use super::Entity;
use crate::error::Result;
use crate::record::DxfRecord;

/// A polyline header entity
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    /// Layer name (group code 8)
    pub layer: String,
    records: Vec<DxfRecord>,
}

impl Polyline {
    /// Discriminator value of the opener record
    pub const ENTITY_TYPE: &'static str = "POLYLINE";

    /// Create a polyline with default values
    pub fn new() -> Self {
        Polyline {
            layer: String::new(),
            records: Vec::new(),
        }
    }

    /// Build a polyline from its record block.
    pub fn from_records(records: &[DxfRecord]) -> Result<Self> {
        let mut entity = Polyline::new();

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

impl Default for Polyline {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Polyline {
    fn entity_type(&self) -> &str {
        Polyline::ENTITY_TYPE
    }

    fn layer(&self) -> &str {
        &self.layer
    }

    fn records(&self) -> &[DxfRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_polyline() {
        let recs = vec![
            DxfRecord::new(0, "POLYLINE"),
            DxfRecord::new(8, "outline"),
            DxfRecord::new(66, "1"),
        ];
        let polyline = Polyline::from_records(&recs).unwrap();
        assert_eq!(polyline.layer, "outline");
        assert_eq!(polyline.records(), &[DxfRecord::new(66, "1")][..]);
    }
}
