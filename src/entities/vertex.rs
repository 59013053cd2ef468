//! Polyline vertex entity

use super::{float_value, Entity};
use crate::error::Result;
use crate::record::DxfRecord;
use crate::types::Vector2;

/// One vertex of a polyline.
///
/// A non-zero [`bulge`](Vertex::bulge) encodes an arc segment to the next
/// vertex; see [`crate::geometry::bulge_to_arc`].
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    /// Layer name (group code 8)
    pub layer: String,
    /// X coordinate (group code 10)
    pub x: f64,
    /// Y coordinate (group code 20)
    pub y: f64,
    /// Z coordinate (group code 30)
    pub z: f64,
    /// Bulge of the segment to the next vertex (group code 42)
    pub bulge: f64,
    records: Vec<DxfRecord>,
}

impl Vertex {
    /// Discriminator value of the opener record
    pub const ENTITY_TYPE: &'static str = "VERTEX";

    /// Create a vertex with default values
    pub fn new() -> Self {
        Vertex {
            layer: String::new(),
            x: 0.0,
            y: 0.0,
            z: 0.0,
            bulge: 0.0,
            records: Vec::new(),
        }
    }

    /// Build a vertex from its record block.
    pub fn from_records(records: &[DxfRecord]) -> Result<Self> {
        let mut entity = Vertex::new();

        for rec in &records[1..] {
            match rec.code {
                8 => entity.layer = rec.value.clone(),
                10 => entity.x = float_value(rec)?,
                20 => entity.y = float_value(rec)?,
                30 => entity.z = float_value(rec)?,
                42 => entity.bulge = float_value(rec)?,
                _ => entity.records.push(rec.clone()),
            }
        }

        Ok(entity)
    }

    /// The vertex position projected onto the XY plane
    pub fn point(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }
}

impl Default for Vertex {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Vertex {
    fn entity_type(&self) -> &str {
        Vertex::ENTITY_TYPE
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

    fn records(pairs: &[(i32, &str)]) -> Vec<DxfRecord> {
        pairs.iter().map(|(c, v)| DxfRecord::new(*c, *v)).collect()
    }

    #[test]
    fn test_parse_vertex() {
        let recs = records(&[
            (0, "VERTEX"),
            (8, "outline"),
            (10, "1.0"),
            (20, "2.0"),
            (30, "0.5"),
            (42, "-0.5"),
        ]);
        let vertex = Vertex::from_records(&recs).unwrap();
        assert_eq!(vertex.point(), Vector2::new(1.0, 2.0));
        assert_eq!(vertex.z, 0.5);
        assert_eq!(vertex.bulge, -0.5);
    }

    #[test]
    fn test_bulge_defaults_to_zero() {
        let recs = records(&[(0, "VERTEX"), (10, "0"), (20, "0")]);
        let vertex = Vertex::from_records(&recs).unwrap();
        assert_eq!(vertex.bulge, 0.0);
    }
}
