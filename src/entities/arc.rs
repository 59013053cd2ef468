//! Arc entity

use super::{float_value, Entity};
use crate::error::Result;
use crate::record::DxfRecord;

/// A circular arc.
///
/// Angles are in degrees, measured in the drawing's angle direction
/// (`$ANGDIR`) from its angle base (`$ANGBASE`); see
/// [`crate::geometry::swap_arc_winding`] and
/// [`crate::geometry::rotate_arcs`] for normalizing both.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    /// Layer name (group code 8)
    pub layer: String,
    /// Center X (group code 10)
    pub x: f64,
    /// Center Y (group code 20)
    pub y: f64,
    /// Radius (group code 40)
    pub radius: f64,
    /// Start angle in degrees (group code 50)
    pub start_angle: f64,
    /// End angle in degrees (group code 51)
    pub end_angle: f64,
    /// Extrusion direction Z (group code 230)
    pub z_dir: f64,
    records: Vec<DxfRecord>,
}

impl Arc {
    /// Discriminator value of the opener record
    pub const ENTITY_TYPE: &'static str = "ARC";

    /// Create an arc with default values
    pub fn new() -> Self {
        Arc {
            layer: String::new(),
            x: 0.0,
            y: 0.0,
            radius: 0.0,
            start_angle: 0.0,
            end_angle: 0.0,
            z_dir: 1.0,
            records: Vec::new(),
        }
    }

    /// Build an arc from its record block.
    pub fn from_records(records: &[DxfRecord]) -> Result<Self> {
        let mut entity = Arc::new();

        for rec in &records[1..] {
            match rec.code {
                8 => entity.layer = rec.value.clone(),
                10 => entity.x = float_value(rec)?,
                20 => entity.y = float_value(rec)?,
                40 => entity.radius = float_value(rec)?,
                50 => entity.start_angle = float_value(rec)?,
                51 => entity.end_angle = float_value(rec)?,
                230 => entity.z_dir = float_value(rec)?,
                _ => entity.records.push(rec.clone()),
            }
        }

        Ok(entity)
    }
}

impl Default for Arc {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Arc {
    fn entity_type(&self) -> &str {
        Arc::ENTITY_TYPE
    }

    fn layer(&self) -> &str {
        &self.layer
    }

    fn records(&self) -> &[DxfRecord] {
        &self.records
    }
}
