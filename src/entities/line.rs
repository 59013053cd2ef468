//! Line entity

use super::{float_value, Entity};
use crate::error::Result;
use crate::record::DxfRecord;

/// A line segment between two points
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Layer name (group code 8)
    pub layer: String,
    /// Start point X (group code 10)
    pub x1: f64,
    /// Start point Y (group code 20)
    pub y1: f64,
    /// End point X (group code 11)
    pub x2: f64,
    /// End point Y (group code 21)
    pub y2: f64,
    /// Extrusion direction Z (group code 230)
    pub z_dir: f64,
    records: Vec<DxfRecord>,
}

impl Line {
    /// Discriminator value of the opener record
    pub const ENTITY_TYPE: &'static str = "LINE";

    /// Create a line with default values
    pub fn new() -> Self {
        Line {
            layer: String::new(),
            x1: 0.0,
            y1: 0.0,
            x2: 0.0,
            y2: 0.0,
            z_dir: 1.0,
            records: Vec::new(),
        }
    }

    /// Build a line from its record block.
    pub fn from_records(records: &[DxfRecord]) -> Result<Self> {
        let mut entity = Line::new();

        for rec in &records[1..] {
            match rec.code {
                8 => entity.layer = rec.value.clone(),
                10 => entity.x1 = float_value(rec)?,
                20 => entity.y1 = float_value(rec)?,
                11 => entity.x2 = float_value(rec)?,
                21 => entity.y2 = float_value(rec)?,
                230 => entity.z_dir = float_value(rec)?,
                _ => entity.records.push(rec.clone()),
            }
        }

        Ok(entity)
    }
}

impl Default for Line {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Line {
    fn entity_type(&self) -> &str {
        Line::ENTITY_TYPE
    }

    fn layer(&self) -> &str {
        &self.layer
    }

    fn records(&self) -> &[DxfRecord] {
        &self.records
    }
}
