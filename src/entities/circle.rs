//! Circle entity

use super::{float_value, Entity};
use crate::error::Result;
use crate::record::DxfRecord;

/// A full circle
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    /// Layer name (group code 8)
    pub layer: String,
    /// Center X (group code 10)
    pub x: f64,
    /// Center Y (group code 20)
    pub y: f64,
    /// Radius (group code 40)
    pub radius: f64,
    /// Extrusion direction Z (group code 230)
    pub z_dir: f64,
    records: Vec<DxfRecord>,
}

impl Circle {
    /// Discriminator value of the opener record
    pub const ENTITY_TYPE: &'static str = "CIRCLE";

    /// Create a circle with default values
    pub fn new() -> Self {
        Circle {
            layer: String::new(),
            x: 0.0,
            y: 0.0,
            radius: 0.0,
            z_dir: 1.0,
            records: Vec::new(),
        }
    }

    /// Build a circle from its record block.
    pub fn from_records(records: &[DxfRecord]) -> Result<Self> {
        let mut entity = Circle::new();

        for rec in &records[1..] {
            match rec.code {
                8 => entity.layer = rec.value.clone(),
                10 => entity.x = float_value(rec)?,
                20 => entity.y = float_value(rec)?,
                40 => entity.radius = float_value(rec)?,
                230 => entity.z_dir = float_value(rec)?,
                _ => entity.records.push(rec.clone()),
            }
        }

        Ok(entity)
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Circle {
    fn entity_type(&self) -> &str {
        Circle::ENTITY_TYPE
    }

    fn layer(&self) -> &str {
        &self.layer
    }

    fn records(&self) -> &[DxfRecord] {
        &self.records
    }
}
