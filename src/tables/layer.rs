//! Layer table and layer entries

use crate::error::{DxfError, Result};
use crate::partition::RecordBlockIter;
use crate::record::{DxfRecord, RecordPattern};
use crate::types::Color;

/// A layer definition.
///
/// Synthesized layers (referenced by an entity but never declared in a
/// LAYER table) are marked [`is_default`](Layer::is_default) and are never
/// written back into a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    /// Layer name (group code 2)
    pub name: String,
    /// AutoCAD color index (group code 62)
    pub color_index: i32,
    /// Whether this layer was synthesized rather than declared
    pub is_default: bool,
}

impl Layer {
    /// Build a layer from one LAYER record block.
    pub fn from_records(records: &[DxfRecord]) -> Result<Self> {
        let mut layer = Layer {
            name: String::new(),
            color_index: 0,
            is_default: false,
        };

        for rec in records {
            match rec.code {
                2 => layer.name = rec.value.clone(),
                62 => {
                    layer.color_index = rec.as_int().ok_or_else(|| {
                        DxfError::Parse(format!(
                            "layer color index <{}> is not an integer",
                            rec.value
                        ))
                    })?;
                }
                _ => {}
            }
        }

        Ok(layer)
    }

    /// Synthesize the default layer for an undeclared name.
    pub fn default_layer(name: impl Into<String>) -> Self {
        Layer {
            name: name.into(),
            color_index: 0,
            is_default: true,
        }
    }

    /// The layer's color resolved from its color index
    pub fn color(&self) -> Color {
        Color::from_index(self.color_index)
    }
}

/// The LAYER table: the ordered list of declared layers.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerTable {
    layers: Vec<Layer>,
    records: Vec<DxfRecord>,
}

impl LayerTable {
    /// Discriminator value of the name record
    pub const TABLE_TYPE: &'static str = "LAYER";

    /// Build the layer table from a validated table record block.
    ///
    /// Each layer spans a `(0, "LAYER")` record up to the next code-0
    /// record, whatever it is.
    pub fn from_records(records: &[DxfRecord]) -> Result<Self> {
        let mut layers = Vec::new();

        let mut blocks = RecordBlockIter::new(
            records.to_vec().into_iter(),
            RecordPattern::exact(0, "LAYER"),
            RecordPattern::any(0),
            false,
        );
        for block in blocks.by_ref() {
            layers.push(Layer::from_records(&block)?);
        }

        Ok(LayerTable {
            layers,
            records: blocks.into_top_level_records(),
        })
    }

    /// Declared layers in table order
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Records that were not part of any layer definition
    pub fn records(&self) -> &[DxfRecord] {
        &self.records
    }

    /// Look up a declared layer by name
    pub fn get(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(pairs: &[(i32, &str)]) -> Vec<DxfRecord> {
        pairs.iter().map(|(c, v)| DxfRecord::new(*c, *v)).collect()
    }

    #[test]
    fn test_layer_decoding() {
        let recs = records(&[
            (0, "TABLE"),
            (2, "LAYER"),
            (70, "2"),
            (0, "LAYER"),
            (2, "0"),
            (62, "7"),
            (0, "LAYER"),
            (2, "walls"),
            (62, "1"),
            (0, "ENDTAB"),
        ]);
        let table = LayerTable::from_records(&recs).unwrap();

        assert_eq!(table.layers().len(), 2);
        assert_eq!(table.layers()[0].name, "0");
        assert_eq!(table.layers()[0].color_index, 7);
        assert!(!table.layers()[0].is_default);
        assert_eq!(table.get("walls").unwrap().color_index, 1);
        assert!(table.get("missing").is_none());
    }

    #[test]
    fn test_non_layer_records_kept() {
        let recs = records(&[
            (0, "TABLE"),
            (2, "LAYER"),
            (70, "0"),
            (0, "ENDTAB"),
        ]);
        let table = LayerTable::from_records(&recs).unwrap();
        assert!(table.layers().is_empty());
        // Header records plus the trailing ENDTAB never entered a block.
        assert_eq!(table.records().len(), 4);
    }

    #[test]
    fn test_bad_color_index_is_error() {
        let recs = records(&[
            (0, "TABLE"),
            (2, "LAYER"),
            (0, "LAYER"),
            (2, "walls"),
            (62, "red"),
            (0, "ENDTAB"),
        ]);
        assert!(LayerTable::from_records(&recs).is_err());
    }

    #[test]
    fn test_default_layer() {
        let layer = Layer::default_layer("GHOST");
        assert_eq!(layer.name, "GHOST");
        assert_eq!(layer.color_index, 0);
        assert!(layer.is_default);
        assert_eq!(layer.color(), Color::ByBlock);
    }
}
