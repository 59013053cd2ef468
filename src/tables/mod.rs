//! CAD table types and dispatch
//!
//! A table block spans `(0, "TABLE")` through `(0, "ENDTAB")` inclusive;
//! its name record `(2, <NAME>)` is the dispatch discriminator.

use crate::error::{DxfError, Result};
use crate::record::DxfRecord;
use crate::registry::Registry;
use once_cell::sync::Lazy;

pub mod layer;

pub use layer::{Layer, LayerTable};

/// An unrecognized table kept as its raw records.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericTable {
    /// Table name read from the name record
    pub name: String,
    records: Vec<DxfRecord>,
}

impl GenericTable {
    /// Build a generic table from a validated record block.
    pub fn from_records(records: &[DxfRecord]) -> Result<Self> {
        Ok(GenericTable {
            name: records[1].value.clone(),
            records: records[1..records.len() - 1].to_vec(),
        })
    }

    /// Records between the opener and the terminator, in original order
    pub fn records(&self) -> &[DxfRecord] {
        &self.records
    }
}

/// A parsed table of any supported kind
#[derive(Debug, Clone, PartialEq)]
pub enum Table {
    /// LAYER table
    Layer(LayerTable),
    /// Any table without a registered constructor
    Generic(GenericTable),
}

static TABLE_FACTORIES: Lazy<Registry<Table>> = Lazy::new(Table::default_registry);

impl Table {
    /// Construct a table from a record block using the built-in
    /// registry.
    ///
    /// Validates the structural frame before dispatching on the name
    /// record: at least an opener, a name record, and a terminator, with
    /// the name record second and `(0, "ENDTAB")` last.
    pub fn from_records(records: &[DxfRecord]) -> Result<Table> {
        Self::from_records_with(&TABLE_FACTORIES, records)
    }

    /// Construct a table from a record block using a caller-supplied
    /// registry.
    pub fn from_records_with(registry: &Registry<Table>, records: &[DxfRecord]) -> Result<Table> {
        if records.len() < 3 {
            return Err(DxfError::Parse(
                "tables must have at least a start record, name record, and end record"
                    .to_string(),
            ));
        }
        if records[1].code != 2 {
            return Err(DxfError::Parse(
                "the second record in a table definition must be the table name".to_string(),
            ));
        }
        let last = &records[records.len() - 1];
        if last.code != 0 || last.value != "ENDTAB" {
            return Err(DxfError::Parse(
                "the last record in a table definition must be an end record".to_string(),
            ));
        }

        registry.construct(&records[1].value, records)
    }

    /// The registry with every built-in table constructor registered.
    pub fn default_registry() -> Registry<Table> {
        let mut registry = Registry::new(
            (|records| GenericTable::from_records(records).map(Table::Generic))
                as fn(&[DxfRecord]) -> Result<Table>,
        );
        registry.register(LayerTable::TABLE_TYPE, |records| {
            LayerTable::from_records(records).map(Table::Layer)
        });
        registry
    }

    /// The table's name
    pub fn name(&self) -> &str {
        match self {
            Table::Layer(_) => LayerTable::TABLE_TYPE,
            Table::Generic(t) => &t.name,
        }
    }
}
