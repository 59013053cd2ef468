//! TABLES section

use crate::partition::RecordBlockIter;
use crate::record::{DxfRecord, RecordPattern};
use crate::tables::Table;
use crate::Result;
use indexmap::IndexMap;

/// The TABLES section: named tables in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct TablesSection {
    tables: IndexMap<String, Table>,
    records: Vec<DxfRecord>,
}

impl TablesSection {
    /// Discriminator value of the name record
    pub const SECTION_TYPE: &'static str = "TABLES";

    /// Build the tables section from a validated section record block.
    ///
    /// Each table spans `(0, "TABLE")` through `(0, "ENDTAB")`, with the
    /// terminator kept inside the block so table constructors can
    /// validate it.
    pub fn from_records(records: &[DxfRecord]) -> Result<Self> {
        let mut tables = IndexMap::new();

        let mut blocks = RecordBlockIter::new(
            records.to_vec().into_iter(),
            RecordPattern::exact(0, "TABLE"),
            RecordPattern::exact(0, "ENDTAB"),
            true,
        );
        for block in blocks.by_ref() {
            let table = Table::from_records(&block)?;
            tables.insert(table.name().to_string(), table);
        }

        Ok(TablesSection {
            tables,
            records: blocks.into_top_level_records(),
        })
    }

    /// Look up a table by name
    pub fn get(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    /// Whether a table is defined
    pub fn contains(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Number of tables
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether the section holds no tables
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Iterate over tables in file order
    pub fn iter(&self) -> impl Iterator<Item = &Table> {
        self.tables.values()
    }

    /// Records that were not part of any table block
    pub fn records(&self) -> &[DxfRecord] {
        &self.records
    }
}
