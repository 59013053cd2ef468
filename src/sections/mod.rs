//! Document sections and dispatch
//!
//! A section block spans `(0, "SECTION")` through `(0, "ENDSEC")`
//! inclusive; its name record `(2, <NAME>)` is the dispatch
//! discriminator.

use crate::error::{DxfError, Result};
use crate::record::DxfRecord;
use crate::registry::Registry;
use once_cell::sync::Lazy;

pub mod entities;
pub mod header;
pub mod tables;

pub use entities::EntitiesSection;
pub use header::{HeaderSection, HeaderValue};
pub use tables::TablesSection;

/// An unrecognized section kept as its raw records.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericSection {
    /// Section name read from the name record
    pub name: String,
    records: Vec<DxfRecord>,
}

impl GenericSection {
    /// Build a generic section from a validated record block.
    pub fn from_records(records: &[DxfRecord]) -> Result<Self> {
        Ok(GenericSection {
            name: records[1].value.clone(),
            records: records[2..records.len() - 1].to_vec(),
        })
    }

    /// Records between the name record and the terminator
    pub fn records(&self) -> &[DxfRecord] {
        &self.records
    }
}

/// A parsed section of any supported kind
#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    /// HEADER section (drawing variables)
    Header(HeaderSection),
    /// TABLES section (named tables)
    Tables(TablesSection),
    /// ENTITIES section (drawable entities)
    Entities(EntitiesSection),
    /// Any section without a registered constructor
    Generic(GenericSection),
}

static SECTION_FACTORIES: Lazy<Registry<Section>> = Lazy::new(Section::default_registry);

impl Section {
    /// Construct a section from a record block using the built-in
    /// registry.
    ///
    /// Validates the structural frame before dispatching on the name
    /// record: at least an opener, a name record, and a terminator, with
    /// the name record second and `(0, "ENDSEC")` last.
    pub fn from_records(records: &[DxfRecord]) -> Result<Section> {
        Self::from_records_with(&SECTION_FACTORIES, records)
    }

    /// Construct a section from a record block using a caller-supplied
    /// registry.
    pub fn from_records_with(
        registry: &Registry<Section>,
        records: &[DxfRecord],
    ) -> Result<Section> {
        if records.len() < 3 {
            return Err(DxfError::Parse(
                "sections must consist of at least a start record, name record, and end record"
                    .to_string(),
            ));
        }
        if records[1].code != 2 {
            return Err(DxfError::Parse(
                "section start records must be immediately followed by a section name record"
                    .to_string(),
            ));
        }
        if !records[records.len() - 1].is_section_end() {
            return Err(DxfError::Parse(
                "section records must end with an end record".to_string(),
            ));
        }

        registry.construct(&records[1].value, records)
    }

    /// The registry with every built-in section constructor registered.
    pub fn default_registry() -> Registry<Section> {
        let mut registry = Registry::new(
            (|records| GenericSection::from_records(records).map(Section::Generic))
                as fn(&[DxfRecord]) -> Result<Section>,
        );
        registry.register(HeaderSection::SECTION_TYPE, |records| {
            HeaderSection::from_records(records).map(Section::Header)
        });
        registry.register(TablesSection::SECTION_TYPE, |records| {
            TablesSection::from_records(records).map(Section::Tables)
        });
        registry.register(EntitiesSection::SECTION_TYPE, |records| {
            EntitiesSection::from_records(records).map(Section::Entities)
        });
        registry
    }

    /// The section's name
    pub fn name(&self) -> &str {
        match self {
            Section::Header(_) => HeaderSection::SECTION_TYPE,
            Section::Tables(_) => TablesSection::SECTION_TYPE,
            Section::Entities(_) => EntitiesSection::SECTION_TYPE,
            Section::Generic(s) => &s.name,
        }
    }

    /// Records the section's constructor did not consume into typed
    /// payload
    pub fn records(&self) -> &[DxfRecord] {
        match self {
            Section::Header(s) => s.records(),
            Section::Tables(s) => s.records(),
            Section::Entities(s) => s.records(),
            Section::Generic(s) => s.records(),
        }
    }
}
