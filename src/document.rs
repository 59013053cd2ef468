//! CAD document structure
//!
//! [`DxfFile`] is the root of the parsed tree: an ordered mapping of
//! section name to [`Section`].  It also hosts the layer resolver, which
//! merges declared layers with layers that entities reference but no
//! table ever declares.

use crate::entities::Entity;
use crate::notification::{NotificationCollection, NotificationType};
use crate::record::DxfRecord;
use crate::sections::{EntitiesSection, HeaderSection, Section, TablesSection};
use crate::tables::{Layer, Table};
use crate::Result;
use indexmap::IndexMap;

/// A parsed DXF file.
#[derive(Debug, Clone, Default)]
pub struct DxfFile {
    sections: IndexMap<String, Section>,
    /// Non-fatal conditions recovered from while assembling the file
    pub notifications: NotificationCollection,
}

impl DxfFile {
    /// Create an empty file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a file from a flat record stream.
    ///
    /// Runs a two-state scan: hunting for `(0, "SECTION")`, then
    /// capturing records until `(0, "ENDSEC")`, at which point the
    /// captured block (both delimiters included) becomes one section.
    /// Records outside any section scope (comments, the `EOF` marker)
    /// are discarded.
    ///
    /// A stream that ends while still capturing gets a synthesized
    /// terminator appended so the trailing section survives; some tools
    /// write files without the final `ENDSEC`.
    pub fn make_file<I>(records: I) -> Result<DxfFile>
    where
        I: IntoIterator<Item = DxfRecord>,
    {
        let mut file = DxfFile::new();
        let mut capturing = false;
        let mut pending: Vec<DxfRecord> = Vec::new();

        for rec in records {
            if capturing {
                let ends_section = rec.is_section_end();
                pending.push(rec);
                if ends_section {
                    capturing = false;
                    file.attach_section(Section::from_records(&pending)?);
                    pending.clear();
                }
            } else if rec.code == 0 && rec.value == "SECTION" {
                capturing = true;
                pending.clear();
                pending.push(rec);
            }
        }

        if capturing {
            pending.push(DxfRecord::new(0, "ENDSEC"));
            let section = Section::from_records(&pending)?;
            file.notifications.notify(
                NotificationType::Error,
                format!(
                    "stream ended inside section {}; terminator synthesized",
                    section.name()
                ),
            );
            file.attach_section(section);
        }

        Ok(file)
    }

    fn attach_section(&mut self, section: Section) {
        let name = section.name().to_string();
        if self.sections.insert(name.clone(), section).is_some() {
            self.notifications.notify(
                NotificationType::Warning,
                format!("duplicate section {}; keeping the most recent", name),
            );
        }
    }

    /// Look up a section by name
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Look up a section by name, mutably
    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.get_mut(name)
    }

    /// Iterate over sections in file order
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    /// Section names in file order
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Number of sections
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the file holds no sections
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// The HEADER section, if present
    pub fn header(&self) -> Option<&HeaderSection> {
        match self.section(HeaderSection::SECTION_TYPE) {
            Some(Section::Header(header)) => Some(header),
            _ => None,
        }
    }

    /// The TABLES section, if present
    pub fn tables(&self) -> Option<&TablesSection> {
        match self.section(TablesSection::SECTION_TYPE) {
            Some(Section::Tables(tables)) => Some(tables),
            _ => None,
        }
    }

    /// The ENTITIES section, if present
    pub fn entities(&self) -> Option<&EntitiesSection> {
        match self.section(EntitiesSection::SECTION_TYPE) {
            Some(Section::Entities(entities)) => Some(entities),
            _ => None,
        }
    }

    /// The ENTITIES section, mutably, for post-processing passes
    pub fn entities_mut(&mut self) -> Option<&mut EntitiesSection> {
        match self.section_mut(EntitiesSection::SECTION_TYPE) {
            Some(Section::Entities(entities)) => Some(entities),
            _ => None,
        }
    }

    /// Build the layer resolver for this file.
    ///
    /// Seeded from the TABLES/LAYER table if present, then extended with
    /// a synthesized default layer for every layer name an entity
    /// references without a declaration.
    pub fn layers(&self) -> LayerMap {
        let mut map = LayerMap::new();

        if let Some(tables) = self.tables() {
            if let Some(Table::Layer(layer_table)) = tables.get("LAYER") {
                for layer in layer_table.layers() {
                    map.insert(layer.clone());
                }
            }
        }

        if let Some(entities) = self.entities() {
            for entity in entities {
                if !map.contains(entity.layer()) {
                    map.insert(Layer::default_layer(entity.layer()));
                }
            }
        }

        map
    }
}

/// Lazily-populated mapping from layer name to [`Layer`].
///
/// Lookups through [`resolve`](LayerMap::resolve) never fail: a name with
/// no declared layer gets a default layer synthesized and cached, so any
/// layer name an entity might carry resolves to something.
#[derive(Debug, Clone, Default)]
pub struct LayerMap {
    layers: IndexMap<String, Layer>,
}

impl LayerMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, layer: Layer) {
        self.layers.insert(layer.name.clone(), layer);
    }

    /// Resolve a layer name, synthesizing and caching a default layer if
    /// it was never declared.
    pub fn resolve(&mut self, name: &str) -> &Layer {
        if !self.layers.contains_key(name) {
            self.insert(Layer::default_layer(name));
        }
        &self.layers[name]
    }

    /// Look up a layer without synthesizing
    pub fn get(&self, name: &str) -> Option<&Layer> {
        self.layers.get(name)
    }

    /// Whether a layer is present (declared or already synthesized)
    pub fn contains(&self, name: &str) -> bool {
        self.layers.contains_key(name)
    }

    /// Number of layers currently in the map
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Iterate over layers in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Layer> {
        self.layers.values()
    }
}
