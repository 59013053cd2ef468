//! # dxftree
//!
//! A pure Rust library for reading ASCII DXF CAD files into a typed,
//! navigable document tree.
//!
//! ## Features
//!
//! - Lazy tag-value record reading with encoding fallback
//! - Generic block partitioning with pluggable start/end rules
//! - Extensible per-kind type dispatch with graceful degradation to
//!   generic sections, tables, and entities
//! - Layer resolution merging declared layers with implicit references
//! - Bulge-to-arc conversion, arc angle normalization, and exact
//!   decimal unit conversion
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dxftree::{DxfReader, EntityType};
//!
//! // Read a DXF file
//! let file = DxfReader::from_file("sample.dxf")?.read()?;
//!
//! // Walk the entities and resolve their layers
//! let mut layers = file.layers();
//! if let Some(entities) = file.entities() {
//!     for entity in entities {
//!         if let EntityType::Line(line) = entity {
//!             let color = layers.resolve(&line.layer).color();
//!             println!("LINE on {:?} from ({}, {})", color, line.x1, line.y1);
//!         }
//!     }
//! }
//! # Ok::<(), dxftree::DxfError>(())
//! ```
//!
//! ## Architecture
//!
//! Data flows strictly upward: the record reader decodes `(group code,
//! value)` pairs, the block partitioner groups them into blocks, the
//! per-kind registries build typed sections, tables, and entities from
//! those blocks, and the layer resolver and geometry utilities operate
//! on the finished tree.

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod document;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod io;
pub mod notification;
pub mod partition;
pub mod record;
pub mod registry;
pub mod sections;
pub mod tables;
pub mod types;
pub mod units;

// Re-export commonly used types
pub use error::{DxfError, Result};
pub use record::{DxfRecord, RecordPattern};
pub use partition::RecordBlockIter;
pub use registry::Registry;

// Re-export the document tree
pub use document::{DxfFile, LayerMap};
pub use sections::{EntitiesSection, GenericSection, HeaderSection, HeaderValue, Section, TablesSection};
pub use tables::{GenericTable, Layer, LayerTable, Table};
pub use entities::{Arc, Circle, Entity, EntityType, GenericEntity, Line, Polyline, SeqEnd, Vertex};

// Re-export value types and utilities
pub use types::{Color, Vector2};
pub use units::{AngleDirection, Unit};

// Re-export I/O types
pub use io::dxf::{is_ascii_dxf, AsciiRecordReader, DxfReader, DxfReaderConfiguration};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
