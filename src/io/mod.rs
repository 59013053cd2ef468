//! I/O module for reading CAD files in DXF format

pub mod dxf;

pub use dxf::{is_ascii_dxf, AsciiRecordReader, DxfReader, DxfReaderConfiguration};
