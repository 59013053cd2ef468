//! ASCII DXF file reader

mod record_reader;

pub use record_reader::AsciiRecordReader;

use crate::document::DxfFile;
use crate::error::Result;
use crate::record::DxfRecord;
use encoding_rs::Encoding;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for the DXF reader.
#[derive(Debug, Clone, Copy, Default)]
pub struct DxfReaderConfiguration {
    /// Fallback encoding for lines that are not valid UTF-8.
    ///
    /// Default: `None` (Latin-1 byte-to-char fallback).
    pub encoding: Option<&'static Encoding>,
}

/// DXF file reader: the front-end tying the record reader to the
/// document assembler.
pub struct DxfReader<R: Read> {
    records: AsciiRecordReader<R>,
}

impl DxfReader<File> {
    /// Create a new DXF reader from a file path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::from_reader(File::open(path)?))
    }
}

impl<R: Read> DxfReader<R> {
    /// Create a new DXF reader from any byte source.
    pub fn from_reader(reader: R) -> Self {
        Self {
            records: AsciiRecordReader::new(reader),
        }
    }

    /// Set the reader configuration.
    pub fn with_configuration(mut self, config: DxfReaderConfiguration) -> Self {
        if let Some(encoding) = config.encoding {
            self.records.set_encoding(encoding);
        }
        self
    }

    /// Read the stream and return the assembled [`DxfFile`].
    pub fn read(self) -> Result<DxfFile> {
        let records = self.records.collect::<Result<Vec<DxfRecord>>>()?;
        DxfFile::make_file(records)
    }
}

/// Heuristically determine whether a stream holds ASCII DXF content.
///
/// Reads up to five records; if that works, it is probably an ASCII DXF
/// file.  This consumes an arbitrary amount of the stream and makes no
/// attempt to rewind it.
pub fn is_ascii_dxf<R: Read>(reader: R) -> bool {
    AsciiRecordReader::new(reader)
        .take(5)
        .all(|record| record.is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::EntityType;
    use std::io::Cursor;

    const MINIMAL: &str = "0\nSECTION\n2\nENTITIES\n0\nLINE\n8\n0\n10\n1.0\n20\n2.0\n11\n3.0\n21\n4.0\n0\nENDSEC\n0\nEOF\n";

    #[test]
    fn test_read_minimal_file() {
        let file = DxfReader::from_reader(Cursor::new(MINIMAL.as_bytes()))
            .read()
            .unwrap();

        let entities = file.entities().unwrap();
        assert_eq!(entities.len(), 1);
        match &entities.entities()[0] {
            EntityType::Line(line) => {
                assert_eq!(line.x1, 1.0);
                assert_eq!(line.y2, 4.0);
            }
            other => panic!("expected a line, got {:?}", other),
        }
    }

    #[test]
    fn test_format_error_propagates() {
        let result = DxfReader::from_reader(Cursor::new(b"nope\nSECTION\n".to_vec())).read();
        assert!(result.is_err());
    }

    #[test]
    fn test_from_nonexistent_file() {
        assert!(DxfReader::from_file("nonexistent.dxf").is_err());
    }

    #[test]
    fn test_is_ascii_dxf() {
        assert!(is_ascii_dxf(Cursor::new(MINIMAL.as_bytes())));
        assert!(!is_ascii_dxf(Cursor::new(b"AutoCAD Binary DXF\r\n\x1a\x00".to_vec())));
        // A short but clean stream still counts.
        assert!(is_ascii_dxf(Cursor::new(b"0\nEOF\n".to_vec())));
    }

    #[test]
    fn test_reader_configuration() {
        let mut bytes = b"0\nSECTION\n2\nENTITIES\n0\nLINE\n8\n".to_vec();
        bytes.extend_from_slice(&[0x83, 0x41]); // Shift-JIS katakana 'a'
        bytes.extend_from_slice(b"\n0\nENDSEC\n");

        let file = DxfReader::from_reader(Cursor::new(bytes))
            .with_configuration(DxfReaderConfiguration {
                encoding: Some(encoding_rs::SHIFT_JIS),
            })
            .read()
            .unwrap();

        use crate::entities::Entity;
        assert_eq!(file.entities().unwrap().entities()[0].layer(), "\u{30a2}");
    }
}
