//! ASCII DXF record reader
//!
//! Decodes a raw byte stream into a forward-only sequence of
//! [`DxfRecord`]s, two text lines at a time: first the group code, then
//! the value.  The sequence is single-pass and not restartable.

use crate::error::{DxfError, Result};
use crate::record::DxfRecord;
use encoding_rs::Encoding;
use std::io::{BufReader, Read};

/// Lazy record iterator over an ASCII DXF byte stream.
///
/// Reading stops silently the moment a group-code line comes back empty;
/// that is the stream's EOF signal, distinct from the conventional
/// `(0, "EOF")` marker record.
pub struct AsciiRecordReader<R: Read> {
    reader: BufReader<R>,
    line_number: usize,
    /// Non-UTF8 fallback encoding.  `None` means use Latin-1 (byte-to-char).
    encoding: Option<&'static Encoding>,
    finished: bool,
}

impl<R: Read> AsciiRecordReader<R> {
    /// Create a new record reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line_number: 0,
            encoding: None,
            finished: false,
        }
    }

    /// Set the fallback encoding used for lines that are not valid UTF-8.
    pub fn set_encoding(&mut self, encoding: &'static Encoding) {
        self.encoding = Some(encoding);
    }

    /// Read a single line from the stream, handling non-UTF8 bytes
    /// gracefully.  Returns `None` once the stream has no bytes left.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::new();

        loop {
            let mut byte = [0u8; 1];
            match self.reader.read(&mut byte) {
                Ok(0) => {
                    if bytes.is_empty() {
                        return Ok(None);
                    }
                    break;
                }
                Ok(_) => {
                    if byte[0] == b'\n' {
                        break;
                    }
                    bytes.push(byte[0]);
                }
                Err(e) => return Err(e.into()),
            }
        }

        self.line_number += 1;

        // Try UTF-8 first, then the configured encoding or Latin-1.
        let line = match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(e) => {
                let bytes = e.into_bytes();
                if let Some(enc) = self.encoding {
                    let (decoded, _, _) = enc.decode(&bytes);
                    decoded.into_owned()
                } else {
                    // Latin-1 is a 1:1 mapping of bytes 0-255 to code points
                    bytes.iter().map(|&b| b as char).collect()
                }
            }
        };

        Ok(Some(line.trim().to_string()))
    }

    /// Read the next record, or `None` at end of stream.
    fn read_record(&mut self) -> Result<Option<DxfRecord>> {
        let code_line = match self.read_line()? {
            Some(line) if !line.is_empty() => line,
            _ => return Ok(None),
        };

        // A group-code line at the very end of the stream may have no
        // value line; the value is then empty.
        let value = self.read_line()?.unwrap_or_default();

        let code = code_line.parse::<i32>().map_err(|_| {
            DxfError::Parse(format!(
                "group code <{}> at line {} is not a number",
                code_line, self.line_number
            ))
        })?;
        if code < 0 {
            return Err(DxfError::Parse(format!(
                "group code <{}> at line {} is negative",
                code, self.line_number
            )));
        }

        Ok(Some(DxfRecord::new(code, value)))
    }
}

impl<R: Read> Iterator for AsciiRecordReader<R> {
    type Item = Result<DxfRecord>;

    fn next(&mut self) -> Option<Result<DxfRecord>> {
        if self.finished {
            return None;
        }
        match self.read_record() {
            Ok(Some(rec)) => Some(Ok(rec)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(data: &str) -> AsciiRecordReader<Cursor<Vec<u8>>> {
        AsciiRecordReader::new(Cursor::new(data.as_bytes().to_vec()))
    }

    #[test]
    fn test_records_in_file_order() {
        let mut r = reader("0\nSECTION\n2\nENTITIES\n0\nENDSEC\n0\nEOF\n");

        assert_eq!(r.next().unwrap().unwrap(), DxfRecord::new(0, "SECTION"));
        assert_eq!(r.next().unwrap().unwrap(), DxfRecord::new(2, "ENTITIES"));
        assert_eq!(r.next().unwrap().unwrap(), DxfRecord::new(0, "ENDSEC"));
        assert_eq!(r.next().unwrap().unwrap(), DxfRecord::new(0, "EOF"));
        assert!(r.next().is_none());
        // Exactly one empty read terminates; later calls stay terminated.
        assert!(r.next().is_none());
    }

    #[test]
    fn test_whitespace_trimmed() {
        let mut r = reader("  8  \n  walls \r\n");
        assert_eq!(r.next().unwrap().unwrap(), DxfRecord::new(8, "walls"));
    }

    #[test]
    fn test_clean_eof_is_not_an_error() {
        let mut r = reader("");
        assert!(r.next().is_none());
    }

    #[test]
    fn test_blank_line_terminates() {
        let mut r = reader("0\nSECTION\n\n9\n$ACADVER\n");
        assert!(r.next().unwrap().is_ok());
        assert!(r.next().is_none());
    }

    #[test]
    fn test_bad_group_code_is_error() {
        let mut r = reader("zero\nSECTION\n");
        assert!(matches!(r.next(), Some(Err(DxfError::Parse(_)))));
        assert!(r.next().is_none());
    }

    #[test]
    fn test_negative_group_code_is_error() {
        let mut r = reader("-5\nhandle\n");
        assert!(matches!(r.next(), Some(Err(DxfError::Parse(_)))));
    }

    #[test]
    fn test_missing_value_line_yields_empty_value() {
        let mut r = reader("0");
        assert_eq!(r.next().unwrap().unwrap(), DxfRecord::new(0, ""));
        assert!(r.next().is_none());
    }

    #[test]
    fn test_latin1_fallback() {
        let mut bytes = b"8\n".to_vec();
        bytes.extend_from_slice(&[0xe9]); // 'e' acute in Latin-1, invalid UTF-8
        bytes.push(b'\n');
        let mut r = AsciiRecordReader::new(Cursor::new(bytes));
        assert_eq!(r.next().unwrap().unwrap(), DxfRecord::new(8, "\u{e9}"));
    }

    #[test]
    fn test_configured_encoding_fallback() {
        let mut bytes = b"8\n".to_vec();
        bytes.extend_from_slice(&[0x83, 0x41]); // Katakana 'a' in Shift-JIS
        bytes.push(b'\n');
        let mut r = AsciiRecordReader::new(Cursor::new(bytes));
        r.set_encoding(encoding_rs::SHIFT_JIS);
        assert_eq!(r.next().unwrap().unwrap(), DxfRecord::new(8, "\u{30a2}"));
    }
}
