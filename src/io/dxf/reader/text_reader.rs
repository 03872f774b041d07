//! DXF ASCII text reader

use super::stream_reader::{DxfCodePair, DxfStreamReader};
use crate::error::{DxfError, Result};
use encoding_rs::Encoding;
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom};

/// DXF ASCII text file reader
pub struct DxfTextReader<R: Read + Seek> {
    reader: BufReader<R>,
    line_number: usize,
    pushed_back: Option<DxfCodePair>,
    /// Non-UTF8 fallback encoding.  `None` means use Latin-1 (byte-to-char).
    encoding: Option<&'static Encoding>,
}

impl<R: Read + Seek> DxfTextReader<R> {
    /// Create a new DXF text reader
    pub fn new(reader: BufReader<R>) -> Self {
        Self {
            reader,
            line_number: 0,
            pushed_back: None,
            encoding: None,
        }
    }

    /// Read raw bytes up to the next `\n`, `\r` or `\r\n`
    fn read_line_bytes(&mut self) -> Result<Option<Vec<u8>>> {
        let mut bytes = Vec::new();
        let mut saw_any = false;
        loop {
            let buf = self.reader.fill_buf()?;
            if buf.is_empty() {
                return Ok(if saw_any { Some(bytes) } else { None });
            }
            saw_any = true;
            match buf.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(pos) => {
                    let terminator = buf[pos];
                    bytes.extend_from_slice(&buf[..pos]);
                    self.reader.consume(pos + 1);
                    if terminator == b'\r' {
                        let next = self.reader.fill_buf()?;
                        if next.first() == Some(&b'\n') {
                            self.reader.consume(1);
                        }
                    }
                    return Ok(Some(bytes));
                }
                None => {
                    let len = buf.len();
                    bytes.extend_from_slice(buf);
                    self.reader.consume(len);
                }
            }
        }
    }

    /// Read a single trimmed line, decoding non-UTF8 bytes with the
    /// configured encoding or Latin-1
    fn read_line(&mut self) -> Result<Option<String>> {
        let bytes = match self.read_line_bytes()? {
            Some(bytes) => bytes,
            None => return Ok(None),
        };
        self.line_number += 1;

        let line = match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(e) => {
                let bytes = e.into_bytes();
                match self.encoding {
                    Some(enc) => enc.decode(&bytes).0.into_owned(),
                    None => bytes.iter().map(|&b| b as char).collect(),
                }
            }
        };
        Ok(Some(line.trim().to_string()))
    }

    /// Read a code/value pair from the stream
    fn read_pair_internal(&mut self) -> Result<Option<DxfCodePair>> {
        let code_line = match self.read_line()? {
            Some(line) => line,
            None => return Ok(None),
        };

        // A blank code line only appears as trailing padding
        if code_line.is_empty() {
            return Ok(None);
        }

        let code = code_line.parse::<i32>().map_err(|_| {
            DxfError::Parse(format!(
                "Invalid DXF code at line {}: '{}'",
                self.line_number, code_line
            ))
        })?;

        let value_line = match self.read_line()? {
            Some(line) => line,
            None => {
                return Err(DxfError::Parse(format!(
                    "Unexpected EOF after code {} at line {}",
                    code, self.line_number
                )))
            }
        };

        Ok(Some(DxfCodePair::new(code, decode_carets(&value_line))))
    }
}

/// Control characters written in caret notation
fn decode_carets(value: &str) -> String {
    if !value.contains('^') {
        return value.to_string();
    }
    value
        .replace("^J", "\n")
        .replace("^M", "\r")
        .replace("^I", "\t")
        .replace("^ ", "^")
}

impl<R: Read + Seek> DxfStreamReader for DxfTextReader<R> {
    fn read_pair(&mut self) -> Result<Option<DxfCodePair>> {
        if let Some(pair) = self.pushed_back.take() {
            return Ok(Some(pair));
        }
        self.read_pair_internal()
    }

    fn push_back(&mut self, pair: DxfCodePair) {
        self.pushed_back = Some(pair);
    }

    fn reset(&mut self) -> Result<()> {
        self.reader.seek(SeekFrom::Start(0))?;
        self.line_number = 0;
        self.pushed_back = None;
        Ok(())
    }

    fn set_encoding(&mut self, encoding: &'static Encoding) {
        self.encoding = Some(encoding);
    }
}
