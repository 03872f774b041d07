//! DXF file reader

mod entity_reader;
mod hatch_reader;
mod section_reader;
mod stream_reader;
mod text_reader;

pub use entity_reader::{build_entity, EntityKind};
pub use section_reader::SectionReader;
pub use stream_reader::{DxfCodePair, DxfStreamReader};
pub use text_reader::DxfTextReader;

use crate::document::DxfDocument;
use crate::error::Result;
use crate::io::dxf::code_page::{encoding_from_code_page, uses_code_page};
use crate::notification::NotificationCollection;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

/// Configuration for the DXF reader.
#[derive(Debug, Clone)]
pub struct DxfReaderConfiguration {
    /// When `false`, only error notifications are recorded.
    ///
    /// Default: `true`.
    pub verbose: bool,
}

impl Default for DxfReaderConfiguration {
    fn default() -> Self {
        Self { verbose: true }
    }
}

/// DXF text reader producing a [`DxfDocument`]
pub struct DxfReader {
    reader: Box<dyn DxfStreamReader>,
    config: DxfReaderConfiguration,
}

impl DxfReader {
    /// Create a new DXF reader from any reader
    pub fn from_reader<R: Read + Seek + 'static>(reader: R) -> Self {
        Self {
            reader: Box::new(DxfTextReader::new(BufReader::new(reader))),
            config: DxfReaderConfiguration::default(),
        }
    }

    /// Create a new DXF reader from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::from_reader(File::open(path)?))
    }

    /// Create a reader over DXF text held in memory
    pub fn from_text(text: &str) -> Self {
        Self::from_reader(Cursor::new(text.as_bytes().to_vec()))
    }

    /// Set the reader configuration.
    pub fn with_configuration(mut self, config: DxfReaderConfiguration) -> Self {
        self.config = config;
        self
    }

    /// Read the whole stream into a document.
    ///
    /// Only a malformed record stream (a code line that is not an integer,
    /// a missing value line) is an error. Everything the reader does not
    /// understand is reported in [`DxfDocument::notifications`].
    pub fn read(mut self) -> Result<DxfDocument> {
        self.read_code_page()?;

        let mut document = DxfDocument::new();
        document.notifications = NotificationCollection::new().with_verbose(self.config.verbose);

        while let Some(pair) = self.reader.read_pair()? {
            if pair.is_marker("EOF") {
                break;
            }
            if !pair.is_marker("SECTION") {
                continue;
            }
            let name = match self.reader.read_pair()? {
                Some(name) if name.code == 2 => name.value_string,
                Some(other) => {
                    self.reader.push_back(other);
                    continue;
                }
                None => break,
            };
            let pairs = self.read_section_body()?;
            Self::read_section(&name, &pairs, &mut document);
        }

        tracing::info!(
            blocks = document.blocks.len(),
            entities = document.entities.len(),
            "DXF read complete"
        );
        Ok(document)
    }

    fn read_section(name: &str, pairs: &[DxfCodePair], document: &mut DxfDocument) {
        let mut section_reader = SectionReader::new(&mut document.notifications);
        match name {
            "HEADER" => document.header = section_reader.read_header(pairs),
            "TABLES" => document.tables = section_reader.read_tables(pairs),
            "BLOCKS" => document.blocks.extend(section_reader.read_blocks(pairs)),
            "ENTITIES" => document.entities.extend(section_reader.read_entities(pairs)),
            "OBJECTS" => document.objects = section_reader.read_objects(pairs),
            other => document
                .notifications
                .warn(format!("Unsupported section: {}", other)),
        }
    }

    /// Records up to the closing ENDSEC, which is consumed
    fn read_section_body(&mut self) -> Result<Vec<DxfCodePair>> {
        let mut pairs = Vec::new();
        while let Some(pair) = self.reader.read_pair()? {
            if pair.is_marker("ENDSEC") {
                break;
            }
            pairs.push(pair);
        }
        Ok(pairs)
    }

    /// Pre-scan the HEADER section for $ACADVER and $DWGCODEPAGE.
    ///
    /// Drawings older than AC1021 are decoded with the code page they name.
    /// The stream is reset to the start afterwards.
    fn read_code_page(&mut self) -> Result<()> {
        let mut version: Option<String> = None;
        let mut code_page: Option<String> = None;
        let mut variable: Option<String> = None;

        while let Some(pair) = self.reader.read_pair()? {
            if pair.is_marker("ENDSEC") || pair.is_marker("EOF") {
                break;
            }
            match (variable.as_deref(), pair.code) {
                (_, 9) => variable = Some(pair.value_string),
                (Some("$ACADVER"), 1) => version = Some(pair.value_string),
                (Some("$DWGCODEPAGE"), 3) => code_page = Some(pair.value_string),
                _ => {}
            }
            if version.is_some() && code_page.is_some() {
                break;
            }
        }

        let legacy = version.as_deref().map_or(true, uses_code_page);
        if legacy {
            if let Some(encoding) = code_page.as_deref().and_then(encoding_from_code_page) {
                self.reader.set_encoding(encoding);
            }
        }

        self.reader.reset()
    }
}
