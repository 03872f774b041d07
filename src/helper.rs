//! One-stop pipeline over a single drawing.
//!
//! [`Helper`] holds the raw text and computes the parsed document, the
//! flattened entity list and the layer grouping on first access. Each view
//! is computed at most once per `Helper`; build a new one to start over.
//! The caches are not shared between threads.

use crate::denormalise::{denormalise, ExpandOptions, FlatEntity};
use crate::document::DxfDocument;
use crate::error::Result;
use crate::io::dxf::{DxfReader, DxfReaderConfiguration};
use crate::notification::NotificationCollection;
use crate::polyline::PolylineOptions;
use crate::render::{self, PolylineDocument};
use indexmap::IndexMap;
use once_cell::unsync::OnceCell;
use std::cell::RefCell;
use std::io::{Read, Seek, SeekFrom};

/// Options for every stage of a [`Helper`]
#[derive(Debug, Clone, Default)]
pub struct HelperOptions {
    pub reader: DxfReaderConfiguration,
    pub expand: ExpandOptions,
    pub polyline: PolylineOptions,
}

/// Lazily evaluated parse, expand and render pipeline
pub struct Helper {
    source: Vec<u8>,
    options: HelperOptions,
    parsed: OnceCell<DxfDocument>,
    denormalised: OnceCell<Vec<FlatEntity>>,
    groups: OnceCell<IndexMap<String, Vec<usize>>>,
    /// Notifications raised after parsing
    notifications: RefCell<NotificationCollection>,
}

impl Helper {
    /// Pipeline over DXF text held in memory
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::from_bytes(text.into().into_bytes())
    }

    /// Pipeline over the full contents of `reader`, read from the start
    pub fn from_reader<R: Read + Seek>(mut reader: R) -> Result<Self> {
        reader.seek(SeekFrom::Start(0))?;
        let mut source = Vec::new();
        reader.read_to_end(&mut source)?;
        Ok(Self::from_bytes(source))
    }

    fn from_bytes(source: Vec<u8>) -> Self {
        Helper {
            source,
            options: HelperOptions::default(),
            parsed: OnceCell::new(),
            denormalised: OnceCell::new(),
            groups: OnceCell::new(),
            notifications: RefCell::new(NotificationCollection::new()),
        }
    }

    pub fn with_options(mut self, options: HelperOptions) -> Self {
        self.notifications = RefCell::new(NotificationCollection::new().with_verbose(options.reader.verbose));
        self.options = options;
        self
    }

    pub fn options(&self) -> &HelperOptions {
        &self.options
    }

    /// The parsed document
    pub fn parsed(&self) -> Result<&DxfDocument> {
        self.parsed.get_or_try_init(|| {
            DxfReader::from_reader(std::io::Cursor::new(self.source.clone()))
                .with_configuration(self.options.reader.clone())
                .read()
        })
    }

    /// Every entity with its inserts expanded
    pub fn denormalised(&self) -> Result<&[FlatEntity]> {
        let document = self.parsed()?;
        let flat = self.denormalised.get_or_init(|| {
            denormalise(document, &self.options.expand, &mut self.notifications.borrow_mut())
        });
        Ok(flat)
    }

    /// Flattened entities by layer, layers in order of first appearance
    pub fn groups(&self) -> Result<IndexMap<&str, Vec<&FlatEntity>>> {
        let flat = self.denormalised()?;
        let indices = self.groups.get_or_init(|| {
            let mut groups: IndexMap<String, Vec<usize>> = IndexMap::new();
            for (i, entity) in flat.iter().enumerate() {
                groups.entry(entity.layer().to_string()).or_default().push(i);
            }
            groups
        });
        Ok(indices
            .iter()
            .map(|(layer, members)| (layer.as_str(), members.iter().map(|&i| &flat[i]).collect()))
            .collect())
    }

    /// Render as an SVG document
    pub fn to_svg(&self) -> Result<String> {
        let document = self.parsed()?;
        let flat = self.denormalised()?;
        Ok(render::to_svg(
            document,
            flat,
            &self.options.polyline,
            &mut self.notifications.borrow_mut(),
        ))
    }

    /// Render as colored polylines
    pub fn to_polylines(&self) -> Result<PolylineDocument> {
        let document = self.parsed()?;
        let flat = self.denormalised()?;
        Ok(render::to_polylines(
            document,
            flat,
            &self.options.polyline,
            &mut self.notifications.borrow_mut(),
        ))
    }

    /// Everything reported so far: reader notifications first, then those of
    /// the later stages in the order they ran
    pub fn notifications(&self) -> NotificationCollection {
        let mut all = self
            .parsed
            .get()
            .map(|document| document.notifications.clone())
            .unwrap_or_default();
        all.extend(self.notifications.borrow().clone());
        all
    }
}
