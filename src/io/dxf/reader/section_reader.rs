//! Section readers.
//!
//! The document reader hands each section over as the list of records
//! between its name and `ENDSEC`. Every reader here is a fold over that list
//! and reports anything it cannot use to the notification collection.

use super::entity_reader::{self, split_runs};
use super::stream_reader::DxfCodePair;
use crate::document::{HeaderVariables, Layout, Objects, Tables};
use crate::entities::{Block, EntityType};
use crate::notification::{NotificationCollection, NotificationType};
use crate::tables::{Layer, LayerFlags, Table, TableEntry, TextGenerationFlags, TextStyle};
use crate::types::Vector3;

/// Reader for the contents of one section
pub struct SectionReader<'a> {
    notifications: &'a mut NotificationCollection,
}

impl<'a> SectionReader<'a> {
    pub fn new(notifications: &'a mut NotificationCollection) -> Self {
        Self { notifications }
    }

    /// Read the header variables. Each `9` record names the variable the
    /// following records belong to.
    pub fn read_header(&mut self, pairs: &[DxfCodePair]) -> HeaderVariables {
        let mut header = HeaderVariables::default();
        let mut variable: Option<&str> = None;

        for pair in pairs {
            if pair.code == 9 {
                variable = Some(pair.as_str());
                continue;
            }
            match (variable, pair.code) {
                (Some("$ACADVER"), 1) => header.version = Some(pair.value_string.clone()),
                (Some("$MEASUREMENT"), 70) => header.measurement = pair.as_int(),
                (Some("$INSUNITS"), 70) => header.insertion_units = pair.as_int(),
                (Some("$EXTMIN"), 10 | 20 | 30) => {
                    set_axis(header.extents_min.get_or_insert_with(Vector3::default), pair)
                }
                (Some("$EXTMAX"), 10 | 20 | 30) => {
                    set_axis(header.extents_max.get_or_insert_with(Vector3::default), pair)
                }
                (Some("$DIMASZ"), 40) => header.dim_arrow_size = pair.as_double(),
                _ => {}
            }
        }
        header
    }

    /// Read the LAYER and STYLE tables; other tables are skipped
    pub fn read_tables(&mut self, pairs: &[DxfCodePair]) -> Tables {
        let mut tables = Tables::default();
        for body in table_bodies(pairs) {
            let Some(name) = body.iter().find(|p| p.code == 2).map(|p| p.as_str()) else {
                continue;
            };
            match name {
                "LAYER" => tables.layers = self.read_rows(body, "LAYER", build_layer),
                "STYLE" => tables.styles = self.read_rows(body, "STYLE", build_style),
                "LTYPE" => self
                    .notifications
                    .notify(NotificationType::NotSupported, "LTYPE table not supported"),
                _ => {}
            }
        }
        tables
    }

    /// Rows start at a `0` record carrying the table type
    fn read_rows<T, F>(&mut self, body: &[DxfCodePair], table_type: &str, build: F) -> Table<T>
    where
        T: TableEntry,
        F: Fn(&[DxfCodePair]) -> T,
    {
        let mut table = Table::new();
        for row in split_runs(body) {
            if row[0].as_str() != table_type {
                continue;
            }
            let entry = build(&row[1..]);
            if entry.name().is_empty() {
                self.notifications
                    .warn(format!("table row without name in {} table", table_type));
            } else {
                table.insert(entry);
            }
        }
        table
    }

    /// Read block definitions.
    ///
    /// The BLOCK header runs up to the first `0` record; everything from
    /// there to ENDBLK is the block body.
    pub fn read_blocks(&mut self, pairs: &[DxfCodePair]) -> Vec<Block> {
        let mut blocks = Vec::new();
        let mut index = 0;

        while index < pairs.len() {
            if !pairs[index].is_marker("BLOCK") {
                index += 1;
                continue;
            }
            index += 1;

            let mut block = Block::default();
            while let Some(pair) = pairs.get(index).filter(|p| p.code != 0) {
                apply_block_header(&mut block, pair);
                index += 1;
            }

            let body_start = index;
            while pairs.get(index).is_some_and(|p| !p.is_marker("ENDBLK")) {
                index += 1;
            }
            block.entities = self.read_entities(&pairs[body_start..index]);
            blocks.push(block);
        }
        blocks
    }

    /// Read an ENTITIES section or a block body
    pub fn read_entities(&mut self, pairs: &[DxfCodePair]) -> Vec<EntityType> {
        entity_reader::read_entities(pairs, self.notifications)
    }

    /// Read LAYOUT objects; other objects are ignored
    pub fn read_objects(&mut self, pairs: &[DxfCodePair]) -> Objects {
        let layouts = split_runs(pairs)
            .into_iter()
            .filter(|run| run[0].as_str() == "LAYOUT")
            .map(|run| build_layout(&run[1..]))
            .collect();
        Objects { layouts }
    }
}

fn set_axis(point: &mut Vector3, pair: &DxfCodePair) {
    let Some(v) = pair.as_double() else {
        return;
    };
    match pair.code % 10 {
        0 if pair.code < 20 => point.x = v,
        0 if pair.code < 30 => point.y = v,
        _ => point.z = v,
    }
}

/// Bodies of the tables in a TABLES section, between TABLE and ENDTAB
fn table_bodies(pairs: &[DxfCodePair]) -> Vec<&[DxfCodePair]> {
    let mut bodies = Vec::new();
    let mut start = None;
    for (i, pair) in pairs.iter().enumerate() {
        if pair.is_marker("TABLE") {
            start = Some(i + 1);
        } else if pair.is_marker("ENDTAB") {
            if let Some(s) = start.take() {
                bodies.push(&pairs[s..i]);
            }
        }
    }
    bodies
}

fn apply_block_header(block: &mut Block, pair: &DxfCodePair) {
    match pair.code {
        1 => block.xref = Some(pair.value_string.clone()),
        2 => block.name = pair.value_string.clone(),
        10 => block.origin.x = pair.as_double().unwrap_or(block.origin.x),
        20 => block.origin.y = pair.as_double().unwrap_or(block.origin.y),
        30 => block.origin.z = pair.as_double().unwrap_or(block.origin.z),
        67 => {
            if pair.as_int().is_some_and(|v| v != 0) {
                block.paper_space = true;
            }
        }
        410 => block.layout = Some(pair.value_string.clone()),
        _ => {}
    }
}

fn build_layer(records: &[DxfCodePair]) -> Layer {
    records.iter().fold(Layer::new(""), |mut layer, pair| {
        match pair.code {
            2 => layer.name = pair.value_string.clone(),
            6 => layer.line_type = Some(pair.value_string.clone()),
            62 => layer.color_number = pair.as_int().unwrap_or(layer.color_number),
            70 => {
                if let Some(flags) = pair.as_int() {
                    layer.flags = LayerFlags::from_bits_retain(flags);
                }
            }
            290 => layer.plot = pair.as_bool().unwrap_or(true),
            370 => layer.line_weight = pair.as_int(),
            _ => {}
        }
        layer
    })
}

fn build_style(records: &[DxfCodePair]) -> TextStyle {
    records.iter().fold(TextStyle::new(""), |mut style, pair| {
        match pair.code {
            2 => style.name = pair.value_string.clone(),
            3 => style.font_file = Some(pair.value_string.clone()),
            4 => style.big_font_file = Some(pair.value_string.clone()),
            6 => style.line_type = Some(pair.value_string.clone()),
            40 => style.fixed_text_height = pair.as_double().unwrap_or(0.0),
            41 => style.width_factor = pair.as_double().unwrap_or(1.0),
            42 => style.last_height_used = pair.as_double().unwrap_or(0.0),
            50 => style.oblique_angle = pair.as_double().unwrap_or(0.0),
            71 => {
                if let Some(flags) = pair.as_int() {
                    style.flags = TextGenerationFlags::from_bits_retain(flags);
                }
            }
            _ => {}
        }
        style
    })
}

/// Fields before the `AcDbLayout` subclass marker belong to the plot
/// settings, whose codes overlap the layout's own
fn build_layout(records: &[DxfCodePair]) -> Layout {
    let mut layout = Layout::default();
    let mut in_layout = false;
    for pair in records {
        match (in_layout, pair.code) {
            (_, 100) => in_layout = pair.as_str() == "AcDbLayout",
            (false, 5) => layout.handle = Some(pair.value_string.clone()),
            (false, 330) => layout.owner_handle = Some(pair.value_string.clone()),
            (true, 1) => layout.name = pair.value_string.clone(),
            (true, 70) => layout.flags = pair.as_int().unwrap_or(0),
            (true, 71) => layout.tab_order = pair.as_int().unwrap_or(0),
            (true, 10) => layout.min_limits.x = pair.as_double().unwrap_or(0.0),
            (true, 20) => layout.min_limits.y = pair.as_double().unwrap_or(0.0),
            (true, 11) => layout.max_limits.x = pair.as_double().unwrap_or(0.0),
            (true, 21) => layout.max_limits.y = pair.as_double().unwrap_or(0.0),
            (true, 330) => layout.block_record = Some(pair.value_string.clone()),
            _ => {}
        }
    }
    layout
}
