//! Reading drawings

pub mod dxf;

pub use dxf::{DxfReader, DxfReaderConfiguration};
