//! DXF (Drawing Exchange Format) text reading

mod code_page;
mod group_code_value;
mod reader;

pub use code_page::encoding_from_code_page;
pub use group_code_value::{GroupCodeValueType, GroupValue};
pub use reader::{
    build_entity, DxfCodePair, DxfReader, DxfReaderConfiguration, DxfStreamReader, DxfTextReader,
    EntityKind, SectionReader,
};
