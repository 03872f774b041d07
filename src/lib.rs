//! # dxf-render
//!
//! Read DXF drawings and turn them into something you can draw.
//!
//! The crate is a pipeline of small stages, each usable on its own:
//!
//! - [`io::dxf::DxfReader`] parses the tag/value text into a [`DxfDocument`]
//!   with its header, layer and style tables, blocks and entities
//! - [`denormalise()`] expands every INSERT into copies of its block's
//!   entities, each carrying the chain of [`Transform`]s that places it
//! - [`polyline::entity_to_polyline`] flattens curves into point lists
//! - [`render::to_polylines`] and [`render::to_svg`] produce colored
//!   polylines or an SVG document
//!
//! [`Helper`] strings the stages together and caches each result.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dxf_render::Helper;
//!
//! let helper = Helper::from_reader(std::fs::File::open("floor.dxf")?)?;
//! std::fs::write("floor.svg", helper.to_svg()?)?;
//! for notification in helper.notifications().iter() {
//!     eprintln!("{}", notification);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Problems that do not stop the pipeline (unsupported entities, missing
//! blocks, bad color indices) are collected in a
//! [`NotificationCollection`] instead of being returned as errors.

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod denormalise;
pub mod document;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod helper;
pub mod io;
pub mod notification;
pub mod polyline;
pub mod render;
pub mod tables;
pub mod types;

pub use denormalise::{denormalise, group_entities_by_layer, ExpandOptions, FlatEntity};
pub use document::DxfDocument;
pub use error::{CurveError, DxfError, Result};
pub use helper::{Helper, HelperOptions};
pub use notification::{Notification, NotificationCollection, NotificationType};
pub use polyline::{entity_to_polyline, PolylineOptions};
pub use render::{to_polylines, to_svg, ColoredPolyline, PolylineDocument};
pub use types::{BoundingBox2D, Rgb, Transform, Vector2, Vector3};

pub use entities::{
    Arc, Block, Circle, Ellipse, Entity, EntityType, Insert, Line, LwPolyline, MText, Point,
    Polyline, Spline, Text,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
