#![warn(clippy::all, rust_2018_idioms)]

//! Interactive clip frame overlay: a draggable, edge and corner resizable
//! rectangle with grid lines and corner ticks, kept inside fixed bounds.
//!
//! The core is toolkit agnostic. A host feeds pointer events into
//! [`ImageClipper`] and provides a [`DrawingSurface`] to paint on.

pub mod clipper;
pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod resize;
pub mod style;
pub mod surface;

pub use clipper::ImageClipper;
pub use config::ClipperConfig;
pub use error::{ClipperError, ClipperResult};
pub use geometry::{Point, Rect};
pub use hit_test::{ActionMask, TouchMode, classify};
pub use layout::{LineLayout, Segment, layout};
pub use resize::{MoveMode, apply_delta};
pub use style::{ClipStyle, Color, GridSize, StateColor};
pub use surface::{DrawingSurface, RecordingSurface};
