//! Line widths, colors and grid shape of the clip frame overlay.
//!
//! All lengths are in the same linear unit as the surface coordinates.
//! Density conversion happens once, in [`ClipStyle::with_density`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ClipperError;

pub const DEFAULT_GRID_LINE_WIDTH_DP: f32 = 1.0;
pub const DEFAULT_FRAME_LINE_WIDTH_DP: f32 = 3.0;
pub const DEFAULT_CORNER_LINE_WIDTH_DP: f32 = 3.0;
pub const DEFAULT_CORNER_TICK_LENGTH_DP: f32 = 9.0;
pub const DEFAULT_GRID_LINE_COLOR: Color = Color::from_argb(0x99FF_FFFF);
pub const DEFAULT_FRAME_LINE_COLOR: Color = Color::from_argb(0x99FF_FFFF);
pub const DEFAULT_CORNER_LINE_COLOR: Color = Color::from_argb(0xFFFF_FFFF);

/// Opposing edges never get closer than this many corner ticks.
pub const MIN_SPACING_TICKS: f32 = 3.0;

/// 8-bit ARGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Unpack a `0xAARRGGBB` value.
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    pub const fn to_argb(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

impl FromStr for Color {
    type Err = ClipperError;

    /// Parses `#RRGGBB` (opaque) or `#AARRGGBB`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ClipperError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
        match hex.len() {
            6 => Ok(Self::from_argb(0xFF00_0000 | value)),
            8 => Ok(Self::from_argb(value)),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ClipperError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.to_argb())
    }
}

/// A color that depends on whether the frame is being pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateColor {
    pub normal: Color,
    pub pressed: Color,
}

impl StateColor {
    pub const fn new(normal: Color, pressed: Color) -> Self {
        Self { normal, pressed }
    }

    /// Same color in every state.
    pub const fn single(color: Color) -> Self {
        Self::new(color, color)
    }

    #[inline]
    pub fn resolve(&self, pressed: bool) -> Color {
        if pressed { self.pressed } else { self.normal }
    }
}

/// Number of grid cells across and down the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub columns: usize,
    pub rows: usize,
}

impl GridSize {
    pub const fn new(columns: usize, rows: usize) -> Self {
        Self { columns, rows }
    }

    /// Internal dividers: one less than the cell count on each axis.
    pub fn divider_count(&self) -> usize {
        self.columns.saturating_sub(1) + self.rows.saturating_sub(1)
    }

    /// One tick per grid position on each of the four edges.
    pub fn tick_count(&self) -> usize {
        2 * (self.columns + self.rows)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::new(3, 3)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClipStyle {
    pub grid: GridSize,
    pub grid_line_width: f32,
    pub frame_line_width: f32,
    pub corner_line_width: f32,
    pub corner_tick_length: f32,
    pub grid_color: StateColor,
    pub frame_color: StateColor,
    pub corner_color: StateColor,
}

impl ClipStyle {
    /// Default style scaled from dp by the display density.
    pub fn with_density(density: f32) -> Self {
        Self {
            grid: GridSize::default(),
            grid_line_width: DEFAULT_GRID_LINE_WIDTH_DP * density,
            frame_line_width: DEFAULT_FRAME_LINE_WIDTH_DP * density,
            corner_line_width: DEFAULT_CORNER_LINE_WIDTH_DP * density,
            corner_tick_length: DEFAULT_CORNER_TICK_LENGTH_DP * density,
            grid_color: StateColor::single(DEFAULT_GRID_LINE_COLOR),
            frame_color: StateColor::single(DEFAULT_FRAME_LINE_COLOR),
            corner_color: StateColor::single(DEFAULT_CORNER_LINE_COLOR),
        }
    }

    /// Minimum distance between two opposing frame edges.
    pub fn min_spacing(&self) -> f32 {
        MIN_SPACING_TICKS * self.corner_tick_length
    }

    /// How far the frame sits inside the surface so its stroke stays visible.
    pub fn frame_inset(&self) -> f32 {
        self.frame_line_width.max(self.corner_line_width) * 0.5
    }
}

impl Default for ClipStyle {
    fn default() -> Self {
        Self::with_density(1.0)
    }
}
