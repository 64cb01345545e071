//! JSON configuration for the clipper.
//!
//! Every field is optional. Missing lengths fall back to the dp defaults in
//! [`crate::style`], scaled by `density`.
//!
//! ```json
//! {
//!   "density": 2.0,
//!   "grid_columns": 3,
//!   "corner_tick_length": 12.0,
//!   "frame_color": { "normal": "#99FFFFFF", "pressed": "#FFFFFFFF" },
//!   "touch_mode": "handle_only",
//!   "move_mode": "translate"
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ClipperError, ClipperResult};
use crate::hit_test::TouchMode;
use crate::resize::MoveMode;
use crate::style::{
    ClipStyle, Color, DEFAULT_CORNER_LINE_WIDTH_DP, DEFAULT_CORNER_TICK_LENGTH_DP,
    DEFAULT_FRAME_LINE_WIDTH_DP, DEFAULT_GRID_LINE_WIDTH_DP, GridSize, StateColor,
};

/// Environment variable consulted when no config path is given explicitly.
pub const CONFIG_ENV_VAR: &str = "IMAGE_CLIPPER_CONFIG";

/// Color entry in the config file. `pressed` defaults to `normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateColorConfig {
    pub normal: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressed: Option<Color>,
}

impl From<StateColorConfig> for StateColor {
    fn from(config: StateColorConfig) -> Self {
        StateColor::new(config.normal, config.pressed.unwrap_or(config.normal))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClipperConfig {
    pub density: f32,
    pub grid_columns: usize,
    pub grid_rows: usize,
    pub grid_line_width: Option<f32>,
    pub frame_line_width: Option<f32>,
    pub corner_line_width: Option<f32>,
    pub corner_tick_length: Option<f32>,
    pub grid_color: Option<StateColorConfig>,
    pub frame_color: Option<StateColorConfig>,
    pub corner_color: Option<StateColorConfig>,
    pub touch_mode: TouchMode,
    pub move_mode: MoveMode,
}

impl Default for ClipperConfig {
    fn default() -> Self {
        let grid = GridSize::default();
        Self {
            density: 1.0,
            grid_columns: grid.columns,
            grid_rows: grid.rows,
            grid_line_width: None,
            frame_line_width: None,
            corner_line_width: None,
            corner_tick_length: None,
            grid_color: None,
            frame_color: None,
            corner_color: None,
            touch_mode: TouchMode::default(),
            move_mode: MoveMode::default(),
        }
    }
}

impl ClipperConfig {
    /// Read, parse and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> ClipperResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        tracing::debug!(path = %path.display(), "Loaded clipper config");
        Ok(config)
    }

    pub fn from_json(text: &str) -> ClipperResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ClipperResult<()> {
        if !(self.density.is_finite() && self.density > 0.0) {
            return Err(ClipperError::InvalidConfig(format!(
                "density must be positive, got {}",
                self.density
            )));
        }
        if self.grid_columns == 0 || self.grid_rows == 0 {
            return Err(ClipperError::InvalidConfig(format!(
                "grid must have at least one cell, got {}x{}",
                self.grid_columns, self.grid_rows
            )));
        }
        let lengths = [
            ("grid_line_width", self.grid_line_width),
            ("frame_line_width", self.frame_line_width),
            ("corner_line_width", self.corner_line_width),
            ("corner_tick_length", self.corner_tick_length),
        ];
        for (name, value) in lengths {
            if let Some(value) = value {
                if !(value.is_finite() && value >= 0.0) {
                    return Err(ClipperError::InvalidConfig(format!(
                        "{name} must be a non-negative number, got {value}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Build the style, scaling dp lengths by `density`.
    pub fn to_style(&self) -> ClipStyle {
        let dp = |value: Option<f32>, default: f32| value.unwrap_or(default) * self.density;
        let defaults = ClipStyle::default();
        ClipStyle {
            grid: GridSize::new(self.grid_columns, self.grid_rows),
            grid_line_width: dp(self.grid_line_width, DEFAULT_GRID_LINE_WIDTH_DP),
            frame_line_width: dp(self.frame_line_width, DEFAULT_FRAME_LINE_WIDTH_DP),
            corner_line_width: dp(self.corner_line_width, DEFAULT_CORNER_LINE_WIDTH_DP),
            corner_tick_length: dp(self.corner_tick_length, DEFAULT_CORNER_TICK_LENGTH_DP),
            grid_color: self.grid_color.map_or(defaults.grid_color, Into::into),
            frame_color: self.frame_color.map_or(defaults.frame_color, Into::into),
            corner_color: self.corner_color.map_or(defaults.corner_color, Into::into),
        }
    }
}
