//! The drawing API the clipper paints onto.

use crate::geometry::Rect;
use crate::layout::Segment;
use crate::style::Color;

/// A 2D canvas able to stroke rectangles and line segments.
///
/// Implemented by the host toolkit; the clipper only issues stroke calls.
pub trait DrawingSurface {
    fn stroke_rect(&mut self, rect: &Rect, width: f32, color: Color);

    fn stroke_lines(&mut self, segments: &[Segment], width: f32, color: Color);
}

/// A single recorded stroke call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        rect: Rect,
        width: f32,
        color: Color,
    },
    Lines {
        segments: Vec<Segment>,
        width: f32,
        color: Color,
    },
}

/// Surface that records stroke calls instead of rasterizing them.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl DrawingSurface for RecordingSurface {
    fn stroke_rect(&mut self, rect: &Rect, width: f32, color: Color) {
        self.commands.push(DrawCommand::Rect {
            rect: *rect,
            width,
            color,
        });
    }

    fn stroke_lines(&mut self, segments: &[Segment], width: f32, color: Color) {
        self.commands.push(DrawCommand::Lines {
            segments: segments.to_vec(),
            width,
            color,
        });
    }
}
