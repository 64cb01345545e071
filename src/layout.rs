//! Line layout for the clip frame: grid dividers, frame sides and corner ticks.
//!
//! The buffers are pure derived state. They are regenerated in full from the
//! frame rectangle and style on every draw, so nothing here can go stale.

use crate::geometry::{Point, Rect};
use crate::style::ClipStyle;

/// A straight line between two points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub const fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            from: Point::new(x0, y0),
            to: Point::new(x1, y1),
        }
    }

    pub fn is_vertical(&self) -> bool {
        self.from.x == self.to.x
    }

    pub fn is_horizontal(&self) -> bool {
        self.from.y == self.to.y
    }

    pub fn length(&self) -> f32 {
        (self.to.x - self.from.x).hypot(self.to.y - self.from.y)
    }
}

/// Flatten segments into packed `[x0, y0, x1, y1, ...]` coordinates.
pub fn coords(segments: &[Segment]) -> Vec<f32> {
    segments
        .iter()
        .flat_map(|s| [s.from.x, s.from.y, s.to.x, s.to.y])
        .collect()
}

/// The three segment buffers drawn for one frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineLayout {
    /// Internal dividers: vertical ones first, then horizontal.
    pub grid: Vec<Segment>,
    /// Left, top, right and bottom sides of the frame.
    pub frame: Vec<Segment>,
    /// Ticks on the left and right edges, then on the top and bottom edges.
    pub corner: Vec<Segment>,
}

impl LineLayout {
    /// Regenerate every buffer in place, reusing the allocations.
    pub fn update(&mut self, frame: &Rect, style: &ClipStyle) {
        self.grid.clear();
        self.frame.clear();
        self.corner.clear();
        push_grid_lines(&mut self.grid, frame, style);
        push_frame_lines(&mut self.frame, frame);
        push_corner_lines(&mut self.corner, frame, style);
    }
}

pub fn layout(frame: &Rect, style: &ClipStyle) -> LineLayout {
    let mut lines = LineLayout {
        grid: Vec::with_capacity(style.grid.divider_count()),
        frame: Vec::with_capacity(4),
        corner: Vec::with_capacity(style.grid.tick_count()),
    };
    lines.update(frame, style);
    lines
}

fn push_grid_lines(out: &mut Vec<Segment>, frame: &Rect, style: &ClipStyle) {
    let columns = style.grid.columns.max(1);
    let rows = style.grid.rows.max(1);
    let unit_width = frame.width() / columns as f32;
    let unit_height = frame.height() / rows as f32;
    let half_line = style.frame_line_width * 0.5;

    // Columns
    let top = frame.top + half_line;
    let bottom = frame.bottom - half_line;
    for column in 1..columns {
        let x = frame.left + unit_width * column as f32;
        out.push(Segment::new(x, top, x, bottom));
    }

    // Rows
    let left = frame.left + half_line;
    let right = frame.right - half_line;
    for row in 1..rows {
        let y = frame.top + unit_height * row as f32;
        out.push(Segment::new(left, y, right, y));
    }
}

fn push_frame_lines(out: &mut Vec<Segment>, frame: &Rect) {
    let Rect {
        left,
        top,
        right,
        bottom,
    } = *frame;
    out.push(Segment::new(left, top, left, bottom));
    out.push(Segment::new(left, top, right, top));
    out.push(Segment::new(right, top, right, bottom));
    out.push(Segment::new(left, bottom, right, bottom));
}

/// Tick spans along one edge running from `start` to `end`.
///
/// The outermost ticks are pushed half a frame line past the edge so they
/// cap the corner of the frame stroke.
fn tick_spans(start: f32, end: f32, count: usize, tick: f32, half_line: f32) -> Vec<(f32, f32)> {
    (0..count)
        .map(|section| {
            if section == 0 {
                (start - half_line, start + tick + half_line)
            } else if section == count - 1 {
                (end - tick - half_line, end + half_line)
            } else {
                let center = start + section as f32 * (end - start) / (count - 1) as f32;
                (center - tick * 0.5, center + tick * 0.5)
            }
        })
        .collect()
}

fn push_corner_lines(out: &mut Vec<Segment>, frame: &Rect, style: &ClipStyle) {
    let tick = style.corner_tick_length;
    let half_line = style.frame_line_width * 0.5;

    let vertical = tick_spans(frame.top, frame.bottom, style.grid.rows, tick, half_line);
    for x in [frame.left, frame.right] {
        for &(top, bottom) in &vertical {
            out.push(Segment::new(x, top, x, bottom));
        }
    }

    let horizontal = tick_spans(frame.left, frame.right, style.grid.columns, tick, half_line);
    for y in [frame.top, frame.bottom] {
        for &(left, right) in &horizontal {
            out.push(Segment::new(left, y, right, y));
        }
    }
}
