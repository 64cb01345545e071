//! The interactive clip frame: owns the frame rectangle and drives hit
//! testing, resizing and line layout from pointer events.
//!
//! Gesture flow:
//! - `on_pointer_down` classifies the pointer and stores the action mask
//! - `on_pointer_move` applies drag steps using that mask, never reclassifying
//! - `on_pointer_up` / `on_pointer_cancel` clear the mask; the frame stays put

use tracing::{debug, trace};

use crate::error::{ClipperError, ClipperResult};
use crate::geometry::{Point, Rect};
use crate::hit_test::{self, ActionMask, TouchMode};
use crate::layout::LineLayout;
use crate::resize::{self, MoveMode};
use crate::style::ClipStyle;
use crate::surface::DrawingSurface;

#[derive(Debug, Clone)]
pub struct ImageClipper {
    style: ClipStyle,
    touch_mode: TouchMode,
    move_mode: MoveMode,
    /// `None` until the host reports a valid size.
    bounds: Option<Rect>,
    frame: Rect,
    action: ActionMask,
    pressed: bool,
    lines: LineLayout,
}

impl ImageClipper {
    pub fn new(style: ClipStyle) -> Self {
        Self {
            style,
            touch_mode: TouchMode::default(),
            move_mode: MoveMode::default(),
            bounds: None,
            frame: Rect::default(),
            action: ActionMask::empty(),
            pressed: false,
            lines: LineLayout::default(),
        }
    }

    pub fn with_touch_mode(mut self, touch_mode: TouchMode) -> Self {
        self.touch_mode = touch_mode;
        self
    }

    pub fn with_move_mode(mut self, move_mode: MoveMode) -> Self {
        self.move_mode = move_mode;
        self
    }

    /// Takes effect from the next pointer-down.
    pub fn set_touch_mode(&mut self, touch_mode: TouchMode) {
        self.touch_mode = touch_mode;
    }

    pub fn set_move_mode(&mut self, move_mode: MoveMode) {
        self.move_mode = move_mode;
    }

    /// Reset bounds and frame to a new surface size.
    ///
    /// The frame becomes the whole surface inset by half the wider of the
    /// frame and corner strokes. Any gesture in flight is dropped.
    ///
    /// The inset frame must be at least `min_spacing` on both axes. A smaller
    /// surface is rejected and leaves the clipper without bounds until a
    /// valid size arrives.
    pub fn set_size(&mut self, width: f32, height: f32) -> ClipperResult<()> {
        self.clear_gesture();
        if !(width.is_finite() && height.is_finite()) {
            self.bounds = None;
            return Err(ClipperError::InvalidBounds { width, height });
        }
        let bounds = Rect::from_size(width, height);
        let inset = self.style.frame_inset();
        let frame = bounds.inset(inset, inset);
        let min_spacing = self.style.min_spacing();
        if !(bounds.is_valid()
            && frame.is_valid()
            && frame.width() >= min_spacing
            && frame.height() >= min_spacing)
        {
            self.bounds = None;
            return Err(ClipperError::InvalidBounds { width, height });
        }
        self.bounds = Some(bounds);
        self.frame = frame;
        debug!(width, height, frame = ?self.frame, "Clip frame laid out");
        Ok(())
    }

    /// Start a gesture. Returns whether the pointer landed on the frame.
    pub fn on_pointer_down(&mut self, pointer: Point) -> bool {
        if self.bounds.is_none() {
            return false;
        }
        self.action = hit_test::classify(pointer, &self.frame, &self.style, self.touch_mode);
        self.pressed = !self.action.is_empty();
        debug!(x = pointer.x, y = pointer.y, action = ?self.action, "Pointer down");
        self.pressed
    }

    /// Apply one drag step. `distance_*` is previous minus current pointer
    /// position. Returns whether a gesture is active.
    pub fn on_pointer_move(&mut self, distance_x: f32, distance_y: f32) -> bool {
        let Some(bounds) = self.bounds else {
            return false;
        };
        if self.action.is_empty() {
            return false;
        }
        self.frame = resize::apply_delta(
            &self.frame,
            &bounds,
            self.action,
            distance_x,
            distance_y,
            self.style.min_spacing(),
            self.move_mode,
        );
        trace!(distance_x, distance_y, frame = ?self.frame, "Clip frame dragged");
        true
    }

    pub fn on_pointer_up(&mut self) {
        if !self.action.is_empty() {
            debug!(frame = ?self.frame, "Pointer up");
        }
        self.clear_gesture();
    }

    /// Same as release: no rollback of the frame.
    pub fn on_pointer_cancel(&mut self) {
        if !self.action.is_empty() {
            debug!(frame = ?self.frame, "Pointer cancelled");
        }
        self.clear_gesture();
    }

    fn clear_gesture(&mut self) {
        self.action = ActionMask::empty();
        self.pressed = false;
    }

    /// Recompute the line buffers and stroke frame, grid and corner ticks.
    pub fn draw<S: DrawingSurface + ?Sized>(&mut self, surface: &mut S) {
        if self.bounds.is_none() {
            return;
        }
        self.lines.update(&self.frame, &self.style);

        let style = &self.style;
        surface.stroke_rect(
            &self.frame,
            style.frame_line_width,
            style.frame_color.resolve(self.pressed),
        );
        surface.stroke_lines(
            &self.lines.grid,
            style.grid_line_width,
            style.grid_color.resolve(self.pressed),
        );
        surface.stroke_lines(
            &self.lines.corner,
            style.corner_line_width,
            style.corner_color.resolve(self.pressed),
        );
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    pub fn action_mask(&self) -> ActionMask {
        self.action
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn style(&self) -> &ClipStyle {
        &self.style
    }

    pub fn touch_mode(&self) -> TouchMode {
        self.touch_mode
    }

    pub fn move_mode(&self) -> MoveMode {
        self.move_mode
    }

    /// Line buffers from the last [`draw`](Self::draw).
    pub fn lines(&self) -> &LineLayout {
        &self.lines
    }
}

impl Default for ImageClipper {
    fn default() -> Self {
        Self::new(ClipStyle::default())
    }
}
