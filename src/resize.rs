//! Constrained resize and move of the frame under a drag.
//!
//! Distances follow the scroll convention of the gesture source: previous
//! pointer position minus current. A flagged edge therefore moves by the
//! negated distance, i.e. along with the pointer.

use serde::{Deserialize, Serialize};

use crate::geometry::{Rect, clamp};
use crate::hit_test::ActionMask;

/// How the all-four [`ActionMask::MOVE`] mask is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveMode {
    /// Every edge moves and is clamped on its own. Near the bounds this
    /// stretches or shrinks the frame instead of stopping it.
    #[default]
    EdgeWise,
    /// The frame is shifted rigidly and stops at the bounds, keeping its size.
    Translate,
}

/// Apply one drag step to `frame`.
///
/// Each flagged edge is re-clamped against the current opposite edge (minus
/// `min_spacing`) and against `bounds`. Edges apply in the order left,
/// right, top, bottom. Unflagged edges are untouched.
pub fn apply_delta(
    frame: &Rect,
    bounds: &Rect,
    mask: ActionMask,
    distance_x: f32,
    distance_y: f32,
    min_spacing: f32,
    move_mode: MoveMode,
) -> Rect {
    if mask.is_move() && move_mode == MoveMode::Translate {
        return translate_within(frame, bounds, -distance_x, -distance_y);
    }

    let mut next = *frame;
    if mask.contains(ActionMask::LEFT) {
        next.left = clamp(
            next.left - distance_x,
            bounds.left,
            next.right - min_spacing,
        );
    }
    if mask.contains(ActionMask::RIGHT) {
        next.right = clamp(
            next.right - distance_x,
            next.left + min_spacing,
            bounds.right,
        );
    }
    if mask.contains(ActionMask::TOP) {
        next.top = clamp(
            next.top - distance_y,
            bounds.top,
            next.bottom - min_spacing,
        );
    }
    if mask.contains(ActionMask::BOTTOM) {
        next.bottom = clamp(
            next.bottom - distance_y,
            next.top + min_spacing,
            bounds.bottom,
        );
    }
    next
}

fn translate_within(frame: &Rect, bounds: &Rect, dx: f32, dy: f32) -> Rect {
    let dx = clamp(dx, bounds.left - frame.left, bounds.right - frame.right);
    let dy = clamp(dy, bounds.top - frame.top, bounds.bottom - frame.bottom);
    frame.translate(dx, dy)
}
