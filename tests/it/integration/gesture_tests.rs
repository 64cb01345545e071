//! Pointer-down / move / up sequences through `ImageClipper`.

use image_clipper::{ActionMask, ClipStyle, ClipperError, ImageClipper, MoveMode, Point, Rect};

use crate::helpers::{INITIAL_FRAME, laid_out_clipper};

#[test]
fn test_set_size_insets_frame() {
    let clipper = laid_out_clipper();

    assert_eq!(clipper.bounds(), Some(Rect::new(0.0, 0.0, 300.0, 300.0)));
    assert_eq!(clipper.frame(), INITIAL_FRAME);
    assert_eq!(clipper.action_mask(), ActionMask::empty());
    assert!(!clipper.is_pressed());
}

#[test]
fn test_drag_left_edge_past_bounds() {
    let mut clipper = laid_out_clipper();

    assert!(clipper.on_pointer_down(Point::new(1.5, 150.0)));
    assert_eq!(clipper.action_mask(), ActionMask::LEFT);
    assert!(clipper.is_pressed());

    assert!(clipper.on_pointer_move(50.0, 0.0));
    assert_eq!(clipper.frame().left, 0.0);
    assert_eq!(clipper.frame().right, 298.5);

    clipper.on_pointer_up();
    assert_eq!(clipper.action_mask(), ActionMask::empty());
    assert!(!clipper.is_pressed());
    assert_eq!(clipper.frame().left, 0.0);
}

#[test]
fn test_drag_from_center_moves_every_edge() {
    let mut clipper = laid_out_clipper();

    assert!(clipper.on_pointer_down(Point::new(150.0, 150.0)));
    assert_eq!(clipper.action_mask(), ActionMask::MOVE);

    clipper.on_pointer_move(10.0, -5.0);
    assert_eq!(clipper.frame(), Rect::new(0.0, 6.5, 288.5, 300.0));
}

#[test]
fn test_translate_mode_drag_from_center() {
    let mut clipper = laid_out_clipper().with_move_mode(MoveMode::Translate);

    // shrink first so there is room to move
    clipper.on_pointer_down(Point::new(298.5, 298.5));
    clipper.on_pointer_move(100.0, 100.0);
    clipper.on_pointer_up();
    assert_eq!(clipper.frame(), Rect::new(1.5, 1.5, 198.5, 198.5));

    clipper.on_pointer_down(clipper.frame().center());
    assert_eq!(clipper.action_mask(), ActionMask::MOVE);
    clipper.on_pointer_move(-50.0, -200.0);
    // vertical travel stops at the bottom bound, size is unchanged
    assert_eq!(clipper.frame(), Rect::new(51.5, 103.0, 248.5, 300.0));
}

#[test]
fn test_pointer_outside_is_not_consumed() {
    let mut clipper = laid_out_clipper();

    assert!(!clipper.on_pointer_down(Point::new(360.0, 360.0)));
    assert_eq!(clipper.action_mask(), ActionMask::empty());
    assert!(!clipper.is_pressed());

    assert!(!clipper.on_pointer_move(-40.0, -40.0));
    assert_eq!(clipper.frame(), INITIAL_FRAME);
}

#[test]
fn test_mask_is_fixed_for_the_whole_gesture() {
    let mut clipper = laid_out_clipper();

    clipper.on_pointer_down(Point::new(1.5, 1.5));
    assert_eq!(clipper.action_mask(), ActionMask::LEFT_TOP);

    // keep dragging well past where the gesture started
    for _ in 0..10 {
        clipper.on_pointer_move(-20.0, -20.0);
        assert_eq!(clipper.action_mask(), ActionMask::LEFT_TOP);
    }
    assert_eq!(clipper.frame(), Rect::new(201.5, 201.5, 298.5, 298.5));
}

#[test]
fn test_cancel_keeps_last_frame() {
    let mut clipper = laid_out_clipper();

    clipper.on_pointer_down(Point::new(150.0, 298.5));
    assert_eq!(clipper.action_mask(), ActionMask::BOTTOM);
    clipper.on_pointer_move(0.0, 48.5);
    clipper.on_pointer_cancel();

    assert_eq!(clipper.frame(), Rect::new(1.5, 1.5, 298.5, 250.0));
    assert_eq!(clipper.action_mask(), ActionMask::empty());
    assert!(!clipper.is_pressed());
    assert!(!clipper.on_pointer_move(0.0, 10.0));
}

#[test]
fn test_resize_resets_frame_and_gesture() {
    let mut clipper = laid_out_clipper();

    clipper.on_pointer_down(Point::new(150.0, 150.0));
    clipper.on_pointer_move(20.0, 20.0);
    clipper.set_size(200.0, 100.0).unwrap();

    assert_eq!(clipper.frame(), Rect::new(1.5, 1.5, 198.5, 98.5));
    assert_eq!(clipper.action_mask(), ActionMask::empty());
    assert!(!clipper.is_pressed());
}

#[test]
fn test_requires_valid_size_before_use() {
    let mut clipper = ImageClipper::new(ClipStyle::default());

    assert!(!clipper.on_pointer_down(Point::new(0.0, 0.0)));
    assert!(!clipper.on_pointer_move(1.0, 1.0));

    for (width, height) in [(0.0, 100.0), (100.0, -1.0), (f32::NAN, 10.0)] {
        let err = clipper.set_size(width, height).unwrap_err();
        assert!(matches!(err, ClipperError::InvalidBounds { .. }));
    }
    assert_eq!(clipper.bounds(), None);
}

#[test]
fn test_rejects_surface_smaller_than_min_spacing() {
    let mut clipper = laid_out_clipper();

    // default style needs 27 of spacing plus a 1.5 inset on each side
    for (width, height) in [(2.0, 2.0), (20.0, 20.0), (29.9, 300.0), (300.0, 29.0)] {
        let err = clipper.set_size(width, height).unwrap_err();
        assert!(matches!(err, ClipperError::InvalidBounds { .. }));
        assert_eq!(clipper.bounds(), None);
        assert!(!clipper.on_pointer_down(Point::new(width - 1.5, height * 0.5)));
    }
}

#[test]
fn test_smallest_surface_keeps_frame_in_bounds() {
    let mut clipper = laid_out_clipper();
    clipper.set_size(30.0, 30.0).unwrap();
    assert_eq!(clipper.frame(), Rect::new(1.5, 1.5, 28.5, 28.5));

    let bounds = clipper.bounds().unwrap();
    let pointers = [
        Point::new(28.5, 15.0),
        Point::new(1.5, 15.0),
        Point::new(15.0, 1.5),
        Point::new(15.0, 28.5),
        Point::new(1.5, 1.5),
        Point::new(15.0, 15.0),
    ];
    for pointer in pointers {
        assert!(clipper.on_pointer_down(pointer), "{pointer:?} missed");
        for (dx, dy) in [(1.0, 0.0), (-40.0, 40.0), (40.0, -40.0), (0.0, -1.0)] {
            clipper.on_pointer_move(dx, dy);
            let frame = clipper.frame();
            assert!(bounds.contains_rect(&frame), "{frame:?} escaped {bounds:?}");
            assert!(frame.width() >= 27.0 - 1e-3 && frame.height() >= 27.0 - 1e-3);
        }
        clipper.on_pointer_up();
    }
}
