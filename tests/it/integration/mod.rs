//! Integration tests driving whole gestures.

mod gesture_tests;
