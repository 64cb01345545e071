//! Unit tests for config loading.

use std::io::Write;

use image_clipper::{
    ClipStyle, ClipperConfig, ClipperError, Color, GridSize, MoveMode, StateColor, TouchMode,
};

#[test]
fn test_empty_config_matches_default_style() {
    let config = ClipperConfig::from_json("{}").unwrap();

    assert_eq!(config, ClipperConfig::default());
    assert_eq!(config.to_style(), ClipStyle::default());
    assert_eq!(config.touch_mode, TouchMode::FullArea);
    assert_eq!(config.move_mode, MoveMode::EdgeWise);
}

#[test]
fn test_overrides_are_scaled_by_density() {
    let config = ClipperConfig::from_json(
        r##"{
            "density": 2.0,
            "grid_columns": 4,
            "grid_rows": 2,
            "corner_tick_length": 12.0,
            "frame_color": { "normal": "#99FFFFFF", "pressed": "#FF00FF00" },
            "corner_color": { "normal": "#102030" },
            "touch_mode": "handle_only",
            "move_mode": "translate"
        }"##,
    )
    .unwrap();
    let style = config.to_style();

    assert_eq!(style.grid, GridSize::new(4, 2));
    assert_eq!(style.corner_tick_length, 24.0);
    assert_eq!(style.min_spacing(), 72.0);
    assert_eq!(style.frame_line_width, 6.0);
    assert_eq!(
        style.frame_color,
        StateColor::new(Color::from_argb(0x99FF_FFFF), Color::from_argb(0xFF00_FF00))
    );
    assert_eq!(
        style.corner_color,
        StateColor::single(Color::from_argb(0xFF10_2030))
    );
    assert_eq!(config.touch_mode, TouchMode::HandleOnly);
    assert_eq!(config.move_mode, MoveMode::Translate);
}

#[test]
fn test_rejects_invalid_values() {
    let cases = [
        r#"{ "density": 0.0 }"#,
        r#"{ "grid_columns": 0 }"#,
        r#"{ "frame_line_width": -1.0 }"#,
    ];
    for json in cases {
        let err = ClipperConfig::from_json(json).unwrap_err();
        assert!(
            matches!(err, ClipperError::InvalidConfig(_)),
            "{json} gave {err:?}"
        );
    }
}

#[test]
fn test_rejects_malformed_json() {
    let cases = [
        r#"{ "grid_color": { "normal": "white" } }"#,
        r#"{ "touch_mode": "anywhere" }"#,
        r#"{ "unknown_field": 1 }"#,
        "not json",
    ];
    for json in cases {
        let err = ClipperConfig::from_json(json).unwrap_err();
        assert!(matches!(err, ClipperError::Json(_)), "{json} gave {err:?}");
    }
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "grid_rows": 5, "move_mode": "translate" }}"#).unwrap();

    let config = ClipperConfig::load(file.path()).unwrap();
    assert_eq!(config.grid_rows, 5);
    assert_eq!(config.move_mode, MoveMode::Translate);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ClipperConfig::load(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, ClipperError::Io(_)));
}
