use std::io::Cursor;

use super::*;

#[test]
fn defaults_match_compiled_constants() {
    let cfg = AnimationConfig::default();
    assert_eq!(
        cfg.canvas,
        Canvas {
            width: 800,
            height: 600
        }
    );
    assert_eq!(cfg.frame_count, 60);
    assert_eq!(cfg.delay, FrameDelay(10));
    assert_eq!(cfg.format, VideoFormat::Gif);
    assert_eq!(cfg.frame_range().len_frames(), 60);
    cfg.validate().unwrap();
}

#[test]
fn partial_json_keeps_defaults() {
    let cfg = AnimationConfig::from_reader(Cursor::new(
        r#"{ "frame_count": 12, "delay": 4, "format": "mp4", "figure": { "head_size": 64.0 } }"#,
    ))
    .unwrap();
    assert_eq!(cfg.frame_count, 12);
    assert_eq!(cfg.delay, FrameDelay(4));
    assert_eq!(cfg.format, VideoFormat::Mp4);
    assert_eq!(cfg.out_path, PathBuf::from("animation.mp4"));
    assert_eq!(cfg.figure.head_size, 64.0);
    assert_eq!(cfg.figure.body_height, 200.0);
    assert_eq!(cfg.canvas.width, 800);
}

#[test]
fn json_roundtrip_preserves_config() {
    let mut cfg = AnimationConfig::default();
    cfg.frame_count = 3;
    cfg.out_path = PathBuf::from("out/dance.mp4");
    cfg.format = VideoFormat::Mp4;
    let json = cfg.to_json_pretty().unwrap();
    let back = AnimationConfig::from_reader(Cursor::new(json)).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn invalid_values_are_rejected() {
    let bad_json = AnimationConfig::from_reader(Cursor::new("{ not json"));
    assert!(matches!(bad_json, Err(FigurineError::Serde(_))));

    let zero_canvas = AnimationConfig::from_reader(Cursor::new(
        r#"{ "canvas": { "width": 0, "height": 600 } }"#,
    ));
    assert!(matches!(zero_canvas, Err(FigurineError::Validation(_))));

    let zero_delay = AnimationConfig::from_reader(Cursor::new(r#"{ "delay": 0 }"#));
    assert!(matches!(zero_delay, Err(FigurineError::Validation(_))));

    let mut huge = AnimationConfig::default();
    huge.canvas.width = 100_000;
    assert!(huge.validate().is_err());
}

#[test]
fn zero_frame_count_is_a_valid_config() {
    let cfg = AnimationConfig::from_reader(Cursor::new(r#"{ "frame_count": 0 }"#)).unwrap();
    assert!(cfg.frame_range().is_empty());
}

#[test]
fn video_format_parsing() {
    assert_eq!("GIF".parse::<VideoFormat>().unwrap(), VideoFormat::Gif);
    assert_eq!("mp4".parse::<VideoFormat>().unwrap(), VideoFormat::Mp4);
    assert!("avi".parse::<VideoFormat>().is_err());
    assert_eq!(
        VideoFormat::from_path(Path::new("x/y.MP4")),
        Some(VideoFormat::Mp4)
    );
    assert_eq!(VideoFormat::from_path(Path::new("noext")), None);
    assert_eq!(VideoFormat::Gif.extension(), "gif");
}

#[test]
fn output_extension_picks_format_when_format_is_absent() {
    let cfg = AnimationConfig::from_reader(Cursor::new(r#"{ "out_path": "x.mp4" }"#)).unwrap();
    assert_eq!(cfg.format, VideoFormat::Mp4);

    let cfg = AnimationConfig::from_reader(Cursor::new(r#"{ "out_path": "clip" }"#)).unwrap();
    assert_eq!(cfg.format, VideoFormat::Gif);
}

#[test]
fn conflicting_format_and_extension_are_rejected() {
    let err = AnimationConfig::from_reader(Cursor::new(
        r#"{ "out_path": "x.mp4", "format": "gif" }"#,
    ))
    .unwrap_err();
    assert!(matches!(err, FigurineError::Validation(_)));

    let mut cfg = AnimationConfig::default();
    cfg.out_path = PathBuf::from("x.gif");
    cfg.format = VideoFormat::Mp4;
    assert!(cfg.validate().is_err());
}
