use super::*;
use crate::encode::sink::InMemoryEncoder;
use crate::foundation::core::Rgba8;
use crate::render::frame::FrameRGBA;

fn temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("figurine_pipe_{tag}_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn encoder_for_matches_format() {
    assert_eq!(encoder_for(VideoFormat::Gif).name(), "gif");
    assert_eq!(encoder_for(VideoFormat::Mp4).name(), "ffmpeg");
}

#[test]
fn run_with_encoder_sequences_then_assembles_once() {
    let dir = temp_dir("mem");
    let cfg = AnimationConfig {
        frame_count: 3,
        frames_dir: dir.join("frames"),
        out_path: dir.join("out.gif"),
        ..AnimationConfig::default()
    };

    let mut enc = InMemoryEncoder::new();
    let report = run_with_encoder(&cfg, &mut enc).unwrap();

    assert_eq!(report.sequence.frames_written, 3);
    assert_eq!(report.assembly.frames, 3);
    assert_eq!((report.assembly.width, report.assembly.height), (800, 600));
    assert_eq!(enc.calls(), 1);
    assert_eq!(enc.frames().len(), 3);
    assert!(dir.join("frames").join("frame_002.png").is_file());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn invalid_config_fails_before_touching_disk() {
    let dir = temp_dir("invalid");
    let mut cfg = AnimationConfig {
        frames_dir: dir.join("frames"),
        ..AnimationConfig::default()
    };
    cfg.delay.0 = 0;

    let mut enc = InMemoryEncoder::new();
    assert!(run_with_encoder(&cfg, &mut enc).is_err());
    assert!(!dir.exists());
}

#[test]
fn still_places_head_below_top_margin() {
    let dir = temp_dir("still");
    let out = dir.join("still.png");
    render_still(&AnimationConfig::default(), &out).unwrap();

    let frame = FrameRGBA::read_from_file(&out).unwrap();
    assert_eq!((frame.width, frame.height), (800, 600));
    assert_eq!(frame.pixel(400, 75), Some(Rgba8::LIGHT_BLUE.premultiplied()));
    assert_eq!(frame.pixel(400, 45), Some(Rgba8::WHITE.premultiplied()));

    let _ = std::fs::remove_dir_all(&dir);
}
