use super::*;
use crate::render::frame::FrameRGBA;

fn frame(w: u32, h: u32, delay: u32) -> TimedFrame {
    TimedFrame {
        frame: FrameRGBA {
            width: w,
            height: h,
            data: [255u8, 255, 255, 255].repeat((w * h) as usize),
        },
        delay: FrameDelay(delay),
    }
}

#[test]
fn flatten_premul_over_black_keeps_rgb() {
    // Premultiplied red @ 50% alpha.
    let src = vec![128u8, 0, 0, 128];
    let mut dst = vec![0u8; 4];
    flatten_premul_over_bg(&mut dst, &src, Rgba8::BLACK).unwrap();
    assert_eq!(dst, vec![128, 0, 0, 255]);
}

#[test]
fn flatten_transparent_over_white_is_white() {
    let src = vec![0u8; 8];
    let mut dst = vec![1u8; 8];
    flatten_premul_over_bg(&mut dst, &src, Rgba8::WHITE).unwrap();
    assert_eq!(dst, vec![255; 8]);
}

#[test]
fn flatten_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(flatten_premul_over_bg(&mut dst, &[0u8; 4], Rgba8::WHITE).is_err());
}

#[test]
fn odd_dimensions_are_rejected_before_spawning() {
    let out = std::env::temp_dir().join(format!("figurine_odd_{}.mp4", std::process::id()));
    let err = FfmpegEncoder::default()
        .encode(&[frame(3, 2, 10)], &out)
        .unwrap_err();
    assert!(matches!(err, FigurineError::Encoding(_)));
    assert!(!out.exists());
}

#[test]
fn mixed_delays_are_rejected() {
    let out = std::env::temp_dir().join(format!("figurine_mixed_{}.mp4", std::process::id()));
    let err = FfmpegEncoder::default()
        .encode(&[frame(2, 2, 10), frame(2, 2, 5)], &out)
        .unwrap_err();
    assert!(err.to_string().contains("uniform"));
    assert!(!out.exists());
}

#[test]
fn encodes_mp4_when_ffmpeg_is_available() {
    if !is_ffmpeg_on_path() {
        return;
    }
    let dir = std::env::temp_dir().join(format!("figurine_mp4_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    let out = dir.join("clip.mp4");
    let frames: Vec<_> = (0..4).map(|_| frame(16, 16, 4)).collect();
    FfmpegEncoder::default().encode(&frames, &out).unwrap();
    assert!(std::fs::metadata(&out).unwrap().len() > 0);
    assert!(!partial_path(&out).exists());
    let _ = std::fs::remove_dir_all(&dir);
}
