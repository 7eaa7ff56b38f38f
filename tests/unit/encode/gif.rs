use std::io::BufReader;

use image::AnimationDecoder;

use super::*;
use crate::foundation::core::FrameDelay;
use crate::render::frame::FrameRGBA;

fn solid(px: [u8; 4], delay_cs: u32) -> TimedFrame {
    TimedFrame {
        frame: FrameRGBA {
            width: 8,
            height: 6,
            data: px.repeat(8 * 6),
        },
        delay: FrameDelay(delay_cs),
    }
}

#[test]
fn writes_every_frame_with_its_delay() {
    let dir = std::env::temp_dir().join(format!("figurine_gif_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    let out = dir.join("anim.gif");

    let frames = vec![
        solid([255, 255, 255, 255], 4),
        solid([0, 0, 0, 255], 4),
        solid([173, 216, 230, 255], 4),
    ];
    GifEncoder::default().encode(&frames, &out).unwrap();
    assert!(out.is_file());
    assert!(!partial_path(&out).exists());

    let file = std::fs::File::open(&out).unwrap();
    let decoded = image::codecs::gif::GifDecoder::new(BufReader::new(file))
        .unwrap()
        .into_frames()
        .collect_frames()
        .unwrap();
    assert_eq!(decoded.len(), 3);
    for f in &decoded {
        let (num, den) = f.delay().numer_denom_ms();
        assert_eq!(num / den, 40);
        assert_eq!(f.buffer().dimensions(), (8, 6));
    }
    assert_eq!(decoded[1].buffer().get_pixel(3, 3).0, [0, 0, 0, 255]);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn empty_input_fails_without_creating_output() {
    let dir = std::env::temp_dir().join(format!("figurine_gif_empty_{}", std::process::id()));
    let out = dir.join("nothing.gif");
    let err = GifEncoder::default().encode(&[], &out).unwrap_err();
    assert!(matches!(err, FigurineError::Encoding(_)));
    assert!(!out.exists());
}

#[test]
fn out_of_range_speed_is_rejected() {
    let enc = GifEncoder::new(GifEncoderOpts {
        speed: 0,
        looping: true,
    });
    assert!(enc.encode_to_vec(&[solid([0, 0, 0, 255], 1)]).is_err());
}
