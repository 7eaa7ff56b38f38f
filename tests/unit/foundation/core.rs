use super::*;

#[test]
fn frame_range_first_counts_from_zero() {
    let r = FrameRange::first(3);
    assert_eq!(r.start, FrameIndex(0));
    assert_eq!(r.end, FrameIndex(3));
    assert_eq!(r.len_frames(), 3);
    assert!(!r.is_empty());
    assert!(FrameRange::first(0).is_empty());
}

#[test]
fn frame_range_iterates_in_increasing_order() {
    let got: Vec<u64> = FrameRange::first(4).iter().map(|f| f.0).collect();
    assert_eq!(got, vec![0, 1, 2, 3]);
    assert_eq!(FrameRange::first(0).iter().count(), 0);
}

#[test]
fn frame_delay_maps_to_rational_fps() {
    let fps = FrameDelay(10).to_fps().unwrap();
    assert_eq!(fps, Fps { num: 100, den: 10 });
    assert!((fps.as_f64() - 10.0).abs() < 1e-12);
    assert_eq!(FrameDelay(4).as_millis(), 40);
    assert!(FrameDelay(0).to_fps().is_err());
}

#[test]
fn canvas_defaults_and_center() {
    let c = Canvas::default();
    assert_eq!((c.width, c.height), (800, 600));
    assert_eq!(c.center(), Point::new(400.0, 300.0));
    assert_eq!(c.rgba8_len(), 800 * 600 * 4);
}

#[test]
fn premultiply_opaque_is_identity_and_half_alpha_halves() {
    assert_eq!(Rgba8::LIGHT_BLUE.premultiplied(), [173, 216, 230, 255]);
    let half = Rgba8 {
        r: 200,
        g: 100,
        b: 0,
        a: 128,
    };
    assert_eq!(half.premultiplied(), [100, 50, 0, 128]);
}
