use super::*;

fn temp_dir(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("figurine_{tag}_{}", std::process::id()))
}

#[test]
fn file_names_are_zero_padded() {
    assert_eq!(FrameImageSet::file_name(FrameIndex(0)), "frame_000.png");
    assert_eq!(FrameImageSet::file_name(FrameIndex(59)), "frame_059.png");
    assert_eq!(FrameImageSet::file_name(FrameIndex(1234)), "frame_1234.png");
}

#[test]
fn write_then_read_frame() {
    let dir = temp_dir("frame_set_rw");
    let _ = std::fs::remove_dir_all(&dir);
    let set = FrameImageSet::create(&dir).unwrap();

    let frame = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![0, 0, 0, 255, 255, 255, 255, 255],
    };
    let path = set.write_frame(FrameIndex(3), &frame).unwrap();
    assert_eq!(path, dir.join("frame_003.png"));
    assert!(set.contains(FrameIndex(3)));
    assert!(!set.contains(FrameIndex(4)));
    assert_eq!(set.read_frame(FrameIndex(3)).unwrap(), frame);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn reading_missing_frame_is_io_error() {
    let set = FrameImageSet::new(temp_dir("frame_set_missing"));
    assert!(matches!(
        set.read_frame(FrameIndex(0)),
        Err(FigurineError::Io { .. })
    ));
}
