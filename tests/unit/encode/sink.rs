use super::*;

fn frame(w: u32, h: u32) -> TimedFrame {
    TimedFrame {
        frame: FrameRGBA {
            width: w,
            height: h,
            data: vec![255; (w * h * 4) as usize],
        },
        delay: FrameDelay(10),
    }
}

#[test]
fn in_memory_encoder_captures_single_call() {
    let mut enc = InMemoryEncoder::new();
    enc.encode(&[frame(2, 2), frame(2, 2)], Path::new("out.gif"))
        .unwrap();
    assert_eq!(enc.calls(), 1);
    assert_eq!(enc.frames().len(), 2);
    assert_eq!(enc.out_path(), Some(Path::new("out.gif")));
}

#[test]
fn check_frames_rejects_empty_and_mismatched() {
    assert!(matches!(check_frames(&[]), Err(FigurineError::Encoding(_))));
    assert!(matches!(
        check_frames(&[frame(2, 2), frame(3, 2)]),
        Err(FigurineError::Encoding(_))
    ));

    let mut short = frame(2, 2);
    short.frame.data.pop();
    assert!(check_frames(&[short]).is_err());

    assert_eq!(check_frames(&[frame(4, 3)]).unwrap(), (4, 3));
}

#[test]
fn partial_path_is_hidden_sibling_with_same_extension() {
    assert_eq!(
        partial_path(Path::new("out/anim.mp4")),
        PathBuf::from("out/.anim.partial.mp4")
    );
    assert_eq!(
        partial_path(Path::new("anim")),
        PathBuf::from(".anim.partial")
    );
}

#[test]
fn partial_guard_removes_file_unless_disarmed() {
    let dir = std::env::temp_dir().join(format!("figurine_guard_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let a = dir.join("a.tmp");
    std::fs::write(&a, b"x").unwrap();
    drop(PartialFileGuard(Some(a.clone())));
    assert!(!a.exists());

    let b = dir.join("b.tmp");
    std::fs::write(&b, b"x").unwrap();
    let mut guard = PartialFileGuard(Some(b.clone()));
    guard.disarm();
    drop(guard);
    assert!(b.exists());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn ensure_parent_dir_creates_nested_dirs() {
    let root = std::env::temp_dir().join(format!("figurine_parent_{}", std::process::id()));
    let target = root.join("x").join("y").join("out.gif");
    ensure_parent_dir(&target).unwrap();
    assert!(root.join("x").join("y").is_dir());
    ensure_parent_dir(Path::new("bare.gif")).unwrap();
    let _ = std::fs::remove_dir_all(&root);
}
