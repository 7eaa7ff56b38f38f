use super::*;

#[test]
fn mul_div255_rounds_to_nearest() {
    assert_eq!(mul_div255_u16(255, 255), 255);
    assert_eq!(mul_div255_u16(0, 255), 0);
    assert_eq!(mul_div255_u16(128, 128), 64);
}

#[test]
fn opaque_pixels_survive_premul_roundtrip() {
    let src = vec![173u8, 216, 230, 255, 0, 0, 0, 255, 255, 255, 255, 255];
    let mut px = src.clone();
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(px, src);
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(px, src);
}

#[test]
fn transparent_pixels_clear_color_channels() {
    let mut px = vec![9u8, 9, 9, 0];
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(px, vec![0, 0, 0, 0]);
}
