use super::*;

#[test]
fn over_opacity_0_is_noop() {
    let dst = [1, 2, 3, 4];
    let src = [200, 200, 200, 200];
    assert_eq!(over(dst, src, 0.0), dst);
}

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    let src = [255, 255, 255, 0];
    assert_eq!(over(dst, src, 1.0), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src, 1.0), src);
}

#[test]
fn over_dst_transparent_returns_scaled_src() {
    assert_eq!(over([0; 4], [100, 110, 120, 200], 1.0), [100, 110, 120, 200]);
    assert_eq!(over([0; 4], [0, 0, 200, 200], 0.5), [0, 0, 100, 100]);
}

#[test]
fn over_keeps_opaque_destination_opaque() {
    let out = over([11, 19, 43, 255], [91, 192, 190, 77], 0.6);
    assert_eq!(out[3], 255);
}

#[test]
fn over_in_place_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(over_in_place(&mut dst, &[0u8; 4], 1.0).is_err());
    assert!(over_in_place(&mut dst[..7], &[0u8; 7], 1.0).is_err());
}

#[test]
fn over_in_place_blends_every_pixel() {
    let mut dst = vec![0, 0, 0, 255, 0, 0, 0, 255];
    let src = vec![255, 255, 255, 255, 0, 0, 0, 0];
    over_in_place(&mut dst, &src, 1.0).unwrap();
    assert_eq!(dst, vec![255, 255, 255, 255, 0, 0, 0, 255]);
}

#[test]
fn fill_sets_all_pixels() {
    let mut buf = vec![0u8; 12];
    fill(&mut buf, [1, 2, 3, 4]);
    assert_eq!(buf, [1, 2, 3, 4].repeat(3));
}
