use super::*;

fn clamped(ease: Ease) -> InterpolateOpts {
    InterpolateOpts {
        ease,
        left: Extrapolate::Clamp,
        right: Extrapolate::Clamp,
    }
}

#[test]
fn linear_remaps_inside_range() {
    let v = interpolate(5.0, [0.0, 10.0], [100.0, 200.0], InterpolateOpts::default());
    assert!((v - 150.0).abs() < 1e-12);
}

#[test]
fn extend_continues_slope_and_clamp_holds() {
    let extend = InterpolateOpts::default();
    assert!((interpolate(20.0, [0.0, 10.0], [0.0, 1.0], extend) - 2.0).abs() < 1e-12);
    assert!((interpolate(-10.0, [0.0, 10.0], [0.0, 1.0], extend) + 1.0).abs() < 1e-12);

    let clamp = clamped(Ease::Linear);
    assert_eq!(interpolate(20.0, [0.0, 10.0], [0.0, 1.0], clamp), 1.0);
    assert_eq!(interpolate(-10.0, [0.0, 10.0], [0.0, 1.0], clamp), 0.0);
}

#[test]
fn reversed_output_range_is_supported() {
    let v = interpolate(2.5, [0.0, 10.0], [1.0, 0.0], clamped(Ease::Linear));
    assert!((v - 0.75).abs() < 1e-12);
}

#[test]
fn degenerate_input_range_steps() {
    let opts = InterpolateOpts::default();
    assert_eq!(interpolate(-1.0, [3.0, 3.0], [0.0, 1.0], opts), 0.0);
    assert_eq!(interpolate(3.0, [3.0, 3.0], [0.0, 1.0], opts), 1.0);
}

#[test]
fn fade_in_starts_at_zero_and_saturates() {
    assert_eq!(fade_in_opacity(0), 0.0);
    assert_eq!(fade_in_opacity(FADE_IN_FRAMES), 1.0);
    assert_eq!(fade_in_opacity(500), 1.0);
}

#[test]
fn fade_in_is_monotonic() {
    let mut prev = fade_in_opacity(0);
    for f in 1..=40 {
        let v = fade_in_opacity(f);
        assert!(v >= prev, "frame {f}: {v} < {prev}");
        assert!((0.0..=1.0).contains(&v));
        prev = v;
    }
}

#[test]
fn fade_in_is_ease_out() {
    // Halfway through the window an out-cubic curve has covered 87.5%.
    assert!((fade_in_opacity(10) - 0.875).abs() < 1e-12);
}
