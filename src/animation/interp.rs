use crate::animation::ease::Ease;

/// Behavior of [`interpolate`] outside its input range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Continue the linear slope of the range.
    #[default]
    Extend,
    /// Hold the nearest output endpoint.
    Clamp,
}

/// Options for [`interpolate`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InterpolateOpts {
    /// Curve applied to in-range progress.
    pub ease: Ease,
    /// Behavior below the input range.
    pub left: Extrapolate,
    /// Behavior above the input range.
    pub right: Extrapolate,
}

/// Remap `input` from `[in0, in1]` onto `[out0, out1]`.
///
/// Easing only shapes the in-range segment; extended extrapolation continues linearly.
/// A degenerate input range acts as a step at `in0`.
pub fn interpolate(
    input: f64,
    input_range: [f64; 2],
    output_range: [f64; 2],
    opts: InterpolateOpts,
) -> f64 {
    let [in0, in1] = input_range;
    let [out0, out1] = output_range;

    if in1 == in0 {
        return if input < in0 { out0 } else { out1 };
    }

    let t = (input - in0) / (in1 - in0);
    let t = if t < 0.0 {
        match opts.left {
            Extrapolate::Clamp => 0.0,
            Extrapolate::Extend => t,
        }
    } else if t > 1.0 {
        match opts.right {
            Extrapolate::Clamp => 1.0,
            Extrapolate::Extend => t,
        }
    } else {
        opts.ease.apply(t)
    };

    out0 + (out1 - out0) * t
}

/// Number of frames the node layer takes to fade in.
pub const FADE_IN_FRAMES: u64 = 20;

/// Layer fade-in: 0 at frame 0, eased out to 1 at [`FADE_IN_FRAMES`], held afterwards.
pub fn fade_in_opacity(frame: u64) -> f64 {
    interpolate(
        frame as f64,
        [0.0, FADE_IN_FRAMES as f64],
        [0.0, 1.0],
        InterpolateOpts {
            ease: Ease::OutCubic,
            left: Extrapolate::Clamp,
            right: Extrapolate::Clamp,
        },
    )
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
