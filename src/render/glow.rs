//! Soft radial glows without a blur pass.
//!
//! A glow disc is a linear radial ramp from its center color to transparent, blurred by a
//! Gaussian. The ramp has second moment `0.3 R^2` (per axis `0.15 R^2`), so the blurred result is
//! drawn as a single Gaussian lobe with variance `0.15 R^2 + blur^2`. The peak is chosen so that
//! the lobe carries the same total alpha as the ramp, capped at the ramp's own center alpha.

use crate::{
    display::GlowDisc,
    foundation::{core::Point, math::unit_to_u8},
    render::composite::over,
};

/// Lobes are truncated at this many standard deviations.
pub const GLOW_EXTENT_SIGMAS: f64 = 3.0;

const RAMP_VARIANCE: f64 = 0.15;
/// Alpha below which a pixel is left untouched (half an 8-bit step).
const ALPHA_EPSILON: f64 = 0.5 / 255.0;

/// Resolved Gaussian lobe of one glow disc.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowLobe {
    /// Lobe center in canvas space.
    pub center: Point,
    /// Standard deviation in pixels.
    pub sigma: f64,
    /// Alpha at the center, including element and layer opacity.
    pub peak: f64,
}

impl GlowLobe {
    /// Resolve `disc` under an additional `layer_opacity`.
    pub fn from_disc(disc: &GlowDisc, layer_opacity: f64) -> Self {
        let scale = disc.scale.max(0.0);
        let ramp_radius = disc.falloff * (disc.size / std::f64::consts::SQRT_2) * scale;
        let blur = disc.blur * scale;
        let variance = RAMP_VARIANCE * ramp_radius * ramp_radius + blur * blur;

        let center_alpha = disc.color.alpha_f64();
        let conserved = if variance > 0.0 {
            (ramp_radius * ramp_radius / (6.0 * variance)).min(1.0)
        } else {
            0.0
        };

        Self {
            center: disc.center(),
            sigma: variance.sqrt(),
            peak: center_alpha * conserved * disc.opacity * layer_opacity.clamp(0.0, 1.0),
        }
    }

    /// Alpha at distance `d` from the center.
    pub fn alpha_at(&self, d: f64) -> f64 {
        if self.sigma <= 0.0 {
            return 0.0;
        }
        self.peak * (-(d * d) / (2.0 * self.sigma * self.sigma)).exp()
    }
}

/// Per-axis Gaussian weights over pixel centers in `[start, start + len)`.
fn axis_weights(center: f64, sigma: f64, start: u32, len: u32) -> Vec<f64> {
    let denom = 2.0 * sigma * sigma;
    (start..start + len)
        .map(|p| {
            let d = f64::from(p) + 0.5 - center;
            (-(d * d) / denom).exp()
        })
        .collect()
}

/// Composite `disc` onto a premultiplied `width x height` buffer.
pub fn draw_glow(dst: &mut [u8], width: u32, height: u32, disc: &GlowDisc, layer_opacity: f64) {
    let lobe = GlowLobe::from_disc(disc, layer_opacity);
    if lobe.peak < ALPHA_EPSILON || lobe.sigma <= 0.0 {
        return;
    }

    let reach = GLOW_EXTENT_SIGMAS * lobe.sigma;
    let clip = |lo: f64, hi: f64, max: u32| -> Option<(u32, u32)> {
        let lo = lo.floor().max(0.0);
        let hi = hi.ceil().min(f64::from(max));
        (lo < hi).then(|| (lo as u32, (hi - lo) as u32))
    };
    let Some((x0, w)) = clip(lobe.center.x - reach, lobe.center.x + reach, width) else {
        return;
    };
    let Some((y0, h)) = clip(lobe.center.y - reach, lobe.center.y + reach, height) else {
        return;
    };

    let wx = axis_weights(lobe.center.x, lobe.sigma, x0, w);
    let wy = axis_weights(lobe.center.y, lobe.sigma, y0, h);
    let (r, g, b) = (
        f64::from(disc.color.r) / 255.0,
        f64::from(disc.color.g) / 255.0,
        f64::from(disc.color.b) / 255.0,
    );

    let stride = width as usize * 4;
    for (row, &ky) in wy.iter().enumerate() {
        let row_peak = lobe.peak * ky;
        if row_peak < ALPHA_EPSILON {
            continue;
        }
        let base = (y0 as usize + row) * stride + x0 as usize * 4;
        for (col, &kx) in wx.iter().enumerate() {
            let a = row_peak * kx;
            if a < ALPHA_EPSILON {
                continue;
            }
            let src = [
                unit_to_u8(r * a),
                unit_to_u8(g * a),
                unit_to_u8(b * a),
                unit_to_u8(a),
            ];
            let i = base + col * 4;
            let px = &mut dst[i..i + 4];
            let out = over([px[0], px[1], px[2], px[3]], src, 1.0);
            px.copy_from_slice(&out);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/glow.rs"]
mod tests;
