//! Particle field: large, soft, slowly drifting glow orbs.

use crate::{
    assets::color::Color,
    display::{GlowDisc, Layer, LayerKind, Primitive},
    field::FrameCtx,
    foundation::{
        core::{Canvas, Point, Vec2},
        math::{unit_cos, unit_sin},
    },
};

/// Smallest orb diameter.
pub const ORB_MIN_SIZE: f64 = 200.0;
/// Largest orb diameter.
pub const ORB_MAX_SIZE: f64 = 600.0;
/// Slowest orb speed.
pub const ORB_MIN_SPEED: f64 = 0.15;
/// Fastest orb speed.
pub const ORB_MAX_SPEED: f64 = 0.40;

/// Center alpha of the orb gradient (`0x88`), relative to the palette color's own alpha.
pub const ORB_GRADIENT_ALPHA: f64 = 136.0 / 255.0;
/// Gradient stop (fraction of the radius) where orbs become fully transparent.
pub const ORB_GRADIENT_FALLOFF: f64 = 0.7;
/// Blur standard deviation per pixel of orb size.
pub const ORB_BLUR_PER_SIZE: f64 = 0.3;
/// Fixed element opacity of every orb.
pub const ORB_OPACITY: f64 = 0.6;

const DRIFT_X: f64 = 60.0;
const DRIFT_Y: f64 = 40.0;
const BREATHE: f64 = 0.1;

/// Frame-independent attributes of one orb.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbSeed {
    /// Position in the generated sequence.
    pub index: usize,
    /// Resting center in canvas space.
    pub base: Point,
    /// Diameter, in `[ORB_MIN_SIZE, ORB_MAX_SIZE]`.
    pub size: f64,
    /// Palette entry assigned cyclically by index.
    pub color: Color,
    /// Oscillation rate, in `[ORB_MIN_SPEED, ORB_MAX_SPEED]`.
    pub speed: f64,
    /// Oscillation offset.
    pub phase: f64,
}

/// Animated state of an orb at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbMotion {
    /// Displacement from the resting center.
    pub offset: Vec2,
    /// Scale about the center.
    pub scale: f64,
}

impl OrbSeed {
    /// Derive the seed for `index`, or `None` when the palette is empty.
    pub fn new(index: usize, colors: &[Color], canvas: Canvas) -> Option<Self> {
        let color = *colors.get(index % colors.len().max(1))?;
        let i = index as f64;
        Some(Self {
            index,
            base: Point::new(
                unit_sin(i * 4.1 + 2.3) * canvas.width_f64(),
                unit_cos(i * 3.7 + 1.1) * canvas.height_f64(),
            ),
            size: ORB_MIN_SIZE + unit_sin(i * 2.9) * 400.0,
            color,
            speed: ORB_MIN_SPEED + unit_sin(i * 1.7) * 0.25,
            phase: i * 1.2,
        })
    }

    /// Motion at `time` seconds.
    pub fn motion(&self, time: f64) -> OrbMotion {
        let t = time * self.speed;
        OrbMotion {
            offset: Vec2::new(
                (t + self.phase).sin() * DRIFT_X,
                (t * 0.8 + self.phase).cos() * DRIFT_Y,
            ),
            scale: 1.0 + (t * 1.5 + self.phase).sin() * BREATHE,
        }
    }

    /// Resolve the drawable glow at `time` seconds.
    pub fn glow(&self, time: f64) -> GlowDisc {
        let m = self.motion(time);
        let half = self.size / 2.0;
        GlowDisc {
            origin: Point::new(
                self.base.x + m.offset.x - half,
                self.base.y + m.offset.y - half,
            ),
            size: self.size,
            scale: m.scale,
            color: self.color.scale_alpha(ORB_GRADIENT_ALPHA),
            falloff: ORB_GRADIENT_FALLOFF,
            blur: self.size * ORB_BLUR_PER_SIZE,
            opacity: ORB_OPACITY,
        }
    }
}

/// Generate `count` orb seeds. Colors cycle through `colors`; an empty palette yields nothing.
pub fn orb_seeds(count: usize, colors: &[Color], canvas: Canvas) -> Vec<OrbSeed> {
    (0..count)
        .map_while(|i| OrbSeed::new(i, colors, canvas))
        .collect()
}

/// A configured particle field.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbField {
    colors: Vec<Color>,
    count: usize,
}

impl OrbField {
    /// Field of `count` orbs drawn from `colors`.
    pub fn new(colors: Vec<Color>, count: usize) -> Self {
        Self { colors, count }
    }

    /// Palette in assignment order.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Requested orb count.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Seeds for `canvas`; re-derived on every call.
    pub fn seeds(&self, canvas: Canvas) -> Vec<OrbSeed> {
        orb_seeds(self.count, &self.colors, canvas)
    }

    /// Evaluate the field into a display layer.
    pub fn layer(&self, ctx: &FrameCtx) -> Layer {
        let time = ctx.time_secs();
        let primitives = self
            .seeds(ctx.canvas)
            .iter()
            .map(|orb| Primitive::Glow(orb.glow(time)))
            .collect();
        Layer {
            kind: LayerKind::Orbs,
            opacity: 1.0,
            primitives,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/orbs.rs"]
mod tests;
