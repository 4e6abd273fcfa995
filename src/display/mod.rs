//! Backend-agnostic display lists.
//!
//! A [`DisplayList`] is everything needed to draw one frame: resolved positions, sizes, colors
//! and opacities, grouped into layers and ordered back to front.

use crate::{
    assets::color::Color,
    foundation::core::{Canvas, FrameIndex, Point},
};

/// The fully resolved drawables of one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct DisplayList {
    /// Frame this list was evaluated at.
    pub frame: FrameIndex,
    /// Output canvas.
    pub canvas: Canvas,
    /// Solid fill under all layers; `None` leaves the canvas transparent.
    pub background: Option<Color>,
    /// Layers, back to front.
    pub layers: Vec<Layer>,
}

impl DisplayList {
    /// Total primitive count over all layers.
    pub fn primitive_count(&self) -> usize {
        self.layers.iter().map(|l| l.primitives.len()).sum()
    }
}

/// Which generator produced a layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    /// Particle field of glowing orbs.
    Orbs,
    /// Node graph with proximity connections.
    Nodes,
}

/// An ordered group of primitives sharing a layer-wide opacity.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Layer {
    /// Producing generator.
    pub kind: LayerKind,
    /// Multiplier applied to the whole layer after its primitives are drawn.
    pub opacity: f64,
    /// Primitives, back to front.
    pub primitives: Vec<Primitive>,
}

/// A single drawable.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    /// Soft radial glow.
    Glow(GlowDisc),
    /// Straight stroked segment.
    Line(LineSegment),
    /// Filled circle.
    Dot(Dot),
}

/// A square box holding a radial gradient that fades from `color` to transparent, blurred and
/// scaled about its center.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GlowDisc {
    /// Top-left corner of the unscaled box.
    pub origin: Point,
    /// Side length of the unscaled box.
    pub size: f64,
    /// Scale applied about the box center.
    pub scale: f64,
    /// Gradient center color.
    pub color: Color,
    /// Fraction of the gradient radius at which the ramp reaches transparency.
    pub falloff: f64,
    /// Gaussian blur standard deviation in unscaled pixels.
    pub blur: f64,
    /// Element opacity.
    pub opacity: f64,
}

impl GlowDisc {
    /// Center of the box.
    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size / 2.0,
            self.origin.y + self.size / 2.0,
        )
    }
}

/// A line from `from` to `to`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LineSegment {
    /// Start point.
    pub from: Point,
    /// End point.
    pub to: Point,
    /// Stroke width in pixels.
    pub width: f64,
    /// Stroke color.
    pub color: Color,
    /// Stroke opacity.
    pub opacity: f64,
}

/// A filled circle.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Dot {
    /// Circle center.
    pub center: Point,
    /// Circle radius.
    pub radius: f64,
    /// Fill color.
    pub color: Color,
    /// Fill opacity.
    pub opacity: f64,
}
