//! Glowfield generates decorative animated backgrounds frame by frame.
//!
//! Two generators are provided, both pure functions of `(frame, configuration)`:
//!
//! - a particle field of large, soft, slowly drifting glow orbs
//! - a node graph of small pulsing points joined by proximity connections
//!
//! A [`BackdropDef`] stacks generator layers over an optional background color. A [`Backdrop`]
//! evaluates it into a [`DisplayList`] for any frame, in any order, from any thread. The
//! [`CpuRenderer`] rasterizes display lists into premultiplied RGBA8 frames.
//!
//! ```no_run
//! use glowfield::{Backdrop, CpuRenderer, FrameIndex, presets};
//!
//! let backdrop = Backdrop::new(presets::opening())?;
//! let frame = glowfield::render_frame(&backdrop, FrameIndex(42), &mut CpuRenderer::new())?;
//! glowfield::write_png("out/frame_0042.png".as_ref(), &frame)?;
//! # Ok::<(), glowfield::GlowfieldError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Easing and interpolation.
pub mod animation;
/// Colors.
pub mod assets;
/// Backend-agnostic display lists.
pub mod display;
/// Frame output.
pub mod encode;
/// Frame evaluation.
pub mod eval;
/// Background generators.
pub mod field;
/// Core types and errors.
pub mod foundation;
/// Rasterization.
pub mod render;
/// Backdrop definitions and presets.
pub mod scene;

pub use crate::animation::{
    ease::Ease,
    interp::{Extrapolate, InterpolateOpts, fade_in_opacity, interpolate},
};
pub use crate::assets::color::Color;
pub use crate::display::{DisplayList, Dot, GlowDisc, Layer, LayerKind, LineSegment, Primitive};
pub use crate::encode::png::write_png;
pub use crate::eval::evaluator::Backdrop;
pub use crate::field::{
    FrameCtx,
    nodes::{Connection, ConnectionScan, NodeField, NodeFieldParams, NodeGraphFrame},
    orbs::{OrbField, OrbSeed},
};
pub use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange, Point, Rgba8Premul, Vec2};
pub use crate::foundation::error::{GlowfieldError, GlowfieldResult};
pub use crate::render::{
    backend::FrameRGBA,
    cpu::CpuRenderer,
    pipeline::{
        RenderStats, RenderThreading, render_frame, render_frames, render_frames_with_stats,
        stream_frames,
    },
};
pub use crate::scene::{
    model::{BackdropDef, LayerDef, NodesDef, OrbsDef},
    presets,
};
