//! CPU rasterization of display lists.

/// Frame buffers handed out by the renderer.
pub mod backend;
/// Premultiplied RGBA8 compositing.
pub mod composite;
/// `vello_cpu`-backed renderer.
pub mod cpu;
/// Analytic glow rasterization.
pub mod glow;
/// Single-frame and frame-range rendering.
pub mod pipeline;
