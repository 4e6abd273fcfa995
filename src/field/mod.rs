//! Decorative background generators.
//!
//! Every generator is a pure mapping from `(frame, configuration)` to a display layer. Nothing
//! carries over between frames, so frames can be evaluated in any order or concurrently.

pub mod nodes;
pub mod orbs;

use crate::foundation::core::{Canvas, Fps, FrameIndex};

/// Per-frame sampling context shared by all generators.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameCtx {
    /// Frame being evaluated.
    pub frame: FrameIndex,
    /// Timeline frame rate.
    pub fps: Fps,
    /// Output canvas.
    pub canvas: Canvas,
}

impl FrameCtx {
    /// Seconds elapsed at this frame (`frame / fps`).
    pub fn time_secs(&self) -> f64 {
        self.fps.frames_to_secs(self.frame.0)
    }
}
