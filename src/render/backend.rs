use crate::foundation::{
    core::Canvas,
    error::{GlowfieldError, GlowfieldResult},
};

/// A rendered frame as RGBA8 pixels.
///
/// Frames produced by [`crate::render::cpu::CpuRenderer`] are premultiplied; the flag makes that
/// explicit at API boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// A premultiplied frame of `canvas` filled with `rgba`.
    pub fn filled(canvas: Canvas, rgba: [u8; 4]) -> GlowfieldResult<Self> {
        let len = byte_len(canvas.width, canvas.height)?;
        let mut data = vec![0u8; len];
        if rgba != [0; 4] {
            for px in data.chunks_exact_mut(4) {
                px.copy_from_slice(&rgba);
            }
        }
        Ok(Self {
            width: canvas.width,
            height: canvas.height,
            data,
            premultiplied: true,
        })
    }

    /// Pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Byte length of a tightly packed RGBA8 buffer, failing on overflow.
pub(crate) fn byte_len(width: u32, height: u32) -> GlowfieldResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| GlowfieldError::render("frame buffer size overflow"))
}
