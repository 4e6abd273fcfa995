use std::path::Path;

use crate::{
    foundation::error::{GlowfieldError, GlowfieldResult},
    render::backend::{FrameRGBA, byte_len},
};

/// Convert premultiplied RGBA8 to straight alpha.
pub fn unpremultiply(data: &[u8]) -> Vec<u8> {
    let mut out = data.to_vec();
    for px in out.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
    out
}

/// Write `frame` as an RGBA PNG at `path`, creating parent directories.
pub fn write_png(path: &Path, frame: &FrameRGBA) -> GlowfieldResult<()> {
    if frame.data.len() != byte_len(frame.width, frame.height)? {
        return Err(GlowfieldError::render(
            "frame data length does not match width*height*4",
        ));
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            GlowfieldError::Other(anyhow::anyhow!(
                "create output dir '{}': {e}",
                parent.display()
            ))
        })?;
    }

    let straight;
    let bytes = if frame.premultiplied {
        straight = unpremultiply(&frame.data);
        &straight
    } else {
        &frame.data
    };

    image::save_buffer_with_format(
        path,
        bytes,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| {
        GlowfieldError::Other(anyhow::anyhow!("write png '{}': {e}", path.display()))
    })?;

    tracing::debug!(path = %path.display(), "wrote png");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
