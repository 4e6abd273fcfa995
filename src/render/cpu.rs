use kurbo::{Circle, Shape, Vec2};

use crate::{
    assets::color::Color,
    display::{DisplayList, Dot, Layer, LineSegment, Primitive},
    foundation::{
        core::{Canvas, Point},
        error::{GlowfieldError, GlowfieldResult},
    },
    render::{
        backend::FrameRGBA,
        composite::{fill, over_in_place},
        glow::draw_glow,
    },
};

/// Flattening tolerance for circle outlines, in pixels.
const CIRCLE_TOLERANCE: f64 = 0.1;

/// CPU renderer for [`DisplayList`]s.
///
/// Layers holding only glows are composited analytically straight into the frame. Any other
/// layer is drawn in primitive order into an offscreen buffer, with vector fills rasterized by
/// `vello_cpu`, and composited with the layer opacity so overlapping nodes and connections fade
/// in together. The raster context and buffers are kept between frames of the same size.
#[derive(Default)]
pub struct CpuRenderer {
    ctx: Option<vello_cpu::RenderContext>,
    scratch: Option<Scratch>,
}

struct Scratch {
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
    layer: Vec<u8>,
}

impl std::fmt::Debug for CpuRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuRenderer")
            .field("has_ctx", &self.ctx.is_some())
            .field("has_scratch", &self.scratch.is_some())
            .finish()
    }
}

impl CpuRenderer {
    /// Renderer with no cached surfaces.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rasterize `list` into a premultiplied frame.
    #[tracing::instrument(skip_all, fields(frame = list.frame.0, primitives = list.primitive_count()))]
    pub fn render(&mut self, list: &DisplayList) -> GlowfieldResult<FrameRGBA> {
        let (width_u16, height_u16) = surface_dims(list.canvas)?;

        let clear = list
            .background
            .map(|c| c.to_premul().to_array())
            .unwrap_or([0; 4]);
        let mut frame = FrameRGBA::filled(list.canvas, clear)?;

        for layer in &list.layers {
            if layer.opacity <= 0.0 || layer.primitives.is_empty() {
                continue;
            }
            if is_glow_only(layer) {
                draw_direct(&mut frame, layer);
            } else {
                self.draw_offscreen(&mut frame, layer, width_u16, height_u16)?;
            }
        }

        Ok(frame)
    }

    /// Draw `layer` into a cleared layer buffer in primitive order, then composite it with the
    /// layer opacity. Vector fills are batched in `vello_cpu` and flushed before every glow.
    fn draw_offscreen(
        &mut self,
        frame: &mut FrameRGBA,
        layer: &Layer,
        width: u16,
        height: u16,
    ) -> GlowfieldResult<()> {
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        let mut scratch = match self.scratch.take() {
            Some(s) if s.width == width && s.height == height => s,
            _ => Scratch {
                width,
                height,
                pixmap: vello_cpu::Pixmap::new(width, height),
                layer: vec![0; frame.data.len()],
            },
        };
        fill(&mut scratch.layer, [0; 4]);
        ctx.reset();
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);

        let res = draw_layer(&mut ctx, &mut scratch, layer).and_then(|()| {
            over_in_place(&mut frame.data, &scratch.layer, layer.opacity as f32)
        });
        self.ctx = Some(ctx);
        self.scratch = Some(scratch);
        res
    }
}

fn is_glow_only(layer: &Layer) -> bool {
    layer
        .primitives
        .iter()
        .all(|p| matches!(p, Primitive::Glow(_)))
}

fn draw_layer(
    ctx: &mut vello_cpu::RenderContext,
    scratch: &mut Scratch,
    layer: &Layer,
) -> GlowfieldResult<()> {
    let (w, h) = (u32::from(scratch.width), u32::from(scratch.height));
    let mut pending = false;
    for p in &layer.primitives {
        match p {
            Primitive::Line(l) => pending |= fill_line(ctx, l),
            Primitive::Dot(d) => pending |= fill_dot(ctx, d),
            Primitive::Glow(g) => {
                if pending {
                    flush_batch(ctx, scratch)?;
                    pending = false;
                }
                draw_glow(&mut scratch.layer, w, h, g, 1.0);
            }
        }
    }
    if pending {
        flush_batch(ctx, scratch)?;
    }
    Ok(())
}

/// Rasterize the queued fills and composite them over the layer buffer.
fn flush_batch(
    ctx: &mut vello_cpu::RenderContext,
    scratch: &mut Scratch,
) -> GlowfieldResult<()> {
    ctx.flush();
    ctx.render_to_pixmap(&mut scratch.pixmap);
    over_in_place(&mut scratch.layer, scratch.pixmap.data_as_u8_slice(), 1.0)?;
    ctx.reset();
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    Ok(())
}

fn draw_direct(frame: &mut FrameRGBA, layer: &Layer) {
    for p in &layer.primitives {
        if let Primitive::Glow(g) = p {
            draw_glow(&mut frame.data, frame.width, frame.height, g, layer.opacity);
        }
    }
}

fn surface_dims(canvas: Canvas) -> GlowfieldResult<(u16, u16)> {
    let w = u16::try_from(canvas.width)
        .map_err(|_| GlowfieldError::render("canvas width exceeds u16 surface limit"))?;
    let h = u16::try_from(canvas.height)
        .map_err(|_| GlowfieldError::render("canvas height exceeds u16 surface limit"))?;
    if w == 0 || h == 0 {
        return Err(GlowfieldError::render("canvas width/height must be > 0"));
    }
    Ok((w, h))
}

fn set_paint(ctx: &mut vello_cpu::RenderContext, color: Color, opacity: f64) {
    let c = color.scale_alpha(opacity);
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
}

fn fill_line(ctx: &mut vello_cpu::RenderContext, line: &LineSegment) -> bool {
    let Some(path) = line_quad(line.from, line.to, line.width) else {
        return false;
    };
    set_paint(ctx, line.color, line.opacity);
    ctx.fill_path(&bezpath_to_cpu(&path));
    true
}

fn fill_dot(ctx: &mut vello_cpu::RenderContext, dot: &Dot) -> bool {
    if dot.radius <= 0.0 {
        return false;
    }
    let path = Circle::new(dot.center, dot.radius).to_path(CIRCLE_TOLERANCE);
    set_paint(ctx, dot.color, dot.opacity);
    ctx.fill_path(&bezpath_to_cpu(&path));
    true
}

/// Outline of a butt-capped stroke from `a` to `b`.
fn line_quad(a: Point, b: Point, width: f64) -> Option<kurbo::BezPath> {
    let dir = b - a;
    let len = dir.hypot();
    if len <= f64::EPSILON || width <= 0.0 {
        return None;
    }
    let n = Vec2::new(-dir.y, dir.x) * (width / (2.0 * len));
    let mut p = kurbo::BezPath::new();
    p.move_to(a + n);
    p.line_to(b + n);
    p.line_to(b - n);
    p.line_to(a - n);
    p.close_path();
    Some(p)
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let pt = |p: Point| vello_cpu::kurbo::Point::new(p.x, p.y);
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(pt(p)),
            PathEl::LineTo(p) => out.line_to(pt(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
