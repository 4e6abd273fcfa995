use super::*;
use crate::{
    display::{GlowDisc, LayerKind},
    foundation::core::FrameIndex,
};

fn canvas(width: u32, height: u32) -> Canvas {
    Canvas { width, height }
}

fn list(c: Canvas, background: Option<Color>, layers: Vec<Layer>) -> DisplayList {
    DisplayList {
        frame: FrameIndex(0),
        canvas: c,
        background,
        layers,
    }
}

fn nodes_layer(opacity: f64, primitives: Vec<Primitive>) -> Layer {
    Layer {
        kind: LayerKind::Nodes,
        opacity,
        primitives,
    }
}

fn white_dot(x: f64, y: f64, radius: f64) -> Primitive {
    Primitive::Dot(Dot {
        center: Point::new(x, y),
        radius,
        color: Color::rgb(255, 255, 255),
        opacity: 1.0,
    })
}

#[test]
fn background_fills_every_pixel() {
    let bg = Color::rgb(0x0b, 0x13, 0x2b);
    let frame = CpuRenderer::new()
        .render(&list(canvas(8, 4), Some(bg), vec![]))
        .unwrap();
    assert_eq!((frame.width, frame.height), (8, 4));
    assert!(frame.premultiplied);
    assert!(
        frame
            .data
            .chunks_exact(4)
            .all(|px| px == [0x0b, 0x13, 0x2b, 0xff])
    );
}

#[test]
fn missing_background_is_transparent() {
    let frame = CpuRenderer::new()
        .render(&list(canvas(4, 4), None, vec![]))
        .unwrap();
    assert!(frame.data.iter().all(|&b| b == 0));
}

#[test]
fn oversized_canvas_is_a_render_error() {
    let err = CpuRenderer::new()
        .render(&list(canvas(70_000, 4), None, vec![]))
        .unwrap_err();
    assert!(matches!(err, GlowfieldError::Render(_)));
}

#[test]
fn dot_covers_its_center_only() {
    let frame = CpuRenderer::new()
        .render(&list(
            canvas(16, 16),
            None,
            vec![nodes_layer(1.0, vec![white_dot(8.0, 8.0, 4.0)])],
        ))
        .unwrap();
    assert_eq!(frame.pixel(8, 8), Some([255, 255, 255, 255]));
    assert_eq!(frame.pixel(0, 0), Some([0, 0, 0, 0]));
    assert_eq!(frame.pixel(15, 15), Some([0, 0, 0, 0]));
}

#[test]
fn layer_opacity_scales_the_whole_layer() {
    let mut renderer = CpuRenderer::new();
    let hidden = renderer
        .render(&list(
            canvas(16, 16),
            None,
            vec![nodes_layer(0.0, vec![white_dot(8.0, 8.0, 4.0)])],
        ))
        .unwrap();
    assert!(hidden.data.iter().all(|&b| b == 0));

    let half = renderer
        .render(&list(
            canvas(16, 16),
            None,
            vec![nodes_layer(0.5, vec![white_dot(8.0, 8.0, 4.0)])],
        ))
        .unwrap();
    let px = half.pixel(8, 8).unwrap();
    assert!((127..=129).contains(&px[3]), "{px:?}");
}

#[test]
fn line_is_filled_along_its_span() {
    let line = Primitive::Line(LineSegment {
        from: Point::new(0.0, 8.0),
        to: Point::new(16.0, 8.0),
        width: 2.0,
        color: Color::rgb(255, 0, 0),
        opacity: 1.0,
    });
    let frame = CpuRenderer::new()
        .render(&list(canvas(16, 16), None, vec![nodes_layer(1.0, vec![line])]))
        .unwrap();
    assert_eq!(frame.pixel(4, 7), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(12, 8), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(4, 2), Some([0, 0, 0, 0]));
}

#[test]
fn degenerate_lines_have_no_outline() {
    let p = Point::new(3.0, 3.0);
    assert!(line_quad(p, p, 1.0).is_none());
    assert!(line_quad(p, Point::new(5.0, 3.0), 0.0).is_none());
    assert!(line_quad(p, Point::new(5.0, 3.0), 1.0).is_some());
}

#[test]
fn glow_layer_brightens_its_center() {
    let bg = Color::rgb(0, 0, 0);
    let glow = Primitive::Glow(GlowDisc {
        origin: Point::new(0.0, 0.0),
        size: 32.0,
        scale: 1.0,
        color: Color::rgba(0x5b, 0xc0, 0xbe, 0x88),
        falloff: 0.7,
        blur: 4.0,
        opacity: 0.6,
    });
    let frame = CpuRenderer::new()
        .render(&list(
            canvas(32, 32),
            Some(bg),
            vec![Layer {
                kind: LayerKind::Orbs,
                opacity: 1.0,
                primitives: vec![glow],
            }],
        ))
        .unwrap();
    let center = frame.pixel(16, 16).unwrap();
    let edge = frame.pixel(0, 16).unwrap();
    assert_eq!(center[3], 255);
    assert!(center[1] > edge[1]);
    assert!(center[1] > 0);
}

fn glow_at(cx: f64, cy: f64, size: f64, color: Color) -> Primitive {
    Primitive::Glow(GlowDisc {
        origin: Point::new(cx - size / 2.0, cy - size / 2.0),
        size,
        scale: 1.0,
        color,
        falloff: 0.7,
        blur: 4.0,
        opacity: 1.0,
    })
}

#[test]
fn glow_renders_the_same_in_any_layer_kind() {
    let white = glow_at(32.0, 32.0, 40.0, Color::rgb(255, 255, 255));
    let mut renderer = CpuRenderer::new();
    let orbs = renderer
        .render(&list(
            canvas(64, 64),
            None,
            vec![Layer {
                kind: LayerKind::Orbs,
                opacity: 1.0,
                primitives: vec![white.clone()],
            }],
        ))
        .unwrap();
    let nodes = renderer
        .render(&list(
            canvas(64, 64),
            None,
            vec![nodes_layer(1.0, vec![white.clone()])],
        ))
        .unwrap();
    // A far-away dot forces the glow through the offscreen raster path.
    let mixed = renderer
        .render(&list(
            canvas(64, 64),
            None,
            vec![nodes_layer(1.0, vec![white_dot(2.0, 2.0, 1.0), white])],
        ))
        .unwrap();

    let center = orbs.pixel(32, 32).unwrap();
    assert!(center[3] > 200, "{center:?}");
    assert_eq!(nodes.pixel(32, 32), Some(center));
    assert_eq!(mixed.pixel(32, 32), Some(center));
}

#[test]
fn mixed_layer_keeps_primitive_order() {
    let red = glow_at(32.0, 32.0, 40.0, Color::rgb(255, 0, 0));
    let mut renderer = CpuRenderer::new();

    let glow_on_top = renderer
        .render(&list(
            canvas(64, 64),
            None,
            vec![nodes_layer(1.0, vec![white_dot(32.0, 32.0, 6.0), red.clone()])],
        ))
        .unwrap();
    let px = glow_on_top.pixel(32, 32).unwrap();
    assert!(px[0] > 200 && px[1] < 128, "{px:?}");

    let dot_on_top = renderer
        .render(&list(
            canvas(64, 64),
            None,
            vec![nodes_layer(1.0, vec![red, white_dot(32.0, 32.0, 6.0)])],
        ))
        .unwrap();
    assert_eq!(dot_on_top.pixel(32, 32), Some([255, 255, 255, 255]));
}

#[test]
fn orb_layer_draws_vector_primitives() {
    let frame = CpuRenderer::new()
        .render(&list(
            canvas(16, 16),
            None,
            vec![Layer {
                kind: LayerKind::Orbs,
                opacity: 1.0,
                primitives: vec![white_dot(8.0, 8.0, 4.0)],
            }],
        ))
        .unwrap();
    assert_eq!(frame.pixel(8, 8), Some([255, 255, 255, 255]));
}

#[test]
fn renderer_survives_size_changes() {
    let mut renderer = CpuRenderer::new();
    for (w, h) in [(16, 16), (24, 8), (16, 16)] {
        let frame = renderer
            .render(&list(
                canvas(w, h),
                None,
                vec![nodes_layer(1.0, vec![white_dot(4.0, 4.0, 2.0)])],
            ))
            .unwrap();
        assert_eq!(frame.data.len(), (w * h * 4) as usize);
        assert_eq!(frame.pixel(4, 4), Some([255, 255, 255, 255]));
    }
}
