use super::*;
use crate::{
    assets::color::Color,
    foundation::core::{Canvas, Fps},
    scene::model::{BackdropDef, LayerDef, NodesDef, OrbsDef},
};

fn small_backdrop(duration: u64) -> Backdrop {
    Backdrop::new(BackdropDef {
        canvas: Canvas {
            width: 48,
            height: 32,
        },
        fps: Fps::new(30, 1).unwrap(),
        duration: FrameIndex(duration),
        background: Some(Color::rgb(0x0b, 0x13, 0x2b)),
        layers: vec![
            LayerDef::Orbs(OrbsDef {
                count: 3,
                ..OrbsDef::default()
            }),
            LayerDef::Nodes(NodesDef {
                count: 8,
                ..NodesDef::default()
            }),
        ],
    })
    .unwrap()
}

fn range(start: u64, end: u64) -> FrameRange {
    FrameRange::new(FrameIndex(start), FrameIndex(end)).unwrap()
}

#[test]
fn render_frame_matches_canvas() {
    let backdrop = small_backdrop(4);
    let frame = render_frame(&backdrop, FrameIndex(2), &mut CpuRenderer::new()).unwrap();
    assert_eq!((frame.width, frame.height), (48, 32));
    assert_eq!(frame.data.len(), 48 * 32 * 4);
}

#[test]
fn empty_or_out_of_bounds_ranges_are_rejected() {
    let backdrop = small_backdrop(4);
    let mut r = CpuRenderer::new();
    assert!(render_frames(&backdrop, range(2, 2), &mut r).is_err());
    assert!(render_frames(&backdrop, range(0, 5), &mut r).is_err());
}

#[test]
fn zero_threads_is_rejected() {
    let backdrop = small_backdrop(4);
    let threading = RenderThreading {
        parallel: true,
        threads: Some(0),
        ..RenderThreading::default()
    };
    let err = render_frames_with_stats(&backdrop, range(0, 2), &mut CpuRenderer::new(), &threading)
        .unwrap_err();
    assert!(matches!(err, GlowfieldError::Validation(_)));
}

#[test]
fn chunks_cover_the_range_in_order() {
    let backdrop = small_backdrop(10);
    let threading = RenderThreading {
        chunk_size: 3,
        ..RenderThreading::default()
    };
    let mut seen = Vec::new();
    let stats = stream_frames(
        &backdrop,
        range(1, 9),
        &mut CpuRenderer::new(),
        &threading,
        |f, _| {
            seen.push(f.0);
            Ok(())
        },
    )
    .unwrap();
    assert_eq!(seen, (1..9).collect::<Vec<_>>());
    assert_eq!(
        stats,
        RenderStats {
            frames_total: 8,
            frames_rendered: 8,
            chunks: 3,
        }
    );
}

#[test]
fn sink_errors_stop_rendering() {
    let backdrop = small_backdrop(6);
    let mut calls = 0;
    let res = stream_frames(
        &backdrop,
        range(0, 6),
        &mut CpuRenderer::new(),
        &RenderThreading::default(),
        |_, _| {
            calls += 1;
            Err(GlowfieldError::render("disk full"))
        },
    );
    assert!(res.is_err());
    assert_eq!(calls, 1);
}

#[test]
fn parallel_matches_sequential() {
    let backdrop = small_backdrop(6);
    let seq = render_frames(&backdrop, range(0, 6), &mut CpuRenderer::new()).unwrap();
    let threading = RenderThreading {
        parallel: true,
        chunk_size: 4,
        threads: Some(2),
    };
    let (par, stats) =
        render_frames_with_stats(&backdrop, range(0, 6), &mut CpuRenderer::new(), &threading)
            .unwrap();
    assert_eq!(stats.frames_total, 6);
    assert_eq!(stats.chunks, 2);
    assert_eq!(seq, par);
}
