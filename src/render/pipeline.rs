use rayon::prelude::*;

use crate::{
    eval::evaluator::Backdrop,
    foundation::{
        core::{FrameIndex, FrameRange},
        error::{GlowfieldError, GlowfieldResult},
    },
    render::{backend::FrameRGBA, cpu::CpuRenderer},
};

/// Evaluate and render a single frame.
///
/// Returns a [`FrameRGBA`] containing **premultiplied** RGBA8 pixels.
pub fn render_frame(
    backdrop: &Backdrop,
    frame: FrameIndex,
    renderer: &mut CpuRenderer,
) -> GlowfieldResult<FrameRGBA> {
    let list = backdrop.eval_frame(frame)?;
    renderer.render(&list)
}

/// Render a range of frames (inclusive start, exclusive end) sequentially.
pub fn render_frames(
    backdrop: &Backdrop,
    range: FrameRange,
    renderer: &mut CpuRenderer,
) -> GlowfieldResult<Vec<FrameRGBA>> {
    render_frames_with_stats(backdrop, range, renderer, &RenderThreading::default())
        .map(|(frames, _)| frames)
}

#[derive(Clone, Debug)]
/// Threading and chunking controls for multi-frame rendering.
pub struct RenderThreading {
    /// Enable parallel rendering when `true`.
    pub parallel: bool,
    /// Chunk size in frames for batched scheduling.
    pub chunk_size: usize,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Aggregated rendering counters.
pub struct RenderStats {
    /// Total requested frames.
    pub frames_total: u64,
    /// Frames handed to the sink.
    pub frames_rendered: u64,
    /// Chunks scheduled.
    pub chunks: u64,
}

/// Render a frame range and return both frame data and rendering stats.
pub fn render_frames_with_stats(
    backdrop: &Backdrop,
    range: FrameRange,
    renderer: &mut CpuRenderer,
    threading: &RenderThreading,
) -> GlowfieldResult<(Vec<FrameRGBA>, RenderStats)> {
    let mut out = Vec::with_capacity(range.len_frames().min(4096) as usize);
    let stats = stream_frames(backdrop, range, renderer, threading, |_, frame| {
        out.push(frame);
        Ok(())
    })?;
    Ok((out, stats))
}

/// Render a frame range chunk by chunk, handing each frame to `sink` in frame order.
///
/// At most one chunk of frames is held in memory at a time. Parallel mode renders each chunk on a
/// dedicated rayon pool with one [`CpuRenderer`] per worker; its output is byte-identical to the
/// sequential path.
#[tracing::instrument(skip(backdrop, renderer, sink), fields(start = range.start.0, end = range.end.0))]
pub fn stream_frames(
    backdrop: &Backdrop,
    range: FrameRange,
    renderer: &mut CpuRenderer,
    threading: &RenderThreading,
    mut sink: impl FnMut(FrameIndex, FrameRGBA) -> GlowfieldResult<()>,
) -> GlowfieldResult<RenderStats> {
    if range.is_empty() {
        return Err(GlowfieldError::validation("render range must be non-empty"));
    }
    if range.end.0 > backdrop.def().duration.0 {
        return Err(GlowfieldError::validation(
            "render range must be within backdrop duration",
        ));
    }

    let chunk_size = normalized_chunk_size(threading.chunk_size);
    let pool = if threading.parallel {
        Some(build_thread_pool(threading.threads)?)
    } else {
        None
    };

    let mut stats = RenderStats::default();
    let mut chunk_start = range.start.0;
    while chunk_start < range.end.0 {
        let chunk_end = (chunk_start + chunk_size).min(range.end.0);
        let chunk = FrameRange::new(FrameIndex(chunk_start), FrameIndex(chunk_end))
            .map_err(|e| GlowfieldError::evaluation(format!("invalid chunk range: {e}")))?;

        let frames = match &pool {
            Some(pool) => render_chunk_parallel(backdrop, chunk, pool)?,
            None => render_chunk_sequential(backdrop, chunk, renderer)?,
        };
        for (f, frame) in (chunk.start.0..chunk.end.0).zip(frames) {
            sink(FrameIndex(f), frame)?;
            stats.frames_rendered += 1;
        }

        stats.frames_total += chunk.len_frames();
        stats.chunks += 1;
        chunk_start = chunk_end;
    }

    tracing::debug!(
        frames = stats.frames_total,
        chunks = stats.chunks,
        parallel = threading.parallel,
        "rendered frame range"
    );
    Ok(stats)
}

fn render_chunk_sequential(
    backdrop: &Backdrop,
    range: FrameRange,
    renderer: &mut CpuRenderer,
) -> GlowfieldResult<Vec<FrameRGBA>> {
    (range.start.0..range.end.0)
        .map(|f| render_frame(backdrop, FrameIndex(f), renderer))
        .collect()
}

fn render_chunk_parallel(
    backdrop: &Backdrop,
    range: FrameRange,
    pool: &rayon::ThreadPool,
) -> GlowfieldResult<Vec<FrameRGBA>> {
    let frames: Vec<u64> = (range.start.0..range.end.0).collect();
    let rendered = pool.install(|| {
        frames
            .par_iter()
            .map_init(CpuRenderer::new, |worker, &f| {
                render_frame(backdrop, FrameIndex(f), worker)
            })
            .collect::<Vec<_>>()
    });
    rendered.into_iter().collect()
}

fn build_thread_pool(threads: Option<usize>) -> GlowfieldResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(GlowfieldError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| GlowfieldError::render(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
