use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use glowfield::{
    Backdrop, BackdropDef, CpuRenderer, FrameIndex, FrameRange, RenderThreading, presets,
};

#[derive(Parser, Debug)]
#[command(name = "glowfield", version)]
struct Cli {
    /// Log at debug level.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render a frame range as numbered PNGs.
    Frames(FramesArgs),
    /// Print the display list of a frame as JSON.
    Dump(DumpArgs),
    /// Print a built-in backdrop definition as JSON.
    Preset(PresetArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input backdrop JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Input backdrop JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Last frame (exclusive); defaults to the backdrop duration.
    #[arg(long)]
    end: Option<u64>,

    /// Render frames in parallel.
    #[arg(long)]
    parallel: bool,

    /// Worker thread count for parallel rendering.
    #[arg(long)]
    threads: Option<usize>,

    /// Frames per scheduling chunk.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,
}

#[derive(Parser, Debug)]
struct DumpArgs {
    /// Input backdrop JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,
}

#[derive(Parser, Debug)]
struct PresetArgs {
    /// Preset name.
    #[arg(value_parser = clap::builder::PossibleValuesParser::new(presets::PRESET_NAMES))]
    name: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Dump(args) => cmd_dump(args),
        Command::Preset(args) => cmd_preset(args),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

fn read_backdrop(path: &Path) -> anyhow::Result<Backdrop> {
    let f = File::open(path).with_context(|| format!("open backdrop '{}'", path.display()))?;
    let def = BackdropDef::from_reader(BufReader::new(f))
        .with_context(|| format!("load backdrop '{}'", path.display()))?;
    Ok(Backdrop::new(def)?)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let backdrop = read_backdrop(&args.in_path)?;
    let frame = glowfield::render_frame(
        &backdrop,
        FrameIndex(args.frame),
        &mut CpuRenderer::new(),
    )?;
    glowfield::write_png(&args.out, &frame)?;

    tracing::info!(path = %args.out.display(), "wrote frame");
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let backdrop = read_backdrop(&args.in_path)?;
    let end = args.end.unwrap_or(backdrop.def().duration.0);
    let range = FrameRange::new(FrameIndex(args.start), FrameIndex(end))?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let threading = RenderThreading {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
    };
    let stats = glowfield::stream_frames(
        &backdrop,
        range,
        &mut CpuRenderer::new(),
        &threading,
        |f, frame| {
            let path = args.out_dir.join(format!("frame_{:05}.png", f.0));
            glowfield::write_png(&path, &frame)
        },
    )?;

    tracing::info!(
        frames = stats.frames_rendered,
        dir = %args.out_dir.display(),
        "wrote frames"
    );
    Ok(())
}

fn cmd_dump(args: DumpArgs) -> anyhow::Result<()> {
    let backdrop = read_backdrop(&args.in_path)?;
    let list = backdrop.eval_frame(FrameIndex(args.frame))?;
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &list).context("serialize display list")?;
    writeln!(out)?;
    Ok(())
}

fn cmd_preset(args: PresetArgs) -> anyhow::Result<()> {
    let def = presets::preset(&args.name)?;
    println!("{}", def.to_json_pretty()?);
    Ok(())
}
