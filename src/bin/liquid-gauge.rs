use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use liquid_gauge::{
    Ease, Fps, FrameIndex, FrameRange, GaugeConfig, GaugeSettings, Millis, RenderSettings, Rgba8,
    SequenceOpts, ValueChange,
};

#[derive(Parser, Debug)]
#[command(name = "liquid-gauge", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render numbered PNG frames over a frame range.
    Sequence(SequenceArgs),
    /// Print the composed frame as JSON.
    Inspect(InspectArgs),
}

#[derive(Args, Debug)]
struct GaugeArgs {
    /// Gauge diameter in pixels.
    #[arg(long, default_value_t = 140.0)]
    size: f64,

    /// Progress value; the fill is clamped to 0..=100, the readout is not.
    #[arg(long, default_value_t = 50.0, allow_negative_numbers = true)]
    value: f64,

    /// Font file for the readout. Without one the readout is omitted.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Wave periods across the liquid surface.
    #[arg(long, default_value_t = 1)]
    wave_count: u32,

    /// Easing for the fill and counter animations (e.g. in_out_quad, linear).
    #[arg(long, default_value = "in_out_quad")]
    easing: Ease,

    /// Background color (#RRGGBB or #RRGGBBAA). Transparent when omitted.
    #[arg(long)]
    background: Option<Rgba8>,
}

impl GaugeArgs {
    fn settings(&self) -> GaugeSettings {
        GaugeSettings {
            wave_count: self.wave_count,
            font: self.font.clone(),
            easing: self.easing,
            ..GaugeSettings::default()
        }
    }

    fn config(&self) -> GaugeConfig {
        GaugeConfig::new(self.size, self.value)
    }

    fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            clear_rgba: self.background,
        }
    }
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    gauge: GaugeArgs,

    /// Milliseconds after mount.
    #[arg(long, default_value_t = 1000.0)]
    at_ms: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct SequenceArgs {
    #[command(flatten)]
    gauge: GaugeArgs,

    /// Frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// First frame to write.
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Number of frames to write.
    #[arg(long, default_value_t = 60)]
    frames: u64,

    /// Value change as FRAME:VALUE; repeatable.
    #[arg(long = "change")]
    changes: Vec<ValueChange>,

    /// Output directory for frame_NNNNN.png files.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Args, Debug)]
struct InspectArgs {
    #[command(flatten)]
    gauge: GaugeArgs,

    /// Milliseconds after mount.
    #[arg(long, default_value_t = 1000.0)]
    at_ms: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sequence(args) => cmd_sequence(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (_, rgba) = liquid_gauge::render_frame(
        &args.gauge.settings(),
        args.gauge.config(),
        Millis(args.at_ms),
        &args.gauge.render_settings(),
    )?;

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    rgba.write_png(&args.out)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sequence(args: SequenceArgs) -> anyhow::Result<()> {
    let fps = Fps::new(args.fps, 1)?;
    let end = args
        .start
        .checked_add(args.frames)
        .context("frame range overflows")?;
    let range = FrameRange::new(FrameIndex(args.start), FrameIndex(end))?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let opts = SequenceOpts {
        settings: args.gauge.settings(),
        size: args.gauge.size,
        value: args.gauge.value,
        fps,
        range,
        changes: args.changes,
        render: args.gauge.render_settings(),
    };
    let out_dir = args.out_dir;
    let stats = liquid_gauge::render_sequence(&opts, |f, _, rgba| {
        rgba.write_png(&out_dir.join(format!("frame_{:05}.png", f.0)))
    })?;

    eprintln!(
        "wrote {} frames to {} ({} value changes)",
        stats.frames_rendered,
        out_dir.display(),
        stats.changes_applied
    );
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let (frame, _) = liquid_gauge::render_frame(
        &args.gauge.settings(),
        args.gauge.config(),
        Millis(args.at_ms),
        &args.gauge.render_settings(),
    )?;
    let json = serde_json::to_string_pretty(&frame).context("serialize frame")?;
    println!("{json}");
    Ok(())
}
