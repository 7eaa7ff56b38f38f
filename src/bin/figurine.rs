use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "figurine", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the animation: numbered PNG frames plus one GIF or MP4.
    Render(RenderArgs),
    /// Render the figure at rest as a single PNG.
    Still(StillArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// JSON config; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of frames.
    #[arg(long)]
    frames: Option<u64>,

    /// Output animation path.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Directory for the numbered frame PNGs.
    #[arg(long)]
    frames_dir: Option<PathBuf>,

    /// Per-frame delay in hundredths of a second.
    #[arg(long)]
    delay_cs: Option<u32>,

    /// Output container. Defaults to the `--out` extension, then gif.
    #[arg(long, value_enum)]
    format: Option<FormatChoice>,
}

#[derive(Parser, Debug)]
struct StillArgs {
    /// JSON config for canvas size and figure dims.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long, default_value = "figure.png")]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Gif,
    Mp4,
}

impl From<FormatChoice> for figurine::VideoFormat {
    fn from(value: FormatChoice) -> Self {
        match value {
            FormatChoice::Gif => figurine::VideoFormat::Gif,
            FormatChoice::Mp4 => figurine::VideoFormat::Mp4,
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Still(args) => cmd_still(args),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<figurine::AnimationConfig> {
    match path {
        Some(p) => figurine::AnimationConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display())),
        None => Ok(figurine::AnimationConfig::default()),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut cfg = load_config(args.config.as_ref())?;

    if let Some(n) = args.frames {
        cfg.frame_count = n;
    }
    if let Some(dir) = args.frames_dir {
        cfg.frames_dir = dir;
    }
    if let Some(cs) = args.delay_cs {
        cfg.delay = figurine::FrameDelay(cs);
    }
    let out_given = args.out.is_some();
    if let Some(out) = args.out {
        if let Some(fmt) = figurine::VideoFormat::from_path(&out) {
            cfg.format = fmt;
        }
        cfg.out_path = out;
    }
    if let Some(fmt) = args.format {
        cfg.format = fmt.into();
        if !out_given {
            cfg.out_path.set_extension(cfg.format.extension());
        }
    }
    cfg.validate()?;

    let report = figurine::run(&cfg)?;

    eprintln!(
        "wrote {} frames to {} and {}",
        report.sequence.frames_written,
        report.frames_dir.display(),
        report.out_path.display()
    );
    Ok(())
}

fn cmd_still(args: StillArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_ref())?;
    figurine::render_still(&cfg, &args.out)
        .with_context(|| format!("render still '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}
