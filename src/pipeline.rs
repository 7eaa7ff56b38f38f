use std::path::{Path, PathBuf};

use crate::config::{AnimationConfig, VideoFormat};
use crate::encode::assemble::{AssemblyStats, VideoAssembler};
use crate::encode::ffmpeg::FfmpegEncoder;
use crate::encode::gif::GifEncoder;
use crate::encode::sink::{FrameEncoder, ensure_parent_dir};
use crate::foundation::error::FigurineResult;
use crate::pose::evaluator::PoseEvaluator;
use crate::render::cpu::CpuSurface;
use crate::render::figure::FigureRenderer;
use crate::render::surface::{RasterSurface, StillFormat};
use crate::sequence::frame_set::FrameImageSet;
use crate::sequence::sequencer::{FrameSequencer, SequenceStats};

/// Top edge of the figure in the single-image rendering.
pub const STILL_TOP_Y: f64 = 50.0;

/// Outcome of a full [`run`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    /// Frame rendering counters.
    pub sequence: SequenceStats,
    /// Assembly counters.
    pub assembly: AssemblyStats,
    /// Directory holding the persisted frames.
    pub frames_dir: PathBuf,
    /// Assembled animation.
    pub out_path: PathBuf,
}

/// Default encoder for `format`.
pub fn encoder_for(format: VideoFormat) -> Box<dyn FrameEncoder> {
    match format {
        VideoFormat::Gif => Box::new(GifEncoder::default()),
        VideoFormat::Mp4 => Box::new(FfmpegEncoder::default()),
    }
}

/// Render every frame to `cfg.frames_dir` and assemble them into `cfg.out_path` using the
/// encoder matching `cfg.format`.
pub fn run(cfg: &AnimationConfig) -> FigurineResult<RunReport> {
    let mut encoder = encoder_for(cfg.format);
    run_with_encoder(cfg, encoder.as_mut())
}

/// Like [`run`], with a caller-supplied encoder.
#[tracing::instrument(skip(cfg, encoder), fields(frames = cfg.frame_count, out = %cfg.out_path.display()))]
pub fn run_with_encoder(
    cfg: &AnimationConfig,
    encoder: &mut dyn FrameEncoder,
) -> FigurineResult<RunReport> {
    cfg.validate()?;

    let set = FrameImageSet::create(&cfg.frames_dir)?;
    let sequence = FrameSequencer::new(cfg).run(&set)?;
    let assembly =
        VideoAssembler::new(cfg.delay).assemble(&set, cfg.frame_count, encoder, &cfg.out_path)?;

    Ok(RunReport {
        sequence,
        assembly,
        frames_dir: cfg.frames_dir.clone(),
        out_path: cfg.out_path.clone(),
    })
}

/// Render the figure at rest, head top at [`STILL_TOP_Y`], into a single PNG.
#[tracing::instrument(skip(cfg))]
pub fn render_still(cfg: &AnimationConfig, out_path: &Path) -> FigurineResult<()> {
    cfg.validate()?;

    let mut surface = CpuSurface::new(cfg.canvas)?;
    let pose = PoseEvaluator::new(cfg.figure).rest_pose(cfg.canvas.center().x, STILL_TOP_Y);
    FigureRenderer::new(cfg.figure).render(&pose, &mut surface)?;

    ensure_parent_dir(out_path)?;
    surface.encode_to_file(out_path, StillFormat::Png)?;
    tracing::info!(path = %out_path.display(), "still written");
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
