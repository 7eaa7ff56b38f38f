use crate::config::AnimationConfig;
use crate::foundation::core::{Canvas, FrameIndex, FrameRange};
use crate::foundation::error::FigurineResult;
use crate::pose::evaluator::PoseEvaluator;
use crate::render::cpu::CpuSurface;
use crate::render::figure::FigureRenderer;
use crate::render::frame::FrameRGBA;
use crate::render::surface::RasterSurface;
use crate::sequence::frame_set::FrameImageSet;

/// Counters reported by [`FrameSequencer::run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SequenceStats {
    /// Frames requested.
    pub frames_total: u64,
    /// Frames rendered and persisted.
    pub frames_written: u64,
}

/// Drives the frame loop: evaluate, render, persist, one frame at a time in index order.
#[derive(Clone, Debug)]
pub struct FrameSequencer {
    canvas: Canvas,
    range: FrameRange,
    evaluator: PoseEvaluator,
    renderer: FigureRenderer,
}

impl FrameSequencer {
    /// Create a sequencer from a run configuration.
    pub fn new(cfg: &AnimationConfig) -> Self {
        Self {
            canvas: cfg.canvas,
            range: cfg.frame_range(),
            evaluator: PoseEvaluator::new(cfg.figure),
            renderer: FigureRenderer::new(cfg.figure),
        }
    }

    /// Frames this sequencer renders.
    pub fn range(&self) -> FrameRange {
        self.range
    }

    /// Render frame `frame` to memory on a fresh surface.
    pub fn render_frame(&self, frame: FrameIndex) -> FigurineResult<FrameRGBA> {
        let mut surface = CpuSurface::new(self.canvas)?;
        let pose = self.evaluator.evaluate(frame, self.canvas.center());
        self.renderer.render(&pose, &mut surface)?;
        surface.snapshot()
    }

    /// Render and persist every frame into `set`.
    ///
    /// The first failure aborts the run. Frames written before the failure stay on disk.
    #[tracing::instrument(skip(self, set), fields(dir = %set.dir().display(), frames = self.range.len_frames()))]
    pub fn run(&self, set: &FrameImageSet) -> FigurineResult<SequenceStats> {
        let mut stats = SequenceStats {
            frames_total: self.range.len_frames(),
            frames_written: 0,
        };
        for f in self.range.iter() {
            let frame = self.render_frame(f)?;
            let path = set.write_frame(f, &frame)?;
            stats.frames_written += 1;
            tracing::debug!(frame = f.0, path = %path.display(), "frame written");
        }
        tracing::info!(frames = stats.frames_written, "frame sequence complete");
        Ok(stats)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/sequencer.rs"]
mod tests;
