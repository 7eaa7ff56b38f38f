use std::path::Path;

use crate::encode::sink::{FrameEncoder, TimedFrame, check_frames};
use crate::foundation::core::{FrameDelay, FrameRange};
use crate::foundation::error::{FigurineError, FigurineResult};
use crate::sequence::frame_set::FrameImageSet;

/// Counters reported by [`VideoAssembler::assemble`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AssemblyStats {
    /// Frames handed to the encoder.
    pub frames: u64,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
}

/// Turns a persisted frame set into a single animated output.
#[derive(Clone, Copy, Debug, Default)]
pub struct VideoAssembler {
    delay: FrameDelay,
}

impl VideoAssembler {
    /// Create an assembler that shows every frame for `delay`.
    pub fn new(delay: FrameDelay) -> Self {
        Self { delay }
    }

    /// Delay attached to every frame.
    pub fn delay(&self) -> FrameDelay {
        self.delay
    }

    /// Load frames `0..frame_count` from `set` and encode them into `out_path`.
    ///
    /// The encoder is called exactly once. Every failure is reported as
    /// [`FigurineError::Encoding`].
    #[tracing::instrument(
        skip(self, set, encoder),
        fields(dir = %set.dir().display(), encoder = encoder.name(), out = %out_path.display())
    )]
    pub fn assemble(
        &self,
        set: &FrameImageSet,
        frame_count: u64,
        encoder: &mut dyn FrameEncoder,
        out_path: &Path,
    ) -> FigurineResult<AssemblyStats> {
        let range = FrameRange::first(frame_count);
        if range.is_empty() {
            return Err(FigurineError::encoding(format!(
                "nothing to assemble: no frames requested from '{}'",
                set.dir().display()
            )));
        }

        // Not pre-sized: `frame_count` may exceed the frames on disk.
        let mut frames = Vec::new();
        for idx in range.iter() {
            let path = set.frame_path(idx);
            let frame = set.read_frame(idx).map_err(|e| {
                FigurineError::encoding(format!(
                    "cannot load frame {} ('{}'): {e}",
                    idx.0,
                    path.display()
                ))
            })?;
            frames.push(TimedFrame {
                frame,
                delay: self.delay,
            });
        }

        let (width, height) = check_frames(&frames)?;
        encoder.encode(&frames, out_path).map_err(|e| match e {
            FigurineError::Encoding(_) => e,
            other => FigurineError::encoding(format!("{} encoder failed: {other}", encoder.name())),
        })?;

        tracing::info!(frames = frames.len(), width, height, "animation assembled");
        Ok(AssemblyStats {
            frames: frame_count,
            width,
            height,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/assemble.rs"]
mod tests;
