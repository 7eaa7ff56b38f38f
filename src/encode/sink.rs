use std::path::{Path, PathBuf};

use crate::foundation::core::{Canvas, FrameDelay};
use crate::foundation::error::{FigurineError, FigurineResult};
use crate::render::frame::FrameRGBA;

/// A frame together with its display time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimedFrame {
    /// Premultiplied pixels.
    pub frame: FrameRGBA,
    /// How long the frame stays on screen.
    pub delay: FrameDelay,
}

/// Encoder contract: turn an ordered frame list into one media file.
///
/// `encode` is called once per output with every frame, in playback order. Implementations
/// must either produce the complete file at `out_path` or fail without leaving a file under
/// that name.
pub trait FrameEncoder {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Encode `frames` into `out_path`.
    fn encode(&mut self, frames: &[TimedFrame], out_path: &Path) -> FigurineResult<()>;
}

/// In-memory encoder for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemoryEncoder {
    calls: usize,
    frames: Vec<TimedFrame>,
    out_path: Option<PathBuf>,
}

impl InMemoryEncoder {
    /// Create a new in-memory encoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times [`FrameEncoder::encode`] was called.
    pub fn calls(&self) -> usize {
        self.calls
    }

    /// Frames received by the last call.
    pub fn frames(&self) -> &[TimedFrame] {
        &self.frames
    }

    /// Output path passed to the last call.
    pub fn out_path(&self) -> Option<&Path> {
        self.out_path.as_deref()
    }
}

impl FrameEncoder for InMemoryEncoder {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn encode(&mut self, frames: &[TimedFrame], out_path: &Path) -> FigurineResult<()> {
        self.calls += 1;
        self.frames = frames.to_vec();
        self.out_path = Some(out_path.to_path_buf());
        Ok(())
    }
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> FigurineResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Sibling path an encoder writes to before publishing the result under `out_path`.
///
/// The extension is kept so tools that sniff it (ffmpeg) still pick the right muxer.
pub(crate) fn partial_path(out_path: &Path) -> PathBuf {
    let stem = out_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let name = match out_path.extension() {
        Some(ext) => format!(".{stem}.partial.{}", ext.to_string_lossy()),
        None => format!(".{stem}.partial"),
    };
    out_path.with_file_name(name)
}

/// Move a finished partial file to `out_path`.
pub(crate) fn publish_partial(partial: &Path, out_path: &Path) -> FigurineResult<()> {
    std::fs::rename(partial, out_path).map_err(|e| {
        let _ = std::fs::remove_file(partial);
        FigurineError::encoding(format!(
            "failed to move encoded output into '{}': {e}",
            out_path.display()
        ))
    })
}

/// Removes the partial file on drop unless disarmed.
pub(crate) struct PartialFileGuard(pub(crate) Option<PathBuf>);

impl PartialFileGuard {
    pub(crate) fn disarm(&mut self) {
        self.0 = None;
    }
}

impl Drop for PartialFileGuard {
    fn drop(&mut self) {
        if let Some(path) = self.0.take() {
            let _ = std::fs::remove_file(path);
        }
    }
}

/// Common checks every encoder applies before writing anything.
pub(crate) fn check_frames(frames: &[TimedFrame]) -> FigurineResult<(u32, u32)> {
    let first = frames
        .first()
        .ok_or_else(|| FigurineError::encoding("nothing to encode: frame list is empty"))?;
    let (w, h) = (first.frame.width, first.frame.height);
    let expected_len = Canvas {
        width: w,
        height: h,
    }
    .rgba8_len();
    for (i, f) in frames.iter().enumerate() {
        if f.frame.width != w || f.frame.height != h {
            return Err(FigurineError::encoding(format!(
                "frame {i} is {}x{}, expected {w}x{h}",
                f.frame.width, f.frame.height
            )));
        }
        if f.frame.data.len() != expected_len {
            return Err(FigurineError::encoding(format!(
                "frame {i} buffer does not match {w}x{h} rgba8"
            )));
        }
    }
    Ok((w, h))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
