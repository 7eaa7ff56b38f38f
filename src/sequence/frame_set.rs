use std::path::{Path, PathBuf};

use crate::foundation::core::FrameIndex;
use crate::foundation::error::{FigurineError, FigurineResult};
use crate::render::frame::FrameRGBA;
use crate::render::surface::StillFormat;

/// Directory of numbered frame images: `frame_000.png`, `frame_001.png`, ...
///
/// Numbers are zero-padded to three digits and widen naturally past 999. The set is written
/// append-only by the sequencer and read back in index order by the assembler.
#[derive(Clone, Debug)]
pub struct FrameImageSet {
    dir: PathBuf,
}

impl FrameImageSet {
    /// Refer to a frame set in `dir` without touching the filesystem.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Refer to a frame set in `dir`, creating the directory if needed.
    pub fn create(dir: impl Into<PathBuf>) -> FigurineResult<Self> {
        let set = Self::new(dir);
        std::fs::create_dir_all(&set.dir).map_err(|e| FigurineError::io(&set.dir, e))?;
        Ok(set)
    }

    /// Directory holding the frames.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File name of frame `idx`, e.g. `frame_007.png`.
    pub fn file_name(idx: FrameIndex) -> String {
        format!("frame_{:03}.png", idx.0)
    }

    /// Full path of frame `idx`.
    pub fn frame_path(&self, idx: FrameIndex) -> PathBuf {
        self.dir.join(Self::file_name(idx))
    }

    /// Persist `frame` as frame `idx`, replacing any previous file.
    pub fn write_frame(&self, idx: FrameIndex, frame: &FrameRGBA) -> FigurineResult<PathBuf> {
        let path = self.frame_path(idx);
        frame.write_to_file(&path, StillFormat::Png)?;
        Ok(path)
    }

    /// Load frame `idx`.
    pub fn read_frame(&self, idx: FrameIndex) -> FigurineResult<FrameRGBA> {
        FrameRGBA::read_from_file(&self.frame_path(idx))
    }

    /// Return `true` when frame `idx` exists on disk.
    pub fn contains(&self, idx: FrameIndex) -> bool {
        self.frame_path(idx).is_file()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/frame_set.rs"]
mod tests;
