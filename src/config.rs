use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::foundation::core::{Canvas, FrameDelay, FrameRange};
use crate::foundation::error::{FigurineError, FigurineResult};
use crate::pose::dims::FigureDims;

/// Output container for the assembled animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoFormat {
    /// Animated GIF, encoded in-process. Loops forever.
    #[default]
    Gif,
    /// H.264 MP4 through the system `ffmpeg` binary.
    Mp4,
}

impl VideoFormat {
    /// Guess the format from a file extension (`.gif` / `.mp4`, case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        ext.parse().ok()
    }

    /// Canonical file extension.
    pub fn extension(self) -> &'static str {
        match self {
            VideoFormat::Gif => "gif",
            VideoFormat::Mp4 => "mp4",
        }
    }
}

impl FromStr for VideoFormat {
    type Err = FigurineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gif" => Ok(VideoFormat::Gif),
            "mp4" => Ok(VideoFormat::Mp4),
            other => Err(FigurineError::validation(format!(
                "unknown video format '{other}' (expected gif or mp4)"
            ))),
        }
    }
}

/// Everything a run needs. Every field has a compiled-in default, and any subset can be
/// overridden from a JSON file.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Size of every frame.
    pub canvas: Canvas,
    /// Number of frames to render; frames are `0..frame_count`.
    pub frame_count: u64,
    /// Uniform per-frame display time.
    pub delay: FrameDelay,
    /// Directory receiving `frame_NNN.png`.
    pub frames_dir: PathBuf,
    /// Assembled animation path.
    pub out_path: PathBuf,
    /// Assembled animation container.
    pub format: VideoFormat,
    /// Figure geometry and palette.
    pub figure: FigureDims,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            frame_count: 60,
            delay: FrameDelay::DEFAULT,
            frames_dir: PathBuf::from("frames"),
            out_path: PathBuf::from("animation.gif"),
            format: VideoFormat::Gif,
            figure: FigureDims::default(),
        }
    }
}

impl AnimationConfig {
    /// Parse a JSON config; missing fields keep their defaults.
    ///
    /// When only one of `format` and `out_path` is given, the other follows it: the format is
    /// taken from the output extension, or the default output gets the format's extension.
    pub fn from_reader<R: Read>(reader: R) -> FigurineResult<Self> {
        let raw: serde_json::Value = serde_json::from_reader(reader)
            .map_err(|e| FigurineError::serde(format!("invalid config json: {e}")))?;
        let has_format = raw.get("format").is_some();
        let has_out = raw.get("out_path").is_some();

        let mut cfg: Self = serde_json::from_value(raw)
            .map_err(|e| FigurineError::serde(format!("invalid config json: {e}")))?;
        match (has_format, has_out) {
            (false, true) => {
                if let Some(fmt) = VideoFormat::from_path(&cfg.out_path) {
                    cfg.format = fmt;
                }
            }
            (true, false) => {
                cfg.out_path.set_extension(cfg.format.extension());
            }
            _ => {}
        }
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read and parse a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> FigurineResult<Self> {
        let path = path.as_ref();
        let f = std::fs::File::open(path).map_err(|e| FigurineError::io(path, e))?;
        Self::from_reader(std::io::BufReader::new(f))
    }

    /// Serialize as pretty JSON.
    pub fn to_json_pretty(&self) -> FigurineResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| FigurineError::serde(e.to_string()))
    }

    /// Frames the run renders.
    pub fn frame_range(&self) -> FrameRange {
        FrameRange::first(self.frame_count)
    }

    /// Reject configurations no run could succeed with.
    ///
    /// A zero frame count is accepted here: sequencing renders nothing and assembly reports
    /// the empty set. An output path with a known extension must agree with `format`.
    pub fn validate(&self) -> FigurineResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(FigurineError::validation("canvas width/height must be non-zero"));
        }
        if self.canvas.width > u32::from(u16::MAX) || self.canvas.height > u32::from(u16::MAX) {
            return Err(FigurineError::validation(
                "canvas width/height must fit in 16 bits",
            ));
        }
        if self.delay.0 == 0 {
            return Err(FigurineError::validation(
                "frame delay must be > 0 centiseconds",
            ));
        }
        if self.figure.limb_stroke <= 0.0 || self.figure.mouth_stroke <= 0.0 {
            return Err(FigurineError::validation("stroke widths must be positive"));
        }
        if let Some(by_ext) = VideoFormat::from_path(&self.out_path)
            && by_ext != self.format
        {
            return Err(FigurineError::validation(format!(
                "output '{}' has a .{} extension but format is {}",
                self.out_path.display(),
                by_ext.extension(),
                self.format.extension()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
