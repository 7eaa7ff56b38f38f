use std::{
    io::{Read as _, Write as _},
    path::Path,
    process::{Command, Stdio},
};

use crate::encode::sink::{
    FrameEncoder, PartialFileGuard, TimedFrame, check_frames, ensure_parent_dir, partial_path,
    publish_partial,
};
use crate::foundation::core::{Canvas, FrameDelay, Rgba8};
use crate::foundation::error::{FigurineError, FigurineResult};
use crate::foundation::math::mul_div255_u16;

/// Options for [`FfmpegEncoder`].
#[derive(Clone, Copy, Debug)]
pub struct FfmpegEncoderOpts {
    /// Replace an existing file at the output path.
    pub overwrite: bool,
    /// Colour translucent pixels are flattened onto before encoding.
    pub background: Rgba8,
}

impl Default for FfmpegEncoderOpts {
    fn default() -> Self {
        Self {
            overwrite: true,
            background: Rgba8::WHITE,
        }
    }
}

/// Returns `true` when an `ffmpeg` binary can be spawned from `PATH`.
pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// H.264 MP4 encoder that pipes raw RGBA frames into the system `ffmpeg` binary.
///
/// MP4 has a single frame rate per stream, so every frame must carry the same delay.
/// Width and height must be even for `yuv420p` output.
#[derive(Debug, Default)]
pub struct FfmpegEncoder {
    opts: FfmpegEncoderOpts,
}

impl FfmpegEncoder {
    /// Create an ffmpeg-backed encoder.
    pub fn new(opts: FfmpegEncoderOpts) -> Self {
        Self { opts }
    }

    fn uniform_delay(frames: &[TimedFrame]) -> FigurineResult<FrameDelay> {
        let first = frames
            .first()
            .map(|f| f.delay)
            .ok_or_else(|| FigurineError::encoding("nothing to encode: frame list is empty"))?;
        if let Some(i) = frames.iter().position(|f| f.delay != first) {
            return Err(FigurineError::encoding(format!(
                "mp4 output needs a uniform frame delay; frame {i} differs from frame 0"
            )));
        }
        Ok(first)
    }
}

impl FrameEncoder for FfmpegEncoder {
    fn name(&self) -> &'static str {
        "ffmpeg"
    }

    fn encode(&mut self, frames: &[TimedFrame], out_path: &Path) -> FigurineResult<()> {
        let (width, height) = check_frames(frames)?;
        if !width.is_multiple_of(2) || !height.is_multiple_of(2) {
            return Err(FigurineError::encoding(format!(
                "mp4 output needs even width/height (yuv420p), got {width}x{height}"
            )));
        }
        let fps = Self::uniform_delay(frames)?
            .to_fps()
            .map_err(|e| FigurineError::encoding(e.to_string()))?;

        if !self.opts.overwrite && out_path.exists() {
            return Err(FigurineError::encoding(format!(
                "output file '{}' already exists",
                out_path.display()
            )));
        }
        if !is_ffmpeg_on_path() {
            return Err(FigurineError::encoding(
                "ffmpeg is required for MP4 encoding, but was not found on PATH",
            ));
        }

        ensure_parent_dir(out_path)?;
        let partial = partial_path(out_path);
        let mut guard = PartialFileGuard(Some(partial.clone()));

        let mut cmd = Command::new("ffmpeg");
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .arg("-y")
            .args([
                "-loglevel",
                "error",
                "-f",
                "rawvideo",
                "-pix_fmt",
                "rgba",
                "-s",
                &format!("{width}x{height}"),
                "-r",
                &format!("{}/{}", fps.num, fps.den),
                "-i",
                "pipe:0",
                "-an",
                "-c:v",
                "libx264",
                "-pix_fmt",
                "yuv420p",
                "-movflags",
                "+faststart",
                "-f",
                "mp4",
            ])
            .arg(&partial);

        let mut child = cmd.spawn().map_err(|e| {
            FigurineError::encoding(format!(
                "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
            ))
        })?;

        // ffmpeg may block on a full stderr pipe while we are still feeding stdin.
        let stderr_drain = child.stderr.take().map(|mut stderr| {
            std::thread::spawn(move || {
                let mut buf = String::new();
                let _ = stderr.read_to_string(&mut buf);
                buf
            })
        });

        let write_result = match child.stdin.take() {
            Some(mut stdin) => {
                let mut scratch = vec![0u8; Canvas { width, height }.rgba8_len()];
                frames.iter().enumerate().try_for_each(|(i, tf)| {
                    flatten_premul_over_bg(&mut scratch, &tf.frame.data, self.opts.background)?;
                    stdin.write_all(&scratch).map_err(|e| {
                        FigurineError::encoding(format!("failed to write frame {i} to ffmpeg: {e}"))
                    })
                })
            }
            None => Err(FigurineError::encoding("failed to open ffmpeg stdin")),
        };

        let status = child
            .wait()
            .map_err(|e| FigurineError::encoding(format!("failed to wait for ffmpeg: {e}")))?;
        let stderr = stderr_drain
            .and_then(|h| h.join().ok())
            .unwrap_or_default();

        if !status.success() {
            return Err(FigurineError::encoding(format!(
                "ffmpeg exited with status {status}: {}",
                stderr.trim()
            )));
        }
        write_result?;

        publish_partial(&partial, out_path)?;
        guard.disarm();
        tracing::debug!(frames = frames.len(), fps = fps.as_f64(), "mp4 written");
        Ok(())
    }
}

/// Composite premultiplied RGBA8 over an opaque background into `dst`.
pub(crate) fn flatten_premul_over_bg(
    dst: &mut [u8],
    src: &[u8],
    background: Rgba8,
) -> FigurineResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(FigurineError::encoding(
            "flatten expects equal-length rgba8 buffers",
        ));
    }

    let (bg_r, bg_g, bg_b) = (
        u16::from(background.r),
        u16::from(background.g),
        u16::from(background.b),
    );

    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let a = u16::from(s[3]);
        if a == 255 {
            d.copy_from_slice(s);
            continue;
        }
        let inv = 255 - a;
        d[0] = (u16::from(s[0]) + mul_div255_u16(bg_r, inv)).min(255) as u8;
        d[1] = (u16::from(s[1]) + mul_div255_u16(bg_g, inv)).min(255) as u8;
        d[2] = (u16::from(s[2]) + mul_div255_u16(bg_b, inv)).min(255) as u8;
        d[3] = 255;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
