use std::path::Path;

use image::codecs::gif::Repeat;

use crate::encode::sink::{
    FrameEncoder, PartialFileGuard, TimedFrame, check_frames, ensure_parent_dir, partial_path,
    publish_partial,
};
use crate::foundation::error::{FigurineError, FigurineResult};

/// Options for [`GifEncoder`].
#[derive(Clone, Copy, Debug)]
pub struct GifEncoderOpts {
    /// NeuQuant speed, 1 (best quality) to 30 (fastest).
    pub speed: i32,
    /// Loop forever instead of playing once.
    pub looping: bool,
}

impl Default for GifEncoderOpts {
    fn default() -> Self {
        Self {
            speed: 10,
            looping: true,
        }
    }
}

/// Animated GIF encoder built on the `image` crate.
///
/// GIF delays are stored in centiseconds, which is the unit of [`crate::FrameDelay`], so
/// frame timing is exact.
#[derive(Debug, Default)]
pub struct GifEncoder {
    opts: GifEncoderOpts,
}

impl GifEncoder {
    /// Create a GIF encoder.
    pub fn new(opts: GifEncoderOpts) -> Self {
        Self { opts }
    }

    fn encode_to_vec(&self, frames: &[TimedFrame]) -> FigurineResult<Vec<u8>> {
        if !(1..=30).contains(&self.opts.speed) {
            return Err(FigurineError::validation(
                "gif encoder speed must be within 1..=30",
            ));
        }

        let mut bytes = Vec::new();
        {
            let mut enc = image::codecs::gif::GifEncoder::new_with_speed(&mut bytes, self.opts.speed);
            let repeat = if self.opts.looping {
                Repeat::Infinite
            } else {
                Repeat::Finite(0)
            };
            enc.set_repeat(repeat)
                .map_err(|e| FigurineError::encoding(format!("gif repeat: {e}")))?;

            for (i, tf) in frames.iter().enumerate() {
                let img = tf.frame.to_straight_image()?;
                let delay = image::Delay::from_numer_denom_ms(tf.delay.as_millis(), 1);
                enc.encode_frame(image::Frame::from_parts(img, 0, 0, delay))
                    .map_err(|e| FigurineError::encoding(format!("gif frame {i}: {e}")))?;
            }
        }
        Ok(bytes)
    }
}

impl FrameEncoder for GifEncoder {
    fn name(&self) -> &'static str {
        "gif"
    }

    fn encode(&mut self, frames: &[TimedFrame], out_path: &Path) -> FigurineResult<()> {
        check_frames(frames)?;
        let bytes = self.encode_to_vec(frames)?;

        ensure_parent_dir(out_path)?;
        let partial = partial_path(out_path);
        let mut guard = PartialFileGuard(Some(partial.clone()));
        std::fs::write(&partial, &bytes).map_err(|e| {
            FigurineError::encoding(format!("failed to write '{}': {e}", partial.display()))
        })?;
        publish_partial(&partial, out_path)?;
        guard.disarm();
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
