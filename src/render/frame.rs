use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{FigurineError, FigurineResult};
use crate::foundation::math::{premultiply_rgba8_in_place, unpremultiply_rgba8_in_place};
use crate::render::surface::StillFormat;

/// A rendered frame as RGBA8 pixels.
///
/// Frames are **premultiplied alpha**; conversion to straight alpha happens only at file
/// boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Premultiplied RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// Straight-alpha copy of the pixels as an [`image::RgbaImage`].
    pub fn to_straight_image(&self) -> FigurineResult<image::RgbaImage> {
        let mut straight = self.data.clone();
        unpremultiply_rgba8_in_place(&mut straight);
        image::RgbaImage::from_raw(self.width, self.height, straight).ok_or_else(|| {
            FigurineError::render(format!(
                "frame buffer of {} bytes does not match {}x{} rgba8",
                self.data.len(),
                self.width,
                self.height
            ))
        })
    }

    /// Write the frame to `path`.
    pub fn write_to_file(&self, path: &Path, format: StillFormat) -> FigurineResult<()> {
        let img = self.to_straight_image()?;
        img.save_with_format(path, format.to_image_format())
            .map_err(|e| FigurineError::io(path, e))
    }

    /// Decode encoded image bytes into a premultiplied frame.
    pub fn decode(bytes: &[u8]) -> FigurineResult<Self> {
        let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
        let rgba = dyn_img.to_rgba8();
        let (width, height) = rgba.dimensions();

        let mut data = rgba.into_raw();
        premultiply_rgba8_in_place(&mut data);
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Read and decode an image file.
    pub fn read_from_file(path: &Path) -> FigurineResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| FigurineError::io(path, e))?;
        Self::decode(&bytes).map_err(|e| FigurineError::io(path, e))
    }

    /// Premultiplied pixel at `(x, y)` as `[r, g, b, a]`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
