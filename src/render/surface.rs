use std::ops::{Deref, DerefMut};
use std::path::Path;

use crate::foundation::core::{Affine, Point, Rect, Rgba8, Vec2};
use crate::foundation::error::FigurineResult;
use crate::render::frame::FrameRGBA;

/// Still-image container formats a surface can be persisted as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StillFormat {
    /// Lossless PNG.
    #[default]
    Png,
}

impl StillFormat {
    pub(crate) fn to_image_format(self) -> image::ImageFormat {
        match self {
            StillFormat::Png => image::ImageFormat::Png,
        }
    }
}

/// A 2D raster canvas that accepts shape commands under a transform stack.
///
/// Coordinates are in pixels with y growing downwards. Every draw call is affected by the
/// composition of all currently pushed transforms. Angles are in degrees and follow the
/// raster convention, so positive rotations turn clockwise on screen.
pub trait RasterSurface {
    /// Surface width in pixels.
    fn width(&self) -> u32;

    /// Surface height in pixels.
    fn height(&self) -> u32;

    /// Fill the whole surface with `color`, ignoring the transform stack.
    fn clear(&mut self, color: Rgba8) -> FigurineResult<()>;

    /// Fill the ellipse inscribed in `bounds`.
    fn fill_ellipse(&mut self, bounds: Rect, color: Rgba8) -> FigurineResult<()>;

    /// Fill `bounds`.
    fn fill_rect(&mut self, bounds: Rect, color: Rgba8) -> FigurineResult<()>;

    /// Stroke part of the ellipse inscribed in `bounds`, starting at `start_deg` and sweeping
    /// `sweep_deg`.
    fn stroke_arc(
        &mut self,
        bounds: Rect,
        start_deg: f64,
        sweep_deg: f64,
        width: f64,
        color: Rgba8,
    ) -> FigurineResult<()>;

    /// Stroke a straight segment from `p0` to `p1`.
    fn stroke_line(&mut self, p0: Point, p1: Point, width: f64, color: Rgba8)
    -> FigurineResult<()>;

    /// Push `translate(translate) * rotate(rotate_deg)` onto the transform stack.
    ///
    /// Prefer [`TransformScope::push`], which guarantees the matching pop.
    fn push_transform(&mut self, translate: Vec2, rotate_deg: f64) -> FigurineResult<()>;

    /// Pop the most recently pushed transform. Fails when the stack is empty.
    fn pop_transform(&mut self) -> FigurineResult<()>;

    /// Number of transforms currently pushed.
    fn transform_depth(&self) -> usize;

    /// Rasterize everything drawn so far and read back premultiplied RGBA8 pixels.
    fn snapshot(&mut self) -> FigurineResult<FrameRGBA>;

    /// Rasterize and write the surface to `path` in `format`.
    fn encode_to_file(&mut self, path: &Path, format: StillFormat) -> FigurineResult<()> {
        self.snapshot()?.write_to_file(path, format)
    }
}

/// A pushed transform that is popped again when the scope is dropped.
///
/// Draw calls made through the scope (it dereferences to the surface) see the pushed
/// transform; the pop happens on every exit path, including early returns through `?`.
pub struct TransformScope<'a> {
    surface: &'a mut dyn RasterSurface,
}

impl<'a> TransformScope<'a> {
    /// Push a translation followed by a rotation about the new origin.
    pub fn push(
        surface: &'a mut dyn RasterSurface,
        translate: Vec2,
        rotate_deg: f64,
    ) -> FigurineResult<Self> {
        surface.push_transform(translate, rotate_deg)?;
        Ok(Self { surface })
    }
}

impl<'a> Deref for TransformScope<'a> {
    type Target = dyn RasterSurface + 'a;

    fn deref(&self) -> &Self::Target {
        &*self.surface
    }
}

impl<'a> DerefMut for TransformScope<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.surface
    }
}

impl Drop for TransformScope<'_> {
    fn drop(&mut self) {
        if let Err(err) = self.surface.pop_transform() {
            tracing::warn!(%err, "transform scope could not pop its transform");
        }
    }
}

/// `translate(t) * rotate(deg)`: rotate about the local origin, then move it to `t`.
pub(crate) fn local_transform(translate: Vec2, rotate_deg: f64) -> Affine {
    Affine::translate(translate) * Affine::rotate(rotate_deg.to_radians())
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
