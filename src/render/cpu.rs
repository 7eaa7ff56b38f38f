use kurbo::Shape;

use crate::foundation::core::{Affine, BezPath, Canvas, Point, Rect, Rgba8, Vec2};
use crate::foundation::error::{FigurineError, FigurineResult};
use crate::render::frame::FrameRGBA;
use crate::render::surface::{RasterSurface, local_transform};

/// Flattening tolerance used when converting curves to paths.
const PATH_TOLERANCE: f64 = 0.1;

/// CPU raster surface powered by `vello_cpu`.
///
/// Draw calls are recorded into a `vello_cpu::RenderContext` and rasterized on
/// [`RasterSurface::snapshot`]. A surface is meant to be used for exactly one frame.
pub struct CpuSurface {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    stack: Vec<Affine>,
}

impl CpuSurface {
    /// Create a surface sized to `canvas`.
    ///
    /// Fails when a dimension is zero or does not fit in `u16`.
    pub fn new(canvas: Canvas) -> FigurineResult<Self> {
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| FigurineError::render("surface width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| FigurineError::render("surface height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(FigurineError::render("surface width/height must be non-zero"));
        }
        Ok(Self {
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
            stack: Vec::new(),
        })
    }

    fn current(&self) -> Affine {
        self.stack.last().copied().unwrap_or(Affine::IDENTITY)
    }

    fn prepare(&mut self, transform: Affine, color: Rgba8) {
        self.ctx.set_transform(affine_to_cpu(transform));
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
    }

    fn fill_shape(&mut self, path: &BezPath, color: Rgba8) {
        self.prepare(self.current(), color);
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    fn stroke_shape(&mut self, path: &BezPath, width: f64, color: Rgba8) -> FigurineResult<()> {
        if !(width.is_finite() && width > 0.0) {
            return Err(FigurineError::render(format!(
                "stroke width must be positive, got {width}"
            )));
        }
        self.prepare(self.current(), color);
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
        self.ctx.stroke_path(&bezpath_to_cpu(path));
        Ok(())
    }
}

impl RasterSurface for CpuSurface {
    fn width(&self) -> u32 {
        u32::from(self.width)
    }

    fn height(&self) -> u32 {
        u32::from(self.height)
    }

    fn clear(&mut self, color: Rgba8) -> FigurineResult<()> {
        self.prepare(Affine::IDENTITY, color);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.width),
            f64::from(self.height),
        ));
        Ok(())
    }

    fn fill_ellipse(&mut self, bounds: Rect, color: Rgba8) -> FigurineResult<()> {
        let path = kurbo::Ellipse::from_rect(bounds).to_path(PATH_TOLERANCE);
        self.fill_shape(&path, color);
        Ok(())
    }

    fn fill_rect(&mut self, bounds: Rect, color: Rgba8) -> FigurineResult<()> {
        self.prepare(self.current(), color);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            bounds.x0, bounds.y0, bounds.x1, bounds.y1,
        ));
        Ok(())
    }

    fn stroke_arc(
        &mut self,
        bounds: Rect,
        start_deg: f64,
        sweep_deg: f64,
        width: f64,
        color: Rgba8,
    ) -> FigurineResult<()> {
        let arc = kurbo::Arc::new(
            bounds.center(),
            Vec2::new(bounds.width() / 2.0, bounds.height() / 2.0),
            start_deg.to_radians(),
            sweep_deg.to_radians(),
            0.0,
        );
        self.stroke_shape(&arc.to_path(PATH_TOLERANCE), width, color)
    }

    fn stroke_line(
        &mut self,
        p0: Point,
        p1: Point,
        width: f64,
        color: Rgba8,
    ) -> FigurineResult<()> {
        let mut path = BezPath::new();
        path.move_to(p0);
        path.line_to(p1);
        self.stroke_shape(&path, width, color)
    }

    fn push_transform(&mut self, translate: Vec2, rotate_deg: f64) -> FigurineResult<()> {
        let next = self.current() * local_transform(translate, rotate_deg);
        self.stack.push(next);
        Ok(())
    }

    fn pop_transform(&mut self) -> FigurineResult<()> {
        self.stack
            .pop()
            .map(|_| ())
            .ok_or_else(|| FigurineError::render("pop_transform on an empty transform stack"))
    }

    fn transform_depth(&self) -> usize {
        self.stack.len()
    }

    fn snapshot(&mut self) -> FigurineResult<FrameRGBA> {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        Ok(FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
        })
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
