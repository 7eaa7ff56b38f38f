use crate::foundation::core::{Affine, Point, Rect, Rgba8, Vec2};
use crate::foundation::error::{FigurineError, FigurineResult};
use crate::render::frame::FrameRGBA;
use crate::render::surface::{RasterSurface, local_transform};

/// A draw call captured by [`RecordingSurface`], together with the full transform in effect.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// [`RasterSurface::clear`].
    Clear {
        /// Fill color.
        color: Rgba8,
    },
    /// [`RasterSurface::fill_ellipse`].
    FillEllipse {
        /// Ellipse bounds in local space.
        bounds: Rect,
        /// Fill color.
        color: Rgba8,
        /// Transform in effect.
        transform: Affine,
    },
    /// [`RasterSurface::fill_rect`].
    FillRect {
        /// Rectangle in local space.
        bounds: Rect,
        /// Fill color.
        color: Rgba8,
        /// Transform in effect.
        transform: Affine,
    },
    /// [`RasterSurface::stroke_arc`].
    StrokeArc {
        /// Bounds of the full ellipse in local space.
        bounds: Rect,
        /// Start angle in degrees.
        start_deg: f64,
        /// Sweep in degrees.
        sweep_deg: f64,
        /// Stroke width.
        width: f64,
        /// Stroke color.
        color: Rgba8,
        /// Transform in effect.
        transform: Affine,
    },
    /// [`RasterSurface::stroke_line`].
    StrokeLine {
        /// Segment start in local space.
        p0: Point,
        /// Segment end in local space.
        p1: Point,
        /// Stroke width.
        width: f64,
        /// Stroke color.
        color: Rgba8,
        /// Transform in effect.
        transform: Affine,
    },
}

/// In-memory surface that records draw calls instead of rasterizing them.
///
/// Intended for tests and debugging. `fail_at` makes the n-th draw call (0-based, counting
/// every command except transform pushes/pops) fail with a render error.
#[derive(Debug)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    stack: Vec<Affine>,
    commands: Vec<DrawCommand>,
    fail_at: Option<usize>,
    calls: usize,
}

impl RecordingSurface {
    /// Create a recording surface of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            stack: Vec::new(),
            commands: Vec::new(),
            fail_at: None,
            calls: 0,
        }
    }

    /// Make the `n`-th draw call fail.
    pub fn failing_at(mut self, n: usize) -> Self {
        self.fail_at = Some(n);
        self
    }

    /// Captured draw calls in issue order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    fn current(&self) -> Affine {
        self.stack.last().copied().unwrap_or(Affine::IDENTITY)
    }

    fn record(&mut self, cmd: DrawCommand) -> FigurineResult<()> {
        let call = self.calls;
        self.calls += 1;
        if self.fail_at == Some(call) {
            return Err(FigurineError::render(format!(
                "recording surface configured to fail at draw call {call}"
            )));
        }
        self.commands.push(cmd);
        Ok(())
    }
}

impl RasterSurface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self, color: Rgba8) -> FigurineResult<()> {
        self.record(DrawCommand::Clear { color })
    }

    fn fill_ellipse(&mut self, bounds: Rect, color: Rgba8) -> FigurineResult<()> {
        let transform = self.current();
        self.record(DrawCommand::FillEllipse {
            bounds,
            color,
            transform,
        })
    }

    fn fill_rect(&mut self, bounds: Rect, color: Rgba8) -> FigurineResult<()> {
        let transform = self.current();
        self.record(DrawCommand::FillRect {
            bounds,
            color,
            transform,
        })
    }

    fn stroke_arc(
        &mut self,
        bounds: Rect,
        start_deg: f64,
        sweep_deg: f64,
        width: f64,
        color: Rgba8,
    ) -> FigurineResult<()> {
        let transform = self.current();
        self.record(DrawCommand::StrokeArc {
            bounds,
            start_deg,
            sweep_deg,
            width,
            color,
            transform,
        })
    }

    fn stroke_line(
        &mut self,
        p0: Point,
        p1: Point,
        width: f64,
        color: Rgba8,
    ) -> FigurineResult<()> {
        let transform = self.current();
        self.record(DrawCommand::StrokeLine {
            p0,
            p1,
            width,
            color,
            transform,
        })
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
        Err(FigurineError::render(
            "recording surface does not rasterize",
        ))
    }
}
