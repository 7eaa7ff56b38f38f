use crate::foundation::core::{Point, Rect};
use crate::foundation::error::FigurineResult;
use crate::pose::dims::FigureDims;
use crate::pose::evaluator::{Limb, Pose};
use crate::render::surface::{RasterSurface, TransformScope};

/// Mouth arc start angle: 0° points along +x in head space.
const MOUTH_START_DEG: f64 = 0.0;
/// Half a turn clockwise in raster space, through the bottom of the ellipse: a smile.
const MOUTH_SWEEP_DEG: f64 = 180.0;

/// Issues the draw commands that compose one figure.
///
/// The order is fixed (background, neck, head, torso, arms, legs) so later shapes occlude
/// earlier ones identically on every frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct FigureRenderer {
    dims: FigureDims,
}

impl FigureRenderer {
    /// Create a renderer for the given figure geometry and palette.
    pub fn new(dims: FigureDims) -> Self {
        Self { dims }
    }

    /// Draw `pose` onto `surface`, starting from a cleared background.
    pub fn render(&self, pose: &Pose, surface: &mut dyn RasterSurface) -> FigurineResult<()> {
        let d = &self.dims;

        surface.clear(d.background)?;
        surface.fill_rect(pose.neck, d.skin)?;
        self.draw_head(pose, surface)?;
        surface.fill_rect(pose.torso, d.body)?;
        self.draw_limb(&pose.left_arm, surface)?;
        self.draw_limb(&pose.right_arm, surface)?;
        self.draw_limb(&pose.left_leg, surface)?;
        self.draw_limb(&pose.right_leg, surface)?;
        Ok(())
    }

    /// Head, eyes and mouth in a head-local frame centred on the head and rotated by the
    /// tilt. The transform is popped when `head` goes out of scope.
    fn draw_head(&self, pose: &Pose, surface: &mut dyn RasterSurface) -> FigurineResult<()> {
        let d = &self.dims;
        let mut head = TransformScope::push(
            surface,
            pose.head.center.to_vec2(),
            pose.head.tilt_deg,
        )?;

        let r = d.head_size / 2.0;
        head.fill_ellipse(Rect::new(-r, -r, r, r), d.skin)?;

        // Eyes sit a quarter of the head in from each side and a third of the way down.
        let eye_dx = d.head_size / 4.0;
        let eye_y = -r + d.head_size / 3.0;
        for eye_x in [-eye_dx, eye_dx] {
            head.fill_ellipse(
                Rect::from_center_size(
                    Point::new(eye_x, eye_y),
                    (2.0 * d.eye_radius, 2.0 * d.eye_radius),
                ),
                d.eye,
            )?;
        }

        let mouth = Rect::from_center_size(
            Point::new(0.0, d.head_size / 5.0),
            (d.head_size * 0.4, d.head_size / 5.0),
        );
        head.stroke_arc(
            mouth,
            MOUTH_START_DEG,
            MOUTH_SWEEP_DEG,
            d.mouth_stroke,
            d.ink,
        )?;
        Ok(())
    }

    fn draw_limb(&self, limb: &Limb, surface: &mut dyn RasterSurface) -> FigurineResult<()> {
        surface.stroke_line(
            limb.anchor.to_point(),
            limb.end().to_point(),
            self.dims.limb_stroke,
            self.dims.ink,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/figure.rs"]
mod tests;
