use crate::foundation::core::{FrameIndex, Point, Rect};
use crate::math::vector3::Vector3;
use crate::pose::dims::FigureDims;

/// Head tilt amplitude in degrees.
pub const HEAD_TILT_AMPLITUDE_DEG: f64 = 15.0;
/// Angular speed of the head tilt, radians per frame.
pub const HEAD_TILT_RATE: f64 = 0.1;
/// Angular speed of the limb swing, radians per frame.
pub const LIMB_SWING_RATE: f64 = 1.0;

/// One limb segment: it starts at `anchor` and ends at `anchor + offset`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Limb {
    /// Shoulder or hip point.
    pub anchor: Vector3,
    /// Displacement from the anchor to the hand or foot.
    pub offset: Vector3,
}

impl Limb {
    /// Hand or foot position.
    pub fn end(&self) -> Vector3 {
        self.anchor + self.offset
    }
}

/// Head placement: the head is drawn in a local frame centred on `center` and rotated by
/// `tilt_deg`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeadPose {
    /// Head centre in canvas space.
    pub center: Vector3,
    /// Clockwise tilt in degrees (raster y grows downwards).
    pub tilt_deg: f64,
}

/// Every position and angle needed to draw the figure for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    /// Neck rectangle.
    pub neck: Rect,
    /// Head placement.
    pub head: HeadPose,
    /// Torso rectangle.
    pub torso: Rect,
    /// Arm on the viewer's left.
    pub left_arm: Limb,
    /// Arm on the viewer's right.
    pub right_arm: Limb,
    /// Leg on the viewer's left.
    pub left_leg: Limb,
    /// Leg on the viewer's right.
    pub right_leg: Limb,
    /// Swing factor in `[-1, 1]` the limb offsets were derived from.
    pub swing: f64,
}

/// Head tilt in degrees for frame `f`: `sin(f * 0.1) * 15`.
pub fn head_tilt_deg(frame: FrameIndex) -> f64 {
    (frame.as_f64() * HEAD_TILT_RATE).sin() * HEAD_TILT_AMPLITUDE_DEG
}

/// Limb swing factor for frame `f`: `sin(f * 1.0)`.
pub fn arm_swing(frame: FrameIndex) -> f64 {
    (frame.as_f64() * LIMB_SWING_RATE).sin()
}

/// Computes a [`Pose`] purely from a frame index.
///
/// No state is carried between frames, so evaluating the same frame twice yields identical
/// poses and frames may be evaluated in any order.
#[derive(Clone, Copy, Debug, Default)]
pub struct PoseEvaluator {
    dims: FigureDims,
}

impl PoseEvaluator {
    /// Create an evaluator for the given figure geometry.
    pub fn new(dims: FigureDims) -> Self {
        Self { dims }
    }

    /// Figure geometry used by this evaluator.
    pub fn dims(&self) -> &FigureDims {
        &self.dims
    }

    /// Animated pose for `frame`, with the figure vertically centred on `center`.
    pub fn evaluate(&self, frame: FrameIndex, center: Point) -> Pose {
        let top_y = center.y - self.dims.figure_height() / 2.0;
        self.layout(center.x, top_y, head_tilt_deg(frame), arm_swing(frame))
    }

    /// Motionless pose with the top of the head at `top_y`.
    ///
    /// This is the single-image variant: with `top_y = 50` on an 800 px wide canvas the head
    /// centre sits at `(400, 75)`.
    pub fn rest_pose(&self, center_x: f64, top_y: f64) -> Pose {
        self.layout(center_x, top_y, 0.0, 0.0)
    }

    fn layout(&self, cx: f64, top_y: f64, tilt_deg: f64, swing: f64) -> Pose {
        let d = &self.dims;

        let head_center = Vector3::planar(cx, top_y + d.head_size / 2.0);
        let neck_top = top_y + d.head_size;
        let torso_top = neck_top + d.neck_height;
        let torso_bottom = torso_top + d.body_height;

        let neck = Rect::new(
            cx - d.neck_width / 2.0,
            neck_top,
            cx + d.neck_width / 2.0,
            torso_top,
        );
        let torso = Rect::new(
            cx - d.body_width / 2.0,
            torso_top,
            cx + d.body_width / 2.0,
            torso_bottom,
        );

        // Arms: the right offset is the exact negation of the left one, so the hands always
        // swing in opposite phase.
        let shoulder_y = torso_top + d.body_height / 4.0;
        let arm_swing = Vector3::UNIT_Y * (swing * d.arm_swing_px);
        let left_arm_offset = Vector3::UNIT_X * -d.arm_length + arm_swing;
        let left_arm = Limb {
            anchor: Vector3::planar(cx - d.shoulder_offset, shoulder_y),
            offset: left_arm_offset,
        };
        let right_arm = Limb {
            anchor: Vector3::planar(cx + d.shoulder_offset, shoulder_y),
            offset: left_arm_offset.negate(),
        };

        // Legs: mirrored about the vertical axis. The feet spread by a quarter of the leg
        // length and the swing moves them horizontally in opposite phase.
        let spread = Vector3::UNIT_X * (d.leg_length / 4.0);
        let drop = Vector3::UNIT_Y * d.leg_length;
        let leg_swing = Vector3::UNIT_X * (swing * d.leg_swing_px);
        let left_leg = Limb {
            anchor: Vector3::planar(cx - d.hip_offset, torso_bottom),
            offset: drop - spread + leg_swing,
        };
        let right_leg = Limb {
            anchor: Vector3::planar(cx + d.hip_offset, torso_bottom),
            offset: drop + spread - leg_swing,
        };

        Pose {
            neck,
            head: HeadPose {
                center: head_center,
                tilt_deg,
            },
            torso,
            left_arm,
            right_arm,
            left_leg,
            right_leg,
            swing,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pose/evaluator.rs"]
mod tests;
