use crate::foundation::core::Rgba8;

/// Fixed figure geometry (pixels) and palette.
///
/// The defaults reproduce the classic proportions: a 50 px head over an 80×200 torso, 100 px
/// arms and 120 px legs.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FigureDims {
    /// Head diameter.
    pub head_size: f64,
    /// Eye radius.
    pub eye_radius: f64,
    /// Neck width.
    pub neck_width: f64,
    /// Neck height.
    pub neck_height: f64,
    /// Torso width.
    pub body_width: f64,
    /// Torso height.
    pub body_height: f64,
    /// Horizontal reach of each arm.
    pub arm_length: f64,
    /// Vertical reach of each leg.
    pub leg_length: f64,
    /// Shoulder distance from the vertical centre axis.
    pub shoulder_offset: f64,
    /// Hip distance from the vertical centre axis.
    pub hip_offset: f64,
    /// Peak vertical arm displacement at full swing.
    pub arm_swing_px: f64,
    /// Peak horizontal foot displacement at full swing.
    pub leg_swing_px: f64,
    /// Stroke width for arms and legs.
    pub limb_stroke: f64,
    /// Stroke width for the mouth arc.
    pub mouth_stroke: f64,

    /// Canvas background.
    pub background: Rgba8,
    /// Head and neck fill.
    pub skin: Rgba8,
    /// Eye fill.
    pub eye: Rgba8,
    /// Torso fill.
    pub body: Rgba8,
    /// Limb and mouth stroke.
    pub ink: Rgba8,
}

impl FigureDims {
    /// Total height from the top of the head to the feet.
    pub fn figure_height(&self) -> f64 {
        self.head_size + self.neck_height + self.body_height + self.leg_length
    }
}

impl Default for FigureDims {
    fn default() -> Self {
        Self {
            head_size: 50.0,
            eye_radius: 10.0,
            neck_width: 20.0,
            neck_height: 10.0,
            body_width: 80.0,
            body_height: 200.0,
            arm_length: 100.0,
            leg_length: 120.0,
            shoulder_offset: 50.0,
            hip_offset: 20.0,
            arm_swing_px: 30.0,
            leg_swing_px: 15.0,
            limb_stroke: 4.0,
            mouth_stroke: 2.0,
            background: Rgba8::WHITE,
            skin: Rgba8::LIGHT_BLUE,
            eye: Rgba8::WHITE,
            body: Rgba8::LIGHT_GREEN,
            ink: Rgba8::BLACK,
        }
    }
}
