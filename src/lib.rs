//! Figurine renders a short procedural animation of a cartoon humanoid.
//!
//! Every frame is a pure function of its index: the head tilts on a slow sine and the limbs
//! swing on a faster one. Frames are rasterized on the CPU, persisted as numbered PNGs and
//! finally assembled into one animated file.
//!
//! # Pipeline overview
//!
//! 1. **Evaluate**: `PoseEvaluator + FrameIndex -> Pose` (where every body part is)
//! 2. **Render**: `FigureRenderer + Pose -> RasterSurface` (back-to-front draw calls)
//! 3. **Persist**: `FrameSequencer` writes `frame_000.png`, `frame_001.png`, ...
//! 4. **Assemble**: `VideoAssembler` loads the set in order and hands it to a `FrameEncoder`
//!    (in-process GIF, or MP4 through the system `ffmpeg` binary)
//!
//! The key constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: the same configuration produces byte-identical frames.
//! - **Premultiplied RGBA8** in memory; PNG files on disk hold straight alpha.
//! - **Fail fast**: the first render, write or encode failure aborts the run.
//!
//! [`pipeline::run`] is the one-call entry point; the pieces are public for custom drivers.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod encode;
mod foundation;
mod math;
mod pose;
mod render;
mod sequence;

/// Run configuration (defaults, JSON loading, validation).
pub mod config;
/// End-to-end drivers: animated run and single still image.
pub mod pipeline;

pub use config::{AnimationConfig, VideoFormat};
pub use encode::assemble::{AssemblyStats, VideoAssembler};
pub use encode::ffmpeg::{FfmpegEncoder, FfmpegEncoderOpts, is_ffmpeg_on_path};
pub use encode::gif::{GifEncoder, GifEncoderOpts};
pub use encode::sink::{FrameEncoder, InMemoryEncoder, TimedFrame, ensure_parent_dir};
pub use foundation::core::{
    Affine, BezPath, Canvas, Fps, FrameDelay, FrameIndex, FrameRange, Point, Rect, Rgba8, Vec2,
};
pub use foundation::error::{FigurineError, FigurineResult};
pub use math::vector3::Vector3;
pub use pipeline::{RunReport, encoder_for, render_still, run, run_with_encoder};
pub use pose::dims::FigureDims;
pub use pose::evaluator::{
    HEAD_TILT_AMPLITUDE_DEG, HEAD_TILT_RATE, HeadPose, LIMB_SWING_RATE, Limb, Pose,
    PoseEvaluator, arm_swing, head_tilt_deg,
};
pub use render::cpu::CpuSurface;
pub use render::figure::FigureRenderer;
pub use render::frame::FrameRGBA;
pub use render::recording::{DrawCommand, RecordingSurface};
pub use render::surface::{RasterSurface, StillFormat, TransformScope};
pub use sequence::frame_set::FrameImageSet;
pub use sequence::sequencer::{FrameSequencer, SequenceStats};
