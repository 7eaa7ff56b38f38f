//! Output encoding.
//!
//! Frames are assembled from the persisted frame set and handed to a [`sink::FrameEncoder`] in
//! one call. GIF output is produced in-process with the `image` crate; MP4 output pipes raw
//! RGBA into the system `ffmpeg` binary.

pub(crate) mod assemble;
pub(crate) mod ffmpeg;
pub(crate) mod gif;
pub(crate) mod sink;
