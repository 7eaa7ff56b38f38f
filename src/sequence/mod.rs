pub(crate) mod frame_set;
pub(crate) mod sequencer;
