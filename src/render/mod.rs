pub(crate) mod cpu;
pub(crate) mod figure;
pub(crate) mod frame;
pub(crate) mod recording;
pub(crate) mod surface;
