// Engine modules: timing, input, rendering

pub mod frame_clock;
pub mod input;
pub mod renderer;
