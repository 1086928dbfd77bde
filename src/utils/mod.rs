pub mod frame_axes;
pub mod frame_math;
