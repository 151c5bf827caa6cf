pub mod alarm;
pub mod frame;
pub mod room;

pub use frame::{compose_frame, DrawCall, FrameContext, Geometry};
