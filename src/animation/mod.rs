pub mod ease;
pub mod frame_gate;
pub mod tween;
