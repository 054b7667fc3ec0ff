pub mod model;
pub mod slide;
