//! Parallax is a headless engine for synchronized, infinitely scrolling, multi-layer carousels.
//!
//! One master track captures input; any number of slave tracks mirror it at their own spacing
//! ratio so background layers drift at a different speed. The engine never reads a clock or
//! touches a DOM: hosts feed it timestamps, scroll samples and container sizes, and receive
//! slide placements plus callbacks.
//!
//! - Describe the carousel in a [`CarouselDef`] (or build [`LayerDef`]s directly)
//! - Mount a [`SynchronizationCoordinator`], optionally wrapped in a [`Carousel`] for routing
//! - Drive it with `user_scroll_*`, `scroll_to_slide` and `tick`, observing via
//!   [`CarouselObserver`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

mod animation;
mod carousel;
mod navigation;
mod position;
mod scene;
pub mod script;
mod stabilize;
mod sync;
mod track;

pub use crate::foundation::core::{
    Direction, Millis, Size, TriggerSource, normalize_index, validate_spacing,
};
pub use crate::foundation::error::{CarouselError, CarouselResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::frame_gate::FrameGate;
pub use crate::animation::tween::{ScrollTween, TweenSample};
pub use crate::carousel::Carousel;
pub use crate::navigation::bridge::NavigationBridge;
pub use crate::navigation::routes::{Navigator, NoRoutes, RecordingNavigator, RouteMap, SlugRoutes};
pub use crate::position::model::{
    BASE_OFFSET, LEFT_THRESHOLD, NavigationPath, PositionParams, RIGHT_THRESHOLD,
    centering_correction, compute_positions, logical_index_for_offset, offset_for_logical_index,
    wrap_delta, wrap_multiplier,
};
pub use crate::scene::model::{CarouselDef, LayerSpec, TimingDef};
pub use crate::scene::slide::{PlacedSlide, Slide, place};
pub use crate::stabilize::timer::{SettleDelays, StabilizationTimer, Stabilized, TimerState};
pub use crate::sync::coordinator::{
    CarouselOpts, CarouselState, SynchronizationCoordinator, validate_layers,
};
pub use crate::sync::observer::{CarouselEvent, CarouselObserver, InMemoryObserver, NoopObserver};
pub use crate::track::master::{IndexChange, MasterTrack, SampleOutcome, TweenPlan};
pub use crate::track::slave::SlaveTrack;
pub use crate::track::{Align, LayerDef, Role, SlidePlacement};
