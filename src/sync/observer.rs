use crate::foundation::core::Direction;
use crate::stabilize::timer::Stabilized;

/// Callbacks exposed to the surrounding application.
///
/// Every method has an empty default so hosts only implement what they consume. Callbacks are
/// invoked synchronously from the coordinator call that produced them, after all slaves have
/// been updated for that sample.
pub trait CarouselObserver {
    /// Every discrete logical index change (high frequency, before settling).
    fn on_index_update(&mut self, _raw_index: i64) {}
    /// Motion settled on a slide.
    fn on_stable_index(&mut self, _event: &Stabilized) {}
    /// Every processed master sample, corrected by the base offset.
    fn on_scroll_offset(&mut self, _offset: f64) {}
    /// The master's direction of travel flipped.
    fn on_direction_change(&mut self, _direction: Direction) {}
    /// An imperative tween reached its target slide.
    fn on_tween_finished(&mut self, _index: usize) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl CarouselObserver for NoopObserver {}

/// One recorded callback.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CarouselEvent {
    /// See [`CarouselObserver::on_index_update`].
    IndexUpdate {
        /// Unbounded logical index.
        raw_index: i64,
    },
    /// See [`CarouselObserver::on_stable_index`].
    StableIndex(Stabilized),
    /// See [`CarouselObserver::on_scroll_offset`].
    ScrollOffset {
        /// Corrected master offset.
        offset: f64,
    },
    /// See [`CarouselObserver::on_direction_change`].
    DirectionChange {
        /// New direction.
        direction: Direction,
    },
    /// See [`CarouselObserver::on_tween_finished`].
    TweenFinished {
        /// Normalized target index.
        index: usize,
    },
}

/// In-memory observer for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemoryObserver {
    events: Vec<CarouselEvent>,
}

impl InMemoryObserver {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, in callback order.
    pub fn events(&self) -> &[CarouselEvent] {
        &self.events
    }

    /// Recorded stabilization events.
    pub fn stable(&self) -> Vec<Stabilized> {
        self.events
            .iter()
            .filter_map(|e| match e {
                CarouselEvent::StableIndex(s) => Some(*s),
                _ => None,
            })
            .collect()
    }

    /// Recorded corrected offsets.
    pub fn offsets(&self) -> Vec<f64> {
        self.events
            .iter()
            .filter_map(|e| match e {
                CarouselEvent::ScrollOffset { offset } => Some(*offset),
                _ => None,
            })
            .collect()
    }

    /// Recorded raw index updates.
    pub fn index_updates(&self) -> Vec<i64> {
        self.events
            .iter()
            .filter_map(|e| match e {
                CarouselEvent::IndexUpdate { raw_index } => Some(*raw_index),
                _ => None,
            })
            .collect()
    }

    /// Recorded tween completions.
    pub fn tweens_finished(&self) -> Vec<usize> {
        self.events
            .iter()
            .filter_map(|e| match e {
                CarouselEvent::TweenFinished { index } => Some(*index),
                _ => None,
            })
            .collect()
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl CarouselObserver for InMemoryObserver {
    fn on_index_update(&mut self, raw_index: i64) {
        self.events.push(CarouselEvent::IndexUpdate { raw_index });
    }

    fn on_stable_index(&mut self, event: &Stabilized) {
        self.events.push(CarouselEvent::StableIndex(*event));
    }

    fn on_scroll_offset(&mut self, offset: f64) {
        self.events.push(CarouselEvent::ScrollOffset { offset });
    }

    fn on_direction_change(&mut self, direction: Direction) {
        self.events.push(CarouselEvent::DirectionChange { direction });
    }

    fn on_tween_finished(&mut self, index: usize) {
        self.events.push(CarouselEvent::TweenFinished { index });
    }
}
