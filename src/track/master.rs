use crate::animation::ease::Ease;
use crate::animation::tween::{ScrollTween, TweenSample};
use crate::foundation::core::{Direction, Millis, normalize_index};
use crate::foundation::error::{CarouselError, CarouselResult};
use crate::position::model::{
    BASE_OFFSET, NavigationPath, logical_index_for_offset, offset_for_logical_index, wrap_delta,
};
use crate::track::{LayerDef, Role, SlidePlacement, TrackGeometry};

/// Distance under which the surface counts as resting on a slot.
const SETTLED_TOLERANCE_PX: f64 = 0.5;

/// Discrete index change observed while processing a sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexChange {
    /// New unbounded logical index.
    pub logical: i64,
    /// `logical` reduced into `[0, slide_count)`.
    pub normalized: usize,
    /// Direction of travel that produced the change.
    pub direction: Direction,
    /// Whether `direction` differs from the previous direction.
    pub direction_changed: bool,
}

/// Result of feeding one raw offset into the master.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleOutcome {
    /// Corrected offset (`raw - BASE_OFFSET`), reported for every sample.
    pub offset: f64,
    /// Present only when the rounded logical index moved.
    pub index: Option<IndexChange>,
}

/// Parameters for an imperative scroll.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenPlan {
    /// Tween length.
    pub duration_ms: u64,
    /// Easing curve.
    pub ease: Ease,
    /// Travel policy.
    pub path: NavigationPath,
}

/// The input-owning track.
///
/// Holds the scroll surface state (raw offset), the logical index derived from it and at most one
/// in-flight imperative tween.
#[derive(Debug)]
pub struct MasterTrack {
    geom: TrackGeometry,
    raw_offset: f64,
    logical_index: i64,
    direction: Direction,
    tween: Option<ScrollTween>,
}

impl MasterTrack {
    /// Create the master resting on `initial_index`.
    pub fn new(def: &LayerDef, initial_index: i64) -> CarouselResult<Self> {
        if def.role != Role::Master {
            return Err(CarouselError::config(format!(
                "layer '{}' is not a master layer",
                def.id
            )));
        }
        let geom = TrackGeometry::new(def)?;
        Ok(Self {
            raw_offset: offset_for_logical_index(initial_index, geom.spacing),
            geom,
            logical_index: initial_index,
            direction: Direction::Right,
            tween: None,
        })
    }

    /// Layer id.
    pub fn id(&self) -> &str {
        &self.geom.id
    }

    /// Slide spacing in pixels.
    pub fn spacing(&self) -> f64 {
        self.geom.spacing
    }

    /// Number of slides.
    pub fn slide_count(&self) -> usize {
        self.geom.slide_count
    }

    /// Current raw surface offset (includes [`BASE_OFFSET`]).
    pub fn raw_offset(&self) -> f64 {
        self.raw_offset
    }

    /// Current corrected offset (`raw - BASE_OFFSET`).
    pub fn offset(&self) -> f64 {
        self.raw_offset - BASE_OFFSET
    }

    /// Current unbounded logical index.
    pub fn logical_index(&self) -> i64 {
        self.logical_index
    }

    /// Current index reduced into `[0, slide_count)`.
    pub fn normalized_index(&self) -> usize {
        normalize_index(self.logical_index, self.geom.slide_count)
    }

    /// Last direction of travel.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Cached physical positions (empty until measured).
    pub fn positions(&self) -> &[f64] {
        self.geom.positions()
    }

    /// Placements relative to the visible container.
    pub fn placements(&self) -> Vec<SlidePlacement> {
        self.geom.placements(self.raw_offset)
    }

    /// Whether an imperative tween is in flight.
    pub fn is_tweening(&self) -> bool {
        self.tween.is_some()
    }

    /// Target raw offset of the in-flight tween, if any.
    pub fn tween_target(&self) -> Option<f64> {
        self.tween.as_ref().map(ScrollTween::target)
    }

    /// Record a container measurement and recompute positions if it is usable.
    pub fn set_viewport_width(&mut self, width: f64) {
        if self.geom.measure(width) {
            self.geom.recompute(self.logical_index as f64, self.direction);
        }
    }

    /// Feed one raw surface offset. Non-finite samples are dropped.
    pub fn apply_sample(&mut self, raw_offset: f64) -> Option<SampleOutcome> {
        if !raw_offset.is_finite() {
            tracing::warn!(layer = %self.geom.id, raw_offset, "dropping non-finite scroll sample");
            return None;
        }
        self.raw_offset = raw_offset;

        let logical = logical_index_for_offset(raw_offset, self.geom.spacing);
        let index = Direction::between(self.logical_index, logical).map(|direction| {
            let direction_changed = direction != self.direction;
            self.direction = direction;
            self.logical_index = logical;
            self.geom.recompute(logical as f64, direction);
            tracing::trace!(layer = %self.geom.id, logical, ?direction, "master index moved");
            IndexChange {
                logical,
                normalized: normalize_index(logical, self.geom.slide_count),
                direction,
                direction_changed,
            }
        });

        Some(SampleOutcome {
            offset: raw_offset - BASE_OFFSET,
            index,
        })
    }

    /// Start an imperative scroll to normalized slide `target`, replacing any in-flight tween.
    ///
    /// Returns the target raw offset, or `None` when the surface already rests there.
    pub fn start_tween(&mut self, target: usize, now: Millis, plan: TweenPlan) -> Option<f64> {
        let n = self.geom.slide_count;
        let delta = wrap_delta(self.normalized_index(), target, n, plan.path);
        let to = offset_for_logical_index(
            self.logical_index.saturating_add(delta),
            self.geom.spacing,
        );

        self.cancel_tween();
        if (to - self.raw_offset).abs() < SETTLED_TOLERANCE_PX {
            return None;
        }
        self.tween = Some(ScrollTween::new(
            self.raw_offset,
            to,
            now,
            plan.duration_ms,
            plan.ease,
        ));
        tracing::debug!(layer = %self.geom.id, target, delta, "tween started");
        Some(to)
    }

    /// Drop the in-flight tween. Returns whether one was running.
    pub fn cancel_tween(&mut self) -> bool {
        self.tween.take().is_some()
    }

    /// Sample the in-flight tween at `now`. The tween is released on its terminal sample.
    pub fn step_tween(&mut self, now: Millis) -> Option<TweenSample> {
        let sample = self.tween.as_ref()?.sample(now);
        if sample.done {
            self.tween = None;
        }
        Some(sample)
    }

    pub(crate) fn release(&mut self) {
        self.tween = None;
        self.geom.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/track/master.rs"]
mod tests;
