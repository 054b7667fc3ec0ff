use std::collections::BTreeSet;

use crate::animation::ease::Ease;
use crate::animation::frame_gate::FrameGate;
use crate::foundation::core::{Direction, Millis, Size, TriggerSource, normalize_index};
use crate::foundation::error::{CarouselError, CarouselResult};
use crate::position::model::NavigationPath;
use crate::stabilize::timer::{SettleDelays, StabilizationTimer, TimerState};
use crate::sync::observer::CarouselObserver;
use crate::track::master::{MasterTrack, TweenPlan};
use crate::track::slave::SlaveTrack;
use crate::track::{LayerDef, Role};

/// Timing and navigation options for a coordinator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselOpts {
    /// Settle delays per trigger source.
    pub delays: SettleDelays,
    /// Length of a `scroll_to_slide` tween.
    pub tween_ms: u64,
    /// Easing of a `scroll_to_slide` tween.
    pub ease: Ease,
    /// Minimum spacing between two processed samples (one rendered frame).
    pub frame_interval_ms: u64,
    /// Travel policy for `scroll_to_slide`.
    pub navigation_path: NavigationPath,
    /// Logical index the carousel mounts on.
    pub initial_index: i64,
}

impl Default for CarouselOpts {
    fn default() -> Self {
        Self {
            delays: SettleDelays::default(),
            tween_ms: 800,
            ease: Ease::InOutCubic,
            frame_interval_ms: 16,
            navigation_path: NavigationPath::Direct,
            initial_index: 0,
        }
    }
}

/// Coordinator-owned carousel state.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CarouselState {
    /// Last settled normalized index; `None` until the first settle.
    pub stabilized_index: Option<usize>,
    /// Last corrected master offset that was processed.
    pub last_known_offset: f64,
    /// Origin of the current motion.
    pub trigger_source: TriggerSource,
}

/// Check the cross-layer configuration invariants: exactly one master, unique ids, and every
/// layer individually valid.
pub fn validate_layers(layers: &[LayerDef]) -> CarouselResult<()> {
    let mut ids = BTreeSet::new();
    for layer in layers {
        layer.validate()?;
        if !ids.insert(layer.id.as_str()) {
            return Err(CarouselError::config(format!(
                "duplicate layer id '{}'",
                layer.id
            )));
        }
    }
    match layers.iter().filter(|l| l.role == Role::Master).count() {
        1 => Ok(()),
        0 => Err(CarouselError::config("carousel needs exactly one master layer (got 0)")),
        n => Err(CarouselError::config(format!(
            "carousel needs exactly one master layer (got {n})"
        ))),
    }
}

/// Owns one master and N slaves and keeps them in lockstep.
///
/// All inputs serialize through `&mut self`: user samples, `scroll_to_slide` and `tick`. Master
/// samples are fanned out to every slave inside the call that processed them, so a slave is
/// never a frame behind.
#[derive(Debug)]
pub struct SynchronizationCoordinator {
    master: MasterTrack,
    slaves: Vec<SlaveTrack>,
    timer: StabilizationTimer,
    gate: FrameGate,
    state: CarouselState,
    pending: Option<f64>,
    opts: CarouselOpts,
    mounted: bool,
}

impl SynchronizationCoordinator {
    /// Mount a carousel over `layers`. Fails on configuration errors only.
    pub fn new(layers: &[LayerDef], opts: CarouselOpts) -> CarouselResult<Self> {
        validate_layers(layers)?;
        let master_def = layers
            .iter()
            .find(|l| l.role == Role::Master)
            .ok_or_else(|| CarouselError::config("carousel needs exactly one master layer"))?;
        let master = MasterTrack::new(master_def, opts.initial_index)?;
        let mut slaves = layers
            .iter()
            .filter(|l| l.role == Role::Slave)
            .map(|l| SlaveTrack::new(l, master.spacing(), opts.initial_index))
            .collect::<CarouselResult<Vec<_>>>()?;
        for slave in &mut slaves {
            slave.follow(master.offset(), master.direction());
        }

        tracing::debug!(
            master = master.id(),
            slaves = slaves.len(),
            initial_index = opts.initial_index,
            "carousel mounted"
        );

        Ok(Self {
            state: CarouselState {
                stabilized_index: None,
                last_known_offset: master.offset(),
                trigger_source: TriggerSource::Natural,
            },
            timer: StabilizationTimer::new(opts.delays),
            gate: FrameGate::new(opts.frame_interval_ms),
            master,
            slaves,
            pending: None,
            opts,
            mounted: true,
        })
    }

    /// Coordinator state snapshot.
    pub fn state(&self) -> CarouselState {
        self.state
    }

    /// Options the coordinator was mounted with.
    pub fn opts(&self) -> &CarouselOpts {
        &self.opts
    }

    /// The master track.
    pub fn master(&self) -> &MasterTrack {
        &self.master
    }

    /// All slave tracks in declaration order.
    pub fn slaves(&self) -> &[SlaveTrack] {
        &self.slaves
    }

    /// Slave track by layer id.
    pub fn slave(&self, id: &str) -> Option<&SlaveTrack> {
        self.slaves.iter().find(|s| s.id() == id)
    }

    /// Normalized index the master is currently on (not necessarily settled).
    pub fn current_index(&self) -> usize {
        self.master.normalized_index()
    }

    /// Master direction of travel.
    pub fn direction(&self) -> Direction {
        self.master.direction()
    }

    /// Whether a `scroll_to_slide` tween is in flight.
    pub fn is_tweening(&self) -> bool {
        self.master.is_tweening()
    }

    /// Whether the carousel is still mounted.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Debounce state of the stabilization timer.
    pub fn timer_state(&self) -> TimerState {
        self.timer.state()
    }

    /// Feed a container measurement to every track.
    ///
    /// Zero or non-finite widths are ignored until a real measurement arrives.
    pub fn set_viewport(&mut self, viewport: Size) {
        if !self.mounted {
            return;
        }
        self.master.set_viewport_width(viewport.width);
        for slave in &mut self.slaves {
            slave.set_viewport_width(viewport.width);
        }
    }

    /// User-driven scroll to an absolute raw surface offset.
    ///
    /// Cancels any in-flight tween and reverts the trigger source to natural. The sample is
    /// processed now if this frame has not been spent, otherwise on the next `tick`.
    pub fn user_scroll_to(&mut self, raw_offset: f64, now: Millis, obs: &mut dyn CarouselObserver) {
        if !self.mounted {
            tracing::debug!("ignoring scroll input after teardown");
            return;
        }
        self.state.trigger_source = TriggerSource::Natural;
        if self.master.cancel_tween() {
            tracing::debug!("user input interrupted tween");
            // The held timer must re-arm even if the grab never crosses a slot.
            self.timer.restart(
                now,
                self.master.normalized_index(),
                TriggerSource::Natural,
                self.master.direction(),
            );
        }
        self.pending = Some(raw_offset);
        if self.gate.try_open(now) {
            self.flush_pending(now, obs);
        }
    }

    /// User-driven scroll by `delta` pixels relative to the latest known surface offset.
    pub fn user_scroll_by(&mut self, delta: f64, now: Millis, obs: &mut dyn CarouselObserver) {
        let base = self.pending.unwrap_or_else(|| self.master.raw_offset());
        self.user_scroll_to(base + delta, now, obs);
    }

    /// Imperatively animate to slide `index`.
    ///
    /// Any integer is accepted and normalized, so stale or negative indices from route
    /// transitions wrap instead of failing. Returns whether a tween was started.
    #[tracing::instrument(skip(self))]
    pub fn scroll_to_slide(&mut self, index: i64, now: Millis) -> bool {
        if !self.mounted {
            tracing::debug!("scroll_to_slide after teardown ignored");
            return false;
        }
        let target = normalize_index(index, self.master.slide_count());
        let was_tweening = self.master.is_tweening();
        let plan = TweenPlan {
            duration_ms: self.opts.tween_ms,
            ease: self.opts.ease,
            path: self.opts.navigation_path,
        };
        self.pending = None;

        if self.master.start_tween(target, now, plan).is_some() {
            self.state.trigger_source = TriggerSource::Imperative;
            self.timer.mark_motion();
            return true;
        }

        // Already resting on the target. A cancelled tween still owes a settle.
        if was_tweening {
            self.timer.restart(
                now,
                self.master.normalized_index(),
                TriggerSource::Imperative,
                self.master.direction(),
            );
        }
        self.state.trigger_source = TriggerSource::Natural;
        false
    }

    /// Advance one frame: step the tween or flush a gated user sample, then poll the settle
    /// timer.
    pub fn tick(&mut self, now: Millis, obs: &mut dyn CarouselObserver) {
        if !self.mounted {
            return;
        }
        if self.gate.try_open(now) {
            if let Some(sample) = self.master.step_tween(now) {
                self.process(sample.offset, now, obs);
                if sample.done {
                    self.finish_tween(now, obs);
                }
            } else {
                self.flush_pending(now, obs);
            }
        }

        if let Some(event) = self.timer.poll(now) {
            tracing::debug!(
                index = event.index,
                source = ?event.source,
                direction = ?event.direction,
                "carousel settled"
            );
            self.state.stabilized_index = Some(event.index);
            obs.on_stable_index(&event);
        }
    }

    /// Release every timer, tween and pending sample. Idempotent; also run on drop.
    pub fn teardown(&mut self) {
        if !self.mounted {
            return;
        }
        self.master.release();
        for slave in &mut self.slaves {
            slave.release();
        }
        self.timer.cancel();
        self.gate.reset();
        self.pending = None;
        self.state.trigger_source = TriggerSource::Natural;
        self.mounted = false;
        tracing::debug!(master = self.master.id(), "carousel torn down");
    }

    fn flush_pending(&mut self, now: Millis, obs: &mut dyn CarouselObserver) {
        if let Some(raw) = self.pending.take() {
            self.process(raw, now, obs);
        }
    }

    fn process(&mut self, raw_offset: f64, now: Millis, obs: &mut dyn CarouselObserver) {
        let Some(outcome) = self.master.apply_sample(raw_offset) else {
            return;
        };
        self.state.last_known_offset = outcome.offset;

        let direction = self.master.direction();
        for slave in &mut self.slaves {
            slave.follow(outcome.offset, direction);
        }
        obs.on_scroll_offset(outcome.offset);

        let Some(change) = outcome.index else {
            return;
        };
        if change.direction_changed {
            obs.on_direction_change(change.direction);
        }
        obs.on_index_update(change.logical);

        if self.master.is_tweening() {
            self.timer.mark_motion();
        } else {
            self.timer.restart(
                now,
                change.normalized,
                self.state.trigger_source,
                change.direction,
            );
        }
    }

    fn finish_tween(&mut self, now: Millis, obs: &mut dyn CarouselObserver) {
        let index = self.master.normalized_index();
        self.timer.restart(
            now,
            index,
            TriggerSource::Imperative,
            self.master.direction(),
        );
        self.state.trigger_source = TriggerSource::Natural;
        tracing::debug!(index, "tween finished");
        obs.on_tween_finished(index);
    }
}

impl Drop for SynchronizationCoordinator {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sync/coordinator.rs"]
mod tests;
