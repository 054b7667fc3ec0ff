use crate::foundation::core::{Direction, Millis, TriggerSource};

/// Settle delays per trigger source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SettleDelays {
    /// Delay after the last natural index change; long enough to ride out inertia.
    pub natural_ms: u64,
    /// Delay after an imperative tween lands.
    pub imperative_ms: u64,
}

impl Default for SettleDelays {
    fn default() -> Self {
        Self {
            natural_ms: 400,
            imperative_ms: 120,
        }
    }
}

impl SettleDelays {
    /// Delay for `source`.
    pub fn for_source(self, source: TriggerSource) -> u64 {
        match source {
            TriggerSource::Natural => self.natural_ms,
            TriggerSource::Imperative => self.imperative_ms,
        }
    }
}

/// The authoritative "now looking at slide K" signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Stabilized {
    /// Normalized slide index.
    pub index: usize,
    /// What moved the carousel there.
    pub source: TriggerSource,
    /// Last direction of travel.
    pub direction: Direction,
}

/// Debounce state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerState {
    /// Moving, or not yet armed.
    InMotion,
    /// Waiting for `deadline` with no further index changes.
    Settling {
        /// Index that will settle.
        pending: usize,
        /// Time at which it settles.
        deadline: Millis,
        /// Source captured when the timer was armed.
        source: TriggerSource,
        /// Direction captured when the timer was armed.
        direction: Direction,
    },
    /// Quiet on this index.
    Settled(usize),
}

/// Debounced state machine turning continuous motion into discrete settle events.
#[derive(Clone, Debug)]
pub struct StabilizationTimer {
    delays: SettleDelays,
    state: TimerState,
}

impl StabilizationTimer {
    /// New timer in [`TimerState::InMotion`].
    pub fn new(delays: SettleDelays) -> Self {
        Self {
            delays,
            state: TimerState::InMotion,
        }
    }

    /// Current state.
    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Configured delays.
    pub fn delays(&self) -> SettleDelays {
        self.delays
    }

    /// Cancel any pending deadline and (re)arm for `pending`.
    pub fn restart(
        &mut self,
        now: Millis,
        pending: usize,
        source: TriggerSource,
        direction: Direction,
    ) {
        let deadline = now.after(self.delays.for_source(source));
        tracing::trace!(pending, ?source, deadline = deadline.0, "settle timer armed");
        self.state = TimerState::Settling {
            pending,
            deadline,
            source,
            direction,
        };
    }

    /// Motion that must not settle yet (an imperative tween in flight).
    pub fn mark_motion(&mut self) {
        self.state = TimerState::InMotion;
    }

    /// Fire the pending deadline if it has passed.
    pub fn poll(&mut self, now: Millis) -> Option<Stabilized> {
        let TimerState::Settling {
            pending,
            deadline,
            source,
            direction,
        } = self.state
        else {
            return None;
        };
        if now < deadline {
            return None;
        }
        self.state = TimerState::Settled(pending);
        Some(Stabilized {
            index: pending,
            source,
            direction,
        })
    }

    /// Drop any pending deadline without firing.
    pub fn cancel(&mut self) {
        self.state = TimerState::InMotion;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stabilize/timer.rs"]
mod tests;
