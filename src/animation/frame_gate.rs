use crate::foundation::core::Millis;

/// Fixed-rate throttle standing in for animation-frame gating.
///
/// `try_open` returns `true` at most once per `interval_ms`; callers keep the latest pending
/// sample and retry on the next tick.
#[derive(Clone, Copy, Debug)]
pub struct FrameGate {
    interval_ms: u64,
    last_open: Option<Millis>,
}

impl FrameGate {
    /// Gate opening at most every `interval_ms` (0 disables throttling).
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_open: None,
        }
    }

    /// Open the gate for `now` if a full frame interval elapsed since the last opening.
    pub fn try_open(&mut self, now: Millis) -> bool {
        let open = match self.last_open {
            None => true,
            Some(last) => now < last || now.since(last) >= self.interval_ms,
        };
        if open {
            self.last_open = Some(now);
        }
        open
    }

    /// Forget the last opening so the next call opens immediately.
    pub fn reset(&mut self) {
        self.last_open = None;
    }
}
