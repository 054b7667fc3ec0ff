use crate::animation::ease::Ease;
use crate::foundation::core::Millis;

/// Time-based scroll animation between two raw surface offsets.
///
/// A tween is a value: it owns no timer. The coordinator samples it once per frame and drops it
/// on completion or cancellation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTween {
    from: f64,
    to: f64,
    start: Millis,
    duration_ms: u64,
    ease: Ease,
}

/// One sample of a [`ScrollTween`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenSample {
    /// Raw surface offset at the sampled time.
    pub offset: f64,
    /// `true` when this is the terminal sample (offset equals the target exactly).
    pub done: bool,
}

impl ScrollTween {
    /// Create a tween starting at `start`. A zero duration is treated as one millisecond.
    pub fn new(from: f64, to: f64, start: Millis, duration_ms: u64, ease: Ease) -> Self {
        Self {
            from,
            to,
            start,
            duration_ms: duration_ms.max(1),
            ease,
        }
    }

    /// Target raw offset.
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Normalized linear progress at `now`.
    pub fn progress(&self, now: Millis) -> f64 {
        (now.since(self.start) as f64 / self.duration_ms as f64).clamp(0.0, 1.0)
    }

    /// Sample the eased offset at `now`.
    pub fn sample(&self, now: Millis) -> TweenSample {
        let t = self.progress(now);
        if t >= 1.0 {
            return TweenSample {
                offset: self.to,
                done: true,
            };
        }
        let e = self.ease.apply(t);
        TweenSample {
            offset: self.from + (self.to - self.from) * e,
            done: false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
