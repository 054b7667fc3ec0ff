use crate::foundation::error::{CarouselError, CarouselResult};

pub use kurbo::Size;

/// Host-supplied timestamp in milliseconds.
///
/// The engine never reads a wall clock; every time-dependent call carries one of these.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Millis(pub u64);

impl Millis {
    /// Timestamp `ms` milliseconds after `self`.
    pub fn after(self, ms: u64) -> Self {
        Self(self.0.saturating_add(ms))
    }

    /// Milliseconds elapsed since `earlier` (zero if `earlier` is in the future).
    pub fn since(self, earlier: Millis) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

/// Scroll direction along the carousel axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Direction {
    /// Towards smaller logical indices.
    Left,
    /// Towards larger logical indices.
    #[default]
    Right,
}

impl Direction {
    /// Direction of travel from logical index `from` to `to`, if they differ.
    pub fn between(from: i64, to: i64) -> Option<Self> {
        match to.cmp(&from) {
            std::cmp::Ordering::Greater => Some(Self::Right),
            std::cmp::Ordering::Less => Some(Self::Left),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Origin of the motion currently moving the carousel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum TriggerSource {
    /// User scroll, drag or inertia.
    #[default]
    Natural,
    /// A `scroll_to_slide` tween.
    Imperative,
}

/// Reduce an unbounded logical index into `[0, slide_count)`.
///
/// `slide_count` must be non-zero; callers validate it at construction.
pub fn normalize_index(logical: i64, slide_count: usize) -> usize {
    debug_assert!(slide_count > 0);
    logical.rem_euclid(slide_count as i64) as usize
}

/// Validate a spacing value at the configuration boundary.
pub fn validate_spacing(spacing: f64, what: &str) -> CarouselResult<f64> {
    if !spacing.is_finite() || spacing <= 0.0 {
        return Err(CarouselError::config(format!(
            "{what} spacing must be finite and > 0 (got {spacing})"
        )));
    }
    Ok(spacing)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
