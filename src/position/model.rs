//! Pure slide placement math.
//!
//! Logical index space is unbounded in both directions. Physical (surface) offsets are not: a
//! scroll surface cannot go below zero, so logical index `0` is anchored at [`BASE_OFFSET`] and
//! every slide is re-mapped into a window around the current index with a wrap multiplier.

use crate::foundation::core::{Direction, normalize_index, validate_spacing};
use crate::foundation::error::CarouselResult;

/// Physical offset of logical index `0`.
pub const BASE_OFFSET: f64 = 1_000_000.0;

/// Slides kept behind the current index while moving right.
pub const RIGHT_THRESHOLD: f64 = 1.25;

/// Slides kept behind the current index while moving left. Larger than
/// [`RIGHT_THRESHOLD`] so a reversal at a shared boundary does not flip a slide early.
pub const LEFT_THRESHOLD: f64 = 1.75;

/// How `scroll_to_slide` picks the travel distance to a target slide.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum NavigationPath {
    /// Signed difference of normalized indices (`target - current`); never wraps.
    #[default]
    Direct,
    /// Shortest way around the loop; ties go right.
    Shortest,
}

/// Inputs for one placement pass over a track.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionParams {
    /// Number of slides on the track.
    pub slide_count: usize,
    /// Current index, fractional for continuously driven tracks.
    pub current: f64,
    /// Distance between adjacent slides in pixels.
    pub spacing: f64,
    /// Direction used to pick the wrap window.
    pub direction: Direction,
    /// Constant shift applied to every slide (e.g. centering in the container).
    pub correction: f64,
}

/// Wrap multiplier for slide `index` relative to `current`.
pub fn wrap_multiplier(index: usize, current: f64, slide_count: usize, direction: Direction) -> i64 {
    let n = slide_count as f64;
    let i = index as f64;
    match direction {
        Direction::Right => -((i - current + RIGHT_THRESHOLD) / n).floor() as i64,
        Direction::Left => ((current - i + LEFT_THRESHOLD) / n).floor() as i64,
    }
}

/// Physical offset of every slide, indexed by slide.
///
/// An empty track yields no positions. Non-positive spacing is a configuration error.
pub fn compute_positions(p: &PositionParams) -> CarouselResult<Vec<f64>> {
    let spacing = validate_spacing(p.spacing, "track")?;
    if p.slide_count == 0 {
        return Ok(Vec::new());
    }
    let loop_len = spacing * p.slide_count as f64;
    Ok((0..p.slide_count)
        .map(|i| {
            let m = wrap_multiplier(i, p.current, p.slide_count, p.direction);
            m as f64 * loop_len + i as f64 * spacing + p.correction + BASE_OFFSET
        })
        .collect())
}

/// Logical index nearest to a raw surface offset.
pub fn logical_index_for_offset(raw_offset: f64, spacing: f64) -> i64 {
    ((raw_offset - BASE_OFFSET) / spacing).round() as i64
}

/// Raw surface offset at which logical index `logical` is aligned.
pub fn offset_for_logical_index(logical: i64, spacing: f64) -> f64 {
    BASE_OFFSET + logical as f64 * spacing
}

/// Shift that centers a slide of width `spacing` in a container of `viewport_width`.
pub fn centering_correction(viewport_width: f64, spacing: f64) -> f64 {
    (viewport_width - spacing) / 2.0
}

/// Signed travel, in slides, from normalized index `from` to normalized index `to`.
pub fn wrap_delta(from: usize, to: usize, slide_count: usize, path: NavigationPath) -> i64 {
    if slide_count == 0 {
        return 0;
    }
    let n = slide_count as i64;
    let from = normalize_index(from as i64, slide_count) as i64;
    let to = normalize_index(to as i64, slide_count) as i64;
    match path {
        NavigationPath::Direct => to - from,
        NavigationPath::Shortest => {
            let forward = (to - from).rem_euclid(n);
            if forward * 2 <= n { forward } else { forward - n }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/position/model.rs"]
mod tests;
