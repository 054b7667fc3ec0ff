use crate::foundation::core::{Direction, normalize_index, validate_spacing};
use crate::foundation::error::{CarouselError, CarouselResult};
use crate::position::model::BASE_OFFSET;
use crate::track::{LayerDef, Role, SlidePlacement, TrackGeometry};

/// A passive layer mirroring the master at `slave.spacing / master.spacing`.
#[derive(Debug)]
pub struct SlaveTrack {
    geom: TrackGeometry,
    multiplier: f64,
    offset: f64,
    logical_index: i64,
    direction: Direction,
}

impl SlaveTrack {
    /// Build a slave for a master with `master_spacing`. The multiplier is fixed here.
    pub fn new(def: &LayerDef, master_spacing: f64, initial_index: i64) -> CarouselResult<Self> {
        if def.role != Role::Slave {
            return Err(CarouselError::config(format!(
                "layer '{}' is not a slave layer",
                def.id
            )));
        }
        let master_spacing = validate_spacing(master_spacing, "master")?;
        let geom = TrackGeometry::new(def)?;
        let multiplier = geom.spacing / master_spacing;
        Ok(Self {
            offset: initial_index as f64 * geom.spacing,
            geom,
            multiplier,
            logical_index: initial_index,
            direction: Direction::Right,
        })
    }

    /// Layer id.
    pub fn id(&self) -> &str {
        &self.geom.id
    }

    /// Speed ratio relative to the master.
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Slide spacing in pixels.
    pub fn spacing(&self) -> f64 {
        self.geom.spacing
    }

    /// Number of slides.
    pub fn slide_count(&self) -> usize {
        self.geom.slide_count
    }

    /// Last scaled offset received from the coordinator.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Logical index implied by the last received offset.
    pub fn logical_index(&self) -> i64 {
        self.logical_index
    }

    /// Logical index reduced into this layer's own slide count.
    pub fn normalized_index(&self) -> usize {
        normalize_index(self.logical_index, self.geom.slide_count)
    }

    /// Direction inherited from the master.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Cached physical positions (empty until measured).
    pub fn positions(&self) -> &[f64] {
        self.geom.positions()
    }

    /// Placements relative to the visible container.
    pub fn placements(&self) -> Vec<SlidePlacement> {
        self.geom.placements(BASE_OFFSET + self.offset)
    }

    /// Record a container measurement and recompute positions if it is usable.
    pub fn set_viewport_width(&mut self, width: f64) {
        if self.geom.measure(width) {
            self.geom.recompute(self.current(), self.direction);
        }
    }

    /// Mirror a corrected master offset. Returns the scaled offset this layer now sits at.
    pub(crate) fn follow(&mut self, master_offset: f64, master_direction: Direction) -> f64 {
        self.offset = master_offset * self.multiplier;
        self.direction = master_direction;
        self.logical_index = self.current().round() as i64;
        self.geom.recompute(self.current(), master_direction);
        self.offset
    }

    fn current(&self) -> f64 {
        self.offset / self.geom.spacing
    }

    pub(crate) fn release(&mut self) {
        self.geom.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/track/slave.rs"]
mod tests;
