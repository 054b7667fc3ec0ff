pub mod master;
pub mod slave;

use crate::foundation::core::{Direction, validate_spacing};
use crate::foundation::error::{CarouselError, CarouselResult};
use crate::position::model::{PositionParams, centering_correction, compute_positions};

/// Role of a layer inside a coordinator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Owns input capture; source of truth for scroll position.
    Master,
    /// Mirrors the master at a fixed ratio; accepts no input.
    Slave,
}

/// Horizontal alignment of slides inside the measured container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Slide `k` starts at the container's leading edge.
    #[default]
    Start,
    /// Slide `k` is centered in the container.
    Center,
}

/// Engine-facing description of one layer.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerDef {
    /// Unique layer id.
    pub id: String,
    /// Master or slave.
    pub role: Role,
    /// Distance between adjacent slides in pixels.
    pub spacing: f64,
    /// Number of slides.
    pub slide_count: usize,
    /// Alignment used to derive the container offset correction.
    pub align: Align,
}

impl LayerDef {
    /// Convenience constructor with [`Align::Start`].
    pub fn new(id: impl Into<String>, role: Role, spacing: f64, slide_count: usize) -> Self {
        Self {
            id: id.into(),
            role,
            spacing,
            slide_count,
            align: Align::Start,
        }
    }

    /// Check the per-layer configuration invariants.
    pub fn validate(&self) -> CarouselResult<()> {
        if self.id.trim().is_empty() {
            return Err(CarouselError::config("layer id must be non-empty"));
        }
        validate_spacing(self.spacing, &format!("layer '{}'", self.id))?;
        if self.slide_count == 0 {
            return Err(CarouselError::config(format!(
                "layer '{}' must have at least one slide",
                self.id
            )));
        }
        Ok(())
    }
}

/// Where one slide should be drawn this frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SlidePlacement {
    /// Slide index in `[0, slide_count)`.
    pub index: usize,
    /// Physical offset on the (virtual) scroll surface.
    pub position: f64,
    /// Offset relative to the visible container's leading edge.
    pub screen_x: f64,
}

/// Geometry shared by master and slave tracks: spacing, measurement and cached positions.
#[derive(Clone, Debug)]
pub(crate) struct TrackGeometry {
    pub(crate) id: String,
    pub(crate) spacing: f64,
    pub(crate) slide_count: usize,
    align: Align,
    viewport_width: Option<f64>,
    positions: Vec<f64>,
}

impl TrackGeometry {
    pub(crate) fn new(def: &LayerDef) -> CarouselResult<Self> {
        def.validate()?;
        Ok(Self {
            id: def.id.clone(),
            spacing: def.spacing,
            slide_count: def.slide_count,
            align: def.align,
            viewport_width: None,
            positions: Vec::new(),
        })
    }

    pub(crate) fn is_measured(&self) -> bool {
        self.viewport_width.is_some()
    }

    /// Record a container measurement. Returns `false` (and keeps the previous one) when the
    /// container has not been laid out yet.
    pub(crate) fn measure(&mut self, width: f64) -> bool {
        if !width.is_finite() || width <= 0.0 {
            tracing::debug!(layer = %self.id, width, "skipping unmeasured container");
            return false;
        }
        self.viewport_width = Some(width);
        true
    }

    fn correction(&self) -> f64 {
        match (self.align, self.viewport_width) {
            (Align::Center, Some(w)) => centering_correction(w, self.spacing),
            _ => 0.0,
        }
    }

    pub(crate) fn recompute(&mut self, current: f64, direction: Direction) {
        if !self.is_measured() {
            return;
        }
        let params = PositionParams {
            slide_count: self.slide_count,
            current,
            spacing: self.spacing,
            direction,
            correction: self.correction(),
        };
        match compute_positions(&params) {
            Ok(p) => self.positions = p,
            Err(e) => tracing::warn!(layer = %self.id, error = %e, "position recompute failed"),
        }
    }

    pub(crate) fn positions(&self) -> &[f64] {
        &self.positions
    }

    pub(crate) fn placements(&self, surface_offset: f64) -> Vec<SlidePlacement> {
        self.positions
            .iter()
            .enumerate()
            .map(|(index, &position)| SlidePlacement {
                index,
                position,
                screen_x: position - surface_offset,
            })
            .collect()
    }

    pub(crate) fn clear(&mut self) {
        self.positions.clear();
    }
}
