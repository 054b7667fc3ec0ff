use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::animation::ease::Ease;
use crate::foundation::error::{CarouselError, CarouselResult};
use crate::navigation::routes::SlugRoutes;
use crate::position::model::NavigationPath;
use crate::scene::slide::Slide;
use crate::stabilize::timer::SettleDelays;
use crate::sync::coordinator::{CarouselOpts, SynchronizationCoordinator, validate_layers};
use crate::track::{Align, LayerDef, Role};

/// JSON-facing carousel description.
///
/// This is what a host (or the `parallax` CLI) loads from disk. It is validated and lowered into
/// engine [`LayerDef`]s and [`CarouselOpts`] when mounting a coordinator.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CarouselDef {
    /// Layers, exactly one of which is the master.
    pub layers: Vec<LayerSpec>,
    /// Settle, tween and frame timing.
    #[serde(default)]
    pub timing: TimingDef,
    /// Travel policy for `scroll_to_slide`.
    #[serde(default)]
    pub navigation_path: NavigationPath,
    /// Logical index the carousel mounts on.
    #[serde(default)]
    pub initial_index: i64,
    /// One route param per master slide, or empty for no deep links.
    #[serde(default)]
    pub routes: Vec<String>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
/// One layer as authored.
pub struct LayerSpec {
    /// Unique layer id.
    pub id: String,
    /// `master` or `slave`.
    pub role: Role,
    /// Distance between adjacent slides in pixels.
    pub spacing: f64,
    /// Slide alignment inside the container.
    #[serde(default)]
    pub align: Align,
    /// Opaque slide content, in slide order.
    pub slides: Vec<serde_json::Value>,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Timing block; every field has a default.
pub struct TimingDef {
    /// Settle delay after natural motion.
    pub settle_natural_ms: u64,
    /// Settle delay after an imperative tween.
    pub settle_imperative_ms: u64,
    /// `scroll_to_slide` tween length.
    pub tween_ms: u64,
    /// Frame interval used to throttle sample processing.
    pub frame_interval_ms: u64,
    /// Tween easing.
    pub ease: Ease,
}

impl Default for TimingDef {
    fn default() -> Self {
        let delays = SettleDelays::default();
        let opts = CarouselOpts::default();
        Self {
            settle_natural_ms: delays.natural_ms,
            settle_imperative_ms: delays.imperative_ms,
            tween_ms: opts.tween_ms,
            frame_interval_ms: opts.frame_interval_ms,
            ease: opts.ease,
        }
    }
}

impl LayerSpec {
    /// Lower into an engine layer definition.
    pub fn layer_def(&self) -> LayerDef {
        LayerDef {
            id: self.id.clone(),
            role: self.role,
            spacing: self.spacing,
            slide_count: self.slides.len(),
            align: self.align,
        }
    }

    /// Slides of this layer, borrowing their content.
    pub fn deck(&self) -> Vec<Slide<&serde_json::Value>> {
        self.slides
            .iter()
            .enumerate()
            .map(|(index, content)| Slide { index, content })
            .collect()
    }
}

impl CarouselDef {
    /// Parse from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> CarouselResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| CarouselError::serde(format!("parse carousel JSON: {e}")))
    }

    /// Parse from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> CarouselResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            CarouselError::config(format!("open carousel JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Engine layer definitions, in declaration order.
    pub fn layer_defs(&self) -> Vec<LayerDef> {
        self.layers.iter().map(LayerSpec::layer_def).collect()
    }

    /// The master layer, if exactly one is declared.
    pub fn master(&self) -> Option<&LayerSpec> {
        let mut masters = self.layers.iter().filter(|l| l.role == Role::Master);
        match (masters.next(), masters.next()) {
            (Some(m), None) => Some(m),
            _ => None,
        }
    }

    /// Layer by id.
    pub fn layer(&self, id: &str) -> Option<&LayerSpec> {
        self.layers.iter().find(|l| l.id == id)
    }

    /// Engine options derived from the timing block.
    pub fn opts(&self) -> CarouselOpts {
        CarouselOpts {
            delays: SettleDelays {
                natural_ms: self.timing.settle_natural_ms,
                imperative_ms: self.timing.settle_imperative_ms,
            },
            tween_ms: self.timing.tween_ms,
            ease: self.timing.ease,
            frame_interval_ms: self.timing.frame_interval_ms,
            navigation_path: self.navigation_path,
            initial_index: self.initial_index,
        }
    }

    /// Check every configuration invariant, including route coverage.
    pub fn validate(&self) -> CarouselResult<()> {
        if self.layers.is_empty() {
            return Err(CarouselError::config("carousel must declare at least one layer"));
        }
        validate_layers(&self.layer_defs())?;
        if self.timing.tween_ms == 0 {
            return Err(CarouselError::config("timing.tween_ms must be > 0"));
        }
        if self.routes.is_empty() {
            return Ok(());
        }
        let master = self
            .master()
            .ok_or_else(|| CarouselError::config("carousel needs exactly one master layer"))?;
        if self.routes.len() != master.slides.len() {
            return Err(CarouselError::navigation(format!(
                "{} routes declared for {} master slides",
                self.routes.len(),
                master.slides.len()
            )));
        }
        SlugRoutes::new(self.routes.iter().cloned()).map(|_| ())
    }

    /// Route map built from `routes`, or `None` when the carousel has no deep links.
    pub fn route_map(&self) -> CarouselResult<Option<SlugRoutes>> {
        if self.routes.is_empty() {
            return Ok(None);
        }
        SlugRoutes::new(self.routes.iter().cloned()).map(Some)
    }

    /// Validate and mount a coordinator.
    pub fn mount(&self) -> CarouselResult<SynchronizationCoordinator> {
        self.validate()?;
        SynchronizationCoordinator::new(&self.layer_defs(), self.opts())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
