//! Script-driven simulation.
//!
//! A script is a list of timed host actions (drags, jumps, route changes, resizes). The runner
//! replays it frame by frame against a mounted [`Carousel`], echoing every pushed route back
//! like a real router would, and records what the host would have observed.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::animation::ease::Ease;
use crate::carousel::Carousel;
use crate::foundation::core::{Direction, Millis, Size, TriggerSource};
use crate::foundation::error::{CarouselError, CarouselResult};
use crate::navigation::routes::RecordingNavigator;
use crate::position::model::BASE_OFFSET;
use crate::scene::model::CarouselDef;
use crate::scene::slide::place;
use crate::stabilize::timer::Stabilized;
use crate::sync::observer::{CarouselEvent, CarouselObserver};
use crate::track::SlidePlacement;

/// How long the runner keeps ticking after the last step when `until_ms` is absent.
const DEFAULT_TAIL_MS: u64 = 3_000;

/// A timed list of host actions.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    /// Container size applied before the first frame.
    #[serde(default)]
    pub viewport: Option<Size>,
    /// Last simulated timestamp.
    #[serde(default)]
    pub until_ms: Option<u64>,
    /// Also log every `scroll_offset` callback (one per processed frame).
    #[serde(default)]
    pub record_offsets: bool,
    /// Steps sorted by `at_ms`.
    pub steps: Vec<Step>,
}

/// One action at a point in time.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Step {
    /// When the action happens.
    pub at_ms: u64,
    /// What happens.
    #[serde(flatten)]
    pub action: Action,
}

/// Host actions a script can perform.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Action {
    /// User drag by `delta` pixels, spread over `duration_ms` with `ease` (inertia-like when
    /// eased out).
    Drag {
        /// Total travel in pixels; positive moves right.
        delta: f64,
        /// Gesture length; zero applies it in one sample.
        #[serde(default)]
        duration_ms: u64,
        /// Shape of the gesture over time.
        #[serde(default = "linear")]
        ease: Ease,
    },
    /// User scroll to an absolute corrected offset.
    ScrollTo {
        /// Target offset relative to logical index 0.
        offset: f64,
    },
    /// Imperative jump.
    ScrollToSlide {
        /// Any integer; normalized by the engine.
        index: i64,
    },
    /// Host route change (back/forward or deep link).
    Route {
        /// Route param.
        param: String,
    },
    /// Container resize.
    Resize {
        /// New width.
        width: f64,
        /// New height.
        height: f64,
    },
    /// Unmount the carousel.
    Teardown,
}

fn linear() -> Ease {
    Ease::Linear
}

/// First-interaction flag owned by the host application, not by the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct InteractionFlags {
    /// The user has scrolled or dragged at least once.
    pub has_dragged: bool,
}

/// A callback with its timestamp.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TimedEvent {
    /// When the callback fired.
    pub at_ms: u64,
    /// The callback.
    #[serde(flatten)]
    pub event: CarouselEvent,
}

/// A route the carousel pushed, and what the echoed route change did.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TimedRoute {
    /// When it was pushed.
    pub at_ms: u64,
    /// The pushed route param.
    pub route: String,
    /// Whether the echo restarted motion (it never should).
    pub echo_moved: bool,
}

/// One slide's placement with its content.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PlacedContent {
    /// Slide index.
    pub index: usize,
    /// Offset from the container's leading edge.
    pub screen_x: f64,
    /// The slide's opaque content.
    pub content: serde_json::Value,
}

/// Final state of one layer.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LayerReport {
    /// Layer id.
    pub id: String,
    /// Corrected offset the layer sits at.
    pub offset: f64,
    /// Normalized index in the layer's own slide count.
    pub index: usize,
    /// Placed slides (empty if never measured or torn down).
    pub slides: Vec<PlacedContent>,
}

/// Everything a run produced.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SimulationReport {
    /// Observer callbacks in order.
    pub events: Vec<TimedEvent>,
    /// Routes pushed by the bridge.
    pub routes_pushed: Vec<TimedRoute>,
    /// Settled index at the end of the run.
    pub stabilized_index: Option<usize>,
    /// Trigger source at the end of the run.
    pub trigger_source: TriggerSource,
    /// Master direction at the end of the run.
    pub direction: Direction,
    /// Whether the carousel was still mounted.
    pub mounted: bool,
    /// Host-owned interaction flags.
    pub flags: InteractionFlags,
    /// Per-layer final state, master first.
    pub layers: Vec<LayerReport>,
    /// Last simulated timestamp.
    pub ended_at_ms: u64,
}

impl SimulationReport {
    /// Stabilization events in order.
    pub fn stable(&self) -> Vec<Stabilized> {
        self.events
            .iter()
            .filter_map(|e| match e.event {
                CarouselEvent::StableIndex(s) => Some(s),
                _ => None,
            })
            .collect()
    }

    /// Final state of a layer.
    pub fn layer(&self, id: &str) -> Option<&LayerReport> {
        self.layers.iter().find(|l| l.id == id)
    }
}

impl Script {
    /// Parse from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> CarouselResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| CarouselError::serde(format!("parse script JSON: {e}")))
    }

    /// Parse from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> CarouselResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            CarouselError::script(format!("open script JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Steps must be time-ordered and numerically sane.
    pub fn validate(&self) -> CarouselResult<()> {
        if !self.steps.windows(2).all(|w| w[0].at_ms <= w[1].at_ms) {
            return Err(CarouselError::script("steps must be sorted by at_ms"));
        }
        for step in &self.steps {
            let finite = match &step.action {
                Action::Drag { delta, .. } => delta.is_finite(),
                Action::ScrollTo { offset } => offset.is_finite(),
                Action::Resize { width, height } => width.is_finite() && height.is_finite(),
                Action::ScrollToSlide { .. } | Action::Route { .. } | Action::Teardown => true,
            };
            if !finite {
                return Err(CarouselError::script(format!(
                    "step at {}ms has a non-finite value",
                    step.at_ms
                )));
            }
        }
        Ok(())
    }

    fn end_ms(&self) -> u64 {
        self.until_ms.unwrap_or_else(|| {
            self.steps
                .last()
                .map_or(0, |s| s.at_ms)
                .saturating_add(DEFAULT_TAIL_MS)
        })
    }
}

/// Replay `script` against a carousel mounted from `def`.
#[tracing::instrument(skip(def, script), fields(steps = script.steps.len()))]
pub fn run(def: &CarouselDef, script: &Script) -> CarouselResult<SimulationReport> {
    script.validate()?;
    let coordinator = def.mount()?;
    let mut carousel = Carousel::new(coordinator, def.route_map()?, RecordingNavigator::new());
    if let Some(viewport) = script.viewport {
        carousel.set_viewport(viewport);
    }

    let frame_ms = def.timing.frame_interval_ms.max(1);
    let end_ms = script.end_ms();
    let mut log = TimedLog::new(script.record_offsets);
    let mut routes_pushed = Vec::new();
    let mut flags = InteractionFlags::default();
    let mut gesture: Option<Gesture> = None;
    let mut steps = script.steps.iter().peekable();

    let mut t = 0u64;
    loop {
        let now = Millis(t);
        log.now = t;

        while let Some(step) = steps.next_if(|s| s.at_ms <= t) {
            match &step.action {
                Action::Drag {
                    delta,
                    duration_ms,
                    ease,
                } => {
                    flags.has_dragged = true;
                    if *duration_ms == 0 {
                        gesture = None;
                        carousel.user_scroll_by(*delta, now, &mut log);
                    } else {
                        gesture = Some(Gesture {
                            start: now,
                            from: carousel.coordinator().master().offset(),
                            delta: *delta,
                            duration_ms: *duration_ms,
                            ease: *ease,
                        });
                    }
                }
                Action::ScrollTo { offset } => {
                    flags.has_dragged = true;
                    gesture = None;
                    carousel.user_scroll_to(BASE_OFFSET + offset, now, &mut log);
                }
                Action::ScrollToSlide { index } => {
                    carousel.scroll_to_slide(*index, now);
                }
                Action::Route { param } => {
                    carousel.route_changed(param, now);
                }
                Action::Resize { width, height } => {
                    carousel.set_viewport(Size::new(*width, *height));
                }
                Action::Teardown => {
                    gesture = None;
                    carousel.teardown();
                }
            }
        }

        if let Some(g) = gesture {
            let (offset, done) = g.sample(now);
            carousel.user_scroll_to(BASE_OFFSET + offset, now, &mut log);
            if done {
                gesture = None;
            }
        }

        carousel.tick(now, &mut log);

        for route in carousel.navigator_mut().drain() {
            let echo_moved = carousel.route_changed(&route, now);
            routes_pushed.push(TimedRoute {
                at_ms: t,
                route,
                echo_moved,
            });
        }

        if t >= end_ms {
            break;
        }
        t = t.saturating_add(frame_ms).min(end_ms);
    }

    let coordinator = carousel.coordinator();
    let master = coordinator.master();
    let mut layers = Vec::with_capacity(1 + coordinator.slaves().len());
    layers.push(layer_report(
        def,
        master.id(),
        master.offset(),
        master.normalized_index(),
        &master.placements(),
    ));
    for slave in coordinator.slaves() {
        layers.push(layer_report(
            def,
            slave.id(),
            slave.offset(),
            slave.normalized_index(),
            &slave.placements(),
        ));
    }

    let state = coordinator.state();
    Ok(SimulationReport {
        events: log.events,
        routes_pushed,
        stabilized_index: state.stabilized_index,
        trigger_source: state.trigger_source,
        direction: coordinator.direction(),
        mounted: coordinator.is_mounted(),
        flags,
        layers,
        ended_at_ms: t,
    })
}

fn layer_report(
    def: &CarouselDef,
    id: &str,
    offset: f64,
    index: usize,
    placements: &[SlidePlacement],
) -> LayerReport {
    let slides = def
        .layer(id)
        .map(|spec| {
            let deck = spec.deck();
            place(&deck, placements)
                .into_iter()
                .map(|p| PlacedContent {
                    index: p.slide.index,
                    screen_x: p.placement.screen_x,
                    content: p.slide.content.clone(),
                })
                .collect()
        })
        .unwrap_or_default();
    LayerReport {
        id: id.to_owned(),
        offset,
        index,
        slides,
    }
}

/// An in-progress user drag, sampled once per frame.
#[derive(Clone, Copy, Debug)]
struct Gesture {
    start: Millis,
    from: f64,
    delta: f64,
    duration_ms: u64,
    ease: Ease,
}

impl Gesture {
    fn sample(&self, now: Millis) -> (f64, bool) {
        let t = (now.since(self.start) as f64 / self.duration_ms as f64).min(1.0);
        (self.from + self.delta * self.ease.apply(t), t >= 1.0)
    }
}

/// Observer stamping every callback with the current simulated time.
struct TimedLog {
    now: u64,
    record_offsets: bool,
    events: Vec<TimedEvent>,
}

impl TimedLog {
    fn new(record_offsets: bool) -> Self {
        Self {
            now: 0,
            record_offsets,
            events: Vec::new(),
        }
    }

    fn push(&mut self, event: CarouselEvent) {
        self.events.push(TimedEvent {
            at_ms: self.now,
            event,
        });
    }
}

impl CarouselObserver for TimedLog {
    fn on_index_update(&mut self, raw_index: i64) {
        self.push(CarouselEvent::IndexUpdate { raw_index });
    }

    fn on_stable_index(&mut self, event: &Stabilized) {
        self.push(CarouselEvent::StableIndex(*event));
    }

    fn on_scroll_offset(&mut self, offset: f64) {
        if self.record_offsets {
            self.push(CarouselEvent::ScrollOffset { offset });
        }
    }

    fn on_direction_change(&mut self, direction: Direction) {
        self.push(CarouselEvent::DirectionChange { direction });
    }

    fn on_tween_finished(&mut self, index: usize) {
        self.push(CarouselEvent::TweenFinished { index });
    }
}

#[cfg(test)]
#[path = "../tests/unit/script/run.rs"]
mod tests;
