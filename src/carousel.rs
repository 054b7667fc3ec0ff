use crate::foundation::core::{Direction, Millis, Size};
use crate::navigation::bridge::NavigationBridge;
use crate::navigation::routes::{Navigator, RouteMap};
use crate::stabilize::timer::{Stabilized, TimerState};
use crate::sync::coordinator::SynchronizationCoordinator;
use crate::sync::observer::CarouselObserver;

/// A mounted carousel: coordinator, navigation bridge and the host navigator, wired together.
///
/// Natural settles are pushed to the navigator; route changes coming back from the host are
/// filtered through the bridge before they reach `scroll_to_slide`.
pub struct Carousel<R, N> {
    coordinator: SynchronizationCoordinator,
    bridge: NavigationBridge<R>,
    navigator: N,
}

impl<R: RouteMap, N: Navigator> Carousel<R, N> {
    /// Wire a coordinator to a route map and a navigator.
    pub fn new(coordinator: SynchronizationCoordinator, routes: R, navigator: N) -> Self {
        Self {
            coordinator,
            bridge: NavigationBridge::new(routes),
            navigator,
        }
    }

    /// Read-only access to the coordinator.
    pub fn coordinator(&self) -> &SynchronizationCoordinator {
        &self.coordinator
    }

    /// The navigation bridge.
    pub fn bridge(&self) -> &NavigationBridge<R> {
        &self.bridge
    }

    /// The host navigator.
    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Mutable access to the host navigator.
    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    /// See [`SynchronizationCoordinator::set_viewport`].
    pub fn set_viewport(&mut self, viewport: Size) {
        self.coordinator.set_viewport(viewport);
    }

    /// See [`SynchronizationCoordinator::scroll_to_slide`].
    pub fn scroll_to_slide(&mut self, index: i64, now: Millis) -> bool {
        self.coordinator.scroll_to_slide(index, now)
    }

    /// See [`SynchronizationCoordinator::user_scroll_to`].
    pub fn user_scroll_to(&mut self, raw_offset: f64, now: Millis, obs: &mut dyn CarouselObserver) {
        let mut tap = self.tap(obs);
        tap.coordinator.user_scroll_to(raw_offset, now, &mut tap.relay);
    }

    /// See [`SynchronizationCoordinator::user_scroll_by`].
    pub fn user_scroll_by(&mut self, delta: f64, now: Millis, obs: &mut dyn CarouselObserver) {
        let mut tap = self.tap(obs);
        tap.coordinator.user_scroll_by(delta, now, &mut tap.relay);
    }

    /// See [`SynchronizationCoordinator::tick`]. Natural settles are pushed to the navigator.
    pub fn tick(&mut self, now: Millis, obs: &mut dyn CarouselObserver) {
        let mut tap = self.tap(obs);
        tap.coordinator.tick(now, &mut tap.relay);
    }

    /// The host's route changed (back/forward, deep link, or the echo of our own push).
    ///
    /// Returns whether the carousel started moving.
    #[tracing::instrument(skip(self))]
    pub fn route_changed(&mut self, route: &str, now: Millis) -> bool {
        if !self.coordinator.is_mounted() {
            return false;
        }
        // Only a settled, idle carousel can swallow a route to its own slide.
        let resting_on = match self.coordinator.timer_state() {
            TimerState::Settled(index) if !self.coordinator.is_tweening() => Some(index),
            _ => None,
        };
        match self.bridge.on_route_changed(route, resting_on) {
            Some(index) => self.coordinator.scroll_to_slide(index as i64, now),
            None => false,
        }
    }

    /// Unmount. Idempotent.
    pub fn teardown(&mut self) {
        self.coordinator.teardown();
    }

    fn tap<'a>(&'a mut self, host: &'a mut dyn CarouselObserver) -> Tap<'a, R, N> {
        Tap {
            coordinator: &mut self.coordinator,
            relay: Relay {
                host,
                bridge: &mut self.bridge,
                navigator: &mut self.navigator,
            },
        }
    }
}

struct Tap<'a, R, N> {
    coordinator: &'a mut SynchronizationCoordinator,
    relay: Relay<'a, R, N>,
}

/// Forwards every callback to the host and routes settles through the bridge.
struct Relay<'a, R, N> {
    host: &'a mut dyn CarouselObserver,
    bridge: &'a mut NavigationBridge<R>,
    navigator: &'a mut N,
}

impl<R: RouteMap, N: Navigator> CarouselObserver for Relay<'_, R, N> {
    fn on_index_update(&mut self, raw_index: i64) {
        self.host.on_index_update(raw_index);
    }

    fn on_stable_index(&mut self, event: &Stabilized) {
        self.host.on_stable_index(event);
        if let Some(route) = self.bridge.on_stabilized(event) {
            self.navigator.push_route(&route);
        }
    }

    fn on_scroll_offset(&mut self, offset: f64) {
        self.host.on_scroll_offset(offset);
    }

    fn on_direction_change(&mut self, direction: Direction) {
        self.host.on_direction_change(direction);
    }

    fn on_tween_finished(&mut self, index: usize) {
        self.host.on_tween_finished(index);
    }
}
