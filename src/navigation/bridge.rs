use crate::foundation::core::TriggerSource;
use crate::navigation::routes::RouteMap;
use crate::stabilize::timer::Stabilized;

/// Boundary between the carousel and the host's router.
///
/// Settles caused by natural input become route pushes. Settles caused by `scroll_to_slide`
/// never do: the route already points there. Route changes that echo the bridge's own last push,
/// or that point at the slide the carousel already rests on, are swallowed.
#[derive(Debug)]
pub struct NavigationBridge<R> {
    routes: R,
    last_pushed: Option<String>,
    current_route: Option<String>,
}

impl<R: RouteMap> NavigationBridge<R> {
    /// Wrap a route map.
    pub fn new(routes: R) -> Self {
        Self {
            routes,
            last_pushed: None,
            current_route: None,
        }
    }

    /// Route the bridge believes the host is showing.
    pub fn current_route(&self) -> Option<&str> {
        self.current_route.as_deref()
    }

    /// React to a settle. Returns the route the host should push, if any.
    pub fn on_stabilized(&mut self, event: &Stabilized) -> Option<String> {
        let route = self.routes.route_for(event.index)?;
        if event.source == TriggerSource::Imperative {
            tracing::trace!(%route, "imperative settle; route push suppressed");
            self.current_route = Some(route);
            return None;
        }
        if self.current_route.as_deref() == Some(route.as_str()) {
            return None;
        }
        tracing::debug!(%route, index = event.index, "pushing route for natural settle");
        self.last_pushed = Some(route.clone());
        self.current_route = Some(route.clone());
        Some(route)
    }

    /// React to a host route change. Returns the slide the carousel should scroll to, if any.
    ///
    /// `resting_on` is the settled index when the carousel is idle, `None` while it moves.
    pub fn on_route_changed(&mut self, route: &str, resting_on: Option<usize>) -> Option<usize> {
        if self.last_pushed.as_deref() == Some(route) {
            self.last_pushed = None;
            tracing::trace!(route, "route change echoes our own push");
            return None;
        }
        self.last_pushed = None;
        self.current_route = Some(route.to_owned());

        let Some(index) = self.routes.index_for(route) else {
            tracing::warn!(route, "route does not map to a slide");
            return None;
        };
        if resting_on == Some(index) {
            return None;
        }
        Some(index)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/navigation/bridge.rs"]
mod tests;
