use std::collections::HashMap;

use crate::foundation::error::{CarouselError, CarouselResult};

/// Host-supplied mapping between normalized slide indices and route params.
pub trait RouteMap {
    /// Canonical route param for slide `index`.
    fn route_for(&self, index: usize) -> Option<String>;
    /// Slide index a route param points at.
    fn index_for(&self, route: &str) -> Option<usize>;
}

/// Host side of navigation: actually changes the URL.
pub trait Navigator {
    /// Push `route` as the new location.
    fn push_route(&mut self, route: &str);
}

/// Route map for carousels without deep links.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoRoutes;

impl RouteMap for NoRoutes {
    fn route_for(&self, _index: usize) -> Option<String> {
        None
    }

    fn index_for(&self, _route: &str) -> Option<usize> {
        None
    }
}

impl<R: RouteMap> RouteMap for Option<R> {
    fn route_for(&self, index: usize) -> Option<String> {
        self.as_ref()?.route_for(index)
    }

    fn index_for(&self, route: &str) -> Option<usize> {
        self.as_ref()?.index_for(route)
    }
}

/// One slug per master slide, in slide order.
#[derive(Debug, Clone)]
pub struct SlugRoutes {
    slugs: Vec<String>,
    by_slug: HashMap<String, usize>,
}

impl SlugRoutes {
    /// Build from slugs; they must be non-empty and unique.
    pub fn new(slugs: impl IntoIterator<Item = impl Into<String>>) -> CarouselResult<Self> {
        let slugs: Vec<String> = slugs.into_iter().map(Into::into).collect();
        let mut by_slug = HashMap::with_capacity(slugs.len());
        for (i, slug) in slugs.iter().enumerate() {
            if slug.trim().is_empty() {
                return Err(CarouselError::navigation(format!(
                    "route for slide {i} must be non-empty"
                )));
            }
            if by_slug.insert(slug.clone(), i).is_some() {
                return Err(CarouselError::navigation(format!(
                    "route '{slug}' is used by more than one slide"
                )));
            }
        }
        Ok(Self { slugs, by_slug })
    }

    /// Number of routes.
    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    /// Whether there are no routes.
    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }
}

impl RouteMap for SlugRoutes {
    fn route_for(&self, index: usize) -> Option<String> {
        self.slugs.get(index).cloned()
    }

    fn index_for(&self, route: &str) -> Option<usize> {
        self.by_slug.get(route.trim_matches('/')).copied()
    }
}

/// Navigator that records pushes; used by tests and the CLI driver.
#[derive(Debug, Default, Clone)]
pub struct RecordingNavigator {
    pushed: Vec<String>,
}

impl RecordingNavigator {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes pushed so far, oldest first.
    pub fn pushed(&self) -> &[String] {
        &self.pushed
    }

    /// Take the routes pushed since the last drain.
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pushed)
    }
}

impl Navigator for RecordingNavigator {
    fn push_route(&mut self, route: &str) {
        self.pushed.push(route.to_owned());
    }
}
