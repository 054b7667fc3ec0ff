use super::*;
use crate::foundation::core::Direction;
use crate::navigation::routes::{NoRoutes, SlugRoutes};

fn bridge() -> NavigationBridge<SlugRoutes> {
    NavigationBridge::new(SlugRoutes::new(["intro", "work", "lab", "about", "contact"]).unwrap())
}

fn settled(index: usize, source: TriggerSource) -> Stabilized {
    Stabilized {
        index,
        source,
        direction: Direction::Right,
    }
}

#[test]
fn natural_settle_pushes_route_once() {
    let mut b = bridge();
    assert_eq!(
        b.on_stabilized(&settled(2, TriggerSource::Natural)).as_deref(),
        Some("lab")
    );
    assert_eq!(b.on_stabilized(&settled(2, TriggerSource::Natural)), None);
    assert_eq!(b.current_route(), Some("lab"));
}

#[test]
fn imperative_settle_never_pushes() {
    let mut b = bridge();
    assert_eq!(b.on_stabilized(&settled(3, TriggerSource::Imperative)), None);
    assert_eq!(b.current_route(), Some("about"));
}

#[test]
fn echo_of_own_push_is_swallowed() {
    let mut b = bridge();
    let route = b.on_stabilized(&settled(1, TriggerSource::Natural)).unwrap();
    assert_eq!(b.on_route_changed(&route, None), None);
    // A later, genuine back-navigation to the same route is honoured.
    assert_eq!(b.on_route_changed("work", Some(3)), Some(1));
}

#[test]
fn route_change_to_resting_slide_is_ignored() {
    let mut b = bridge();
    assert_eq!(b.on_route_changed("lab", Some(2)), None);
    assert_eq!(b.on_route_changed("lab", None), Some(2));
}

#[test]
fn unknown_route_is_a_no_op() {
    let mut b = bridge();
    assert_eq!(b.on_route_changed("missing", None), None);
}

#[test]
fn carousel_without_routes_never_navigates() {
    let mut b = NavigationBridge::new(NoRoutes);
    assert_eq!(b.on_stabilized(&settled(1, TriggerSource::Natural)), None);
    assert_eq!(b.on_route_changed("anything", None), None);
}
