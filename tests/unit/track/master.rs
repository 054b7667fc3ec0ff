use super::*;

fn master(n: usize) -> MasterTrack {
    MasterTrack::new(&LayerDef::new("front", Role::Master, 720.0, n), 0).unwrap()
}

fn plan(path: NavigationPath) -> TweenPlan {
    TweenPlan {
        duration_ms: 400,
        ease: Ease::Linear,
        path,
    }
}

#[test]
fn rejects_slave_layer() {
    let def = LayerDef::new("back", Role::Slave, 900.0, 5);
    assert!(MasterTrack::new(&def, 0).is_err());
}

#[test]
fn starts_aligned_on_initial_index() {
    let m = MasterTrack::new(&LayerDef::new("front", Role::Master, 720.0, 5), 7).unwrap();
    assert_eq!(m.logical_index(), 7);
    assert_eq!(m.normalized_index(), 2);
    assert_eq!(m.offset(), 7.0 * 720.0);
}

#[test]
fn sub_slide_motion_reports_offset_without_index_change() {
    let mut m = master(5);
    let out = m.apply_sample(BASE_OFFSET + 200.0).unwrap();
    assert_eq!(out.offset, 200.0);
    assert!(out.index.is_none());
    assert_eq!(m.logical_index(), 0);
}

#[test]
fn crossing_half_a_slide_changes_index_and_direction() {
    let mut m = master(5);
    let right = m.apply_sample(BASE_OFFSET + 400.0).unwrap().index.unwrap();
    assert_eq!(right.logical, 1);
    assert_eq!(right.normalized, 1);
    assert_eq!(right.direction, Direction::Right);
    assert!(!right.direction_changed);

    let left = m
        .apply_sample(BASE_OFFSET - 1_000.0)
        .unwrap()
        .index
        .unwrap();
    assert_eq!(left.logical, -1);
    assert_eq!(left.normalized, 4);
    assert_eq!(left.direction, Direction::Left);
    assert!(left.direction_changed);
}

#[test]
fn non_finite_samples_are_dropped() {
    let mut m = master(5);
    assert!(m.apply_sample(f64::NAN).is_none());
    assert_eq!(m.offset(), 0.0);
}

#[test]
fn tween_runs_to_target_slot_and_releases() {
    let mut m = master(5);
    let to = m.start_tween(3, Millis(0), plan(NavigationPath::Direct)).unwrap();
    assert_eq!(to, BASE_OFFSET + 3.0 * 720.0);
    assert!(m.is_tweening());

    let mid = m.step_tween(Millis(200)).unwrap();
    assert!(!mid.done);
    assert_eq!(mid.offset, BASE_OFFSET + 1.5 * 720.0);

    let end = m.step_tween(Millis(400)).unwrap();
    assert!(end.done);
    assert_eq!(end.offset, to);
    assert!(!m.is_tweening());
    assert!(m.step_tween(Millis(416)).is_none());
}

#[test]
fn shortest_path_wraps_backwards() {
    let mut m = master(5);
    let to = m
        .start_tween(3, Millis(0), plan(NavigationPath::Shortest))
        .unwrap();
    assert_eq!(to, BASE_OFFSET - 2.0 * 720.0);
}

#[test]
fn tween_to_resting_slot_is_a_no_op() {
    let mut m = master(5);
    assert!(m.start_tween(0, Millis(0), plan(NavigationPath::Direct)).is_none());
    assert!(!m.is_tweening());
}

#[test]
fn new_tween_replaces_previous_one() {
    let mut m = master(10);
    m.start_tween(3, Millis(0), plan(NavigationPath::Direct));
    let to = m.start_tween(7, Millis(0), plan(NavigationPath::Direct)).unwrap();
    assert_eq!(m.tween_target(), Some(to));
    assert_eq!(to, BASE_OFFSET + 7.0 * 720.0);
}

#[test]
fn positions_follow_index_once_measured() {
    let mut m = master(4);
    assert!(m.positions().is_empty());
    m.set_viewport_width(1_280.0);
    assert_eq!(m.positions().len(), 4);

    m.apply_sample(BASE_OFFSET + 720.0);
    let placed = m.placements();
    assert_eq!(placed[1].screen_x, 0.0);
    assert_eq!(placed[0].screen_x, -720.0);
}

#[test]
fn tween_from_extreme_offset_saturates_instead_of_overflowing() {
    let mut m = master(5);
    m.apply_sample(1e300).unwrap();
    assert_eq!(m.logical_index(), i64::MAX);
    let to = m.start_tween(4, Millis(0), plan(NavigationPath::Direct)).unwrap();
    assert!(to.is_finite());
    assert!(m.is_tweening());

    m.apply_sample(-1e300).unwrap();
    assert_eq!(m.logical_index(), i64::MIN);
    let to = m.start_tween(0, Millis(0), plan(NavigationPath::Direct)).unwrap();
    assert!(to.is_finite());
}
