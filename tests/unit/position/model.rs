use super::*;

fn params(n: usize, current: f64, direction: Direction) -> PositionParams {
    PositionParams {
        slide_count: n,
        current,
        spacing: 100.0,
        direction,
        correction: 0.0,
    }
}

fn slots(p: &PositionParams) -> Vec<i64> {
    compute_positions(p)
        .unwrap()
        .into_iter()
        .map(|x| ((x - BASE_OFFSET - p.correction) / p.spacing).round() as i64)
        .collect()
}

#[test]
fn moving_right_keeps_one_slide_behind() {
    let s = slots(&params(5, 0.0, Direction::Right));
    assert_eq!(s, vec![0, 1, 2, 3, -1]);
}

#[test]
fn moving_left_keeps_one_slide_behind() {
    let s = slots(&params(5, 0.0, Direction::Left));
    assert_eq!(s, vec![0, 1, -3, -2, -1]);
}

#[test]
fn every_slide_lands_in_one_window_per_loop() {
    for n in 2..=8usize {
        for dir in [Direction::Left, Direction::Right] {
            for c in -20i64..20 {
                let mut s = slots(&params(n, c as f64, dir));
                for (i, slot) in s.iter().enumerate() {
                    assert_eq!(normalize_index(*slot, n), i);
                }
                s.sort_unstable();
                assert_eq!(s.last().unwrap() - s.first().unwrap(), n as i64 - 1);
                assert!(s.contains(&c));
            }
        }
    }
}

#[test]
fn window_follows_current_index_far_from_origin() {
    let s = slots(&params(5, 1_003.0, Direction::Right));
    let mut sorted = s.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, vec![1_002, 1_003, 1_004, 1_005, 1_006]);
}

#[test]
fn fractional_current_index_uses_threshold() {
    // Just before the threshold the trailing slide stays behind; past it, it jumps ahead.
    let before = slots(&params(4, 0.2, Direction::Right));
    assert!(before.contains(&-1));
    let after = slots(&params(4, 0.3, Direction::Right));
    assert!(after.contains(&3));
    assert!(!after.contains(&-1));
}

#[test]
fn correction_and_spacing_apply_linearly() {
    let p = PositionParams {
        slide_count: 3,
        current: 0.0,
        spacing: 720.0,
        direction: Direction::Right,
        correction: 40.0,
    };
    let pos = compute_positions(&p).unwrap();
    assert_eq!(pos[0], BASE_OFFSET + 40.0);
    assert_eq!(pos[1], BASE_OFFSET + 760.0);
    assert_eq!(pos[2], BASE_OFFSET - 720.0 + 40.0);
}

#[test]
fn empty_track_has_no_positions() {
    assert!(compute_positions(&params(0, 0.0, Direction::Right)).unwrap().is_empty());
}

#[test]
fn non_positive_spacing_fails_fast() {
    let mut p = params(3, 0.0, Direction::Right);
    p.spacing = 0.0;
    assert!(compute_positions(&p).is_err());
    p.spacing = -5.0;
    assert!(compute_positions(&p).is_err());
}

#[test]
fn offset_index_conversions_agree() {
    for k in [-12i64, -1, 0, 1, 7, 400] {
        let raw = offset_for_logical_index(k, 720.0);
        assert_eq!(logical_index_for_offset(raw, 720.0), k);
        assert_eq!(logical_index_for_offset(raw + 359.0, 720.0), k);
        assert_eq!(logical_index_for_offset(raw - 359.0, 720.0), k);
    }
}

#[test]
fn direct_delta_never_wraps() {
    assert_eq!(wrap_delta(0, 3, 5, NavigationPath::Direct), 3);
    assert_eq!(wrap_delta(4, 0, 5, NavigationPath::Direct), -4);
    assert_eq!(wrap_delta(2, 2, 5, NavigationPath::Direct), 0);
}

#[test]
fn shortest_delta_goes_around_the_loop() {
    assert_eq!(wrap_delta(0, 3, 5, NavigationPath::Shortest), -2);
    assert_eq!(wrap_delta(4, 0, 5, NavigationPath::Shortest), 1);
    assert_eq!(wrap_delta(0, 2, 4, NavigationPath::Shortest), 2);
    assert_eq!(wrap_delta(1, 1, 4, NavigationPath::Shortest), 0);
}

#[test]
fn centering_correction_splits_free_space() {
    assert_eq!(centering_correction(1_000.0, 720.0), 140.0);
}
