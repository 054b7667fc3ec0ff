use super::*;

const ALL: [Ease; 7] = [
    Ease::Linear,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::OutQuart,
    Ease::InOutSine,
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert!(ease.apply(0.0).abs() < 1e-12, "{ease:?}");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?}");
    }
}

#[test]
fn never_overshoots() {
    for ease in ALL {
        let mut prev = 0.0;
        for step in 0..=100 {
            let v = ease.apply(f64::from(step) / 100.0);
            assert!((0.0..=1.0).contains(&v), "{ease:?} at {step}");
            assert!(v >= prev, "{ease:?} not monotonic at {step}");
            prev = v;
        }
    }
}

#[test]
fn input_outside_unit_range_is_clamped() {
    assert_eq!(Ease::OutCubic.apply(-3.0), 0.0);
    assert_eq!(Ease::OutCubic.apply(7.0), 1.0);
}
