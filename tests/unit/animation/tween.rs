use super::*;

#[test]
fn linear_tween_interpolates_and_finishes_exactly() {
    let tw = ScrollTween::new(100.0, 300.0, Millis(1_000), 200, Ease::Linear);
    assert_eq!(tw.sample(Millis(1_000)).offset, 100.0);
    assert_eq!(tw.sample(Millis(1_100)).offset, 200.0);
    assert!(!tw.sample(Millis(1_199)).done);

    let end = tw.sample(Millis(1_200));
    assert!(end.done);
    assert_eq!(end.offset, 300.0);

    let late = tw.sample(Millis(9_999));
    assert!(late.done);
    assert_eq!(late.offset, 300.0);
}

#[test]
fn sampling_before_start_holds_origin() {
    let tw = ScrollTween::new(10.0, 20.0, Millis(50), 100, Ease::InOutCubic);
    assert_eq!(tw.sample(Millis(0)).offset, 10.0);
}

#[test]
fn zero_duration_completes_on_next_millisecond() {
    let tw = ScrollTween::new(0.0, 5.0, Millis(0), 0, Ease::Linear);
    assert!(!tw.sample(Millis(0)).done);
    assert!(tw.sample(Millis(1)).done);
}

#[test]
fn negative_travel_is_supported() {
    let tw = ScrollTween::new(2_160.0, -720.0, Millis(0), 400, Ease::OutQuart);
    let mid = tw.sample(Millis(200)).offset;
    assert!(mid < 2_160.0 && mid > -720.0);
}
