use super::*;

fn carousel() -> CarouselDef {
    serde_json::from_str(include_str!("../../data/carousel.json")).unwrap()
}

fn script() -> Script {
    serde_json::from_str(include_str!("../../data/script.json")).unwrap()
}

fn script_from(steps: &str) -> Script {
    serde_json::from_str(&format!(
        r#"{{ "viewport": {{ "width": 1280, "height": 720 }}, "until_ms": 3000, "steps": {steps} }}"#
    ))
    .unwrap()
}

#[test]
fn fixture_script_parses() {
    let s = script();
    s.validate().unwrap();
    assert_eq!(s.steps.len(), 3);
    assert!(matches!(s.steps[0].action, Action::ScrollToSlide { index: 3 }));
    assert!(matches!(
        s.steps[1].action,
        Action::Drag {
            ease: Ease::OutCubic,
            duration_ms: 240,
            ..
        }
    ));
}

#[test]
fn drag_ease_defaults_to_linear() {
    let s = script_from(r#"[ { "at_ms": 0, "op": "drag", "delta": 10 } ]"#);
    assert!(matches!(
        s.steps[0].action,
        Action::Drag {
            ease: Ease::Linear,
            duration_ms: 0,
            ..
        }
    ));
}

#[test]
fn unsorted_steps_are_rejected() {
    let s = script_from(
        r#"[ { "at_ms": 10, "op": "teardown" }, { "at_ms": 0, "op": "scroll_to_slide", "index": 1 } ]"#,
    );
    let err = s.validate().unwrap_err();
    assert!(err.to_string().contains("script error:"));
}

#[test]
fn fixture_run_pushes_only_the_natural_settle() {
    let report = run(&carousel(), &script()).unwrap();

    let stable = report.stable();
    assert_eq!(stable.len(), 3);
    assert_eq!((stable[0].index, stable[0].source), (3, TriggerSource::Imperative));
    assert_eq!((stable[1].index, stable[1].source), (2, TriggerSource::Natural));
    assert_eq!(stable[1].direction, Direction::Left);
    assert_eq!((stable[2].index, stable[2].source), (1, TriggerSource::Imperative));

    assert_eq!(report.routes_pushed.len(), 1);
    assert_eq!(report.routes_pushed[0].route, "lab");
    assert!(!report.routes_pushed[0].echo_moved);

    assert_eq!(report.stabilized_index, Some(1));
    assert!(report.flags.has_dragged);
    assert!(report.mounted);
    assert_eq!(report.ended_at_ms, 4_000);
}

#[test]
fn fixture_run_leaves_layers_in_lockstep() {
    let report = run(&carousel(), &script()).unwrap();
    let front = report.layer("front").unwrap();
    let back = report.layer("back").unwrap();
    assert_eq!((front.index, front.offset), (1, 720.0));
    assert_eq!((back.index, back.offset), (1, 900.0));
    assert_eq!(front.slides.len(), 5);
    assert_eq!(back.slides.len(), 5);
}

#[test]
fn placed_slides_carry_content() {
    let report = run(&carousel(), &script()).unwrap();
    let front = report.layer("front").unwrap();
    let current = front.slides.iter().find(|s| s.index == 1).unwrap();
    assert_eq!(current.content["title"], "Work");
    // Centered: (1280 - 720) / 2.
    assert!((current.screen_x - 280.0).abs() < 1e-6);
}

#[test]
fn index_updates_are_logged_with_time() {
    let report = run(&carousel(), &script()).unwrap();
    let updates: Vec<(u64, i64)> = report
        .events
        .iter()
        .filter_map(|e| match e.event {
            CarouselEvent::IndexUpdate { raw_index } => Some((e.at_ms, raw_index)),
            _ => None,
        })
        .collect();
    assert_eq!(
        updates.iter().map(|u| u.1).collect::<Vec<_>>(),
        vec![1, 2, 3, 2, 1]
    );
    assert!(updates.windows(2).all(|w| w[0].0 <= w[1].0));
}

#[test]
fn scroll_offsets_are_opt_in() {
    let report = run(&carousel(), &script()).unwrap();
    assert!(
        !report
            .events
            .iter()
            .any(|e| matches!(e.event, CarouselEvent::ScrollOffset { .. }))
    );

    let mut s = script();
    s.record_offsets = true;
    let report = run(&carousel(), &s).unwrap();
    assert!(
        report
            .events
            .iter()
            .any(|e| matches!(e.event, CarouselEvent::ScrollOffset { .. }))
    );
}

#[test]
fn back_navigation_moves_the_carousel() {
    let s = script_from(
        r#"[ { "at_ms": 0, "op": "drag", "delta": 1440, "duration_ms": 160 },
             { "at_ms": 1200, "op": "route", "param": "intro" } ]"#,
    );
    let report = run(&carousel(), &s).unwrap();
    assert_eq!(report.routes_pushed.len(), 1);
    assert_eq!(report.routes_pushed[0].route, "lab");
    assert_eq!(report.stabilized_index, Some(0));
    assert_eq!(report.layer("front").unwrap().offset, 0.0);
}

#[test]
fn teardown_stops_everything() {
    let s = script_from(
        r#"[ { "at_ms": 0, "op": "scroll_to_slide", "index": 2 },
             { "at_ms": 100, "op": "teardown" },
             { "at_ms": 200, "op": "drag", "delta": 500 } ]"#,
    );
    let report = run(&carousel(), &s).unwrap();
    assert!(!report.mounted);
    assert!(report.stable().is_empty());
    assert!(report.routes_pushed.is_empty());
    assert!(report.layer("front").unwrap().slides.is_empty());
}

#[test]
fn resize_is_applied_mid_run() {
    let s = script_from(r#"[ { "at_ms": 50, "op": "resize", "width": 720, "height": 400 } ]"#);
    let report = run(&carousel(), &s).unwrap();
    let front = report.layer("front").unwrap();
    let first = front.slides.iter().find(|p| p.index == 0).unwrap();
    assert_eq!(first.screen_x, 0.0);
}
