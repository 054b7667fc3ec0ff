use super::*;

fn fixture() -> CarouselDef {
    serde_json::from_str(include_str!("../../data/carousel.json")).unwrap()
}

#[test]
fn fixture_validates_and_lowers() {
    let def = fixture();
    def.validate().unwrap();

    let layers = def.layer_defs();
    assert_eq!(layers.len(), 2);
    assert_eq!(layers[0].role, Role::Master);
    assert_eq!(layers[0].slide_count, 5);
    assert_eq!(layers[1].spacing, 900.0);
    assert_eq!(layers[1].align, Align::Center);

    let opts = def.opts();
    assert_eq!(opts.delays.imperative_ms, 120);
    assert_eq!(opts.navigation_path, NavigationPath::Direct);
}

#[test]
fn timing_block_is_optional() {
    let def: CarouselDef = serde_json::from_str(
        r#"{ "layers": [ { "id": "m", "role": "master", "spacing": 100, "slides": [1, 2] } ] }"#,
    )
    .unwrap();
    assert_eq!(def.timing, TimingDef::default());
    def.validate().unwrap();
    assert!(def.route_map().unwrap().is_none());
}

#[test]
fn unknown_fields_are_rejected() {
    let res: Result<CarouselDef, _> = serde_json::from_str(
        r#"{ "layers": [], "speed": 3 }"#,
    );
    assert!(res.is_err());
}

#[test]
fn route_count_must_match_master_slides() {
    let mut def = fixture();
    def.routes.pop();
    let err = def.validate().unwrap_err();
    assert!(err.to_string().contains("navigation error:"));
}

#[test]
fn layer_errors_surface_as_config_errors() {
    let mut def = fixture();
    def.layers[1].role = Role::Master;
    assert!(def.validate().is_err());

    let mut def = fixture();
    def.layers[0].slides.clear();
    assert!(def.validate().is_err());

    let mut def = fixture();
    def.layers.clear();
    assert!(def.validate().is_err());
}

#[test]
fn mount_builds_a_coordinator() {
    let c = fixture().mount().unwrap();
    assert_eq!(c.master().id(), "front");
    assert_eq!(c.slave("back").unwrap().multiplier(), 1.25);
}

#[test]
fn deck_keeps_content_opaque() {
    let def = fixture();
    let deck = def.layer("back").unwrap().deck();
    assert_eq!(deck.len(), 5);
    assert_eq!(deck[2].index, 2);
    assert_eq!(deck[2].content, &serde_json::json!("sky-2"));
}

#[test]
fn from_reader_reports_parse_errors() {
    let err = CarouselDef::from_reader("{ not json".as_bytes()).unwrap_err();
    assert!(err.to_string().contains("serialization error:"));
}
