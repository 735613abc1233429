#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_matches_page_constants() {
    let config = Config::default();
    assert_eq!(config.scroll_threshold_px, 300.0);
    assert_eq!(config.nav_offset_px, 70.0);
    assert_eq!(config.reveal_threshold, 0.1);
    assert_eq!(config.reveal_root_margin, "0px 0px -100px 0px");
    assert_eq!(config.reveal_selector, ".project-card, .skill-badge");
    assert_eq!(config.card_selector, ".project-card");
    assert_eq!(config.anchor_selector, r##"a[href^="#"]"##);
    assert_eq!(config.max_tilt_deg, 5.0);
    assert_eq!(config.lift_px, 10.0);
    assert_eq!(config.theme_key, "theme");
}

#[test]
fn empty_json_yields_defaults() {
    assert_eq!(Config::from_json("").unwrap(), Config::default());
    assert_eq!(Config::from_json("   ").unwrap(), Config::default());
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = Config::from_json(r#"{ "navOffsetPx": 96, "themeKey": "folio-theme" }"#).unwrap();
    assert_eq!(config.nav_offset_px, 96.0);
    assert_eq!(config.theme_key, "folio-theme");
    assert_eq!(config.scroll_threshold_px, 300.0);
    assert_eq!(config.card_selector, ".project-card");
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = Config::from_json("{ navOffsetPx: }").unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn unknown_key_is_rejected() {
    let err = Config::from_json(r#"{ "navOfset": 10 }"#).unwrap_err();
    assert!(err.to_string().contains("navOfset"));
}

#[test]
fn wrong_type_is_rejected() {
    assert!(Config::from_json(r#"{ "liftPx": "ten" }"#).is_err());
}
