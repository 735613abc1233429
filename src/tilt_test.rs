#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::{MAX_TILT_DEG, TILT_LIFT_PX, TILT_PERSPECTIVE_PX};

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn card() -> Rect {
    Rect::new(40.0, 120.0, 200.0, 100.0)
}

fn tilt_at(x: f64, y: f64) -> Tilt {
    tilt_for_pointer(card(), x, y, MAX_TILT_DEG, TILT_LIFT_PX)
}

// --- Rotation ---

#[test]
fn centre_has_no_rotation() {
    let tilt = tilt_at(140.0, 170.0);
    assert_eq!(tilt.rotate_x_deg, 0.0);
    assert_eq!(tilt.rotate_y_deg, 0.0);
    assert_eq!(tilt.lift_px, 10.0);
}

#[test]
fn top_left_corner_is_maximum_tilt() {
    let tilt = tilt_at(40.0, 120.0);
    assert!(approx_eq(tilt.rotate_x_deg, -5.0));
    assert!(approx_eq(tilt.rotate_y_deg, 5.0));
}

#[test]
fn bottom_right_corner_is_maximum_tilt() {
    let tilt = tilt_at(240.0, 220.0);
    assert!(approx_eq(tilt.rotate_x_deg, 5.0));
    assert!(approx_eq(tilt.rotate_y_deg, -5.0));
}

#[test]
fn top_right_corner_signs() {
    let tilt = tilt_at(240.0, 120.0);
    assert!(approx_eq(tilt.rotate_x_deg, -5.0));
    assert!(approx_eq(tilt.rotate_y_deg, -5.0));
}

#[test]
fn bottom_left_corner_signs() {
    let tilt = tilt_at(40.0, 220.0);
    assert!(approx_eq(tilt.rotate_x_deg, 5.0));
    assert!(approx_eq(tilt.rotate_y_deg, 5.0));
}

#[test]
fn quarter_offset_is_proportional() {
    let tilt = tilt_at(90.0, 145.0);
    assert!(approx_eq(tilt.rotate_x_deg, -2.5));
    assert!(approx_eq(tilt.rotate_y_deg, 2.5));
}

#[test]
fn vertical_offset_only_drives_rotate_x() {
    let tilt = tilt_at(140.0, 220.0);
    assert!(approx_eq(tilt.rotate_x_deg, 5.0));
    assert!(approx_eq(tilt.rotate_y_deg, 0.0));
}

#[test]
fn pointer_outside_rect_is_clamped() {
    let tilt = tilt_at(-500.0, 900.0);
    assert!(approx_eq(tilt.rotate_x_deg, 5.0));
    assert!(approx_eq(tilt.rotate_y_deg, 5.0));
}

#[test]
fn zero_sized_rect_has_no_rotation() {
    let tilt = tilt_for_pointer(Rect::new(10.0, 10.0, 0.0, 0.0), 10.0, 10.0, MAX_TILT_DEG, TILT_LIFT_PX);
    assert_eq!(tilt.rotate_x_deg, 0.0);
    assert_eq!(tilt.rotate_y_deg, 0.0);
    assert!(!tilt.rotate_x_deg.is_nan());
}

#[test]
fn rotation_never_exceeds_max() {
    for x in (0..=280).step_by(7) {
        for y in (100..=240).step_by(7) {
            let tilt = tilt_at(f64::from(x), f64::from(y));
            assert!(tilt.rotate_x_deg.abs() <= MAX_TILT_DEG + EPSILON);
            assert!(tilt.rotate_y_deg.abs() <= MAX_TILT_DEG + EPSILON);
        }
    }
}

// --- CSS ---

#[test]
fn centre_css_has_plain_zeros() {
    let css = tilt_at(140.0, 170.0).to_css(TILT_PERSPECTIVE_PX);
    assert_eq!(css, "perspective(1000px) rotateX(0deg) rotateY(0deg) translateY(-10px)");
}

#[test]
fn corner_css() {
    let css = tilt_at(40.0, 120.0).to_css(TILT_PERSPECTIVE_PX);
    assert_eq!(css, "perspective(1000px) rotateX(-5deg) rotateY(5deg) translateY(-10px)");
}

#[test]
fn neutral_css_resets_everything() {
    let css = Tilt::NEUTRAL.to_css(TILT_PERSPECTIVE_PX);
    assert_eq!(css, "perspective(1000px) rotateX(0deg) rotateY(0deg) translateY(0px)");
    assert!(!css.contains("-0"));
}
