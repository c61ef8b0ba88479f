// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn drag_tracks_only_its_pointer() {
    let mut drag = DragState::default();
    assert_eq!(drag.step(1, Vec2::new(5.0, 5.0)), None);

    drag.begin(1, Vec2::new(10.0, 10.0));
    assert_eq!(drag.step(2, Vec2::new(40.0, 10.0)), None);
    assert_eq!(drag.step(1, Vec2::new(14.0, 7.0)), Some(Vec2::new(4.0, -3.0)));
    assert_eq!(drag.step(1, Vec2::new(15.0, 7.0)), Some(Vec2::new(1.0, 0.0)));

    drag.end(2);
    assert!(drag.active);
    drag.end(1);
    assert!(!drag.active);
    assert_eq!(drag.step(1, Vec2::new(20.0, 7.0)), None);
}

#[test]
fn full_height_drag_is_one_turn() {
    let (d_az, d_polar) = drag_to_orbit(Vec2::new(600.0, 0.0), 600.0);
    assert!((d_az.abs() - std::f32::consts::TAU).abs() < 1e-4);
    assert_eq!(d_polar, 0.0);

    let (_, d_polar) = drag_to_orbit(Vec2::new(0.0, 150.0), 600.0);
    assert!((d_polar.abs() - std::f32::consts::FRAC_PI_2).abs() < 1e-4);
}

#[test]
fn wheel_zoom_direction() {
    assert_eq!(wheel_to_zoom(0.0), 1.0);
    assert_eq!(wheel_to_zoom(f32::NAN), 1.0);
    // Scrolling down moves away
    assert!(wheel_to_zoom(100.0) > 1.0);
    assert!(wheel_to_zoom(-100.0) < 1.0);
    assert!((wheel_to_zoom(-100.0) - 0.95).abs() < 1e-6);
}

#[test]
fn panel_scale_matches_screen_pixels() {
    // 40 deg fov at depth d: one screen pixel spans 2 d tan(20 deg) / h
    let fovy = 40f32.to_radians();
    let per_px = 2.0 * 3.0 * (fovy / 2.0).tan() / 720.0;
    let s = panel_screen_scale(per_px, 3.0, fovy, 720.0);
    assert!((s - 1.0).abs() < 1e-5);
    // Twice as far appears half as large
    let s_far = panel_screen_scale(per_px, 6.0, fovy, 720.0);
    assert!((s_far - 0.5).abs() < 1e-5);
    assert_eq!(panel_screen_scale(per_px, 0.0, fovy, 720.0), 0.0);
}

#[test]
fn panel_transform_is_centred() {
    let css = panel_css_transform(Vec2::new(100.0, 50.0), 0.5, 0.0);
    assert_eq!(
        css,
        "translate(-50%, -50%) translate(100.0px, 50.0px) rotateX(0.0deg) scale(0.500)"
    );
}

#[test]
fn pitched_panel_tilts_top_edge_away() {
    let css = panel_css_transform(Vec2::new(10.0, 20.0), 1.0, (-12f32).to_radians());
    assert_eq!(
        css,
        "translate(-50%, -50%) translate(10.0px, 20.0px) rotateX(12.0deg) scale(1.000)"
    );
}
