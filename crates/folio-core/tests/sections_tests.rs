// Host-side tests for the section navigator.

use folio_core::{
    ease_in_out_cubic, Aabb, CameraRig, FitOptions, SectionId, SectionNavigator,
};
use glam::{Vec2, Vec3};

const DT: f32 = 1.0 / 60.0;

fn horizontal_offset(rig: &CameraRig) -> Vec2 {
    let d = rig.position() - rig.look_target();
    Vec2::new(d.x, d.z)
}

fn run(nav: &mut SectionNavigator, rig: &mut CameraRig, seconds: f32) {
    let steps = (seconds / DT).round() as usize;
    for _ in 0..steps {
        nav.update(rig, DT);
    }
}

#[test]
fn ease_hits_boundaries_and_midpoint() {
    assert_eq!(ease_in_out_cubic(0.0), 0.0);
    assert_eq!(ease_in_out_cubic(1.0), 1.0);
    assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
    let mut prev = 0.0;
    for i in 1..=100 {
        let e = ease_in_out_cubic(i as f32 / 100.0);
        assert!(e >= prev);
        prev = e;
    }
}

#[test]
fn go_to_skills_completes_after_duration() {
    let mut rig = CameraRig::default();
    let mut nav = SectionNavigator::new();
    let offset0 = horizontal_offset(&rig);
    let target0 = rig.look_target();

    assert!(nav.go_to(&mut rig, SectionId::Skills, 1.2));
    assert!(!rig.controls.enabled);
    assert!(nav.is_tweening());

    run(&mut nav, &mut rig, 1.2);

    assert!(!nav.is_tweening());
    assert!(rig.controls.enabled);
    assert_eq!(nav.current(), SectionId::Skills);
    let skills_y = nav.waypoint(SectionId::Skills).map(|w| w.look_target.y);
    assert_eq!(skills_y, Some(4.5));
    assert!((rig.look_target().y - 4.5).abs() < 1e-4);
    // Elevator move: horizontal framing is unchanged
    assert!((rig.look_target().x - target0.x).abs() < 1e-4);
    assert!((rig.look_target().z - target0.z).abs() < 1e-4);
    assert!((horizontal_offset(&rig) - offset0).length() < 1e-4);
}

#[test]
fn vertical_only_keeps_horizontal_offset_every_frame() {
    let mut rig = CameraRig::default();
    let mut nav = SectionNavigator::new();
    let offset0 = horizontal_offset(&rig);
    nav.go_to(&mut rig, SectionId::Projects, 1.2);
    for _ in 0..80 {
        nav.update(&mut rig, DT);
        assert!((horizontal_offset(&rig) - offset0).length() < 1e-4);
    }
}

#[test]
fn midpoint_of_tween_is_halfway() {
    let mut rig = CameraRig::default();
    let mut nav = SectionNavigator::new();
    let y0 = rig.look_target().y;
    nav.go_to(&mut rig, SectionId::Skills, 1.0);
    nav.update(&mut rig, 0.5);
    let expected = y0 + (4.5 - y0) * 0.5;
    assert!((rig.look_target().y - expected).abs() < 1e-4);
    assert!(nav.is_tweening());
}

#[test]
fn go_to_current_section_only_reenables_controls() {
    let mut rig = CameraRig::default();
    let mut nav = SectionNavigator::new();
    rig.controls.enabled = false;
    let pos = rig.position();
    assert!(!nav.go_to(&mut rig, SectionId::Hero, 1.2));
    assert!(rig.controls.enabled);
    assert!(!nav.is_tweening());
    assert_eq!(rig.position(), pos);
}

#[test]
fn retarget_mid_tween_starts_from_current_pose() {
    let mut rig = CameraRig::default();
    let mut nav = SectionNavigator::new();
    nav.go_to(&mut rig, SectionId::Projects, 1.0);
    nav.update(&mut rig, 0.5);
    let mid_y = rig.look_target().y;
    assert!(nav.go_to(&mut rig, SectionId::Skills, 1.0));
    // First tiny step barely moves away from where the camera was
    nav.update(&mut rig, 1e-3);
    assert!((rig.look_target().y - mid_y).abs() < 1e-3);
    run(&mut nav, &mut rig, 1.0);
    assert!((rig.look_target().y - 4.5).abs() < 1e-4);
}

#[test]
fn unconfigured_section_is_a_no_op() {
    let mut rig = CameraRig::default();
    let mut nav = SectionNavigator::unconfigured();
    let pos = rig.position();
    assert!(!nav.go_to(&mut rig, SectionId::Skills, 1.2));
    assert!(!nav.is_tweening());
    assert!(rig.controls.enabled);
    assert_eq!(rig.position(), pos);
    assert_eq!(nav.current(), SectionId::Hero);

    nav.snap_to(&mut rig, SectionId::Projects);
    assert_eq!(rig.position(), pos);
    assert_eq!(nav.current(), SectionId::Hero);
}

#[test]
fn snap_cancels_tween_and_restores_controls() {
    let mut rig = CameraRig::default();
    let mut nav = SectionNavigator::new();
    nav.go_to(&mut rig, SectionId::Projects, 1.2);
    nav.update(&mut rig, 0.3);
    nav.snap_to(&mut rig, SectionId::Skills);
    assert!(!nav.is_tweening());
    assert!(rig.controls.enabled);
    assert!((rig.look_target().y - 4.5).abs() < 1e-5);
    assert_eq!(nav.current(), SectionId::Skills);
}

#[test]
fn free_mode_flies_to_exact_waypoint() {
    let mut rig = CameraRig::default();
    let mut nav = SectionNavigator::new();
    nav.set_vertical_only(false);
    nav.set_waypoint(SectionId::Skills, Vec3::new(1.0, 5.0, 2.0), Vec3::new(0.0, 4.0, 0.0));
    nav.go_to(&mut rig, SectionId::Skills, 0.5);
    run(&mut nav, &mut rig, 0.5);
    assert!((rig.position() - Vec3::new(1.0, 5.0, 2.0)).length() < 1e-4);
    assert!((rig.look_target() - Vec3::new(0.0, 4.0, 0.0)).length() < 1e-4);
}

#[test]
fn tiny_duration_is_floored() {
    let mut rig = CameraRig::default();
    let mut nav = SectionNavigator::new();
    nav.go_to(&mut rig, SectionId::Skills, 0.0);
    nav.update(&mut rig, 0.005);
    assert!(nav.is_tweening());
    nav.update(&mut rig, 0.005);
    assert!(!nav.is_tweening());
}

#[test]
fn configure_places_targets_at_height_fractions() {
    let rig = CameraRig::default();
    let mut nav = SectionNavigator::unconfigured();
    let bounds = Aabb::new(Vec3::new(-2.0, 0.0, -2.0), Vec3::new(2.0, 10.0, 2.0));
    nav.configure_from_bounds(&rig, bounds, FitOptions::default());

    let ys: Vec<f32> = SectionId::ALL
        .iter()
        .filter_map(|&id| nav.waypoint(id))
        .map(|w| w.look_target.y)
        .collect();
    assert_eq!(ys.len(), 3);
    assert!((ys[0] - 2.8).abs() < 1e-4);
    assert!((ys[1] - 5.0).abs() < 1e-4);
    assert!((ys[2] - 7.8).abs() < 1e-4);

    // Camera sits level with its target, along the current view direction
    let hero = nav.waypoint(SectionId::Hero).map(|w| w.position - w.look_target);
    let Some(d) = hero else {
        panic!("hero waypoint missing");
    };
    assert!(d.y.abs() < 1e-5);
    let cur = rig.position() - rig.look_target();
    let cur = Vec3::new(cur.x, 0.0, cur.z).normalize();
    assert!(d.normalize().dot(cur) > 0.9999);
}

#[test]
fn non_finite_bounds_keep_previous_waypoints() {
    let rig = CameraRig::default();
    let mut nav = SectionNavigator::new();
    let before = nav.waypoint(SectionId::Skills);
    let bad = Aabb::new(Vec3::new(f32::NAN, 0.0, 0.0), Vec3::ONE);
    nav.configure_from_bounds(&rig, bad, FitOptions::default());
    assert_eq!(nav.waypoint(SectionId::Skills), before);
}

#[test]
fn bigger_padding_backs_camera_off() {
    let rig = CameraRig::default();
    let bounds = Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0));
    let mut a = SectionNavigator::unconfigured();
    let mut b = SectionNavigator::unconfigured();
    a.configure_from_bounds(&rig, bounds, FitOptions::with_padding(1.0));
    b.configure_from_bounds(&rig, bounds, FitOptions::with_padding(1.5));
    let dist = |n: &SectionNavigator| {
        n.waypoint(SectionId::Skills)
            .map(|w| w.position.distance(w.look_target))
            .unwrap_or(0.0)
    };
    assert!((dist(&b) / dist(&a) - 1.5).abs() < 1e-4);
}

#[test]
fn bad_frame_steps_do_not_poison_the_tween() {
    let mut rig = CameraRig::default();
    let mut nav = SectionNavigator::new();
    assert!(nav.go_to(&mut rig, SectionId::Skills, 1.2));

    nav.update(&mut rig, f32::NAN);
    nav.update(&mut rig, f32::INFINITY);
    nav.update(&mut rig, -1.0);
    assert!(rig.position().is_finite());
    assert!(nav.is_tweening());

    for _ in 0..600 {
        nav.update(&mut rig, DT);
    }
    assert!(rig.position().is_finite());
    assert!(!nav.is_tweening());
    assert!(rig.controls.enabled);
    assert!((rig.look_target().y - 4.5).abs() < 1e-4);
}

#[test]
fn number_keys_map_to_sections() {
    assert_eq!(SectionId::from_digit_key("1"), Some(SectionId::Hero));
    assert_eq!(SectionId::from_digit_key("2"), Some(SectionId::Skills));
    assert_eq!(SectionId::from_digit_key("3"), Some(SectionId::Projects));
    assert_eq!(SectionId::from_digit_key("4"), None);
    assert_eq!(SectionId::from_digit_key("Digit1"), None);
    assert_eq!(SectionId::from_digit_key(""), None);
}
