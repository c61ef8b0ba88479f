// Host-side tests for the tethered follower.

use folio_core::follower::{clamp_forward, clamp_ground, edge_inward_yaw};
use folio_core::{Activity, Camera, Follower, FollowerParams, YawBlend};
use glam::{Vec2, Vec3};

const DT: f32 = 1.0 / 60.0;
const VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);

fn follower(camera: &Camera) -> Follower {
    Follower::new(FollowerParams::default(), camera, VIEWPORT, 42)
}

fn steps(f: &mut Follower, camera: &Camera, n: usize) {
    for _ in 0..n {
        f.update(DT, camera);
    }
}

#[test]
fn rope_length_is_clamped_to_limits() {
    let camera = Camera::default();
    let mut f = follower(&camera);
    f.set_rope_length_immediate(5.0);
    assert_eq!(f.rope_length(), 2.0);
    f.set_rope_length_immediate(0.01);
    assert_eq!(f.rope_length(), 0.25);
    f.set_rope_target(9.0);
    assert_eq!(f.rope_target(), 2.0);
}

#[test]
fn rope_stays_in_limits_under_erratic_pointer() {
    let camera = Camera::default();
    let mut f = follower(&camera);
    for i in 0..600 {
        let t = i as f32 * 0.37;
        let px = Vec2::new(640.0 + 600.0 * t.sin(), 360.0 + 340.0 * (t * 1.7).cos());
        f.on_pointer_move(px, VIEWPORT);
        f.update(DT, &camera);
        let len = f.rope_length();
        assert!((0.25..=2.0).contains(&len), "rope {len} out of range");
    }
}

#[test]
fn still_pointer_turns_idle_after_grace() {
    let camera = Camera::default();
    let mut f = follower(&camera);
    steps(&mut f, &camera, 5);
    assert_eq!(f.activity(), Activity::Active);
    steps(&mut f, &camera, 6);
    assert_eq!(f.activity(), Activity::Idle);
}

#[test]
fn movement_marks_active_and_resets_idle() {
    let camera = Camera::default();
    let mut f = follower(&camera);
    steps(&mut f, &camera, 30);
    assert_eq!(f.activity(), Activity::Idle);
    f.on_pointer_move(Vec2::new(900.0, 360.0), VIEWPORT);
    f.update(DT, &camera);
    assert_eq!(f.activity(), Activity::Active);
    assert!(f.pixel_speed() > 40.0);
}

#[test]
fn speed_spike_after_idle_restarts_travel() {
    let camera = Camera::default();
    let mut f = follower(&camera);
    steps(&mut f, &camera, 30);
    f.set_rope_target(1.5);
    assert!((f.travel_px() - 360.0).abs() < 1e-2);

    // 200 px in one frame: smoothed speed jumps to 3000 px/s
    f.on_pointer_move(VIEWPORT * 0.5 + Vec2::new(200.0, 0.0), VIEWPORT);
    f.update(DT, &camera);
    assert!(f.pixel_speed() > 160.0);
    assert!((f.travel_px() - 200.0).abs() < 1e-3);
}

#[test]
fn travel_lengthens_rope_target() {
    let camera = Camera::default();
    let mut f = follower(&camera);
    for i in 0..30 {
        let px = Vec2::new(200.0 + 20.0 * i as f32, 360.0);
        f.on_pointer_move(px, VIEWPORT);
        f.update(DT, &camera);
    }
    assert!(f.rope_target() > 0.6);
    assert!(f.rope_length() > 0.6);
}

#[test]
fn idle_return_respects_rate_limit() {
    let camera = Camera::default();
    let mut f = follower(&camera);
    f.set_rope_length_immediate(1.5);
    let mut prev = f.rope_length();
    for _ in 0..300 {
        f.update(DT, &camera);
        let len = f.rope_length();
        assert!(prev - len <= 0.9 * DT + 1e-5);
        prev = len;
    }
    assert!((f.rope_length() - 0.6).abs() < 0.02);
}

#[test]
fn ground_clamp_lifts_mass_and_stops_fall() {
    let camera = Camera::default();
    let mut f = follower(&camera);
    f.set_anchor(&camera, Vec3::new(0.0, 1.6, 0.0), true);
    f.set_ground_y(2.0, 1e-4);
    f.place_mass(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, -3.0, 0.0));
    f.update(DT, &camera);
    assert!((f.mass_position().y - 2.0).abs() < 1e-6);
    assert!(f.mass_velocity().y >= 0.0);
}

#[test]
fn ground_helper_only_acts_below_tolerance() {
    let (p, v) = clamp_ground(Vec3::new(0.0, 1.99995, 0.0), Vec3::NEG_Y, 2.0, 1e-4);
    assert_eq!(p.y, 1.99995);
    assert_eq!(v, Vec3::NEG_Y);
    let (p, v) = clamp_ground(Vec3::new(0.0, 1.0, 0.0), Vec3::new(1.0, -2.0, 0.0), 2.0, 1e-4);
    assert_eq!(p.y, 2.0);
    assert_eq!(v, Vec3::new(1.0, 0.0, 0.0));
}

#[test]
fn forward_limit_clamps_offset_and_velocity() {
    let fwd = Vec3::Z;
    let (o, v) = clamp_forward(Vec3::new(0.3, -0.2, 0.8), Vec3::new(0.1, 0.0, 1.5), fwd, 0.5);
    assert!((o.z - 0.5).abs() < 1e-6);
    assert_eq!((o.x, o.y), (0.3, -0.2));
    assert!(v.z <= 0.0);
    assert_eq!(v.x, 0.1);

    // Receding mass keeps its velocity
    let (_, v) = clamp_forward(Vec3::new(0.0, 0.0, 0.8), Vec3::new(0.0, 0.0, -1.0), fwd, 0.5);
    assert_eq!(v.z, -1.0);
}

#[test]
fn forward_limit_holds_after_update() {
    let camera = Camera::default();
    let mut f = follower(&camera);
    let fwd = camera.basis().forward;
    f.set_anchor(&camera, Vec3::new(0.0, 1.5, 0.0), true);
    f.set_forward_limit(Some(0.5));
    let anchor = f.anchor_position();
    f.place_mass(anchor + fwd * 0.8 - camera.basis().up * 0.6, fwd * 2.0);
    f.update(DT, &camera);
    let offset = f.mass_position() - f.anchor_position();
    assert!(offset.dot(fwd) <= 0.5 + 1e-4);
    assert!(f.mass_velocity().dot(fwd) <= 1e-5);
}

#[test]
fn negative_forward_limit_clamps_to_zero() {
    let camera = Camera::default();
    let mut f = follower(&camera);
    f.set_forward_limit(Some(-1.0));
    assert_eq!(f.forward_limit(), Some(0.0));
    f.set_forward_limit(None);
    assert_eq!(f.forward_limit(), None);
}

#[test]
fn mass_stays_on_camera_parallel_plane() {
    let camera = Camera::default();
    let mut f = follower(&camera);
    let fwd = camera.basis().forward;
    for i in 0..240 {
        let t = i as f32 * 0.05;
        f.on_pointer_move(Vec2::new(640.0 + 300.0 * t.cos(), 360.0 + 200.0 * t.sin()), VIEWPORT);
        f.update(DT, &camera);
        let off = f.mass_position() - f.anchor_position();
        assert!(off.dot(fwd).abs() < 1e-3);
    }
}

#[test]
fn non_finite_pointer_is_ignored() {
    let camera = Camera::default();
    let mut f = follower(&camera);
    f.on_pointer_move(Vec2::new(f32::NAN, 10.0), VIEWPORT);
    steps(&mut f, &camera, 20);
    assert!(f.mass_position().is_finite());
    assert!(f.anchor_position().is_finite());
    assert!(f.pixel_speed().is_finite());
}

#[test]
fn zero_dt_changes_nothing() {
    let camera = Camera::default();
    let mut f = follower(&camera);
    let before = f.transform();
    let after = f.update(0.0, &camera);
    assert_eq!(before, after);
}

#[test]
fn same_seed_same_motion() {
    let camera = Camera::default();
    let mut a = follower(&camera);
    let mut b = follower(&camera);
    for _ in 0..120 {
        a.update(DT, &camera);
        b.update(DT, &camera);
    }
    assert_eq!(a.mass_position(), b.mass_position());
    assert_eq!(a.orientation(), b.orientation());
}

#[test]
fn edge_yaw_turns_inward() {
    assert_eq!(edge_inward_yaw(0.0, 0.55, 0.95, 12.0), 0.0);
    assert_eq!(edge_inward_yaw(0.5, 0.55, 0.95, 12.0), 0.0);
    let right = edge_inward_yaw(0.95, 0.55, 0.95, 12.0);
    let left = edge_inward_yaw(-0.95, 0.55, 0.95, 12.0);
    assert!((right + 12f32.to_radians()).abs() < 1e-6);
    assert!((left - 12f32.to_radians()).abs() < 1e-6);
    let mid = edge_inward_yaw(0.75, 0.55, 0.95, 12.0);
    assert!(mid < 0.0 && mid > right);
}

#[test]
fn yaw_blend_modes() {
    assert_eq!(YawBlend::PerStep(0.28).fraction(1.0 / 30.0), 0.28);
    assert_eq!(YawBlend::PerStep(0.28).fraction(1.0 / 144.0), 0.28);
    let t = YawBlend::TimeNormalized { rate: 10.0 };
    assert!(t.fraction(1.0 / 30.0) > t.fraction(1.0 / 144.0));
    assert!((t.fraction(0.1) - (1.0 - (-1.0f32).exp())).abs() < 1e-6);
}

#[test]
fn length_dynamics_default_to_critical_damping() {
    let camera = Camera::default();
    let mut f = follower(&camera);
    f.set_length_dynamics(16.0, None);
    assert_eq!(f.params().len_damping, 8.0);
    f.set_length_dynamics(16.0, Some(3.0));
    assert_eq!(f.params().len_damping, 3.0);
}

#[test]
fn ground_from_bounds_lifts_anchor() {
    let camera = Camera::default();
    let mut f = follower(&camera);
    let bounds = folio_core::Aabb::new(Vec3::new(-1.0, 3.0, -1.0), Vec3::new(1.0, 5.0, 1.0));
    f.set_ground_from_bounds(bounds, 0.45);
    let ground = f.ground_y().unwrap_or(f32::NAN);
    assert!((ground - 3.45).abs() < 1e-6);
    assert!(f.anchor_position().y >= ground);
}
