//! Tethered cursor follower.
//!
//! An anchor tracks the pointer on a camera-parallel plane under a critically
//! damped spring. A mass hangs from the anchor on a tether whose length grows
//! with pointer travel and relaxes back when the pointer rests. While idle the
//! mass hovers with procedural sway. Motion is re-planarized every step so it
//! reads as 2D from the viewer.

mod hover;
mod params;

pub use hover::Hover;
pub use params::{FollowerParams, YawBlend};

use crate::camera::{client_to_ndc, Camera, CameraBasis};
use crate::constants::FOLLOWER_MAX_DT;
use crate::geometry::{smoothstep01, Aabb, Plane};
use crate::visual::FollowerVisual;
use glam::{Quat, Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activity {
    Active,
    Idle,
}

/// Transform handed to the renderer each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FollowerTransform {
    /// Anchor in world space.
    pub anchor: Vec3,
    /// Mass position relative to the anchor.
    pub offset: Vec3,
    pub rotation: Quat,
}

impl FollowerTransform {
    pub fn world_position(&self) -> Vec3 {
        self.anchor + self.offset
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Ground {
    y: f32,
    eps: f32,
}

pub struct Follower {
    params: FollowerParams,
    basis: CameraBasis,

    // Pointer (client pixels + NDC)
    viewport: Vec2,
    pointer_ndc: Vec2,
    px_curr: Vec2,
    px_prev: Vec2,
    px_speed: f32,
    travel_px: f32,

    last_active: bool,
    idle_timer: f32,

    anchor_pos: Vec3,
    anchor_vel: Vec3,
    mass_pos: Vec3,
    mass_vel: Vec3,

    rope_len: f32,
    rope_target: f32,
    len_vel: f32,

    hover: Hover,
    orientation: Quat,

    ground: Option<Ground>,
    forward_limit: Option<f32>,

    visual: FollowerVisual,
}

impl Follower {
    pub fn new(params: FollowerParams, camera: &Camera, viewport: Vec2, seed: u64) -> Self {
        let basis = camera.basis();
        let base = params.clamp_len(params.base_len);
        let hover = Hover::new(&params, seed);
        let center = viewport * 0.5;
        Self {
            params,
            basis,
            viewport,
            pointer_ndc: Vec2::ZERO,
            px_curr: center,
            px_prev: center,
            px_speed: 0.0,
            travel_px: 0.0,
            last_active: false,
            idle_timer: 0.0,
            anchor_pos: Vec3::ZERO,
            anchor_vel: Vec3::ZERO,
            mass_pos: -basis.up * base,
            mass_vel: Vec3::ZERO,
            rope_len: base,
            rope_target: base,
            len_vel: 0.0,
            hover,
            orientation: Quat::IDENTITY,
            ground: None,
            forward_limit: None,
            visual: FollowerVisual::new(),
        }
    }

    // ---------------- Pointer ----------------

    /// Record a pointer move in window client pixels.
    pub fn on_pointer_move(&mut self, client_px: Vec2, viewport: Vec2) {
        if !client_px.is_finite() {
            return;
        }
        self.viewport = viewport;
        self.pointer_ndc = client_to_ndc(client_px, viewport);
        self.px_curr = client_px;
    }

    pub fn pointer_ndc(&self) -> Vec2 {
        self.pointer_ndc
    }

    // ---------------- Knobs ----------------

    pub fn params(&self) -> &FollowerParams {
        &self.params
    }

    pub fn set_base_length(&mut self, len: f32) {
        self.params.base_len = self.params.clamp_len(len);
    }

    pub fn set_idle_return_rate(&mut self, rate: f32) {
        self.params.idle_return_rate = rate.max(0.0);
    }

    pub fn set_rope_limits(&mut self, min_len: f32, max_len: f32) {
        let p = &mut self.params;
        p.min_len = min_len.min(max_len).max(0.01);
        p.max_len = max_len.max(p.min_len + 0.01);
        p.base_len = p.clamp_len(p.base_len);
        self.rope_len = self.params.clamp_len(self.rope_len);
        self.rope_target = self.params.clamp_len(self.rope_target);
    }

    pub fn set_follow_stiffness(&mut self, k: f32) {
        self.params.follow_stiffness = k;
    }

    pub fn set_spring(&mut self, k: f32) {
        self.params.spring = k;
    }

    pub fn set_damping(&mut self, d: f32) {
        self.params.damping = d;
    }

    pub fn set_air_drag(&mut self, drag: f32) {
        self.params.air_drag = drag.max(0.0);
    }

    pub fn set_gravity(&mut self, g: f32) {
        self.params.gravity = g;
    }

    pub fn set_pixel_to_world(&mut self, len_per_px: f32) {
        self.params.len_per_px = len_per_px.max(0.0);
    }

    pub fn set_length_rate_gains(&mut self, extend: f32, retract: f32) {
        self.params.extend_rate_gain = extend;
        self.params.retract_rate_gain = retract;
    }

    pub fn set_length_dynamics(&mut self, k: f32, damping: Option<f32>) {
        self.params.len_stiffness = k;
        self.params.len_damping = damping.unwrap_or_else(|| 2.0 * k.max(1e-6).sqrt());
    }

    pub fn set_constraint(&mut self, hardness: f32, vel_damp: Option<f32>) {
        self.params.constraint_gain = hardness.clamp(0.0, 1.0);
        if let Some(v) = vel_damp {
            self.params.constraint_vel_damp = v;
        }
    }

    pub fn set_yaw_smoothing(&mut self, fraction: f32) {
        self.params.yaw_blend = YawBlend::PerStep(fraction.clamp(0.0, 1.0));
    }

    pub fn set_yaw_blend(&mut self, blend: YawBlend) {
        self.params.yaw_blend = blend;
    }

    pub fn set_yaw_offset(&mut self, deg: f32) {
        self.params.yaw_offset_deg = deg;
    }

    pub fn set_edge_yaw(&mut self, max_deg: f32, start_ndc: f32, end_ndc: f32) {
        let p = &mut self.params;
        p.edge_yaw_max_deg = max_deg;
        p.edge_start = start_ndc.min(end_ndc - 1e-3).max(0.0);
        p.edge_end = end_ndc.max(p.edge_start + 1e-3).min(1.0);
    }

    // ---------------- Constraints ----------------

    /// Keep the mass at or above this absolute world height.
    pub fn set_ground_y(&mut self, y: f32, eps: f32) {
        self.ground = Some(Ground { y, eps: eps.max(0.0) });
    }

    pub fn clear_ground(&mut self) {
        self.ground = None;
    }

    pub fn ground_y(&self) -> Option<f32> {
        self.ground.map(|g| g.y)
    }

    /// Ground at the bottom of `bounds` plus `offset`; also lifts the anchor
    /// if it sits below that.
    pub fn set_ground_from_bounds(&mut self, bounds: Aabb, offset: f32) {
        let bounds = match bounds.validated() {
            Ok(b) => b,
            Err(e) => {
                log::warn!("[follower] ground from bounds skipped: {}", e);
                return;
            }
        };
        let y = bounds.min.y + offset;
        self.set_ground_y(y, 1e-4);
        if self.anchor_pos.y < y {
            self.anchor_pos.y = y;
        }
    }

    /// Maximum distance of the mass in front of the anchor along the view
    /// direction. `None` removes the limit; negative values clamp to 0.
    pub fn set_forward_limit(&mut self, max_dist: Option<f32>) {
        self.forward_limit = max_dist.map(|d| d.max(0.0));
    }

    pub fn forward_limit(&self) -> Option<f32> {
        self.forward_limit
    }

    // ---------------- Rope ----------------

    pub fn rope_length(&self) -> f32 {
        self.rope_len
    }

    pub fn rope_target(&self) -> f32 {
        self.rope_target
    }

    fn travel_for_length(&self, len: f32) -> f32 {
        if self.params.len_per_px > 0.0 {
            ((len - self.params.base_len) / self.params.len_per_px).max(0.0)
        } else {
            0.0
        }
    }

    pub fn set_rope_target(&mut self, len: f32) {
        let l = self.params.clamp_len(len);
        self.rope_target = l;
        self.travel_px = self.travel_for_length(l);
    }

    pub fn set_rope_length_immediate(&mut self, len: f32) {
        let l = self.params.clamp_len(len);
        self.rope_target = l;
        self.rope_len = l;
        self.len_vel = 0.0;
        self.travel_px = self.travel_for_length(l);
    }

    pub fn nudge_rope_length(&mut self, delta: f32, immediate: bool) {
        let l = self.params.clamp_len(self.rope_len + delta);
        if immediate {
            self.set_rope_length_immediate(l);
        } else {
            self.set_rope_target(l);
        }
    }

    // ---------------- Placement ----------------

    /// Move the anchor; with `reset_rope` the mass is re-hung straight below
    /// it and all velocities are cleared.
    pub fn set_anchor(&mut self, camera: &Camera, pos: Vec3, reset_rope: bool) {
        self.anchor_pos = pos;
        if reset_rope {
            self.basis = camera.basis();
            self.anchor_vel = Vec3::ZERO;
            self.mass_vel = Vec3::ZERO;
            self.mass_pos = pos - self.basis.up * self.rope_len;
        }
    }

    /// Teleport the mass (world space) with the given velocity.
    pub fn place_mass(&mut self, pos: Vec3, vel: Vec3) {
        self.mass_pos = pos;
        self.mass_vel = vel;
    }

    pub fn anchor_position(&self) -> Vec3 {
        self.anchor_pos
    }

    pub fn mass_position(&self) -> Vec3 {
        self.mass_pos
    }

    pub fn mass_velocity(&self) -> Vec3 {
        self.mass_vel
    }

    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    // ---------------- Activity ----------------

    pub fn activity(&self) -> Activity {
        if self.idle_timer >= self.params.idle_grace {
            Activity::Idle
        } else {
            Activity::Active
        }
    }

    pub fn pixel_speed(&self) -> f32 {
        self.px_speed
    }

    pub fn travel_px(&self) -> f32 {
        self.travel_px
    }

    // ---------------- Visual ----------------

    pub fn visual(&self) -> &FollowerVisual {
        &self.visual
    }

    pub fn visual_mut(&mut self) -> &mut FollowerVisual {
        &mut self.visual
    }

    pub fn transform(&self) -> FollowerTransform {
        FollowerTransform {
            anchor: self.anchor_pos,
            offset: self.mass_pos - self.anchor_pos,
            rotation: self.orientation,
        }
    }

    // ---------------- Per-frame update ----------------

    pub fn update(&mut self, dt: f32, camera: &Camera) -> FollowerTransform {
        if !(dt > 0.0) {
            return self.transform();
        }
        let dt = dt.min(FOLLOWER_MAX_DT);

        self.basis = camera.basis();
        let a = self.project_pointer(camera);

        let speed_active = self.step_activity(dt);
        let idle = self.idle_timer >= self.params.idle_grace;

        self.step_anchor(a, dt);
        self.step_rope(speed_active, idle, dt);
        self.step_mass(idle, dt);
        self.apply_hard_constraints();
        self.step_yaw(camera, dt);

        self.visual.advance(dt);
        self.px_prev = self.px_curr;
        self.last_active = speed_active;
        self.transform()
    }

    /// Pointer ray against the camera-parallel plane through the anchor.
    fn project_pointer(&self, camera: &Camera) -> Vec3 {
        let plane = Plane::from_normal_and_point(self.basis.forward, self.anchor_pos);
        match camera.ray_from_ndc(self.pointer_ndc).intersect_plane(&plane) {
            Ok(p) if p.is_finite() => p,
            _ => self.anchor_pos,
        }
    }

    fn step_activity(&mut self, dt: f32) -> bool {
        let px_dist = self.px_curr.distance(self.px_prev);
        let inst_speed = px_dist / dt.max(1e-6);
        self.px_speed += (inst_speed - self.px_speed) * self.params.speed_smoothing;
        let active = self.px_speed > self.params.active_speed_px;
        if active {
            if !self.last_active {
                self.travel_px = 0.0;
            }
            self.travel_px += px_dist;
            self.idle_timer = 0.0;
        } else {
            self.idle_timer += dt;
        }
        active
    }

    fn step_anchor(&mut self, a: Vec3, dt: f32) {
        let acc = (a - self.anchor_pos) * self.params.follow_stiffness
            - self.anchor_vel * self.params.follow_damping();
        self.anchor_vel += acc * dt;
        self.anchor_pos += self.anchor_vel * dt;
    }

    fn step_rope(&mut self, speed_active: bool, idle: bool, dt: f32) {
        let p = &self.params;
        if speed_active {
            self.rope_target = p.clamp_len(p.base_len + self.travel_px * p.len_per_px);
            let err = self.rope_target - self.rope_len;
            let acc = p.len_stiffness * err - p.len_damping * self.len_vel;
            let gain = if err >= 0.0 {
                p.extend_rate_gain
            } else {
                p.retract_rate_gain
            };
            let max_rate = (gain * p.len_per_px * self.px_speed).max(0.0);
            self.len_vel = (self.len_vel + acc * dt).clamp(-max_rate, max_rate);
        } else if idle {
            self.rope_target = p.base_len;
            let err = self.rope_target - self.rope_len;
            let acc = p.len_stiffness * err - p.len_damping * self.len_vel;
            let rate = p.idle_return_rate;
            self.len_vel = (self.len_vel + acc * dt).clamp(-rate, rate);
            self.travel_px = 0.0;
            self.hover.step_noise(&self.params, dt);
        }
        // Grace period coasts on the current rate
        self.rope_len = self.params.clamp_len(self.rope_len + self.len_vel * dt);
    }

    fn step_mass(&mut self, idle: bool, dt: f32) {
        let basis = self.basis;
        let p = &self.params;

        let mut rel = self.mass_pos - self.anchor_pos;
        let mut r_len = rel.length();
        if r_len < 1e-6 {
            rel = -basis.up;
            r_len = 1.0;
        }

        let dir = if idle {
            self.hover.step_direction(p, &basis, dt)
        } else {
            rel / r_len
        };
        let desired = dir * self.rope_len;

        let spring = (desired - rel) * p.spring;
        let damping = -(self.mass_vel - self.anchor_vel) * p.damping;
        let gravity = -basis.up * p.gravity;
        let drag = -self.mass_vel * p.air_drag;
        let acc = spring + damping + gravity + drag;

        self.mass_vel += acc * dt;
        self.mass_pos += self.mass_vel * dt;

        // Back onto the camera-parallel plane through the anchor
        let plane = Plane::from_normal_and_point(basis.forward, self.anchor_pos);
        self.mass_pos = plane.project_point(self.mass_pos);

        // Soft rope: pull part of the way to the exact length
        let r = self.mass_pos - self.anchor_pos;
        let r_now = r.length();
        if r_now > 1e-6 {
            let r_hat = r / r_now;
            let diff = r_now - self.rope_len;
            self.mass_pos += r_hat * (-diff * p.constraint_gain);

            let v_rad = self.mass_vel.dot(r_hat);
            self.mass_vel -= r_hat * (v_rad * p.constraint_vel_damp);
            let v_off = basis.forward.dot(self.mass_vel);
            self.mass_vel -= basis.forward * v_off;
        } else {
            self.mass_pos = self.anchor_pos - basis.up * self.rope_len;
        }
    }

    fn apply_hard_constraints(&mut self) {
        if let Some(limit) = self.forward_limit {
            let (offset, vel) = clamp_forward(
                self.mass_pos - self.anchor_pos,
                self.mass_vel,
                self.basis.forward,
                limit,
            );
            self.mass_pos = self.anchor_pos + offset;
            self.mass_vel = vel;
        }
        if let Some(g) = self.ground {
            let (pos, vel) = clamp_ground(self.mass_pos, self.mass_vel, g.y, g.eps);
            self.mass_pos = pos;
            self.mass_vel = vel;
        }
    }

    fn step_yaw(&mut self, camera: &Camera, dt: f32) {
        let p = &self.params;
        let fwd = self.basis.forward;
        let cam_yaw = fwd.x.atan2(fwd.z) + p.yaw_offset_deg.to_radians();

        let ndc = camera.world_to_ndc(self.mass_pos);
        let inward = edge_inward_yaw(ndc.x, p.edge_start, p.edge_end, p.edge_yaw_max_deg);

        let target = Quat::from_rotation_y(cam_yaw + inward);
        self.orientation = self.orientation.slerp(target, p.yaw_blend.fraction(dt));
    }
}

/// Limit the forward component of `offset` to `limit`, removing any forward
/// velocity when clamped.
pub fn clamp_forward(offset: Vec3, vel: Vec3, forward: Vec3, limit: f32) -> (Vec3, Vec3) {
    let s = offset.dot(forward);
    if s <= limit {
        return (offset, vel);
    }
    let offset = offset - forward * (s - limit);
    let v_f = vel.dot(forward);
    let vel = if v_f > 0.0 { vel - forward * v_f } else { vel };
    (offset, vel)
}

/// Floor `pos.y` at `ground_y`, killing downward velocity on impact.
pub fn clamp_ground(mut pos: Vec3, mut vel: Vec3, ground_y: f32, eps: f32) -> (Vec3, Vec3) {
    if pos.y < ground_y - eps {
        pos.y = ground_y;
        if vel.y < 0.0 {
            vel.y = 0.0;
        }
    }
    (pos, vel)
}

/// Extra yaw (radians) turning the follower back toward screen centre as it
/// nears the left/right edge.
pub fn edge_inward_yaw(ndc_x: f32, edge_start: f32, edge_end: f32, max_deg: f32) -> f32 {
    let ax = ndc_x.abs();
    let t = if ax > edge_start {
        smoothstep01((ax - edge_start) / (edge_end - edge_start).max(1e-6))
    } else {
        0.0
    };
    let sign = if ndc_x > 0.0 {
        -1.0
    } else if ndc_x < 0.0 {
        1.0
    } else {
        0.0
    };
    max_deg.to_radians() * t * sign
}
