//! Idle "hummingbird" micro-motion: a fast side-sway, a slower bob, and
//! low-frequency jitter retargeted at a fixed interval.

use super::params::FollowerParams;
use crate::camera::CameraBasis;
use crate::geometry::damp;
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

#[derive(Clone, Debug)]
pub struct Hover {
    side_phase: f32,
    bob_phase: f32,
    noise_timer: f32,
    side_noise: f32,
    side_noise_target: f32,
    bob_noise: f32,
    bob_noise_target: f32,
    rng: StdRng,
}

impl Hover {
    pub fn new(params: &FollowerParams, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let side_phase = rng.gen::<f32>() * TAU;
        let bob_phase = rng.gen::<f32>() * TAU;
        let mut hover = Self {
            side_phase,
            bob_phase,
            noise_timer: 0.0,
            side_noise: 0.0,
            side_noise_target: 0.0,
            bob_noise: 0.0,
            bob_noise_target: 0.0,
            rng,
        };
        hover.retarget(params);
        hover
    }

    fn retarget(&mut self, params: &FollowerParams) {
        self.side_noise_target = (self.rng.gen::<f32>() * 2.0 - 1.0) * params.hover_noise_amp;
        self.bob_noise_target = (self.rng.gen::<f32>() * 2.0 - 1.0) * params.hover_noise_amp * 0.7;
    }

    /// Advance the jitter; only called while idle.
    pub fn step_noise(&mut self, params: &FollowerParams, dt: f32) {
        self.noise_timer += dt;
        if self.noise_timer >= params.hover_retarget_sec {
            self.noise_timer = 0.0;
            self.retarget(params);
        }
        self.side_noise = damp(self.side_noise, self.side_noise_target, params.hover_noise_damp, dt);
        self.bob_noise = damp(self.bob_noise, self.bob_noise_target, params.hover_noise_damp, dt);
    }

    /// Advance the sway phases and return the unit direction the mass should
    /// hang along.
    pub fn step_direction(&mut self, params: &FollowerParams, basis: &CameraBasis, dt: f32) -> Vec3 {
        self.side_phase = (self.side_phase + params.hover_side_hz * dt * TAU) % TAU;
        self.bob_phase = (self.bob_phase + params.hover_bob_hz * dt * TAU) % TAU;

        let s = params.hover_side_amp * self.side_phase.sin() + self.side_noise;
        let b = params.hover_bob_amp * self.bob_phase.sin() + self.bob_noise;

        let down = -basis.up;
        let raw = down * (1.0 - b) + basis.right * s + basis.up * b;
        raw.try_normalize().unwrap_or(down)
    }

    pub fn noise(&self) -> (f32, f32) {
        (self.side_noise, self.bob_noise)
    }
}
