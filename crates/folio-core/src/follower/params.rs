/// How the follower's orientation approaches its target yaw each step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum YawBlend {
    /// Fixed slerp fraction per update call. Frame-rate dependent.
    PerStep(f32),
    /// `1 - exp(-rate * dt)` per update call.
    TimeNormalized { rate: f32 },
}

impl YawBlend {
    pub fn fraction(self, dt: f32) -> f32 {
        match self {
            YawBlend::PerStep(f) => f.clamp(0.0, 1.0),
            YawBlend::TimeNormalized { rate } => 1.0 - (-rate.max(0.0) * dt).exp(),
        }
    }
}

/// Tunables for the tethered follower.
#[derive(Clone, Debug, PartialEq)]
pub struct FollowerParams {
    // Anchor follow spring (damping is always critical: 2√k)
    pub follow_stiffness: f32,

    // Mass spring/damping + drag
    pub spring: f32,
    pub damping: f32,
    pub air_drag: f32,
    pub gravity: f32,

    // Tether length
    pub min_len: f32,
    pub max_len: f32,
    pub base_len: f32,
    pub idle_return_rate: f32,
    pub len_per_px: f32,
    pub len_stiffness: f32,
    pub len_damping: f32,
    pub extend_rate_gain: f32,
    pub retract_rate_gain: f32,

    // Activity detection (px/s)
    pub speed_smoothing: f32,
    pub active_speed_px: f32,
    pub idle_grace: f32,

    // Soft rope constraint
    pub constraint_gain: f32,
    pub constraint_vel_damp: f32,

    // Idle hover
    pub hover_side_amp: f32,
    pub hover_side_hz: f32,
    pub hover_bob_amp: f32,
    pub hover_bob_hz: f32,
    pub hover_noise_amp: f32,
    pub hover_retarget_sec: f32,
    pub hover_noise_damp: f32,

    // Yaw
    pub yaw_blend: YawBlend,
    pub yaw_offset_deg: f32,
    pub edge_yaw_max_deg: f32,
    pub edge_start: f32,
    pub edge_end: f32,
}

impl Default for FollowerParams {
    fn default() -> Self {
        Self {
            follow_stiffness: 18.0,
            spring: 26.0,
            damping: 3.4,
            air_drag: 0.6,
            gravity: 9.8 * 0.25,
            min_len: 0.25,
            max_len: 2.0,
            base_len: 0.6,
            idle_return_rate: 0.9,
            len_per_px: 0.0025,
            len_stiffness: 30.0,
            len_damping: 2.0 * 30f32.sqrt(),
            extend_rate_gain: 1.2,
            retract_rate_gain: 1.6,
            speed_smoothing: 0.25,
            active_speed_px: 40.0,
            idle_grace: 0.18,
            constraint_gain: 0.35,
            constraint_vel_damp: 0.6,
            hover_side_amp: 0.9,
            hover_side_hz: 9.0,
            hover_bob_amp: 0.12,
            hover_bob_hz: 6.0,
            hover_noise_amp: 0.15,
            hover_retarget_sec: 0.22,
            hover_noise_damp: 6.0,
            yaw_blend: YawBlend::PerStep(0.28),
            yaw_offset_deg: 0.0,
            edge_yaw_max_deg: 12.0,
            edge_start: 0.55,
            edge_end: 0.95,
        }
    }
}

impl FollowerParams {
    /// Critical damping for the anchor spring.
    pub fn follow_damping(&self) -> f32 {
        2.0 * self.follow_stiffness.max(1e-6).sqrt()
    }

    pub fn clamp_len(&self, len: f32) -> f32 {
        len.clamp(self.min_len, self.max_len)
    }
}
