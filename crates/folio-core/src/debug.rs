//! Developer hooks: house placement nudges and a state snapshot.
//!
//! Front-ends expose these explicitly (a `wasm_bindgen` handle on the web,
//! key bindings natively) instead of publishing scene objects globally.

use crate::constants::{DEBUG_GROW, DEBUG_SHRINK, DEBUG_YAW_STEP_DEG};
use crate::follower::Activity;
use crate::geometry::Aabb;
use crate::scene::Portfolio;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DebugCommand {
    RotateLeft,
    RotateRight,
    Grow,
    Shrink,
}

impl DebugCommand {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "rotL" | "rotate_left" => Some(Self::RotateLeft),
            "rotR" | "rotate_right" => Some(Self::RotateRight),
            "grow" => Some(Self::Grow),
            "shrink" => Some(Self::Shrink),
            _ => None,
        }
    }

    /// Adjust the house and refit the waypoints. `None` before a house is
    /// installed.
    pub fn apply(self, scene: &mut Portfolio) -> Option<Aabb> {
        let bounds = scene.modify_house(|h| match self {
            Self::RotateLeft => h.rotate_deg(-DEBUG_YAW_STEP_DEG),
            Self::RotateRight => h.rotate_deg(DEBUG_YAW_STEP_DEG),
            Self::Grow => h.scale_by(DEBUG_GROW),
            Self::Shrink => h.scale_by(DEBUG_SHRINK),
        });
        match bounds {
            Some(b) => log::info!("[debug] {:?}: house now {:?}..{:?}", self, b.min, b.max),
            None => log::warn!("[debug] {:?} ignored: no house loaded", self),
        }
        bounds
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct DebugSnapshot {
    pub section: &'static str,
    pub tweening: bool,
    pub camera: [f32; 3],
    pub look_target: [f32; 3],
    pub controls_enabled: bool,
    pub anchor: [f32; 3],
    pub mass: [f32; 3],
    pub rope_length: f32,
    pub rope_target: f32,
    pub idle: bool,
    pub pixel_speed: f32,
    pub house_yaw_deg: Option<f32>,
    pub house_scale: Option<f32>,
}

impl DebugSnapshot {
    pub fn capture(scene: &Portfolio) -> Self {
        let f = &scene.follower;
        Self {
            section: scene.nav.current().label(),
            tweening: scene.nav.is_tweening(),
            camera: scene.rig.position().to_array(),
            look_target: scene.rig.look_target().to_array(),
            controls_enabled: scene.rig.controls.enabled,
            anchor: f.anchor_position().to_array(),
            mass: f.mass_position().to_array(),
            rope_length: f.rope_length(),
            rope_target: f.rope_target(),
            idle: f.activity() == Activity::Idle,
            pixel_speed: f.pixel_speed(),
            house_yaw_deg: scene.house().map(|h| h.yaw_deg()),
            house_scale: scene.house().map(|h| h.scale()),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
