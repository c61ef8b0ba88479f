use crate::constants::{ROTATE_SPEED, WHEEL_NOTCH_PX, ZOOM_STEP};
use glam::Vec2;
use std::f32::consts::TAU;

#[derive(Default, Clone, Copy)]
pub struct DragState {
    pub active: bool,
    pub pointer_id: i32,
    pub last: Vec2,
}

impl DragState {
    pub fn begin(&mut self, pointer_id: i32, at: Vec2) {
        self.active = true;
        self.pointer_id = pointer_id;
        self.last = at;
    }

    /// Movement since the previous sample, or `None` if this pointer is not
    /// dragging.
    pub fn step(&mut self, pointer_id: i32, at: Vec2) -> Option<Vec2> {
        if !self.active || self.pointer_id != pointer_id {
            return None;
        }
        let delta = at - self.last;
        self.last = at;
        Some(delta)
    }

    pub fn end(&mut self, pointer_id: i32) {
        if self.pointer_id == pointer_id {
            self.active = false;
        }
    }
}

/// Orbit deltas (azimuth, polar) in radians for a drag of `delta` CSS pixels.
/// Dragging right orbits the camera left around the pivot, like a turntable.
#[inline]
pub fn drag_to_orbit(delta: Vec2, viewport_h: f32) -> (f32, f32) {
    let h = viewport_h.max(1.0);
    (
        -TAU * delta.x / h * ROTATE_SPEED,
        -TAU * delta.y / h * ROTATE_SPEED,
    )
}

/// Distance scale for a wheel event; positive `delta_y` zooms out.
#[inline]
pub fn wheel_to_zoom(delta_y: f32) -> f32 {
    if !delta_y.is_finite() || delta_y == 0.0 {
        return 1.0;
    }
    ZOOM_STEP.powf(-delta_y / WHEEL_NOTCH_PX)
}

/// CSS transform placing a DOM panel's centre at `client` with `scale`,
/// tilted by the panel's world `pitch` (radians). CSS rotateX turns the
/// top edge away for positive angles, the opposite of a world X rotation.
pub fn panel_css_transform(client: Vec2, scale: f32, pitch: f32) -> String {
    // + 0.0 folds -0.0 so an untilted panel prints 0.0deg
    let tilt_deg = -pitch.to_degrees() + 0.0;
    format!(
        "translate(-50%, -50%) translate({:.1}px, {:.1}px) rotateX({:.1}deg) scale({:.3})",
        client.x, client.y, tilt_deg, scale
    )
}

/// Apparent scale of a world-space panel: world size of one DOM pixel over
/// world size of one screen pixel at the panel's depth.
#[inline]
pub fn panel_screen_scale(world_per_dom_px: f32, depth: f32, fovy_radians: f32, viewport_h: f32) -> f32 {
    if depth <= 1e-4 {
        return 0.0;
    }
    let world_per_screen_px = 2.0 * depth * (fovy_radians / 2.0).tan() / viewport_h.max(1.0);
    world_per_dom_px / world_per_screen_px
}
