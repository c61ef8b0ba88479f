use glam::Vec3;

// Shared scene/motion tuning constants used by both web and native frontends.

// Camera rig
pub const CAMERA_FOV_DEG: f32 = 40.0;
pub const CAMERA_NEAR: f32 = 0.05;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_START_POS: [f32; 3] = [4.0, 2.0, 6.0];
pub const CAMERA_START_TARGET: [f32; 3] = [0.0, 1.2, 0.0];

// Section transitions
pub const SECTION_TWEEN_SEC: f32 = 1.2;
pub const SECTION_TWEEN_MIN_SEC: f32 = 0.01;
pub const FIT_PADDING: f32 = 1.12;
pub const FIT_BOTTOM_FRAC: f32 = 0.28;
pub const FIT_MID_FRAC: f32 = 0.50;
pub const FIT_TOP_FRAC: f32 = 0.78;

// House placement
pub const HOUSE_YAW_DEG: f32 = 120.0; // 110 + 10 nudge
pub const HOUSE_HEIGHT: f32 = 8.0;
pub const HOUSE_FIT_PADDING: f32 = 1.08;
pub const HERO_WAYPOINT_DY: f32 = -2.0;
pub const PROJECTS_WAYPOINT_DY: f32 = 1.0;
pub const DEBUG_YAW_STEP_DEG: f32 = 10.0;
pub const DEBUG_GROW: f32 = 1.1;
pub const DEBUG_SHRINK: f32 = 0.9;

// Follower placement relative to the house
pub const FOLLOWER_GROUND_OFFSET: f32 = 0.45;
pub const FOLLOWER_FORWARD_LIMIT: f32 = 0.2;
pub const FOLLOWER_ROOF_CLEARANCE: f32 = 0.6;

// Follower stability clamp (seconds)
pub const FOLLOWER_MAX_DT: f32 = 1.0 / 30.0;

// Adaptive device-pixel-ratio controller
pub const DPR_TARGET_FPS: f32 = 60.0;
pub const DPR_MAX_CAP: f32 = 1.6;
pub const DPR_MIN: f32 = 0.75;
pub const DPR_STEP_DOWN: f32 = 0.12;
pub const DPR_STEP_UP: f32 = 0.06;
pub const DPR_SLOW_MARGIN_FPS: f32 = 8.0;
pub const DPR_FAST_MARGIN_FPS: f32 = 5.0;

// Panels and HUD
pub const PANEL_SCALE: f32 = 0.005;
pub const HUD_DISTANCE: f32 = 1.0; // meters in front of the camera
pub const HUD_MARGIN_PX: f32 = 24.0; // gap from the top edge

#[inline]
pub fn camera_start_pos() -> Vec3 {
    Vec3::from(CAMERA_START_POS)
}

#[inline]
pub fn camera_start_target() -> Vec3 {
    Vec3::from(CAMERA_START_TARGET)
}
