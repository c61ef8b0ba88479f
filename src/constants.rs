// Browser-side wiring only; scene and motion tuning lives in folio_core.

// Canvas + DOM ids
pub const CANVAS_ID: &str = "app";
pub const HUD_ID: &str = "hud-nav";
pub const NAV_BUTTON_IDS: [&str; 3] = ["nav-hero", "nav-skills", "nav-projects"];
pub const PANEL_IDS: [&str; 4] = ["panel-hero", "panel-skills", "panel-projects", "panel-social"];
pub const ACTIVE_CLASS: &str = "active";

// Assets (relative to the page)
pub const HOUSE_URL: &str = "assets/forest_house.glb";
pub const BIRD_URL: &str = "assets/Humming.glb";
pub const BIRD_TEXTURE_URL: &str = "assets/humming.png";
pub const BIRD_CLIP: Option<&str> = None;

// Orbit drag: a drag across the full canvas height turns a full circle
pub const ROTATE_SPEED: f32 = 1.0;
// Wheel: one 100 px notch zooms by this factor
pub const ZOOM_STEP: f32 = 0.95;
pub const WHEEL_NOTCH_PX: f32 = 100.0;

// Frame time clamp guarding against tab-switch spikes (seconds)
pub const MAX_FRAME_DT: f32 = 0.25;

// Seed for the follower's idle sway
pub const FOLLOWER_SEED: u64 = 0x5EED_F011;
