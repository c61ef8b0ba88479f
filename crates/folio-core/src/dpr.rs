//! Device-pixel-ratio governor: trades resolution for frame rate.

use crate::constants::{
    DPR_FAST_MARGIN_FPS, DPR_MAX_CAP, DPR_MIN, DPR_SLOW_MARGIN_FPS, DPR_STEP_DOWN, DPR_STEP_UP,
    DPR_TARGET_FPS,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DprConfig {
    pub target_fps: f32,
    pub min: f32,
    pub max_cap: f32,
    pub step_down: f32,
    pub step_up: f32,
    pub slow_margin_fps: f32,
    pub fast_margin_fps: f32,
    /// Seconds of frame time per sample window.
    pub window_sec: f32,
}

impl Default for DprConfig {
    fn default() -> Self {
        Self {
            target_fps: DPR_TARGET_FPS,
            min: DPR_MIN,
            max_cap: DPR_MAX_CAP,
            step_down: DPR_STEP_DOWN,
            step_up: DPR_STEP_UP,
            slow_margin_fps: DPR_SLOW_MARGIN_FPS,
            fast_margin_fps: DPR_FAST_MARGIN_FPS,
            window_sec: 1.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AdaptiveDpr {
    cfg: DprConfig,
    max: f32,
    current: f32,
    accum: f32,
    samples: u32,
}

impl AdaptiveDpr {
    /// Starts at the ceiling: `min(device_ratio, max_cap)`.
    pub fn new(cfg: DprConfig, device_ratio: f32) -> Self {
        let max = device_ratio.min(cfg.max_cap).max(cfg.min);
        Self {
            cfg,
            max,
            current: max,
            accum: 0.0,
            samples: 0,
        }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Feed one frame. Returns the new ratio when it changed.
    pub fn record_frame(&mut self, dt: f32) -> Option<f32> {
        self.accum += dt.max(0.0);
        self.samples += 1;
        if self.accum < self.cfg.window_sec {
            return None;
        }
        let fps = self.samples as f32 / self.accum;
        self.accum = 0.0;
        self.samples = 0;

        let before = self.current;
        if fps < self.cfg.target_fps - self.cfg.slow_margin_fps && self.current > self.cfg.min {
            self.current = (self.current - self.cfg.step_down).max(self.cfg.min);
        } else if fps > self.cfg.target_fps + self.cfg.fast_margin_fps && self.current < self.max {
            self.current = (self.current + self.cfg.step_up).min(self.max);
        }
        if self.current != before {
            log::debug!("[dpr] {:.0} fps -> ratio {:.2}", fps, self.current);
            Some(self.current)
        } else {
            None
        }
    }
}
