// Host-side tests for the adaptive pixel-ratio governor.

use folio_core::dpr::{AdaptiveDpr, DprConfig};

fn feed(dpr: &mut AdaptiveDpr, dt: f32, frames: usize) -> Vec<f32> {
    (0..frames).filter_map(|_| dpr.record_frame(dt)).collect()
}

#[test]
fn starts_at_capped_device_ratio() {
    assert_eq!(AdaptiveDpr::new(DprConfig::default(), 3.0).current(), 1.6);
    assert_eq!(AdaptiveDpr::new(DprConfig::default(), 1.0).current(), 1.0);
}

#[test]
fn slow_window_steps_down_once() {
    let mut dpr = AdaptiveDpr::new(DprConfig::default(), 2.0);
    let changes = feed(&mut dpr, 0.1, 11);
    assert_eq!(changes.len(), 1);
    assert!((dpr.current() - 1.48).abs() < 1e-5);
}

#[test]
fn never_drops_below_floor() {
    let mut dpr = AdaptiveDpr::new(DprConfig::default(), 2.0);
    feed(&mut dpr, 0.1, 200);
    assert_eq!(dpr.current(), 0.75);
}

#[test]
fn headroom_steps_back_up_to_ceiling() {
    let mut dpr = AdaptiveDpr::new(DprConfig::default(), 2.0);
    feed(&mut dpr, 0.1, 200);
    feed(&mut dpr, 1.0 / 120.0, 120 * 30);
    assert!((dpr.current() - 1.6).abs() < 1e-5);
}

#[test]
fn target_rate_holds_steady() {
    let mut dpr = AdaptiveDpr::new(DprConfig::default(), 2.0);
    let changes = feed(&mut dpr, 1.0 / 60.0, 600);
    assert!(changes.is_empty());
    assert_eq!(dpr.current(), 1.6);
}
