// Host-side tests for panel layout, visibility and HUD anchoring.

use folio_core::panels::{billboard_yaw, panel_visible, HudAnchor, PanelId, PanelLayout};
use folio_core::{Camera, SectionId};
use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

#[test]
fn only_current_section_panels_are_visible() {
    let visible = |s| {
        PanelId::ALL
            .iter()
            .copied()
            .filter(|&id| panel_visible(id, s))
            .collect::<Vec<_>>()
    };
    assert_eq!(visible(SectionId::Hero), vec![PanelId::Hero, PanelId::Social]);
    assert_eq!(visible(SectionId::Skills), vec![PanelId::Skills]);
    assert_eq!(visible(SectionId::Projects), vec![PanelId::Projects]);
}

#[test]
fn projects_shares_skills_xz_plus_offset() {
    let layout = PanelLayout::default();
    let p = layout.position(PanelId::Projects);
    assert!((p - Vec3::new(1.6, 8.5, 2.5)).length() < 1e-5);
    let s = layout.position(PanelId::Social);
    assert!((s - Vec3::new(3.0, 1.8, 1.0)).length() < 1e-5);
}

#[test]
fn billboard_faces_camera_about_y() {
    assert!(billboard_yaw(Vec3::ZERO, Vec3::new(0.0, 5.0, 10.0)).abs() < 1e-6);
    assert!((billboard_yaw(Vec3::ZERO, Vec3::new(10.0, -3.0, 0.0)) - FRAC_PI_2).abs() < 1e-6);
    // Directly above: no defined heading
    assert_eq!(billboard_yaw(Vec3::ZERO, Vec3::new(0.0, 4.0, 0.0)), 0.0);

    let layout = PanelLayout::default();
    let cam = Vec3::new(8.0, 3.0, 9.0);
    let t = layout.transform(PanelId::Skills, cam);
    let facing = t.rotation * Vec3::Z;
    let to_cam = cam - t.position;
    let to_cam = Vec3::new(to_cam.x, 0.0, to_cam.z).normalize();
    assert!(facing.dot(to_cam) > 0.9999);
    assert!(facing.y.abs() < 1e-6);
}

#[test]
fn projects_panel_gets_extra_pitch() {
    let layout = PanelLayout::default();
    let t = layout.transform(PanelId::Projects, Vec3::new(1.6, 8.5, 12.0));
    let facing = t.rotation * Vec3::Z;
    // Rotating -12° about local X tips +Z upward
    assert!((facing.y - 12f32.to_radians().sin()).abs() < 1e-5);
}

#[test]
fn pitch_reads_back_only_the_tilt() {
    let layout = PanelLayout::default();
    let eye = Vec3::new(-7.0, 8.5, 4.0);
    let projects = layout.transform(PanelId::Projects, eye);
    assert!((projects.pitch() - (-12f32).to_radians()).abs() < 1e-4);
    let skills = layout.transform(PanelId::Skills, eye);
    assert!(skills.pitch().abs() < 1e-5);
}

#[test]
fn hud_sits_near_top_edge() {
    let hud = HudAnchor::default();
    let fovy = 40f32.to_radians();
    let (local, px) = hud.local(fovy, 800.0);
    let half_h = (fovy / 2.0).tan();
    assert!((px - 2.0 * half_h / 800.0).abs() < 1e-7);
    assert!((local.y - (half_h - 24.0 * px)).abs() < 1e-6);
    assert_eq!(local.z, -1.0);

    let camera = Camera::default();
    let world = hud.world(&camera, 800.0);
    let b = camera.basis();
    let rel = world.position - camera.eye;
    assert!((rel.dot(b.forward) - 1.0).abs() < 1e-5);
    assert!((rel.dot(b.up) - local.y).abs() < 1e-5);
}
