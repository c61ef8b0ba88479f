//! GPU-facing marker instances built from the scene state.
//!
//! The scene is drawn as camera-facing discs: a lattice along the house's
//! bounding box edges, panel anchors, and the follower with its tether. The
//! follower goes to a separate list when its render policy disables depth
//! testing so the renderer can draw it with the overlay pipeline.

use crate::camera::Camera;
use crate::geometry::Aabb;
use crate::panels::PanelId;
use crate::scene::Portfolio;
use glam::Vec3;

/// Points sampled along each bounding-box edge.
pub const HOUSE_EDGE_SAMPLES: usize = 9;
pub const TETHER_SAMPLES: usize = 6;
/// Capacity the renderers allocate for one instance list.
pub const MAX_INSTANCES: usize = 256;

const HOUSE_COLOR: [f32; 4] = [0.45, 0.32, 0.22, 1.0];
const TETHER_COLOR: [f32; 4] = [0.25, 0.25, 0.28, 0.6];
const FOLLOWER_COLOR: [f32; 4] = [0.10, 0.65, 0.55, 1.0];
const ANCHOR_COLOR: [f32; 4] = [0.9, 0.9, 0.9, 0.5];

pub const CLEAR_COLOR: [f64; 4] = [0.961, 0.929, 0.863, 1.0]; // #f5eddc

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Uniforms {
    pub view_proj: [[f32; 4]; 4],
    pub cam_right: [f32; 4],
    pub cam_up: [f32; 4],
}

impl Uniforms {
    pub fn from_camera(camera: &Camera) -> Self {
        let b = camera.basis();
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            cam_right: b.right.extend(0.0).to_array(),
            cam_up: b.up.extend(0.0).to_array(),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub pos: [f32; 3],
    pub scale: f32,
    pub color: [f32; 4],
    pub pulse: f32,
}

impl InstanceData {
    fn new(pos: Vec3, scale: f32, color: [f32; 4], pulse: f32) -> Self {
        Self {
            pos: pos.to_array(),
            scale,
            color,
            pulse,
        }
    }
}

/// Two triangles covering a unit quad centred on the origin.
pub const QUAD_VERTICES: [f32; 12] = [
    -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
];

/// Instance lists for one frame.
#[derive(Clone, Debug, Default)]
pub struct FrameInstances {
    /// Depth-tested geometry.
    pub world: Vec<InstanceData>,
    /// Drawn last without depth test.
    pub overlay: Vec<InstanceData>,
}

pub fn house_lattice(bounds: Aabb, out: &mut Vec<InstanceData>) {
    let c = bounds.corners();
    // Corner index pairs for the 12 box edges (bit 0 = x, 1 = y, 2 = z)
    const EDGES: [(usize, usize); 12] = [
        (0, 1), (2, 3), (4, 5), (6, 7),
        (0, 2), (1, 3), (4, 6), (5, 7),
        (0, 4), (1, 5), (2, 6), (3, 7),
    ];
    let scale = (bounds.size().max_element() * 0.015).max(0.02);
    for (a, b) in EDGES {
        for i in 0..HOUSE_EDGE_SAMPLES {
            let t = i as f32 / (HOUSE_EDGE_SAMPLES - 1) as f32;
            out.push(InstanceData::new(c[a].lerp(c[b], t), scale, HOUSE_COLOR, 0.0));
        }
    }
}

fn panel_color(id: PanelId) -> [f32; 4] {
    match id {
        PanelId::Hero => [0.95, 0.55, 0.25, 0.9],
        PanelId::Skills => [0.35, 0.55, 0.95, 0.9],
        PanelId::Projects => [0.65, 0.35, 0.85, 0.9],
        PanelId::Social => [0.95, 0.75, 0.30, 0.9],
    }
}

pub fn build_instances(scene: &Portfolio) -> FrameInstances {
    let mut frame = FrameInstances::default();

    if let Some(house) = scene.house() {
        house_lattice(house.world_bounds(), &mut frame.world);
    }
    for (id, t) in scene.visible_panels() {
        frame
            .world
            .push(InstanceData::new(t.position, 0.35, panel_color(id), 0.0));
    }

    let follower = &scene.follower;
    let visual = follower.visual();
    let target = if visual.policy().depth_test {
        &mut frame.world
    } else {
        &mut frame.overlay
    };
    let anchor = follower.anchor_position();
    let mass = follower.mass_position();
    for i in 1..TETHER_SAMPLES {
        let t = i as f32 / TETHER_SAMPLES as f32;
        target.push(InstanceData::new(anchor.lerp(mass, t), 0.02, TETHER_COLOR, 0.0));
    }
    target.push(InstanceData::new(anchor, 0.05, ANCHOR_COLOR, 0.0));
    // Wing beat shows as a pulse while a clip plays
    let pulse = visual
        .clip()
        .map(|c| 0.5 + 0.5 * (c.phase() * std::f32::consts::TAU).sin())
        .unwrap_or(0.0);
    target.push(InstanceData::new(mass, 0.18, FOLLOWER_COLOR, pulse));

    frame.world.truncate(MAX_INSTANCES);
    frame.overlay.truncate(MAX_INSTANCES);
    frame
}
