//! Declarative render state for scene objects and the follower's visual
//! subtree.
//!
//! Renderers read `RenderPolicy` per object instead of the scene logic mutating
//! materials in place. The follower keeps an explicit `NodeId -> Material`
//! table of originals so an unlit override can be undone.

use crate::glb::{ClipInfo, ModelSummary};
use fnv::FnvHashMap;
use smallvec::SmallVec;

/// Render order used for the "always on top" overlay mode.
pub const OVERLAY_RENDER_ORDER: i32 = 9999;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderPolicy {
    pub cast_shadow: bool,
    pub receive_shadow: bool,
    pub frustum_culled: bool,
    pub depth_test: bool,
    pub depth_write: bool,
    pub render_order: i32,
}

impl Default for RenderPolicy {
    fn default() -> Self {
        Self {
            cast_shadow: false,
            receive_shadow: false,
            frustum_culled: true,
            depth_test: true,
            depth_write: true,
            render_order: 0,
        }
    }
}

impl RenderPolicy {
    /// Static world geometry: culled, no shadows.
    pub fn world() -> Self {
        Self::default()
    }

    /// Animated character: casts shadow and is never culled (skinned bounds
    /// are unreliable).
    pub fn character() -> Self {
        Self {
            cast_shadow: true,
            frustum_culled: false,
            ..Self::default()
        }
    }

    pub fn with_overlay(mut self, on: bool) -> Self {
        self.depth_test = !on;
        self.depth_write = !on;
        self.render_order = if on { OVERLAY_RENDER_ORDER } else { 0 };
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

#[derive(Clone, Debug, PartialEq)]
pub struct UnlitMaterial {
    pub texture_url: String,
    pub tone_mapped: bool,
    pub transparent: bool,
    pub double_sided: bool,
    pub alpha_test: f32,
    pub anisotropy: u8,
}

impl UnlitMaterial {
    pub fn new(texture_url: impl Into<String>) -> Self {
        Self {
            texture_url: texture_url.into(),
            tone_mapped: false,
            transparent: true,
            double_sided: false,
            alpha_test: 0.0,
            anisotropy: 4,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Material {
    /// Material as authored in the model file.
    Authored { name: String },
    Unlit(UnlitMaterial),
}

#[derive(Clone, Debug, PartialEq)]
pub struct VisualNode {
    pub id: NodeId,
    pub material: Material,
    pub policy: RenderPolicy,
}

/// Looping animation clip clock.
#[derive(Clone, Debug, PartialEq)]
pub struct ClipPlayer {
    pub name: String,
    pub duration: f32,
    pub time: f32,
}

impl ClipPlayer {
    pub fn new(clip: &ClipInfo) -> Self {
        Self {
            name: clip.name.clone(),
            duration: clip.duration,
            time: 0.0,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        if self.duration > 0.0 {
            self.time = (self.time + dt) % self.duration;
        }
    }

    /// Playback position in 0..1.
    pub fn phase(&self) -> f32 {
        if self.duration > 0.0 {
            self.time / self.duration
        } else {
            0.0
        }
    }
}

/// The follower's model: mesh nodes, their materials and the active clip.
#[derive(Clone, Debug, Default)]
pub struct FollowerVisual {
    nodes: SmallVec<[VisualNode; 8]>,
    originals: FnvHashMap<NodeId, Material>,
    clip: Option<ClipPlayer>,
    overlay: bool,
}

impl FollowerVisual {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the subtree with the meshes of a loaded model and start its
    /// clip (by name, else the first). Without clips the visual stays static.
    pub fn install_model(&mut self, model: &ModelSummary, clip_name: Option<&str>) {
        self.originals.clear();
        self.nodes = (0..model.mesh_count as u32)
            .map(|i| VisualNode {
                id: NodeId(i),
                material: Material::Authored {
                    name: model
                        .material_names
                        .get(i as usize)
                        .cloned()
                        .unwrap_or_default(),
                },
                policy: RenderPolicy::character().with_overlay(self.overlay),
            })
            .collect();

        let clip = clip_name
            .and_then(|name| model.animations.iter().find(|c| c.name == name))
            .or_else(|| model.animations.first());
        self.clip = match clip {
            Some(c) => Some(ClipPlayer::new(c)),
            None => {
                log::warn!("[follower] model has no animations; showing it static");
                None
            }
        };
    }

    pub fn nodes(&self) -> &[VisualNode] {
        &self.nodes
    }

    pub fn clip(&self) -> Option<&ClipPlayer> {
        self.clip.as_ref()
    }

    pub fn is_animated(&self) -> bool {
        self.clip.is_some()
    }

    pub fn advance(&mut self, dt: f32) {
        if let Some(c) = self.clip.as_mut() {
            c.advance(dt);
        }
    }

    /// Swap every mesh to an unlit textured material, remembering the first
    /// material seen per node.
    pub fn apply_unlit(&mut self, unlit: &UnlitMaterial) {
        for node in self.nodes.iter_mut() {
            self.originals
                .entry(node.id)
                .or_insert_with(|| node.material.clone());
            node.material = Material::Unlit(unlit.clone());
        }
    }

    pub fn restore_original_materials(&mut self) {
        for node in self.nodes.iter_mut() {
            if let Some(orig) = self.originals.get(&node.id) {
                node.material = orig.clone();
            }
        }
        self.originals.clear();
    }

    pub fn has_overrides(&self) -> bool {
        !self.originals.is_empty()
    }

    /// Draw over everything by disabling depth test/write.
    pub fn set_overlay_on_top(&mut self, on: bool) {
        self.overlay = on;
        for node in self.nodes.iter_mut() {
            node.policy = node.policy.with_overlay(on);
        }
    }

    pub fn overlay_on_top(&self) -> bool {
        self.overlay
    }

    /// Policy for the whole subtree; renderers draw the follower as one unit.
    pub fn policy(&self) -> RenderPolicy {
        self.nodes
            .first()
            .map(|n| n.policy)
            .unwrap_or_else(|| RenderPolicy::character().with_overlay(self.overlay))
    }
}
