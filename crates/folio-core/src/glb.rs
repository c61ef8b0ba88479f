//! Minimal binary glTF (GLB) reader.
//!
//! Only the JSON chunk is read. It is enough to size and place a model and to
//! list its animation clips; vertex data stays in the binary chunk untouched.

use crate::error::AssetError;
use crate::geometry::Aabb;
use fnv::FnvHashMap;
use glam::{Mat4, Quat, Vec3};
use serde::Deserialize;

const GLB_MAGIC: u32 = 0x4654_6C67; // "glTF"
const GLB_VERSION: u32 = 2;
const CHUNK_JSON: u32 = 0x4E4F_534A; // "JSON"
const HEADER_LEN: usize = 12;
const CHUNK_HEADER_LEN: usize = 8;

#[derive(Clone, Debug, PartialEq)]
pub struct ClipInfo {
    pub name: String,
    /// Seconds; the largest keyframe time across the clip's samplers.
    pub duration: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ModelSummary {
    /// Bounds of every mesh instance in the default scene, with node
    /// transforms applied down the hierarchy.
    pub bounds: Option<Aabb>,
    pub mesh_count: usize,
    pub node_count: usize,
    /// Material name of each mesh's first primitive (empty when unnamed).
    pub material_names: Vec<String>,
    pub animations: Vec<ClipInfo>,
}

impl ModelSummary {
    /// Stand-in used when a model cannot be loaded: a unit cube at the origin.
    pub fn unit_cube() -> Self {
        Self {
            bounds: Some(Aabb::new(Vec3::splat(-0.5), Vec3::splat(0.5))),
            mesh_count: 1,
            node_count: 1,
            material_names: vec![String::new()],
            animations: Vec::new(),
        }
    }

    pub fn clip(&self, name: &str) -> Option<&ClipInfo> {
        self.animations.iter().find(|c| c.name == name)
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct Gltf {
    scene: Option<usize>,
    scenes: Vec<GltfScene>,
    meshes: Vec<GltfMesh>,
    nodes: Vec<GltfNode>,
    materials: Vec<GltfMaterial>,
    accessors: Vec<GltfAccessor>,
    animations: Vec<GltfAnimation>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct GltfScene {
    nodes: Vec<usize>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct GltfNode {
    children: Vec<usize>,
    mesh: Option<usize>,
    translation: Option<[f32; 3]>,
    rotation: Option<[f32; 4]>,
    scale: Option<[f32; 3]>,
    matrix: Option<[f32; 16]>,
}

impl GltfNode {
    /// Local transform: `matrix` when given, otherwise T * R * S.
    fn local(&self) -> Mat4 {
        if let Some(m) = self.matrix {
            return Mat4::from_cols_array(&m);
        }
        let t = self.translation.map_or(Vec3::ZERO, Vec3::from);
        let r = self
            .rotation
            .map_or(Quat::IDENTITY, |q| Quat::from_array(q).normalize());
        let s = self.scale.map_or(Vec3::ONE, Vec3::from);
        Mat4::from_scale_rotation_translation(s, r, t)
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct GltfMesh {
    primitives: Vec<GltfPrimitive>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct GltfPrimitive {
    attributes: FnvHashMap<String, usize>,
    material: Option<usize>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct GltfMaterial {
    name: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct GltfAccessor {
    min: Option<Vec<f32>>,
    max: Option<Vec<f32>>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct GltfAnimation {
    name: Option<String>,
    samplers: Vec<GltfSampler>,
}

#[derive(Deserialize)]
struct GltfSampler {
    input: usize,
}

fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

fn vec3_of(v: &Option<Vec<f32>>) -> Option<Vec3> {
    match v.as_deref() {
        Some([x, y, z, ..]) => Some(Vec3::new(*x, *y, *z)),
        _ => None,
    }
}

/// Extract the JSON chunk of a GLB container.
pub fn json_chunk(bytes: &[u8]) -> Result<&[u8], AssetError> {
    if bytes.len() < HEADER_LEN + CHUNK_HEADER_LEN {
        return Err(AssetError::TooShort(bytes.len()));
    }
    if read_u32(bytes, 0) != GLB_MAGIC {
        return Err(AssetError::BadMagic);
    }
    let version = read_u32(bytes, 4);
    if version != GLB_VERSION {
        return Err(AssetError::UnsupportedVersion(version));
    }
    let declared = read_u32(bytes, 8) as usize;
    if declared > bytes.len() {
        return Err(AssetError::LengthMismatch {
            declared,
            actual: bytes.len(),
        });
    }

    let chunk_len = read_u32(bytes, HEADER_LEN) as usize;
    if read_u32(bytes, HEADER_LEN + 4) != CHUNK_JSON {
        return Err(AssetError::MissingJsonChunk);
    }
    let start = HEADER_LEN + CHUNK_HEADER_LEN;
    let end = start.saturating_add(chunk_len);
    if end > declared {
        return Err(AssetError::LengthMismatch {
            declared,
            actual: end,
        });
    }
    Ok(&bytes[start..end])
}

/// Nodes the default scene starts from. Files without scenes fall back to
/// every node that is nobody's child.
fn root_nodes(doc: &Gltf) -> Vec<usize> {
    let scene = doc.scene.unwrap_or(0);
    if let Some(s) = doc.scenes.get(scene) {
        return s.nodes.clone();
    }
    let mut is_child = vec![false; doc.nodes.len()];
    for node in &doc.nodes {
        for &c in &node.children {
            if let Some(flag) = is_child.get_mut(c) {
                *flag = true;
            }
        }
    }
    (0..doc.nodes.len()).filter(|&i| !is_child[i]).collect()
}

/// Union of mesh bounds placed by their nodes' world transforms.
fn scene_bounds(doc: &Gltf, mesh_bounds: &[Option<Aabb>]) -> Option<Aabb> {
    if doc.nodes.is_empty() {
        // No hierarchy: meshes sit in model space as authored
        return mesh_bounds
            .iter()
            .flatten()
            .copied()
            .reduce(|a, b| a.union(b));
    }
    let mut out: Option<Aabb> = None;
    let mut visited = vec![false; doc.nodes.len()];
    let mut stack: Vec<(usize, Mat4)> = root_nodes(doc)
        .into_iter()
        .map(|i| (i, Mat4::IDENTITY))
        .collect();
    while let Some((i, parent)) = stack.pop() {
        let Some(node) = doc.nodes.get(i) else {
            continue;
        };
        // Malformed files can reference a node twice; walk it once
        if std::mem::replace(&mut visited[i], true) {
            continue;
        }
        let world = parent * node.local();
        if let Some(b) = node.mesh.and_then(|m| mesh_bounds.get(m).copied().flatten()) {
            let wb = b.transformed(world);
            out = Some(out.map_or(wb, |u| u.union(wb)));
        }
        stack.extend(node.children.iter().map(|&c| (c, world)));
    }
    out
}

/// Summarize a GLB file: counts, bounds and animation clips.
pub fn summarize_glb(bytes: &[u8]) -> Result<ModelSummary, AssetError> {
    let json = json_chunk(bytes)?;
    let doc: Gltf = serde_json::from_slice(json)?;

    let mut mesh_bounds: Vec<Option<Aabb>> = Vec::with_capacity(doc.meshes.len());
    let mut material_names = Vec::with_capacity(doc.meshes.len());
    for mesh in &doc.meshes {
        let mut bounds: Option<Aabb> = None;
        for prim in &mesh.primitives {
            let Some(acc) = prim
                .attributes
                .get("POSITION")
                .and_then(|&i| doc.accessors.get(i))
            else {
                continue;
            };
            if let (Some(min), Some(max)) = (vec3_of(&acc.min), vec3_of(&acc.max)) {
                let b = Aabb::new(min, max);
                bounds = Some(bounds.map_or(b, |u| u.union(b)));
            }
        }
        let name = mesh
            .primitives
            .first()
            .and_then(|p| p.material)
            .and_then(|m| doc.materials.get(m))
            .and_then(|m| m.name.clone())
            .unwrap_or_default();
        material_names.push(name);
        mesh_bounds.push(bounds);
    }
    let bounds = scene_bounds(&doc, &mesh_bounds);

    let animations = doc
        .animations
        .iter()
        .enumerate()
        .map(|(i, anim)| {
            let duration = anim
                .samplers
                .iter()
                .filter_map(|s| doc.accessors.get(s.input))
                .filter_map(|a| a.max.as_ref().and_then(|m| m.first().copied()))
                .fold(0.0f32, f32::max);
            ClipInfo {
                name: anim.name.clone().unwrap_or_else(|| format!("clip{}", i)),
                duration,
            }
        })
        .collect();

    let summary = ModelSummary {
        bounds,
        mesh_count: doc.meshes.len(),
        node_count: doc.nodes.len(),
        material_names,
        animations,
    };
    log::info!(
        "[assets] glb: {} meshes, {} nodes, {} clips",
        summary.mesh_count,
        summary.node_count,
        summary.animations.len()
    );
    Ok(summary)
}
