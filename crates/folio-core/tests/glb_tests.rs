// Host-side tests for the GLB summary reader.

use folio_core::glb::{json_chunk, summarize_glb};
use folio_core::AssetError;
use glam::Vec3;

fn glb_with_chunk(json: &str, chunk_type: &[u8; 4]) -> Vec<u8> {
    let mut body = json.as_bytes().to_vec();
    while body.len() % 4 != 0 {
        body.push(b' ');
    }
    let total = (12 + 8 + body.len()) as u32;
    let mut out = Vec::with_capacity(total as usize);
    out.extend_from_slice(b"glTF");
    out.extend_from_slice(&2u32.to_le_bytes());
    out.extend_from_slice(&total.to_le_bytes());
    out.extend_from_slice(&(body.len() as u32).to_le_bytes());
    out.extend_from_slice(chunk_type);
    out.extend_from_slice(&body);
    out
}

fn glb(json: &str) -> Vec<u8> {
    glb_with_chunk(json, b"JSON")
}

const HOUSE: &str = r#"{
  "asset": {"version": "2.0"},
  "nodes": [{"mesh": 0}, {"mesh": 1}, {"name": "root"}],
  "materials": [{"name": "wood"}, {"name": "roof"}],
  "meshes": [
    {"primitives": [{"attributes": {"POSITION": 0, "NORMAL": 1}, "material": 0}]},
    {"primitives": [{"attributes": {"POSITION": 2}, "material": 1}]}
  ],
  "accessors": [
    {"min": [-1.0, 0.0, -1.0], "max": [1.0, 2.0, 1.0]},
    {"min": [-1.0, -1.0, -1.0], "max": [1.0, 1.0, 1.0]},
    {"min": [-0.5, 2.0, -3.0], "max": [0.5, 3.5, 0.0]},
    {"max": [1.25]},
    {"max": [0.75]}
  ],
  "animations": [
    {"name": "hover", "samplers": [{"input": 3, "output": 1}, {"input": 4, "output": 1}]},
    {"samplers": [{"input": 4, "output": 1}]}
  ]
}"#;

#[test]
fn summary_reports_counts_bounds_and_clips() {
    let s = summarize_glb(&glb(HOUSE)).expect("valid glb");
    assert_eq!(s.mesh_count, 2);
    assert_eq!(s.node_count, 3);
    assert_eq!(s.material_names, vec!["wood".to_string(), "roof".to_string()]);

    let b = s.bounds.expect("bounds");
    assert_eq!(b.min, Vec3::new(-1.0, 0.0, -3.0));
    assert_eq!(b.max, Vec3::new(1.0, 3.5, 1.0));

    assert_eq!(s.animations.len(), 2);
    assert_eq!(s.animations[0].name, "hover");
    assert_eq!(s.animations[0].duration, 1.25);
    assert_eq!(s.animations[1].name, "clip1");
    assert_eq!(s.animations[1].duration, 0.75);
    assert!(s.clip("hover").is_some());
    assert!(s.clip("walk").is_none());
}

#[test]
fn model_without_positions_has_no_bounds() {
    let s = summarize_glb(&glb(r#"{"meshes": [{"primitives": []}]}"#)).expect("valid glb");
    assert_eq!(s.mesh_count, 1);
    assert!(s.bounds.is_none());
    assert_eq!(s.material_names, vec![String::new()]);
    assert!(s.animations.is_empty());
}

#[test]
fn short_input_is_rejected() {
    assert!(matches!(summarize_glb(b"glTF"), Err(AssetError::TooShort(4))));
}

#[test]
fn wrong_magic_is_rejected() {
    let mut bytes = glb("{}");
    bytes[0] = b'x';
    assert!(matches!(summarize_glb(&bytes), Err(AssetError::BadMagic)));
}

#[test]
fn version_one_is_rejected() {
    let mut bytes = glb("{}");
    bytes[4..8].copy_from_slice(&1u32.to_le_bytes());
    assert!(matches!(
        summarize_glb(&bytes),
        Err(AssetError::UnsupportedVersion(1))
    ));
}

#[test]
fn truncated_file_is_rejected() {
    let mut bytes = glb(HOUSE);
    bytes.truncate(bytes.len() - 8);
    assert!(matches!(
        summarize_glb(&bytes),
        Err(AssetError::LengthMismatch { .. })
    ));
}

#[test]
fn binary_first_chunk_is_rejected() {
    let bytes = glb_with_chunk("{}", b"BIN\0");
    assert!(matches!(json_chunk(&bytes), Err(AssetError::MissingJsonChunk)));
}

#[test]
fn broken_json_is_reported() {
    let bytes = glb("{\"meshes\": [");
    let err = summarize_glb(&bytes).expect_err("broken json");
    assert!(matches!(err, AssetError::Json(_)));
    assert!(err.to_string().starts_with("invalid glTF JSON"));
}

#[test]
fn unit_cube_fallback_is_centered() {
    let s = folio_core::glb::ModelSummary::unit_cube();
    let b = s.bounds.expect("bounds");
    assert_eq!(b.center(), Vec3::ZERO);
    assert_eq!(b.size(), Vec3::ONE);
}

// Z-up authoring export: the root turns the model upright and scales
// centimetres to metres.
const Z_UP_CM: &str = r#"{
  "scene": 0,
  "scenes": [{"nodes": [0]}],
  "nodes": [
    {"rotation": [-0.70710677, 0.0, 0.0, 0.70710677], "scale": [0.01, 0.01, 0.01], "children": [1]},
    {"mesh": 0}
  ],
  "meshes": [{"primitives": [{"attributes": {"POSITION": 0}}]}],
  "accessors": [{"min": [-100.0, -100.0, 0.0], "max": [100.0, 100.0, 800.0]}]
}"#;

#[test]
fn bounds_follow_node_rotation_and_scale() {
    let s = summarize_glb(&glb(Z_UP_CM)).expect("valid glb");
    let b = s.bounds.expect("bounds");
    let size = b.size();
    assert!((size.y - 8.0).abs() < 1e-3, "height {}", size.y);
    assert!((size.x - 2.0).abs() < 1e-3, "width {}", size.x);
    assert!((size.z - 2.0).abs() < 1e-3, "depth {}", size.z);
    assert!(b.min.y.abs() < 1e-3);
}

#[test]
fn child_translation_and_matrix_compose_with_parent() {
    let json = r#"{
      "nodes": [
        {"translation": [10.0, 0.0, 0.0], "children": [1]},
        {"matrix": [2,0,0,0, 0,2,0,0, 0,0,2,0, 0,5,0,1], "mesh": 0}
      ],
      "meshes": [{"primitives": [{"attributes": {"POSITION": 0}}]}],
      "accessors": [{"min": [-1.0, -1.0, -1.0], "max": [1.0, 1.0, 1.0]}]
    }"#;
    let b = summarize_glb(&glb(json)).expect("valid glb").bounds.expect("bounds");
    assert!((b.min - Vec3::new(8.0, 3.0, -2.0)).length() < 1e-4, "{:?}", b.min);
    assert!((b.max - Vec3::new(12.0, 7.0, 2.0)).length() < 1e-4, "{:?}", b.max);
}

#[test]
fn meshes_outside_the_default_scene_are_not_counted() {
    let json = r#"{
      "scene": 1,
      "scenes": [{"nodes": [0]}, {"nodes": [1]}],
      "nodes": [{"mesh": 0}, {"mesh": 1}],
      "meshes": [
        {"primitives": [{"attributes": {"POSITION": 0}}]},
        {"primitives": [{"attributes": {"POSITION": 1}}]}
      ],
      "accessors": [
        {"min": [-50.0, -50.0, -50.0], "max": [50.0, 50.0, 50.0]},
        {"min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 1.0]}
      ]
    }"#;
    let b = summarize_glb(&glb(json)).expect("valid glb").bounds.expect("bounds");
    assert_eq!(b.max, Vec3::ONE);
}

#[test]
fn cyclic_node_graph_terminates() {
    let json = r#"{
      "scenes": [{"nodes": [0]}],
      "nodes": [{"mesh": 0, "children": [1]}, {"children": [0]}],
      "meshes": [{"primitives": [{"attributes": {"POSITION": 0}}]}],
      "accessors": [{"min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 1.0]}]
    }"#;
    let b = summarize_glb(&glb(json)).expect("valid glb").bounds.expect("bounds");
    assert_eq!(b.max, Vec3::ONE);
}
