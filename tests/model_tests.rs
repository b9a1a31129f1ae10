// Host-side tests for model decoding, bounds and load progress.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod backdrop {
    pub mod model {
        include!("../src/core/model.rs");
    }
}

use backdrop::model::*;
use glam::Vec3;

// One triangle in the XY plane, wound counter-clockwise, placed by a node
// translated one unit along +X. The buffer lives in an external `tri.bin`.
const TRIANGLE_GLTF: &str = r#"{
  "asset": { "version": "2.0" },
  "scene": 0,
  "scenes": [{ "nodes": [0] }],
  "nodes": [{ "mesh": 0, "translation": [1.0, 0.0, 0.0] }],
  "meshes": [{ "primitives": [{ "attributes": { "POSITION": 0 } }] }],
  "buffers": [{ "uri": "tri.bin", "byteLength": 36 }],
  "bufferViews": [{ "buffer": 0, "byteOffset": 0, "byteLength": 36 }],
  "accessors": [{
    "bufferView": 0,
    "componentType": 5126,
    "count": 3,
    "type": "VEC3",
    "min": [0.0, 0.0, 0.0],
    "max": [1.0, 1.0, 0.0]
  }]
}"#;

fn triangle_bytes() -> Vec<u8> {
    let positions: [f32; 9] = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    bytemuck::cast_slice::<f32, u8>(&positions).to_vec()
}

#[test]
fn bounds_center_and_size() {
    let b = Bounds::from_points([Vec3::new(-1.0, 0.0, 2.0), Vec3::new(3.0, 2.0, 4.0)]);
    assert_eq!(b.center(), Vec3::new(1.0, 1.0, 3.0));
    assert_eq!(b.size(), Vec3::new(4.0, 2.0, 2.0));
    assert!(!b.is_empty());

    let empty = Bounds::empty();
    assert!(empty.is_empty());
    assert_eq!(empty.center(), Vec3::ZERO);
    assert_eq!(empty.size(), Vec3::ZERO);
}

#[test]
fn progress_rounds_to_whole_percent() {
    assert_eq!(progress_percent(1, 1), 100);
    assert_eq!(progress_percent(1, 3), 33);
    assert_eq!(progress_percent(2, 3), 67);
    assert_eq!(progress_percent(0, 4), 0);
    assert_eq!(progress_percent(0, 0), 100);
    assert_eq!(progress_label(67), "Loading Model... 67%");
}

#[test]
fn uris_resolve_against_model_directory() {
    assert_eq!(resolve_uri("model/car.gltf", "car.bin"), "model/car.bin");
    assert_eq!(resolve_uri("car.gltf", "car.bin"), "car.bin");
    assert_eq!(resolve_uri("model/car.gltf", "/assets/car.bin"), "/assets/car.bin");
    assert_eq!(
        resolve_uri("model/car.gltf", "https://cdn.example.com/car.bin"),
        "https://cdn.example.com/car.bin"
    );
    assert_eq!(
        resolve_uri("model/car.gltf", "data:application/octet-stream;base64,AAAA"),
        "data:application/octet-stream;base64,AAAA"
    );
}

#[test]
fn smooth_normals_follow_winding() {
    let positions = [Vec3::ZERO, Vec3::X, Vec3::Y];
    let normals = smooth_normals(&positions, &[0, 1, 2]);
    assert_eq!(normals.len(), 3);
    for n in normals {
        assert!((n - Vec3::Z).length() < 1e-6);
    }
    // Vertices not referenced by any triangle fall back to +Y
    let lonely = smooth_normals(&[Vec3::ZERO], &[]);
    assert_eq!(lonely, vec![Vec3::Y]);
}

#[test]
fn external_buffers_are_counted_as_progress_items() {
    let gltf = gltf::Gltf::from_slice(TRIANGLE_GLTF.as_bytes()).unwrap();
    let slots = buffer_slots(&gltf.document, "models/tri.gltf");
    assert_eq!(slots, vec![BufferSlot::Fetch("models/tri.bin".to_string())]);
    assert_eq!(progress_items(&slots), 2);
    assert_eq!(progress_items(&[BufferSlot::Blob]), 1);
}

#[test]
fn decode_bakes_node_transform_into_geometry() {
    let gltf = gltf::Gltf::from_slice(TRIANGLE_GLTF.as_bytes()).unwrap();
    let mesh = decode_mesh(&gltf.document, &[triangle_bytes()]).unwrap();

    assert_eq!(mesh.vertices.len(), 3);
    assert_eq!(mesh.indices, vec![0, 1, 2]);
    assert_eq!(mesh.bounds.min, Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(mesh.bounds.max, Vec3::new(2.0, 1.0, 0.0));
    assert_eq!(mesh.bounds.center(), Vec3::new(1.5, 0.5, 0.0));

    let v = mesh.vertices[1];
    assert_eq!(v.position, [2.0, 0.0, 0.0]);
    assert!((Vec3::from(v.normal) - Vec3::Z).length() < 1e-6);
    // No material: glTF default base colour is opaque white
    assert_eq!(v.color, [1.0, 1.0, 1.0, 1.0]);
}

#[test]
fn decode_without_buffer_data_yields_no_geometry() {
    let gltf = gltf::Gltf::from_slice(TRIANGLE_GLTF.as_bytes()).unwrap();
    let err = decode_mesh(&gltf.document, &[]).unwrap_err();
    assert!(matches!(err, ModelError::Empty));
}

#[test]
fn scene_without_meshes_is_rejected() {
    let json = r#"{
      "asset": { "version": "2.0" },
      "scene": 0,
      "scenes": [{ "nodes": [0] }],
      "nodes": [{ "name": "empty" }]
    }"#;
    let gltf = gltf::Gltf::from_slice(json.as_bytes()).unwrap();
    let err = decode_mesh(&gltf.document, &[]).unwrap_err();
    assert!(matches!(err, ModelError::Empty));
    assert_eq!(err.to_string(), "model contains no triangle geometry");
}

#[test]
fn malformed_documents_surface_parse_errors() {
    let err = gltf::Gltf::from_slice(b"not a model").map_err(ModelError::from);
    assert!(matches!(err, Err(ModelError::Parse(_))));
}
