//! Scene manifest loading.
//!
//! The portal model is a GLB export in which specific node names carry
//! specific materials. Instead of fishing meshes out of a scene graph at
//! draw time, [`SceneManifest::load`] resolves every expected node once and
//! fails fast with [`AssetError::MissingNode`] if the export is missing one.
//! Node transforms are baked into the vertex positions at load, so the
//! renderer deals in world-space meshes only.

use std::path::Path;

use glam::Mat4;

use crate::error::AssetError;

/// Node carrying the baked-lightmap geometry.
pub const BAKED_NODE: &str = "baked";
/// First pole-light lamp head.
pub const POLE_LIGHT_A_NODE: &str = "Cube004";
/// Second pole-light lamp head.
pub const POLE_LIGHT_B_NODE: &str = "Cube028";
/// The portal surface.
pub const PORTAL_NODE: &str = "Circle";

/// World-space triangle mesh extracted from one model node.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    /// Empty for meshes whose material does not sample UVs.
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}

/// Decoded RGBA pixels of the baked lightmap.
#[derive(Debug, Clone)]
pub struct BakedTexture {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// The four meshes the portal scene is built from.
///
/// Populated once at load time with validated presence checks; after this
/// struct exists, every part of the scene is known to be renderable.
#[derive(Debug)]
pub struct SceneManifest {
    pub baked: MeshData,
    pub pole_light_a: MeshData,
    pub pole_light_b: MeshData,
    pub portal: MeshData,
}

impl SceneManifest {
    /// Load and validate the portal model from a glTF/GLB file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let (document, buffers, _images) = gltf::import(path.as_ref())?;

        Ok(Self {
            // The baked mesh and the portal sample textures, so UVs are
            // mandatory there; the pole lights are flat-shaded.
            baked: extract_mesh(&document, &buffers, BAKED_NODE, true)?,
            pole_light_a: extract_mesh(&document, &buffers, POLE_LIGHT_A_NODE, false)?,
            pole_light_b: extract_mesh(&document, &buffers, POLE_LIGHT_B_NODE, false)?,
            portal: extract_mesh(&document, &buffers, PORTAL_NODE, true)?,
        })
    }
}

fn extract_mesh(
    document: &gltf::Document,
    buffers: &[gltf::buffer::Data],
    name: &str,
    require_uvs: bool,
) -> Result<MeshData, AssetError> {
    let node = document
        .nodes()
        .find(|n| n.name() == Some(name))
        .ok_or_else(|| AssetError::MissingNode(name.to_string()))?;

    let mesh = node.mesh().ok_or_else(|| AssetError::NoMesh(name.to_string()))?;
    let transform = Mat4::from_cols_array_2d(&node.transform().matrix());

    let mut data = MeshData::default();

    for primitive in mesh.primitives() {
        let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));
        let base_vertex = data.positions.len() as u32;

        let positions: Vec<[f32; 3]> = reader
            .read_positions()
            .map(|iter| iter.collect())
            .unwrap_or_default();
        data.positions.extend(
            positions
                .iter()
                .map(|p| transform.transform_point3((*p).into()).to_array()),
        );

        if let Some(uvs) = reader.read_tex_coords(0) {
            data.uvs.extend(uvs.into_f32());
        }

        match reader.read_indices() {
            Some(indices) => data
                .indices
                .extend(indices.into_u32().map(|i| base_vertex + i)),
            // Non-indexed primitive: triangles in vertex order.
            None => data
                .indices
                .extend(base_vertex..base_vertex + positions.len() as u32),
        }
    }

    if require_uvs && data.uvs.len() != data.positions.len() {
        return Err(AssetError::MissingAttribute {
            node: name.to_string(),
            attribute: "TEXCOORD_0",
        });
    }

    Ok(data)
}

/// Load the baked lightmap from an image file.
///
/// The lightmap was baked against glTF UV conventions, so the image is used
/// as decoded, with no vertical flip.
pub fn load_baked_texture<P: AsRef<Path>>(path: P) -> Result<BakedTexture, AssetError> {
    let img = image::open(path.as_ref())?.into_rgba8();
    let (width, height) = img.dimensions();
    Ok(BakedTexture {
        data: img.into_raw(),
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn write_temp_gltf(name: &str, json: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_missing_node_fails_fast() {
        let path = write_temp_gltf(
            "glade_empty_scene.gltf",
            r#"{
                "asset": { "version": "2.0" },
                "scenes": [{ "nodes": [] }],
                "scene": 0
            }"#,
        );

        let err = SceneManifest::load(&path).unwrap_err();
        match err {
            AssetError::MissingNode(name) => assert_eq!(name, BAKED_NODE),
            other => panic!("expected MissingNode, got {:?}", other),
        }
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_baked_without_uvs_is_rejected() {
        // One node named "baked" whose mesh has positions but no TEXCOORD_0.
        // 3 zeroed VEC3 positions = 36 bytes = 48 base64 chars.
        let buffer_uri = format!("data:application/octet-stream;base64,{}", "A".repeat(48));
        let json = format!(
            r#"{{
                "asset": {{ "version": "2.0" }},
                "buffers": [{{ "uri": "{buffer_uri}", "byteLength": 36 }}],
                "bufferViews": [{{ "buffer": 0, "byteOffset": 0, "byteLength": 36 }}],
                "accessors": [{{
                    "bufferView": 0,
                    "componentType": 5126,
                    "count": 3,
                    "type": "VEC3",
                    "min": [0.0, 0.0, 0.0],
                    "max": [0.0, 0.0, 0.0]
                }}],
                "meshes": [{{ "primitives": [{{ "attributes": {{ "POSITION": 0 }} }}] }}],
                "nodes": [{{ "name": "baked", "mesh": 0 }}],
                "scenes": [{{ "nodes": [0] }}],
                "scene": 0
            }}"#
        );
        let path = write_temp_gltf("glade_no_uv_scene.gltf", &json);

        let err = SceneManifest::load(&path).unwrap_err();
        match err {
            AssetError::MissingAttribute { node, attribute } => {
                assert_eq!(node, BAKED_NODE);
                assert_eq!(attribute, "TEXCOORD_0");
            }
            other => panic!("expected MissingAttribute, got {:?}", other),
        }
        fs::remove_file(path).ok();
    }
}
