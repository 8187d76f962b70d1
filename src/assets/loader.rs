//! Asset loaders
//!
//! A loader turns a store key into a freshly built value. Stores call their
//! loader at most once per key and in-flight period; the loader itself does
//! no caching.

use std::sync::Arc;

use anyhow::Context;
use futures::future::{BoxFuture, FutureExt};
use serde::Deserialize;

use crate::assets::io::AssetReader;
use crate::render::{Geometry, Material, PrimitiveMesh, RenderObject};

/// Builds the value for a store key.
pub trait AssetLoader<T>: Send + Sync {
    fn load(&self, key: &str) -> BoxFuture<'static, anyhow::Result<T>>;
}

impl<T, F> AssetLoader<T> for F
where
    F: Fn(&str) -> BoxFuture<'static, anyhow::Result<T>> + Send + Sync,
{
    fn load(&self, key: &str) -> BoxFuture<'static, anyhow::Result<T>> {
        self(key)
    }
}

// ============================================================================
// Primitive geometry
// ============================================================================

/// Builds primitive geometry procedurally from its [`PrimitiveMesh`] key.
pub struct PrimitiveLoader;

impl AssetLoader<Geometry> for PrimitiveLoader {
    fn load(&self, key: &str) -> BoxFuture<'static, anyhow::Result<Geometry>> {
        let result = key
            .parse::<PrimitiveMesh>()
            .map(PrimitiveMesh::build)
            .map_err(anyhow::Error::msg);
        futures::future::ready(result).boxed()
    }
}

// ============================================================================
// JSON documents
// ============================================================================

#[derive(Debug, Deserialize)]
struct ImportedMeshDocument {
    #[serde(default)]
    name: String,
    meshes: Vec<MeshPartDocument>,
}

#[derive(Debug, Deserialize)]
struct MeshPartDocument {
    #[serde(default)]
    name: String,
    geometry: Geometry,
    #[serde(default)]
    material: Option<Material>,
}

/// Decodes an imported mesh document into a group with one mesh child per
/// part. Parts without a material get the standard material.
pub fn decode_imported_mesh(bytes: &[u8]) -> anyhow::Result<RenderObject> {
    let doc: ImportedMeshDocument =
        serde_json::from_slice(bytes).context("Invalid imported mesh document")?;

    let mut group = RenderObject::group(doc.name);
    for part in doc.meshes {
        anyhow::ensure!(
            part.geometry.is_well_formed(),
            "Mesh part '{}' has out of range indices or mismatched attributes",
            part.name
        );
        let material = part.material.unwrap_or_default();
        group.add_child(RenderObject::mesh(part.name, Arc::new(part.geometry), Arc::new(material)));
    }
    Ok(group)
}

pub fn decode_material(bytes: &[u8]) -> anyhow::Result<Material> {
    serde_json::from_slice(bytes).context("Invalid material document")
}

/// Reads `meshes/<key>.json` through an [`AssetReader`].
pub struct ImportedMeshLoader<R> {
    reader: Arc<R>,
}

impl<R: AssetReader> ImportedMeshLoader<R> {
    pub fn new(reader: Arc<R>) -> Self {
        Self { reader }
    }
}

impl<R: AssetReader> AssetLoader<RenderObject> for ImportedMeshLoader<R> {
    fn load(&self, key: &str) -> BoxFuture<'static, anyhow::Result<RenderObject>> {
        let reader = Arc::clone(&self.reader);
        let path = format!("meshes/{key}.json");
        async move {
            let bytes = reader.read_bytes(&path).await?;
            decode_imported_mesh(&bytes).with_context(|| format!("While decoding {path}"))
        }
        .boxed()
    }
}

/// Reads `materials/<key>.json` through an [`AssetReader`].
pub struct MaterialLoader<R> {
    reader: Arc<R>,
}

impl<R: AssetReader> MaterialLoader<R> {
    pub fn new(reader: Arc<R>) -> Self {
        Self { reader }
    }
}

impl<R: AssetReader> AssetLoader<Material> for MaterialLoader<R> {
    fn load(&self, key: &str) -> BoxFuture<'static, anyhow::Result<Material>> {
        let reader = Arc::clone(&self.reader);
        let path = format!("materials/{key}.json");
        let name = key.to_string();
        async move {
            let bytes = reader.read_bytes(&path).await?;
            let mut material = decode_material(&bytes).with_context(|| format!("While decoding {path}"))?;
            if material.name.is_empty() {
                material.name = name;
            }
            Ok(material)
        }
        .boxed()
    }
}
