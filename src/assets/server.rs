use std::sync::Arc;

use crate::assets::io::AssetReader;
use crate::assets::loader::{AssetLoader, ImportedMeshLoader, MaterialLoader, PrimitiveLoader};
use crate::assets::registry::{ModelRegistry, ModelType};
use crate::assets::storage::AssetStore;
use crate::errors::{Error, NotFound, Result};
use crate::render::{Geometry, Material, PrimitiveMesh, RenderObject};

/// The resource cache: four independent keyed stores.
///
/// - `primitive_meshes`: procedural geometry, keyed by [`PrimitiveMesh::key`]
/// - `imported_meshes`: decoded mesh groups, keyed by imported-mesh id
/// - `materials`: decoded materials, keyed by material id
/// - `models`: composed renderables, keyed by model id, filled only by
///   [`assemble_model`](Self::assemble_model) or `set`
///
/// Cloning is cheap and every clone shares the same stores.
#[derive(Clone)]
pub struct AssetServer {
    pub primitive_meshes: Arc<AssetStore<Geometry>>,
    pub imported_meshes: Arc<AssetStore<RenderObject>>,
    pub materials: Arc<AssetStore<Material>>,
    pub models: Arc<AssetStore<RenderObject>>,
}

impl AssetServer {
    /// Creates a server whose mesh and material stores read JSON documents
    /// through `reader`.
    pub fn new<R: AssetReader>(reader: R) -> Self {
        let reader = Arc::new(reader);
        Self::with_loaders(
            Arc::new(ImportedMeshLoader::new(Arc::clone(&reader))),
            Arc::new(MaterialLoader::new(reader)),
        )
    }

    #[must_use]
    pub fn with_loaders(
        imported_mesh_loader: Arc<dyn AssetLoader<RenderObject>>,
        material_loader: Arc<dyn AssetLoader<Material>>,
    ) -> Self {
        Self {
            primitive_meshes: Arc::new(AssetStore::new("primitive mesh", Arc::new(PrimitiveLoader))),
            imported_meshes: Arc::new(AssetStore::new("imported mesh", imported_mesh_loader)),
            materials: Arc::new(AssetStore::new("material", material_loader)),
            models: Arc::new(AssetStore::without_loader("model")),
        }
    }

    /// Builds the given primitives into the primitive store.
    pub fn preload_primitives(&self, kinds: &[PrimitiveMesh]) {
        for &kind in kinds {
            if !self.primitive_meshes.has(kind.key()) {
                self.primitive_meshes.set(kind.key(), kind.build());
            }
        }
    }

    /// Materializes the composed model `model_id`.
    ///
    /// On a model-store hit the cached value is returned. Otherwise the
    /// model's imported mesh and material are ensured concurrently, the
    /// material is applied to a copy of the mesh, and the result is stored
    /// under `model_id`. The imported-mesh entry itself is left untouched.
    ///
    /// Two concurrent calls for the same uncached model both compose, but
    /// share the dependency loads through the stores.
    pub async fn assemble_model(&self, model_id: &str, registry: &dyn ModelRegistry) -> Result<Arc<RenderObject>> {
        if let Some(model) = self.models.get(model_id) {
            log::debug!("model: hit '{model_id}'");
            return Ok(model);
        }

        let info = registry
            .lookup(model_id)
            .ok_or_else(|| NotFound::Model(model_id.to_string()))?;

        match info.model_type {
            ModelType::Imported => {}
            ModelType::Procedural => {
                return Err(Error::UnsupportedPayload(format!(
                    "model '{model_id}' is procedural and has no imported mesh"
                )));
            }
        }
        if info.imported_mesh_id.is_empty() {
            return Err(NotFound::ModelMesh(model_id.to_string()).into());
        }

        let mesh = self.imported_meshes.ensure(&info.imported_mesh_id);
        let material = async {
            if info.material_id.is_empty() {
                Ok(None)
            } else {
                self.materials.ensure(&info.material_id).await.map(Some)
            }
        };
        let (mesh, material) = futures::try_join!(mesh, material)?;

        let mut composed = (*mesh).clone();
        if let Some(material) = material {
            composed.replace_material(&material);
        }

        log::debug!(
            "model: composed '{model_id}' from mesh '{}' and material '{}'",
            info.imported_mesh_id,
            info.material_id
        );
        Ok(self.models.set(model_id, composed))
    }
}

impl Default for AssetServer {
    fn default() -> Self {
        Self::new(crate::assets::io::MemoryAssetReader::new())
    }
}
