use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelType {
    /// Uploaded and processed server side into an imported mesh plus a material.
    Imported,
    /// Authored in the editor; has no imported mesh to compose from.
    Procedural,
}

/// Uploaded-model metadata as published by the backend.
///
/// An empty id means the model has no dependency of that kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    #[serde(rename = "type")]
    pub model_type: ModelType,
    #[serde(rename = "materialID", default)]
    pub material_id: String,
    #[serde(rename = "importedMeshID", default)]
    pub imported_mesh_id: String,
}

impl ModelInfo {
    #[must_use]
    pub fn imported(material_id: impl Into<String>, imported_mesh_id: impl Into<String>) -> Self {
        Self {
            model_type: ModelType::Imported,
            material_id: material_id.into(),
            imported_mesh_id: imported_mesh_id.into(),
        }
    }
}

/// Read access to uploaded-model metadata owned by the host application.
pub trait ModelRegistry: Send + Sync {
    fn lookup(&self, model_id: &str) -> Option<ModelInfo>;
}

/// A [`ModelRegistry`] backed by a hash map, filled by the host as uploads
/// are announced.
#[derive(Debug, Default)]
pub struct InMemoryModelRegistry {
    models: RwLock<FxHashMap<String, ModelInfo>>,
}

impl InMemoryModelRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, model_id: impl Into<String>, info: ModelInfo) {
        self.models.write().insert(model_id.into(), info);
    }

    pub fn remove(&self, model_id: &str) -> Option<ModelInfo> {
        self.models.write().remove(model_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.models.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.read().is_empty()
    }
}

impl ModelRegistry for InMemoryModelRegistry {
    fn lookup(&self, model_id: &str) -> Option<ModelInfo> {
        self.models.read().get(model_id).cloned()
    }
}
