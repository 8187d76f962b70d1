use serde::{Deserialize, Serialize};

/// Physically based standard material.
///
/// Decoded from `materials/<id>.json` documents for imported models, or
/// built with [`Material::standard`] for primitive shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    pub name: String,
    /// Base colour, linear RGB.
    pub color: [f32; 3],
    pub roughness: f32,
    pub metalness: f32,
    pub emissive: [f32; 3],
    pub opacity: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self::standard()
    }
}

impl Material {
    /// White, fully rough, non-metallic.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            name: String::new(),
            color: [1.0, 1.0, 1.0],
            roughness: 1.0,
            metalness: 0.0,
            emissive: [0.0, 0.0, 0.0],
            opacity: 1.0,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }
}
