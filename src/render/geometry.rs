use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounds of a vertex set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

/// Indexed triangle geometry.
///
/// Geometry is immutable once built and shared between meshes through `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(default)]
    pub label: String,
    pub positions: Vec<[f32; 3]>,
    #[serde(default)]
    pub normals: Vec<[f32; 3]>,
    #[serde(default)]
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
}

impl Geometry {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns `None` for empty geometry.
    #[must_use]
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let mut iter = self.positions.iter().map(|p| Vec3::from_array(*p));
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(BoundingBox { min, max })
    }

    /// Checks that every index addresses an existing vertex and that the
    /// optional attribute arrays match the position count.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        let n = self.positions.len();
        self.indices.len() % 3 == 0
            && self.indices.iter().all(|&i| (i as usize) < n)
            && (self.normals.is_empty() || self.normals.len() == n)
            && (self.uvs.is_empty() || self.uvs.len() == n)
    }
}
