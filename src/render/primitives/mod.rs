//! Procedural primitive geometry
//!
//! The basic shapes offered in the editor's shape palette. Each kind is
//! built once into the primitive store and shared by every placed instance.

mod box_shape;
mod cylinder;
mod plane;
mod sphere;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::render::geometry::Geometry;

pub use box_shape::create_box;
pub use cylinder::{CylinderOptions, create_cylinder};
pub use plane::{PlaneOptions, create_plane};
pub use sphere::{SphereOptions, create_sphere};

/// Primitive shapes that can be dropped into the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveMesh {
    Cube,
    Sphere,
    Plane,
    Cylinder,
    Cone,
}

impl PrimitiveMesh {
    pub const ALL: [PrimitiveMesh; 5] = [
        PrimitiveMesh::Cube,
        PrimitiveMesh::Sphere,
        PrimitiveMesh::Plane,
        PrimitiveMesh::Cylinder,
        PrimitiveMesh::Cone,
    ];

    /// Key under which this primitive is cached in the primitive store.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            PrimitiveMesh::Cube => "Cube",
            PrimitiveMesh::Sphere => "Sphere",
            PrimitiveMesh::Plane => "Plane",
            PrimitiveMesh::Cylinder => "Cylinder",
            PrimitiveMesh::Cone => "Cone",
        }
    }

    /// Builds the unit-sized geometry for this primitive.
    #[must_use]
    pub fn build(self) -> Geometry {
        let mut geometry = match self {
            PrimitiveMesh::Cube => create_box(1.0, 1.0, 1.0),
            PrimitiveMesh::Sphere => create_sphere(&SphereOptions::default()),
            PrimitiveMesh::Plane => create_plane(&PlaneOptions::default()),
            PrimitiveMesh::Cylinder => create_cylinder(&CylinderOptions::default()),
            PrimitiveMesh::Cone => create_cylinder(&CylinderOptions {
                radius_top: 0.0,
                ..CylinderOptions::default()
            }),
        };
        geometry.label = self.key().to_string();
        geometry
    }
}

impl fmt::Display for PrimitiveMesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PrimitiveMesh {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrimitiveMesh::ALL
            .into_iter()
            .find(|p| p.key() == s)
            .ok_or_else(|| format!("unknown primitive mesh '{s}'"))
    }
}
