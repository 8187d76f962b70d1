//! Render-side object model
//!
//! The GPU-facing object tree that is actually drawn each frame:
//! - Geometry / Material: shareable resources, held by `Arc`
//! - RenderObject: a node in the render tree (group, mesh, light, camera)
//! - RenderScene: the top-level container the renderer draws
//! - primitives: procedural geometry builders
//!
//! The editor core only appends and removes objects here; it never reads
//! renderer-internal state.

pub mod geometry;
pub mod light;
pub mod material;
pub mod object;
pub mod primitives;
pub mod scene;

pub use geometry::Geometry;
pub use light::{Light, LightKind, LightType};
pub use material::Material;
pub use object::{Camera, Mesh, RenderKind, RenderObject};
pub use primitives::PrimitiveMesh;
pub use scene::{RenderHandle, RenderScene};
