use std::sync::Arc;

use glam::Vec3;

use crate::render::geometry::Geometry;
use crate::render::light::Light;
use crate::render::material::Material;

/// Drawable pairing of geometry and material.
///
/// Both resources are shared; cloning a mesh clones two `Arc`s.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub geometry: Arc<Geometry>,
    pub material: Arc<Material>,
}

impl Mesh {
    #[must_use]
    pub fn new(geometry: Arc<Geometry>, material: Arc<Material>) -> Self {
        Self { geometry, material }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fov: 70.0,
            aspect: 1.0,
            near: 0.001,
            far: 5000.0,
        }
    }
}

#[derive(Debug, Clone)]
pub enum RenderKind {
    Group,
    Mesh(Mesh),
    Light(Light),
    Camera(Camera),
}

/// A node of the render tree.
///
/// A render object belongs to exactly one parent (or one [`RenderScene`]
/// slot). Placing the same asset twice therefore needs a `clone()`, which
/// copies the node tree but keeps geometry and material shared.
///
/// [`RenderScene`]: crate::render::RenderScene
#[derive(Debug, Clone)]
pub struct RenderObject {
    pub name: String,
    pub kind: RenderKind,
    pub position: Vec3,
    pub scale: Vec3,
    pub visible: bool,
    pub children: Vec<RenderObject>,
}

impl RenderObject {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: RenderKind) -> Self {
        Self {
            name: name.into(),
            kind,
            position: Vec3::ZERO,
            scale: Vec3::ONE,
            visible: true,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn group(name: impl Into<String>) -> Self {
        Self::new(name, RenderKind::Group)
    }

    #[must_use]
    pub fn mesh(name: impl Into<String>, geometry: Arc<Geometry>, material: Arc<Material>) -> Self {
        Self::new(name, RenderKind::Mesh(Mesh::new(geometry, material)))
    }

    #[must_use]
    pub fn light(name: impl Into<String>, light: Light) -> Self {
        Self::new(name, RenderKind::Light(light))
    }

    #[must_use]
    pub fn with_child(mut self, child: RenderObject) -> Self {
        self.children.push(child);
        self
    }

    pub fn add_child(&mut self, child: RenderObject) {
        self.children.push(child);
    }

    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }

    #[must_use]
    pub fn as_mesh(&self) -> Option<&Mesh> {
        match &self.kind {
            RenderKind::Mesh(mesh) => Some(mesh),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_light(&self) -> Option<&Light> {
        match &self.kind {
            RenderKind::Light(light) => Some(light),
            _ => None,
        }
    }

    /// Depth-first pre-order iterator over this node and its descendants.
    pub fn iter(&self) -> impl Iterator<Item = &RenderObject> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    /// Number of mesh nodes in this subtree.
    #[must_use]
    pub fn mesh_count(&self) -> usize {
        self.iter().filter(|o| o.as_mesh().is_some()).count()
    }

    /// Assigns `material` to every mesh in this subtree.
    pub fn replace_material(&mut self, material: &Arc<Material>) {
        if let RenderKind::Mesh(mesh) = &mut self.kind {
            mesh.material = Arc::clone(material);
        }
        for child in &mut self.children {
            child.replace_material(material);
        }
    }
}
