use std::fmt;

use uuid::Uuid;

use crate::render::RenderHandle;

/// Stable identity of a scene object, assigned at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SceneObjectId(Uuid);

impl SceneObjectId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[inline]
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SceneObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SceneObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Closed set of scene object categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneObjectType {
    Level,
    MeshObject,
    Light,
    Camera,
    Unknown,
}

impl SceneObjectType {
    /// Icon identifier shown next to the object in the outliner.
    #[must_use]
    pub fn icon_name(self) -> &'static str {
        match self {
            SceneObjectType::Level => "map",
            SceneObjectType::MeshObject => "3d-rotation",
            SceneObjectType::Light => "light-mode",
            SceneObjectType::Camera => "video-camera",
            SceneObjectType::Unknown => "question-mark",
        }
    }
}

/// A node of the scene graph.
///
/// A scene object owns its children, so tree membership is exclusive by
/// construction: an object can only be inserted by moving it in. It is not
/// `Clone`; duplicating an object would duplicate its id.
#[derive(Debug)]
pub struct SceneObject {
    id: SceneObjectId,
    pub name: String,
    kind: SceneObjectType,
    render_ref: Option<RenderHandle>,
    selectable: bool,
    pub(crate) children: Vec<SceneObject>,
}

impl SceneObject {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        render_ref: Option<RenderHandle>,
        kind: SceneObjectType,
        selectable: bool,
    ) -> Self {
        Self {
            id: SceneObjectId::new(),
            name: name.into(),
            kind,
            render_ref,
            selectable,
            children: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> SceneObjectId {
        self.id
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> SceneObjectType {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn render_ref(&self) -> Option<RenderHandle> {
        self.render_ref
    }

    #[inline]
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[SceneObject] {
        &self.children
    }

    /// Builder-style child attachment for assembling detached subtrees.
    #[must_use]
    pub fn with_child(mut self, child: SceneObject) -> Self {
        self.children.push(child);
        self
    }

    /// Depth-first pre-order walk yielding `(depth, object)`, with this
    /// object at depth 0. This is the outliner's enumeration order.
    pub fn walk(&self) -> impl Iterator<Item = (usize, &SceneObject)> {
        let mut stack = vec![(0, self)];
        std::iter::from_fn(move || {
            let (depth, node) = stack.pop()?;
            stack.extend(node.children.iter().rev().map(|c| (depth + 1, c)));
            Some((depth, node))
        })
    }

    /// Number of objects in this subtree, including itself.
    #[must_use]
    pub fn subtree_len(&self) -> usize {
        self.walk().count()
    }

    pub(crate) fn find(&self, id: SceneObjectId) -> Option<&SceneObject> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    pub(crate) fn find_mut(&mut self, id: SceneObjectId) -> Option<&mut SceneObject> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(id))
    }

    /// Detaches the descendant `id` from its parent, searching depth first.
    pub(crate) fn detach(&mut self, id: SceneObjectId) -> Option<SceneObject> {
        if let Some(pos) = self.children.iter().position(|c| c.id == id) {
            return Some(self.children.remove(pos));
        }
        self.children.iter_mut().find_map(|c| c.detach(id))
    }
}
