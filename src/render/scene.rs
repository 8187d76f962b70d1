use slotmap::{SlotMap, new_key_type};

use crate::render::object::RenderObject;

new_key_type! {
    /// Reference from a scene object into the render scene.
    pub struct RenderHandle;
}

/// The render-engine object tree that is drawn each frame.
///
/// Only top-level objects live here; their children travel with them.
#[derive(Debug, Default)]
pub struct RenderScene {
    objects: SlotMap<RenderHandle, RenderObject>,
}

impl RenderScene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            objects: SlotMap::with_key(),
        }
    }

    pub fn add(&mut self, object: RenderObject) -> RenderHandle {
        log::trace!("render scene: add '{}'", object.name);
        self.objects.insert(object)
    }

    /// Detaches an object so the renderer stops drawing it.
    pub fn remove(&mut self, handle: RenderHandle) -> Option<RenderObject> {
        self.objects.remove(handle)
    }

    #[must_use]
    pub fn get(&self, handle: RenderHandle) -> Option<&RenderObject> {
        self.objects.get(handle)
    }

    pub fn get_mut(&mut self, handle: RenderHandle) -> Option<&mut RenderObject> {
        self.objects.get_mut(handle)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, handle: RenderHandle) -> bool {
        self.objects.contains_key(handle)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RenderHandle, &RenderObject)> {
        self.objects.iter()
    }
}
