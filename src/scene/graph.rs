use crate::errors::{Error, NotFound, Result};
use crate::scene::object::{SceneObject, SceneObjectId, SceneObjectType};
use crate::scene::observers::{CallbackToken, ChangeObservers};

/// The editable entity tree.
///
/// There is exactly one root, created with the graph and never removable.
/// Every successful structural edit notifies the registered observers
/// synchronously, before the editing call returns. Failed edits leave the
/// tree untouched and notify no one.
///
/// Lookups are linear depth-first searches from the root, which is fine at
/// editor scale (hundreds of objects).
#[derive(Debug)]
pub struct SceneGraph {
    root: SceneObject,
    observers: ChangeObservers,
}

impl SceneGraph {
    /// Creates a graph whose root is a non-selectable `Level` object.
    #[must_use]
    pub fn new(root_name: impl Into<String>) -> Self {
        Self::with_root(SceneObject::new(root_name, None, SceneObjectType::Level, false))
    }

    #[must_use]
    pub fn with_root(root: SceneObject) -> Self {
        Self {
            root,
            observers: ChangeObservers::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> &SceneObject {
        &self.root
    }

    #[inline]
    #[must_use]
    pub fn root_id(&self) -> SceneObjectId {
        self.root.id()
    }

    /// Total number of objects, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.root.subtree_len()
    }

    /// Always `false`: a graph has at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn contains(&self, id: SceneObjectId) -> bool {
        self.root.find(id).is_some()
    }

    pub fn find(&self, id: SceneObjectId) -> Result<&SceneObject> {
        self.root
            .find(id)
            .ok_or(Error::NotFound(NotFound::SceneObject(id)))
    }

    /// Canonical outliner order: depth-first pre-order from the root.
    pub fn walk(&self) -> impl Iterator<Item = (usize, &SceneObject)> {
        self.root.walk()
    }

    // ========================================================================
    // Structural edits
    // ========================================================================

    /// Appends `object` as the last child of `parent_id`.
    ///
    /// Returns the id of the inserted object. Fails with `NotFound` if the
    /// parent does not exist, or `InvalidOperation` if any id in the incoming
    /// subtree is already present in the graph.
    pub fn add(&mut self, parent_id: SceneObjectId, object: SceneObject) -> Result<SceneObjectId> {
        if let Some((_, dup)) = object.walk().find(|(_, o)| self.contains(o.id())) {
            log::warn!("Rejected add of scene object {}: id already in graph", dup.id());
            return Err(Error::InvalidOperation(format!(
                "scene object {} is already in the graph",
                dup.id()
            )));
        }

        let parent = self
            .root
            .find_mut(parent_id)
            .ok_or(Error::NotFound(NotFound::SceneObject(parent_id)))?;

        let id = object.id();
        log::debug!("Scene graph: add '{}' ({id}) under {parent_id}", object.name);
        parent.children.push(object);

        self.notify();
        Ok(id)
    }

    /// Detaches `id` and its subtree, handing the detached objects back to
    /// the caller. The root cannot be removed.
    pub fn remove(&mut self, id: SceneObjectId) -> Result<SceneObject> {
        if id == self.root.id() {
            log::warn!("Rejected removal of the scene root");
            return Err(Error::InvalidOperation("cannot remove the root scene object".into()));
        }

        let removed = self
            .root
            .detach(id)
            .ok_or(Error::NotFound(NotFound::SceneObject(id)))?;

        log::debug!(
            "Scene graph: removed '{}' ({id}) with {} descendant(s)",
            removed.name,
            removed.subtree_len() - 1
        );

        self.notify();
        Ok(removed)
    }

    /// Reparents `id` as the last child of `new_parent_id`.
    ///
    /// The root cannot be moved, and an object cannot be moved under itself
    /// or any of its descendants.
    pub fn move_to(&mut self, id: SceneObjectId, new_parent_id: SceneObjectId) -> Result<()> {
        if id == self.root.id() {
            return Err(Error::InvalidOperation("cannot move the root scene object".into()));
        }

        let subject = self.find(id)?;
        if subject.find(new_parent_id).is_some() {
            return Err(Error::InvalidOperation(format!(
                "cannot move scene object {id} under its own subtree"
            )));
        }
        if !self.contains(new_parent_id) {
            return Err(Error::NotFound(NotFound::SceneObject(new_parent_id)));
        }

        // Both ends were validated above, so neither step can fail midway.
        let Some(object) = self.root.detach(id) else {
            return Err(Error::NotFound(NotFound::SceneObject(id)));
        };
        let Some(parent) = self.root.find_mut(new_parent_id) else {
            return Err(Error::NotFound(NotFound::SceneObject(new_parent_id)));
        };
        parent.children.push(object);

        log::debug!("Scene graph: moved {id} under {new_parent_id}");
        self.notify();
        Ok(())
    }

    /// Changes the display name of an object.
    pub fn rename(&mut self, id: SceneObjectId, name: impl Into<String>) -> Result<()> {
        let object = self
            .root
            .find_mut(id)
            .ok_or(Error::NotFound(NotFound::SceneObject(id)))?;
        object.name = name.into();

        self.notify();
        Ok(())
    }

    // ========================================================================
    // Change notification
    // ========================================================================

    /// Subscribes an observer to structural changes.
    pub fn register_on_change_callback<F>(&mut self, callback: F) -> CallbackToken
    where
        F: FnMut(&SceneGraph) -> anyhow::Result<()> + 'static,
    {
        self.observers.register(callback)
    }

    /// Runs the observers against the edited graph. The list is moved out
    /// for the duration so each observer can borrow `self` immutably.
    fn notify(&mut self) {
        let mut observers = std::mem::take(&mut self.observers);
        observers.notify(self);
        self.observers = observers;
    }

    /// Unsubscribes an observer. Removing an unknown token is a no-op.
    pub fn remove_on_change_callback(&mut self, token: CallbackToken) {
        if !self.observers.remove(token) {
            log::debug!("Change callback {token:?} was already removed");
        }
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new("Level")
    }
}
