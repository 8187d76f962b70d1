//! Editor Context
//!
//! This module contains [`Editor`], the explicit context handle passed to
//! every editor action. It owns the two parallel trees and the handles
//! they are filled from:
//!
//! - **SceneGraph**: the editor-visible entity tree shown in the outliner
//! - **RenderScene**: the renderer-visible object tree
//! - **AssetServer**: the resource cache (shared, cheap to clone)
//! - **ModelRegistry**: read access to uploaded-model metadata
//!
//! # Pairing
//!
//! The two trees are not reconciled automatically. Every mutation that adds
//! or removes a render object goes through [`Editor::place`] or
//! [`Editor::remove_object`], which change both trees in one synchronous
//! step. That is why the scene graph is only exposed read-only here.
//!
//! # Example
//!
//! ```rust,ignore
//! use emerald::{Editor, EditorSettings, InMemoryModelRegistry};
//!
//! let registry = Arc::new(InMemoryModelRegistry::new());
//! let mut editor = Editor::new(EditorSettings::default(), assets, registry);
//!
//! let token = editor.register_on_change_callback(move |graph| {
//!     outliner.rebuild(graph.walk());
//!     Ok(())
//! });
//!
//! editor.handle_drop_text(&event_text).await?;
//! ```

use std::sync::Arc;

use glam::Vec3;

use crate::assets::{AssetServer, FileAssetReader, ModelRegistry};
use crate::drop_router::{self, DropPayload};
use crate::errors::{Error, NotFound, Result};
use crate::render::{RenderObject, RenderScene};
use crate::scene::{CallbackToken, SceneGraph, SceneObject, SceneObjectId, SceneObjectType};
use crate::settings::EditorSettings;

pub struct Editor {
    settings: EditorSettings,
    scene_graph: SceneGraph,
    render_scene: RenderScene,
    assets: AssetServer,
    registry: Arc<dyn ModelRegistry>,
}

impl Editor {
    /// Creates an editor session with an empty level.
    ///
    /// The primitives listed in `settings.preload_primitives` are built into
    /// the primitive store right away.
    #[must_use]
    pub fn new(settings: EditorSettings, assets: AssetServer, registry: Arc<dyn ModelRegistry>) -> Self {
        assets.preload_primitives(&settings.preload_primitives);
        log::info!(
            "Editor session started ({} primitive meshes ready)",
            assets.primitive_meshes.len()
        );
        Self {
            scene_graph: SceneGraph::new(settings.root_name.clone()),
            render_scene: RenderScene::new(),
            assets,
            registry,
            settings,
        }
    }

    /// Creates an editor session whose meshes and materials are read from
    /// `settings.asset_root` on disk.
    #[must_use]
    pub fn with_file_assets(settings: EditorSettings, registry: Arc<dyn ModelRegistry>) -> Self {
        let assets = AssetServer::new(FileAssetReader::new(&settings.asset_root));
        Self::new(settings, assets, registry)
    }

    #[inline]
    #[must_use]
    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    #[inline]
    #[must_use]
    pub fn scene_graph(&self) -> &SceneGraph {
        &self.scene_graph
    }

    #[inline]
    #[must_use]
    pub fn render_scene(&self) -> &RenderScene {
        &self.render_scene
    }

    #[inline]
    #[must_use]
    pub fn assets(&self) -> &AssetServer {
        &self.assets
    }

    #[inline]
    #[must_use]
    pub fn registry(&self) -> &Arc<dyn ModelRegistry> {
        &self.registry
    }

    // ========================================================================
    // Paired mutations
    // ========================================================================

    /// Adds `object` to the render scene and a matching scene object under
    /// `parent`. Nothing is changed if `parent` does not exist.
    pub fn place(
        &mut self,
        parent: SceneObjectId,
        name: impl Into<String>,
        kind: SceneObjectType,
        object: RenderObject,
    ) -> Result<SceneObjectId> {
        if !self.scene_graph.contains(parent) {
            return Err(NotFound::SceneObject(parent).into());
        }

        let name = name.into();
        let handle = self.render_scene.add(object);
        let entity = SceneObject::new(name.clone(), Some(handle), kind, true);

        match self.scene_graph.add(parent, entity) {
            Ok(id) => {
                log::info!("Placed {kind:?} '{name}' ({id})");
                Ok(id)
            }
            Err(err) => {
                self.render_scene.remove(handle);
                Err(err)
            }
        }
    }

    /// [`place`](Self::place) under the root.
    pub fn place_under_root(
        &mut self,
        name: impl Into<String>,
        kind: SceneObjectType,
        object: RenderObject,
    ) -> Result<SceneObjectId> {
        let root = self.scene_graph.root_id();
        self.place(root, name, kind, object)
    }

    /// Removes `id` and its subtree from the scene graph and drops every
    /// render object they referenced.
    pub fn remove_object(&mut self, id: SceneObjectId) -> Result<SceneObject> {
        let removed = self.scene_graph.remove(id)?;
        let mut dropped = 0;
        for (_, object) in removed.walk() {
            if let Some(handle) = object.render_ref()
                && self.render_scene.remove(handle).is_some()
            {
                dropped += 1;
            }
        }
        log::info!("Removed '{}' ({id}), released {dropped} render object(s)", removed.name);
        Ok(removed)
    }

    pub fn rename(&mut self, id: SceneObjectId, name: impl Into<String>) -> Result<()> {
        self.scene_graph.rename(id, name)
    }

    /// Reparents a scene object. Render objects stay top level in the render
    /// scene; only the editor hierarchy changes.
    pub fn move_to(&mut self, id: SceneObjectId, new_parent: SceneObjectId) -> Result<()> {
        self.scene_graph.move_to(id, new_parent)
    }

    /// Sets the scale of the render object behind a scene object.
    pub fn set_scale(&mut self, id: SceneObjectId, scale: Vec3) -> Result<()> {
        let object = self.scene_graph.find(id)?;
        let handle = object
            .render_ref()
            .ok_or_else(|| Error::InvalidOperation(format!("scene object {id} has no render object")))?;
        let render = self
            .render_scene
            .get_mut(handle)
            .ok_or_else(|| Error::InvalidOperation(format!("render object of {id} is gone")))?;
        render.set_scale(scale);
        Ok(())
    }

    // ========================================================================
    // Observers
    // ========================================================================

    pub fn register_on_change_callback<F>(&mut self, callback: F) -> CallbackToken
    where
        F: FnMut(&SceneGraph) -> anyhow::Result<()> + 'static,
    {
        self.scene_graph.register_on_change_callback(callback)
    }

    pub fn remove_on_change_callback(&mut self, token: CallbackToken) {
        self.scene_graph.remove_on_change_callback(token);
    }

    // ========================================================================
    // Drag and drop
    // ========================================================================

    /// Places the asset described by `payload` under the root.
    pub async fn handle_drop(&mut self, payload: DropPayload) -> Result<SceneObjectId> {
        drop_router::route(self, payload).await
    }

    /// Parses the transfer text of a drop event and places its asset.
    pub async fn handle_drop_text(&mut self, text: &str) -> Result<SceneObjectId> {
        let payload = DropPayload::parse(text)?;
        self.handle_drop(payload).await
    }
}
