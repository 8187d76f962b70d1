use std::sync::Arc;

use glam::Vec3;

use crate::drop_router::DropPayload;
use crate::editor::Editor;
use crate::errors::{NotFound, Result};
use crate::render::{Light, LightType, Material, PrimitiveMesh, RenderObject};
use crate::scene::{SceneObjectId, SceneObjectType};

/// Places the asset named by `payload` under the root of `editor`.
///
/// Exactly one scene object and one top-level render object are added on
/// success. On any error neither tree is touched.
pub async fn route(editor: &mut Editor, payload: DropPayload) -> Result<SceneObjectId> {
    log::debug!("drop: {payload:?}");
    match payload {
        DropPayload::Model(model_id) => place_model(editor, &model_id).await,
        DropPayload::BasicShape(kind) => place_basic_shape(editor, kind),
        DropPayload::Light(light_type) => place_light(editor, light_type),
    }
}

/// Places a copy of the composed model `model_id`, assembling it first if
/// it is not cached yet.
///
/// Concurrent drops of the same uncached model each run their own
/// assembly; the stores still load each dependency once. The editor is
/// borrowed mutably across the await, so such drops need one `Editor` per
/// task sharing a cloned [`AssetServer`](crate::AssetServer); on a single
/// editor, drops complete one after another.
pub async fn place_model(editor: &mut Editor, model_id: &str) -> Result<SceneObjectId> {
    let assets = editor.assets().clone();
    let registry = Arc::clone(editor.registry());
    let model = assets.assemble_model(model_id, registry.as_ref()).await?;

    let mut object = (*model).clone();
    object.set_scale(Vec3::splat(editor.settings().model_display_scale));

    let name = editor.settings().default_object_name.clone();
    editor.place_under_root(name, SceneObjectType::MeshObject, object)
}

/// Places a new mesh sharing the preloaded geometry of `kind`, with a fresh
/// standard material.
pub fn place_basic_shape(editor: &mut Editor, kind: PrimitiveMesh) -> Result<SceneObjectId> {
    let geometry = editor
        .assets()
        .primitive_meshes
        .get(kind.key())
        .ok_or_else(|| NotFound::Asset {
            store: editor.assets().primitive_meshes.name(),
            key: kind.key().to_string(),
        })?;

    let name = editor.settings().default_object_name.clone();
    let object = RenderObject::mesh(name.clone(), geometry, Arc::new(Material::standard()));
    editor.place_under_root(name, SceneObjectType::MeshObject, object)
}

/// Places a light of `light_type` with the configured default color and
/// intensity.
pub fn place_light(editor: &mut Editor, light_type: LightType) -> Result<SceneObjectId> {
    let settings = editor.settings();
    let light = Light::from_type(
        light_type,
        Vec3::from_array(settings.light_color),
        settings.light_intensity,
        settings.rect_area_size,
    );

    let name = light_type.display_name();
    editor.place_under_root(name, SceneObjectType::Light, RenderObject::light(name, light))
}
