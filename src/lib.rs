#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod assets;
pub mod drop_router;
pub mod editor;
pub mod errors;
pub mod render;
pub mod scene;
pub mod settings;

pub use assets::{AssetServer, AssetStore, InMemoryModelRegistry, ModelInfo, ModelRegistry, ModelType};
pub use drop_router::{DropObjectType, DropPayload};
pub use editor::Editor;
pub use errors::{Error, NotFound, Result};
pub use render::{Light, LightType, Material, PrimitiveMesh, RenderHandle, RenderObject, RenderScene};
pub use scene::{CallbackToken, SceneGraph, SceneObject, SceneObjectId, SceneObjectType};
pub use settings::EditorSettings;
