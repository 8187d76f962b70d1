//! Editor Settings
//!
//! Placement defaults used by the drop router and the editor context.
//!
//! ```rust,ignore
//! use emerald::EditorSettings;
//!
//! // Defaults match the stock editor
//! let settings = EditorSettings::default();
//!
//! // Host supplied overrides; missing fields keep their defaults
//! let settings = EditorSettings::from_json_str(r#"{ "model_display_scale": 0.1 }"#)?;
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::render::primitives::PrimitiveMesh;

/// 0x40 / 0xFF, the channel value of the stock soft white light colour.
const SOFT_WHITE: f32 = 64.0 / 255.0;

/// Configuration for an [`Editor`](crate::Editor) session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Uniform scale applied to every placed model instance.
    pub model_display_scale: f32,
    /// Display name given to placed meshes and models.
    pub default_object_name: String,
    /// Display name of the root scene object.
    pub root_name: String,
    /// Colour of newly placed lights (linear RGB).
    pub light_color: [f32; 3],
    /// Intensity of newly placed lights.
    pub light_intensity: f32,
    /// Width and height of newly placed rect-area lights.
    pub rect_area_size: [f32; 2],
    /// Primitive geometries built into the primitive store on startup.
    pub preload_primitives: Vec<PrimitiveMesh>,
    /// Root directory for [`FileAssetReader`](crate::assets::FileAssetReader).
    pub asset_root: PathBuf,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            model_display_scale: 0.04,
            default_object_name: "Untitled".to_string(),
            root_name: "Level".to_string(),
            light_color: [SOFT_WHITE; 3],
            light_intensity: 1.0,
            rect_area_size: [1.0, 1.0],
            preload_primitives: PrimitiveMesh::ALL.to_vec(),
            asset_root: PathBuf::from("assets"),
        }
    }
}

impl EditorSettings {
    /// Parses settings from a JSON document.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
