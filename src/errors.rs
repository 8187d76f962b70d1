//! Error Types
//!
//! This module defines the error types used throughout the editor core.
//!
//! # Overview
//!
//! The main error type [`Error`] covers all failure modes including:
//! - Scene graph lookups and rejected structural edits
//! - Asynchronous asset fetch/decode failures
//! - Malformed or unsupported drop payloads
//!
//! # Usage
//!
//! All public APIs return [`Result<T>`] which is an alias for `std::result::Result<T, Error>`.
//!
//! ```rust,ignore
//! use emerald::errors::{Error, Result};
//!
//! fn remove_selected(editor: &mut Editor, id: SceneObjectId) -> Result<()> {
//!     editor.remove_object(id)?;
//!     Ok(())
//! }
//! ```
//!
//! [`Error`] is `Clone` so that a single failed load can be handed to every
//! waiter of a shared in-flight operation.

use thiserror::Error;

use crate::scene::SceneObjectId;

/// Describes what could not be found.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFound {
    /// No scene object with this id exists in the graph.
    #[error("scene object {0}")]
    SceneObject(SceneObjectId),

    /// A resource key is absent from one of the asset stores.
    #[error("{store} entry '{key}'")]
    Asset {
        /// Name of the store that was queried
        store: &'static str,
        /// The missing key
        key: String,
    },

    /// The model registry has no metadata for this model id.
    #[error("model '{0}' in model registry")]
    Model(String),

    /// The model has no imported mesh to compose from.
    #[error("imported mesh for model '{0}'")]
    ModelMesh(String),
}

/// The main error type for the editor core.
#[derive(Error, Debug, Clone)]
pub enum Error {
    // ========================================================================
    // Scene Graph Errors
    // ========================================================================
    /// An entity id or resource key was absent where it was required.
    #[error("Not found: {0}")]
    NotFound(#[from] NotFound),

    /// A structural edit that would break tree integrity.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    // ========================================================================
    // Asset Loading Errors
    // ========================================================================
    /// Asynchronous asset fetch or decode failed.
    #[error("Failed to load {store} '{key}': {reason}")]
    LoadFailure {
        /// Name of the store that issued the load
        store: &'static str,
        /// Key being loaded
        key: String,
        /// Rendered cause chain
        reason: String,
    },

    // ========================================================================
    // Drop Payload Errors
    // ========================================================================
    /// The drop payload (or a settings document) could not be parsed.
    #[error("Parse failure: {0}")]
    ParseFailure(String),

    /// A well-formed payload that the drop router does not handle.
    #[error("Unsupported payload: {0}")]
    UnsupportedPayload(String),
}

impl Error {
    /// Wraps a loader failure with the store and key it belongs to.
    pub(crate) fn load_failure(store: &'static str, key: &str, err: &anyhow::Error) -> Self {
        Error::LoadFailure {
            store,
            key: key.to_string(),
            reason: format!("{err:#}"),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ParseFailure(err.to_string())
    }
}

/// Alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
