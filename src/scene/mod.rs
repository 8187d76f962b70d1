//! Scene graph
//!
//! The editor-visible entity tree, kept separate from the render tree:
//! - SceneObject: identity, display name, category, render reference, children
//! - SceneGraph: owns the root and performs structural edits
//! - ChangeObservers: synchronous change notification for UI panels

pub mod graph;
pub mod object;
pub mod observers;

pub use graph::SceneGraph;
pub use object::{SceneObject, SceneObjectId, SceneObjectType};
pub use observers::{CallbackToken, ChangeObservers};
