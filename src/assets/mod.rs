//! Resource cache
//!
//! Deduplicated loading of named render assets. See [`AssetStore`] for the
//! per-store contract and [`AssetServer`] for the composed-model protocol.

pub mod io;
pub mod loader;
pub mod registry;
pub mod server;
pub mod storage;

pub use io::{AssetReader, FileAssetReader, MemoryAssetReader};
pub use loader::{AssetLoader, ImportedMeshLoader, MaterialLoader, PrimitiveLoader};
pub use registry::{InMemoryModelRegistry, ModelInfo, ModelRegistry, ModelType};
pub use server::AssetServer;
pub use storage::{AssetStore, LoadFuture};
