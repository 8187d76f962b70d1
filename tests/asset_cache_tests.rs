//! Resource Cache Tests
//!
//! Tests for:
//! - AssetStore: load once, reuse, retry after failure, concurrent ensure
//! - AssetServer: composed-model assembly from mesh + material
//! - Loaders reading JSON documents through MemoryAssetReader / FileAssetReader

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use emerald::assets::{AssetLoader, AssetReader, FileAssetReader, MemoryAssetReader};
use emerald::render::RenderKind;
use emerald::{
    AssetServer, AssetStore, Error, InMemoryModelRegistry, Material, ModelInfo, ModelType, NotFound,
    RenderObject,
};
use futures::future::{BoxFuture, FutureExt};

const CUBE_MESH: &str = r#"{
    "name": "crate",
    "meshes": [
        {
            "name": "body",
            "geometry": {
                "positions": [[0,0,0],[1,0,0],[0,1,0]],
                "indices": [0, 1, 2]
            }
        },
        {
            "name": "lid",
            "geometry": {
                "positions": [[0,0,1],[1,0,1],[0,1,1]],
                "indices": [0, 1, 2]
            },
            "material": { "color": [0.2, 0.2, 0.2] }
        }
    ]
}"#;

const RED_MATERIAL: &str = r#"{ "color": [1.0, 0.0, 0.0], "roughness": 0.4 }"#;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Counts loader invocations. Fails while `fail_first` is positive.
struct CountingLoader {
    calls: Arc<AtomicUsize>,
    fail_first: AtomicUsize,
}

impl CountingLoader {
    fn new(fail_first: usize) -> (Self, Arc<AtomicUsize>) {
        init_logging();
        let calls = Arc::new(AtomicUsize::new(0));
        let loader = Self {
            calls: Arc::clone(&calls),
            fail_first: AtomicUsize::new(fail_first),
        };
        (loader, calls)
    }
}

impl AssetLoader<String> for CountingLoader {
    fn load(&self, key: &str) -> BoxFuture<'static, anyhow::Result<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let fail = self
            .fail_first
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        let key = key.to_string();
        async move {
            if fail {
                anyhow::bail!("network unreachable");
            }
            Ok(format!("value of {key}"))
        }
        .boxed()
    }
}

/// Wraps a reader and counts reads per call.
struct CountingReader {
    inner: MemoryAssetReader,
    reads: Arc<AtomicUsize>,
}

impl AssetReader for CountingReader {
    async fn read_bytes(&self, path: &str) -> anyhow::Result<Vec<u8>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.read_bytes(path).await
    }
}

fn model_fixture() -> (AssetServer, InMemoryModelRegistry, Arc<AtomicUsize>) {
    init_logging();
    let inner = MemoryAssetReader::new();
    inner.insert("meshes/mesh-1.json", CUBE_MESH);
    inner.insert("materials/mat-red.json", RED_MATERIAL);
    let reads = Arc::new(AtomicUsize::new(0));
    let reader = CountingReader {
        inner,
        reads: Arc::clone(&reads),
    };

    let registry = InMemoryModelRegistry::new();
    registry.insert("model-1", ModelInfo::imported("mat-red", "mesh-1"));
    registry.insert("bare", ModelInfo::imported("", "mesh-1"));
    registry.insert("no-mesh", ModelInfo::imported("mat-red", ""));
    registry.insert(
        "sculpt",
        ModelInfo {
            model_type: ModelType::Procedural,
            material_id: String::new(),
            imported_mesh_id: String::new(),
        },
    );

    (AssetServer::new(reader), registry, reads)
}

fn mesh_materials(object: &RenderObject) -> Vec<Arc<Material>> {
    object
        .iter()
        .filter_map(RenderObject::as_mesh)
        .map(|m| Arc::clone(&m.material))
        .collect()
}

// ============================================================================
// AssetStore contract
// ============================================================================

#[test]
fn ensure_loads_once_and_then_hits() {
    let (loader, calls) = CountingLoader::new(0);
    let store = AssetStore::new("text", Arc::new(loader));

    let first = pollster::block_on(store.ensure("a")).unwrap();
    assert!(store.has("a"));
    assert_eq!(*store.get("a").unwrap(), "value of a");

    let second = pollster::block_on(store.ensure("a")).unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(store.len(), 1);
    assert_eq!(store.keys(), vec!["a".to_string()]);
}

#[test]
fn concurrent_ensure_shares_one_load() {
    let (loader, calls) = CountingLoader::new(0);
    let store = AssetStore::new("text", Arc::new(loader));

    let pending: Vec<_> = (0..4).map(|_| store.ensure("shared")).collect();
    let results = pollster::block_on(futures::future::join_all(pending));

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    let first = results[0].as_ref().unwrap();
    for result in &results {
        assert!(Arc::ptr_eq(first, result.as_ref().unwrap()));
    }
}

#[test]
fn failed_load_is_not_cached_and_can_retry() {
    let (loader, calls) = CountingLoader::new(1);
    let store = AssetStore::new("text", Arc::new(loader));

    let err = pollster::block_on(store.ensure("flaky")).unwrap_err();
    match err {
        Error::LoadFailure { store: name, key, reason } => {
            assert_eq!(name, "text");
            assert_eq!(key, "flaky");
            assert!(reason.contains("network unreachable"));
        }
        other => panic!("expected LoadFailure, got {other:?}"),
    }
    assert!(!store.has("flaky"));
    assert!(!store.is_loading("flaky"));

    let value = pollster::block_on(store.ensure("flaky")).unwrap();
    assert_eq!(*value, "value of flaky");
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn failure_reaches_every_waiter() {
    let (loader, calls) = CountingLoader::new(1);
    let store = AssetStore::new("text", Arc::new(loader));

    let a = store.ensure("k");
    let b = store.ensure("k");
    let (a, b) = pollster::block_on(futures::future::join(a, b));

    assert!(matches!(a, Err(Error::LoadFailure { .. })));
    assert!(matches!(b, Err(Error::LoadFailure { .. })));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn set_makes_value_available_without_loading() {
    let (loader, calls) = CountingLoader::new(0);
    let store = AssetStore::new("text", Arc::new(loader));

    store.set("k", "preset".to_string());
    let value = pollster::block_on(store.ensure("k")).unwrap();
    assert_eq!(*value, "preset");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

// ============================================================================
// Composed models
// ============================================================================

#[test]
fn assemble_model_applies_material_to_every_mesh() {
    let (server, registry, _) = model_fixture();

    let model = pollster::block_on(server.assemble_model("model-1", &registry)).unwrap();
    assert_eq!(model.mesh_count(), 2);
    for material in mesh_materials(&model) {
        assert_eq!(material.color, [1.0, 0.0, 0.0]);
        assert_eq!(material.name, "mat-red");
    }

    assert!(server.models.has("model-1"));
    assert!(server.imported_meshes.has("mesh-1"));
    assert!(server.materials.has("mat-red"));
}

#[test]
fn assemble_model_leaves_imported_mesh_untouched() {
    let (server, registry, _) = model_fixture();
    pollster::block_on(server.assemble_model("model-1", &registry)).unwrap();

    let pristine = server.imported_meshes.get("mesh-1").unwrap();
    let colors: Vec<[f32; 3]> = mesh_materials(&pristine).iter().map(|m| m.color).collect();
    assert_eq!(colors, vec![[1.0, 1.0, 1.0], [0.2, 0.2, 0.2]]);
}

#[test]
fn assemble_model_without_material_keeps_mesh_materials() {
    let (server, registry, _) = model_fixture();
    let model = pollster::block_on(server.assemble_model("bare", &registry)).unwrap();
    let colors: Vec<[f32; 3]> = mesh_materials(&model).iter().map(|m| m.color).collect();
    assert_eq!(colors, vec![[1.0, 1.0, 1.0], [0.2, 0.2, 0.2]]);
    assert!(server.materials.is_empty());
}

#[test]
fn assembled_model_is_reused() {
    let (server, registry, reads) = model_fixture();
    let first = pollster::block_on(server.assemble_model("model-1", &registry)).unwrap();
    let reads_after_first = reads.load(Ordering::SeqCst);
    let second = pollster::block_on(server.assemble_model("model-1", &registry)).unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(reads.load(Ordering::SeqCst), reads_after_first);
}

#[test]
fn concurrent_assembly_loads_each_dependency_once() {
    let (server, registry, reads) = model_fixture();

    let a = server.assemble_model("model-1", &registry);
    let b = server.assemble_model("model-1", &registry);
    let (a, b) = pollster::block_on(futures::future::join(a, b));
    a.unwrap();
    b.unwrap();

    // One mesh document plus one material document.
    assert_eq!(reads.load(Ordering::SeqCst), 2);
    assert_eq!(server.models.len(), 1);
}

#[test]
fn models_sharing_a_mesh_load_it_once() {
    let (server, registry, reads) = model_fixture();
    pollster::block_on(server.assemble_model("model-1", &registry)).unwrap();
    pollster::block_on(server.assemble_model("bare", &registry)).unwrap();

    assert_eq!(reads.load(Ordering::SeqCst), 2);
    assert_eq!(server.models.len(), 2);
}

#[test]
fn unknown_model_is_not_found() {
    let (server, registry, _) = model_fixture();
    let err = pollster::block_on(server.assemble_model("ghost", &registry)).unwrap_err();
    assert!(matches!(err, Error::NotFound(NotFound::Model(ref id)) if id == "ghost"));
}

#[test]
fn model_without_mesh_is_not_found() {
    let (server, registry, reads) = model_fixture();
    let err = pollster::block_on(server.assemble_model("no-mesh", &registry)).unwrap_err();
    assert!(matches!(err, Error::NotFound(NotFound::ModelMesh(_))));
    assert_eq!(reads.load(Ordering::SeqCst), 0);
}

#[test]
fn procedural_model_is_unsupported() {
    let (server, registry, _) = model_fixture();
    let err = pollster::block_on(server.assemble_model("sculpt", &registry)).unwrap_err();
    assert!(matches!(err, Error::UnsupportedPayload(_)));
}

#[test]
fn missing_document_is_a_load_failure_and_not_cached() {
    init_logging();
    let reader = MemoryAssetReader::new();
    let server = AssetServer::new(reader);
    let registry = InMemoryModelRegistry::new();
    registry.insert("m", ModelInfo::imported("", "absent"));

    let err = pollster::block_on(server.assemble_model("m", &registry)).unwrap_err();
    assert!(matches!(err, Error::LoadFailure { store: "imported mesh", .. }));
    assert!(!server.imported_meshes.has("absent"));
    assert!(!server.models.has("m"));
}

// ============================================================================
// Primitives
// ============================================================================

#[test]
fn preload_fills_primitive_store() {
    init_logging();
    let server = AssetServer::default();
    server.preload_primitives(&emerald::PrimitiveMesh::ALL);
    assert_eq!(server.primitive_meshes.len(), emerald::PrimitiveMesh::ALL.len());

    let cube = server.primitive_meshes.get("Cube").unwrap();
    assert_eq!(cube.label, "Cube");
}

#[test]
fn primitive_store_builds_on_demand() {
    init_logging();
    let server = AssetServer::default();
    let sphere = pollster::block_on(server.primitive_meshes.ensure("Sphere")).unwrap();
    assert!(sphere.is_well_formed());
    assert!(pollster::block_on(server.primitive_meshes.ensure("Teapot")).is_err());
}

// ============================================================================
// File reader
// ============================================================================

#[tokio::test]
async fn file_reader_feeds_the_mesh_store() {
    init_logging();
    let root = std::env::temp_dir().join(format!("emerald-assets-{}", uuid::Uuid::new_v4()));
    tokio::fs::create_dir_all(root.join("meshes")).await.unwrap();
    tokio::fs::write(root.join("meshes/crate.json"), CUBE_MESH).await.unwrap();

    let server = AssetServer::new(FileAssetReader::new(&root));
    let mesh = server.imported_meshes.ensure("crate").await.unwrap();
    assert!(matches!(mesh.kind, RenderKind::Group));
    assert_eq!(mesh.mesh_count(), 2);

    let missing = server.imported_meshes.ensure("nope").await;
    assert!(matches!(missing, Err(Error::LoadFailure { .. })));

    tokio::fs::remove_dir_all(&root).await.unwrap();
}
