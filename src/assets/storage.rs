use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use futures::future::{BoxFuture, FutureExt, Shared};
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::assets::loader::AssetLoader;
use crate::errors::{Error, NotFound, Result};

/// A pending or completed load, shared by every caller that asked for it.
pub type LoadFuture<T> = Shared<BoxFuture<'static, Result<Arc<T>>>>;

enum Slot<T> {
    Ready(Arc<T>),
    Loading { load_id: u64, future: LoadFuture<T> },
}

type Slots<T> = FxHashMap<String, Slot<T>>;

/// One keyed store of the resource cache.
///
/// # Contract
///
/// - [`ensure`](Self::ensure) loads on miss and reuses on hit.
/// - At most one load per key is in flight; concurrent callers share it.
/// - A resolved entry is terminal and reused for the rest of the session.
/// - A failed load is not cached, so a later `ensure` retries.
///
/// Values are handed out as `Arc<T>`. Callers that need to place a value
/// in a tree clone it out of the `Arc`.
pub struct AssetStore<T> {
    name: &'static str,
    slots: Arc<Mutex<Slots<T>>>,
    loader: Option<Arc<dyn AssetLoader<T>>>,
    next_load_id: AtomicU64,
}

impl<T: Send + Sync + 'static> AssetStore<T> {
    #[must_use]
    pub fn new(name: &'static str, loader: Arc<dyn AssetLoader<T>>) -> Self {
        Self {
            name,
            slots: Arc::default(),
            loader: Some(loader),
            next_load_id: AtomicU64::new(0),
        }
    }

    /// A store that is only filled through [`set`](Self::set); `ensure` on a
    /// missing key fails with `NotFound`.
    #[must_use]
    pub fn without_loader(name: &'static str) -> Self {
        Self {
            name,
            slots: Arc::default(),
            loader: None,
            next_load_id: AtomicU64::new(0),
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// `true` only for resolved entries, not for in-flight loads.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        matches!(self.slots.lock().get(key), Some(Slot::Ready(_)))
    }

    #[must_use]
    pub fn is_loading(&self, key: &str) -> bool {
        matches!(self.slots.lock().get(key), Some(Slot::Loading { .. }))
    }

    /// Returns the resolved value. Never starts a load.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Arc<T>> {
        match self.slots.lock().get(key) {
            Some(Slot::Ready(value)) => Some(Arc::clone(value)),
            _ => None,
        }
    }

    /// Inserts or overwrites a resolved value.
    ///
    /// Overwriting an in-flight key makes the set value win: the pending
    /// load still completes for its waiters but does not replace it.
    pub fn set(&self, key: impl Into<String>, value: impl Into<Arc<T>>) -> Arc<T> {
        let value = value.into();
        let key = key.into();
        log::debug!("{}: set '{key}'", self.name);
        self.slots.lock().insert(key, Slot::Ready(Arc::clone(&value)));
        value
    }

    /// Number of resolved entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots
            .lock()
            .values()
            .filter(|s| matches!(s, Slot::Ready(_)))
            .count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keys of resolved entries, in no particular order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.slots
            .lock()
            .iter()
            .filter(|(_, s)| matches!(s, Slot::Ready(_)))
            .map(|(k, _)| k.clone())
            .collect()
    }

    /// Resolves `key`, loading it if needed.
    ///
    /// The in-flight entry is registered before this returns, so two calls
    /// made back to back share one load even if neither has been polled.
    pub fn ensure(&self, key: &str) -> LoadFuture<T> {
        let mut slots = self.slots.lock();

        match slots.get(key) {
            Some(Slot::Ready(value)) => {
                log::debug!("{}: hit '{key}'", self.name);
                let value = Arc::clone(value);
                return futures::future::ready(Ok(value)).boxed().shared();
            }
            Some(Slot::Loading { future, .. }) => {
                log::debug!("{}: joining in-flight load of '{key}'", self.name);
                return future.clone();
            }
            None => {}
        }

        let Some(loader) = &self.loader else {
            let err = Error::NotFound(NotFound::Asset {
                store: self.name,
                key: key.to_string(),
            });
            return futures::future::ready(Err(err)).boxed().shared();
        };

        log::debug!("{}: miss '{key}', loading", self.name);
        let load_id = self.next_load_id.fetch_add(1, Ordering::Relaxed);
        let pending = loader.load(key);
        let store = self.name;
        let owned_key = key.to_string();
        let slots_ref = Arc::clone(&self.slots);

        let future = async move {
            let result = pending
                .await
                .map(Arc::new)
                .map_err(|e| Error::load_failure(store, &owned_key, &e));

            let mut slots = slots_ref.lock();
            let still_ours = matches!(
                slots.get(&owned_key),
                Some(Slot::Loading { load_id: id, .. }) if *id == load_id
            );
            match &result {
                Ok(value) => {
                    if still_ours {
                        slots.insert(owned_key, Slot::Ready(Arc::clone(value)));
                    }
                }
                Err(err) => {
                    log::error!("{err}");
                    if still_ours {
                        slots.remove(&owned_key);
                    }
                }
            }
            result
        }
        .boxed()
        .shared();

        slots.insert(
            key.to_string(),
            Slot::Loading {
                load_id,
                future: future.clone(),
            },
        );
        future
    }
}
