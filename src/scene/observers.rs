use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::scene::graph::SceneGraph;

/// Handle returned by observer registration, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallbackToken(u64);

type ChangeCallback = Box<dyn FnMut(&SceneGraph) -> anyhow::Result<()>>;

/// Registry of structural-change observers.
///
/// Observers get no change payload; they re-query the graph they are
/// handed, which already reflects the edit. They run in
/// registration order. An observer that returns an error or panics is
/// logged and skipped, and the remaining observers still run.
#[derive(Default)]
pub struct ChangeObservers {
    next_token: u64,
    entries: Vec<(CallbackToken, ChangeCallback)>,
}

impl ChangeObservers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, callback: F) -> CallbackToken
    where
        F: FnMut(&SceneGraph) -> anyhow::Result<()> + 'static,
    {
        let token = CallbackToken(self.next_token);
        self.next_token += 1;
        self.entries.push((token, Box::new(callback)));
        token
    }

    /// Returns `false` if the token was not registered (already removed).
    pub fn remove(&mut self, token: CallbackToken) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(t, _)| *t != token);
        before != self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Invokes every observer once with `graph`. Returns how many of them
    /// failed.
    pub fn notify(&mut self, graph: &SceneGraph) -> usize {
        let mut failures = 0;
        for (token, callback) in &mut self.entries {
            match catch_unwind(AssertUnwindSafe(|| callback(graph))) {
                Ok(Ok(())) => {}
                Ok(Err(err)) => {
                    failures += 1;
                    log::error!("Scene change observer {token:?} failed: {err:#}");
                }
                Err(_) => {
                    failures += 1;
                    log::error!("Scene change observer {token:?} panicked");
                }
            }
        }
        failures
    }
}

impl fmt::Debug for ChangeObservers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeObservers")
            .field("registered", &self.entries.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn failing_observers_do_not_stop_the_rest() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut observers = ChangeObservers::new();

        observers.register(|_| anyhow::bail!("broken panel"));
        observers.register(|_| panic!("panicking panel"));
        let log = Rc::clone(&calls);
        observers.register(move |_| {
            log.borrow_mut().push("healthy");
            Ok(())
        });

        assert_eq!(observers.notify(&SceneGraph::default()), 2);
        assert_eq!(*calls.borrow(), ["healthy"]);
    }

    #[test]
    fn remove_unknown_token_is_noop() {
        let mut observers = ChangeObservers::new();
        let token = observers.register(|_| Ok(()));
        assert!(observers.remove(token));
        assert!(!observers.remove(token));
        assert!(observers.is_empty());
    }
}
