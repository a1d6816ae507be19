use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use strum_macros::{AsRefStr, Display};
use tracing::debug;

/// Lists that are expensive to build and therefore computed once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum CacheKey {
    Capabilities,
    Signals,
}

type Cell = Arc<OnceLock<Arc<Vec<String>>>>;

/// Write-once storage for candidate lists.
///
/// Each key is computed at most once for the lifetime of the cache. When the
/// first accesses race, exactly one computation runs and every caller gets the
/// same `Arc`. Entries are never invalidated.
#[derive(Debug, Default)]
pub struct StaticCache {
    cells: Mutex<HashMap<CacheKey, Cell>>,
}

impl StaticCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute<F>(&self, key: CacheKey, compute: F) -> Arc<Vec<String>>
    where
        F: FnOnce() -> Vec<String>,
    {
        // The map lock is only held to fetch the cell; the computation itself
        // is serialized by the cell.
        let cell = {
            let mut cells = self.cells.lock().unwrap_or_else(PoisonError::into_inner);
            cells.entry(key).or_default().clone()
        };

        cell.get_or_init(|| {
            let values = compute();
            debug!(key = %key, count = values.len(), "Computed static candidate list");
            Arc::new(values)
        })
        .clone()
    }

    /// Returns the list for `key` if it has already been computed.
    pub fn get(&self, key: CacheKey) -> Option<Arc<Vec<String>>> {
        let cells = self.cells.lock().unwrap_or_else(PoisonError::into_inner);
        cells.get(&key).and_then(|cell| cell.get().cloned())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Barrier;
    use std::thread;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_computes_once() {
        let cache = StaticCache::new();
        let calls = AtomicUsize::new(0);
        let compute = || {
            calls.fetch_add(1, Ordering::SeqCst);
            vec!["a".to_string(), "b".to_string()]
        };

        let first = cache.get_or_compute(CacheKey::Signals, compute);
        let second = cache.get_or_compute(CacheKey::Signals, compute);

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(*first, vec!["a", "b"]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_keys_are_independent() {
        let cache = StaticCache::new();
        let caps = cache.get_or_compute(CacheKey::Capabilities, || vec!["ALL".to_string()]);
        let signals = cache.get_or_compute(CacheKey::Signals, || vec!["TERM".to_string()]);

        assert_eq!(*caps, vec!["ALL"]);
        assert_eq!(*signals, vec!["TERM"]);
    }

    #[test]
    fn test_get_before_and_after_compute() {
        let cache = StaticCache::new();
        assert_eq!(cache.get(CacheKey::Capabilities), None);

        cache.get_or_compute(CacheKey::Capabilities, || vec!["ALL".to_string()]);
        assert_eq!(cache.get(CacheKey::Capabilities).unwrap().as_slice(), ["ALL"]);
    }

    #[test]
    fn test_concurrent_first_access_computes_once() {
        const THREADS: usize = 16;
        let cache = Arc::new(StaticCache::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let barrier = Arc::new(Barrier::new(THREADS));

        let handles = (0..THREADS)
            .map(|_| {
                let cache = cache.clone();
                let calls = calls.clone();
                let barrier = barrier.clone();
                thread::spawn(move || {
                    barrier.wait();
                    cache.get_or_compute(CacheKey::Capabilities, || {
                        calls.fetch_add(1, Ordering::SeqCst);
                        thread::sleep(std::time::Duration::from_millis(10));
                        vec!["ALL".to_string(), "CAP_CHOWN".to_string()]
                    })
                })
            })
            .collect::<Vec<_>>();

        let results = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect::<Vec<_>>();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(results.len(), THREADS);
        assert!(results.iter().all(|list| Arc::ptr_eq(list, &results[0])));
    }

    #[test]
    fn test_key_names() {
        assert_eq!(CacheKey::Capabilities.to_string(), "capabilities");
        assert_eq!(CacheKey::Signals.as_ref(), "signals");
    }
}
