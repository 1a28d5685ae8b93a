//! Run-wide registry of URLs that have already been emitted.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

/// Set of canonical URLs seen during one run.
///
/// Shared by the discovery and listing stages. Every mutation goes through
/// the inner lock, so the registry can be handed to concurrent workers.
#[derive(Debug, Default)]
pub struct SeenRegistry {
    urls: Mutex<HashSet<String>>,
}

impl SeenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `url`. Returns `true` if it was not seen before.
    pub fn insert_if_absent(&self, url: &str) -> bool {
        let mut urls = self.lock();
        if urls.contains(url) {
            return false;
        }
        urls.insert(url.to_string())
    }

    pub fn contains(&self, url: &str) -> bool {
        self.lock().contains(url)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<String>> {
        self.urls.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
