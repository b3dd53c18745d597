//! In-memory resource store for tests and embedding.

use std::sync::Mutex;

use async_trait::async_trait;
use lingo_types::ResourceSet;

use crate::error::StoreResult;
use crate::traits::ResourceStore;

/// A `ResourceStore` backed by a mutex-guarded map. Reads and writes clone
/// the whole set; intended for tests, not large datasets.
#[derive(Default)]
pub struct InMemoryResourceStore {
    inner: Mutex<ResourceSet>,
}

impl InMemoryResourceStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with the given set.
    pub fn with_resources(resources: ResourceSet) -> Self {
        Self {
            inner: Mutex::new(resources),
        }
    }

    /// A copy of the current contents, for test assertions.
    pub fn snapshot(&self) -> ResourceSet {
        self.inner.lock().expect("store mutex poisoned").clone()
    }
}

#[async_trait]
impl ResourceStore for InMemoryResourceStore {
    async fn read_all(&self) -> StoreResult<ResourceSet> {
        Ok(self.snapshot())
    }

    async fn write_all(&self, resources: &ResourceSet) -> StoreResult<()> {
        *self.inner.lock().expect("store mutex poisoned") = resources.clone();
        Ok(())
    }
}
