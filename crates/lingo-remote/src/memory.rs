//! In-memory remote fixture for tests.

use async_trait::async_trait;
use lingo_types::ResourceSet;

use crate::error::{RemoteError, RemoteResult};
use crate::traits::RemoteSource;

/// A `RemoteSource` serving a fixed set, or failing on demand to exercise
/// fetch-abort paths.
#[derive(Default)]
pub struct InMemoryRemote {
    resources: ResourceSet,
    failure: Option<String>,
}

impl InMemoryRemote {
    /// A remote that serves the given set.
    pub fn with_resources(resources: ResourceSet) -> Self {
        Self {
            resources,
            failure: None,
        }
    }

    /// A remote whose every fetch fails with a transport error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            resources: ResourceSet::new(),
            failure: Some(message.into()),
        }
    }
}

#[async_trait]
impl RemoteSource for InMemoryRemote {
    async fn fetch_all(&self) -> RemoteResult<ResourceSet> {
        match &self.failure {
            Some(message) => Err(RemoteError::Transport(message.clone())),
            None => Ok(self.resources.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lingo_types::{ResourceNode, ResourceTree};

    #[tokio::test]
    async fn serves_fixed_resources() {
        let mut en = ResourceTree::new();
        en.insert("k", ResourceNode::leaf("v"));
        let mut set = ResourceSet::new();
        set.insert("en".to_owned(), en);

        let remote = InMemoryRemote::with_resources(set.clone());
        assert_eq!(remote.fetch_all().await.unwrap(), set);
    }

    #[tokio::test]
    async fn failing_remote_reports_transport_error() {
        let remote = InMemoryRemote::failing("sheet API quota exceeded");
        match remote.fetch_all().await {
            Err(RemoteError::Transport(message)) => {
                assert_eq!(message, "sheet API quota exceeded");
            }
            other => panic!("expected transport error, got {other:?}"),
        }
    }
}
