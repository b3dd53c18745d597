use async_trait::async_trait;
use lingo_types::ResourceSet;

use crate::error::RemoteResult;

/// Source of the authoritative resource copy.
///
/// `fetch_all` returns every language the remote knows about in one call;
/// there is no per-language fetch. Implementations must either return the
/// complete set or fail: a partial result would silently delete the
/// missing languages on the next sync.
#[async_trait]
pub trait RemoteSource: Send + Sync {
    /// Fetch every language's tree from the remote.
    async fn fetch_all(&self) -> RemoteResult<ResourceSet>;
}
