use async_trait::async_trait;
use lingo_types::ResourceSet;

use crate::error::StoreResult;

/// Per-language resource persistence.
///
/// All implementations must satisfy these invariants:
/// - A missing backing location reads as an empty set, not an error
///   (first-ever syncs start from nothing).
/// - `write_all` replaces the entire contents of the backing location;
///   languages absent from the new set do not survive the write.
/// - An individual unreadable or malformed document is an error, never
///   silently skipped.
#[async_trait]
pub trait ResourceStore: Send + Sync {
    /// Read every language's tree from the backing location.
    async fn read_all(&self) -> StoreResult<ResourceSet>;

    /// Replace the backing location's contents with the given set.
    async fn write_all(&self, resources: &ResourceSet) -> StoreResult<()>;
}
