//! Sync orchestration for Lingo.
//!
//! Drives one full reconciliation: fetch the remote, local, and anchor
//! resource sets concurrently; three-way merge each language's entries;
//! persist the merged trees to the local and anchor stores; report any
//! conflicts. Conflicts are auto-resolved data, never failures: a sync
//! either aborts before writing anything (fetch error, malformed input) or
//! completes with a report.

pub mod error;
pub mod report;
pub mod syncer;

pub use error::{SyncError, SyncResult};
pub use report::SyncReport;
pub use syncer::Syncer;
