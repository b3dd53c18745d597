//! Remote source interface for Lingo.
//!
//! The remote is the authoritative copy of every language's resources. The
//! sync engine only ever sees the [`RemoteSource`] trait; where the data
//! actually comes from (a staged snapshot document, a spreadsheet exporter
//! upstream in the pipeline, a test fixture) is an adapter concern.
//!
//! Any fetch failure is fatal to the sync that issued it: reconciliation
//! never runs against a partial remote.

pub mod error;
pub mod memory;
pub mod snapshot;
pub mod traits;

pub use error::{RemoteError, RemoteResult};
pub use memory::InMemoryRemote;
pub use snapshot::{RemoteSnapshot, SnapshotRemote, SNAPSHOT_FORMAT_VERSION};
pub use traits::RemoteSource;
