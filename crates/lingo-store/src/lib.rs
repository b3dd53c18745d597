//! File-per-language persistence for Lingo.
//!
//! A store holds one resource tree per language under a single root
//! directory, one versioned JSON document per language (`en.json`,
//! `ko.json`, ...). The same store type backs both the working copy and the
//! anchor snapshot; they simply point at different roots.
//!
//! # Design Rules
//!
//! 1. Reading a missing root is an empty store, not an error.
//! 2. Writing replaces the whole root (remove-then-recreate), so stale
//!    language files never survive a sync.
//! 3. Trees are canonicalized before serialization, so output is diff-stable.
//! 4. Documents carry a format version; unknown versions are rejected on
//!    read rather than misparsed.
//! 5. All I/O errors are propagated, never silently ignored.

pub mod document;
pub mod error;
pub mod fs;
pub mod memory;
pub mod traits;

pub use document::{LanguageDocument, FORMAT_VERSION};
pub use error::{StoreError, StoreResult};
pub use fs::FsResourceStore;
pub use memory::InMemoryResourceStore;
pub use traits::ResourceStore;
