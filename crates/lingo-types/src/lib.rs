//! Foundation types for Lingo.
//!
//! This crate provides the resource data model shared by every other Lingo
//! crate: the ordered, nested [`ResourceTree`], its [`ResourceNode`] entries,
//! and the flat path-keyed representations used by the merge engine.
//!
//! # Key Types
//!
//! - [`ResourceTree`] — Ordered nested mapping from key to leaf string or subtree
//! - [`ResourceNode`] — A single entry: leaf value or nested branch
//! - [`FlatEntries`] — Dot-joined path → leaf value map
//! - [`ResourceSet`] — Language code → resource tree map

pub mod resource;

pub use resource::{FlatEntries, ResourceNode, ResourceSet, ResourceTree};
