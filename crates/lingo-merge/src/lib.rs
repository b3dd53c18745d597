//! Merge engine for Lingo.
//!
//! Implements the per-key three-way merge between a local working copy, an
//! anchor snapshot (the last merged state), and a remote authoritative copy.
//! Conflicts are detected, deterministically auto-resolved, and reported,
//! never raised as errors.

pub mod three_way;

pub use three_way::{merge, ConflictEntry, MergeResult};
