//! External dimension-source sync for the pivot widget.
//!
//! The pivot-dimension variant does not emit host events; instead its
//! `rows`/`columns` panels mirror an external table's axis assignment.
//! This crate provides:
//! - `DimensionSource` / `TableLookup` traits describing the external
//!   source, injected at construction rather than found through any
//!   ambient host registry
//! - `SyncAdapter` with `pull` (external → registry) and `push`
//!   (registry → external)
//! - `MemoryDimensionHost`, an in-memory host for the driver and tests
//!
//! A pull is a reset, never a user mutation: it writes panels directly
//! and cannot fan out into a push, so no pull→push→pull cycle can form.

pub mod adapter;
pub mod memory;
pub mod source;

pub use adapter::{SyncAdapter, SyncOutcome};
pub use memory::{MemoryDimensionHost, MemoryTable};
pub use source::{DimensionSource, TableLookup};
