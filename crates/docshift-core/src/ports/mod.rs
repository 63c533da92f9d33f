//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the transforms expect from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `walkdir` or `std::fs` types in any signature
//! - Filesystem methods are one-shot: each opens, completes, and closes its
//!   file before returning
//! - Events are fire-and-forget; emitters never fail a run

pub mod event_emitter;
pub mod filesystem;

pub use event_emitter::{NoopEmitter, TransformEventEmitter};
pub use filesystem::{EntryKind, FileSystem, FsError, WalkEntry};

#[cfg(test)]
pub use filesystem::MockFileSystem;
