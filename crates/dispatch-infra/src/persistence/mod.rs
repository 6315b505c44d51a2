//! Persistence implementations
//!
//! This module provides the file-based implementation of the repository
//! trait.

mod file_snapshot_repo;

pub use file_snapshot_repo::FileSnapshotRepository;
