//! Repository trait definitions for data persistence

use dispatch_types::{BoardSnapshot, Payload, Result, Trucker};

/// Repository for the persisted board snapshot
///
/// Implementations store the two collections under fixed names in a
/// durable key-value store.
pub trait SnapshotRepository {
    /// Load the previously saved collections.
    ///
    /// Returns `Ok(None)` when no snapshot exists or the stored data does
    /// not parse; missing or corrupt data is never fatal and callers fall
    /// back to seed records.
    fn load(&self) -> Result<Option<BoardSnapshot>>;

    /// Persist both collections.
    fn save(&self, truckers: &[Trucker], payloads: &[Payload]) -> Result<()>;
}
