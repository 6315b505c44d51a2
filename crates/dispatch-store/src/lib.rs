//! Entity store and selection state for the dispatch board

mod selection;
mod store;

pub use selection::SelectionController;
pub use store::DispatchStore;

#[cfg(test)]
pub(crate) mod testutil {
    use dispatch_domain::repository::SnapshotRepository;
    use dispatch_types::{BoardSnapshot, Payload, Result, Trucker};

    /// Snapshot repository that never loads and discards saves
    pub struct NullRepository;

    impl SnapshotRepository for NullRepository {
        fn load(&self) -> Result<Option<BoardSnapshot>> {
            Ok(None)
        }

        fn save(&self, _truckers: &[Trucker], _payloads: &[Payload]) -> Result<()> {
            Ok(())
        }
    }

    pub fn empty_store() -> crate::DispatchStore {
        crate::DispatchStore::open(Box::new(NullRepository), BoardSnapshot::default())
    }
}
