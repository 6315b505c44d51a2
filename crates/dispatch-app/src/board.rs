//! Dispatch board facade for view collaborators
//!
//! Wires the persistence layer, the entity store and the selection
//! controller behind one object. A view layer calls the command methods
//! and reads the derived views; it never touches the collections
//! directly.

use std::path::PathBuf;

use dispatch_infra::persistence::FileSnapshotRepository;
use dispatch_infra::seed;
use dispatch_store::{DispatchStore, SelectionController};
use dispatch_types::{
    FilterMode, Payload, PayloadDraft, Result, Trucker, TruckerDraft,
};

/// The assembled dispatch board
pub struct DispatchBoard {
    store: DispatchStore,
    selection: SelectionController,
}

impl DispatchBoard {
    /// Open the board backed by the given data directory.
    ///
    /// The persisted snapshot is loaded exactly once, before any other
    /// operation; a first run starts from the seed records.
    pub fn open(data_dir: PathBuf) -> Result<Self> {
        let repo = FileSnapshotRepository::open(data_dir)?;
        let store = DispatchStore::open(Box::new(repo), seed::default_board());
        Ok(Self {
            store,
            selection: SelectionController::new(),
        })
    }

    // --- read accessors ---

    pub fn truckers(&self) -> &[Trucker] {
        self.store.truckers()
    }

    pub fn trucker(&self, id: &str) -> Option<&Trucker> {
        self.store.trucker(id)
    }

    pub fn payload(&self, id: &str) -> Option<&Payload> {
        self.store.payload(id)
    }

    /// Payloads matching the filter, original order preserved
    pub fn payloads(&self, mode: FilterMode) -> Vec<&Payload> {
        self.store.filtered_payloads(mode)
    }

    pub fn is_trucker_assigned(&self, trucker_id: &str) -> bool {
        self.store.is_trucker_assigned(trucker_id)
    }

    pub fn current_assignment_for(&self, trucker_id: &str) -> Option<&Payload> {
        self.store.current_assignment_for(trucker_id)
    }

    /// The trucker currently picked for assignment, if still valid
    pub fn pending_trucker(&self) -> Option<&Trucker> {
        self.selection.pending_in(&self.store)
    }

    // --- entity commands ---

    pub fn add_trucker(&mut self, draft: TruckerDraft) -> Result<String> {
        self.store.add_trucker(draft)
    }

    pub fn add_payload(&mut self, draft: PayloadDraft) -> Result<String> {
        self.store.add_payload(draft)
    }

    pub fn update_trucker(&mut self, id: &str, draft: TruckerDraft) -> bool {
        self.store.update_trucker(id, draft)
    }

    pub fn update_payload(&mut self, id: &str, draft: PayloadDraft) -> bool {
        self.store.update_payload(id, draft)
    }

    pub fn delete_trucker(&mut self, id: &str) -> Result<bool> {
        self.store.delete_trucker(id)
    }

    pub fn delete_payload(&mut self, id: &str) -> bool {
        self.store.delete_payload(id)
    }

    // --- assignment commands ---

    /// Assign a trucker to a payload.
    ///
    /// Routed through pick → drop so the one-shot path and the two-step
    /// interactive path enforce identical eligibility rules.
    pub fn assign(&mut self, payload_id: &str, trucker_id: &str) -> bool {
        // a leftover interactive pick would toggle off instead of picking
        self.selection.cancel();
        if !self.selection.pick_trucker(&self.store, trucker_id) {
            return false;
        }
        let applied = self.selection.drop_on_payload(&mut self.store, payload_id);
        if !applied {
            self.selection.cancel();
        }
        applied
    }

    /// Pick a trucker (or toggle the pick off); returns whether a
    /// selection is held afterwards
    pub fn pick_trucker(&mut self, trucker_id: &str) -> bool {
        self.selection.pick_trucker(&self.store, trucker_id)
    }

    /// Resolve the pending selection onto a payload
    pub fn drop_on_payload(&mut self, payload_id: &str) -> bool {
        self.selection.drop_on_payload(&mut self.store, payload_id)
    }

    /// Drop any pending selection
    pub fn cancel_selection(&mut self) {
        self.selection.cancel();
    }

    pub fn unassign(&mut self, payload_id: &str) -> bool {
        self.store.unassign(payload_id)
    }

    pub fn advance_to_in_transit(&mut self, payload_id: &str) -> bool {
        self.store.advance_to_in_transit(payload_id)
    }

    pub fn complete(&mut self, payload_id: &str) -> bool {
        self.store.complete(payload_id)
    }
}
