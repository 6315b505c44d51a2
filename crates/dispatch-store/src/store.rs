//! Entity store owning the trucker and payload collections
//!
//! Single writer: every mutation of the two collections goes through this
//! store. Each successful mutation persists a snapshot; persistence
//! failures are logged and never roll back the in-memory state.

use dispatch_domain::repository::SnapshotRepository;
use dispatch_domain::service as rules;
use dispatch_types::{
    BoardSnapshot, ConflictError, FilterMode, Payload, PayloadDraft, PayloadStatus, Result,
    Trucker, TruckerDraft, ValidationError,
};
use tracing::{debug, warn};

/// In-memory store for both collections, persisted on every mutation
pub struct DispatchStore {
    truckers: Vec<Trucker>,
    payloads: Vec<Payload>,
    repo: Box<dyn SnapshotRepository>,
}

impl DispatchStore {
    /// Open the store, loading the persisted snapshot once.
    ///
    /// An absent or unparseable snapshot falls back to the seed records.
    pub fn open(repo: Box<dyn SnapshotRepository>, seed: BoardSnapshot) -> Self {
        let snapshot = match repo.load() {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => seed,
            Err(e) => {
                warn!("failed to load board snapshot, using seed data: {e}");
                seed
            }
        };
        Self {
            truckers: snapshot.truckers,
            payloads: snapshot.payloads,
            repo,
        }
    }

    /// Save both collections; failure only warns, state stays authoritative
    fn persist(&self) {
        if let Err(e) = self.repo.save(&self.truckers, &self.payloads) {
            warn!("failed to persist board snapshot: {e}");
        }
    }

    // --- read accessors ---

    pub fn truckers(&self) -> &[Trucker] {
        &self.truckers
    }

    pub fn payloads(&self) -> &[Payload] {
        &self.payloads
    }

    pub fn trucker(&self, id: &str) -> Option<&Trucker> {
        self.truckers.iter().find(|t| t.id == id)
    }

    pub fn payload(&self, id: &str) -> Option<&Payload> {
        self.payloads.iter().find(|p| p.id == id)
    }

    /// Payloads matching the filter, original order preserved
    pub fn filtered_payloads(&self, mode: FilterMode) -> Vec<&Payload> {
        rules::filter_payloads(&self.payloads, mode)
    }

    /// Whether the trucker currently holds an active load
    pub fn is_trucker_assigned(&self, trucker_id: &str) -> bool {
        rules::is_trucker_assigned(&self.payloads, trucker_id)
    }

    /// The trucker's active load, if any
    pub fn current_assignment_for(&self, trucker_id: &str) -> Option<&Payload> {
        rules::current_assignment_for(&self.payloads, trucker_id)
    }

    // --- mutations ---

    /// Insert a new trucker from a draft, returning its id
    pub fn add_trucker(&mut self, draft: TruckerDraft) -> Result<String> {
        if draft.name.trim().is_empty() {
            return Err(ValidationError::EmptyTruckerName.into());
        }
        let trucker = Trucker::from_draft(draft);
        let id = trucker.id.clone();
        self.truckers.push(trucker);
        self.persist();
        Ok(id)
    }

    /// Insert a new unassigned payload from a draft, returning its id
    pub fn add_payload(&mut self, draft: PayloadDraft) -> Result<String> {
        if draft.description.trim().is_empty() {
            return Err(ValidationError::EmptyPayloadDescription.into());
        }
        let payload = Payload::from_draft(draft);
        let id = payload.id.clone();
        self.payloads.push(payload);
        self.persist();
        Ok(id)
    }

    /// Replace a trucker's mutable fields; no-op when the id is unknown
    pub fn update_trucker(&mut self, id: &str, draft: TruckerDraft) -> bool {
        let Some(trucker) = self.truckers.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        trucker.name = draft.name;
        trucker.phone = draft.phone;
        trucker.truck = draft.truck;
        self.persist();
        true
    }

    /// Replace a payload's draft fields; status and assignment are untouched
    pub fn update_payload(&mut self, id: &str, draft: PayloadDraft) -> bool {
        let Some(payload) = self.payloads.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        payload.description = draft.description;
        payload.origin = draft.origin;
        payload.destination = draft.destination;
        payload.pickup_date = draft.pickup_date;
        payload.pickup_time = draft.pickup_time;
        payload.delivery_date = draft.delivery_date;
        self.persist();
        true
    }

    /// Remove a trucker unless a non-completed payload still references it
    pub fn delete_trucker(&mut self, id: &str) -> Result<bool> {
        if rules::is_trucker_assigned(&self.payloads, id) {
            return Err(ConflictError::TruckerHasActiveAssignment(id.to_string()).into());
        }
        let before = self.truckers.len();
        self.truckers.retain(|t| t.id != id);
        let removed = self.truckers.len() != before;
        if removed {
            self.persist();
        }
        Ok(removed)
    }

    /// Remove a payload unconditionally
    pub fn delete_payload(&mut self, id: &str) -> bool {
        let before = self.payloads.len();
        self.payloads.retain(|p| p.id != id);
        let removed = self.payloads.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    /// Link a trucker to a payload.
    ///
    /// Compare-and-set: applies only while the payload is an eligible drop
    /// target and the trucker exists without an active load. Losing
    /// attempts are dropped, not queued.
    pub fn assign(&mut self, payload_id: &str, trucker_id: &str) -> bool {
        if self.trucker(trucker_id).is_none()
            || rules::is_trucker_assigned(&self.payloads, trucker_id)
        {
            debug!(payload_id, trucker_id, "assignment dropped: trucker unavailable");
            return false;
        }
        let Some(payload) = self.payloads.iter_mut().find(|p| p.id == payload_id) else {
            return false;
        };
        if !(payload.assigned_trucker.is_none() && payload.is_active()) {
            debug!(payload_id, trucker_id, "assignment dropped: payload not eligible");
            return false;
        }
        payload.assigned_trucker = Some(trucker_id.to_string());
        payload.status = PayloadStatus::Assigned;
        self.persist();
        true
    }

    /// Clear a payload's assignment and reset it to unassigned.
    ///
    /// No-op on completed payloads; idempotent otherwise.
    pub fn unassign(&mut self, payload_id: &str) -> bool {
        let Some(payload) = self.payloads.iter_mut().find(|p| p.id == payload_id) else {
            return false;
        };
        if payload.status == PayloadStatus::Completed {
            return false;
        }
        let changed =
            payload.assigned_trucker.is_some() || payload.status != PayloadStatus::Unassigned;
        payload.assigned_trucker = None;
        payload.status = PayloadStatus::Unassigned;
        if changed {
            self.persist();
        }
        changed
    }

    /// Advance an assigned payload to in-transit; no-op from any other status
    pub fn advance_to_in_transit(&mut self, payload_id: &str) -> bool {
        let Some(payload) = self.payloads.iter_mut().find(|p| p.id == payload_id) else {
            return false;
        };
        if payload.status != PayloadStatus::Assigned {
            return false;
        }
        payload.status = PayloadStatus::InTransit;
        self.persist();
        true
    }

    /// Mark a payload completed; allowed from any non-completed status.
    ///
    /// Completed payloads are frozen: every other mutation's preconditions
    /// reject them from then on.
    pub fn complete(&mut self, payload_id: &str) -> bool {
        let Some(payload) = self.payloads.iter_mut().find(|p| p.id == payload_id) else {
            return false;
        };
        if payload.status == PayloadStatus::Completed {
            return false;
        }
        payload.status = PayloadStatus::Completed;
        self.persist();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::empty_store;

    fn store_with(seed: BoardSnapshot) -> DispatchStore {
        DispatchStore::open(Box::new(crate::testutil::NullRepository), seed)
    }

    #[test]
    fn test_add_trucker_defaults() {
        let mut store = empty_store();
        let id = store.add_trucker(TruckerDraft::new("Ann")).unwrap();
        assert_eq!(store.truckers().len(), 1);
        let trucker = store.trucker(&id).unwrap();
        assert_eq!(trucker.name, "Ann");
        assert_eq!(trucker.phone, "");
        assert_eq!(trucker.truck, "");
    }

    #[test]
    fn test_add_trucker_requires_name() {
        let mut store = empty_store();
        assert!(store.add_trucker(TruckerDraft::new("   ")).is_err());
        assert!(store.truckers().is_empty());
    }

    #[test]
    fn test_add_payload_requires_description() {
        let mut store = empty_store();
        assert!(store.add_payload(PayloadDraft::new("")).is_err());
        assert!(store.payloads().is_empty());
    }

    #[test]
    fn test_add_payload_starts_unassigned() {
        let mut store = empty_store();
        let id = store.add_payload(PayloadDraft::new("Pallet")).unwrap();
        let payload = store.payload(&id).unwrap();
        assert_eq!(payload.status, PayloadStatus::Unassigned);
        assert!(payload.assigned_trucker.is_none());
    }

    #[test]
    fn test_assign_then_delete_trucker_conflicts() {
        let mut store = empty_store();
        let trucker = store.add_trucker(TruckerDraft::new("Ann")).unwrap();
        let payload = store.add_payload(PayloadDraft::new("Pallet")).unwrap();

        assert!(store.assign(&payload, &trucker));
        let p = store.payload(&payload).unwrap();
        assert_eq!(p.status, PayloadStatus::Assigned);
        assert_eq!(p.assigned_trucker.as_deref(), Some(trucker.as_str()));

        let err = store.delete_trucker(&trucker).unwrap_err();
        assert!(matches!(err, dispatch_types::Error::Conflict(_)));
        assert_eq!(store.truckers().len(), 1);
    }

    #[test]
    fn test_assign_is_compare_and_set() {
        let mut store = empty_store();
        let t1 = store.add_trucker(TruckerDraft::new("Ann")).unwrap();
        let t2 = store.add_trucker(TruckerDraft::new("Bob")).unwrap();
        let payload = store.add_payload(PayloadDraft::new("Pallet")).unwrap();

        assert!(store.assign(&payload, &t1));
        // second attempt loses the race and is dropped
        assert!(!store.assign(&payload, &t2));
        assert_eq!(
            store.payload(&payload).unwrap().assigned_trucker.as_deref(),
            Some(t1.as_str())
        );
    }

    #[test]
    fn test_one_active_load_per_trucker() {
        let mut store = empty_store();
        let trucker = store.add_trucker(TruckerDraft::new("Ann")).unwrap();
        let p1 = store.add_payload(PayloadDraft::new("first")).unwrap();
        let p2 = store.add_payload(PayloadDraft::new("second")).unwrap();

        assert!(store.assign(&p1, &trucker));
        assert!(!store.assign(&p2, &trucker));

        // completing the first load frees the trucker again
        assert!(store.complete(&p1));
        assert!(store.assign(&p2, &trucker));

        let active: Vec<_> = store
            .payloads()
            .iter()
            .filter(|p| p.assigned_trucker.as_deref() == Some(trucker.as_str()) && p.is_active())
            .collect();
        assert_eq!(active.len(), 1);
    }

    #[test]
    fn test_assign_unknown_trucker_dropped() {
        let mut store = empty_store();
        let payload = store.add_payload(PayloadDraft::new("Pallet")).unwrap();
        assert!(!store.assign(&payload, "no-such-trucker"));
        assert_eq!(
            store.payload(&payload).unwrap().status,
            PayloadStatus::Unassigned
        );
    }

    #[test]
    fn test_unassign_idempotent() {
        let mut store = empty_store();
        let trucker = store.add_trucker(TruckerDraft::new("Ann")).unwrap();
        let payload = store.add_payload(PayloadDraft::new("Pallet")).unwrap();
        store.assign(&payload, &trucker);

        assert!(store.unassign(&payload));
        let first = store.payload(&payload).unwrap().clone();
        assert!(!store.unassign(&payload));
        let second = store.payload(&payload).unwrap();
        assert_eq!(first.status, second.status);
        assert_eq!(second.status, PayloadStatus::Unassigned);
        assert!(second.assigned_trucker.is_none());
    }

    #[test]
    fn test_lifecycle_walk_and_terminal_completed() {
        let mut store = empty_store();
        let trucker = store.add_trucker(TruckerDraft::new("Ann")).unwrap();
        let payload = store.add_payload(PayloadDraft::new("Pallet")).unwrap();

        assert!(store.assign(&payload, &trucker));
        assert!(store.advance_to_in_transit(&payload));
        assert_eq!(
            store.payload(&payload).unwrap().status,
            PayloadStatus::InTransit
        );
        assert!(store.complete(&payload));
        assert_eq!(
            store.payload(&payload).unwrap().status,
            PayloadStatus::Completed
        );

        // completed payloads are frozen
        assert!(!store.unassign(&payload));
        assert!(!store.advance_to_in_transit(&payload));
        assert!(!store.complete(&payload));
        assert!(!store.assign(&payload, &trucker));
        let p = store.payload(&payload).unwrap();
        assert_eq!(p.status, PayloadStatus::Completed);
        assert_eq!(p.assigned_trucker.as_deref(), Some(trucker.as_str()));
    }

    #[test]
    fn test_advance_requires_assigned() {
        let mut store = empty_store();
        let payload = store.add_payload(PayloadDraft::new("Pallet")).unwrap();
        assert!(!store.advance_to_in_transit(&payload));
        assert_eq!(
            store.payload(&payload).unwrap().status,
            PayloadStatus::Unassigned
        );
    }

    #[test]
    fn test_complete_from_unassigned() {
        let mut store = empty_store();
        let payload = store.add_payload(PayloadDraft::new("Pallet")).unwrap();
        assert!(store.complete(&payload));
        let p = store.payload(&payload).unwrap();
        assert_eq!(p.status, PayloadStatus::Completed);
        assert!(p.assigned_trucker.is_none());
    }

    #[test]
    fn test_update_trucker_replaces_fields() {
        let mut store = empty_store();
        let id = store
            .add_trucker(TruckerDraft::new("Ann").with_phone("555-0000"))
            .unwrap();
        assert!(store.update_trucker(
            &id,
            TruckerDraft::new("Ann Smith").with_truck("Kenworth #3")
        ));
        let trucker = store.trucker(&id).unwrap();
        assert_eq!(trucker.name, "Ann Smith");
        assert_eq!(trucker.phone, "");
        assert_eq!(trucker.truck, "Kenworth #3");

        assert!(!store.update_trucker("missing", TruckerDraft::new("x")));
    }

    #[test]
    fn test_update_payload_keeps_assignment() {
        let mut store = empty_store();
        let trucker = store.add_trucker(TruckerDraft::new("Ann")).unwrap();
        let payload = store.add_payload(PayloadDraft::new("Pallet")).unwrap();
        store.assign(&payload, &trucker);

        assert!(store.update_payload(
            &payload,
            PayloadDraft::new("Pallet - fragile").with_route("A", "B")
        ));
        let p = store.payload(&payload).unwrap();
        assert_eq!(p.description, "Pallet - fragile");
        assert_eq!(p.status, PayloadStatus::Assigned);
        assert_eq!(p.assigned_trucker.as_deref(), Some(trucker.as_str()));
    }

    #[test]
    fn test_delete_payload_unconditional() {
        let mut store = empty_store();
        let trucker = store.add_trucker(TruckerDraft::new("Ann")).unwrap();
        let payload = store.add_payload(PayloadDraft::new("Pallet")).unwrap();
        store.assign(&payload, &trucker);

        assert!(store.delete_payload(&payload));
        assert!(store.payload(&payload).is_none());
        assert!(store.filtered_payloads(FilterMode::All).is_empty());
        // the trucker is free again
        assert!(!store.is_trucker_assigned(&trucker));
        assert!(!store.delete_payload(&payload));
    }

    #[test]
    fn test_delete_trucker_with_completed_load_allowed() {
        let mut store = empty_store();
        let trucker = store.add_trucker(TruckerDraft::new("Ann")).unwrap();
        let payload = store.add_payload(PayloadDraft::new("Pallet")).unwrap();
        store.assign(&payload, &trucker);
        store.complete(&payload);

        assert!(store.delete_trucker(&trucker).unwrap());
        assert!(store.trucker(&trucker).is_none());
    }

    #[test]
    fn test_open_falls_back_to_seed() {
        let seed = BoardSnapshot {
            truckers: vec![Trucker::from_draft(TruckerDraft::new("Seed"))],
            payloads: Vec::new(),
        };
        let store = store_with(seed);
        assert_eq!(store.truckers().len(), 1);
        assert_eq!(store.truckers()[0].name, "Seed");
    }
}
