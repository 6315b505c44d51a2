//! Selection state for the two-step assignment flow
//!
//! Tracks the one trucker tentatively picked for assignment. The pointer
//! drag path and the click-pick path of a view layer both land here, so
//! every input modality resolves into the identical store assignment.
//!
//! The pending id is a non-owning reference: it is re-validated against
//! the live collections before every use rather than trusted, so a
//! trucker deleted or assigned through another path silently drops the
//! selection back to idle.

use crate::DispatchStore;
use dispatch_domain::service as rules;
use dispatch_types::Trucker;
use tracing::debug;

/// Controller over the pending trucker selection
#[derive(Debug, Default)]
pub struct SelectionController {
    pending: Option<String>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw pending trucker id, if any selection is held
    pub fn pending_id(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// The pending trucker, re-validated against the current collections.
    ///
    /// Returns `None` when the selection is stale (trucker deleted or
    /// assigned since it was picked).
    pub fn pending_in<'a>(&self, store: &'a DispatchStore) -> Option<&'a Trucker> {
        let trucker = store.trucker(self.pending.as_deref()?)?;
        if rules::eligible_for_drag(store.payloads(), trucker) {
            Some(trucker)
        } else {
            None
        }
    }

    /// Pick a trucker for assignment, or toggle an existing pick off.
    ///
    /// Only unassigned truckers may be picked; an ineligible pick leaves
    /// the state unchanged. Returns whether a selection is held afterwards.
    pub fn pick_trucker(&mut self, store: &DispatchStore, trucker_id: &str) -> bool {
        if self.pending.as_deref() == Some(trucker_id) {
            self.pending = None;
            return false;
        }
        let eligible = store
            .trucker(trucker_id)
            .map(|t| rules::eligible_for_drag(store.payloads(), t))
            .unwrap_or(false);
        if eligible {
            self.pending = Some(trucker_id.to_string());
        } else {
            debug!(trucker_id, "pick ignored: trucker not eligible");
        }
        self.pending.is_some()
    }

    /// Resolve the pending selection onto a payload.
    ///
    /// A stale selection resets to idle without assigning. An ineligible
    /// drop target leaves the selection in place so another target can be
    /// tried. Returns whether an assignment was applied.
    pub fn drop_on_payload(&mut self, store: &mut DispatchStore, payload_id: &str) -> bool {
        let Some(pending) = self.pending.clone() else {
            return false;
        };
        let still_eligible = store
            .trucker(&pending)
            .map(|t| rules::eligible_for_drag(store.payloads(), t))
            .unwrap_or(false);
        if !still_eligible {
            debug!(trucker_id = pending.as_str(), "stale selection cleared");
            self.pending = None;
            return false;
        }
        match store.payload(payload_id) {
            Some(payload) if rules::eligible_drop_target(payload) => {}
            _ => return false,
        }
        let applied = store.assign(payload_id, &pending);
        if applied {
            self.pending = None;
        }
        applied
    }

    /// Drop any pending selection
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
