//! Assignment eligibility rules
//!
//! Pure functions over the current collections; no side effects. The
//! store and the selection controller both consult these, so eligibility
//! is judged identically on every path.

use dispatch_types::{FilterMode, Payload, Trucker};

/// True iff some non-completed payload references this trucker
pub fn is_trucker_assigned(payloads: &[Payload], trucker_id: &str) -> bool {
    payloads
        .iter()
        .any(|p| p.assigned_trucker.as_deref() == Some(trucker_id) && p.is_active())
}

/// The single active payload referencing this trucker, if any
///
/// The one-active-load invariant guarantees at most one match.
pub fn current_assignment_for<'a>(payloads: &'a [Payload], trucker_id: &str) -> Option<&'a Payload> {
    payloads
        .iter()
        .find(|p| p.assigned_trucker.as_deref() == Some(trucker_id) && p.is_active())
}

/// A trucker may be picked up for assignment only while unassigned
pub fn eligible_for_drag(payloads: &[Payload], trucker: &Trucker) -> bool {
    !is_trucker_assigned(payloads, &trucker.id)
}

/// A payload may receive a trucker only while unassigned and not completed
pub fn eligible_drop_target(payload: &Payload) -> bool {
    payload.assigned_trucker.is_none() && payload.is_active()
}

/// Subsequence of payloads matching the filter, original order preserved
pub fn filter_payloads<'a>(payloads: &'a [Payload], mode: FilterMode) -> Vec<&'a Payload> {
    payloads.iter().filter(|p| mode.matches(p.status)).collect()
}
