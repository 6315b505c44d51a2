//! Default board contents for a first run

use dispatch_types::{BoardSnapshot, Payload, PayloadDraft, Trucker, TruckerDraft};

/// Seed collections used when no snapshot exists yet.
///
/// Ids are generated fresh each time, so the seed is only applied once
/// and then persisted like any other state.
pub fn default_board() -> BoardSnapshot {
    let truckers = vec![
        Trucker::from_draft(
            TruckerDraft::new("John Smith")
                .with_phone("555-0101")
                .with_truck("Freightliner #12"),
        ),
        Trucker::from_draft(
            TruckerDraft::new("Maria Garcia")
                .with_phone("555-0102")
                .with_truck("Peterbilt #08"),
        ),
        Trucker::from_draft(
            TruckerDraft::new("Dave Wilson")
                .with_phone("555-0103")
                .with_truck("Kenworth #15"),
        ),
    ];

    let payloads = vec![
        Payload::from_draft(
            PayloadDraft::new("Steel Beams - 20 tons")
                .with_route("Chicago, IL", "Milwaukee, WI")
                .with_pickup("2025-02-03", "08:00")
                .with_delivery_date("2025-02-03"),
        ),
        Payload::from_draft(
            PayloadDraft::new("Produce - Refrigerated")
                .with_route("Madison, WI", "Minneapolis, MN")
                .with_pickup("2025-02-04", "06:00")
                .with_delivery_date("2025-02-04"),
        ),
    ];

    BoardSnapshot { truckers, payloads }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dispatch_types::PayloadStatus;

    #[test]
    fn test_default_board_shape() {
        let board = default_board();
        assert_eq!(board.truckers.len(), 3);
        assert_eq!(board.payloads.len(), 2);
        for payload in &board.payloads {
            assert_eq!(payload.status, PayloadStatus::Unassigned);
            assert!(payload.assigned_trucker.is_none());
        }
    }
}
