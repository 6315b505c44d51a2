//! Integration tests for the dispatch board facade

use dispatch_app::DispatchBoard;
use dispatch_types::{Error, FilterMode, PayloadDraft, PayloadStatus, TruckerDraft};
use tempfile::tempdir;

#[test]
fn test_first_open_applies_seed() {
    let dir = tempdir().unwrap();
    let board = DispatchBoard::open(dir.path().to_path_buf()).unwrap();

    assert_eq!(board.truckers().len(), 3);
    let payloads = board.payloads(FilterMode::All);
    assert_eq!(payloads.len(), 2);
    assert!(payloads
        .iter()
        .all(|p| p.status == PayloadStatus::Unassigned));
}

#[test]
fn test_state_survives_reopen() {
    let dir = tempdir().unwrap();

    let (trucker_id, payload_id) = {
        let mut board = DispatchBoard::open(dir.path().to_path_buf()).unwrap();
        let trucker_id = board.add_trucker(TruckerDraft::new("Ann")).unwrap();
        let payload_id = board.add_payload(PayloadDraft::new("Pallet")).unwrap();
        assert!(board.assign(&payload_id, &trucker_id));
        assert!(board.advance_to_in_transit(&payload_id));
        (trucker_id, payload_id)
    };

    let board = DispatchBoard::open(dir.path().to_path_buf()).unwrap();
    let payload = board.payload(&payload_id).unwrap();
    assert_eq!(payload.status, PayloadStatus::InTransit);
    assert_eq!(payload.assigned_trucker.as_deref(), Some(trucker_id.as_str()));
    assert!(board.is_trucker_assigned(&trucker_id));
    assert_eq!(
        board.current_assignment_for(&trucker_id).unwrap().id,
        payload_id
    );
}

#[test]
fn test_one_shot_and_two_step_paths_converge() {
    let dir = tempdir().unwrap();
    let mut board = DispatchBoard::open(dir.path().to_path_buf()).unwrap();

    let t1 = board.add_trucker(TruckerDraft::new("Ann")).unwrap();
    let t2 = board.add_trucker(TruckerDraft::new("Bob")).unwrap();
    let p1 = board.add_payload(PayloadDraft::new("first")).unwrap();
    let p2 = board.add_payload(PayloadDraft::new("second")).unwrap();

    // one-shot path
    assert!(board.assign(&p1, &t1));

    // two-step path
    assert!(board.pick_trucker(&t2));
    assert_eq!(board.pending_trucker().unwrap().id, t2);
    assert!(board.drop_on_payload(&p2));
    assert!(board.pending_trucker().is_none());

    for (payload, trucker) in [(&p1, &t1), (&p2, &t2)] {
        let p = board.payload(payload).unwrap();
        assert_eq!(p.status, PayloadStatus::Assigned);
        assert_eq!(p.assigned_trucker.as_deref(), Some(trucker.as_str()));
    }
}

#[test]
fn test_assign_busy_trucker_rejected_on_both_paths() {
    let dir = tempdir().unwrap();
    let mut board = DispatchBoard::open(dir.path().to_path_buf()).unwrap();

    let trucker = board.add_trucker(TruckerDraft::new("Ann")).unwrap();
    let p1 = board.add_payload(PayloadDraft::new("first")).unwrap();
    let p2 = board.add_payload(PayloadDraft::new("second")).unwrap();

    assert!(board.assign(&p1, &trucker));
    assert!(!board.assign(&p2, &trucker));
    assert!(!board.pick_trucker(&trucker));
    assert!(board.payload(&p2).unwrap().assigned_trucker.is_none());
}

#[test]
fn test_delete_assigned_trucker_conflicts_until_unassigned() {
    let dir = tempdir().unwrap();
    let mut board = DispatchBoard::open(dir.path().to_path_buf()).unwrap();

    let trucker = board.add_trucker(TruckerDraft::new("Ann")).unwrap();
    let payload = board.add_payload(PayloadDraft::new("Pallet")).unwrap();
    board.assign(&payload, &trucker);

    let err = board.delete_trucker(&trucker).unwrap_err();
    assert!(matches!(err, Error::Conflict(_)));

    assert!(board.unassign(&payload));
    assert!(board.delete_trucker(&trucker).unwrap());
    assert!(board.trucker(&trucker).is_none());
}

#[test]
fn test_filtered_views_follow_lifecycle() {
    let dir = tempdir().unwrap();
    let mut board = DispatchBoard::open(dir.path().to_path_buf()).unwrap();

    let trucker = board.add_trucker(TruckerDraft::new("Ann")).unwrap();
    let payload = board.add_payload(PayloadDraft::new("Pallet")).unwrap();
    board.assign(&payload, &trucker);
    board.complete(&payload);

    assert!(board
        .payloads(FilterMode::Active)
        .iter()
        .all(|p| p.id != payload));
    assert!(board
        .payloads(FilterMode::Completed)
        .iter()
        .any(|p| p.id == payload));
    // a completed load no longer blocks its trucker
    assert!(!board.is_trucker_assigned(&trucker));
}
