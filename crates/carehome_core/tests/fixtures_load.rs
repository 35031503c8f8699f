use carehome_core::{
    load_fixtures, HandoverService, LifecycleRepository, LifecycleStatus, NotificationService,
    ResidentService, ResidentStatus, StatusCounts,
};
use chrono::NaiveDate;

#[test]
fn bundled_fixtures_decode() {
    let fixtures = load_fixtures().expect("bundled fixtures must load");
    assert_eq!(fixtures.residents.len(), 5);
    assert_eq!(fixtures.handovers.len(), 3);
    assert_eq!(fixtures.notifications.len(), 4);
}

#[test]
fn fixture_roster_covers_every_status() {
    let fixtures = load_fixtures().unwrap();
    let service = ResidentService::new(fixtures.residents);
    let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();

    assert_eq!(
        service.count_by_status(today).unwrap(),
        StatusCounts {
            pre_admission: 1,
            admitted: 2,
            discharged: 1,
            unknown: 1,
        }
    );

    let roster = service.list_roster(today).unwrap();
    assert_eq!(roster[0].status, Some(ResidentStatus::Admitted));
    // Slash-separated dates in the dataset.
    assert_eq!(roster[1].status, Some(ResidentStatus::Discharged));
}

#[test]
fn fixture_lifecycle_records_keep_their_stamps() {
    let fixtures = load_fixtures().unwrap();

    let completed = fixtures
        .handovers
        .list_all()
        .unwrap()
        .into_iter()
        .find(|handover| handover.lifecycle.status == LifecycleStatus::Completed)
        .expect("dataset has a completed handover");
    assert!(completed.lifecycle.read_at.is_some());
    assert!(completed.lifecycle.completed_at.is_some());

    let handovers = HandoverService::new(fixtures.handovers);
    let notifications = NotificationService::new(fixtures.notifications);
    assert_eq!(handovers.pending_count().unwrap(), 1);
    assert_eq!(notifications.pending_count().unwrap(), 2);
}
