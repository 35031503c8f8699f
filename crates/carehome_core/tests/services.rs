use carehome_core::{
    AckStatus, Handover, HandoverService, InMemoryLifecycleRepository,
    InMemoryResidentRepository, LifecycleError, LifecycleRepository, LifecycleStatus,
    Notification, NotificationCategory, NotificationService, Resident, ResidentService,
    ResidentStatus, ServiceError, Shift, StatusCounts, StatusFilter, Timestamp,
};
use chrono::{NaiveDate, TimeZone, Utc};
use uuid::Uuid;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(hour: u32) -> Timestamp {
    Utc.with_ymd_and_hms(2024, 3, 15, hour, 0, 0).unwrap()
}

fn resident(name: &str, admission: Option<&str>, discharge: Option<&str>) -> Resident {
    let mut resident = Resident::new(name);
    resident.admission_date = admission.map(str::to_string);
    resident.discharge_date = discharge.map(str::to_string);
    resident
}

fn roster() -> Vec<Resident> {
    vec![
        resident("山田 花子", Some("2024-01-01"), None),
        resident("佐藤 一郎", Some("2023/04/01"), Some("2024/03/01")),
        resident("高橋 茂", Some("2024-04-01"), None),
        resident("田中 美代子", None, None),
    ]
}

fn handover_service() -> (
    HandoverService<InMemoryLifecycleRepository<Handover>>,
    Vec<Uuid>,
) {
    let handovers: Vec<Handover> = ["A", "B", "C"]
        .iter()
        .map(|title| Handover::new(*title, "本文", "中村", Shift::Day, at(0)))
        .collect();
    let ids = handovers.iter().map(|handover| handover.id).collect();
    let repo = InMemoryLifecycleRepository::new(handovers).unwrap();
    (HandoverService::new(repo), ids)
}

#[test]
fn roster_derives_status_for_the_requested_day() {
    let service = ResidentService::new(InMemoryResidentRepository::new(roster()).unwrap());

    let statuses: Vec<_> = service
        .list_roster(day(2024, 3, 15))
        .unwrap()
        .into_iter()
        .map(|view| view.status)
        .collect();
    assert_eq!(
        statuses,
        vec![
            Some(ResidentStatus::Admitted),
            Some(ResidentStatus::Discharged),
            Some(ResidentStatus::PreAdmission),
            None,
        ]
    );

    let later: Vec<_> = service
        .list_roster(day(2024, 4, 1))
        .unwrap()
        .into_iter()
        .map(|view| view.status)
        .collect();
    assert_eq!(later[2], Some(ResidentStatus::Admitted));
}

#[test]
fn count_by_status_tallies_every_resident() {
    let service = ResidentService::new(InMemoryResidentRepository::new(roster()).unwrap());
    assert_eq!(
        service.count_by_status(day(2024, 3, 15)).unwrap(),
        StatusCounts {
            pre_admission: 1,
            admitted: 1,
            discharged: 1,
            unknown: 1,
        }
    );
}

#[test]
fn resident_view_lookup_reports_unknown_id() {
    let residents = roster();
    let known = residents[0].id;
    let service = ResidentService::new(InMemoryResidentRepository::new(residents).unwrap());

    let view = service.get_resident_view(known, day(2024, 3, 15)).unwrap();
    assert_eq!(view.status, Some(ResidentStatus::Admitted));

    let missing = Uuid::new_v4();
    let err = service
        .get_resident_view(missing, day(2024, 3, 15))
        .unwrap_err();
    assert_eq!(err, ServiceError::NotFound(missing));
}

#[test]
fn mark_read_then_completed_writes_back_in_place() {
    let (mut service, ids) = handover_service();

    let read = service.mark_read(ids[1], at(1)).unwrap();
    assert_eq!(read.lifecycle.status, LifecycleStatus::Read);
    assert_eq!(read.lifecycle.read_at, Some(at(1)));

    let completed = service.mark_completed(ids[1], at(2)).unwrap();
    assert_eq!(completed.lifecycle.read_at, Some(at(1)));
    assert_eq!(completed.lifecycle.completed_at, Some(at(2)));

    let stored = service.repository().list_all().unwrap();
    assert_eq!(
        stored.iter().map(|handover| handover.id).collect::<Vec<_>>(),
        ids
    );
    assert_eq!(stored[1], completed);
    assert_eq!(stored[0].lifecycle.status, LifecycleStatus::Pending);
}

#[test]
fn mark_read_on_unknown_id_is_not_found() {
    let (mut service, _) = handover_service();
    let missing = Uuid::new_v4();
    let err = service.mark_read(missing, at(1)).unwrap_err();
    assert_eq!(err, ServiceError::NotFound(missing));
}

#[test]
fn strict_marking_leaves_store_unchanged_on_regression() {
    let (mut service, ids) = handover_service();
    let completed = service.mark_completed(ids[0], at(2)).unwrap();

    let err = service
        .mark_strict(ids[0], AckStatus::Read, at(3))
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Lifecycle(LifecycleError::Regression { .. })
    ));
    assert_eq!(service.get(ids[0]).unwrap(), Some(completed));

    let forward = service
        .mark_strict(ids[1], AckStatus::Completed, at(4))
        .unwrap();
    assert_eq!(forward.lifecycle.status, LifecycleStatus::Completed);
}

#[test]
fn list_filters_and_pending_count() {
    let (mut service, ids) = handover_service();
    service.mark_read(ids[0], at(1)).unwrap();
    service.mark_completed(ids[2], at(1)).unwrap();

    assert_eq!(service.list(StatusFilter::All).unwrap().len(), 3);
    assert_eq!(service.list(StatusFilter::Open).unwrap().len(), 2);
    let read = service
        .list(StatusFilter::Only(LifecycleStatus::Read))
        .unwrap();
    assert_eq!(read.len(), 1);
    assert_eq!(read[0].id, ids[0]);
    assert_eq!(service.pending_count().unwrap(), 1);
}

#[test]
fn notification_service_uses_the_same_flow() {
    let notice = Notification::new("同意書", "確認待ち", NotificationCategory::Document, at(0));
    let id = notice.id;
    let repo = InMemoryLifecycleRepository::new(vec![notice]).unwrap();
    let mut service = NotificationService::new(repo);

    assert_eq!(service.pending_count().unwrap(), 1);
    service.mark_read(id, at(1)).unwrap();
    assert_eq!(service.pending_count().unwrap(), 0);
}
