use chrono::NaiveDate;
use tempfile::tempdir;

use super::*;
use crate::core::record::{NewRecord, RecordUpdate};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn brz_oil_change() -> NewRecord {
    NewRecord::new("2025 BRZ", 4500, "Oil change", 89.99)
        .with_notes("Motul oil + OEM filter")
        .with_date(date(2025, 3, 14))
}

fn seeded_store() -> MaintenanceStore {
    let mut store = MaintenanceStore::open_in_memory().unwrap();
    store.add(&brz_oil_change()).unwrap();
    store
        .add(&NewRecord::new("2019 Civic", 61000, "Brake pads", 240.0).with_date(date(2024, 11, 2)))
        .unwrap();
    store
        .add(
            &NewRecord::new("2025 BRZ", 9800, "Tire rotation", 35.5)
                .with_notes("Rotated front to back")
                .with_date(date(2025, 7, 1)),
        )
        .unwrap();
    store
}

#[test]
fn test_add_then_list_returns_record() {
    let mut store = MaintenanceStore::open_in_memory().unwrap();
    let added = store.add(&brz_oil_change()).unwrap();

    let records = store.list(&RecordFilter::default()).unwrap();
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.id, 1);
    assert_eq!(record.car, "2025 BRZ");
    assert_eq!(record.mileage, 4500);
    assert_eq!(record.kind, "Oil change");
    assert_eq!(record.cost, 89.99);
    assert_eq!(record.notes, "Motul oil + OEM filter");
    assert_eq!(record.date, date(2025, 3, 14));
    assert_eq!(record, &added);
}

#[test]
fn test_add_defaults_notes_and_date() {
    let mut store = MaintenanceStore::open_in_memory().unwrap();
    let record = store
        .add(&NewRecord::new("2025 BRZ", 100, "Inspection", 0.0))
        .unwrap();

    assert_eq!(record.notes, "");
    assert_eq!(record.date, chrono::Local::now().date_naive());
    assert_eq!(record.created_at, record.updated_at);
}

#[test]
fn test_add_rejects_invalid_record() {
    let mut store = MaintenanceStore::open_in_memory().unwrap();

    let err = store
        .add(&NewRecord::new("", 4500, "Oil change", 89.99))
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation { .. }));

    let err = store
        .add(&NewRecord::new("2025 BRZ", -5, "Oil change", 89.99))
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation { .. }));

    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn test_ids_increase_and_are_never_reused() {
    let mut store = MaintenanceStore::open_in_memory().unwrap();
    let first = store.add(&brz_oil_change()).unwrap();
    let second = store.add(&brz_oil_change()).unwrap();
    assert!(second.id > first.id);

    store.delete(&[second.id]).unwrap();
    let third = store.add(&brz_oil_change()).unwrap();
    assert!(third.id > second.id);
}

#[test]
fn test_list_filters_by_exact_car() {
    let store = seeded_store();

    let brz = store.list(&RecordFilter::for_car("2025 BRZ")).unwrap();
    assert_eq!(brz.len(), 2);
    assert!(brz.iter().all(|r| r.car == "2025 BRZ"));

    // Case and substring differences do not match
    assert!(store.list(&RecordFilter::for_car("2025 brz")).unwrap().is_empty());
    assert!(store.list(&RecordFilter::for_car("BRZ")).unwrap().is_empty());
    assert!(store.list(&RecordFilter::for_car("Miata")).unwrap().is_empty());
}

#[test]
fn test_list_orders_by_id_by_default() {
    let store = seeded_store();
    let ids: Vec<i64> = store
        .list(&RecordFilter::default())
        .unwrap()
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_list_sort_reverse_and_limit() {
    let store = seeded_store();

    let filter = RecordFilter {
        sort: SortKey::Date,
        ..Default::default()
    };
    let ids: Vec<i64> = store.list(&filter).unwrap().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 1, 3]);

    let filter = RecordFilter {
        sort: SortKey::Mileage,
        reverse: true,
        limit: Some(2),
        ..Default::default()
    };
    let ids: Vec<i64> = store.list(&filter).unwrap().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn test_edit_missing_id_leaves_store_unchanged() {
    let mut store = seeded_store();
    let before = store.list(&RecordFilter::default()).unwrap();

    let update = RecordUpdate {
        mileage: Some(1),
        ..Default::default()
    };
    let err = store.edit(42, &update).unwrap_err();
    assert!(matches!(err, StoreError::NotFound { id: 42 }));

    assert_eq!(store.list(&RecordFilter::default()).unwrap(), before);
}

#[test]
fn test_edit_changes_only_supplied_fields() {
    let mut store = seeded_store();
    let before = store.get(1).unwrap();

    let update = RecordUpdate {
        mileage: Some(4700),
        notes: Some("Corrected odometer".to_string()),
        ..Default::default()
    };
    let after = store.edit(1, &update).unwrap();

    assert_eq!(after.mileage, 4700);
    assert_eq!(after.notes, "Corrected odometer");
    assert_eq!(after.id, before.id);
    assert_eq!(after.car, before.car);
    assert_eq!(after.date, before.date);
    assert_eq!(after.kind, before.kind);
    assert_eq!(after.cost.to_bits(), before.cost.to_bits());
    assert_eq!(after.created_at, before.created_at);

    // Other records untouched
    assert_eq!(store.get(2).unwrap().mileage, 61000);
}

#[test]
fn test_edit_rejects_invalid_and_empty_updates() {
    let mut store = seeded_store();
    let before = store.get(1).unwrap();

    let update = RecordUpdate {
        kind: Some("   ".to_string()),
        cost: Some(10.0),
        ..Default::default()
    };
    let err = store.edit(1, &update).unwrap_err();
    assert!(matches!(err, StoreError::Validation { .. }));

    let err = store.edit(1, &RecordUpdate::default()).unwrap_err();
    assert!(err.to_string().contains("no changes"));

    assert_eq!(store.get(1).unwrap(), before);
}

#[test]
fn test_delete_mixed_ids_reports_missing() {
    let mut store = seeded_store();

    let report = store.delete(&[3, 7, 1]).unwrap();
    assert_eq!(report.deleted, vec![3, 1]);
    assert_eq!(report.not_found, vec![7]);
    assert!(!report.is_complete());

    let ids: Vec<i64> = store
        .list(&RecordFilter::default())
        .unwrap()
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec![2]);
}

#[test]
fn test_delete_when_only_later_id_exists() {
    let mut store = seeded_store();
    store.delete(&[1, 2]).unwrap();

    let report = store.delete(&[2, 3]).unwrap();
    assert_eq!(report.deleted, vec![3]);
    assert_eq!(report.not_found, vec![2]);
    assert!(store.find(3).unwrap().is_none());
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn test_delete_ignores_repeated_ids() {
    let mut store = seeded_store();
    let report = store.delete(&[2, 2, 2]).unwrap();
    assert_eq!(report.deleted, vec![2]);
    assert!(report.is_complete());
}

#[test]
fn test_search_combines_criteria() {
    let store = seeded_store();

    let query = SearchQuery {
        car: Some("brz".to_string()),
        ..Default::default()
    };
    assert_eq!(store.search(&query).unwrap().len(), 2);

    let query = SearchQuery {
        car: Some("brz".to_string()),
        min_mileage: Some(5000),
        ..Default::default()
    };
    let results = store.search(&query).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].kind, "Tire rotation");

    let query = SearchQuery {
        notes_contains: Some("MOTUL".to_string()),
        kind: Some("oil".to_string()),
        ..Default::default()
    };
    let results = store.search(&query).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, 1);
}

#[test]
fn test_search_date_bounds_are_exclusive() {
    let store = seeded_store();

    let query = SearchQuery {
        after: Some(date(2025, 3, 14)),
        ..Default::default()
    };
    let ids: Vec<i64> = store.search(&query).unwrap().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![3]);

    let query = SearchQuery {
        before: Some(date(2025, 7, 1)),
        ..Default::default()
    };
    let ids: Vec<i64> = store.search(&query).unwrap().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[test]
fn test_search_mileage_bounds_are_inclusive() {
    let store = seeded_store();
    let query = SearchQuery {
        min_mileage: Some(4500),
        max_mileage: Some(9800),
        ..Default::default()
    };
    assert_eq!(store.search(&query).unwrap().len(), 2);
}

#[test]
fn test_records_survive_reopen() {
    let tmp = tempdir().unwrap();
    let db_path = tmp.path().join("nested/dir/maintenance.db");

    {
        let mut store = MaintenanceStore::open(&db_path).unwrap();
        store.add(&brz_oil_change()).unwrap();
        store.add(&brz_oil_change()).unwrap();
        store.delete(&[2]).unwrap();
    }

    let mut store = MaintenanceStore::open(&db_path).unwrap();
    assert_eq!(store.path(), Some(db_path.as_path()));
    let records = store.list(&RecordFilter::default()).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].notes, "Motul oil + OEM filter");

    // Id 2 stays retired across restarts
    let next = store.add(&brz_oil_change()).unwrap();
    assert_eq!(next.id, 3);
}

#[test]
fn test_open_refuses_newer_schema() {
    let tmp = tempdir().unwrap();
    let db_path = tmp.path().join("maintenance.db");

    {
        let conn = rusqlite::Connection::open(&db_path).unwrap();
        conn.execute_batch(
            "CREATE TABLE schema_version (version INTEGER PRIMARY KEY);
             INSERT INTO schema_version (version) VALUES (99);",
        )
        .unwrap();
    }

    let err = MaintenanceStore::open(&db_path).err().unwrap();
    assert!(err.is_storage());
    assert!(err.to_string().contains("99"));
}

#[test]
fn test_all_by_date_orders_by_service_date() {
    let store = seeded_store();
    let ids: Vec<i64> = store.all_by_date().unwrap().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 1, 3]);
}

#[test]
fn test_search_text_ignores_case_beyond_ascii() {
    let mut store = MaintenanceStore::open_in_memory().unwrap();
    store
        .add(&NewRecord::new("Škoda Octavia", 1000, "Ölwechsel", 50.0).with_notes("ÉTÉ tires"))
        .unwrap();
    store.add(&brz_oil_change()).unwrap();

    let by_car = SearchQuery {
        car: Some("škoda".to_string()),
        ..Default::default()
    };
    let by_kind = SearchQuery {
        kind: Some("ölwechsel".to_string()),
        ..Default::default()
    };
    let by_notes = SearchQuery {
        notes_contains: Some("été".to_string()),
        ..Default::default()
    };
    for query in [by_car, by_kind, by_notes] {
        let ids: Vec<i64> = store.search(&query).unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1], "{:?}", query);
    }
}

#[test]
fn test_negative_zero_cost_is_stored_as_zero() {
    let mut store = MaintenanceStore::open_in_memory().unwrap();
    let record = store
        .add(&NewRecord::new("2025 BRZ", 4500, "Inspection", -0.0))
        .unwrap();
    assert!(record.cost.is_sign_positive());

    let update = RecordUpdate {
        cost: Some(-0.0),
        ..Default::default()
    };
    let edited = store.edit(record.id, &update).unwrap();
    assert!(edited.cost.is_sign_positive());
}
