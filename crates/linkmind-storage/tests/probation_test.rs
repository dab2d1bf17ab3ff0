//! Probation list and ledger operations against an in-memory database.

use chrono::NaiveDate;
use linkmind_core::errors::{LinkMindError, StorageError};
use linkmind_core::models::{LedgerEntry, ProbationRecord};
use linkmind_core::traits::{ICaseStore, IFinancialLedger, IProbationStore};
use linkmind_storage::queries::probation_ops;
use linkmind_storage::{to_storage_err, StorageEngine};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, d).unwrap()
}

fn entry(link_id: &str, action: &str, value: f64) -> LedgerEntry {
    LedgerEntry {
        date: day(20),
        link_id: link_id.to_string(),
        action_taken: action.to_string(),
        recovered_value: value,
    }
}

#[test]
fn insert_then_get_roundtrip() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let record = ProbationRecord::indict("LINK_A", "LICENSE,BW", day(1));

    assert!(engine.insert_if_absent(&record).unwrap());
    assert_eq!(engine.get("LINK_A").unwrap(), Some(record));
    assert_eq!(engine.get("LINK_B").unwrap(), None);
}

#[test]
fn insert_if_absent_keeps_existing_row() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let first = ProbationRecord::indict("LINK_A", "BW", day(1));
    let second = ProbationRecord::indict("LINK_A", "ZOMBIE", day(5));

    assert!(engine.insert_if_absent(&first).unwrap());
    assert!(!engine.insert_if_absent(&second).unwrap());

    let stored = engine.get("LINK_A").unwrap().unwrap();
    assert_eq!(stored.start_date, day(1));
    assert_eq!(stored.offense_summary, "BW");
}

#[test]
fn update_increments_strikes_and_moves_last_seen_only() {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine
        .insert_if_absent(&ProbationRecord::indict("LINK_A", "BW", day(1)))
        .unwrap();

    assert!(engine.update("LINK_A", day(3), 1).unwrap());
    assert!(engine.update("LINK_A", day(4), 2).unwrap());

    let stored = engine.get("LINK_A").unwrap().unwrap();
    assert_eq!(stored.strike_count, 4);
    assert_eq!(stored.start_date, day(1));
    assert_eq!(stored.last_seen_date, day(4));
}

#[test]
fn update_and_delete_of_missing_link_report_false() {
    let engine = StorageEngine::open_in_memory().unwrap();
    assert!(!engine.update("GHOST", day(1), 1).unwrap());
    assert!(!engine.delete("GHOST").unwrap());
}

#[test]
fn delete_removes_record() {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine
        .insert_if_absent(&ProbationRecord::indict("LINK_A", "BW", day(1)))
        .unwrap();
    assert!(engine.delete("LINK_A").unwrap());
    assert_eq!(engine.get("LINK_A").unwrap(), None);
}

#[test]
fn corrupt_row_reads_as_absent_through_trait() {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine
        .writer()
        .with_conn(|conn| {
            conn.execute(
                "INSERT INTO probation_list VALUES ('LINK_X', 'BW', 'last tuesday', '2026-01-02', 1)",
                [],
            )
            .map_err(|e| to_storage_err(e.to_string()))
        })
        .unwrap();

    assert_eq!(engine.get("LINK_X").unwrap(), None);

    // The raw query still reports the corruption.
    let err = engine
        .writer()
        .with_conn(|conn| probation_ops::get_probation(conn, "LINK_X"))
        .unwrap_err();
    assert!(matches!(
        err,
        LinkMindError::Storage(StorageError::CorruptRecord { .. })
    ));

    // And the key stays occupied until replaced.
    let fresh = ProbationRecord::indict("LINK_X", "ZOMBIE", day(9));
    assert!(!engine.insert_if_absent(&fresh).unwrap());
    engine.replace(&fresh).unwrap();
    assert_eq!(engine.get("LINK_X").unwrap(), Some(fresh));
}

#[test]
fn zero_strike_count_is_corrupt() {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine
        .writer()
        .with_conn(|conn| {
            conn.execute(
                "INSERT INTO probation_list VALUES ('LINK_Z', 'BW', '2026-01-01', '2026-01-01', 0)",
                [],
            )
            .map_err(|e| to_storage_err(e.to_string()))
        })
        .unwrap();
    assert_eq!(engine.get("LINK_Z").unwrap(), None);
    assert!(engine.list_probation().unwrap().is_empty());
}

#[test]
fn list_probation_orders_by_start_date() {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine
        .insert_if_absent(&ProbationRecord::indict("LINK_LATE", "BW", day(9)))
        .unwrap();
    engine
        .insert_if_absent(&ProbationRecord::indict("LINK_EARLY", "ZOMBIE", day(2)))
        .unwrap();

    let ids: Vec<String> = engine
        .list_probation()
        .unwrap()
        .into_iter()
        .map(|r| r.link_id)
        .collect();
    assert_eq!(ids, vec!["LINK_EARLY", "LINK_LATE"]);
}

#[test]
fn ledger_appends_and_totals() {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine.append(&entry("LINK_A", "RICO_LICENSE", 4000.0)).unwrap();
    engine.append(&entry("LINK_A", "RICO_BW", 560.0)).unwrap();
    engine.append(&entry("LINK_B", "RICO_ZOMBIE", 50.0)).unwrap();

    let a = engine.ledger_for_link("LINK_A").unwrap();
    assert_eq!(a.len(), 2);
    assert_eq!(a[0].action_taken, "RICO_LICENSE");
    assert_eq!(a[1].recovered_value, 560.0);
    assert_eq!(engine.total_recovered().unwrap(), 4610.0);
    assert_eq!(engine.ledger_entry_count().unwrap(), 3);
}

#[test]
fn empty_ledger_totals_zero() {
    let engine = StorageEngine::open_in_memory().unwrap();
    assert_eq!(engine.total_recovered().unwrap(), 0.0);
    assert!(engine.ledger_for_link("LINK_A").unwrap().is_empty());
}

#[test]
fn close_case_books_ledger_and_releases_link() {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine
        .insert_if_absent(&ProbationRecord::indict("LINK_A", "LICENSE,ZOMBIE", day(1)))
        .unwrap();

    engine
        .close_case(
            "LINK_A",
            &[
                entry("LINK_A", "RICO_LICENSE", 4000.0),
                entry("LINK_A", "RICO_ZOMBIE", 50.0),
            ],
        )
        .unwrap();

    assert_eq!(engine.get("LINK_A").unwrap(), None);
    assert_eq!(engine.ledger_for_link("LINK_A").unwrap().len(), 2);
}

#[test]
fn failed_close_case_leaves_probation_intact() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let record = ProbationRecord::indict("LINK_A", "BW", day(1));
    engine.insert_if_absent(&record).unwrap();
    engine
        .writer()
        .with_conn(|conn| {
            conn.execute_batch("DROP TABLE financial_ledger")
                .map_err(|e| to_storage_err(e.to_string()))
        })
        .unwrap();

    let err = engine
        .close_case("LINK_A", &[entry("LINK_A", "RICO_BW", 560.0)])
        .unwrap_err();
    assert!(err.is_retryable());
    assert_eq!(engine.get("LINK_A").unwrap(), Some(record));
}

fn run_sql(engine: &StorageEngine, sql: &str) {
    engine
        .writer()
        .with_conn(|conn| {
            conn.execute_batch(sql)
                .map_err(|e| to_storage_err(e.to_string()))
        })
        .unwrap();
}

#[test]
fn wrong_storage_class_reads_as_absent() {
    let engine = StorageEngine::open_in_memory().unwrap();
    run_sql(
        &engine,
        "INSERT INTO probation_list VALUES ('LINK_T', 'BW', 20260204, '2026-02-04', 'abc');
         INSERT INTO probation_list VALUES ('LINK_R', 'BW', '2026-02-04', '2026-02-04', 2.5);
         INSERT INTO probation_list VALUES ('LINK_B', X'00FF', '2026-02-04', '2026-02-04', 1);",
    );

    for link_id in ["LINK_T", "LINK_R", "LINK_B"] {
        assert_eq!(engine.get(link_id).unwrap(), None, "{link_id}");
        let err = engine
            .writer()
            .with_conn(|conn| probation_ops::get_probation(conn, link_id))
            .unwrap_err();
        assert!(
            matches!(err, LinkMindError::Storage(StorageError::CorruptRecord { .. })),
            "{link_id}: {err}"
        );
    }
    assert!(engine.list_probation().unwrap().is_empty());

    let fresh = ProbationRecord::indict("LINK_T", "ZOMBIE", day(4));
    engine.replace(&fresh).unwrap();
    assert_eq!(engine.get("LINK_T").unwrap(), Some(fresh));
}

#[test]
fn close_case_failing_mid_batch_books_nothing() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let record = ProbationRecord::indict("LINK_A", "LICENSE,BW,ZOMBIE", day(1));
    engine.insert_if_absent(&record).unwrap();
    run_sql(
        &engine,
        "CREATE TRIGGER reject_bw BEFORE INSERT ON financial_ledger
         WHEN NEW.action_taken = 'RICO_BW'
         BEGIN SELECT RAISE(ABORT, 'ledger rejected'); END;",
    );

    let entries = [
        entry("LINK_A", "RICO_LICENSE", 4000.0),
        entry("LINK_A", "RICO_BW", 560.0),
        entry("LINK_A", "RICO_ZOMBIE", 50.0),
    ];
    assert!(engine.close_case("LINK_A", &entries).is_err());
    assert_eq!(engine.ledger_entry_count().unwrap(), 0);
    assert_eq!(engine.get("LINK_A").unwrap(), Some(record));

    run_sql(&engine, "DROP TRIGGER reject_bw");
    engine.close_case("LINK_A", &entries).unwrap();
    assert_eq!(engine.ledger_entry_count().unwrap(), 3);
    assert_eq!(engine.total_recovered().unwrap(), 4610.0);
    assert_eq!(engine.get("LINK_A").unwrap(), None);
}
