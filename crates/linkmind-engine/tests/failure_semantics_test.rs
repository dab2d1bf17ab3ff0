//! Storage failures, format gaps, corrupt rows, and contention.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use chrono::{Days, NaiveDate};
use linkmind_adapters::{HuaweiRtnAdapter, VendorRegistry};
use linkmind_core::config::PolicyConfig;
use linkmind_core::errors::{LinkMindError, LinkMindResult};
use linkmind_core::models::{LedgerEntry, OffenseKind, ProbationRecord, RawFields, Vendor};
use linkmind_core::traits::{ICaseStore, IFinancialLedger, IProbationStore, IVendorAdapter};
use linkmind_engine::{AuditOutcome, LinkAuditor};
use linkmind_storage::{to_storage_err, StorageEngine};

const GHOST_LINK: &str = "
+++    DJELFA_GHOST_LINK     2026-02-04
Current License Capacity(Mbps)  : 400
Air-interface Throughput(Mbps)  : 0.5
Channel Bandwidth(MHz)          : 56
Port Admin Status               : UP
";

fn day_one() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 4).unwrap()
}

fn judgment_day() -> NaiveDate {
    day_one().checked_add_days(Days::new(15)).unwrap()
}

/// Real storage with switchable outages.
struct FlakyStore {
    inner: StorageEngine,
    fail_reads: AtomicBool,
    fail_ledger: AtomicBool,
}

impl FlakyStore {
    fn new() -> Self {
        Self {
            inner: StorageEngine::open_in_memory().unwrap(),
            fail_reads: AtomicBool::new(false),
            fail_ledger: AtomicBool::new(false),
        }
    }
}

impl IProbationStore for FlakyStore {
    fn get(&self, link_id: &str) -> LinkMindResult<Option<ProbationRecord>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(to_storage_err("probation table unavailable"));
        }
        self.inner.get(link_id)
    }

    fn insert_if_absent(&self, record: &ProbationRecord) -> LinkMindResult<bool> {
        self.inner.insert_if_absent(record)
    }

    fn update(&self, link_id: &str, last_seen: NaiveDate, delta: u32) -> LinkMindResult<bool> {
        self.inner.update(link_id, last_seen, delta)
    }

    fn delete(&self, link_id: &str) -> LinkMindResult<bool> {
        self.inner.delete(link_id)
    }
}

impl IFinancialLedger for FlakyStore {
    fn append(&self, entry: &LedgerEntry) -> LinkMindResult<()> {
        if self.fail_ledger.load(Ordering::SeqCst) {
            return Err(to_storage_err("ledger disk full"));
        }
        self.inner.append(entry)
    }
}

impl ICaseStore for FlakyStore {
    fn close_case(&self, link_id: &str, entries: &[LedgerEntry]) -> LinkMindResult<()> {
        if self.fail_ledger.load(Ordering::SeqCst) {
            return Err(to_storage_err("ledger disk full"));
        }
        self.inner.close_case(link_id, entries)
    }
}

/// Parses like Huawei but has no commands to offer.
struct SilentHuawei(HuaweiRtnAdapter);

impl IVendorAdapter for SilentHuawei {
    fn vendor(&self) -> Vendor {
        Vendor::Huawei
    }
    fn matches(&self, raw_text: &str) -> bool {
        self.0.matches(raw_text)
    }
    fn parse(&self, raw_text: &str) -> RawFields {
        self.0.parse(raw_text)
    }
    fn generate_fix(&self, _link_id: &str, _target: u32, _kind: OffenseKind) -> String {
        String::new()
    }
}

#[test]
fn failed_ledger_write_keeps_probation_for_retry() {
    let store = Arc::new(FlakyStore::new());
    let auditor = LinkAuditor::with_default_vendors(store.clone(), PolicyConfig::default());
    auditor.audit_link_on(GHOST_LINK, day_one()).unwrap();

    store.fail_ledger.store(true, Ordering::SeqCst);
    let err = auditor.audit_link_on(GHOST_LINK, judgment_day()).unwrap_err();
    assert!(matches!(err, LinkMindError::Storage(_)));
    assert!(err.is_retryable());

    let record = store.inner.get("DJELFA_GHOST_LINK").unwrap().unwrap();
    assert_eq!(record.start_date, day_one());
    assert_eq!(store.inner.ledger_entry_count().unwrap(), 0);

    store.fail_ledger.store(false, Ordering::SeqCst);
    let outcome = auditor.audit_link_on(GHOST_LINK, judgment_day()).unwrap();
    assert!(matches!(outcome, AuditOutcome::RemediationExecuted(_)));
    assert_eq!(store.inner.ledger_entry_count().unwrap(), 3);
    assert_eq!(store.inner.get("DJELFA_GHOST_LINK").unwrap(), None);
}

#[test]
fn ledger_failure_mid_batch_books_nothing_and_retry_books_once() {
    let engine = Arc::new(StorageEngine::open_in_memory().unwrap());
    let auditor = LinkAuditor::with_default_vendors(engine.clone(), PolicyConfig::default());
    auditor.audit_link_on(GHOST_LINK, day_one()).unwrap();

    let run_sql = |sql: &str| {
        engine
            .writer()
            .with_conn(|conn| {
                conn.execute_batch(sql)
                    .map_err(|e| to_storage_err(e.to_string()))
            })
            .unwrap()
    };
    run_sql(
        "CREATE TRIGGER reject_second BEFORE INSERT ON financial_ledger
         WHEN NEW.action_taken = 'RICO_BW'
         BEGIN SELECT RAISE(ABORT, 'ledger rejected'); END;",
    );

    let err = auditor.audit_link_on(GHOST_LINK, judgment_day()).unwrap_err();
    assert!(err.is_retryable());
    assert_eq!(engine.ledger_entry_count().unwrap(), 0);
    assert!(engine.get("DJELFA_GHOST_LINK").unwrap().is_some());

    run_sql("DROP TRIGGER reject_second");
    let outcome = auditor.audit_link_on(GHOST_LINK, judgment_day()).unwrap();
    assert!(matches!(outcome, AuditOutcome::RemediationExecuted(_)));
    assert_eq!(engine.ledger_entry_count().unwrap(), 3);
    assert_eq!(engine.total_recovered().unwrap(), 4610.0);
}

#[test]
fn failed_read_changes_nothing() {
    let store = Arc::new(FlakyStore::new());
    let auditor = LinkAuditor::with_default_vendors(store.clone(), PolicyConfig::default());

    store.fail_reads.store(true, Ordering::SeqCst);
    let err = auditor.audit_link_on(GHOST_LINK, day_one()).unwrap_err();
    assert!(err.is_retryable());
    assert!(store.inner.list_probation().unwrap().is_empty());
}

#[test]
fn format_gap_is_recorded_not_fatal() {
    let engine = Arc::new(StorageEngine::open_in_memory().unwrap());
    let mut registry = VendorRegistry::new();
    registry.register(Arc::new(SilentHuawei(HuaweiRtnAdapter::new())));
    let auditor = LinkAuditor::new(registry, engine.clone(), PolicyConfig::default());

    auditor.audit_link_on(GHOST_LINK, day_one()).unwrap();
    let outcome = auditor.audit_link_on(GHOST_LINK, judgment_day()).unwrap();

    let batch = outcome.batch().expect("remediation batch");
    assert_eq!(batch.offense_count(), 3);
    assert_eq!(batch.command_count(), 0);
    assert!(batch.script().contains("// NO-OP: no LICENSE command for this vendor"));
    assert_eq!(engine.ledger_entry_count().unwrap(), 3);
    assert_eq!(engine.get("DJELFA_GHOST_LINK").unwrap(), None);
}

#[test]
fn corrupt_record_is_replaced_by_fresh_indictment() {
    let engine = Arc::new(StorageEngine::open_in_memory().unwrap());
    engine
        .writer()
        .with_conn(|conn| {
            conn.execute(
                "INSERT INTO probation_list VALUES ('DJELFA_GHOST_LINK', 'BW', 'garbage', 'garbage', 0)",
                [],
            )
            .map_err(|e| to_storage_err(e.to_string()))
        })
        .unwrap();

    let auditor = LinkAuditor::with_default_vendors(engine.clone(), PolicyConfig::default());
    let outcome = auditor.audit_link_on(GHOST_LINK, day_one()).unwrap();

    assert!(matches!(outcome, AuditOutcome::Indicted { day: 1, .. }));
    let record = engine.get("DJELFA_GHOST_LINK").unwrap().unwrap();
    assert_eq!(record.start_date, day_one());
    assert_eq!(record.strike_count, 1);
    assert_eq!(record.offense_summary, "LICENSE,BW,ZOMBIE");
    assert_eq!(engine.ledger_entry_count().unwrap(), 0);
}

#[test]
fn mistyped_record_is_replaced_by_fresh_indictment() {
    let engine = Arc::new(StorageEngine::open_in_memory().unwrap());
    engine
        .writer()
        .with_conn(|conn| {
            conn.execute(
                "INSERT INTO probation_list VALUES ('DJELFA_GHOST_LINK', 'BW', 20260204, '2026-02-04', 'abc')",
                [],
            )
            .map_err(|e| to_storage_err(e.to_string()))
        })
        .unwrap();

    let auditor = LinkAuditor::with_default_vendors(engine.clone(), PolicyConfig::default());
    let outcome = auditor.audit_link_on(GHOST_LINK, day_one()).unwrap();

    assert!(matches!(outcome, AuditOutcome::Indicted { day: 1, .. }));
    let record = engine.get("DJELFA_GHOST_LINK").unwrap().unwrap();
    assert_eq!(record.start_date, day_one());
    assert_eq!(record.strike_count, 1);
}

#[test]
fn corrupt_record_on_innocent_verdict_is_left_alone() {
    let engine = Arc::new(StorageEngine::open_in_memory().unwrap());
    engine
        .writer()
        .with_conn(|conn| {
            conn.execute(
                "INSERT INTO probation_list VALUES ('ORAN_7', 'BW', 'garbage', 'garbage', 1)",
                [],
            )
            .map_err(|e| to_storage_err(e.to_string()))
        })
        .unwrap();

    let auditor = LinkAuditor::with_default_vendors(engine.clone(), PolicyConfig::default());
    let healthy = "+++ ORAN_7\nCurrent License Capacity(Mbps) : 100\nAir-interface Throughput(Mbps) : 90\n";
    let outcome = auditor.audit_link_on(healthy, day_one()).unwrap();

    assert_eq!(
        outcome,
        AuditOutcome::Clean {
            link_id: "ORAN_7".into()
        }
    );
}

#[test]
fn concurrent_audits_of_one_link_lose_no_strikes() {
    let engine = Arc::new(StorageEngine::open_in_memory().unwrap());
    let auditor = Arc::new(LinkAuditor::with_default_vendors(
        engine.clone(),
        PolicyConfig::default(),
    ));
    auditor.audit_link_on(GHOST_LINK, day_one()).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let auditor = Arc::clone(&auditor);
            thread::spawn(move || {
                for _ in 0..10 {
                    let outcome = auditor.audit_link_on(GHOST_LINK, day_one()).unwrap();
                    assert!(matches!(outcome, AuditOutcome::Surveillance { .. }));
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let record = engine.get("DJELFA_GHOST_LINK").unwrap().unwrap();
    assert_eq!(record.strike_count, 81);
    assert_eq!(record.start_date, day_one());
}

#[test]
fn concurrent_first_audits_indict_exactly_once() {
    let engine = Arc::new(StorageEngine::open_in_memory().unwrap());
    let auditor = Arc::new(LinkAuditor::with_default_vendors(
        engine.clone(),
        PolicyConfig::default(),
    ));

    let handles: Vec<_> = (0..6)
        .map(|_| {
            let auditor = Arc::clone(&auditor);
            thread::spawn(move || auditor.audit_link_on(GHOST_LINK, day_one()).unwrap())
        })
        .collect();
    let outcomes: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let indicted = outcomes
        .iter()
        .filter(|o| matches!(o, AuditOutcome::Indicted { .. }))
        .count();
    assert_eq!(indicted, 1);
    assert_eq!(engine.get("DJELFA_GHOST_LINK").unwrap().unwrap().strike_count, 6);
}

#[test]
fn distinct_links_do_not_interfere() {
    let engine = Arc::new(StorageEngine::open_in_memory().unwrap());
    let auditor = Arc::new(LinkAuditor::with_default_vendors(
        engine.clone(),
        PolicyConfig::default(),
    ));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let auditor = Arc::clone(&auditor);
            thread::spawn(move || {
                let raw = GHOST_LINK.replace("DJELFA_GHOST_LINK", &format!("LINK_{i}"));
                auditor.audit_link_on(&raw, day_one()).unwrap();
                auditor.audit_link_on(&raw, day_one()).unwrap();
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let records = engine.list_probation().unwrap();
    assert_eq!(records.len(), 4);
    assert!(records.iter().all(|r| r.strike_count == 2));
}
