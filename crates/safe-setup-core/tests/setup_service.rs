use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use safe_setup_core::config::{FixtureSelection, SetupConfig};
use safe_setup_core::fixtures::{TASKS, network_fixtures};
use safe_setup_core::models::{
    CoreErrorKind, IntervalScheduleRecord, MasterCopyRecord, Network, PeriodicTaskRecord,
    ProxyFactoryRecord,
};
use safe_setup_core::persistence::{ContractStore, PeriodicTaskStore, ScheduleStore};
use safe_setup_core::setup::{ReconcileOutcome, SetupService, run_setup};
use safe_setup_core::sqlite::SqliteStore;

fn test_db_path(test_name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("safe-setup-{test_name}-{nanos}.sqlite3"))
}

#[derive(Debug, PartialEq)]
struct Snapshot {
    intervals: Vec<IntervalScheduleRecord>,
    tasks: Vec<PeriodicTaskRecord>,
    master_copies: Vec<MasterCopyRecord>,
    proxy_factories: Vec<ProxyFactoryRecord>,
}

fn snapshot(store: &SqliteStore) -> Snapshot {
    Snapshot {
        intervals: store.list_intervals().unwrap(),
        tasks: store.list_periodic_tasks().unwrap(),
        master_copies: store.list_master_copies().unwrap(),
        proxy_factories: store.list_proxy_factories().unwrap(),
    }
}

#[test]
fn full_pass_is_idempotent() {
    let config = SetupConfig {
        database_path: test_db_path("idempotent"),
        fixtures: FixtureSelection::Network(Network::Mainnet),
    };

    let first = run_setup(&config).unwrap();
    let store = SqliteStore::new(config.database_path.clone());
    let after_first = snapshot(&store);

    let second = run_setup(&config).unwrap();
    let after_second = snapshot(&store);

    assert_eq!(after_first, after_second);
    assert!(first.tasks.iter().all(|entry| entry.created()));
    assert!(
        first
            .contracts
            .master_copies
            .iter()
            .all(|setup| setup.outcome.created())
    );
    assert!(
        second
            .tasks
            .iter()
            .all(|entry| entry.outcome == ReconcileOutcome::Unchanged)
    );
    assert!(
        second
            .contracts
            .master_copies
            .iter()
            .chain(second.contracts.proxy_factories.iter())
            .all(|setup| setup.outcome == ReconcileOutcome::Unchanged)
    );

    let mainnet = network_fixtures(Network::Mainnet);
    assert_eq!(after_second.tasks.len(), TASKS.len());
    assert_eq!(after_second.master_copies.len(), mainnet.master_copies.len());
    assert_eq!(
        after_second.proxy_factories.len(),
        mainnet.proxy_factories.len()
    );
}

#[test]
fn service_runs_registrar_before_selected_fixtures() {
    let store = SqliteStore::new(test_db_path("service"));
    store.migrate_to_latest().unwrap();

    let report = SetupService::with_tasks(&store, &TASKS[..1])
        .run(FixtureSelection::Local)
        .unwrap();

    assert_eq!(report.fixtures, FixtureSelection::Local);
    assert_eq!(report.tasks.len(), 1);
    assert_eq!(report.contracts.master_copies.len(), 1);
    assert_eq!(report.contracts.proxy_factories.len(), 1);
    assert_eq!(store.list_periodic_tasks().unwrap().len(), 1);
}

#[test]
fn report_serializes_outcomes() {
    let config = SetupConfig {
        database_path: test_db_path("report-json"),
        fixtures: FixtureSelection::Network(Network::Volta),
    };

    let report = run_setup(&config).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["fixtures"]["source"], "network");
    assert_eq!(json["fixtures"]["network"], "volta");
    assert_eq!(json["tasks"][0]["outcome"], "created");
    assert_eq!(json["tasks"][0]["interval"]["period"], "seconds");
    assert_eq!(json["contracts"]["proxy_factories"][0]["outcome"], "created");
}

#[test]
fn storage_failures_abort_the_pass() {
    let directory = test_db_path("not-a-database");
    std::fs::create_dir_all(&directory).unwrap();
    let config = SetupConfig {
        database_path: directory,
        fixtures: FixtureSelection::Local,
    };

    let error = run_setup(&config).unwrap_err();
    assert_eq!(error.kind, CoreErrorKind::StorageFailure);
}
