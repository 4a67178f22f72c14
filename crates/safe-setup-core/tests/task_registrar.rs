use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use safe_setup_core::fixtures::TASKS;
use safe_setup_core::models::{IntervalSchedule, NewPeriodicTask, PeriodicTaskSpec};
use safe_setup_core::persistence::{PeriodicTaskStore, ScheduleStore};
use safe_setup_core::setup::{ReconcileOutcome, TaskRegistrar};
use safe_setup_core::sqlite::SqliteStore;

fn test_db_path(test_name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("safe-setup-{test_name}-{nanos}.sqlite3"))
}

fn migrated_store(test_name: &str) -> SqliteStore {
    let store = SqliteStore::new(test_db_path(test_name));
    store.migrate_to_latest().unwrap();
    store
}

const INDEX_TASK: PeriodicTaskSpec = PeriodicTaskSpec {
    task: "history.tasks.index_internal_txs_task",
    name: "Index Internal Txs",
    interval: IntervalSchedule::seconds(13),
};

#[test]
fn registers_one_task_per_identifier_with_declared_interval() {
    let store = migrated_store("register-all");
    let registrar = TaskRegistrar::new(&store);

    let registrations = registrar.register_all(TASKS).unwrap();
    assert_eq!(registrations.len(), TASKS.len());
    assert!(registrations.iter().all(|entry| entry.created()));

    let stored = store.list_periodic_tasks().unwrap();
    assert_eq!(stored.len(), TASKS.len());

    let intervals = store.list_intervals().unwrap();
    for spec in TASKS {
        let task = store.find_periodic_task(spec.task).unwrap().unwrap();
        assert_eq!(task.name, spec.name);
        let interval = intervals
            .iter()
            .find(|entry| entry.id == task.schedule_id)
            .expect("task must reference a stored interval");
        assert_eq!(interval.schedule, spec.interval);
    }
}

#[test]
fn second_registration_reports_existing_tasks() {
    let store = migrated_store("register-twice");
    let registrar = TaskRegistrar::new(&store);

    registrar.register_all(TASKS).unwrap();
    let before = store.list_periodic_tasks().unwrap();
    let second = registrar.register_all(TASKS).unwrap();

    assert!(
        second
            .iter()
            .all(|entry| entry.outcome == ReconcileOutcome::Unchanged)
    );
    assert_eq!(store.list_periodic_tasks().unwrap(), before);
}

#[test]
fn tasks_sharing_an_interval_share_the_schedule_row() {
    let store = migrated_store("shared-interval");
    let specs = [
        INDEX_TASK,
        PeriodicTaskSpec {
            task: "history.tasks.index_erc20_events_task",
            name: "Index ERC20 Events",
            interval: IntervalSchedule::seconds(13),
        },
    ];

    TaskRegistrar::new(&store).register_all(&specs).unwrap();

    let intervals = store.list_intervals().unwrap();
    assert_eq!(intervals.len(), 1);
    let tasks = store.list_periodic_tasks().unwrap();
    assert!(tasks.iter().all(|task| task.schedule_id == intervals[0].id));
}

#[test]
fn drifted_interval_is_repointed_and_old_schedule_kept() {
    let store = migrated_store("drift");
    let sibling = PeriodicTaskSpec {
        task: "history.tasks.check_reorgs_task",
        name: "Check Reorgs",
        interval: IntervalSchedule::seconds(13),
    };
    let registrar = TaskRegistrar::new(&store);
    registrar.register_all(&[INDEX_TASK, sibling]).unwrap();
    let old_interval = store.find_periodic_task(INDEX_TASK.task).unwrap().unwrap();

    let redeclared = PeriodicTaskSpec {
        interval: IntervalSchedule::seconds(20),
        ..INDEX_TASK
    };
    let registration = registrar.register(&redeclared).unwrap();

    assert_eq!(
        registration.outcome,
        ReconcileOutcome::Updated {
            fields: vec!["interval"]
        }
    );
    assert!(!registration.created());

    let intervals = store.list_intervals().unwrap();
    let moved = store.find_periodic_task(INDEX_TASK.task).unwrap().unwrap();
    let moved_interval = intervals
        .iter()
        .find(|entry| entry.id == moved.schedule_id)
        .unwrap();
    assert_eq!(moved_interval.schedule, IntervalSchedule::seconds(20));

    let kept = intervals
        .iter()
        .find(|entry| entry.id == old_interval.schedule_id)
        .expect("previous interval row must survive");
    assert_eq!(kept.schedule, IntervalSchedule::seconds(13));
    let sibling_task = store.find_periodic_task(sibling.task).unwrap().unwrap();
    assert_eq!(sibling_task.schedule_id, old_interval.schedule_id);
}

#[test]
fn existing_label_is_left_untouched() {
    let store = migrated_store("label");
    let interval = store
        .get_or_create_interval(INDEX_TASK.interval)
        .unwrap();
    store
        .create_periodic_task(&NewPeriodicTask {
            task: INDEX_TASK.task,
            name: "Renamed by operator",
            schedule_id: interval.id,
        })
        .unwrap();

    let registration = TaskRegistrar::new(&store).register(&INDEX_TASK).unwrap();

    assert_eq!(registration.outcome, ReconcileOutcome::Unchanged);
    let stored = store.find_periodic_task(INDEX_TASK.task).unwrap().unwrap();
    assert_eq!(stored.name, "Renamed by operator");
}
