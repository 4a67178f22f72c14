use std::collections::HashSet;

use safe_setup_core::sqlite::{current_schema_version, migration, migrations};

const SETUP_TABLES: [&str; 4] = [
    "interval_schedules",
    "periodic_tasks",
    "safe_master_copies",
    "proxy_factories",
];

#[test]
fn migration_versions_are_strictly_increasing_with_unique_names() {
    let entries = migrations();
    assert!(!entries.is_empty());

    let mut previous = 0;
    let mut names = HashSet::new();
    for entry in entries {
        assert!(entry.version > previous);
        assert!(names.insert(entry.name), "duplicate migration {}", entry.name);
        previous = entry.version;
    }
}

#[test]
fn latest_migration_is_addressable() {
    let latest = current_schema_version();
    assert_eq!(migration(latest).map(|entry| entry.version), Some(latest));
    assert!(migration(latest + 1).is_none());
}

#[test]
fn every_setup_table_is_created_and_dropped() {
    let up: String = migrations().iter().map(|entry| entry.up_sql).collect();
    let down: String = migrations().iter().map(|entry| entry.down_sql).collect();

    for table in SETUP_TABLES {
        assert!(
            up.contains(&format!("CREATE TABLE IF NOT EXISTS {table}")),
            "{table} is never created"
        );
        assert!(
            down.contains(&format!("DROP TABLE IF EXISTS {table}")),
            "{table} is never dropped"
        );
    }
}
