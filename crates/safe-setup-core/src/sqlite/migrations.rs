#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SqliteMigration {
    pub version: i64,
    pub name: &'static str,
    pub up_sql: &'static str,
    pub down_sql: &'static str,
}

const MIGRATION_0001: SqliteMigration = SqliteMigration {
    version: 1,
    name: "initial_setup_schema",
    up_sql: r#"
CREATE TABLE IF NOT EXISTS interval_schedules (
    id INTEGER PRIMARY KEY,
    every INTEGER NOT NULL CHECK (every > 0),
    period TEXT NOT NULL,
    UNIQUE (every, period)
);

CREATE TABLE IF NOT EXISTS periodic_tasks (
    task TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    interval_id INTEGER NOT NULL REFERENCES interval_schedules (id),
    changed_at_unix INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS safe_master_copies (
    address TEXT PRIMARY KEY,
    initial_block_number INTEGER NOT NULL,
    tx_block_number INTEGER NOT NULL,
    version TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS proxy_factories (
    address TEXT PRIMARY KEY,
    initial_block_number INTEGER NOT NULL,
    tx_block_number INTEGER NOT NULL
);
"#,
    down_sql: r#"
DROP TABLE IF EXISTS proxy_factories;
DROP TABLE IF EXISTS safe_master_copies;
DROP TABLE IF EXISTS periodic_tasks;
DROP TABLE IF EXISTS interval_schedules;
"#,
};

const MIGRATIONS: [SqliteMigration; 1] = [MIGRATION_0001];

pub fn migrations() -> &'static [SqliteMigration] {
    &MIGRATIONS
}

pub fn migration(version: i64) -> Option<&'static SqliteMigration> {
    MIGRATIONS.iter().find(|entry| entry.version == version)
}

pub fn current_schema_version() -> i64 {
    MIGRATIONS.last().map(|entry| entry.version).unwrap_or(0)
}
