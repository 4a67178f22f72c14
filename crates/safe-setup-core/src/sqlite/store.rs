use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use alloy_primitives::Address;
use rusqlite::{Connection, OptionalExtension, Row, params};

use crate::models::{
    CoreError, CoreErrorKind, IntervalPeriod, IntervalSchedule, IntervalScheduleRecord,
    MasterCopyRecord, NewPeriodicTask, PeriodicTaskRecord, ProxyFactoryRecord, ScheduleId,
};
use crate::persistence::{
    ContractStore, MigrationStore, PeriodicTaskStore, PersistenceResult, ScheduleStore,
};
use crate::sqlite::migrations::{SqliteMigration, current_schema_version, migration, migrations};

const MIGRATIONS_TABLE: &str = "setup_schema_migrations";

pub struct SqliteStore {
    database_path: PathBuf,
}

impl SqliteStore {
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
        }
    }

    pub fn database_path(&self) -> &Path {
        &self.database_path
    }

    pub fn planned_migrations(&self, from_version: i64) -> Vec<&'static SqliteMigration> {
        migrations()
            .iter()
            .filter(|entry| entry.version > from_version)
            .collect()
    }

    pub fn migrate_to_latest(&self) -> PersistenceResult<()> {
        self.apply_migration(current_schema_version())
    }

    fn with_connection<T>(
        &self,
        operation_name: &str,
        operation: impl FnOnce(&mut Connection) -> rusqlite::Result<T>,
    ) -> PersistenceResult<T> {
        let mut connection = open_connection(&self.database_path)
            .map_err(|error| storage_error(operation_name, error))?;
        operation(&mut connection).map_err(|error| storage_error(operation_name, error))
    }
}

impl MigrationStore for SqliteStore {
    fn current_version(&self) -> PersistenceResult<i64> {
        self.with_connection("current_version", |connection| {
            ensure_migrations_table(connection)?;
            read_current_version(connection)
        })
    }

    fn apply_migration(&self, target_version: i64) -> PersistenceResult<()> {
        if target_version < 0 || target_version > current_schema_version() {
            return Err(storage_error_text(
                "apply_migration",
                format!("invalid migration target version '{target_version}'"),
            ));
        }

        self.with_connection("apply_migration", |connection| {
            ensure_migrations_table(connection)?;
            let current_version = read_current_version(connection)?;

            if target_version == current_version {
                // Replay DDL so tables dropped behind a recorded version come
                // back. Every statement is IF NOT EXISTS.
                for version in 1..=target_version {
                    connection.execute_batch(defined_migration(version)?.up_sql)?;
                }
                return Ok(());
            }

            if target_version > current_version {
                for version in (current_version + 1)..=target_version {
                    apply_up_migration(connection, defined_migration(version)?)?;
                }
            } else {
                for version in ((target_version + 1)..=current_version).rev() {
                    apply_down_migration(connection, defined_migration(version)?)?;
                }
            }

            Ok(())
        })
    }
}

impl ScheduleStore for SqliteStore {
    fn get_or_create_interval(
        &self,
        schedule: IntervalSchedule,
    ) -> PersistenceResult<IntervalScheduleRecord> {
        if schedule.every == 0 {
            return Err(CoreError::invalid_input(format!(
                "interval schedule '{schedule}' must repeat at least once per period"
            )));
        }

        self.with_connection("get_or_create_interval", |connection| {
            ensure_schema_ready(connection)?;
            let transaction = connection.transaction()?;

            transaction.execute(
                "
INSERT INTO interval_schedules (every, period)
VALUES (?1, ?2)
ON CONFLICT(every, period) DO NOTHING
",
                params![i64::from(schedule.every), schedule.period.as_str()],
            )?;
            let id: i64 = transaction.query_row(
                "SELECT id FROM interval_schedules WHERE every = ?1 AND period = ?2",
                params![i64::from(schedule.every), schedule.period.as_str()],
                |row| row.get(0),
            )?;

            transaction.commit()?;
            Ok(IntervalScheduleRecord {
                id: ScheduleId(id),
                schedule,
            })
        })
    }

    fn list_intervals(&self) -> PersistenceResult<Vec<IntervalScheduleRecord>> {
        self.with_connection("list_intervals", |connection| {
            ensure_schema_ready(connection)?;
            let mut statement = connection.prepare(
                "
SELECT id, every, period
FROM interval_schedules
ORDER BY id
",
            )?;

            let rows = statement.query_map([], |row| {
                let id: i64 = row.get(0)?;
                let every_raw: i64 = row.get(1)?;
                let period_raw: String = row.get(2)?;

                Ok(IntervalScheduleRecord {
                    id: ScheduleId(id),
                    schedule: IntervalSchedule {
                        every: u32::try_from(every_raw).map_err(|_| {
                            storage_error_sqlite("interval magnitude exceeds u32 range")
                        })?,
                        period: parse_interval_period(&period_raw)?,
                    },
                })
            })?;

            rows.collect()
        })
    }
}

impl PeriodicTaskStore for SqliteStore {
    fn find_periodic_task(&self, task: &str) -> PersistenceResult<Option<PeriodicTaskRecord>> {
        self.with_connection("find_periodic_task", |connection| {
            ensure_schema_ready(connection)?;
            connection
                .query_row(
                    "
SELECT task, name, interval_id, changed_at_unix
FROM periodic_tasks
WHERE task = ?1
",
                    [task],
                    periodic_task_from_row,
                )
                .optional()
        })
    }

    fn create_periodic_task(&self, task: &NewPeriodicTask<'_>) -> PersistenceResult<()> {
        self.with_connection("create_periodic_task", |connection| {
            ensure_schema_ready(connection)?;
            connection.execute(
                "
INSERT INTO periodic_tasks (task, name, interval_id, changed_at_unix)
VALUES (?1, ?2, ?3, strftime('%s', 'now'))
",
                params![task.task, task.name, task.schedule_id.0],
            )?;
            Ok(())
        })
    }

    fn set_periodic_task_interval(
        &self,
        task: &str,
        schedule_id: ScheduleId,
    ) -> PersistenceResult<()> {
        self.with_connection("set_periodic_task_interval", |connection| {
            ensure_schema_ready(connection)?;
            let updated = connection.execute(
                "
UPDATE periodic_tasks
SET interval_id = ?2, changed_at_unix = strftime('%s', 'now')
WHERE task = ?1
",
                params![task, schedule_id.0],
            )?;

            if updated == 0 {
                return Err(storage_error_sqlite(
                    "periodic task was not found for update",
                ));
            }
            Ok(())
        })
    }

    fn list_periodic_tasks(&self) -> PersistenceResult<Vec<PeriodicTaskRecord>> {
        self.with_connection("list_periodic_tasks", |connection| {
            ensure_schema_ready(connection)?;
            let mut statement = connection.prepare(
                "
SELECT task, name, interval_id, changed_at_unix
FROM periodic_tasks
ORDER BY task
",
            )?;

            let rows = statement.query_map([], periodic_task_from_row)?;
            rows.collect()
        })
    }
}

impl ContractStore for SqliteStore {
    fn find_master_copy(&self, address: Address) -> PersistenceResult<Option<MasterCopyRecord>> {
        self.with_connection("find_master_copy", |connection| {
            ensure_schema_ready(connection)?;
            connection
                .query_row(
                    "
SELECT address, initial_block_number, tx_block_number, version
FROM safe_master_copies
WHERE address = ?1
",
                    [address_to_sqlite(address)],
                    master_copy_from_row,
                )
                .optional()
        })
    }

    fn create_master_copy(&self, record: &MasterCopyRecord) -> PersistenceResult<()> {
        self.with_connection("create_master_copy", |connection| {
            ensure_schema_ready(connection)?;
            connection.execute(
                "
INSERT INTO safe_master_copies (address, initial_block_number, tx_block_number, version)
VALUES (?1, ?2, ?3, ?4)
",
                params![
                    address_to_sqlite(record.address),
                    block_to_i64(record.initial_block_number)?,
                    block_to_i64(record.tx_block_number)?,
                    record.version.as_str(),
                ],
            )?;
            Ok(())
        })
    }

    fn set_master_copy_version(&self, address: Address, version: &str) -> PersistenceResult<()> {
        self.with_connection("set_master_copy_version", |connection| {
            ensure_schema_ready(connection)?;
            let updated = connection.execute(
                "UPDATE safe_master_copies SET version = ?2 WHERE address = ?1",
                params![address_to_sqlite(address), version],
            )?;

            if updated == 0 {
                return Err(storage_error_sqlite("master copy was not found for update"));
            }
            Ok(())
        })
    }

    fn set_master_copy_tx_block_number(
        &self,
        address: Address,
        tx_block_number: u64,
    ) -> PersistenceResult<()> {
        self.with_connection("set_master_copy_tx_block_number", |connection| {
            ensure_schema_ready(connection)?;
            let updated = connection.execute(
                "UPDATE safe_master_copies SET tx_block_number = ?2 WHERE address = ?1",
                params![address_to_sqlite(address), block_to_i64(tx_block_number)?],
            )?;

            if updated == 0 {
                return Err(storage_error_sqlite("master copy was not found for update"));
            }
            Ok(())
        })
    }

    fn list_master_copies(&self) -> PersistenceResult<Vec<MasterCopyRecord>> {
        self.with_connection("list_master_copies", |connection| {
            ensure_schema_ready(connection)?;
            let mut statement = connection.prepare(
                "
SELECT address, initial_block_number, tx_block_number, version
FROM safe_master_copies
ORDER BY initial_block_number, address
",
            )?;

            let rows = statement.query_map([], master_copy_from_row)?;
            rows.collect()
        })
    }

    fn find_proxy_factory(
        &self,
        address: Address,
    ) -> PersistenceResult<Option<ProxyFactoryRecord>> {
        self.with_connection("find_proxy_factory", |connection| {
            ensure_schema_ready(connection)?;
            connection
                .query_row(
                    "
SELECT address, initial_block_number, tx_block_number
FROM proxy_factories
WHERE address = ?1
",
                    [address_to_sqlite(address)],
                    proxy_factory_from_row,
                )
                .optional()
        })
    }

    fn create_proxy_factory(&self, record: &ProxyFactoryRecord) -> PersistenceResult<()> {
        self.with_connection("create_proxy_factory", |connection| {
            ensure_schema_ready(connection)?;
            connection.execute(
                "
INSERT INTO proxy_factories (address, initial_block_number, tx_block_number)
VALUES (?1, ?2, ?3)
",
                params![
                    address_to_sqlite(record.address),
                    block_to_i64(record.initial_block_number)?,
                    block_to_i64(record.tx_block_number)?,
                ],
            )?;
            Ok(())
        })
    }

    fn set_proxy_factory_tx_block_number(
        &self,
        address: Address,
        tx_block_number: u64,
    ) -> PersistenceResult<()> {
        self.with_connection("set_proxy_factory_tx_block_number", |connection| {
            ensure_schema_ready(connection)?;
            let updated = connection.execute(
                "UPDATE proxy_factories SET tx_block_number = ?2 WHERE address = ?1",
                params![address_to_sqlite(address), block_to_i64(tx_block_number)?],
            )?;

            if updated == 0 {
                return Err(storage_error_sqlite(
                    "proxy factory was not found for update",
                ));
            }
            Ok(())
        })
    }

    fn list_proxy_factories(&self) -> PersistenceResult<Vec<ProxyFactoryRecord>> {
        self.with_connection("list_proxy_factories", |connection| {
            ensure_schema_ready(connection)?;
            let mut statement = connection.prepare(
                "
SELECT address, initial_block_number, tx_block_number
FROM proxy_factories
ORDER BY initial_block_number, address
",
            )?;

            let rows = statement.query_map([], proxy_factory_from_row)?;
            rows.collect()
        })
    }
}

fn open_connection(database_path: &Path) -> rusqlite::Result<Connection> {
    if let Some(parent) = database_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|error| rusqlite::Error::ToSqlConversionFailure(Box::new(error)))?;
    }
    let connection = Connection::open(database_path)?;
    connection.pragma_update(None, "foreign_keys", "ON")?;
    Ok(connection)
}

fn ensure_migrations_table(connection: &Connection) -> rusqlite::Result<()> {
    connection.execute_batch(&format!(
        "
CREATE TABLE IF NOT EXISTS {MIGRATIONS_TABLE} (
    version INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    applied_at_unix INTEGER NOT NULL
);
"
    ))?;
    Ok(())
}

fn ensure_schema_ready(connection: &Connection) -> rusqlite::Result<()> {
    ensure_migrations_table(connection)?;
    let version = read_current_version(connection)?;
    if version <= 0 {
        return Err(storage_error_sqlite(
            "database schema is not initialized; apply migrations before setup operations",
        ));
    }
    Ok(())
}

fn read_current_version(connection: &Connection) -> rusqlite::Result<i64> {
    connection.query_row(
        &format!("SELECT COALESCE(MAX(version), 0) FROM {MIGRATIONS_TABLE}"),
        [],
        |row| row.get(0),
    )
}

fn defined_migration(version: i64) -> rusqlite::Result<&'static SqliteMigration> {
    migration(version).ok_or_else(|| {
        storage_error_sqlite(&format!("migration version '{version}' is not defined"))
    })
}

fn apply_up_migration(
    connection: &mut Connection,
    migration: &SqliteMigration,
) -> rusqlite::Result<()> {
    let transaction = connection.transaction()?;
    transaction.execute_batch(migration.up_sql)?;
    transaction.execute(
        &format!(
            "INSERT INTO {MIGRATIONS_TABLE} (version, name, applied_at_unix)
             VALUES (?1, ?2, strftime('%s', 'now'))"
        ),
        (migration.version, migration.name),
    )?;
    transaction.commit()?;
    Ok(())
}

fn apply_down_migration(
    connection: &mut Connection,
    migration: &SqliteMigration,
) -> rusqlite::Result<()> {
    let transaction = connection.transaction()?;
    transaction.execute_batch(migration.down_sql)?;
    transaction.execute(
        &format!("DELETE FROM {MIGRATIONS_TABLE} WHERE version = ?1"),
        [migration.version],
    )?;
    transaction.commit()?;
    Ok(())
}

fn periodic_task_from_row(row: &Row<'_>) -> rusqlite::Result<PeriodicTaskRecord> {
    let task: String = row.get(0)?;
    let name: String = row.get(1)?;
    let interval_id: i64 = row.get(2)?;
    let changed_at_unix: i64 = row.get(3)?;

    Ok(PeriodicTaskRecord {
        task,
        name,
        schedule_id: ScheduleId(interval_id),
        changed_at: from_unix_seconds(changed_at_unix)?,
    })
}

fn master_copy_from_row(row: &Row<'_>) -> rusqlite::Result<MasterCopyRecord> {
    let address_raw: String = row.get(0)?;
    let initial_block_number: i64 = row.get(1)?;
    let tx_block_number: i64 = row.get(2)?;
    let version: String = row.get(3)?;

    Ok(MasterCopyRecord {
        address: parse_address(&address_raw)?,
        initial_block_number: block_from_i64(initial_block_number)?,
        tx_block_number: block_from_i64(tx_block_number)?,
        version,
    })
}

fn proxy_factory_from_row(row: &Row<'_>) -> rusqlite::Result<ProxyFactoryRecord> {
    let address_raw: String = row.get(0)?;
    let initial_block_number: i64 = row.get(1)?;
    let tx_block_number: i64 = row.get(2)?;

    Ok(ProxyFactoryRecord {
        address: parse_address(&address_raw)?,
        initial_block_number: block_from_i64(initial_block_number)?,
        tx_block_number: block_from_i64(tx_block_number)?,
    })
}

fn storage_error(operation: &str, error: rusqlite::Error) -> CoreError {
    storage_error_text(operation, error.to_string())
}

fn storage_error_sqlite(message: &str) -> rusqlite::Error {
    rusqlite::Error::ToSqlConversionFailure(Box::new(std::io::Error::other(message.to_string())))
}

fn parse_interval_period(raw: &str) -> rusqlite::Result<IntervalPeriod> {
    raw.parse::<IntervalPeriod>().map_err(|_| {
        storage_error_sqlite(&format!(
            "unknown interval period '{raw}' in sqlite record"
        ))
    })
}

/// Rows store and look up addresses in EIP-55 form only.
fn address_to_sqlite(address: Address) -> String {
    address.to_checksum(None)
}

fn parse_address(raw: &str) -> rusqlite::Result<Address> {
    raw.parse::<Address>().map_err(|error| {
        storage_error_sqlite(&format!(
            "invalid address '{raw}' in sqlite record: {error}"
        ))
    })
}

fn block_to_i64(value: u64) -> rusqlite::Result<i64> {
    i64::try_from(value).map_err(|_| storage_error_sqlite("block number exceeds i64 range"))
}

fn block_from_i64(value: i64) -> rusqlite::Result<u64> {
    u64::try_from(value).map_err(|_| storage_error_sqlite("negative block number in sqlite record"))
}

fn from_unix_seconds(value: i64) -> rusqlite::Result<SystemTime> {
    if value < 0 {
        return Err(storage_error_sqlite(
            "negative unix timestamps are not supported",
        ));
    }
    let seconds = u64::try_from(value)
        .map_err(|_| storage_error_sqlite("failed to convert unix timestamp to u64"))?;
    Ok(UNIX_EPOCH + Duration::from_secs(seconds))
}

fn storage_error_text(operation: &str, message: impl AsRef<str>) -> CoreError {
    CoreError {
        kind: CoreErrorKind::StorageFailure,
        message: format!("sqlite store '{operation}' failed: {}", message.as_ref()),
    }
}
