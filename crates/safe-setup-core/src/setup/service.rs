use serde::Serialize;
use tracing::info;

use crate::config::{FixtureSelection, SetupConfig};
use crate::fixtures::{TASKS, validate_catalog};
use crate::models::PeriodicTaskSpec;
use crate::persistence::{ContractStore, PeriodicTaskStore, PersistenceResult, ScheduleStore};
use crate::setup::fixture_loader::{FixtureLoader, FixtureReport};
use crate::setup::task_registrar::{TaskRegistrar, TaskRegistration};
use crate::sqlite::SqliteStore;

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SetupReport {
    pub fixtures: FixtureSelection,
    pub tasks: Vec<TaskRegistration>,
    pub contracts: FixtureReport,
}

/// Runs the registrar and then the fixture loader against one store.
pub struct SetupService<'a, S> {
    store: &'a S,
    tasks: &'a [PeriodicTaskSpec],
}

impl<'a, S> SetupService<'a, S>
where
    S: ScheduleStore + PeriodicTaskStore + ContractStore,
{
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            tasks: TASKS,
        }
    }

    pub fn with_tasks(store: &'a S, tasks: &'a [PeriodicTaskSpec]) -> Self {
        Self { store, tasks }
    }

    pub fn run(&self, selection: FixtureSelection) -> PersistenceResult<SetupReport> {
        let tasks = TaskRegistrar::new(self.store).register_all(self.tasks)?;

        info!(fixtures = %selection, "setting up Safe contract addresses");
        let contracts = FixtureLoader::new(self.store).load(&selection.fixtures())?;

        Ok(SetupReport {
            fixtures: selection,
            tasks,
            contracts,
        })
    }
}

/// Opens the configured database, brings its schema up to date and runs the
/// full setup pass.
pub fn run_setup(config: &SetupConfig) -> PersistenceResult<SetupReport> {
    validate_catalog()?;

    let store = SqliteStore::new(config.database_path.clone());
    store.migrate_to_latest()?;
    info!(database = %store.database_path().display(), "database schema is current");

    SetupService::new(&store).run(config.fixtures)
}
