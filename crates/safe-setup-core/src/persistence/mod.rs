pub mod contract_store;

pub use contract_store::ContractStore;

use crate::models::{
    CoreError, IntervalSchedule, IntervalScheduleRecord, NewPeriodicTask, PeriodicTaskRecord,
    ScheduleId,
};

pub type PersistenceResult<T> = Result<T, CoreError>;

pub trait MigrationStore: Send + Sync {
    fn current_version(&self) -> PersistenceResult<i64>;

    fn apply_migration(&self, target_version: i64) -> PersistenceResult<()>;
}

pub trait ScheduleStore: Send + Sync {
    /// Returns the row matching `schedule` by value, inserting it first when
    /// no such row exists.
    fn get_or_create_interval(
        &self,
        schedule: IntervalSchedule,
    ) -> PersistenceResult<IntervalScheduleRecord>;

    fn list_intervals(&self) -> PersistenceResult<Vec<IntervalScheduleRecord>>;
}

pub trait PeriodicTaskStore: Send + Sync {
    fn find_periodic_task(&self, task: &str) -> PersistenceResult<Option<PeriodicTaskRecord>>;

    fn create_periodic_task(&self, task: &NewPeriodicTask<'_>) -> PersistenceResult<()>;

    /// Re-points the task at `schedule_id` without touching its name.
    fn set_periodic_task_interval(
        &self,
        task: &str,
        schedule_id: ScheduleId,
    ) -> PersistenceResult<()>;

    fn list_periodic_tasks(&self) -> PersistenceResult<Vec<PeriodicTaskRecord>>;
}
