use serde::Serialize;
use tracing::{debug, info};

use crate::models::{IntervalSchedule, NewPeriodicTask, PeriodicTaskRecord, PeriodicTaskSpec};
use crate::persistence::{PeriodicTaskStore, PersistenceResult, ScheduleStore};
use crate::setup::reconcile::{Correction, ReconcileOutcome, reconcile};

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TaskRegistration {
    pub task: &'static str,
    pub interval: IntervalSchedule,
    #[serde(flatten)]
    pub outcome: ReconcileOutcome,
}

impl TaskRegistration {
    pub fn created(&self) -> bool {
        self.outcome.created()
    }
}

/// Ensures every declared periodic task exists and points at its declared
/// interval. Labels of existing tasks are left as they are.
pub struct TaskRegistrar<'a, S> {
    store: &'a S,
}

impl<'a, S> TaskRegistrar<'a, S>
where
    S: ScheduleStore + PeriodicTaskStore,
{
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub fn register_all(
        &self,
        specs: &[PeriodicTaskSpec],
    ) -> PersistenceResult<Vec<TaskRegistration>> {
        specs.iter().map(|spec| self.register(spec)).collect()
    }

    pub fn register(&self, spec: &PeriodicTaskSpec) -> PersistenceResult<TaskRegistration> {
        let interval = self.store.get_or_create_interval(spec.interval)?;

        let corrections = [Correction::new(
            "interval",
            |stored: &PeriodicTaskRecord| stored.schedule_id != interval.id,
            |stored| self.store.set_periodic_task_interval(&stored.task, interval.id),
        )];
        let outcome = reconcile(
            || self.store.find_periodic_task(spec.task),
            || {
                self.store.create_periodic_task(&NewPeriodicTask {
                    task: spec.task,
                    name: spec.name,
                    schedule_id: interval.id,
                })
            },
            &corrections,
        )?;

        match &outcome {
            ReconcileOutcome::Created => {
                info!(task = spec.task, interval = %spec.interval, "created periodic task");
            }
            ReconcileOutcome::Updated { .. } => {
                info!(
                    task = spec.task,
                    interval = %spec.interval,
                    "moved periodic task to declared interval"
                );
            }
            ReconcileOutcome::Unchanged => {
                debug!(task = spec.task, "periodic task already registered");
            }
        }

        Ok(TaskRegistration {
            task: spec.task,
            interval: spec.interval,
            outcome,
        })
    }
}
