use std::time::SystemTime;

use crate::models::{IntervalSchedule, ScheduleId};

/// Declares a job the external scheduler must invoke on an interval.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PeriodicTaskSpec {
    /// Import path of the job; the reconciliation key.
    pub task: &'static str,
    pub name: &'static str,
    pub interval: IntervalSchedule,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NewPeriodicTask<'a> {
    pub task: &'a str,
    pub name: &'a str,
    pub schedule_id: ScheduleId,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PeriodicTaskRecord {
    pub task: String,
    pub name: String,
    pub schedule_id: ScheduleId,
    pub changed_at: SystemTime,
}
