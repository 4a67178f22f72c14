use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalPeriod {
    Days,
    Hours,
    Minutes,
    Seconds,
    Microseconds,
}

impl IntervalPeriod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Days => "days",
            Self::Hours => "hours",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
            Self::Microseconds => "microseconds",
        }
    }
}

impl std::str::FromStr for IntervalPeriod {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "days" => Ok(Self::Days),
            "hours" => Ok(Self::Hours),
            "minutes" => Ok(Self::Minutes),
            "seconds" => Ok(Self::Seconds),
            "microseconds" => Ok(Self::Microseconds),
            _ => Err(()),
        }
    }
}

/// A recurring interval. Two schedules are the same schedule iff both fields
/// match, which is also the uniqueness key of the persisted row.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct IntervalSchedule {
    pub every: u32,
    pub period: IntervalPeriod,
}

impl IntervalSchedule {
    pub const fn new(every: u32, period: IntervalPeriod) -> Self {
        Self { every, period }
    }

    pub const fn seconds(every: u32) -> Self {
        Self::new(every, IntervalPeriod::Seconds)
    }

    pub const fn minutes(every: u32) -> Self {
        Self::new(every, IntervalPeriod::Minutes)
    }
}

impl std::fmt::Display for IntervalSchedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "every {} {}", self.every, self.period.as_str())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ScheduleId(pub i64);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct IntervalScheduleRecord {
    pub id: ScheduleId,
    pub schedule: IntervalSchedule,
}
