pub mod contract;
pub mod error;
pub mod network;
pub mod periodic_task;
pub mod schedule;

pub use contract::{MasterCopyFixture, MasterCopyRecord, ProxyFactoryFixture, ProxyFactoryRecord};
pub use error::{CoreError, CoreErrorKind};
pub use network::Network;
pub use periodic_task::{NewPeriodicTask, PeriodicTaskRecord, PeriodicTaskSpec};
pub use schedule::{IntervalPeriod, IntervalSchedule, IntervalScheduleRecord, ScheduleId};
