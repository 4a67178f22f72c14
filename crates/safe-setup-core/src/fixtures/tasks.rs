use crate::models::{IntervalSchedule, PeriodicTaskSpec};

/// Jobs the external scheduler runs for the history indexer.
pub const TASKS: &[PeriodicTaskSpec] = &[
    PeriodicTaskSpec {
        task: "safe_transaction_service.history.tasks.index_internal_txs_task",
        name: "Index Internal Txs",
        interval: IntervalSchedule::seconds(13),
    },
    PeriodicTaskSpec {
        task: "safe_transaction_service.history.tasks.index_erc20_events_task",
        name: "Index ERC20 Events",
        interval: IntervalSchedule::seconds(14),
    },
    PeriodicTaskSpec {
        task: "safe_transaction_service.history.tasks.process_decoded_internal_txs_task",
        name: "Process Internal Txs",
        interval: IntervalSchedule::minutes(2),
    },
    PeriodicTaskSpec {
        task: "safe_transaction_service.history.tasks.check_reorgs_task",
        name: "Check Reorgs",
        interval: IntervalSchedule::minutes(3),
    },
];
