pub mod fixture_loader;
pub mod reconcile;
pub mod service;
pub mod task_registrar;

pub use fixture_loader::{ContractSetup, FixtureLoader, FixtureReport};
pub use reconcile::{Correction, ReconcileOutcome, reconcile};
pub use service::{SetupReport, SetupService, run_setup};
pub use task_registrar::{TaskRegistrar, TaskRegistration};
