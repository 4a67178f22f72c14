use alloy_primitives::Address;
use serde::Serialize;
use tracing::{debug, info};

use crate::fixtures::ContractFixtures;
use crate::models::{MasterCopyFixture, MasterCopyRecord, ProxyFactoryFixture, ProxyFactoryRecord};
use crate::persistence::{ContractStore, PersistenceResult};
use crate::setup::reconcile::{Correction, ReconcileOutcome, reconcile};

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ContractSetup {
    pub address: Address,
    #[serde(flatten)]
    pub outcome: ReconcileOutcome,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct FixtureReport {
    pub master_copies: Vec<ContractSetup>,
    pub proxy_factories: Vec<ContractSetup>,
}

/// Seeds master copies and proxy factories from a fixture table. Existing
/// rows keep their block numbers; only a master copy's declared version is
/// corrected.
pub struct FixtureLoader<'a, S> {
    store: &'a S,
}

impl<'a, S> FixtureLoader<'a, S>
where
    S: ContractStore,
{
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub fn load(&self, fixtures: &ContractFixtures) -> PersistenceResult<FixtureReport> {
        let master_copies = fixtures
            .master_copies
            .iter()
            .map(|fixture| self.setup_master_copy(fixture))
            .collect::<PersistenceResult<Vec<_>>>()?;
        let proxy_factories = fixtures
            .proxy_factories
            .iter()
            .map(|fixture| self.setup_proxy_factory(fixture))
            .collect::<PersistenceResult<Vec<_>>>()?;

        Ok(FixtureReport {
            master_copies,
            proxy_factories,
        })
    }

    pub fn setup_master_copy(
        &self,
        fixture: &MasterCopyFixture,
    ) -> PersistenceResult<ContractSetup> {
        let corrections: Vec<Correction<'_, MasterCopyRecord>> = match fixture.version {
            Some(version) => vec![Correction::new(
                "version",
                move |stored: &MasterCopyRecord| stored.version != version,
                move |stored| self.store.set_master_copy_version(stored.address, version),
            )],
            None => Vec::new(),
        };
        let outcome = reconcile(
            || self.store.find_master_copy(fixture.address),
            || {
                self.store.create_master_copy(&MasterCopyRecord {
                    address: fixture.address,
                    initial_block_number: fixture.initial_block_number,
                    tx_block_number: fixture.initial_block_number,
                    version: fixture.version.unwrap_or_default().to_string(),
                })
            },
            &corrections,
        )?;

        match &outcome {
            ReconcileOutcome::Created => info!(
                address = %fixture.address,
                initial_block_number = fixture.initial_block_number,
                version = fixture.version,
                "created master copy"
            ),
            ReconcileOutcome::Updated { .. } => info!(
                address = %fixture.address,
                version = fixture.version,
                "corrected master copy version"
            ),
            ReconcileOutcome::Unchanged => {
                debug!(address = %fixture.address, "master copy already up to date")
            }
        }

        Ok(ContractSetup {
            address: fixture.address,
            outcome,
        })
    }

    pub fn setup_proxy_factory(
        &self,
        fixture: &ProxyFactoryFixture,
    ) -> PersistenceResult<ContractSetup> {
        let outcome = reconcile(
            || self.store.find_proxy_factory(fixture.address),
            || {
                self.store.create_proxy_factory(&ProxyFactoryRecord {
                    address: fixture.address,
                    initial_block_number: fixture.initial_block_number,
                    tx_block_number: fixture.initial_block_number,
                })
            },
            &[],
        )?;

        if outcome.created() {
            info!(
                address = %fixture.address,
                initial_block_number = fixture.initial_block_number,
                "created proxy factory"
            );
        } else {
            debug!(address = %fixture.address, "proxy factory already present");
        }

        Ok(ContractSetup {
            address: fixture.address,
            outcome,
        })
    }
}
