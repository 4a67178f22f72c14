//! Compiled-in setup data: the periodic task list and the known Safe
//! deployments per network.

pub mod contracts;
pub mod tasks;

use std::collections::HashSet;

pub use contracts::{ContractFixtures, LOCAL_FIXTURES, network_fixtures};
pub use tasks::TASKS;

use crate::models::{CoreError, Network};

/// Checks the compiled-in tables before anything is written: task identifiers
/// and per-table addresses are unique, intervals are non-zero and every
/// master-copy version label is valid semver.
pub fn validate_catalog() -> Result<(), CoreError> {
    let mut identifiers = HashSet::new();
    for spec in TASKS {
        if !identifiers.insert(spec.task) {
            return Err(CoreError::invalid_input(format!(
                "periodic task '{}' is declared more than once",
                spec.task
            )));
        }
        if spec.interval.every == 0 {
            return Err(CoreError::invalid_input(format!(
                "periodic task '{}' has a zero interval",
                spec.task
            )));
        }
    }

    for network in Network::ALL {
        validate_contract_fixtures(network.as_str(), &network_fixtures(network))?;
    }
    validate_contract_fixtures("local", &LOCAL_FIXTURES)
}

pub(crate) fn validate_contract_fixtures(
    source: &str,
    fixtures: &ContractFixtures,
) -> Result<(), CoreError> {
    let mut master_copies = HashSet::new();
    for fixture in fixtures.master_copies {
        if !master_copies.insert(fixture.address) {
            return Err(CoreError::invalid_input(format!(
                "{source} master copy {} is declared more than once",
                fixture.address
            )));
        }
        if let Some(version) = fixture.version {
            semver::Version::parse(version).map_err(|error| {
                CoreError::invalid_input(format!(
                    "{source} master copy {} has invalid version '{version}': {error}",
                    fixture.address
                ))
            })?;
        }
    }

    let mut proxy_factories = HashSet::new();
    for fixture in fixtures.proxy_factories {
        if !proxy_factories.insert(fixture.address) {
            return Err(CoreError::invalid_input(format!(
                "{source} proxy factory {} is declared more than once",
                fixture.address
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use alloy_primitives::address;

    use super::{ContractFixtures, validate_catalog, validate_contract_fixtures};
    use crate::models::{CoreErrorKind, MasterCopyFixture};

    #[test]
    fn compiled_catalog_is_valid() {
        validate_catalog().unwrap();
    }

    const NON_SEMVER: MasterCopyFixture = MasterCopyFixture {
        address: address!("0x00000000000000000000000000000000000000aa"),
        initial_block_number: 1,
        version: Some("v1"),
    };

    const VERSIONED: MasterCopyFixture = MasterCopyFixture {
        address: address!("0x00000000000000000000000000000000000000aa"),
        initial_block_number: 1,
        version: Some("1.0.0"),
    };

    const UNLABELLED: MasterCopyFixture = MasterCopyFixture {
        address: address!("0x00000000000000000000000000000000000000bb"),
        initial_block_number: 1,
        version: None,
    };

    #[test]
    fn accepts_master_copies_without_a_declared_version() {
        let fixtures = ContractFixtures {
            master_copies: &[VERSIONED, UNLABELLED],
            proxy_factories: &[],
        };

        validate_contract_fixtures("test", &fixtures).unwrap();
    }

    #[test]
    fn rejects_non_semver_master_copy_versions() {
        let fixtures = ContractFixtures {
            master_copies: &[NON_SEMVER],
            proxy_factories: &[],
        };

        let error = validate_contract_fixtures("test", &fixtures).unwrap_err();
        assert_eq!(error.kind, CoreErrorKind::InvalidInput);
        assert!(error.message.contains("invalid version 'v1'"));
    }

    #[test]
    fn rejects_duplicate_master_copy_addresses() {
        let fixtures = ContractFixtures {
            master_copies: &[VERSIONED, VERSIONED],
            proxy_factories: &[],
        };

        let error = validate_contract_fixtures("test", &fixtures).unwrap_err();
        assert!(error.message.contains("declared more than once"));
    }
}
