use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use serde::Serialize;

use crate::fixtures::{ContractFixtures, LOCAL_FIXTURES, network_fixtures};
use crate::models::{CoreError, Network};

/// Which contract fixture table a deployment seeds.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "source", content = "network", rename_all = "snake_case")]
pub enum FixtureSelection {
    Network(Network),
    /// Single-address fixture for a developer chain.
    Local,
}

impl FixtureSelection {
    /// Exactly one of a network or the local fixture must be requested.
    pub fn from_options(network: Option<Network>, local: bool) -> Result<Self, CoreError> {
        match (network, local) {
            (Some(network), false) => Ok(Self::Network(network)),
            (None, true) => Ok(Self::Local),
            (Some(network), true) => Err(CoreError::invalid_input(format!(
                "network '{network}' and the local fixture were both selected; pick one"
            ))),
            (None, false) => Err(CoreError::invalid_input(
                "no fixture source selected; configure a network or the local fixture",
            )),
        }
    }

    pub fn fixtures(self) -> ContractFixtures {
        match self {
            Self::Network(network) => network_fixtures(network),
            Self::Local => LOCAL_FIXTURES,
        }
    }
}

impl Display for FixtureSelection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network(network) => write!(f, "{network} (chain id {})", network.chain_id()),
            Self::Local => f.write_str("local fixture"),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SetupConfig {
    pub database_path: PathBuf,
    pub fixtures: FixtureSelection,
}

#[cfg(test)]
mod tests {
    use super::FixtureSelection;
    use crate::fixtures::LOCAL_FIXTURES;
    use crate::models::{CoreErrorKind, Network};

    #[test]
    fn requires_exactly_one_fixture_source() {
        assert_eq!(
            FixtureSelection::from_options(Some(Network::Goerli), false).unwrap(),
            FixtureSelection::Network(Network::Goerli)
        );
        assert_eq!(
            FixtureSelection::from_options(None, true).unwrap(),
            FixtureSelection::Local
        );

        let neither = FixtureSelection::from_options(None, false).unwrap_err();
        assert_eq!(neither.kind, CoreErrorKind::InvalidInput);

        let both = FixtureSelection::from_options(Some(Network::Mainnet), true).unwrap_err();
        assert!(both.message.contains("both selected"));
    }

    #[test]
    fn local_selection_uses_single_address_fixture() {
        let fixtures = FixtureSelection::Local.fixtures();
        assert_eq!(fixtures, LOCAL_FIXTURES);
        assert_eq!(fixtures.master_copies.len(), 1);
        assert_eq!(fixtures.proxy_factories.len(), 1);
    }
}
