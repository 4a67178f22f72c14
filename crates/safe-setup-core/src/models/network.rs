use serde::{Deserialize, Serialize};

use crate::models::CoreError;

/// EVM networks with known Safe deployments.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Network {
    Mainnet,
    Rinkeby,
    Goerli,
    Kovan,
    Xdai,
    EnergyWebChain,
    Volta,
}

impl Network {
    pub const ALL: [Network; 7] = [
        Network::Mainnet,
        Network::Rinkeby,
        Network::Goerli,
        Network::Kovan,
        Network::Xdai,
        Network::EnergyWebChain,
        Network::Volta,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Rinkeby => "rinkeby",
            Self::Goerli => "goerli",
            Self::Kovan => "kovan",
            Self::Xdai => "xdai",
            Self::EnergyWebChain => "energy_web_chain",
            Self::Volta => "volta",
        }
    }

    pub fn chain_id(self) -> u64 {
        match self {
            Self::Mainnet => 1,
            Self::Rinkeby => 4,
            Self::Goerli => 5,
            Self::Kovan => 42,
            Self::Xdai => 100,
            Self::EnergyWebChain => 246,
            Self::Volta => 73799,
        }
    }

    pub fn from_chain_id(chain_id: u64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|network| network.chain_id() == chain_id)
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts a network name (case-insensitive, `-` or `_` separated) or a
/// decimal chain id.
impl std::str::FromStr for Network {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if let Ok(chain_id) = trimmed.parse::<u64>() {
            return Self::from_chain_id(chain_id).ok_or_else(|| {
                CoreError::invalid_input(format!("no Safe fixtures for chain id '{chain_id}'"))
            });
        }

        let normalized = trimmed.to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|network| network.as_str() == normalized)
            .ok_or_else(|| CoreError::invalid_input(format!("unknown network '{trimmed}'")))
    }
}
