use alloy_primitives::address;

use crate::models::{MasterCopyFixture, Network, ProxyFactoryFixture};

const MAINNET_MASTER_COPIES: &[MasterCopyFixture] = &[
    MasterCopyFixture {
        address: address!("0x6851D6fDFAfD08c0295C392436245E5bc78B0185"),
        initial_block_number: 10_329_734,
        version: Some("1.2.0"),
    },
    MasterCopyFixture {
        address: address!("0x34CfAC646f301356fAa8B21e94227e3583Fe3F5F"),
        initial_block_number: 9_084_503,
        version: Some("1.1.1"),
    },
    MasterCopyFixture {
        address: address!("0xaE32496491b53841efb51829d6f886387708F99B"),
        initial_block_number: 8_915_728,
        version: Some("1.1.0"),
    },
    MasterCopyFixture {
        address: address!("0xb6029EA3B2c51D09a50B53CA8012FeEB05bDa35A"),
        initial_block_number: 7_457_553,
        version: Some("1.0.0"),
    },
    MasterCopyFixture {
        address: address!("0x8942595A2dC5181Df0465AF0D7be08c8f23C93af"),
        initial_block_number: 6_766_257,
        version: Some("0.1.0"),
    },
    MasterCopyFixture {
        address: address!("0xAC6072986E985aaBE7804695EC2d8970Cf7541A2"),
        initial_block_number: 6_569_433,
        version: Some("0.0.2"),
    },
];

const RINKEBY_MASTER_COPIES: &[MasterCopyFixture] = &[
    MasterCopyFixture {
        address: address!("0x6851D6fDFAfD08c0295C392436245E5bc78B0185"),
        initial_block_number: 6_723_632,
        version: Some("1.2.0"),
    },
    MasterCopyFixture {
        address: address!("0x34CfAC646f301356fAa8B21e94227e3583Fe3F5F"),
        initial_block_number: 5_590_754,
        version: Some("1.1.1"),
    },
    MasterCopyFixture {
        address: address!("0xaE32496491b53841efb51829d6f886387708F99B"),
        initial_block_number: 5_423_491,
        version: Some("1.1.0"),
    },
    MasterCopyFixture {
        address: address!("0xb6029EA3B2c51D09a50B53CA8012FeEB05bDa35A"),
        initial_block_number: 4_110_083,
        version: Some("1.0.0"),
    },
    MasterCopyFixture {
        address: address!("0x8942595A2dC5181Df0465AF0D7be08c8f23C93af"),
        initial_block_number: 3_392_692,
        version: Some("0.1.0"),
    },
    MasterCopyFixture {
        address: address!("0x2727D69C0BD14B1dDd28371B8D97e808aDc1C2f7"),
        initial_block_number: 3_055_781,
        version: Some("0.0.2"),
    },
];

const GOERLI_MASTER_COPIES: &[MasterCopyFixture] = &[
    MasterCopyFixture {
        address: address!("0x6851D6fDFAfD08c0295C392436245E5bc78B0185"),
        initial_block_number: 2_930_373,
        version: Some("1.2.0"),
    },
    MasterCopyFixture {
        address: address!("0x34CfAC646f301356fAa8B21e94227e3583Fe3F5F"),
        initial_block_number: 1_798_663,
        version: Some("1.1.1"),
    },
    MasterCopyFixture {
        address: address!("0xaE32496491b53841efb51829d6f886387708F99B"),
        initial_block_number: 1_631_488,
        version: Some("1.1.0"),
    },
    MasterCopyFixture {
        address: address!("0xb6029EA3B2c51D09a50B53CA8012FeEB05bDa35A"),
        initial_block_number: 319_108,
        version: Some("1.0.0"),
    },
    MasterCopyFixture {
        address: address!("0x8942595A2dC5181Df0465AF0D7be08c8f23C93af"),
        initial_block_number: 34_096,
        version: Some("0.1.0"),
    },
];

const KOVAN_MASTER_COPIES: &[MasterCopyFixture] = &[
    MasterCopyFixture {
        address: address!("0x6851D6fDFAfD08c0295C392436245E5bc78B0185"),
        initial_block_number: 19_242_615,
        version: Some("1.2.0"),
    },
    MasterCopyFixture {
        address: address!("0x34CfAC646f301356fAa8B21e94227e3583Fe3F5F"),
        initial_block_number: 15_366_145,
        version: Some("1.1.1"),
    },
    MasterCopyFixture {
        address: address!("0xaE32496491b53841efb51829d6f886387708F99B"),
        initial_block_number: 14_740_724,
        version: Some("1.1.0"),
    },
    MasterCopyFixture {
        address: address!("0xb6029EA3B2c51D09a50B53CA8012FeEB05bDa35A"),
        initial_block_number: 10_638_132,
        version: Some("1.0.0"),
    },
    MasterCopyFixture {
        address: address!("0x8942595A2dC5181Df0465AF0D7be08c8f23C93af"),
        initial_block_number: 9_465_686,
        version: Some("0.1.0"),
    },
];

const XDAI_MASTER_COPIES: &[MasterCopyFixture] = &[
    MasterCopyFixture {
        address: address!("0x6851D6fDFAfD08c0295C392436245E5bc78B0185"),
        initial_block_number: 10_612_049,
        version: Some("1.2.0"),
    },
    MasterCopyFixture {
        address: address!("0x34CfAC646f301356fAa8B21e94227e3583Fe3F5F"),
        initial_block_number: 10_045_292,
        version: Some("1.1.1"),
    },
    MasterCopyFixture {
        address: address!("0x2CB0ebc503dE87CFD8f0eCEED8197bF7850184ae"),
        initial_block_number: 12_529_466,
        version: Some("1.1.1-Circles"),
    },
];

const ENERGY_WEB_CHAIN_MASTER_COPIES: &[MasterCopyFixture] = &[
    MasterCopyFixture {
        address: address!("0x6851D6fDFAfD08c0295C392436245E5bc78B0185"),
        initial_block_number: 6_398_655,
        version: Some("1.2.0"),
    },
    MasterCopyFixture {
        address: address!("0x34CfAC646f301356fAa8B21e94227e3583Fe3F5F"),
        initial_block_number: 6_399_212,
        version: Some("1.1.1"),
    },
];

const VOLTA_MASTER_COPIES: &[MasterCopyFixture] = &[
    MasterCopyFixture {
        address: address!("0x6851D6fDFAfD08c0295C392436245E5bc78B0185"),
        initial_block_number: 6_876_086,
        version: Some("1.2.0"),
    },
    MasterCopyFixture {
        address: address!("0x34CfAC646f301356fAa8B21e94227e3583Fe3F5F"),
        initial_block_number: 6_876_642,
        version: Some("1.1.1"),
    },
];

const MAINNET_PROXY_FACTORIES: &[ProxyFactoryFixture] = &[
    // v1.1.1
    ProxyFactoryFixture {
        address: address!("0x76E2cFc1F5Fa8F6a5b3fC4c8F4788F0116861F9B"),
        initial_block_number: 9_084_508,
    },
    // v1.1.0
    ProxyFactoryFixture {
        address: address!("0x50e55Af101C777bA7A1d560a774A82eF002ced9F"),
        initial_block_number: 8_915_731,
    },
    // v1.0.0
    ProxyFactoryFixture {
        address: address!("0x12302fE9c02ff50939BaAaaf415fc226C078613C"),
        initial_block_number: 7_450_116,
    },
];

const RINKEBY_PROXY_FACTORIES: &[ProxyFactoryFixture] = &[
    ProxyFactoryFixture {
        address: address!("0x76E2cFc1F5Fa8F6a5b3fC4c8F4788F0116861F9B"),
        initial_block_number: 5_590_757,
    },
    ProxyFactoryFixture {
        address: address!("0x50e55Af101C777bA7A1d560a774A82eF002ced9F"),
        initial_block_number: 5_423_494,
    },
    ProxyFactoryFixture {
        address: address!("0x12302fE9c02ff50939BaAaaf415fc226C078613C"),
        initial_block_number: 4_110_083,
    },
];

const GOERLI_PROXY_FACTORIES: &[ProxyFactoryFixture] = &[
    ProxyFactoryFixture {
        address: address!("0x76E2cFc1F5Fa8F6a5b3fC4c8F4788F0116861F9B"),
        initial_block_number: 1_798_666,
    },
    ProxyFactoryFixture {
        address: address!("0x50e55Af101C777bA7A1d560a774A82eF002ced9F"),
        initial_block_number: 1_631_491,
    },
    ProxyFactoryFixture {
        address: address!("0x12302fE9c02ff50939BaAaaf415fc226C078613C"),
        initial_block_number: 312_509,
    },
];

const KOVAN_PROXY_FACTORIES: &[ProxyFactoryFixture] = &[
    ProxyFactoryFixture {
        address: address!("0x76E2cFc1F5Fa8F6a5b3fC4c8F4788F0116861F9B"),
        initial_block_number: 15_366_151,
    },
    ProxyFactoryFixture {
        address: address!("0x50e55Af101C777bA7A1d560a774A82eF002ced9F"),
        initial_block_number: 14_740_731,
    },
    ProxyFactoryFixture {
        address: address!("0x12302fE9c02ff50939BaAaaf415fc226C078613C"),
        initial_block_number: 10_629_898,
    },
];

const XDAI_PROXY_FACTORIES: &[ProxyFactoryFixture] = &[
    ProxyFactoryFixture {
        address: address!("0x76E2cFc1F5Fa8F6a5b3fC4c8F4788F0116861F9B"),
        initial_block_number: 10_045_327,
    },
];

const ENERGY_WEB_CHAIN_PROXY_FACTORIES: &[ProxyFactoryFixture] = &[
    ProxyFactoryFixture {
        address: address!("0x76E2cFc1F5Fa8F6a5b3fC4c8F4788F0116861F9B"),
        initial_block_number: 6_399_239,
    },
];

const VOLTA_PROXY_FACTORIES: &[ProxyFactoryFixture] = &[
    ProxyFactoryFixture {
        address: address!("0x76E2cFc1F5Fa8F6a5b3fC4c8F4788F0116861F9B"),
        initial_block_number: 6_876_681,
    },
];
const LOCAL_MASTER_COPIES: &[MasterCopyFixture] = &[MasterCopyFixture {
    address: address!("0x6C068d89dDF42F10f5c66bEB89bbCcD036C1fcb4"),
    initial_block_number: 7_398_174,
    version: None,
}];

const LOCAL_PROXY_FACTORIES: &[ProxyFactoryFixture] = &[ProxyFactoryFixture {
    address: address!("0x345C53a241D9CB7C2B45380d8f683eD616057279"),
    initial_block_number: 7_398_179,
}];

/// Contracts seeded for one fixture source.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ContractFixtures {
    pub master_copies: &'static [MasterCopyFixture],
    pub proxy_factories: &'static [ProxyFactoryFixture],
}

/// Single master copy and proxy factory deployed on a developer chain.
pub const LOCAL_FIXTURES: ContractFixtures = ContractFixtures {
    master_copies: LOCAL_MASTER_COPIES,
    proxy_factories: LOCAL_PROXY_FACTORIES,
};

pub fn network_fixtures(network: Network) -> ContractFixtures {
    let (master_copies, proxy_factories) = match network {
        Network::Mainnet => (MAINNET_MASTER_COPIES, MAINNET_PROXY_FACTORIES),
        Network::Rinkeby => (RINKEBY_MASTER_COPIES, RINKEBY_PROXY_FACTORIES),
        Network::Goerli => (GOERLI_MASTER_COPIES, GOERLI_PROXY_FACTORIES),
        Network::Kovan => (KOVAN_MASTER_COPIES, KOVAN_PROXY_FACTORIES),
        Network::Xdai => (XDAI_MASTER_COPIES, XDAI_PROXY_FACTORIES),
        Network::EnergyWebChain => (
            ENERGY_WEB_CHAIN_MASTER_COPIES,
            ENERGY_WEB_CHAIN_PROXY_FACTORIES,
        ),
        Network::Volta => (VOLTA_MASTER_COPIES, VOLTA_PROXY_FACTORIES),
    };

    ContractFixtures {
        master_copies,
        proxy_factories,
    }
}
