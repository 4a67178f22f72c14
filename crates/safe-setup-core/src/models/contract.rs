use alloy_primitives::Address;

/// A deployed master copy as declared in the fixture tables.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MasterCopyFixture {
    pub address: Address,
    pub initial_block_number: u64,
    /// Label enforced on every run. `None` seeds an empty label once and
    /// leaves whatever is stored afterwards alone.
    pub version: Option<&'static str>,
}

/// A deployed proxy factory as declared in the fixture tables.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ProxyFactoryFixture {
    pub address: Address,
    pub initial_block_number: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MasterCopyRecord {
    pub address: Address,
    pub initial_block_number: u64,
    /// Indexer sync cursor.
    pub tx_block_number: u64,
    pub version: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProxyFactoryRecord {
    pub address: Address,
    pub initial_block_number: u64,
    /// Indexer sync cursor.
    pub tx_block_number: u64,
}
