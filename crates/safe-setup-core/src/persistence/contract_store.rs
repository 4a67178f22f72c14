use alloy_primitives::Address;

use crate::models::{MasterCopyRecord, ProxyFactoryRecord};
use crate::persistence::PersistenceResult;

pub trait ContractStore: Send + Sync {
    fn find_master_copy(&self, address: Address) -> PersistenceResult<Option<MasterCopyRecord>>;

    fn create_master_copy(&self, record: &MasterCopyRecord) -> PersistenceResult<()>;

    fn set_master_copy_version(&self, address: Address, version: &str) -> PersistenceResult<()>;

    /// Indexer-side cursor update; setup never calls it.
    fn set_master_copy_tx_block_number(
        &self,
        address: Address,
        tx_block_number: u64,
    ) -> PersistenceResult<()>;

    fn list_master_copies(&self) -> PersistenceResult<Vec<MasterCopyRecord>>;

    fn find_proxy_factory(&self, address: Address)
    -> PersistenceResult<Option<ProxyFactoryRecord>>;

    fn create_proxy_factory(&self, record: &ProxyFactoryRecord) -> PersistenceResult<()>;

    /// Indexer-side cursor update; setup never calls it.
    fn set_proxy_factory_tx_block_number(
        &self,
        address: Address,
        tx_block_number: u64,
    ) -> PersistenceResult<()>;

    fn list_proxy_factories(&self) -> PersistenceResult<Vec<ProxyFactoryRecord>>;
}
