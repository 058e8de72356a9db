/// Data Liquidity Pool bindings
mod pool;
/// Data Registry bindings
mod registry;

/// Common Types
pub mod prelude {
    pub use alloy::primitives::{Address, B256, U256, address};
    pub use tracing::{debug, error, info, trace, warn};
}

pub use pool::DataLiquidityPool;
pub use registry::DataRegistry;

use crate::pool::DataLiquidityPool::DataLiquidityPoolInstance;
use crate::prelude::*;
use crate::registry::DataRegistry::DataRegistryInstance;
use alloy::{
    providers::{DynProvider, Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
};

/// DLP Client
///
/// Responsible for interacting with the Data Registry and the Data Liquidity Pool contracts
#[derive(Debug)]
pub struct DlpClient {
    pub provider: DynProvider,
    pub registry: DataRegistryInstance<DynProvider>,
    pub pool: DataLiquidityPoolInstance<DynProvider>,
}

impl DlpClient {
    /// Creates a new DLP client
    ///
    /// Both contracts share one signing provider
    pub async fn new(
        url: &str,
        private_key: &[u8],
        chain_id: Option<u64>,
        registry: Address,
        pool: Address,
    ) -> anyhow::Result<Self> {
        let wallet = PrivateKeySigner::from_slice(private_key)?;
        info!("Signing with wallet: {}", wallet.address());

        let builder = ProviderBuilder::new().wallet(wallet);
        let provider = match chain_id {
            Some(chain_id) => builder.with_chain_id(chain_id).connect_http(url.parse()?).erased(),
            None => builder.connect_http(url.parse()?).erased(),
        };

        let registry = DataRegistry::new(registry, provider.clone());
        let pool = DataLiquidityPool::new(pool, provider.clone());

        Ok(Self {
            provider,
            registry,
            pool,
        })
    }
}

/// Narrows an on-chain integer to `u64`
pub(crate) fn to_u64(value: U256, field: &str) -> anyhow::Result<u64> {
    u64::try_from(value).map_err(|_| anyhow::anyhow!("{field} {value} does not fit in u64"))
}
