use alloy::contract::{ContractInstance, Interface};
use alloy::dyn_abi::DynSolValue;
use alloy::json_abi::JsonAbi;
use alloy::primitives::Address;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use async_trait::async_trait;

use crate::config::Config;

/// Interface descriptor for the airdrop contract, loaded at startup.
const AIRDROP_ABI: &str = include_str!("../abi/airdrop.json");

/// Settlement of one `drop` call: a receipt-like value or the provider's error.
pub type DropOutcome = anyhow::Result<String>;

/// The one capability the view needs from the outside world.
///
/// Tests substitute a deterministic stub for the real provider.
#[async_trait]
pub trait DropCaller: Send + Sync {
    async fn call_drop(&self) -> DropOutcome;
}

/// `DropCaller` backed by an HTTP JSON-RPC provider.
pub struct RpcDropCaller {
    contract: ContractInstance<DynProvider>,
}

impl RpcDropCaller {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let abi: JsonAbi = serde_json::from_str(AIRDROP_ABI)?;
        let address: Address = config.contract_address.parse()?;
        let provider = ProviderBuilder::new()
            .connect_http(config.endpoint_url.parse()?)
            .erased();
        Ok(Self {
            contract: ContractInstance::new(address, provider, Interface::new(abi)),
        })
    }
}

#[async_trait]
impl DropCaller for RpcDropCaller {
    async fn call_drop(&self) -> DropOutcome {
        let values = self.contract.function("drop", &[])?.call().await?;
        Ok(format_receipt(&values))
    }
}

fn format_receipt(values: &[DynSolValue]) -> String {
    if values.is_empty() {
        "0x".into()
    } else {
        format!("{values:?}")
    }
}

/// Logging seam for call settlements.
///
/// Success and failure both land here and neither alters the status
/// transition; a policy that surfaces errors to the user would replace this
/// function without touching the view.
pub fn log_settlement(outcome: &DropOutcome) {
    match outcome {
        Ok(receipt) => tracing::info!("drop settled: result={receipt}"),
        Err(e) => tracing::info!("drop settled: error={e:#}"),
    }
}
