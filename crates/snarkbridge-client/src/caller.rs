use alloy::network::{Network, TransactionBuilder};
use alloy::primitives::{Address, Bytes};
use alloy::providers::Provider;
use alloy::rpc::json_rpc::ErrorPayload;
use alloy::transports::{RpcError, Transport};
use async_trait::async_trait;
use std::marker::PhantomData;

use crate::error::{ClientError, Result};

/// JSON-RPC error code nodes use for `eth_call` hitting a revert.
pub const EXECUTION_REVERTED: i64 = 3;

/// What a read-only contract call came back with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallOutcome {
    Returned(Bytes),
    Reverted(String),
}

/// Read-only access to deployed contracts.
#[async_trait]
pub trait ContractCaller: Send + Sync {
    async fn call(&self, to: Address, data: Bytes) -> Result<CallOutcome>;
}

/// `eth_call` against a node through an alloy provider.
#[derive(Clone)]
pub struct RpcContractCaller<T, P, N> {
    rpc_provider: P,
    phantom_data: PhantomData<(T, N)>,
}

impl<T, P, N> RpcContractCaller<T, P, N>
where
    T: Transport + Clone,
    P: Provider<T, N> + Clone,
    N: Network + Clone,
{
    pub fn new(rpc_provider: P) -> Self {
        Self {
            rpc_provider,
            phantom_data: PhantomData,
        }
    }
}

#[async_trait]
impl<T, P, N> ContractCaller for RpcContractCaller<T, P, N>
where
    T: Transport + Clone,
    P: Provider<T, N> + Clone,
    N: Network + Clone,
{
    async fn call(&self, to: Address, data: Bytes) -> Result<CallOutcome> {
        let tx = N::TransactionRequest::default()
            .with_to(to)
            .with_input(data);

        match self.rpc_provider.call(&tx).await {
            Ok(returned) => Ok(CallOutcome::Returned(returned)),
            Err(RpcError::ErrorResp(payload)) if is_revert(&payload) => {
                Ok(CallOutcome::Reverted(revert_reason(&payload)))
            }
            Err(e) => Err(ClientError::TransportError(e.to_string())),
        }
    }
}

/// Nodes disagree on how a revert is reported: geth and anvil use code 3
/// with the revert data attached, others keep their generic server error
/// code and only say so in the message.
fn is_revert(payload: &ErrorPayload) -> bool {
    payload.code == EXECUTION_REVERTED
        || revert_data(payload).is_some()
        || payload.message.to_lowercase().contains("revert")
}

fn revert_data(payload: &ErrorPayload) -> Option<Bytes> {
    payload
        .data
        .as_ref()
        .and_then(|data| serde_json::from_str::<Bytes>(data.get()).ok())
}

fn revert_reason(payload: &ErrorPayload) -> String {
    match revert_data(payload) {
        Some(data) if !data.is_empty() => format!("{} (data {})", payload.message, data),
        _ => payload.message.to_string(),
    }
}
