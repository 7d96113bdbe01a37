//! evm-client: Capability interfaces for contract reads and wallet writes
//!
//! The mint flow consumes two external capabilities: a read-only contract
//! call surface and a wallet that can sign/submit transactions. Both are
//! traits here; `RpcReader` is the production read implementation over plain
//! JSON-RPC, while signing stays entirely on the host side.

pub mod abi;
pub mod erc20;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod rpc;

use alloy_primitives::{Address, U256};
use alloy_sol_types::SolCall;
use async_trait::async_trait;
use castmint_core::{ReadError, TxHash, WalletError};

pub use rpc::RpcReader;

/// Read-only contract call capability.
///
/// Implementations may fail for any reason (transport, revert, ABI
/// mismatch); callers in this workspace treat failures as "method absent"
/// and fall through, never as fatal.
#[async_trait]
pub trait ContractReader: Send + Sync {
    /// Chain this reader is connected to
    fn chain_id(&self) -> u64;

    /// Perform an `eth_call` against `to` with raw calldata
    async fn eth_call(&self, to: Address, data: Vec<u8>) -> Result<Vec<u8>, ReadError>;
}

/// Typed contract read: encode the call, perform it, decode the return.
pub async fn read_call<C: SolCall>(
    reader: &dyn ContractReader,
    to: Address,
    call: C,
) -> Result<C::Return, ReadError> {
    let ret = reader.eth_call(to, call.abi_encode()).await?;
    C::abi_decode_returns(&ret, true).map_err(|e| ReadError::Decode {
        message: format!("{}: {}", C::SIGNATURE, e),
    })
}

/// Fault-isolated probe: any failure becomes `None`.
pub async fn try_call<C: SolCall>(
    reader: &dyn ContractReader,
    to: Address,
    call: C,
) -> Option<C::Return> {
    match read_call(reader, to, call).await {
        Ok(ret) => Some(ret),
        Err(e) => {
            tracing::debug!("probe {} on {} failed: {}", C::SIGNATURE, to, e);
            None
        }
    }
}

/// One write/transaction request handed to the wallet capability
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteRequest {
    pub chain_id: u64,
    pub to: Address,
    pub data: Vec<u8>,
    pub value: U256,
}

/// Outcome of waiting for a submitted transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxReceipt {
    pub tx_hash: TxHash,
    pub success: bool,
}

/// Wallet capability: account state, connection, chain switching, and
/// transaction submission. Signing happens on the host side; this core only
/// sees handles and receipts.
#[async_trait]
pub trait WalletGateway: Send + Sync {
    /// Currently connected account, if any
    async fn address(&self) -> Option<Address>;

    /// Chain the wallet is currently on, if connected
    async fn chain_id(&self) -> Option<u64>;

    async fn connect(&self) -> Result<Address, WalletError>;

    async fn switch_chain(&self, chain_id: u64) -> Result<(), WalletError>;

    /// Submit a transaction; resolves once the wallet reports a hash
    async fn write_contract(&self, request: WriteRequest) -> Result<TxHash, WalletError>;

    /// Wait for the receipt of a submitted transaction
    async fn wait_for_receipt(&self, tx_hash: TxHash) -> Result<TxReceipt, WalletError>;
}
