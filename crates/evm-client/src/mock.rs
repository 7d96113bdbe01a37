//! Mock capability implementations for tests
//!
//! `MockReader` answers `eth_call` from registered responses; anything not
//! registered reverts, which models a contract that simply lacks the probed
//! function. `MockWallet` records writes and hands out deterministic hashes.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use alloy_primitives::{Address, B256};
use alloy_sol_types::SolCall;
use async_trait::async_trait;
use castmint_core::{ReadError, TxHash, WalletError};

use crate::{ContractReader, TxReceipt, WalletGateway, WriteRequest};

/// Scripted contract reader
#[derive(Debug, Default)]
pub struct MockReader {
    chain_id: u64,
    exact: HashMap<(Address, Vec<u8>), Vec<u8>>,
    by_selector: HashMap<(Address, [u8; 4]), Vec<u8>>,
}

impl MockReader {
    pub fn new(chain_id: u64) -> Self {
        Self {
            chain_id,
            ..Self::default()
        }
    }

    /// Register a response for one exact calldata (matches arguments too)
    pub fn on_call<C: SolCall>(&mut self, to: Address, call: C, returns: Vec<u8>) {
        self.exact.insert((to, call.abi_encode()), returns);
    }

    /// Register a response for any call with this selector
    pub fn on_selector(&mut self, to: Address, selector: [u8; 4], returns: Vec<u8>) {
        self.by_selector.insert((to, selector), returns);
    }
}

#[async_trait]
impl ContractReader for MockReader {
    fn chain_id(&self) -> u64 {
        self.chain_id
    }

    async fn eth_call(&self, to: Address, data: Vec<u8>) -> Result<Vec<u8>, ReadError> {
        if let Some(ret) = self.exact.get(&(to, data.clone())) {
            return Ok(ret.clone());
        }
        if data.len() >= 4 {
            let selector = [data[0], data[1], data[2], data[3]];
            if let Some(ret) = self.by_selector.get(&(to, selector)) {
                return Ok(ret.clone());
            }
        }
        Err(ReadError::Revert {
            message: "execution reverted".to_string(),
        })
    }
}

/// Scripted wallet
pub struct MockWallet {
    address: Option<Address>,
    chain_id: Mutex<Option<u64>>,
    next_nonce: AtomicU64,
    /// Every write request the flow submitted, in order
    pub writes: Mutex<Vec<WriteRequest>>,
    /// When set, the next `write_contract` fails with this error
    pub fail_next_write: Mutex<Option<WalletError>>,
    /// Receipt status handed back by `wait_for_receipt`
    pub receipt_success: Mutex<bool>,
}

impl MockWallet {
    pub fn connected(address: Address, chain_id: u64) -> Self {
        Self {
            address: Some(address),
            chain_id: Mutex::new(Some(chain_id)),
            next_nonce: AtomicU64::new(1),
            writes: Mutex::new(Vec::new()),
            fail_next_write: Mutex::new(None),
            receipt_success: Mutex::new(true),
        }
    }

    pub fn disconnected() -> Self {
        Self {
            address: None,
            chain_id: Mutex::new(None),
            next_nonce: AtomicU64::new(1),
            writes: Mutex::new(Vec::new()),
            fail_next_write: Mutex::new(None),
            receipt_success: Mutex::new(true),
        }
    }

    fn hash_for(nonce: u64) -> TxHash {
        let mut bytes = [0u8; 32];
        bytes[24..].copy_from_slice(&nonce.to_be_bytes());
        B256::from(bytes)
    }
}

#[async_trait]
impl WalletGateway for MockWallet {
    async fn address(&self) -> Option<Address> {
        self.address
    }

    async fn chain_id(&self) -> Option<u64> {
        *self.chain_id.lock().unwrap()
    }

    async fn connect(&self) -> Result<Address, WalletError> {
        self.address.ok_or(WalletError::NotConnected)
    }

    async fn switch_chain(&self, chain_id: u64) -> Result<(), WalletError> {
        *self.chain_id.lock().unwrap() = Some(chain_id);
        Ok(())
    }

    async fn write_contract(&self, request: WriteRequest) -> Result<TxHash, WalletError> {
        if let Some(err) = self.fail_next_write.lock().unwrap().take() {
            return Err(err);
        }
        self.writes.lock().unwrap().push(request);
        let nonce = self.next_nonce.fetch_add(1, Ordering::SeqCst);
        Ok(Self::hash_for(nonce))
    }

    async fn wait_for_receipt(&self, tx_hash: TxHash) -> Result<TxReceipt, WalletError> {
        Ok(TxReceipt {
            tx_hash,
            success: *self.receipt_success.lock().unwrap(),
        })
    }
}
