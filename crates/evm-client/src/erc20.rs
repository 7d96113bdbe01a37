//! ERC-20 payment detail fetching
//!
//! Symbol and decimals are fetched for every token-priced claim; allowance
//! and balance only when a wallet address is known; they are omitted, not
//! defaulted to zero, so the state machine can distinguish "not approved"
//! from "not yet known". Calls are batched concurrently and each failure is
//! isolated per field.

use alloy_primitives::{Address, U256};
use castmint_core::Erc20Payment;

use crate::abi::{allowanceCall, balanceOfCall, decimalsCall, symbolCall};
use crate::{try_call, ContractReader};

/// Fallback decimal count when the token does not report one
const DEFAULT_DECIMALS: u8 = 18;

/// Fetch the payment descriptor for an ERC-20 priced claim.
///
/// `spender` is the contract that will pull the tokens (the extension or the
/// drop contract itself); `owner` is the connected wallet when known.
pub async fn fetch_erc20_payment(
    reader: &dyn ContractReader,
    token: Address,
    spender: Address,
    owner: Option<Address>,
    cost: U256,
) -> Erc20Payment {
    let (symbol, decimals, allowance, balance) = match owner {
        Some(owner) => {
            let (symbol, decimals, allowance, balance) = tokio::join!(
                try_call(reader, token, symbolCall {}),
                try_call(reader, token, decimalsCall {}),
                try_call(reader, token, allowanceCall { owner, spender }),
                try_call(reader, token, balanceOfCall { owner }),
            );
            (
                symbol,
                decimals,
                allowance.map(|r| r.remaining),
                balance.map(|r| r.balance),
            )
        }
        None => {
            let (symbol, decimals) = tokio::join!(
                try_call(reader, token, symbolCall {}),
                try_call(reader, token, decimalsCall {}),
            );
            (symbol, decimals, None, None)
        }
    };

    let symbol = match symbol {
        Some(r) => r.sym,
        None => {
            tracing::warn!("ERC-20 {} did not report a symbol", token);
            String::new()
        }
    };

    Erc20Payment {
        token,
        symbol,
        decimals: decimals.map(|r| r.count).unwrap_or(DEFAULT_DECIMALS),
        cost,
        allowance,
        balance,
    }
}
