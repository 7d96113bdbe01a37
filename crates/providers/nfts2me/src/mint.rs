//! Mint call building for generated contracts

use alloy_primitives::U256;
use alloy_sol_types::SolCall;
use castmint_core::{BuildError, ContractInfo, MintCall, MintParams};

use crate::abi;

/// `mintTo` when a recipient is set, plain `mint` otherwise (the contract
/// mints to the transaction sender).
pub fn build_mint_call(
    params: &MintParams,
    _info: &ContractInfo,
) -> Result<MintCall, BuildError> {
    let amount = U256::from(params.quantity);
    let data = match params.recipient {
        Some(to) => abi::mintToCall { to, amount }.abi_encode(),
        None => abi::mintCall { amount }.abi_encode(),
    };
    Ok(MintCall {
        to: params.contract,
        data,
    })
}

pub fn total_value(unit_price: U256, params: &MintParams) -> U256 {
    unit_price.saturating_mul(U256::from(params.quantity))
}
