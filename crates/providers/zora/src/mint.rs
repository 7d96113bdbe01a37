//! Purchase call building

use alloy_primitives::U256;
use alloy_sol_types::SolCall;
use castmint_core::{BuildError, ContractInfo, MintCall, MintParams};

use crate::abi;

pub fn build_mint_call(
    params: &MintParams,
    _info: &ContractInfo,
) -> Result<MintCall, BuildError> {
    let data = abi::purchaseCall {
        quantity: U256::from(params.quantity),
    }
    .abi_encode();

    Ok(MintCall {
        to: params.contract,
        data,
    })
}

pub fn total_value(unit_price: U256, params: &MintParams) -> U256 {
    unit_price.saturating_mul(U256::from(params.quantity))
}
