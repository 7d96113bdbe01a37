//! Public mint call building

use alloy_primitives::{Address, U256};
use alloy_sol_types::SolCall;
use castmint_core::{BuildError, ContractInfo, MintCall, MintParams};

use crate::abi;
use crate::constants::{FEE_RECIPIENT, SEA_DROP};

/// Build a `mintPublic` call against the SeaDrop satellite.
pub fn build_mint_call(
    params: &MintParams,
    info: &ContractInfo,
) -> Result<MintCall, BuildError> {
    let satellite = info.extension_address.unwrap_or(SEA_DROP);

    let data = abi::mintPublicCall {
        nftContract: params.contract,
        feeRecipient: FEE_RECIPIENT,
        minterIfNotPayer: params.recipient.unwrap_or(Address::ZERO),
        quantity: U256::from(params.quantity),
    }
    .abi_encode();

    Ok(MintCall {
        to: satellite,
        data,
    })
}

pub fn total_value(unit_price: U256, params: &MintParams) -> U256 {
    unit_price.saturating_mul(U256::from(params.quantity))
}
