//! Mint call building for the claim extensions
//!
//! Single mints use `mint`, multi mints `mintBatch`. Both extension
//! generations share these entrypoint signatures, so the encoded calldata is
//! identical regardless of the claim record shape.

use alloy_primitives::{B256, U256};
use alloy_sol_types::SolCall;
use castmint_core::{BuildError, ContractInfo, MintCall, MintParams, Provider};

use crate::abi::erc721;

/// Build the mint transaction calldata against the extension contract.
pub fn build_mint_call(
    params: &MintParams,
    info: &ContractInfo,
) -> Result<MintCall, BuildError> {
    let extension = info
        .extension_address
        .ok_or(BuildError::MissingExtension {
            provider: Provider::Manifold,
        })?;
    let instance_id = params.instance_id.ok_or(BuildError::MissingParam {
        name: "instance_id",
    })?;
    let mint_for = params
        .recipient
        .ok_or(BuildError::MissingParam { name: "recipient" })?;
    let proof: Vec<B256> = params.merkle_proof.clone().unwrap_or_default();

    let data = if params.quantity <= 1 {
        erc721::mintCall {
            creatorContractAddress: params.contract,
            instanceId: instance_id,
            mintIndex: 0,
            merkleProof: proof,
            mintFor: mint_for,
        }
        .abi_encode()
    } else {
        erc721::mintBatchCall {
            creatorContractAddress: params.contract,
            instanceId: instance_id,
            mintCount: u16::try_from(params.quantity).unwrap_or(u16::MAX),
            mintIndices: Vec::new(),
            merkleProofs: Vec::new(),
            mintFor: mint_for,
        }
        .abi_encode()
    };

    Ok(MintCall {
        to: extension,
        data,
    })
}

/// Unit price here is per-unit native total (fee plus native claim cost).
pub fn total_value(unit_price: U256, params: &MintParams) -> U256 {
    unit_price.saturating_mul(U256::from(params.quantity))
}
