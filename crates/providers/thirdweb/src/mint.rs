//! Claim call building
//!
//! Open (proof-less) claims pass the sentinel allowlist proof the platform
//! expects: empty proof, zero wallet limit, max price, zero currency.

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolCall;
use castmint_core::{BuildError, ContractInfo, MintCall, MintParams, Provider};

use crate::abi;

pub fn build_mint_call(
    params: &MintParams,
    info: &ContractInfo,
) -> Result<MintCall, BuildError> {
    let receiver = params
        .recipient
        .ok_or(BuildError::MissingParam { name: "recipient" })?;
    let condition = info
        .claim_condition
        .as_ref()
        .ok_or(BuildError::MissingClaim {
            provider: Provider::Thirdweb,
        })?;

    let allowlist_proof = match &params.merkle_proof {
        Some(proof) => abi::AllowlistProof {
            proof: proof.clone(),
            quantityLimitPerWallet: condition.quantity_limit_per_wallet,
            pricePerToken: condition.price_per_token,
            currency: condition.currency,
        },
        None => abi::AllowlistProof {
            proof: Vec::new(),
            quantityLimitPerWallet: U256::ZERO,
            pricePerToken: U256::MAX,
            currency: Address::ZERO,
        },
    };

    let data = abi::claimCall {
        receiver,
        quantity: U256::from(params.quantity),
        currency: condition.currency,
        pricePerToken: condition.price_per_token,
        allowlistProof: allowlist_proof,
        data: Bytes::new(),
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

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::B256;
    use castmint_core::ClaimCondition;

    fn condition() -> ClaimCondition {
        ClaimCondition {
            condition_id: U256::from(3u64),
            price_per_token: U256::from(1_000u64),
            currency: Address::ZERO,
            merkle_root: B256::ZERO,
            quantity_limit_per_wallet: U256::from(5u64),
            max_claimable_supply: U256::from(100u64),
            supply_claimed: U256::ZERO,
            start_timestamp: 0,
        }
    }

    #[test]
    fn builds_claim_against_drop_contract() {
        let mut info = ContractInfo::new(Provider::Thirdweb);
        info.claim_condition = Some(condition());

        let mut params = MintParams::new(Address::from([0x0d; 20]), 8453);
        params.recipient = Some(Address::from([0xaa; 20]));
        params.quantity = 2;

        let call = build_mint_call(&params, &info).unwrap();
        assert_eq!(call.to, params.contract);
        assert_eq!(&call.data[..4], abi::claimCall::SELECTOR.as_slice());
    }

    #[test]
    fn requires_condition_and_recipient() {
        let info = ContractInfo::new(Provider::Thirdweb);
        let mut params = MintParams::new(Address::from([0x0d; 20]), 8453);
        params.recipient = Some(Address::from([0xaa; 20]));
        assert!(matches!(
            build_mint_call(&params, &info),
            Err(BuildError::MissingClaim { .. })
        ));

        let mut info = ContractInfo::new(Provider::Thirdweb);
        info.claim_condition = Some(condition());
        params.recipient = None;
        assert!(matches!(
            build_mint_call(&params, &info),
            Err(BuildError::MissingParam { name: "recipient" })
        ));
    }
}
