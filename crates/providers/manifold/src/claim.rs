//! Claim fetching and normalization
//!
//! Claims are fetched from the extension either directly by instance id or
//! through the token-id lookup, in which case the returned instance id is
//! back-filled into the request params so the mint call targets the same
//! claim. Decoded records are sanity-checked before being trusted: decoding
//! the wrong record shape from an unverified extension can succeed and
//! produce garbage.

use alloy_primitives::Address;
use castmint_core::{ClaimInfo, MintParams};
use evm_client::{try_call, ContractReader};

use crate::abi::{erc1155, erc721};

/// Which claim record shape to decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimAbi {
    Erc721,
    Erc1155,
}

fn plausible(info: &ClaimInfo, storage_protocol: u8) -> bool {
    // storageProtocol is a small on-chain enum; larger values mean we
    // decoded something that is not a claim record
    storage_protocol <= 4 && (info.end_date == 0 || info.start_date <= info.end_date)
}

fn normalize_erc721(claim: erc721::Claim) -> Option<ClaimInfo> {
    let info = ClaimInfo {
        cost: claim.cost,
        erc20: claim.erc20,
        merkle_root: claim.merkleRoot,
        wallet_max: claim.walletMax,
        start_date: claim.startDate.to::<u64>(),
        end_date: claim.endDate.to::<u64>(),
    };
    plausible(&info, claim.storageProtocol).then_some(info)
}

fn normalize_erc1155(claim: erc1155::Claim) -> Option<ClaimInfo> {
    let info = ClaimInfo {
        cost: claim.cost,
        erc20: claim.erc20,
        merkle_root: claim.merkleRoot,
        wallet_max: claim.walletMax,
        start_date: claim.startDate.to::<u64>(),
        end_date: claim.endDate.to::<u64>(),
    };
    plausible(&info, claim.storageProtocol).then_some(info)
}

/// Fetch and normalize the claim for `params`. Returns `None` when no claim
/// can be located or the record fails validation; callers degrade to a
/// fee-only quote.
pub async fn fetch_claim(
    reader: &dyn ContractReader,
    extension: Address,
    abi: ClaimAbi,
    params: &mut MintParams,
) -> Option<ClaimInfo> {
    let creator = params.contract;

    match abi {
        ClaimAbi::Erc721 => {
            if let Some(instance_id) = params.instance_id {
                let ret = try_call(
                    reader,
                    extension,
                    erc721::getClaimCall {
                        creatorContractAddress: creator,
                        instanceId: instance_id,
                    },
                )
                .await?;
                normalize_erc721(ret.claim)
            } else if let Some(token_id) = params.token_id {
                let ret = try_call(
                    reader,
                    extension,
                    erc721::getClaimForTokenCall {
                        creatorContractAddress: creator,
                        tokenId: token_id,
                    },
                )
                .await?;
                params.instance_id = Some(ret.instanceId);
                normalize_erc721(ret.claim)
            } else {
                None
            }
        }
        ClaimAbi::Erc1155 => {
            if let Some(instance_id) = params.instance_id {
                let ret = try_call(
                    reader,
                    extension,
                    erc1155::getClaimCall {
                        creatorContractAddress: creator,
                        instanceId: instance_id,
                    },
                )
                .await?;
                normalize_erc1155(ret.claim)
            } else if let Some(token_id) = params.token_id {
                let ret = try_call(
                    reader,
                    extension,
                    erc1155::getClaimForTokenCall {
                        creatorContractAddress: creator,
                        tokenId: token_id,
                    },
                )
                .await?;
                params.instance_id = Some(ret.instanceId);
                normalize_erc1155(ret.claim)
            } else {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::aliases::U48;
    use alloy_primitives::{Address, B256, U256};
    use alloy_sol_types::SolCall;
    use evm_client::mock::MockReader;

    pub(crate) fn sample_erc721_claim(cost: u64, erc20: Address) -> erc721::Claim {
        erc721::Claim {
            total: 10,
            totalMax: 100,
            walletMax: 5,
            startDate: U48::from(0u64),
            endDate: U48::from(0u64),
            storageProtocol: 1,
            identical: true,
            merkleRoot: B256::ZERO,
            location: "ar://abc123".to_string(),
            cost: U256::from(cost),
            paymentReceiver: Address::from([0x77; 20]),
            erc20,
            signingAddress: Address::ZERO,
        }
    }

    #[test]
    fn normalizes_valid_claim() {
        let claim = sample_erc721_claim(1000, Address::ZERO);
        let info = normalize_erc721(claim).unwrap();
        assert_eq!(info.cost, U256::from(1000u64));
        assert_eq!(info.wallet_max, 5);
        assert!(!info.is_erc20());
    }

    #[test]
    fn rejects_implausible_record() {
        let mut claim = sample_erc721_claim(1000, Address::ZERO);
        claim.storageProtocol = 200;
        assert!(normalize_erc721(claim).is_none());

        let mut claim = sample_erc721_claim(1000, Address::ZERO);
        claim.startDate = U48::from(500u64);
        claim.endDate = U48::from(100u64);
        assert!(normalize_erc721(claim).is_none());
    }

    #[tokio::test]
    async fn backfills_instance_id_from_token_lookup() {
        let extension = Address::from([0x0e; 20]);
        let creator = Address::from([0x0c; 20]);
        let mut params = MintParams::new(creator, 8453);
        params.token_id = Some(U256::from(7u64));

        let mut mock = MockReader::new(8453);
        mock.on_selector(
            extension,
            erc721::getClaimForTokenCall::SELECTOR,
            erc721::getClaimForTokenCall::abi_encode_returns(&(
                U256::from(42u64),
                sample_erc721_claim(500, Address::ZERO),
            )),
        );

        let claim = fetch_claim(&mock, extension, ClaimAbi::Erc721, &mut params)
            .await
            .unwrap();
        assert_eq!(params.instance_id, Some(U256::from(42u64)));
        assert_eq!(claim.cost, U256::from(500u64));
    }

    #[tokio::test]
    async fn no_identifier_means_no_claim() {
        let mock = MockReader::new(8453);
        let mut params = MintParams::new(Address::ZERO, 8453);
        let claim = fetch_claim(
            &mock,
            Address::from([0x0e; 20]),
            ClaimAbi::Erc721,
            &mut params,
        )
        .await;
        assert!(claim.is_none());
    }
}
