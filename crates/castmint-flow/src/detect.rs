//! Provider detection
//!
//! Classifies an unknown contract by probing for platform signatures, first
//! confident match wins. Every probe is fault-isolated: classification is a
//! best-effort heuristic against an unverified external contract, so a
//! failed probe means "no match", never an error. The worst outcome is
//! `generic`.

use castmint_core::{ContractInfo, MintParams, Provider};
use evm_client::abi::{supports_interface, ERC1155_INTERFACE_ID, ERC721_INTERFACE_ID};
use evm_client::{try_call, ContractReader};

use crate::catalog::config_for;

/// Classify the contract in `params`. Never fails.
pub async fn detect(reader: &dyn ContractReader, params: &MintParams) -> ContractInfo {
    // Token-standard flags and the extension list are independent probes;
    // run them together.
    let (is_erc721, is_erc1155, extensions) = tokio::join!(
        supports_interface(reader, params.contract, ERC721_INTERFACE_ID),
        supports_interface(reader, params.contract, ERC1155_INTERFACE_ID),
        try_call(
            reader,
            params.contract,
            manifold::abi::creator::getExtensionsCall {},
        ),
    );

    let extension_list = extensions.map(|r| r.extensions).unwrap_or_default();

    // An explicit override is trusted outright; only the satellite address
    // still needs filling in, from the catalog when the provider always
    // uses a well-known contract and from the probed list for manifold.
    if let Some(provider) = params.provider {
        let mut info = ContractInfo::new(provider);
        info.is_erc721 = is_erc721;
        info.is_erc1155 = is_erc1155;
        info.extension_address = config_for(provider, None).known_extension;
        if provider == Provider::Manifold {
            info.extension_address = manifold::constants::preferred_extension(&extension_list);
        }
        tracing::debug!("provider override: {} on {}", provider, params.contract);
        return info;
    }

    let mut info = ContractInfo::new(Provider::Generic);
    info.is_erc721 = is_erc721;
    info.is_erc1155 = is_erc1155;

    // A non-empty extension list is the satellite-delegate signature.
    if !extension_list.is_empty() {
        info.provider = Provider::Manifold;
        info.extension_address = manifold::constants::preferred_extension(&extension_list);
        tracing::info!(
            "classified {} as manifold (extension {:?})",
            params.contract,
            info.extension_address
        );
        return info;
    }

    // Version marker present only on platform-generated contracts; its mere
    // existence is conclusive.
    if try_call(reader, params.contract, nfts2me::abi::n2mVersionCall {})
        .await
        .is_some()
    {
        info.provider = Provider::Nfts2me;
        tracing::info!("classified {} as nfts2me", params.contract);
        return info;
    }

    // Claim-condition window is the open-edition signature. The shared
    // metadata probe corroborates but its failure is not disqualifying.
    if try_call(reader, params.contract, thirdweb::abi::claimConditionCall {})
        .await
        .is_some()
    {
        info.provider = Provider::Thirdweb;
        if try_call(reader, params.contract, thirdweb::abi::sharedMetadataCall {})
            .await
            .is_none()
        {
            tracing::debug!(
                "claim conditions without shared metadata on {}",
                params.contract
            );
        }
        tracing::info!("classified {} as thirdweb", params.contract);
        return info;
    }

    tracing::info!("no platform signature on {}; classified generic", params.contract);
    info
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{Address, U256};
    use alloy_sol_types::SolCall;
    use evm_client::abi::supportsInterfaceCall;
    use evm_client::mock::MockReader;

    fn contract() -> Address {
        Address::from([0x0c; 20])
    }

    fn mock_erc721() -> MockReader {
        let mut mock = MockReader::new(8453);
        mock.on_call(
            contract(),
            supportsInterfaceCall {
                interfaceId: ERC721_INTERFACE_ID,
            },
            supportsInterfaceCall::abi_encode_returns(&(true,)),
        );
        mock.on_call(
            contract(),
            supportsInterfaceCall {
                interfaceId: ERC1155_INTERFACE_ID,
            },
            supportsInterfaceCall::abi_encode_returns(&(false,)),
        );
        mock
    }

    #[tokio::test]
    async fn erc721_with_no_signatures_is_generic() {
        let mock = mock_erc721();
        let params = MintParams::new(contract(), 8453);

        let info = detect(&mock, &params).await;
        assert_eq!(info.provider, Provider::Generic);
        assert!(info.is_erc721);
        assert!(!info.is_erc1155);
        assert!(info.extension_address.is_none());
    }

    #[tokio::test]
    async fn extension_list_classifies_manifold() {
        let satellite = Address::from([0x0e; 20]);
        let mut mock = mock_erc721();
        mock.on_selector(
            contract(),
            manifold::abi::creator::getExtensionsCall::SELECTOR,
            manifold::abi::creator::getExtensionsCall::abi_encode_returns(&(vec![satellite],)),
        );

        let info = detect(&mock, &MintParams::new(contract(), 8453)).await;
        assert_eq!(info.provider, Provider::Manifold);
        assert_eq!(info.extension_address, Some(satellite));
    }

    #[tokio::test]
    async fn version_marker_classifies_nfts2me() {
        let mut mock = mock_erc721();
        mock.on_selector(
            contract(),
            nfts2me::abi::n2mVersionCall::SELECTOR,
            nfts2me::abi::n2mVersionCall::abi_encode_returns(&(U256::from(3u64),)),
        );

        let info = detect(&mock, &MintParams::new(contract(), 8453)).await;
        assert_eq!(info.provider, Provider::Nfts2me);
    }

    #[tokio::test]
    async fn claim_window_classifies_thirdweb_without_corroboration() {
        // sharedMetadata is absent; the window alone must be sufficient.
        let mut mock = mock_erc721();
        mock.on_selector(
            contract(),
            thirdweb::abi::claimConditionCall::SELECTOR,
            thirdweb::abi::claimConditionCall::abi_encode_returns(&(
                U256::ZERO,
                U256::from(1u64),
            )),
        );

        let info = detect(&mock, &MintParams::new(contract(), 8453)).await;
        assert_eq!(info.provider, Provider::Thirdweb);
    }

    #[tokio::test]
    async fn detection_is_idempotent() {
        let mut mock = mock_erc721();
        mock.on_selector(
            contract(),
            nfts2me::abi::n2mVersionCall::SELECTOR,
            nfts2me::abi::n2mVersionCall::abi_encode_returns(&(U256::from(1u64),)),
        );
        let params = MintParams::new(contract(), 8453);

        let first = detect(&mock, &params).await;
        let second = detect(&mock, &params).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn override_fills_known_satellite() {
        let mock = MockReader::new(1);
        let mut params = MintParams::new(contract(), 1);
        params.provider = Some(Provider::Opensea);

        let info = detect(&mock, &params).await;
        assert_eq!(info.provider, Provider::Opensea);
        assert_eq!(
            info.extension_address,
            Some(opensea::constants::SEA_DROP)
        );
    }

    #[tokio::test]
    async fn manifold_override_probes_extension_list() {
        let satellite = Address::from([0x0e; 20]);
        let mut mock = MockReader::new(8453);
        mock.on_selector(
            contract(),
            manifold::abi::creator::getExtensionsCall::SELECTOR,
            manifold::abi::creator::getExtensionsCall::abi_encode_returns(&(vec![satellite],)),
        );

        let mut params = MintParams::new(contract(), 8453);
        params.provider = Some(Provider::Manifold);

        let info = detect(&mock, &params).await;
        assert_eq!(info.provider, Provider::Manifold);
        assert_eq!(info.extension_address, Some(satellite));
    }
}
