//! Price discovery dispatch
//!
//! Routes to the provider's own discovery where one exists; SeaDrop and Zora
//! drops fall through to the generic candidate chain when their platform
//! record is absent. Discovery never fails: the worst quote is "free", and
//! a wrong guess surfaces later as an on-chain contract error.

use castmint_core::{ContractInfo, MintConfig, MintParams, PriceQuote, Provider};
use evm_client::ContractReader;

use crate::catalog::config_for;
use crate::generic;

/// Quote the mint described by `params` against the classified contract.
///
/// Returns the (possibly enriched) contract info alongside the quote:
/// satellite-delegate discovery attaches the normalized claim, open-edition
/// discovery the active condition, and a token-id lookup back-fills the
/// instance id into `params`.
pub async fn fetch_price(
    reader: &dyn ContractReader,
    config: &MintConfig,
    params: &mut MintParams,
    info: ContractInfo,
) -> (ContractInfo, PriceQuote) {
    match info.provider {
        Provider::Manifold => manifold::fetch_price(reader, config, params, info).await,
        Provider::Nfts2me => nfts2me::fetch_price(reader, config, params, info).await,
        Provider::Thirdweb => thirdweb::fetch_price(reader, config, params, info).await,
        Provider::Opensea => {
            let direct = opensea::fetch_price(reader, params, &info).await;
            match direct {
                Some(result) => result,
                None => {
                    let candidates = config_for(Provider::Opensea, Some(&info)).price_functions;
                    generic::fetch_price(reader, params, info, candidates).await
                }
            }
        }
        Provider::Zora => {
            let direct = zora::fetch_price(reader, params, &info).await;
            match direct {
                Some(result) => result,
                None => {
                    let candidates = config_for(Provider::Zora, Some(&info)).price_functions;
                    generic::fetch_price(reader, params, info, candidates).await
                }
            }
        }
        Provider::Generic => {
            let candidates = config_for(Provider::Generic, Some(&info)).price_functions;
            generic::fetch_price(reader, params, info, candidates).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{Address, U256};
    use alloy_sol_types::SolCall;
    use evm_client::mock::MockReader;

    #[tokio::test]
    async fn generic_dispatch_reaches_candidate_chain() {
        let contract = Address::from([0x01; 20]);
        let mut mock = MockReader::new(1);
        mock.on_selector(
            contract,
            generic::abi::priceCall::SELECTOR,
            generic::abi::priceCall::abi_encode_returns(&(U256::from(42u64),)),
        );

        let mut params = MintParams::new(contract, 1);
        let (_, quote) = fetch_price(
            &mock,
            &MintConfig::default(),
            &mut params,
            ContractInfo::new(Provider::Generic),
        )
        .await;
        assert_eq!(quote.total_cost, U256::from(42u64));
    }

    #[tokio::test]
    async fn zora_without_sales_config_falls_back_to_candidates() {
        let contract = Address::from([0x07; 20]);
        let mut mock = MockReader::new(7777777);
        // No salesConfig registered at all, but a plain price() exists.
        mock.on_selector(
            contract,
            generic::abi::priceCall::SELECTOR,
            generic::abi::priceCall::abi_encode_returns(&(U256::from(555u64),)),
        );

        let mut params = MintParams::new(contract, 7777777);
        let (_, quote) = fetch_price(
            &mock,
            &MintConfig::default(),
            &mut params,
            ContractInfo::new(Provider::Zora),
        )
        .await;
        assert_eq!(quote.unit_price, U256::from(555u64));
    }
}
