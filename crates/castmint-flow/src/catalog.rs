//! Contract standards catalog
//!
//! One typed configuration record per provider variant: which mint ABI
//! applies, which flat price getters the generic chain may try, how the
//! attached value is computed, and how the mint call is built. The match is
//! closed over the `Provider` enum, so an unhandled provider is a compile
//! error, not a runtime fallthrough.

use alloy_primitives::{Address, U256};
use castmint_core::{BuildError, ContractInfo, MintCall, MintParams, Provider};

use crate::generic::{self, PriceFunction, PRICE_CANDIDATES};

/// Which call-shape variant the mint uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MintAbi {
    /// Single-edition lazy claim extension
    ManifoldErc721,
    /// Multi-edition lazy claim extension
    ManifoldErc1155,
    SeaDrop,
    ZoraDrop,
    ThirdwebDrop,
    Nfts2me,
    Generic,
}

pub type BuildFn = fn(&MintParams, &ContractInfo) -> Result<MintCall, BuildError>;
pub type ValueFn = fn(U256, &MintParams) -> U256;

/// Configuration record for one provider
pub struct ProviderConfig {
    pub abi: MintAbi,
    /// Flat price getters the generic chain may try for this provider
    pub price_functions: &'static [PriceFunction],
    pub total_value: ValueFn,
    pub build_mint_call: BuildFn,
    /// Satellite address known in advance; populated on explicit override
    /// for providers that always mint through the same contract
    pub known_extension: Option<Address>,
}

/// Look up the configuration for a provider.
///
/// For `manifold` the claim ABI variant follows the detected token standard;
/// the single-edition shape is the documented default when the standard is
/// unknown.
pub fn config_for(provider: Provider, info: Option<&ContractInfo>) -> ProviderConfig {
    match provider {
        Provider::Manifold => {
            let abi = match info {
                Some(i) if i.is_erc1155 && !i.is_erc721 => MintAbi::ManifoldErc1155,
                _ => MintAbi::ManifoldErc721,
            };
            ProviderConfig {
                abi,
                price_functions: &[],
                total_value: manifold::total_value,
                build_mint_call: manifold::build_mint_call,
                known_extension: None,
            }
        }
        Provider::Opensea => ProviderConfig {
            abi: MintAbi::SeaDrop,
            price_functions: PRICE_CANDIDATES,
            total_value: opensea::total_value,
            build_mint_call: opensea::build_mint_call,
            known_extension: Some(opensea::constants::SEA_DROP),
        },
        Provider::Zora => ProviderConfig {
            abi: MintAbi::ZoraDrop,
            price_functions: PRICE_CANDIDATES,
            total_value: zora::total_value,
            build_mint_call: zora::build_mint_call,
            known_extension: None,
        },
        Provider::Nfts2me => ProviderConfig {
            abi: MintAbi::Nfts2me,
            price_functions: &[],
            total_value: nfts2me::total_value,
            build_mint_call: nfts2me::build_mint_call,
            known_extension: None,
        },
        Provider::Thirdweb => ProviderConfig {
            abi: MintAbi::ThirdwebDrop,
            price_functions: &[],
            total_value: thirdweb::total_value,
            build_mint_call: thirdweb::build_mint_call,
            known_extension: None,
        },
        Provider::Generic => ProviderConfig {
            abi: MintAbi::Generic,
            price_functions: PRICE_CANDIDATES,
            total_value: generic::total_value,
            build_mint_call: generic::build_mint_call,
            known_extension: None,
        },
    }
}
