//! Generic fallback provider
//!
//! For contracts that match no platform signature: try a list of well-known
//! flat price getters in order, and mint through plain `mint(quantity)`.
//! A contract that exposes none of the getters is assumed to be a free mint
//! rather than an error; if the assumption is wrong the transaction itself
//! reverts and surfaces as a contract error.

use alloy_primitives::U256;
use alloy_sol_types::{SolCall, SolValue};
use castmint_core::{BuildError, ContractInfo, MintCall, MintParams, PriceQuote};
use evm_client::ContractReader;

pub mod abi {
    alloy_sol_types::sol! {
        function mintPrice() external view returns (uint256 value);
        function price() external view returns (uint256 value);
        function cost() external view returns (uint256 value);
        function publicPrice() external view returns (uint256 value);
        function getPrice() external view returns (uint256 value);

        function mint(uint256 quantity) external payable;
    }
}

/// One candidate flat price getter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceFunction {
    pub name: &'static str,
    pub selector: [u8; 4],
}

/// Candidate getters, tried in order until one answers
pub const PRICE_CANDIDATES: &[PriceFunction] = &[
    PriceFunction {
        name: "mintPrice",
        selector: abi::mintPriceCall::SELECTOR,
    },
    PriceFunction {
        name: "price",
        selector: abi::priceCall::SELECTOR,
    },
    PriceFunction {
        name: "cost",
        selector: abi::costCall::SELECTOR,
    },
    PriceFunction {
        name: "publicPrice",
        selector: abi::publicPriceCall::SELECTOR,
    },
    PriceFunction {
        name: "getPrice",
        selector: abi::getPriceCall::SELECTOR,
    },
];

/// Try each candidate getter in order; none succeeding means a free mint.
pub async fn fetch_price(
    reader: &dyn ContractReader,
    params: &MintParams,
    info: ContractInfo,
    candidates: &[PriceFunction],
) -> (ContractInfo, PriceQuote) {
    for candidate in candidates {
        let Ok(ret) = reader
            .eth_call(params.contract, candidate.selector.to_vec())
            .await
        else {
            continue;
        };
        let Ok(unit) = U256::abi_decode(&ret, true) else {
            continue;
        };

        tracing::debug!("priced {} via {}()", params.contract, candidate.name);
        let quote = PriceQuote::native(unit, total_value(unit, params));
        return (info, quote);
    }

    tracing::debug!("no price getter on {}; assuming free mint", params.contract);
    (info, PriceQuote::free())
}

pub fn build_mint_call(
    params: &MintParams,
    _info: &ContractInfo,
) -> Result<MintCall, BuildError> {
    let data = abi::mintCall {
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
