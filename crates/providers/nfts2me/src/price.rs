//! Three-tier price discovery
//!
//! Each tier is a complete fallback for the previous tier's *absence* (the
//! contract not exposing that surface), not a retry of its failure: newer
//! deployments answer `mintPrice`, older ones the fee pair, and the
//! configured defaults cover everything else.

use alloy_primitives::U256;
use castmint_core::{ContractInfo, MintConfig, MintParams, PriceQuote};
use evm_client::{try_call, ContractReader};

use crate::abi;

/// Fetch the quote for a generated contract. Never fails.
pub async fn fetch_price(
    reader: &dyn ContractReader,
    config: &MintConfig,
    params: &MintParams,
    info: ContractInfo,
) -> (ContractInfo, PriceQuote) {
    let qty = U256::from(params.quantity);

    // Tier 1: all-inclusive per-token price
    if let Some(ret) = try_call(reader, params.contract, abi::mintPriceCall {}).await {
        let quote = PriceQuote::native(ret.price, ret.price.saturating_mul(qty));
        return (info, quote);
    }

    // Tier 2: platform + creator fee pair, fetched concurrently
    let (mint_fee, creator_fee) = tokio::join!(
        try_call(reader, params.contract, abi::mintFeeCall {}),
        try_call(reader, params.contract, abi::creatorFeeCall {}),
    );

    if mint_fee.is_some() || creator_fee.is_some() {
        // A half-missing pair fills in from the configured schedule.
        let unit = mint_fee
            .map(|r| r.fee)
            .unwrap_or(config.fees.nfts2me_mint_fee_wei)
            .saturating_add(
                creator_fee
                    .map(|r| r.fee)
                    .unwrap_or(config.fees.nfts2me_creator_fee_wei),
            );
        return (info, PriceQuote::native(unit, unit.saturating_mul(qty)));
    }

    // Tier 3: configured defaults
    tracing::warn!(
        "no price surface on {}; quoting configured default fees",
        params.contract
    );
    let unit = config
        .fees
        .nfts2me_mint_fee_wei
        .saturating_add(config.fees.nfts2me_creator_fee_wei);
    (info, PriceQuote::native(unit, unit.saturating_mul(qty)))
}
