//! Active-condition price discovery
//!
//! Reads the condition window, fetches the active record, and branches on
//! its currency. The fetched condition is stored on the `ContractInfo` so
//! the mint-argument builder reuses the exact record the quote was computed
//! from. Discovery never fails; a missing or malformed condition degrades to
//! a free quote.

use alloy_primitives::U256;
use castmint_core::{ClaimCondition, ContractInfo, MintConfig, MintParams, PriceQuote};
use evm_client::erc20::fetch_erc20_payment;
use evm_client::{try_call, ContractReader};

use crate::abi;
use crate::constants::is_native_currency;

/// Fetch the quote for a drop contract.
pub async fn fetch_price(
    reader: &dyn ContractReader,
    _config: &MintConfig,
    params: &MintParams,
    mut info: ContractInfo,
) -> (ContractInfo, PriceQuote) {
    let qty = U256::from(params.quantity);

    let Some(window) = try_call(reader, params.contract, abi::claimConditionCall {}).await
    else {
        return (info, PriceQuote::free());
    };

    if window.count.is_zero() {
        tracing::warn!("{} has no claim conditions; quoting free", params.contract);
        return (info, PriceQuote::free());
    }

    // Active condition is the last one in the current window.
    let active_id = window
        .currentStartId
        .saturating_add(window.count)
        .saturating_sub(U256::from(1u64));

    let Some(ret) = try_call(
        reader,
        params.contract,
        abi::getClaimConditionByIdCall {
            conditionId: active_id,
        },
    )
    .await
    else {
        return (info, PriceQuote::free());
    };
    let cond = ret.condition;

    let condition = ClaimCondition {
        condition_id: active_id,
        price_per_token: cond.pricePerToken,
        currency: cond.currency,
        merkle_root: cond.merkleRoot,
        quantity_limit_per_wallet: cond.quantityLimitPerWallet,
        max_claimable_supply: cond.maxClaimableSupply,
        supply_claimed: cond.supplyClaimed,
        start_timestamp: u64::try_from(cond.startTimestamp).unwrap_or(u64::MAX),
    };

    let quote = if is_native_currency(condition.currency) {
        PriceQuote::native(
            condition.price_per_token,
            condition.price_per_token.saturating_mul(qty),
        )
    } else {
        let cost = condition.price_per_token.saturating_mul(qty);
        let payment = fetch_erc20_payment(
            reader,
            condition.currency,
            params.contract,
            params.recipient,
            cost,
        )
        .await;
        PriceQuote {
            unit_price: condition.price_per_token,
            total_cost: U256::ZERO,
            erc20: Some(payment),
        }
    };

    info.claim_condition = Some(condition);
    (info, quote)
}
