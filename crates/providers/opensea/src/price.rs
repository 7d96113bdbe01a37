//! Public-drop price lookup
//!
//! SeaDrop returns a zeroed record for contracts it has never seen; that is
//! treated as "no drop registered" and reported as `None` so the dispatcher
//! can fall through to the generic candidate chain.

use alloy_primitives::U256;
use castmint_core::{ContractInfo, MintParams, PriceQuote};
use evm_client::{try_call, ContractReader};

use crate::abi;
use crate::constants::SEA_DROP;

/// Fetch the public-drop quote, or `None` when no drop is registered.
pub async fn fetch_price(
    reader: &dyn ContractReader,
    params: &MintParams,
    info: &ContractInfo,
) -> Option<(ContractInfo, PriceQuote)> {
    let satellite = info.extension_address.unwrap_or(SEA_DROP);

    let ret = try_call(
        reader,
        satellite,
        abi::getPublicDropCall {
            nftContract: params.contract,
        },
    )
    .await?;
    let drop = ret.publicDrop;

    // Unregistered contracts come back fully zeroed.
    if drop.startTime.is_zero() && drop.endTime.is_zero() {
        tracing::debug!("no public drop registered for {}", params.contract);
        return None;
    }

    let unit: U256 = drop.mintPrice.to::<U256>();
    let quote = PriceQuote::native(unit, unit.saturating_mul(U256::from(params.quantity)));
    Some((info.clone(), quote))
}
