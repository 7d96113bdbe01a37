//! Sales-config price lookup
//!
//! Quote = sale price per unit, plus the protocol fee for the whole
//! quantity. A drop with no sale configured reports `None` so the
//! dispatcher falls through to the generic candidate chain.

use alloy_primitives::U256;
use castmint_core::{ContractInfo, MintParams, PriceQuote};
use evm_client::{try_call, ContractReader};

use crate::abi;

/// Fetch the drop quote, or `None` when no sale is configured.
pub async fn fetch_price(
    reader: &dyn ContractReader,
    params: &MintParams,
    info: &ContractInfo,
) -> Option<(ContractInfo, PriceQuote)> {
    let qty = U256::from(params.quantity);

    let sales = try_call(reader, params.contract, abi::salesConfigCall {}).await?;

    // No public sale window at all means the getter exists but the drop was
    // never configured.
    if sales.publicSaleStart == 0 && sales.publicSaleEnd == 0 {
        tracing::debug!("no public sale configured on {}", params.contract);
        return None;
    }

    let unit: U256 = sales.publicSalePrice.to::<U256>();

    // The protocol fee probe failing is not disqualifying; the sale price
    // alone still makes a usable quote.
    let fee = try_call(reader, params.contract, abi::zoraFeeForAmountCall { quantity: qty })
        .await
        .map(|r| r.fee)
        .unwrap_or(U256::ZERO);

    let total = unit.saturating_mul(qty).saturating_add(fee);
    Some((info.clone(), PriceQuote::native(unit, total)))
}
