//! Price discovery for lazy-claim mints
//!
//! The quote is the flat extension fee plus the claim cost when payment is
//! native, or the flat fee alone when the claim prices in an ERC-20 (the
//! token amount rides in the payment descriptor). Discovery never fails:
//! it degrades to fee-only, and to the configured default fee when even the
//! fee cannot be read.

use alloy_primitives::U256;
use castmint_core::{ContractInfo, MintConfig, MintParams, PriceQuote};
use evm_client::erc20::fetch_erc20_payment;
use evm_client::{try_call, ContractReader};

use crate::abi::erc721;
use crate::claim::{fetch_claim, ClaimAbi};

/// Fetch the quote for a manifold-style mint. Returns the contract info with
/// the normalized claim attached (when one was found) alongside the quote.
pub async fn fetch_price(
    reader: &dyn ContractReader,
    config: &MintConfig,
    params: &mut MintParams,
    mut info: ContractInfo,
) -> (ContractInfo, PriceQuote) {
    let qty = U256::from(params.quantity);

    let Some(extension) = info.extension_address else {
        tracing::warn!(
            "manifold contract {} has no extension address; quoting default fee",
            params.contract
        );
        let fee = config.fees.manifold_mint_fee_wei;
        return (info, PriceQuote::native(fee, fee.saturating_mul(qty)));
    };

    // Flat per-mint fee; the configured default covers extensions that
    // predate MINT_FEE or unreachable endpoints.
    let fee = match try_call(reader, extension, erc721::MINT_FEECall {}).await {
        Some(ret) => ret.fee,
        None => {
            tracing::warn!("MINT_FEE read failed on {}; using configured default", extension);
            config.fees.manifold_mint_fee_wei
        }
    };

    let abi = if info.is_erc1155 {
        ClaimAbi::Erc1155
    } else {
        ClaimAbi::Erc721
    };

    let Some(claim) = fetch_claim(reader, extension, abi, params).await else {
        // No usable claim record: fee-only degradation keeps the flow alive.
        return (info, PriceQuote::native(fee, fee.saturating_mul(qty)));
    };

    let quote = if claim.is_erc20() {
        let cost = claim.cost.saturating_mul(qty);
        let payment =
            fetch_erc20_payment(reader, claim.erc20, extension, params.recipient, cost).await;
        PriceQuote {
            unit_price: claim.cost,
            total_cost: fee.saturating_mul(qty),
            erc20: Some(payment),
        }
    } else {
        let unit = fee.saturating_add(claim.cost);
        PriceQuote::native(unit, unit.saturating_mul(qty))
    };

    info.claim = Some(claim);
    (info, quote)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::aliases::U48;
    use alloy_primitives::{Address, B256};
    use alloy_sol_types::SolCall;
    use castmint_core::Provider;
    use evm_client::abi::{decimalsCall, symbolCall};
    use evm_client::mock::MockReader;

    const FEE: u64 = 500_000_000_000_000;

    fn extension() -> Address {
        Address::from([0x0e; 20])
    }

    fn creator() -> Address {
        Address::from([0x0c; 20])
    }

    fn info_with_extension() -> ContractInfo {
        let mut info = ContractInfo::new(Provider::Manifold);
        info.is_erc721 = true;
        info.extension_address = Some(extension());
        info
    }

    fn claim_returns(cost: u64, erc20: Address) -> Vec<u8> {
        let claim = erc721::Claim {
            total: 0,
            totalMax: 0,
            walletMax: 0,
            startDate: U48::from(0u64),
            endDate: U48::from(0u64),
            storageProtocol: 1,
            identical: true,
            merkleRoot: B256::ZERO,
            location: String::new(),
            cost: U256::from(cost),
            paymentReceiver: Address::ZERO,
            erc20,
            signingAddress: Address::ZERO,
        };
        erc721::getClaimCall::abi_encode_returns(&(claim,))
    }

    #[tokio::test]
    async fn native_claim_totals_fee_plus_cost() {
        let mut mock = MockReader::new(8453);
        mock.on_selector(
            extension(),
            erc721::MINT_FEECall::SELECTOR,
            erc721::MINT_FEECall::abi_encode_returns(&(U256::from(FEE),)),
        );
        mock.on_selector(
            extension(),
            erc721::getClaimCall::SELECTOR,
            claim_returns(2_000, Address::ZERO),
        );

        let mut params = MintParams::new(creator(), 8453);
        params.instance_id = Some(U256::from(1u64));
        params.quantity = 2;

        let (info, quote) = fetch_price(
            &mock,
            &MintConfig::default(),
            &mut params,
            info_with_extension(),
        )
        .await;

        assert_eq!(quote.unit_price, U256::from(FEE + 2_000));
        assert_eq!(quote.total_cost, U256::from((FEE + 2_000) * 2));
        assert!(quote.erc20.is_none());
        assert!(info.claim.is_some());
    }

    #[tokio::test]
    async fn erc20_claim_keeps_native_total_to_fee() {
        let token = Address::from([0x20; 20]);
        let mut mock = MockReader::new(8453);
        mock.on_selector(
            extension(),
            erc721::MINT_FEECall::SELECTOR,
            erc721::MINT_FEECall::abi_encode_returns(&(U256::from(FEE),)),
        );
        mock.on_selector(
            extension(),
            erc721::getClaimCall::SELECTOR,
            claim_returns(1_000_000, token),
        );
        mock.on_selector(
            token,
            symbolCall::SELECTOR,
            symbolCall::abi_encode_returns(&("USDC".to_string(),)),
        );
        mock.on_selector(
            token,
            decimalsCall::SELECTOR,
            decimalsCall::abi_encode_returns(&(6u8,)),
        );

        let mut params = MintParams::new(creator(), 8453);
        params.instance_id = Some(U256::from(1u64));
        params.quantity = 3;

        let (_, quote) = fetch_price(
            &mock,
            &MintConfig::default(),
            &mut params,
            info_with_extension(),
        )
        .await;

        assert_eq!(quote.total_cost, U256::from(FEE * 3));
        let payment = quote.erc20.unwrap();
        assert_eq!(payment.cost, U256::from(3_000_000u64));
        assert_eq!(payment.symbol, "USDC");
        // no recipient known: allowance and balance stay unfetched
        assert_eq!(payment.allowance, None);
        assert_eq!(payment.balance, None);
    }

    #[tokio::test]
    async fn degrades_to_fee_only_then_default() {
        // Extension answers MINT_FEE but has no claim for the instance.
        let mut mock = MockReader::new(8453);
        mock.on_selector(
            extension(),
            erc721::MINT_FEECall::SELECTOR,
            erc721::MINT_FEECall::abi_encode_returns(&(U256::from(FEE),)),
        );

        let mut params = MintParams::new(creator(), 8453);
        params.instance_id = Some(U256::from(1u64));

        let (_, quote) = fetch_price(
            &mock,
            &MintConfig::default(),
            &mut params,
            info_with_extension(),
        )
        .await;
        assert_eq!(quote.total_cost, U256::from(FEE));

        // Fully dead extension: configured default fee.
        let dead = MockReader::new(8453);
        let mut params = MintParams::new(creator(), 8453);
        params.instance_id = Some(U256::from(1u64));

        let (_, quote) = fetch_price(
            &dead,
            &MintConfig::default(),
            &mut params,
            info_with_extension(),
        )
        .await;
        assert_eq!(
            quote.total_cost,
            MintConfig::default().fees.manifold_mint_fee_wei
        );
    }
}
