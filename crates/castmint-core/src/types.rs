//! Core type definitions for Castmint

use alloy_primitives::{Address, B256, U256};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Transaction hash (32 bytes)
pub type TxHash = B256;

/// Minting convention a contract follows.
///
/// This is a closed set: every contract classifies as exactly one of these,
/// with `Generic` as the catch-all when no platform signature matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Manifold creator contracts minting through a lazy-claim extension
    Manifold,
    /// OpenSea drops minting through the shared SeaDrop contract
    Opensea,
    /// Zora drops
    Zora,
    /// NFTs2Me generated contracts
    Nfts2me,
    /// Thirdweb drop contracts with claim conditions
    Thirdweb,
    /// Anything else: plain price getter + mint(quantity)
    Generic,
}

impl Provider {
    pub const ALL: [Provider; 6] = [
        Provider::Manifold,
        Provider::Opensea,
        Provider::Zora,
        Provider::Nfts2me,
        Provider::Thirdweb,
        Provider::Generic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manifold => "manifold",
            Self::Opensea => "opensea",
            Self::Zora => "zora",
            Self::Nfts2me => "nfts2me",
            Self::Thirdweb => "thirdweb",
            Self::Generic => "generic",
        }
    }

    /// Case-insensitive parse; `None` for unrecognized names.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "manifold" => Some(Self::Manifold),
            "opensea" => Some(Self::Opensea),
            "zora" => Some(Self::Zora),
            "nfts2me" => Some(Self::Nfts2me),
            "thirdweb" => Some(Self::Thirdweb),
            "generic" => Some(Self::Generic),
            _ => None,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Normalized claim record for satellite-delegate (lazy-claim) providers.
///
/// Field shapes differ between the single- and multi-edition extension ABIs;
/// both normalize into this record after decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimInfo {
    /// Per-unit cost in the payment currency (native wei or ERC-20 units)
    pub cost: U256,
    /// Payment token; zero address means native currency
    pub erc20: Address,
    /// Allowlist root; zero means open to everyone
    pub merkle_root: B256,
    /// Per-wallet cap; 0 = unlimited
    pub wallet_max: u32,
    /// Claim window start (unix seconds, 0 = already open)
    pub start_date: u64,
    /// Claim window end (unix seconds, 0 = no end)
    pub end_date: u64,
}

impl ClaimInfo {
    /// Whether payment is in an ERC-20 token rather than native currency
    pub fn is_erc20(&self) -> bool {
        self.erc20 != Address::ZERO
    }

    /// Whether minting requires an allowlist membership proof
    pub fn requires_proof(&self) -> bool {
        self.merkle_root != B256::ZERO
    }
}

/// Active claim condition for open-edition (drop) providers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimCondition {
    /// Condition id this record was fetched for (needed by the mint call)
    pub condition_id: U256,
    pub price_per_token: U256,
    /// Payment currency; the native sentinel or zero address means native
    pub currency: Address,
    pub merkle_root: B256,
    pub quantity_limit_per_wallet: U256,
    pub max_claimable_supply: U256,
    pub supply_claimed: U256,
    pub start_timestamp: u64,
}

impl ClaimCondition {
    /// Whether minting requires an allowlist membership proof
    pub fn requires_proof(&self) -> bool {
        self.merkle_root != B256::ZERO
    }
}

/// Result of classifying one contract address on one chain.
///
/// Created once per detection pass and never mutated in place: price
/// discovery returns an updated copy when it learns more (e.g. the active
/// claim condition).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractInfo {
    pub provider: Provider,
    pub is_erc721: bool,
    pub is_erc1155: bool,
    /// Satellite contract that minting is delegated to, when the provider
    /// uses one
    pub extension_address: Option<Address>,
    /// Claim record for satellite-delegate providers
    pub claim: Option<ClaimInfo>,
    /// Active claim condition for open-edition providers
    pub claim_condition: Option<ClaimCondition>,
}

impl ContractInfo {
    pub fn new(provider: Provider) -> Self {
        Self {
            provider,
            is_erc721: false,
            is_erc1155: false,
            extension_address: None,
            claim: None,
            claim_condition: None,
        }
    }
}

/// One mint request, immutable for the duration of a single attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintParams {
    /// Token contract to mint from
    pub contract: Address,
    /// Target chain
    pub chain_id: u64,
    /// Explicit provider override; skips auto-detection when set
    pub provider: Option<Provider>,
    /// Number of tokens to mint
    pub quantity: u64,
    /// Claim instance identifier (satellite-delegate providers)
    pub instance_id: Option<U256>,
    /// Token identifier (multi-edition contracts, or claim lookup by token)
    pub token_id: Option<U256>,
    /// Mint recipient; defaults to the connected wallet when absent
    pub recipient: Option<Address>,
    /// Allowlist proof. Proof construction is out of scope, so claims that
    /// require one are rejected at validation unless supplied by the caller.
    pub merkle_proof: Option<Vec<B256>>,
}

impl MintParams {
    pub fn new(contract: Address, chain_id: u64) -> Self {
        Self {
            contract,
            chain_id,
            provider: None,
            quantity: 1,
            instance_id: None,
            token_id: None,
            recipient: None,
            merkle_proof: None,
        }
    }
}

/// A built mint call: target contract and calldata. The native value to
/// attach comes from the quote's `total_cost`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintCall {
    pub to: Address,
    pub data: Vec<u8>,
}

/// ERC-20 payment descriptor attached to a quote when the claim prices in a
/// token instead of native currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Erc20Payment {
    pub token: Address,
    pub symbol: String,
    pub decimals: u8,
    /// Total ERC-20 amount required for the requested quantity
    pub cost: U256,
    /// Current allowance toward the spender; absent when no wallet is known
    pub allowance: Option<U256>,
    /// Current token balance; absent when no wallet is known
    pub balance: Option<U256>,
}

impl Erc20Payment {
    /// Whether an approval transaction is needed before minting.
    /// `None` when the allowance has not been fetched yet.
    pub fn needs_approval(&self) -> Option<bool> {
        self.allowance.map(|a| a < self.cost)
    }
}

/// Price quote for one mint attempt.
///
/// All values are smallest-unit integers; display division by `10^decimals`
/// is strictly a presentation concern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Price per unit in the payment currency
    pub unit_price: U256,
    /// Native wei that must accompany the mint transaction. When payment is
    /// in an ERC-20 this is the flat native fee alone; the token amount lives
    /// in `erc20.cost`. Never ambiguous.
    pub total_cost: U256,
    pub erc20: Option<Erc20Payment>,
}

impl PriceQuote {
    /// A free mint: zero price, zero cost, no token payment.
    pub fn free() -> Self {
        Self::default()
    }

    /// Quote for a native-currency mint.
    pub fn native(unit_price: U256, total_cost: U256) -> Self {
        Self {
            unit_price,
            total_cost,
            erc20: None,
        }
    }
}
