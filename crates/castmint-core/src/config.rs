//! Configuration types for Castmint

use std::collections::HashMap;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// Platform fee-schedule fallbacks.
///
/// These mirror fee values observed on the platforms at the time of writing
/// and WILL drift as platforms change their schedules; hosts should override
/// them from their own configuration rather than rely on the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeDefaults {
    /// Flat per-mint fee charged by the lazy-claim extension (wei)
    pub manifold_mint_fee_wei: U256,
    /// Per-token platform fee on generated contracts (wei)
    pub nfts2me_mint_fee_wei: U256,
    /// Per-token creator fee on generated contracts (wei)
    pub nfts2me_creator_fee_wei: U256,
}

impl Default for FeeDefaults {
    fn default() -> Self {
        Self {
            // 0.0005 ETH
            manifold_mint_fee_wei: U256::from(500_000_000_000_000u64),
            // 0.0001 ETH
            nfts2me_mint_fee_wei: U256::from(100_000_000_000_000u64),
            nfts2me_creator_fee_wei: U256::ZERO,
        }
    }
}

/// Runtime configuration for the mint flow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MintConfig {
    /// Fee-schedule fallbacks used when on-chain discovery degrades
    #[serde(default)]
    pub fees: FeeDefaults,

    /// Per-chain RPC endpoint overrides (chain id -> URL); takes precedence
    /// over the static registry
    #[serde(default)]
    pub rpc_overrides: HashMap<u64, String>,

    /// Timeout applied to each individual RPC call
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// How long a success state is displayed before the driver auto-resets
    #[serde(default = "default_success_dwell_secs")]
    pub success_dwell_secs: u64,
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_success_dwell_secs() -> u64 {
    5
}

impl Default for MintConfig {
    fn default() -> Self {
        Self {
            fees: FeeDefaults::default(),
            rpc_overrides: HashMap::new(),
            request_timeout_secs: default_request_timeout_secs(),
            success_dwell_secs: default_success_dwell_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MintConfig::default();
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(
            config.fees.manifold_mint_fee_wei,
            U256::from(500_000_000_000_000u64)
        );
        assert!(config.rpc_overrides.is_empty());
    }

    #[test]
    fn test_config_serialization() {
        let mut config = MintConfig::default();
        config
            .rpc_overrides
            .insert(8453, "http://127.0.0.1:8545".to_string());

        let json = serde_json::to_string(&config).unwrap();
        let parsed: MintConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(
            parsed.rpc_overrides.get(&8453).map(String::as_str),
            Some("http://127.0.0.1:8545")
        );
        assert_eq!(parsed.fees, config.fees);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: MintConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.request_timeout_secs, 30);
        assert_eq!(parsed.fees, FeeDefaults::default());
    }
}
