//! Supported network registry
//!
//! Static table of chains the mint flow can target, with alias and RPC
//! endpoint resolution. Resolution degrades to mainnet for display purposes;
//! the driver's wallet-chain gate is what actually prevents minting on the
//! wrong network.

use serde::Serialize;

use crate::MintConfig;

/// Native currency of a chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NativeCurrency {
    pub name: &'static str,
    pub symbol: &'static str,
    pub decimals: u8,
}

/// One supported network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Chain {
    pub id: u64,
    pub name: &'static str,
    /// Case-insensitive lookup aliases, in addition to `name`
    pub aliases: &'static [&'static str],
    pub native: NativeCurrency,
    pub rpc_urls: &'static [&'static str],
}

const ETH: NativeCurrency = NativeCurrency {
    name: "Ether",
    symbol: "ETH",
    decimals: 18,
};

/// All supported chains, loaded once at startup
pub const CHAINS: &[Chain] = &[
    Chain {
        id: 1,
        name: "ethereum",
        aliases: &["mainnet", "eth"],
        native: ETH,
        rpc_urls: &["https://eth.llamarpc.com", "https://cloudflare-eth.com"],
    },
    Chain {
        id: 10,
        name: "optimism",
        aliases: &["op"],
        native: ETH,
        rpc_urls: &["https://mainnet.optimism.io"],
    },
    Chain {
        id: 137,
        name: "polygon",
        aliases: &["matic"],
        native: NativeCurrency {
            name: "POL",
            symbol: "POL",
            decimals: 18,
        },
        rpc_urls: &["https://polygon-rpc.com"],
    },
    Chain {
        id: 8453,
        name: "base",
        aliases: &[],
        native: ETH,
        rpc_urls: &["https://mainnet.base.org", "https://base.llamarpc.com"],
    },
    Chain {
        id: 42161,
        name: "arbitrum",
        aliases: &["arb", "arbitrum-one"],
        native: ETH,
        rpc_urls: &["https://arb1.arbitrum.io/rpc"],
    },
    Chain {
        id: 7777777,
        name: "zora",
        aliases: &[],
        native: ETH,
        rpc_urls: &["https://rpc.zora.energy"],
    },
    Chain {
        id: 84532,
        name: "base-sepolia",
        aliases: &["basesepolia"],
        native: ETH,
        rpc_urls: &["https://sepolia.base.org"],
    },
];

/// Chain used when an identifier cannot be resolved
pub const DEFAULT_CHAIN_ID: u64 = 1;

/// The fallback chain entry (first row of the table)
fn default_chain() -> &'static Chain {
    &CHAINS[0]
}

/// Look up a chain by id
pub fn chain_by_id(id: u64) -> Option<&'static Chain> {
    CHAINS.iter().find(|c| c.id == id)
}

/// Look up a chain by case-insensitive name or alias
pub fn chain_by_name(name: &str) -> Option<&'static Chain> {
    let lower = name.to_ascii_lowercase();
    CHAINS.iter().find(|c| {
        c.name == lower || c.aliases.iter().any(|a| *a == lower)
    })
}

/// Resolve a chain from a numeric id or a name/alias string.
///
/// Unrecognized identifiers degrade to mainnet with a warning rather than
/// failing; display code always gets a usable chain back.
pub fn resolve_chain(id_or_name: &str) -> &'static Chain {
    let found = match id_or_name.trim().parse::<u64>() {
        Ok(id) => chain_by_id(id),
        Err(_) => chain_by_name(id_or_name),
    };

    found.unwrap_or_else(|| {
        tracing::warn!(
            "Unrecognized chain '{}', falling back to mainnet",
            id_or_name
        );
        default_chain()
    })
}

/// Resolve a chain id, degrading to mainnet for unknown ids
pub fn resolve_chain_id(id: u64) -> &'static Chain {
    chain_by_id(id).unwrap_or_else(|| {
        tracing::warn!("Unrecognized chain id {}, falling back to mainnet", id);
        default_chain()
    })
}

/// Resolve the RPC endpoint for a chain. Config overrides win over the
/// static table.
pub fn resolve_rpc_endpoint(chain_id: u64, config: &MintConfig) -> String {
    if let Some(url) = config.rpc_overrides.get(&chain_id) {
        return url.clone();
    }

    let chain = resolve_chain_id(chain_id);
    match chain.rpc_urls.first() {
        Some(url) => url.to_string(),
        None => default_chain().rpc_urls[0].to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_id_and_alias() {
        assert_eq!(chain_by_id(8453).unwrap().name, "base");
        assert_eq!(chain_by_name("ARB").unwrap().id, 42161);
        assert_eq!(chain_by_name("mainnet").unwrap().id, 1);
        assert!(chain_by_id(999).is_none());
    }

    #[test]
    fn resolve_parses_numeric_strings() {
        assert_eq!(resolve_chain("7777777").id, 7777777);
        assert_eq!(resolve_chain("optimism").id, 10);
    }

    #[test]
    fn resolve_degrades_to_mainnet() {
        assert_eq!(resolve_chain("not-a-chain").id, DEFAULT_CHAIN_ID);
        assert_eq!(resolve_chain_id(424242).id, DEFAULT_CHAIN_ID);
    }

    #[test]
    fn rpc_endpoint_override_wins() {
        let mut config = MintConfig::default();
        assert_eq!(resolve_rpc_endpoint(8453, &config), "https://mainnet.base.org");

        config
            .rpc_overrides
            .insert(8453, "http://127.0.0.1:8545".to_string());
        assert_eq!(resolve_rpc_endpoint(8453, &config), "http://127.0.0.1:8545");
    }

    #[test]
    fn every_chain_has_an_endpoint() {
        for chain in CHAINS {
            assert!(!chain.rpc_urls.is_empty(), "{} has no RPC", chain.name);
            assert_eq!(chain.native.decimals, 18);
        }
    }
}
