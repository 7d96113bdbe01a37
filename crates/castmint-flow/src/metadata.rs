//! Token metadata resolution
//!
//! A linear fallback chain over the ways supported contracts expose their
//! metadata URI. A provider hint moves that provider's method to the front
//! but never skips the rest of the chain. Resolution returns an empty string
//! (never an error) when every method fails; metadata is cosmetic and must
//! not block a mint.

use alloy_primitives::{Address, U256};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use castmint_core::Provider;
use evm_client::{abi as shared_abi, try_call, ContractReader};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Resolution methods, in default fallback order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    TokenUri,
    Uri,
    Extension,
    ContractUri,
    SharedMetadata,
    BaseUri,
}

const FALLBACK_CHAIN: [Method; 6] = [
    Method::TokenUri,
    Method::Uri,
    Method::Extension,
    Method::ContractUri,
    Method::SharedMetadata,
    Method::BaseUri,
];

fn preferred_method(provider: Provider) -> Option<Method> {
    match provider {
        Provider::Manifold => Some(Method::Extension),
        Provider::Thirdweb => Some(Method::SharedMetadata),
        Provider::Nfts2me | Provider::Opensea | Provider::Zora => Some(Method::TokenUri),
        Provider::Generic => None,
    }
}

/// Resolve the metadata URI for `token_id` on `contract`.
pub async fn resolve_metadata_uri(
    reader: &dyn ContractReader,
    contract: Address,
    token_id: U256,
    provider_hint: Option<Provider>,
) -> String {
    let preferred = provider_hint.and_then(preferred_method);

    let order = preferred
        .into_iter()
        .chain(FALLBACK_CHAIN.iter().copied().filter(|m| Some(*m) != preferred));

    for method in order {
        if let Some(uri) = try_method(reader, contract, token_id, method).await {
            if !uri.is_empty() {
                return uri;
            }
        }
    }

    String::new()
}

async fn try_method(
    reader: &dyn ContractReader,
    contract: Address,
    token_id: U256,
    method: Method,
) -> Option<String> {
    match method {
        Method::TokenUri => {
            try_call(reader, contract, shared_abi::tokenURICall { tokenId: token_id })
                .await
                .map(|r| r.uri)
        }

        Method::Uri => try_call(reader, contract, shared_abi::uriCall { id: token_id })
            .await
            .map(|r| substitute_id(&r.value, token_id)),

        Method::Extension => {
            let extensions = try_call(
                reader,
                contract,
                manifold::abi::creator::getExtensionsCall {},
            )
            .await?
            .extensions;
            let extension = manifold::constants::preferred_extension(&extensions)?;
            try_call(
                reader,
                extension,
                manifold::abi::erc721::tokenURICall {
                    creatorContractAddress: contract,
                    tokenId: token_id,
                },
            )
            .await
            .map(|r| r.uri)
        }

        Method::ContractUri => try_call(reader, contract, shared_abi::contractURICall {})
            .await
            .map(|r| r.uri),

        Method::SharedMetadata => {
            let shared = try_call(reader, contract, thirdweb::abi::sharedMetadataCall {}).await?;
            Some(shared_metadata_data_uri(
                &shared.name,
                &shared.description,
                &shared.imageURI,
                &shared.animationURI,
            ))
        }

        Method::BaseUri => {
            let base = try_call(reader, contract, shared_abi::baseURICall {})
                .await
                .map(|r| r.uri)?;
            if base.is_empty() {
                return None;
            }
            let sep = if base.ends_with('/') { "" } else { "/" };
            Some(format!("{}{}{}", base, sep, token_id))
        }
    }
}

/// Replace an `{id}` placeholder with the zero-padded 64-char lowercase hex
/// token id, per the multi-edition metadata convention.
fn substitute_id(uri: &str, token_id: U256) -> String {
    if uri.contains("{id}") {
        let padded = hex::encode(token_id.to_be_bytes::<32>());
        uri.replace("{id}", &padded)
    } else {
        uri.to_string()
    }
}

/// Synthesize a data URI from inline shared-metadata fields.
fn shared_metadata_data_uri(
    name: &str,
    description: &str,
    image_uri: &str,
    animation_uri: &str,
) -> String {
    let mut doc = serde_json::json!({
        "name": name,
        "description": description,
        "image": image_uri,
    });
    if !animation_uri.is_empty() {
        doc["animation_url"] = serde_json::Value::String(animation_uri.to_string());
    }
    format!(
        "data:application/json;base64,{}",
        BASE64.encode(doc.to_string())
    )
}

/// Parsed token metadata document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub animation_url: Option<String>,
}

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("unsupported metadata uri scheme: {uri}")]
    UnsupportedScheme { uri: String },

    #[error("failed to fetch metadata: {message}")]
    Fetch { message: String },

    #[error("failed to parse metadata document: {message}")]
    Parse { message: String },
}

const IPFS_GATEWAY: &str = "https://ipfs.io/ipfs/";

/// Fetch and parse the metadata document behind a resolved URI. Handles
/// plain and base64 `data:` URIs, `ipfs://` through a public gateway, and
/// http(s).
pub async fn fetch_token_metadata(
    http: &reqwest::Client,
    uri: &str,
) -> Result<TokenMetadata, MetadataError> {
    if let Some(rest) = uri.strip_prefix("data:application/json;base64,") {
        let bytes = BASE64.decode(rest).map_err(|e| MetadataError::Parse {
            message: e.to_string(),
        })?;
        return serde_json::from_slice(&bytes).map_err(|e| MetadataError::Parse {
            message: e.to_string(),
        });
    }

    if let Some(rest) = uri
        .strip_prefix("data:application/json;utf8,")
        .or_else(|| uri.strip_prefix("data:application/json,"))
    {
        return serde_json::from_str(rest).map_err(|e| MetadataError::Parse {
            message: e.to_string(),
        });
    }

    let url = if let Some(path) = uri.strip_prefix("ipfs://") {
        format!("{}{}", IPFS_GATEWAY, path.trim_start_matches("ipfs/"))
    } else if uri.starts_with("http://") || uri.starts_with("https://") {
        uri.to_string()
    } else {
        return Err(MetadataError::UnsupportedScheme {
            uri: uri.to_string(),
        });
    };

    let response = http
        .get(&url)
        .send()
        .await
        .map_err(|e| MetadataError::Fetch {
            message: e.to_string(),
        })?;

    response
        .json::<TokenMetadata>()
        .await
        .map_err(|e| MetadataError::Parse {
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_sol_types::SolCall;
    use evm_client::mock::MockReader;

    fn contract() -> Address {
        Address::from([0x0c; 20])
    }

    #[test]
    fn id_substitution_pads_to_64_hex_chars() {
        let uri = substitute_id("https://meta.example/{id}.json", U256::from(0x2au64));
        assert_eq!(
            uri,
            format!("https://meta.example/{}{}.json", "0".repeat(62), "2a")
        );

        // No placeholder: untouched.
        assert_eq!(
            substitute_id("https://meta.example/7.json", U256::from(7u64)),
            "https://meta.example/7.json"
        );
    }

    #[tokio::test]
    async fn token_uri_wins_when_present() {
        let mut mock = MockReader::new(8453);
        mock.on_selector(
            contract(),
            shared_abi::tokenURICall::SELECTOR,
            shared_abi::tokenURICall::abi_encode_returns(&("ipfs://QmToken/1".to_string(),)),
        );

        let uri = resolve_metadata_uri(&mock, contract(), U256::from(1u64), None).await;
        assert_eq!(uri, "ipfs://QmToken/1");
    }

    #[tokio::test]
    async fn falls_through_to_uri_with_substitution() {
        let mut mock = MockReader::new(8453);
        mock.on_selector(
            contract(),
            shared_abi::uriCall::SELECTOR,
            shared_abi::uriCall::abi_encode_returns(&(
                "https://meta.example/{id}".to_string(),
            )),
        );

        let uri = resolve_metadata_uri(&mock, contract(), U256::from(1u64), None).await;
        assert!(uri.starts_with("https://meta.example/0000"));
        assert!(uri.ends_with("01"));
    }

    #[tokio::test]
    async fn shared_metadata_synthesizes_data_uri() {
        let mut mock = MockReader::new(8453);
        mock.on_selector(
            contract(),
            thirdweb::abi::sharedMetadataCall::SELECTOR,
            thirdweb::abi::sharedMetadataCall::abi_encode_returns(&(
                "Open Edition".to_string(),
                "An open edition".to_string(),
                "ipfs://QmImage".to_string(),
                String::new(),
            )),
        );

        let uri = resolve_metadata_uri(
            &mock,
            contract(),
            U256::from(1u64),
            Some(Provider::Thirdweb),
        )
        .await;
        assert!(uri.starts_with("data:application/json;base64,"));

        let http = reqwest::Client::new();
        let metadata = fetch_token_metadata(&http, &uri).await.unwrap();
        assert_eq!(metadata.name, "Open Edition");
        assert_eq!(metadata.image.as_deref(), Some("ipfs://QmImage"));
        assert_eq!(metadata.animation_url, None);
    }

    #[tokio::test]
    async fn hint_failure_still_walks_the_chain() {
        // Manifold hint, but the extension probe fails; tokenURI answers.
        let mut mock = MockReader::new(8453);
        mock.on_selector(
            contract(),
            shared_abi::tokenURICall::SELECTOR,
            shared_abi::tokenURICall::abi_encode_returns(&("ar://fallback".to_string(),)),
        );

        let uri = resolve_metadata_uri(
            &mock,
            contract(),
            U256::from(1u64),
            Some(Provider::Manifold),
        )
        .await;
        assert_eq!(uri, "ar://fallback");
    }

    #[tokio::test]
    async fn base_uri_concatenation_is_last() {
        let mut mock = MockReader::new(8453);
        mock.on_selector(
            contract(),
            shared_abi::baseURICall::SELECTOR,
            shared_abi::baseURICall::abi_encode_returns(&(
                "https://meta.example/tokens".to_string(),
            )),
        );

        let uri = resolve_metadata_uri(&mock, contract(), U256::from(12u64), None).await;
        assert_eq!(uri, "https://meta.example/tokens/12");
    }

    #[tokio::test]
    async fn everything_failing_yields_empty_string() {
        let mock = MockReader::new(8453);
        let uri = resolve_metadata_uri(&mock, contract(), U256::from(1u64), None).await;
        assert_eq!(uri, "");
    }

    #[tokio::test]
    async fn plain_data_uri_parses() {
        let http = reqwest::Client::new();
        let metadata = fetch_token_metadata(
            &http,
            r#"data:application/json;utf8,{"name":"Inline","description":"d"}"#,
        )
        .await
        .unwrap();
        assert_eq!(metadata.name, "Inline");

        let err = fetch_token_metadata(&http, "ar://unsupported").await;
        assert!(matches!(err, Err(MetadataError::UnsupportedScheme { .. })));
    }
}
