//! JSON-RPC read client
//!
//! Minimal `eth_call` implementation over HTTP. Endpoints come from the
//! chain registry unless overridden in config; every request carries the
//! configured timeout so a dead endpoint degrades instead of hanging the
//! flow.

use std::time::Duration;

use alloy_primitives::Address;
use async_trait::async_trait;
use castmint_core::{resolve_rpc_endpoint, MintConfig, ReadError};

use crate::ContractReader;

/// Read-only JSON-RPC client for one chain
#[derive(Debug, Clone)]
pub struct RpcReader {
    http: reqwest::Client,
    url: String,
    chain_id: u64,
    timeout: Duration,
}

impl RpcReader {
    /// Create a reader for `chain_id`, resolving the endpoint through the
    /// registry and config overrides.
    pub fn new(chain_id: u64, config: &MintConfig) -> Self {
        Self::with_endpoint(chain_id, resolve_rpc_endpoint(chain_id, config))
            .with_timeout(Duration::from_secs(config.request_timeout_secs))
    }

    /// Create a reader against an explicit endpoint (tests, custom nodes)
    pub fn with_endpoint(chain_id: u64, url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
            chain_id,
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ContractReader for RpcReader {
    fn chain_id(&self) -> u64 {
        self.chain_id
    }

    async fn eth_call(&self, to: Address, data: Vec<u8>) -> Result<Vec<u8>, ReadError> {
        let body = call_request_body(to, &data);

        let response = tokio::time::timeout(self.timeout, self.http.post(&self.url).json(&body).send())
            .await
            .map_err(|_| ReadError::Timeout {
                secs: self.timeout.as_secs(),
            })?
            .map_err(|e| ReadError::Transport {
                message: e.to_string(),
            })?;

        let json: serde_json::Value = response.json().await.map_err(|e| ReadError::Transport {
            message: format!("invalid rpc response: {}", e),
        })?;

        parse_call_response(&json)
    }
}

/// Build the `eth_call` request payload
fn call_request_body(to: Address, data: &[u8]) -> serde_json::Value {
    serde_json::json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "eth_call",
        "params": [
            {
                "to": format!("{}", to),
                "data": format!("0x{}", hex::encode(data)),
            },
            "latest",
        ],
    })
}

/// Interpret a JSON-RPC response body for `eth_call`
fn parse_call_response(json: &serde_json::Value) -> Result<Vec<u8>, ReadError> {
    if let Some(err) = json.get("error") {
        let code = err["code"].as_i64().unwrap_or(0);
        let message = err["message"]
            .as_str()
            .unwrap_or("unknown rpc error")
            .to_string();

        // Error code 3 is the standard execution-revert code; some nodes
        // only signal it through the message text.
        if code == 3 || message.to_ascii_lowercase().contains("revert") {
            return Err(ReadError::Revert { message });
        }
        return Err(ReadError::Rpc { code, message });
    }

    let result = json["result"].as_str().ok_or_else(|| ReadError::Decode {
        message: "missing result field".to_string(),
    })?;

    let stripped = result.strip_prefix("0x").unwrap_or(result);
    hex::decode(stripped).map_err(|e| ReadError::Decode {
        message: format!("invalid result hex: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_shape() {
        let to = Address::from([0xab; 20]);
        let body = call_request_body(to, &[0x12, 0x34]);

        assert_eq!(body["method"], "eth_call");
        assert_eq!(body["params"][0]["data"], "0x1234");
        assert_eq!(body["params"][1], "latest");
        let to_field = body["params"][0]["to"].as_str().unwrap();
        assert!(to_field.starts_with("0x"));
        assert_eq!(to_field.len(), 42);
    }

    #[test]
    fn parse_result_hex() {
        let json = serde_json::json!({"jsonrpc": "2.0", "id": 1, "result": "0xdeadbeef"});
        assert_eq!(
            parse_call_response(&json).unwrap(),
            vec![0xde, 0xad, 0xbe, 0xef]
        );

        let empty = serde_json::json!({"result": "0x"});
        assert!(parse_call_response(&empty).unwrap().is_empty());
    }

    #[test]
    fn parse_revert_error() {
        let json = serde_json::json!({
            "error": {"code": 3, "message": "execution reverted: sold out"}
        });
        match parse_call_response(&json) {
            Err(ReadError::Revert { message }) => assert!(message.contains("sold out")),
            other => panic!("expected revert, got {:?}", other),
        }
    }

    #[test]
    fn parse_plain_rpc_error() {
        let json = serde_json::json!({
            "error": {"code": -32000, "message": "header not found"}
        });
        assert!(matches!(
            parse_call_response(&json),
            Err(ReadError::Rpc { code: -32000, .. })
        ));
    }

    #[test]
    fn reader_resolves_registry_endpoint() {
        let config = MintConfig::default();
        let reader = RpcReader::new(8453, &config);
        assert_eq!(reader.endpoint(), "https://mainnet.base.org");
        assert_eq!(reader.chain_id(), 8453);
    }
}
