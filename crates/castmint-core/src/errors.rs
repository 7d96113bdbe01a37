//! Error types for Castmint

use thiserror::Error;

use crate::Provider;

/// Failures of a read-only contract call.
///
/// Every probe call site in the workspace tolerates these: a failed read
/// degrades to "no match" or "try the next method", it never propagates past
/// a component boundary.
#[derive(Debug, Clone, Error)]
pub enum ReadError {
    #[error("transport error: {message}")]
    Transport { message: String },

    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("execution reverted: {message}")]
    Revert { message: String },

    #[error("failed to decode return data: {message}")]
    Decode { message: String },

    #[error("request timed out after {secs}s")]
    Timeout { secs: u64 },
}

/// Failures reported by the wallet capability.
#[derive(Debug, Clone, Error)]
pub enum WalletError {
    #[error("no wallet connected")]
    NotConnected,

    #[error("user rejected the request")]
    Rejected,

    #[error("failed to switch to chain {chain_id}: {message}")]
    SwitchFailed { chain_id: u64, message: String },

    #[error("transaction failed: {message}")]
    TxFailed { message: String },
}

/// Failures while building mint call arguments.
#[derive(Debug, Clone, Error)]
pub enum BuildError {
    #[error("missing required parameter: {name}")]
    MissingParam { name: &'static str },

    #[error("{provider} mint requires an extension address")]
    MissingExtension { provider: Provider },

    #[error("no claim data available for {provider} mint")]
    MissingClaim { provider: Provider },
}

/// Result type alias for read operations
pub type ReadResult<T> = std::result::Result<T, ReadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ReadError::Rpc {
            code: -32000,
            message: "header not found".to_string(),
        };
        assert_eq!(err.to_string(), "rpc error -32000: header not found");

        let err = BuildError::MissingClaim {
            provider: Provider::Manifold,
        };
        assert!(err.to_string().contains("manifold"));
    }
}
