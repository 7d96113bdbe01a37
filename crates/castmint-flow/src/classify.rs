//! Error classification
//!
//! Lossy best-effort triage of opaque wallet/chain errors into a closed
//! taxonomy with user-actionable hints. This is substring matching over
//! lower-cased text in priority order, not exact parsing of revert codes;
//! wallets and nodes disagree wildly on error shapes.

use serde::{Deserialize, Serialize};

/// Closed failure taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    UserRejected,
    InsufficientFunds,
    WrongNetwork,
    ContractError,
    AllowanceError,
    NetworkError,
    Unknown,
}

/// Which transaction the failure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorContext {
    Approval,
    Mint,
}

impl ErrorContext {
    fn verb(&self) -> &'static str {
        match self {
            Self::Approval => "Approval",
            Self::Mint => "Mint",
        }
    }
}

/// Classified failure with a fixed human message and a suggested next step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedError {
    pub kind: ErrorKind,
    pub message: String,
    pub detail: Option<String>,
    pub action: Option<String>,
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Classify a raw error string. Priority order: user rejection beats
/// everything, transport noise only matches last before unknown.
pub fn classify(raw: &str, context: ErrorContext) -> ParsedError {
    let text = raw.to_lowercase();
    let verb = context.verb();

    if contains_any(
        &text,
        &[
            "user rejected",
            "user denied",
            "rejected the request",
            "action_rejected",
            "request rejected",
        ],
    ) {
        return ParsedError {
            kind: ErrorKind::UserRejected,
            message: format!("{} was cancelled in the wallet", verb),
            detail: None,
            action: Some("Try again".to_string()),
        };
    }

    if contains_any(
        &text,
        &[
            "insufficient funds",
            "insufficient balance",
            "exceeds balance",
            "not enough funds",
        ],
    ) {
        return ParsedError {
            kind: ErrorKind::InsufficientFunds,
            message: "Not enough funds to cover the transaction".to_string(),
            detail: Some(match context {
                ErrorContext::Approval => {
                    "Gas for the approval could not be covered".to_string()
                }
                ErrorContext::Mint => {
                    "The mint price plus gas exceeds the wallet balance".to_string()
                }
            }),
            action: Some("Add funds".to_string()),
        };
    }

    if contains_any(
        &text,
        &[
            "wrong network",
            "chain mismatch",
            "unsupported chain",
            "does not match the target chain",
            "unrecognized chain",
        ],
    ) {
        return ParsedError {
            kind: ErrorKind::WrongNetwork,
            message: "The wallet is on the wrong network".to_string(),
            detail: None,
            action: Some("Switch network".to_string()),
        };
    }

    if contains_any(&text, &["execution reverted", "revert", "contract call failed"]) {
        // Sub-classify from the revert reason where one leaked through.
        let (detail, action) = if contains_any(
            &text,
            &["sold out", "max supply", "exceeds supply", "supply claimed"],
        ) {
            (Some("This edition is sold out".to_string()), None)
        } else if contains_any(
            &text,
            &[
                "not active",
                "not started",
                "sale has not started",
                "claim not active",
                "before start",
            ],
        ) {
            (
                Some("The mint is not open yet".to_string()),
                Some("Check the start time".to_string()),
            )
        } else if contains_any(
            &text,
            &["wallet limit", "mint limit", "max per wallet", "wallet max"],
        ) {
            (
                Some("This wallet has reached its mint limit".to_string()),
                None,
            )
        } else if contains_any(
            &text,
            &["merkle", "proof", "not allowlisted", "not eligible", "allowlist"],
        ) {
            (
                Some("This wallet is not on the allowlist".to_string()),
                None,
            )
        } else {
            (None, Some("Try again".to_string()))
        };

        return ParsedError {
            kind: ErrorKind::ContractError,
            message: format!("{} transaction was rejected by the contract", verb),
            detail,
            action,
        };
    }

    if contains_any(
        &text,
        &["allowance", "approval needed", "erc20 approval", "transfer amount exceeds"],
    ) {
        return ParsedError {
            kind: ErrorKind::AllowanceError,
            message: "Token approval is insufficient".to_string(),
            detail: None,
            action: Some("Approve token".to_string()),
        };
    }

    if contains_any(
        &text,
        &[
            "timeout",
            "timed out",
            "connection",
            "network error",
            "fetch failed",
            "rate limit",
            "too many requests",
            "503",
        ],
    ) {
        return ParsedError {
            kind: ErrorKind::NetworkError,
            message: "A network error interrupted the request".to_string(),
            detail: None,
            action: Some("Try again".to_string()),
        };
    }

    ParsedError {
        kind: ErrorKind::Unknown,
        message: format!("{} failed", verb),
        detail: Some(raw.to_string()),
        action: Some("Try again".to_string()),
    }
}
