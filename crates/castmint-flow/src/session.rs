//! Mint session state machine
//!
//! A pure state-transition function: no I/O, no side effects. The driving
//! caller performs detection, approval, and mint calls, then feeds their
//! outcomes back in as actions. The transition table is the single-flight
//! enforcement mechanism: a `*_START` action is only accepted from the
//! state that legitimately precedes it, and anything unexpected is a no-op.

use alloy_primitives::U256;
use castmint_core::{ContractInfo, PriceQuote, TxHash};
use serde::{Deserialize, Serialize};

/// Where the flow currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MintStep {
    Initial,
    Detecting,
    /// Quote ready, waiting for the user to mint
    Sheet,
    Connecting,
    /// An ERC-20 approval is required before minting
    Approve,
    Approving,
    Minting,
    /// A transaction was submitted; waiting for its receipt
    Waiting,
    Success,
    Error,
    ValidationError,
}

/// Kind of the in-flight transaction. A transaction hash is only meaningful
/// paired with this.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    #[default]
    None,
    Approval,
    Mint,
}

/// Everything the driving caller can report into the machine
#[derive(Debug, Clone, PartialEq)]
pub enum MintAction {
    DetectStart,
    DetectSuccess {
        contract: ContractInfo,
        quote: PriceQuote,
    },
    DetectError {
        message: String,
    },
    ValidationError {
        errors: Vec<String>,
    },
    ApproveStart,
    ApproveTxSubmitted {
        tx_hash: TxHash,
    },
    ApproveSuccess,
    ConnectStart,
    ConnectSuccess,
    MintStart,
    MintTxSubmitted {
        tx_hash: TxHash,
    },
    TxSuccess,
    TxError {
        message: String,
    },
    /// Arrives asynchronously after wallet connection
    UpdateAllowance {
        allowance: U256,
    },
    Reset,
}

/// State of one mint UI instance. Exactly one exists per active flow; it is
/// created fresh on `Reset`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MintSession {
    pub step: MintStep,
    pub contract: Option<ContractInfo>,
    pub quote: Option<PriceQuote>,
    pub error: Option<String>,
    pub tx_hash: Option<TxHash>,
    pub tx_kind: TxKind,
    pub loading: bool,
    pub validation_errors: Vec<String>,
    /// Derived: an approval transaction is still required before minting
    pub needs_approval: bool,
}

impl MintSession {
    pub fn new() -> Self {
        Self {
            step: MintStep::Initial,
            contract: None,
            quote: None,
            error: None,
            tx_hash: None,
            tx_kind: TxKind::None,
            loading: false,
            validation_errors: Vec::new(),
            needs_approval: false,
        }
    }
}

impl Default for MintSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether the quote demands an approval the wallet has not yet granted.
/// Unknown allowance (no wallet yet) does not gate.
fn quote_needs_approval(quote: &PriceQuote) -> bool {
    quote
        .erc20
        .as_ref()
        .and_then(|payment| payment.needs_approval())
        .unwrap_or(false)
}

/// The state-transition function. Unexpected actions leave the state
/// unchanged.
pub fn reduce(state: &MintSession, action: MintAction) -> MintSession {
    match action {
        MintAction::Reset => MintSession::new(),

        MintAction::DetectStart if state.step == MintStep::Initial => MintSession {
            step: MintStep::Detecting,
            loading: true,
            ..MintSession::new()
        },

        MintAction::DetectSuccess { contract, quote } if state.step == MintStep::Detecting => {
            let needs_approval = quote_needs_approval(&quote);
            MintSession {
                step: if needs_approval {
                    MintStep::Approve
                } else {
                    MintStep::Sheet
                },
                contract: Some(contract),
                quote: Some(quote),
                loading: false,
                needs_approval,
                ..state.clone()
            }
        }

        MintAction::DetectError { message } if state.step == MintStep::Detecting => MintSession {
            step: MintStep::Error,
            error: Some(message),
            loading: false,
            ..state.clone()
        },

        MintAction::ValidationError { errors } if state.step == MintStep::Detecting => {
            MintSession {
                step: MintStep::ValidationError,
                validation_errors: errors,
                loading: false,
                ..state.clone()
            }
        }

        MintAction::ApproveStart if state.step == MintStep::Approve => MintSession {
            step: MintStep::Approving,
            loading: true,
            ..state.clone()
        },

        MintAction::ApproveTxSubmitted { tx_hash } if state.step == MintStep::Approving => {
            MintSession {
                step: MintStep::Waiting,
                tx_hash: Some(tx_hash),
                tx_kind: TxKind::Approval,
                ..state.clone()
            }
        }

        MintAction::ApproveSuccess
            if state.step == MintStep::Waiting && state.tx_kind == TxKind::Approval =>
        {
            // The approval covered exactly the claim cost: record it as the
            // new allowance floor until a real refresh arrives.
            let mut quote = state.quote.clone();
            if let Some(payment) = quote.as_mut().and_then(|q| q.erc20.as_mut()) {
                payment.allowance = Some(payment.cost);
            }
            MintSession {
                step: MintStep::Sheet,
                tx_hash: None,
                tx_kind: TxKind::None,
                loading: false,
                needs_approval: false,
                quote,
                ..state.clone()
            }
        }

        MintAction::ConnectStart if state.step == MintStep::Sheet => MintSession {
            step: MintStep::Connecting,
            ..state.clone()
        },

        MintAction::ConnectSuccess if state.step == MintStep::Connecting => MintSession {
            step: MintStep::Sheet,
            ..state.clone()
        },

        MintAction::MintStart if state.step == MintStep::Sheet => MintSession {
            step: MintStep::Minting,
            loading: true,
            ..state.clone()
        },

        MintAction::MintTxSubmitted { tx_hash } if state.step == MintStep::Minting => {
            MintSession {
                step: MintStep::Waiting,
                tx_hash: Some(tx_hash),
                tx_kind: TxKind::Mint,
                ..state.clone()
            }
        }

        // A success confirmation only counts for the transaction kind that
        // is actually in flight; a stale callback from a superseded
        // transaction is dropped on the floor.
        MintAction::TxSuccess if state.tx_kind == TxKind::Mint => MintSession {
            step: MintStep::Success,
            tx_kind: TxKind::None,
            loading: false,
            ..state.clone()
        },

        MintAction::TxError { message } => MintSession {
            step: MintStep::Error,
            error: Some(message),
            tx_kind: TxKind::None,
            loading: false,
            ..state.clone()
        },

        MintAction::UpdateAllowance { allowance } => {
            let mut quote = state.quote.clone();
            let mut needs_approval = state.needs_approval;
            if let Some(payment) = quote.as_mut().and_then(|q| q.erc20.as_mut()) {
                payment.allowance = Some(allowance);
                needs_approval = allowance < payment.cost;
            }
            MintSession {
                quote,
                needs_approval,
                ..state.clone()
            }
        }

        _ => state.clone(),
    }
}
