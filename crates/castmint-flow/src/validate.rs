//! Request validation
//!
//! Enforces provider-specific required fields and rejects requests this core
//! cannot serve (allowlist claims needing a merkle proof). Runs after price
//! discovery so claim records are available; failures surface as a
//! `VALIDATION_ERROR` state transition, never an exception.

use alloy_primitives::U256;
use castmint_core::{ContractInfo, MintParams, Provider};
use serde::{Deserialize, Serialize};

/// Outcome of validating one request against its classified contract
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub missing_params: Vec<String>,
    pub errors: Vec<String>,
}

impl ValidationReport {
    /// Flatten into the message list carried by the session state
    pub fn messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .cloned()
            .chain(
                self.missing_params
                    .iter()
                    .map(|p| format!("missing parameter: {}", p)),
            )
            .collect()
    }
}

/// Validate `params` for the detected contract.
pub fn validate_parameters(params: &MintParams, info: &ContractInfo) -> ValidationReport {
    let mut missing_params = Vec::new();
    let mut errors = Vec::new();

    if params.quantity == 0 {
        errors.push("quantity must be at least 1".to_string());
    }

    if info.provider == Provider::Manifold {
        // The claim extension is keyed by instance id; a token id works too
        // because the instance can be looked up from it. Neither is fatal.
        if params.instance_id.is_none() && params.token_id.is_none() {
            errors.push(
                "manifold mints require an instanceId or a tokenId; neither was provided"
                    .to_string(),
            );
            missing_params.push("instanceId".to_string());
            missing_params.push("tokenId".to_string());
        }
    }

    if let Some(instance_id) = params.instance_id {
        // Claim instance ids are small on-chain counters; anything wider
        // than 64 bits is a caller mistake.
        if instance_id.is_zero() || instance_id > U256::from(u64::MAX) {
            errors.push("instanceId is out of the supported range".to_string());
        }
    }

    let proof_missing = params
        .merkle_proof
        .as_ref()
        .map_or(true, |proof| proof.is_empty());

    let needs_proof = info
        .claim
        .as_ref()
        .map(|claim| claim.requires_proof())
        .unwrap_or(false)
        || info
            .claim_condition
            .as_ref()
            .map(|cond| cond.requires_proof())
            .unwrap_or(false);

    if needs_proof && proof_missing {
        errors.push(
            "this claim is allowlist-gated and requires a merkle proof, which is not supported"
                .to_string(),
        );
    }

    ValidationReport {
        is_valid: errors.is_empty() && missing_params.is_empty(),
        missing_params,
        errors,
    }
}
