//! Async mint flow driver
//!
//! The "driving caller" around the pure state machine: it owns one session,
//! performs the actual reads/writes through the capability traits, and feeds
//! outcomes back in as actions. Single-flight comes from the reducer: if a
//! `*_START` dispatch does not land in the expected state, the driver backs
//! off instead of issuing the side effect.

use std::time::Duration;

use alloy_primitives::{Address, U256};
use castmint_core::{MintConfig, MintParams};
use evm_client::abi::{allowanceCall, approve_calldata};
use evm_client::{try_call, ContractReader, WalletGateway, WriteRequest};

use crate::catalog::config_for;
use crate::classify::{classify, ErrorContext};
use crate::detect::detect;
use crate::price::fetch_price;
use crate::session::{reduce, MintAction, MintSession, MintStep};
use crate::validate::validate_parameters;

/// One mint flow instance: a session plus the capabilities that drive it.
pub struct MintFlow<R, W> {
    reader: R,
    wallet: W,
    config: MintConfig,
    params: MintParams,
    session: MintSession,
}

impl<R: ContractReader, W: WalletGateway> MintFlow<R, W> {
    pub fn new(reader: R, wallet: W, config: MintConfig, params: MintParams) -> Self {
        Self {
            reader,
            wallet,
            config,
            params,
            session: MintSession::new(),
        }
    }

    pub fn session(&self) -> &MintSession {
        &self.session
    }

    pub fn params(&self) -> &MintParams {
        &self.params
    }

    pub fn wallet(&self) -> &W {
        &self.wallet
    }

    fn dispatch(&mut self, action: MintAction) {
        self.session = reduce(&self.session, action);
    }

    /// The contract that pulls ERC-20 payments: the satellite extension when
    /// one exists, the token contract itself otherwise.
    fn spender(&self) -> Option<Address> {
        self.session
            .contract
            .as_ref()
            .map(|info| info.extension_address.unwrap_or(self.params.contract))
    }

    fn fail(&mut self, raw: &str, context: ErrorContext) {
        let parsed = classify(raw, context);
        tracing::warn!("mint flow failure ({}): {}", parsed.message, raw);
        self.dispatch(MintAction::TxError {
            message: parsed.message,
        });
    }

    /// Entry pass: detect, price, validate, and settle the session on
    /// `sheet`, `approve`, or `validation-error`.
    pub async fn open(&mut self) -> &MintSession {
        self.dispatch(MintAction::DetectStart);
        if self.session.step != MintStep::Detecting {
            return &self.session;
        }

        // A known wallet address doubles as the default recipient and
        // unlocks allowance/balance discovery.
        if self.params.recipient.is_none() {
            self.params.recipient = self.wallet.address().await;
        }

        let info = detect(&self.reader, &self.params).await;
        let (info, quote) = fetch_price(&self.reader, &self.config, &mut self.params, info).await;

        let report = validate_parameters(&self.params, &info);
        if report.is_valid {
            self.dispatch(MintAction::DetectSuccess {
                contract: info,
                quote,
            });
        } else {
            self.dispatch(MintAction::ValidationError {
                errors: report.messages(),
            });
        }
        &self.session
    }

    /// Connect the wallet, then refresh the allowance now that an owner is
    /// known.
    pub async fn connect(&mut self) -> &MintSession {
        self.dispatch(MintAction::ConnectStart);
        if self.session.step != MintStep::Connecting {
            return &self.session;
        }

        let connected = self.wallet.connect().await;
        match connected {
            Ok(address) => {
                if self.params.recipient.is_none() {
                    self.params.recipient = Some(address);
                }
                self.dispatch(MintAction::ConnectSuccess);
                self.refresh_allowance(address).await;
            }
            Err(e) => self.fail(&e.to_string(), ErrorContext::Mint),
        }
        &self.session
    }

    async fn refresh_allowance(&mut self, owner: Address) {
        let Some(token) = self
            .session
            .quote
            .as_ref()
            .and_then(|q| q.erc20.as_ref())
            .map(|p| p.token)
        else {
            return;
        };
        let Some(spender) = self.spender() else {
            return;
        };

        let current = try_call(&self.reader, token, allowanceCall { owner, spender }).await;
        if let Some(ret) = current {
            self.dispatch(MintAction::UpdateAllowance {
                allowance: ret.remaining,
            });
        }
    }

    /// Submit the ERC-20 approval for the quoted claim cost and wait for its
    /// receipt.
    pub async fn approve(&mut self) -> &MintSession {
        self.dispatch(MintAction::ApproveStart);
        if self.session.step != MintStep::Approving {
            return &self.session;
        }

        let Some(payment) = self.session.quote.as_ref().and_then(|q| q.erc20.clone()) else {
            self.fail("no token payment to approve", ErrorContext::Approval);
            return &self.session;
        };
        let Some(spender) = self.spender() else {
            self.fail("no contract information", ErrorContext::Approval);
            return &self.session;
        };

        let request = WriteRequest {
            chain_id: self.params.chain_id,
            to: payment.token,
            data: approve_calldata(spender, payment.cost),
            value: U256::ZERO,
        };

        let submitted = self.wallet.write_contract(request).await;
        match submitted {
            Ok(tx_hash) => {
                self.dispatch(MintAction::ApproveTxSubmitted { tx_hash });
                let receipt = self.wallet.wait_for_receipt(tx_hash).await;
                match receipt {
                    Ok(receipt) if receipt.success => self.dispatch(MintAction::ApproveSuccess),
                    Ok(_) => self.fail("execution reverted", ErrorContext::Approval),
                    Err(e) => self.fail(&e.to_string(), ErrorContext::Approval),
                }
            }
            Err(e) => self.fail(&e.to_string(), ErrorContext::Approval),
        }
        &self.session
    }

    /// Verify the wallet chain, build the provider's mint call, submit it,
    /// and wait for the receipt.
    pub async fn mint(&mut self) -> &MintSession {
        // The chain gate is external to the state machine: a mismatched
        // wallet blocks the mint dispatch until the switch lands.
        let wallet_chain = self.wallet.chain_id().await;
        match wallet_chain {
            Some(connected) if connected == self.params.chain_id => {}
            Some(_) => {
                let switched = self.wallet.switch_chain(self.params.chain_id).await;
                if let Err(e) = switched {
                    self.fail(&e.to_string(), ErrorContext::Mint);
                    return &self.session;
                }
            }
            None => {
                self.fail("no wallet connected", ErrorContext::Mint);
                return &self.session;
            }
        }

        self.dispatch(MintAction::MintStart);
        if self.session.step != MintStep::Minting {
            return &self.session;
        }

        let Some(info) = self.session.contract.clone() else {
            self.fail("no contract information", ErrorContext::Mint);
            return &self.session;
        };

        let provider_config = config_for(info.provider, Some(&info));
        let call = match (provider_config.build_mint_call)(&self.params, &info) {
            Ok(call) => call,
            Err(e) => {
                self.fail(&e.to_string(), ErrorContext::Mint);
                return &self.session;
            }
        };

        let value = self
            .session
            .quote
            .as_ref()
            .map(|q| q.total_cost)
            .unwrap_or_default();
        let request = WriteRequest {
            chain_id: self.params.chain_id,
            to: call.to,
            data: call.data,
            value,
        };

        let submitted = self.wallet.write_contract(request).await;
        match submitted {
            Ok(tx_hash) => {
                self.dispatch(MintAction::MintTxSubmitted { tx_hash });
                let receipt = self.wallet.wait_for_receipt(tx_hash).await;
                match receipt {
                    Ok(receipt) if receipt.success => self.dispatch(MintAction::TxSuccess),
                    Ok(_) => self.fail("execution reverted", ErrorContext::Mint),
                    Err(e) => self.fail(&e.to_string(), ErrorContext::Mint),
                }
            }
            Err(e) => self.fail(&e.to_string(), ErrorContext::Mint),
        }
        &self.session
    }

    /// Hold the success screen for the configured dwell time, then reset.
    pub async fn finish(&mut self) -> &MintSession {
        if self.session.step == MintStep::Success {
            tokio::time::sleep(Duration::from_secs(self.config.success_dwell_secs)).await;
            self.dispatch(MintAction::Reset);
        }
        &self.session
    }

    /// Discard the session and all in-flight intent.
    pub fn reset(&mut self) {
        self.dispatch(MintAction::Reset);
    }
}
