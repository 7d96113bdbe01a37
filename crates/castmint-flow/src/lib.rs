//! Castmint flow core
//!
//! The orchestration layer over the provider crates: classify an unknown
//! contract, quote its mint price, validate the request, and drive the
//! approval/mint transaction sequence through a pure state machine.
//!
//! # Flow
//!
//! ```ignore
//! use castmint_flow::MintFlow;
//! use castmint_core::{MintConfig, MintParams};
//!
//! let params = MintParams::new(contract, 8453);
//! let mut flow = MintFlow::new(reader, wallet, MintConfig::default(), params);
//! flow.open().await;          // detect -> price -> validate
//! if flow.session().needs_approval {
//!     flow.approve().await;   // ERC-20 approval transaction
//! }
//! flow.mint().await;          // chain gate -> mint transaction
//! ```
//!
//! Every piece is also usable on its own: `detect`, `validate_parameters`,
//! `fetch_price`, `resolve_metadata_uri`, the `reduce` state transition
//! function, and `classify`.

pub mod catalog;
pub mod classify;
pub mod detect;
pub mod driver;
pub mod generic;
pub mod metadata;
pub mod price;
pub mod session;
pub mod validate;

pub use catalog::{config_for, MintAbi, ProviderConfig};
pub use classify::{classify, ErrorContext, ErrorKind, ParsedError};
pub use detect::detect;
pub use driver::MintFlow;
pub use metadata::{fetch_token_metadata, resolve_metadata_uri, TokenMetadata};
pub use price::fetch_price;
pub use session::{reduce, MintAction, MintSession, MintStep, TxKind};
pub use validate::{validate_parameters, ValidationReport};
