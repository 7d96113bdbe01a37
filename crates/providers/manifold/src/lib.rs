//! Manifold lazy-claim provider
//!
//! Manifold creator contracts delegate minting to a satellite "claim
//! extension" contract. The extension holds the claim terms (cost, payment
//! token, allowlist root, wallet cap, time window) keyed by instance id, and
//! charges a flat per-mint fee on top. The single-edition (ERC-721) and
//! multi-edition (ERC-1155) extensions expose incompatible claim record
//! shapes, so the ABI variant is selected from the detected token standard.

pub mod abi;
pub mod claim;
pub mod constants;
pub mod mint;
pub mod price;

pub use claim::fetch_claim;
pub use mint::{build_mint_call, total_value};
pub use price::fetch_price;
