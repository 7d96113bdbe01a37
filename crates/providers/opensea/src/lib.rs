//! SeaDrop provider
//!
//! Drops minted through the shared SeaDrop contract: the token contract
//! itself exposes no mint surface, so this provider is never auto-detected.
//! It applies only on explicit override, with the well-known satellite
//! address filled in from the catalog.

pub mod abi;
pub mod constants;
pub mod mint;
pub mod price;

pub use mint::{build_mint_call, total_value};
pub use price::fetch_price;
