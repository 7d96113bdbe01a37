//! Zora drop provider
//!
//! Drops sell through `purchase(quantity)` with a protocol reward fee on
//! top of the sale price. Like SeaDrop, this provider applies on explicit
//! override only; detection has no unique signature to probe for.

pub mod abi;
pub mod mint;
pub mod price;

pub use mint::{build_mint_call, total_value};
pub use price::fetch_price;
