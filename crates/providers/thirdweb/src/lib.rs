//! Thirdweb drop provider
//!
//! Drop contracts sell through an ordered list of claim conditions; the
//! active one is the last in the current window (start id + count − 1).
//! Open editions additionally expose `sharedMetadata`, which detection uses
//! as an optional corroborating signal and the metadata resolver synthesizes
//! into a data URI.

pub mod abi;
pub mod constants;
pub mod mint;
pub mod price;

pub use mint::{build_mint_call, total_value};
pub use price::fetch_price;
