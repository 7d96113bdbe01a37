//! NFTs2Me generated-contract provider
//!
//! Contracts generated by the platform expose a version marker
//! (`n2mVersion`) whose mere existence identifies them. Pricing comes from
//! an all-inclusive per-token getter on newer deployments, a creator/platform
//! fee pair on older ones, and a configured default pair when neither
//! surface exists.

pub mod abi;
pub mod mint;
pub mod price;

pub use mint::{build_mint_call, total_value};
pub use price::fetch_price;
