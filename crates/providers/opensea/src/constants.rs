//! Well-known SeaDrop addresses (identical across supported chains)

use alloy_primitives::{address, Address};

/// The shared SeaDrop satellite contract
pub const SEA_DROP: Address = address!("00005EA00Ac477B1030CE78506496e8C2dE24bf5");

/// Platform fee recipient passed to `mintPublic`
pub const FEE_RECIPIENT: Address = address!("0000a26b00c1F0DF003000390027140000fAa719");
