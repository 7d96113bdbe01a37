//! Claim-condition constants

use alloy_primitives::{address, Address};

/// Sentinel the platform uses for native-currency pricing
pub const NATIVE_TOKEN: Address = address!("EeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE");

/// Whether a condition's currency field means native payment
pub fn is_native_currency(currency: Address) -> bool {
    currency == Address::ZERO || currency == NATIVE_TOKEN
}
