//! Well-known Manifold extension addresses
//!
//! The claim extensions are singleton contracts deployed at the same address
//! across the chains Manifold supports. When a creator contract reports
//! several registered extensions, one of these is preferred over an unknown
//! address.

use alloy_primitives::{address, Address};

/// ERC-721 lazy payable claim extension
pub const ERC721_LAZY_CLAIM: Address = address!("23aA05a271DEBFFAA3D75739aF5581f744b326E4");

/// ERC-1155 lazy payable claim extension
pub const ERC1155_LAZY_CLAIM: Address = address!("26BBEA7803DcAc346D5F5f135b57Cf2c752A02bE");

/// All extension addresses known in advance
pub const KNOWN_EXTENSIONS: &[Address] = &[ERC721_LAZY_CLAIM, ERC1155_LAZY_CLAIM];

/// Pick the preferred extension from a creator contract's registered list:
/// a well-known claim extension if present, otherwise the first entry.
pub fn preferred_extension(extensions: &[Address]) -> Option<Address> {
    extensions
        .iter()
        .find(|addr| KNOWN_EXTENSIONS.contains(addr))
        .or_else(|| extensions.first())
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_known_extension() {
        let unknown = Address::from([0x99; 20]);
        assert_eq!(
            preferred_extension(&[unknown, ERC1155_LAZY_CLAIM]),
            Some(ERC1155_LAZY_CLAIM)
        );
    }

    #[test]
    fn falls_back_to_first() {
        let a = Address::from([0x01; 20]);
        let b = Address::from([0x02; 20]);
        assert_eq!(preferred_extension(&[a, b]), Some(a));
        assert_eq!(preferred_extension(&[]), None);
    }
}
