//! Shared contract surface: ERC-165, ERC-20, and metadata getters

use alloy_primitives::{Address, FixedBytes};

use crate::{try_call, ContractReader};

alloy_sol_types::sol! {
    // ERC-165
    function supportsInterface(bytes4 interfaceId) external view returns (bool supported);

    // ERC-20 surface used for claim payments
    function symbol() external view returns (string sym);
    function decimals() external view returns (uint8 count);
    function allowance(address owner, address spender) external view returns (uint256 remaining);
    function balanceOf(address owner) external view returns (uint256 balance);
    function approve(address spender, uint256 amount) external returns (bool ok);

    // Token metadata getters tried by the resolver fallback chain
    function tokenURI(uint256 tokenId) external view returns (string uri);
    function uri(uint256 id) external view returns (string value);
    function contractURI() external view returns (string uri);
    function baseURI() external view returns (string uri);
}

/// ERC-721 interface id (0x80ac58cd)
pub const ERC721_INTERFACE_ID: FixedBytes<4> = FixedBytes([0x80, 0xac, 0x58, 0xcd]);

/// ERC-1155 interface id (0xd9b67a26)
pub const ERC1155_INTERFACE_ID: FixedBytes<4> = FixedBytes([0xd9, 0xb6, 0x7a, 0x26]);

/// ERC-165 probe. `false` covers both "does not support" and "probe failed":
/// an unverified external contract may not implement ERC-165 at all.
pub async fn supports_interface(
    reader: &dyn ContractReader,
    contract: Address,
    interface_id: FixedBytes<4>,
) -> bool {
    try_call(
        reader,
        contract,
        supportsInterfaceCall {
            interfaceId: interface_id,
        },
    )
    .await
    .map(|r| r.supported)
    .unwrap_or(false)
}

/// Calldata for an ERC-20 `approve(spender, amount)`
pub fn approve_calldata(spender: Address, amount: alloy_primitives::U256) -> Vec<u8> {
    use alloy_sol_types::SolCall;
    approveCall { spender, amount }.abi_encode()
}
