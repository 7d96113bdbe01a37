//! Drop contract surface

alloy_sol_types::sol! {
    // Public getter of the drop's sales configuration
    function salesConfig() external view returns (
        uint104 publicSalePrice,
        uint32 maxSalePurchasePerAddress,
        uint64 publicSaleStart,
        uint64 publicSaleEnd,
        uint64 presaleStart,
        uint64 presaleEnd,
        bytes32 presaleMerkleRoot
    );

    // Protocol reward fee for a purchase of `quantity`
    function zoraFeeForAmount(uint256 quantity) external view returns (address recipient, uint256 fee);

    function purchase(uint256 quantity) external payable returns (uint256 firstMintedTokenId);
}
