//! Generated-contract surface

alloy_sol_types::sol! {
    // Version marker present only on platform-generated contracts
    function n2mVersion() external pure returns (uint256 version);

    // All-inclusive per-token price (newer deployments)
    function mintPrice() external view returns (uint256 price);

    // Fee pair on older deployments: platform fee + creator fee, per token
    function mintFee() external view returns (uint256 fee);
    function creatorFee() external view returns (uint256 fee);

    // Mint entrypoints
    function mint(uint256 amount) external payable;
    function mintTo(address to, uint256 amount) external payable;
}
