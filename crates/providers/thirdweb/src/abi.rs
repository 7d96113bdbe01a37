//! Drop contract surface

alloy_sol_types::sol! {
    struct ClaimCondition {
        uint256 startTimestamp;
        uint256 maxClaimableSupply;
        uint256 supplyClaimed;
        uint256 quantityLimitPerWallet;
        bytes32 merkleRoot;
        uint256 pricePerToken;
        address currency;
        string metadata;
    }

    struct AllowlistProof {
        bytes32[] proof;
        uint256 quantityLimitPerWallet;
        uint256 pricePerToken;
        address currency;
    }

    // (start id of the current window, number of conditions)
    function claimCondition() external view returns (uint256 currentStartId, uint256 count);
    function getClaimConditionById(uint256 conditionId) external view returns (ClaimCondition condition);
    function claim(address receiver, uint256 quantity, address currency, uint256 pricePerToken, AllowlistProof allowlistProof, bytes data) external payable;

    // Open-edition shared token metadata
    function sharedMetadata() external view returns (string name, string description, string imageURI, string animationURI);
}
