//! SeaDrop contract surface

alloy_sol_types::sol! {
    struct PublicDrop {
        uint80 mintPrice;
        uint48 startTime;
        uint48 endTime;
        uint16 maxTotalMintableByWallet;
        uint16 feeBps;
        bool restrictFeeRecipients;
    }

    function getPublicDrop(address nftContract) external view returns (PublicDrop publicDrop);
    function mintPublic(address nftContract, address feeRecipient, address minterIfNotPayer, uint256 quantity) external payable;
}
