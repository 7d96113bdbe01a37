//! Manifold contract surface
//!
//! `creator` is the surface of the creator (token) contract itself; the two
//! extension modules carry the incompatible single- and multi-edition claim
//! record shapes. The mint entrypoints share a signature across both
//! extension generations.

/// Creator-core contract surface
pub mod creator {
    alloy_sol_types::sol! {
        // Registered satellite extensions that minting is delegated to
        function getExtensions() external view returns (address[] extensions);
    }
}

/// Single-edition (ERC-721) lazy payable claim extension
pub mod erc721 {
    alloy_sol_types::sol! {
        struct Claim {
            uint32 total;
            uint32 totalMax;
            uint32 walletMax;
            uint48 startDate;
            uint48 endDate;
            uint8 storageProtocol;
            bool identical;
            bytes32 merkleRoot;
            string location;
            uint256 cost;
            address paymentReceiver;
            address erc20;
            address signingAddress;
        }

        function MINT_FEE() external view returns (uint256 fee);
        function getClaim(address creatorContractAddress, uint256 instanceId) external view returns (Claim claim);
        function getClaimForToken(address creatorContractAddress, uint256 tokenId) external view returns (uint256 instanceId, Claim claim);
        function mint(address creatorContractAddress, uint256 instanceId, uint32 mintIndex, bytes32[] merkleProof, address mintFor) external payable;
        function mintBatch(address creatorContractAddress, uint256 instanceId, uint16 mintCount, uint32[] mintIndices, bytes32[][] merkleProofs, address mintFor) external payable;
        function tokenURI(address creatorContractAddress, uint256 tokenId) external view returns (string uri);
    }
}

/// Multi-edition (ERC-1155) lazy payable claim extension
pub mod erc1155 {
    alloy_sol_types::sol! {
        struct Claim {
            uint32 total;
            uint32 totalMax;
            uint32 walletMax;
            uint48 startDate;
            uint48 endDate;
            uint8 storageProtocol;
            bytes32 merkleRoot;
            string location;
            uint256 tokenId;
            uint256 cost;
            address paymentReceiver;
            address erc20;
            address signingAddress;
        }

        function MINT_FEE() external view returns (uint256 fee);
        function getClaim(address creatorContractAddress, uint256 instanceId) external view returns (Claim claim);
        function getClaimForToken(address creatorContractAddress, uint256 tokenId) external view returns (uint256 instanceId, Claim claim);
        function mint(address creatorContractAddress, uint256 instanceId, uint32 mintIndex, bytes32[] merkleProof, address mintFor) external payable;
        function mintBatch(address creatorContractAddress, uint256 instanceId, uint16 mintCount, uint32[] mintIndices, bytes32[][] merkleProofs, address mintFor) external payable;
    }
}
