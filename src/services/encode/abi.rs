//! Settlement contract and adapter payload layouts. Field order and widths must match
//! the deployed contracts exactly.

use alloy_sol_types::sol;

sol! {
    #[derive(Debug, PartialEq, Eq)]
    struct Route {
        uint256 index;
        address targetExchange;
        uint256 percent;
        bytes payload;
        uint256 networkFee;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct Adapter {
        address adapter;
        uint256 percent;
        uint256 networkFee;
        Route[] route;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct Path {
        address to;
        uint256 totalNetworkFee;
        Adapter[] adapters;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct SellData {
        address fromToken;
        uint256 fromAmount;
        uint256 toAmount;
        uint256 expectedAmount;
        address beneficiary;
        Path[] path;
        address partner;
        uint256 feePercent;
        bytes permit;
        uint256 deadline;
        bytes16 uuid;
    }

    #[derive(Debug, PartialEq, Eq)]
    function multiSwap(SellData data) external payable returns (uint256);
}

// Adapter payloads, decoded on chain with `abi.decode(payload, (T))`.
sol! {
    #[derive(Debug, PartialEq, Eq)]
    struct UniswapV2Data {
        address weth;
        uint256[] pools;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct UniswapV3Data {
        bytes path;
        uint256 deadline;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct CurveV1Data {
        int128 i;
        int128 j;
        uint256 deadline;
        bool underlyingSwap;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct ZeroXV4Data {
        bytes order;
        bytes signature;
    }
}
