use std::sync::Arc;

use alloy_primitives::Address;
use serde_json::{json, Value};

use crate::models::adapters::AdapterSet;
use crate::models::messages::BuildRequest;
use crate::models::route::{OptimalRate, OptimalRoute, OptimalSwap, OptimalSwapExchange};

pub(super) const UNISWAP_V2_ADAPTER: &str = "0x00000000000000000000000000000000000000a1";
pub(super) const CURVE_ADAPTER: &str = "0x00000000000000000000000000000000000000a2";
pub(super) const ZEROX_ADAPTER: &str = "0x00000000000000000000000000000000000000a3";

pub(super) fn address(last_byte: u8) -> Address {
    Address::with_last_byte(last_byte)
}

pub(super) fn hex_address(last_byte: u8) -> String {
    format!("{:#x}", address(last_byte))
}

/// UniswapV2 and SushiSwap share one adapter contract; Curve and 0x each have their own.
pub(super) fn adapter_set() -> Arc<AdapterSet> {
    let raw = json!({
        "UniswapV2": { "adapter": UNISWAP_V2_ADAPTER, "index": 1 },
        "SushiSwap": { "adapter": UNISWAP_V2_ADAPTER, "index": 2 },
        "Curve": { "adapter": CURVE_ADAPTER, "index": 3 },
        "ZeroX": { "adapter": ZEROX_ADAPTER, "index": 4 },
    });
    Arc::new(AdapterSet::from_json(&raw.to_string()).unwrap())
}

pub(super) fn swap_exchange(exchange: &str, percent: f64, data: Value) -> OptimalSwapExchange {
    OptimalSwapExchange {
        exchange: exchange.to_string(),
        src_amount: "1000".to_string(),
        dest_amount: "990".to_string(),
        percent,
        data: Some(data),
    }
}

pub(super) fn uniswap_v2_exchange(percent: f64) -> OptimalSwapExchange {
    swap_exchange(
        "UniswapV2",
        percent,
        json!({
            "router": hex_address(0x09),
            "pools": [{ "address": hex_address(0xaa), "fee": 30, "direction": true }]
        }),
    )
}

pub(super) fn zerox_exchange(percent: f64, protocol_fee: &str) -> OptimalSwapExchange {
    swap_exchange(
        "ZeroX",
        percent,
        json!({
            "exchangeProxy": hex_address(0x06),
            "order": "0x01020304",
            "signature": "0xaabb",
            "protocolFee": protocol_fee
        }),
    )
}

pub(super) fn hop(src: u8, dest: u8, exchanges: Vec<OptimalSwapExchange>) -> OptimalSwap {
    OptimalSwap {
        src_token: hex_address(src),
        dest_token: hex_address(dest),
        swap_exchanges: exchanges,
    }
}

pub(super) fn rate(legs: Vec<OptimalRoute>) -> OptimalRate {
    OptimalRate {
        src_token: hex_address(1),
        src_amount: "1000".to_string(),
        dest_token: hex_address(2),
        dest_amount: "990".to_string(),
        best_route: legs,
        network: Some(1),
        block_number: None,
        src_decimals: None,
        dest_decimals: None,
    }
}

pub(super) fn single_leg(swaps: Vec<OptimalSwap>) -> OptimalRate {
    rate(vec![OptimalRoute {
        percent: 100.0,
        swaps,
    }])
}

pub(super) fn build_request(price_route: OptimalRate) -> BuildRequest {
    BuildRequest {
        price_route,
        min_max_amount: "980".to_string(),
        user_address: hex_address(0x11),
        partner_address: hex_address(0x22),
        partner_fee_percent: "0".to_string(),
        beneficiary: hex_address(0x33),
        permit: "0x".to_string(),
        deadline: "1700000000".to_string(),
        uuid: "5f1c0a3e-9d2b-4c8e-a7f6-0123456789ab".to_string(),
    }
}
