use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Best route computed by the optimizer. Amounts are kept as the decimal strings the
/// optimizer emits; they are parsed into big integers only when the call is assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimalRate {
    pub src_token: String,
    pub src_amount: String,
    pub dest_token: String,
    pub dest_amount: String,
    pub best_route: Vec<OptimalRoute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_number: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src_decimals: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dest_decimals: Option<u8>,
}

/// One top-level share of the traded volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimalRoute {
    pub percent: f64,
    pub swaps: Vec<OptimalSwap>,
}

/// One hop of a leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimalSwap {
    pub src_token: String,
    pub dest_token: String,
    pub swap_exchanges: Vec<OptimalSwapExchange>,
}

/// Share of a hop filled on a single exchange. `data` is exchange specific and is
/// decoded by that exchange's payload encoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimalSwapExchange {
    pub exchange: String,
    pub src_amount: String,
    pub dest_amount: String,
    pub percent: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}
