use serde::{Deserialize, Serialize};

use crate::models::route::OptimalRate;

/// Everything needed to turn one optimizer route into a settlement call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildRequest {
    pub price_route: OptimalRate,
    /// Slippage floor for the received amount.
    pub min_max_amount: String,
    pub user_address: String,
    pub partner_address: String,
    pub partner_fee_percent: String,
    pub beneficiary: String,
    #[serde(default)]
    pub permit: String,
    pub deadline: String,
    pub uuid: String,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EncodedCallResponse {
    pub method: String,
    pub signature: String,
    pub calldata: String,
    pub network_fee: String,
    pub path_len: usize,
}
