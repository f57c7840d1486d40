use alloy_sol_types::SolCall;
use tracing::debug;

use crate::models::messages::BuildRequest;
use crate::models::route::{OptimalRate, OptimalRoute};

use super::abi::{multiSwapCall, SellData};
use super::identifier::uuid_to_bytes16;
use super::payload::{ContractPaths, PayloadEncoder};
use super::router::{Router, TxInfo};
use super::wire::{parse_address, parse_hex_bytes, parse_uint256};
use super::RouterError;

pub type MultiSwapParam = (SellData,);

const MULTI_SWAP_METHOD: &str = "multiSwap";

/// Compiles single-leg routes into `multiSwap(SellData)` calls.
#[derive(Debug, Clone)]
pub struct MultiSwap {
    payload_encoder: PayloadEncoder,
}

impl MultiSwap {
    pub fn new(payload_encoder: PayloadEncoder) -> Self {
        Self { payload_encoder }
    }

    pub fn contract_method_signature(&self) -> &'static str {
        multiSwapCall::SIGNATURE
    }
}

impl Router for MultiSwap {
    type Param = MultiSwapParam;

    fn contract_method_name(&self) -> &'static str {
        MULTI_SWAP_METHOD
    }

    fn build(&self, request: &BuildRequest) -> Result<TxInfo<MultiSwapParam>, RouterError> {
        let route = &request.price_route;
        let leg = validate_route_shape(route)?;
        let user = parse_address(&request.user_address)?;
        let deadline = parse_uint256(&request.deadline, "deadline")?;

        let ContractPaths { paths, network_fee } = self
            .payload_encoder
            .contract_paths_with_network_fee(&leg.swaps, deadline)?;

        let sell_data = SellData {
            fromToken: parse_address(&route.src_token)?,
            fromAmount: parse_uint256(&route.src_amount, "srcAmount")?,
            toAmount: parse_uint256(&request.min_max_amount, "minMaxAmount")?,
            expectedAmount: parse_uint256(&route.dest_amount, "destAmount")?,
            beneficiary: parse_address(&request.beneficiary)?,
            path: paths,
            partner: parse_address(&request.partner_address)?,
            feePercent: parse_uint256(&request.partner_fee_percent, "partnerFeePercent")?,
            permit: parse_hex_bytes(&request.permit, "permit")?,
            deadline,
            uuid: uuid_to_bytes16(&request.uuid)?,
        };

        debug!(
            event = "multiswap_built",
            user = %user,
            hops = sell_data.path.len(),
            network_fee = %network_fee,
            "Built multiSwap call"
        );

        Ok(TxInfo {
            encoder: encode_multi_swap,
            params: (sell_data,),
            network_fee: network_fee.to_str_radix(10),
        })
    }
}

/// multiSwap executes exactly one undivided path: one leg carrying all of the volume.
pub fn validate_route_shape(route: &OptimalRate) -> Result<&OptimalRoute, RouterError> {
    let leg = match route.best_route.as_slice() {
        [leg] if leg.percent == 100.0 => leg,
        [leg] => {
            return Err(RouterError::invalid_route_shape(format!(
                "multiSwap requires the route to carry 100% of volume, got {}%",
                leg.percent
            )))
        }
        legs => {
            return Err(RouterError::invalid_route_shape(format!(
                "multiSwap requires exactly one route, got {}",
                legs.len()
            )))
        }
    };

    if leg.swaps.is_empty() {
        return Err(RouterError::invalid_route_shape(
            "multiSwap route must contain at least one swap",
        ));
    }
    if let Some(hop_index) = leg
        .swaps
        .iter()
        .position(|swap| swap.swap_exchanges.is_empty())
    {
        return Err(RouterError::invalid_route_shape(format!(
            "hop[{}] has no exchanges",
            hop_index
        )));
    }
    Ok(leg)
}

fn encode_multi_swap(params: &MultiSwapParam) -> Vec<u8> {
    multiSwapCall {
        data: params.0.clone(),
    }
    .abi_encode()
}
