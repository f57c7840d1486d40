use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolValue;
use num_bigint::BigUint;
use num_traits::Zero;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::models::exchange::ExchangeKind;
use crate::models::route::OptimalSwapExchange;

use super::abi::{CurveV1Data, UniswapV2Data, UniswapV3Data, ZeroXV4Data};
use super::wire::{parse_address, parse_amount, parse_hex_bytes};
use super::RouterError;

const UNISWAP_V2_FEE_FACTOR: u32 = 10_000;
const UNISWAP_V3_MAX_FEE: u32 = (1 << 24) - 1;

/// Hop-level values every payload encoder may need.
pub(super) struct HopContext {
    pub(super) src_token: Address,
    pub(super) dest_token: Address,
    pub(super) deadline: U256,
}

/// What one exchange allocation contributes to its adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct ExchangeParam {
    pub(super) target_exchange: Address,
    pub(super) payload: Bytes,
    pub(super) network_fee: BigUint,
}

pub(super) fn build_exchange_param(
    kind: ExchangeKind,
    exchange: &OptimalSwapExchange,
    hop: &HopContext,
) -> Result<ExchangeParam, RouterError> {
    match kind {
        ExchangeKind::UniswapV2 => uniswap_v2_param(decode_data(exchange)?),
        ExchangeKind::UniswapV3 => uniswap_v3_param(decode_data(exchange)?, hop),
        ExchangeKind::CurveV1 => curve_v1_param(decode_data(exchange)?, hop),
        ExchangeKind::ZeroXV4 => zerox_v4_param(decode_data(exchange)?),
    }
}

fn decode_data<T: DeserializeOwned>(exchange: &OptimalSwapExchange) -> Result<T, RouterError> {
    let data = exchange.data.as_ref().ok_or_else(|| {
        RouterError::invalid(format!("Exchange {} is missing data", exchange.exchange))
    })?;
    T::deserialize(data).map_err(|err| {
        RouterError::invalid(format!(
            "Invalid data for exchange {}: {}",
            exchange.exchange, err
        ))
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UniswapV2ExchangeData {
    router: String,
    #[serde(default)]
    weth: Option<String>,
    pools: Vec<UniswapV2PoolData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UniswapV2PoolData {
    address: String,
    /// Pool fee in basis points.
    fee: u32,
    /// `true` when the pool's token0 is the token being sold.
    direction: bool,
}

fn uniswap_v2_param(data: UniswapV2ExchangeData) -> Result<ExchangeParam, RouterError> {
    if data.pools.is_empty() {
        return Err(RouterError::invalid("UniswapV2 data must name at least one pool"));
    }
    let weth = match data.weth.as_deref() {
        Some(weth) => parse_address(weth)?,
        None => Address::ZERO,
    };
    let pools = data
        .pools
        .iter()
        .map(encode_uniswap_v2_pool)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ExchangeParam {
        target_exchange: parse_address(&data.router)?,
        payload: UniswapV2Data { weth, pools }.abi_encode().into(),
        network_fee: BigUint::zero(),
    })
}

// Packed as (10000 - fee) << 161 | !direction << 160 | address.
fn encode_uniswap_v2_pool(pool: &UniswapV2PoolData) -> Result<U256, RouterError> {
    if pool.fee >= UNISWAP_V2_FEE_FACTOR {
        return Err(RouterError::invalid(format!(
            "UniswapV2 pool fee must be < {} bps, got {}",
            UNISWAP_V2_FEE_FACTOR, pool.fee
        )));
    }
    let address = parse_address(&pool.address)?;
    let fee_factor = U256::from(UNISWAP_V2_FEE_FACTOR - pool.fee) << 161_usize;
    let direction = U256::from(u8::from(!pool.direction)) << 160_usize;
    let address = U256::from_be_slice(address.as_slice());
    Ok(fee_factor | direction | address)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UniswapV3ExchangeData {
    router: String,
    path: Vec<UniswapV3PoolData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UniswapV3PoolData {
    token_in: String,
    token_out: String,
    /// Pool fee in hundredths of a basis point.
    fee: u32,
}

fn uniswap_v3_param(
    data: UniswapV3ExchangeData,
    hop: &HopContext,
) -> Result<ExchangeParam, RouterError> {
    let path = encode_uniswap_v3_path(&data.path, hop)?;
    Ok(ExchangeParam {
        target_exchange: parse_address(&data.router)?,
        payload: UniswapV3Data {
            path,
            deadline: hop.deadline,
        }
        .abi_encode()
        .into(),
        network_fee: BigUint::zero(),
    })
}

// tokenIn (20) | fee (3) | tokenOut (20) | fee (3) | tokenOut (20) ...
fn encode_uniswap_v3_path(
    pools: &[UniswapV3PoolData],
    hop: &HopContext,
) -> Result<Bytes, RouterError> {
    let first = pools
        .first()
        .ok_or_else(|| RouterError::invalid("UniswapV3 path must not be empty"))?;
    let mut current = parse_address(&first.token_in)?;
    if current != hop.src_token {
        return Err(RouterError::invalid(
            "UniswapV3 path must start with the hop source token",
        ));
    }

    let mut encoded = Vec::with_capacity(20 + pools.len() * 23);
    encoded.extend_from_slice(current.as_slice());
    for pool in pools {
        let token_in = parse_address(&pool.token_in)?;
        if token_in != current {
            return Err(RouterError::invalid("UniswapV3 path pools are not contiguous"));
        }
        if pool.fee > UNISWAP_V3_MAX_FEE {
            return Err(RouterError::invalid(format!(
                "UniswapV3 fee {} does not fit uint24",
                pool.fee
            )));
        }
        let token_out = parse_address(&pool.token_out)?;
        encoded.extend_from_slice(&pool.fee.to_be_bytes()[1..]);
        encoded.extend_from_slice(token_out.as_slice());
        current = token_out;
    }

    if current != hop.dest_token {
        return Err(RouterError::invalid(
            "UniswapV3 path must end with the hop destination token",
        ));
    }
    Ok(encoded.into())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CurveV1ExchangeData {
    exchange: String,
    i: i64,
    j: i64,
    #[serde(default)]
    underlying_swap: bool,
}

fn curve_v1_param(data: CurveV1ExchangeData, hop: &HopContext) -> Result<ExchangeParam, RouterError> {
    if data.i == data.j {
        return Err(RouterError::invalid("Curve coin indexes i and j must differ"));
    }
    Ok(ExchangeParam {
        target_exchange: parse_address(&data.exchange)?,
        payload: CurveV1Data {
            i: i128::from(data.i),
            j: i128::from(data.j),
            deadline: hop.deadline,
            underlyingSwap: data.underlying_swap,
        }
        .abi_encode()
        .into(),
        network_fee: BigUint::zero(),
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ZeroXV4ExchangeData {
    exchange_proxy: String,
    order: String,
    signature: String,
    /// Protocol fee paid in native currency to fill the order.
    #[serde(default)]
    protocol_fee: Option<String>,
}

fn zerox_v4_param(data: ZeroXV4ExchangeData) -> Result<ExchangeParam, RouterError> {
    let order = parse_hex_bytes(&data.order, "0x order")?;
    if order.is_empty() {
        return Err(RouterError::invalid("0x order must not be empty"));
    }
    let signature = parse_hex_bytes(&data.signature, "0x signature")?;
    let network_fee = match data.protocol_fee.as_deref() {
        Some(fee) => parse_amount(fee, "0x protocolFee")?,
        None => BigUint::zero(),
    };

    Ok(ExchangeParam {
        target_exchange: parse_address(&data.exchange_proxy)?,
        payload: ZeroXV4Data { order, signature }.abi_encode().into(),
        network_fee,
    })
}
