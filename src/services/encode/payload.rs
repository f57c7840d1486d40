use std::sync::Arc;

use alloy_primitives::{Address, U256};
use num_bigint::BigUint;
use num_traits::Zero;
use tracing::{debug, warn};

use crate::models::adapters::AdapterSet;
use crate::models::route::OptimalSwap;

use super::abi::{Adapter, Path, Route};
use super::allocation::{percent_to_bps, relative_shares_bps, BPS_DENOMINATOR};
use super::exchanges::{build_exchange_param, ExchangeParam, HopContext};
use super::wire::{biguint_to_u256_checked, format_address, parse_address};
use super::RouterError;

/// Contract paths for one leg, in hop order, plus the fee summed across them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractPaths {
    pub paths: Vec<Path>,
    pub network_fee: BigUint,
}

struct AdapterGroup {
    adapter: Address,
    shares_bps: Vec<u32>,
    routes: Vec<(u64, ExchangeParam)>,
}

/// Turns hops into the settlement contract's `Path[]`. Stateless apart from the
/// adapter set, which is shared read-only between every call compiler using it.
#[derive(Debug, Clone)]
pub struct PayloadEncoder {
    adapters: Arc<AdapterSet>,
}

impl PayloadEncoder {
    pub fn new(adapters: Arc<AdapterSet>) -> Self {
        Self { adapters }
    }

    /// Compiles every hop in order. Any hop that cannot be compiled fails the whole
    /// leg; hops are never skipped, merged or reordered.
    pub fn contract_paths_with_network_fee(
        &self,
        swaps: &[OptimalSwap],
        deadline: U256,
    ) -> Result<ContractPaths, RouterError> {
        let mut network_fee = BigUint::zero();
        let mut paths = Vec::with_capacity(swaps.len());

        for (hop_index, swap) in swaps.iter().enumerate() {
            let (path, path_fee) = self.build_path(swap, hop_index, deadline)?;
            debug!(
                hop_index,
                to = %format_address(&path.to),
                adapters = path.adapters.len(),
                network_fee = %path_fee,
                "Compiled hop"
            );
            network_fee += path_fee;
            paths.push(path);
        }

        Ok(ContractPaths { paths, network_fee })
    }

    fn build_path(
        &self,
        swap: &OptimalSwap,
        hop_index: usize,
        deadline: U256,
    ) -> Result<(Path, BigUint), RouterError> {
        if swap.swap_exchanges.is_empty() {
            return Err(RouterError::invalid_route_shape(format!(
                "hop[{}] has no exchanges",
                hop_index
            )));
        }

        let hop = HopContext {
            src_token: parse_address(&swap.src_token)?,
            dest_token: parse_address(&swap.dest_token)?,
            deadline,
        };

        let mut groups: Vec<AdapterGroup> = Vec::new();
        let mut hop_bps: u32 = 0;
        for (exchange_index, exchange) in swap.swap_exchanges.iter().enumerate() {
            let label = format!("hop[{}].swapExchanges[{}]", hop_index, exchange_index);
            let config = self.adapters.get(&exchange.exchange).ok_or_else(|| {
                warn!(
                    event = "unsupported_exchange",
                    exchange = %exchange.exchange,
                    hop_index,
                    "Hop references an exchange outside the adapter set"
                );
                RouterError::unsupported_exchange(format!(
                    "No adapter configured for exchange {} ({})",
                    exchange.exchange, label
                ))
            })?;

            let share_bps = percent_to_bps(exchange.percent, &label)?;
            hop_bps += share_bps;
            if hop_bps > BPS_DENOMINATOR {
                return Err(RouterError::invalid(format!(
                    "hop[{}] exchange percentages exceed 100",
                    hop_index
                )));
            }

            let param = build_exchange_param(config.kind, exchange, &hop)?;
            match groups
                .iter_mut()
                .find(|group| group.adapter == config.adapter)
            {
                Some(group) => {
                    group.shares_bps.push(share_bps);
                    group.routes.push((config.index, param));
                }
                None => groups.push(AdapterGroup {
                    adapter: config.adapter,
                    shares_bps: vec![share_bps],
                    routes: vec![(config.index, param)],
                }),
            }
        }

        let mut path_fee = BigUint::zero();
        let mut adapters = Vec::with_capacity(groups.len());
        for group in groups {
            let label = format!("hop[{}] adapter {}", hop_index, format_address(&group.adapter));
            let adapter_bps: u32 = group.shares_bps.iter().sum();
            let route_bps = relative_shares_bps(&group.shares_bps, &label)?;

            let mut adapter_fee = BigUint::zero();
            let mut routes = Vec::with_capacity(group.routes.len());
            for ((index, param), percent) in group.routes.into_iter().zip(route_bps) {
                adapter_fee += &param.network_fee;
                routes.push(Route {
                    index: U256::from(index),
                    targetExchange: param.target_exchange,
                    percent: U256::from(percent),
                    payload: param.payload,
                    networkFee: biguint_to_u256_checked(&param.network_fee, "route networkFee")?,
                });
            }

            adapters.push(Adapter {
                adapter: group.adapter,
                percent: U256::from(adapter_bps),
                networkFee: biguint_to_u256_checked(&adapter_fee, "adapter networkFee")?,
                route: routes,
            });
            path_fee += adapter_fee;
        }

        let path = Path {
            to: hop.dest_token,
            totalNetworkFee: biguint_to_u256_checked(&path_fee, "path totalNetworkFee")?,
            adapters,
        };
        Ok((path, path_fee))
    }
}
