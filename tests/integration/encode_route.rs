use std::str::FromStr;
use std::sync::Arc;
use std::thread;

use alloy_primitives::{Address, U256};
use alloy_sol_types::SolCall;
use multiswap_encoder::models::adapters::AdapterSet;
use multiswap_encoder::models::messages::BuildRequest;
use multiswap_encoder::models::route::OptimalRoute;
use multiswap_encoder::services::encode::abi::multiSwapCall;
use multiswap_encoder::services::encode::wire::format_calldata;
use multiswap_encoder::services::encode::{MultiSwap, PayloadEncoder, Router, RouterErrorKind};

const ADAPTERS: &str = include_str!("../fixtures/adapters.json");
const REQUEST: &str = include_str!("../fixtures/weth_usdc_dai_request.json");

const WETH: &str = "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2";
const USDC: &str = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48";
const DAI: &str = "0x6b175474e89094c44da98b954eedeac495271d0f";

fn router_from(adapters: &str) -> MultiSwap {
    let adapters = AdapterSet::from_json(adapters).expect("valid adapter set");
    MultiSwap::new(PayloadEncoder::new(Arc::new(adapters)))
}

fn request() -> BuildRequest {
    serde_json::from_str(REQUEST).expect("valid request fixture")
}

fn address(value: &str) -> Address {
    Address::from_str(value).unwrap()
}

fn word(calldata: &[u8], index: usize) -> &[u8] {
    let start = 4 + index * 32;
    &calldata[start..start + 32]
}

#[test]
fn encode_fixture_route_end_to_end() {
    let router = router_from(ADAPTERS);
    let tx = router.build(&request()).expect("route builds");
    let sell_data = &tx.params.0;

    assert_eq!(tx.network_fee, "150000000000000");
    assert_eq!(sell_data.path.len(), 2);
    assert_eq!(sell_data.path[0].to, address(USDC));
    assert_eq!(sell_data.path[1].to, address(DAI));

    // UniswapV2 and SushiSwap share an adapter contract.
    let first_hop = &sell_data.path[0];
    assert_eq!(first_hop.totalNetworkFee, U256::ZERO);
    assert_eq!(first_hop.adapters.len(), 1);
    assert_eq!(first_hop.adapters[0].percent, U256::from(10_000u32));
    let routes = &first_hop.adapters[0].route;
    assert_eq!(routes.len(), 2);
    assert_eq!(routes[0].index, U256::from(1u32));
    assert_eq!(routes[0].percent, U256::from(7_000u32));
    assert_eq!(
        routes[0].targetExchange,
        address("0x7a250d5630b4cf539739df2c5dacb4c659f2488d")
    );
    assert_eq!(routes[1].index, U256::from(2u32));
    assert_eq!(routes[1].percent, U256::from(3_000u32));

    let second_hop = &sell_data.path[1];
    assert_eq!(second_hop.adapters.len(), 2);
    assert_eq!(second_hop.adapters[0].percent, U256::from(8_000u32));
    assert_eq!(second_hop.adapters[1].percent, U256::from(2_000u32));
    assert_eq!(
        second_hop.adapters[1].networkFee,
        U256::from(150_000_000_000_000u64)
    );
    assert_eq!(
        second_hop.totalNetworkFee,
        U256::from(150_000_000_000_000u64)
    );

    let calldata = tx.calldata();
    assert!(format_calldata(&calldata).starts_with("0xa94e78ef"));

    // SellData is dynamic, so the arguments open with its offset.
    assert_eq!(
        word(&calldata, 0),
        U256::from(32u32).to_be_bytes::<32>().as_slice()
    );
    assert_eq!(&word(&calldata, 1)[12..], address(WETH).as_slice());
    assert_eq!(
        word(&calldata, 2),
        U256::from(1_000_000_000_000_000_000u128)
            .to_be_bytes::<32>()
            .as_slice()
    );
    assert_eq!(
        word(&calldata, 3),
        U256::from_str("3118500000000000000000")
            .unwrap()
            .to_be_bytes::<32>()
            .as_slice()
    );
    assert_eq!(
        word(&calldata, 4),
        U256::from_str("3150000000000000000000")
            .unwrap()
            .to_be_bytes::<32>()
            .as_slice()
    );
    assert_eq!(
        word(&calldata, 10),
        U256::from(1_705_000_000u64).to_be_bytes::<32>().as_slice()
    );
    // bytes16 is left aligned.
    let uuid = word(&calldata, 11);
    assert_eq!(
        &uuid[..16],
        &[
            0x0a, 0x1b, 0x2c, 0x3d, 0x4e, 0x5f, 0x60, 0x71, 0x82, 0x93, 0xa4, 0xb5, 0xc6, 0xd7,
            0xe8, 0xf9
        ]
    );
    assert!(uuid[16..].iter().all(|byte| *byte == 0));

    let decoded = multiSwapCall::abi_decode(&calldata).expect("decodes");
    assert_eq!(&decoded.data, sell_data);
}

#[test]
fn split_route_is_rejected() {
    let mut request = request();
    let leg = request.price_route.best_route[0].clone();
    request.price_route.best_route = vec![
        OptimalRoute {
            percent: 60.0,
            swaps: leg.swaps.clone(),
        },
        OptimalRoute {
            percent: 40.0,
            swaps: leg.swaps,
        },
    ];

    let err = router_from(ADAPTERS).build(&request).unwrap_err();
    assert_eq!(err.kind(), RouterErrorKind::InvalidRouteShape);
}

#[test]
fn exchange_outside_adapter_set_is_rejected() {
    let adapters = r#"{
        "UniswapV2": { "adapter": "0x00000000000000000000000000000000000000a1", "index": 1 },
        "SushiSwap": { "adapter": "0x00000000000000000000000000000000000000a1", "index": 2 },
        "ZeroX": { "adapter": "0x00000000000000000000000000000000000000a3", "index": 1 }
    }"#;

    let err = router_from(adapters).build(&request()).unwrap_err();
    assert_eq!(err.kind(), RouterErrorKind::UnsupportedExchange);
    assert!(err.message().contains("Curve"), "{}", err.message());
}

#[test]
fn concurrent_builds_share_one_router() {
    let router = router_from(ADAPTERS);
    let request = request();
    let expected = router.build(&request).unwrap().calldata();

    let (router, request) = (&router, &request);
    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(move || router.build(request).unwrap().calldata()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
