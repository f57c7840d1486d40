use std::fs;
use std::io::{self, Read};
use std::sync::Arc;

use anyhow::Context;
use tracing::{debug, info};

use multiswap_encoder::config::{init_logging, load_config};
use multiswap_encoder::models::adapters::AdapterSet;
use multiswap_encoder::models::messages::{BuildRequest, EncodedCallResponse};
use multiswap_encoder::services::encode::wire::format_calldata;
use multiswap_encoder::services::encode::{MultiSwap, PayloadEncoder, Router};

fn main() -> anyhow::Result<()> {
    let config = load_config();
    init_logging(&config.log_level);

    let raw_adapters = fs::read_to_string(&config.adapters_file).with_context(|| {
        format!(
            "Failed to read adapter set from {}",
            config.adapters_file.display()
        )
    })?;
    let adapters = Arc::new(AdapterSet::from_json(&raw_adapters)?);
    info!(adapters = adapters.len(), "Loaded adapter set");

    let raw_request = match &config.request_file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read build request from {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read build request from stdin")?;
            buffer
        }
    };
    let request: BuildRequest =
        serde_json::from_str(&raw_request).context("Invalid build request")?;
    debug!(
        legs = request.price_route.best_route.len(),
        "Parsed build request"
    );

    let router = MultiSwap::new(PayloadEncoder::new(adapters));
    let tx = router.build(&request)?;

    let response = EncodedCallResponse {
        method: router.contract_method_name().to_string(),
        signature: router.contract_method_signature().to_string(),
        calldata: format_calldata(&tx.calldata()),
        network_fee: tx.network_fee.clone(),
        path_len: tx.params.0.path.len(),
    };
    info!(
        method = %response.method,
        network_fee = %response.network_fee,
        path_len = response.path_len,
        "Encoded route"
    );

    let output = if config.pretty_output {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{output}");
    Ok(())
}
