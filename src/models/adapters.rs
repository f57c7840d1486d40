use std::collections::HashMap;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::models::exchange::{normalize_exchange_name, ExchangeKind};
use crate::services::encode::wire::parse_address;
use crate::services::encode::RouterError;

/// Adapter entry as it appears in configuration files, keyed by exchange name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdapterEntry {
    pub adapter: String,
    pub index: u64,
}

/// On-chain adapter serving one exchange. `index` selects the exchange inside the
/// adapter contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdapterConfig {
    pub adapter: Address,
    pub index: u64,
    pub kind: ExchangeKind,
}

/// Immutable set of exchanges the settlement contract can route through.
#[derive(Debug, Clone, Default)]
pub struct AdapterSet {
    adapters: HashMap<String, AdapterConfig>,
}

impl AdapterSet {
    pub fn from_entries(entries: &HashMap<String, AdapterEntry>) -> Result<Self, RouterError> {
        let mut adapters = HashMap::with_capacity(entries.len());
        for (exchange, entry) in entries {
            let kind = ExchangeKind::from_name(exchange).ok_or_else(|| {
                RouterError::unsupported_exchange(format!(
                    "No payload encoder for exchange {}",
                    exchange
                ))
            })?;
            let adapter = parse_address(&entry.adapter)?;
            let previous = adapters.insert(
                normalize_exchange_name(exchange),
                AdapterConfig {
                    adapter,
                    index: entry.index,
                    kind,
                },
            );
            if previous.is_some() {
                return Err(RouterError::invalid(format!(
                    "Exchange {} is configured more than once",
                    exchange
                )));
            }
        }
        Ok(Self { adapters })
    }

    pub fn from_json(raw: &str) -> Result<Self, RouterError> {
        let entries: HashMap<String, AdapterEntry> = serde_json::from_str(raw)
            .map_err(|err| RouterError::invalid(format!("Invalid adapter set: {}", err)))?;
        Self::from_entries(&entries)
    }

    pub fn get(&self, exchange: &str) -> Option<&AdapterConfig> {
        self.adapters.get(&normalize_exchange_name(exchange))
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}
