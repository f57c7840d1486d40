use std::str::FromStr;

use alloy_primitives::{hex, Address, Bytes, U256};
use num_bigint::BigUint;

use super::RouterError;

pub(crate) fn parse_amount(value: &str, label: &str) -> Result<BigUint, RouterError> {
    BigUint::from_str(value)
        .map_err(|_| RouterError::invalid(format!("Invalid {}: {}", label, value)))
}

/// Decimal string straight to `uint256`.
pub(crate) fn parse_uint256(value: &str, label: &str) -> Result<U256, RouterError> {
    let amount = parse_amount(value, label)?;
    biguint_to_u256_checked(&amount, label)
}

pub(crate) fn parse_address(value: &str) -> Result<Address, RouterError> {
    let trimmed = value.trim();
    Address::from_str(trimmed)
        .map_err(|err| RouterError::invalid(format!("Invalid address {}: {}", value, err)))
}

/// Hex blob with or without `0x`; an empty string is empty bytes.
pub(crate) fn parse_hex_bytes(value: &str, label: &str) -> Result<Bytes, RouterError> {
    let trimmed = value.trim();
    let stripped = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    if stripped.is_empty() {
        return Ok(Bytes::new());
    }
    hex::decode(stripped)
        .map(Bytes::from)
        .map_err(|err| RouterError::invalid(format!("Invalid {} hex: {}", label, err)))
}

pub fn format_address(address: &Address) -> String {
    hex::encode_prefixed(address)
}

pub fn format_calldata(data: &[u8]) -> String {
    hex::encode_prefixed(data)
}

pub(crate) fn biguint_to_u256_checked(value: &BigUint, label: &str) -> Result<U256, RouterError> {
    let bytes = value.to_bytes_be();
    if bytes.len() > 32 {
        return Err(RouterError::invalid(format!("{} must fit uint256", label)));
    }

    Ok(U256::from_be_slice(&bytes))
}
