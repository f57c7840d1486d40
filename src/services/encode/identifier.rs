use alloy_primitives::{hex, FixedBytes};

use super::RouterError;

/// Packs a hyphenated tracking id (`xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`) into the
/// `bytes16` tag the settlement contract logs. Hyphens are dropped and the 32 hex
/// digits that remain are taken byte for byte.
pub fn uuid_to_bytes16(uuid: &str) -> Result<FixedBytes<16>, RouterError> {
    let trimmed = uuid.trim();
    let stripped = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let digits: String = stripped.chars().filter(|ch| *ch != '-').collect();
    if digits.len() != 32 {
        return Err(RouterError::malformed_identifier(format!(
            "Tracking id {} must contain 32 hex digits, found {}",
            uuid,
            digits.len()
        )));
    }

    let bytes = hex::decode(&digits).map_err(|err| {
        RouterError::malformed_identifier(format!("Tracking id {} is not hex: {}", uuid, err))
    })?;
    Ok(FixedBytes::from_slice(&bytes))
}
