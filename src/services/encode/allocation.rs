use super::RouterError;

pub(super) const BPS_DENOMINATOR: u32 = 10_000;

/// Optimizer percentages (0-100, possibly fractional) to basis points.
pub(super) fn percent_to_bps(percent: f64, label: &str) -> Result<u32, RouterError> {
    if !percent.is_finite() || percent <= 0.0 || percent > 100.0 {
        return Err(RouterError::invalid(format!(
            "{} percent must be in (0, 100], got {}",
            label, percent
        )));
    }
    let bps = (percent * 100.0).round() as u32;
    if bps == 0 {
        return Err(RouterError::invalid(format!(
            "{} percent {} rounds down to zero basis points",
            label, percent
        )));
    }
    Ok(bps.min(BPS_DENOMINATOR))
}

/// Re-expresses each share as basis points of the group total. The last entry
/// takes the remainder so the result always sums to exactly 10000.
pub(super) fn relative_shares_bps(shares: &[u32], label: &str) -> Result<Vec<u32>, RouterError> {
    if shares.is_empty() {
        return Err(RouterError::invalid(format!("{} must not be empty", label)));
    }
    if shares.contains(&0) {
        return Err(RouterError::invalid(format!(
            "{} shares must be > 0",
            label
        )));
    }

    let total: u64 = shares.iter().map(|share| u64::from(*share)).sum();
    let last_index = shares.len() - 1;
    let mut allocated: u32 = 0;
    let mut relative = Vec::with_capacity(shares.len());

    for (index, share) in shares.iter().enumerate() {
        if index < last_index {
            let bps = u64::from(*share) * u64::from(BPS_DENOMINATOR) / total;
            // share <= total, so bps <= 10000.
            let bps = bps as u32;
            if bps == 0 {
                return Err(RouterError::invalid(format!(
                    "{} share rounds down to zero basis points",
                    label
                )));
            }
            allocated += bps;
            relative.push(bps);
        } else {
            let remainder = BPS_DENOMINATOR.checked_sub(allocated).ok_or_else(|| {
                RouterError::encoding(format!("{} shares exceed 10000 basis points", label))
            })?;
            relative.push(remainder);
        }
    }

    Ok(relative)
}
