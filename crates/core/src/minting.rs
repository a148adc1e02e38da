//! Mint-time defaults, identifier generation and payload parsing.
//!
//! Clients send numeric mint fields as strings. These helpers turn them into
//! proper numeric types at the boundary and report which field was bad.

use crate::error::CoreError;
use crate::metrics::PENDING_CONTRACT;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Asset category assigned to every minted asset.
pub const DEFAULT_ASSET_TYPE: &str = "Real Estate";

/// Chain recorded for every minted asset.
pub const DEFAULT_BLOCKCHAIN: &str = "Lisk";

/// Unit price used when the mint payload omits one.
pub const DEFAULT_PRICE_USD: f64 = 1.0;

/// Prefix of every generated asset identifier.
pub const ASSET_ID_PREFIX: &str = "asset_";

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

/// Generate a fresh asset identifier.
///
/// UUIDv7 carries a millisecond timestamp plus 74 random bits, so ids are
/// unique for any realistic mint rate and sort roughly by creation time.
pub fn generate_asset_id() -> String {
    format!("{ASSET_ID_PREFIX}{}", uuid::Uuid::now_v7().simple())
}

// ---------------------------------------------------------------------------
// Field parsing
// ---------------------------------------------------------------------------

/// Reject a missing or blank required string field.
pub fn require_non_empty<'a>(field: &str, value: &'a str) -> Result<&'a str, CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(value)
}

/// Parse a string-encoded, non-negative supply figure.
pub fn parse_supply(field: &str, raw: &str) -> Result<i64, CoreError> {
    let raw = require_non_empty(field, raw)?;
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|e| CoreError::Validation(format!("Invalid {field} '{raw}': {e}")))?;
    if value < 0 {
        return Err(CoreError::Validation(format!(
            "{field} must be non-negative, got {value}"
        )));
    }
    Ok(value)
}

/// Parse a string-encoded yield percentage.
pub fn parse_yield(field: &str, raw: &str) -> Result<f64, CoreError> {
    let raw = require_non_empty(field, raw)?;
    parse_finite(field, raw)
}

/// Parse the optional unit price, falling back to [`DEFAULT_PRICE_USD`]
/// when it is absent or empty.
pub fn parse_price(field: &str, raw: Option<&str>) -> Result<f64, CoreError> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(DEFAULT_PRICE_USD),
        Some(raw) => raw,
    };
    let value = parse_finite(field, raw)?;
    if value < 0.0 {
        return Err(CoreError::Validation(format!(
            "{field} must be non-negative, got {value}"
        )));
    }
    Ok(value)
}

/// Contract address to store at mint time; absent or empty means pending.
pub fn contract_or_pending(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        None | Some("") => PENDING_CONTRACT.to_string(),
        Some(address) => address.to_string(),
    }
}

fn parse_finite(field: &str, raw: &str) -> Result<f64, CoreError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|e| CoreError::Validation(format!("Invalid {field} '{raw}': {e}")))?;
    if !value.is_finite() {
        return Err(CoreError::Validation(format!(
            "{field} must be a finite number, got '{raw}'"
        )));
    }
    Ok(value)
}

// ---------------------------------------------------------------------------
// Staking
// ---------------------------------------------------------------------------

/// Check a staked amount against the asset's total supply.
pub fn validate_staked_amount(staked_amount: i64, total_supply: i64) -> Result<(), CoreError> {
    if staked_amount < 0 {
        return Err(CoreError::Validation(format!(
            "stakedAmount must be non-negative, got {staked_amount}"
        )));
    }
    if staked_amount > total_supply {
        return Err(CoreError::Validation(format!(
            "Staked amount cannot exceed total supply ({staked_amount} > {total_supply})"
        )));
    }
    Ok(())
}
