//! Derived financial metrics for a stored asset.
//!
//! Everything here is a pure function of the stored record: the same input
//! always yields the same output and nothing reads the wall clock. The only
//! date involved (the supporting-document date) comes from the record's own
//! creation timestamp.

use serde::Serialize;

use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Contract-address sentinel meaning "not yet deployed".
pub const PENDING_CONTRACT: &str = "pending";

/// Label of the single document entry produced from a documents URI.
pub const SUPPORTING_DOCUMENTS_LABEL: &str = "Supporting Documents";

/// Date format used for document entries.
const DOCUMENT_DATE_FORMAT: &str = "%Y-%m-%d";

// ---------------------------------------------------------------------------
// Supply metrics
// ---------------------------------------------------------------------------

/// Computed supply and valuation figures for one asset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyMetrics {
    pub available_supply: i64,
    pub market_cap: f64,
    pub total_value: f64,
    pub staked_value: f64,
    pub available_value: f64,
    /// Percentage of total supply that is staked, `0.0` when supply is zero.
    pub staking_progress: f64,
    /// Cost of a single unit.
    pub min_investment: f64,
    /// Value of all available units, never below `min_investment`.
    pub max_investment: f64,
}

impl SupplyMetrics {
    /// Derive the metrics from the raw economic fields of an asset.
    pub fn compute(total_supply: i64, staked_amount: i64, price_usd: f64) -> Self {
        let available_supply = total_supply.saturating_sub(staked_amount).max(0);

        let market_cap = total_supply as f64 * price_usd;
        let staked_value = staked_amount as f64 * price_usd;
        let available_value = available_supply as f64 * price_usd;

        let staking_progress = if total_supply > 0 {
            staked_amount as f64 / total_supply as f64 * 100.0
        } else {
            0.0
        };

        let min_investment = price_usd;
        let max_investment = available_value.max(min_investment);

        Self {
            available_supply,
            market_cap,
            total_value: market_cap,
            staked_value,
            available_value,
            staking_progress,
            min_investment,
            max_investment,
        }
    }
}

/// Whether a contract address refers to a deployed contract.
pub fn is_contract_active(contract_address: &str) -> bool {
    !contract_address.is_empty() && contract_address != PENDING_CONTRACT
}

// ---------------------------------------------------------------------------
// Supporting documents
// ---------------------------------------------------------------------------

/// A supporting document shown alongside an asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub name: String,
    pub date: String,
    pub url: String,
}

/// Build the document list for an asset.
///
/// Yields exactly one entry when `documents_uri` is non-empty, dated with
/// the asset's creation day, and an empty list otherwise.
pub fn supporting_documents(documents_uri: &str, created_at: Timestamp) -> Vec<Document> {
    if documents_uri.is_empty() {
        return Vec::new();
    }

    vec![Document {
        name: SUPPORTING_DOCUMENTS_LABEL.to_string(),
        date: created_at.format(DOCUMENT_DATE_FORMAT).to_string(),
        url: documents_uri.to_string(),
    }]
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    // -- SupplyMetrics::compute --

    #[test]
    fn available_supply_is_total_minus_staked() {
        let m = SupplyMetrics::compute(1000, 250, 2.0);
        assert_eq!(m.available_supply, 750);
        assert_eq!(m.available_value, 1500.0);
        assert_eq!(m.staked_value, 500.0);
    }

    #[test]
    fn available_supply_clamps_to_zero() {
        let m = SupplyMetrics::compute(100, 150, 1.0);
        assert_eq!(m.available_supply, 0);
        assert_eq!(m.available_value, 0.0);
    }

    #[test]
    fn market_cap_equals_total_value() {
        let m = SupplyMetrics::compute(1000, 0, 12.5);
        assert_eq!(m.market_cap, 12_500.0);
        assert_eq!(m.total_value, m.market_cap);
    }

    #[test]
    fn staking_progress_is_percentage_of_supply() {
        let m = SupplyMetrics::compute(1000, 250, 1.0);
        assert_eq!(m.staking_progress, 25.0);
    }

    #[test]
    fn staking_progress_zero_supply_does_not_divide() {
        let m = SupplyMetrics::compute(0, 0, 1.0);
        assert_eq!(m.staking_progress, 0.0);
        assert_eq!(m.available_supply, 0);
    }

    #[test]
    fn staking_progress_stays_within_bounds() {
        for staked in [0, 1, 333, 999, 1000] {
            let m = SupplyMetrics::compute(1000, staked, 1.0);
            assert!(
                (0.0..=100.0).contains(&m.staking_progress),
                "progress out of range for staked={staked}: {}",
                m.staking_progress
            );
        }
    }

    #[test]
    fn fully_staked_keeps_max_investment_at_min() {
        let m = SupplyMetrics::compute(500, 500, 3.0);
        assert_eq!(m.available_value, 0.0);
        assert_eq!(m.min_investment, 3.0);
        assert_eq!(m.max_investment, 3.0);
    }

    #[test]
    fn max_investment_is_available_value_when_larger() {
        let m = SupplyMetrics::compute(1000, 0, 1.0);
        assert_eq!(m.min_investment, 1.0);
        assert_eq!(m.max_investment, 1000.0);
    }

    #[test]
    fn serializes_camel_case_fields() {
        let json = serde_json::to_value(SupplyMetrics::compute(10, 5, 1.0)).unwrap();
        assert_eq!(json["availableSupply"], 5);
        assert_eq!(json["stakingProgress"], 50.0);
        assert!(json.get("maxInvestment").is_some());
    }

    // -- is_contract_active --

    #[test]
    fn pending_contract_is_inactive() {
        assert!(!is_contract_active(PENDING_CONTRACT));
    }

    #[test]
    fn empty_contract_is_inactive() {
        assert!(!is_contract_active(""));
    }

    #[test]
    fn deployed_contract_is_active() {
        assert!(is_contract_active("0xABC"));
    }

    // -- supporting_documents --

    #[test]
    fn documents_empty_without_uri() {
        let created = chrono::Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap();
        assert!(supporting_documents("", created).is_empty());
    }

    #[test]
    fn documents_single_entry_with_creation_date() {
        let created = chrono::Utc.with_ymd_and_hms(2024, 3, 9, 23, 59, 59).unwrap();
        let docs = supporting_documents("ipfs://docs", created);

        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].name, SUPPORTING_DOCUMENTS_LABEL);
        assert_eq!(docs[0].date, "2024-03-09");
        assert_eq!(docs[0].url, "ipfs://docs");
    }
}
