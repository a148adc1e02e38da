//! Token-holder data for an asset.
//!
//! Holder information would normally come from a ledger or an indexer.
//! [`HolderSource`] is the seam for that data; [`PlaceholderHolders`] is the
//! only implementation today and fabricates a fixed distribution.

use serde::Serialize;

/// One entry in an asset's top-staker list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Staker {
    pub address: String,
    pub amount: f64,
    pub percentage: f64,
}

/// Provider of per-asset holder information.
pub trait HolderSource: Send + Sync {
    /// Largest stakers of an asset with `staked_amount` units staked.
    fn top_stakers(&self, staked_amount: i64) -> Vec<Staker>;

    /// Number of distinct holders of the asset.
    fn holder_count(&self, asset_id: &str) -> i64;
}

/// Synthetic address/percentage split used by [`PlaceholderHolders`].
const PLACEHOLDER_SPLIT: [(&str, f64); 3] = [
    ("0x1234...5678", 40.0),
    ("0xabcd...efgh", 35.0),
    ("0x9876...5432", 25.0),
];

/// Holder count reported for every asset by [`PlaceholderHolders`].
pub const PLACEHOLDER_HOLDER_COUNT: i64 = 3;

/// Fabricated holder data: a 40/35/25 split of the staked amount.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderHolders;

impl HolderSource for PlaceholderHolders {
    fn top_stakers(&self, staked_amount: i64) -> Vec<Staker> {
        if staked_amount <= 0 {
            return Vec::new();
        }

        let total = staked_amount as f64;
        PLACEHOLDER_SPLIT
            .iter()
            .map(|&(address, percentage)| Staker {
                address: address.to_string(),
                amount: total * percentage / 100.0,
                percentage,
            })
            .collect()
    }

    fn holder_count(&self, _asset_id: &str) -> i64 {
        PLACEHOLDER_HOLDER_COUNT
    }
}
