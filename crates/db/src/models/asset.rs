//! Asset entity model, insert DTO and derived response projections.
//!
//! Field names serialize in camelCase, with `type`, `documentsURI` and
//! `imageURI` kept verbatim for existing frontend clients.

use rwa_core::holders::{HolderSource, Staker};
use rwa_core::metrics::{is_contract_active, supporting_documents, Document, SupplyMetrics};
use rwa_core::types::{AssetId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;
use validator::Validate;

/// A row from the `assets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: AssetId,
    pub name: String,
    pub symbol: String,
    #[serde(rename = "type")]
    pub asset_type: String,
    pub institution: String,
    pub institution_address: String,
    pub description: String,
    pub total_supply: i64,
    pub staked_amount: i64,
    pub price_usd: f64,
    pub annual_yield: f64,
    pub blockchain: String,
    pub contract_address: String,
    pub tx_hash: String,
    #[serde(rename = "documentsURI")]
    pub documents_uri: String,
    #[serde(rename = "imageURI")]
    pub image_uri: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new asset. Numbers are already parsed.
#[derive(Debug, Clone, Validate)]
pub struct NewAsset {
    #[validate(length(min = 1, message = "id is required"))]
    pub id: AssetId,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "symbol is required"))]
    pub symbol: String,
    #[validate(length(min = 1, message = "asset type is required"))]
    pub asset_type: String,
    #[validate(length(min = 1, message = "institution name is required"))]
    pub institution: String,
    pub institution_address: String,
    pub description: String,
    #[validate(range(min = 0, message = "total supply must be non-negative"))]
    pub total_supply: i64,
    #[validate(range(min = 0, message = "staked amount must be non-negative"))]
    pub staked_amount: i64,
    #[validate(range(min = 0.0, message = "price must be non-negative"))]
    pub price_usd: f64,
    pub annual_yield: f64,
    #[validate(length(min = 1, message = "blockchain is required"))]
    pub blockchain: String,
    pub contract_address: String,
    pub tx_hash: String,
    pub documents_uri: String,
    pub image_uri: String,
}

/// Read-only projection of an [`Asset`] enriched with derived metrics.
///
/// Rebuilt on every read; never persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetView {
    #[serde(flatten)]
    pub asset: Asset,
    #[serde(flatten)]
    pub metrics: SupplyMetrics,
    pub is_contract_active: bool,
    pub documents: Vec<Document>,
    pub top_stakers: Vec<Staker>,
}

impl AssetView {
    /// Derive the response view for a stored asset.
    pub fn derive(asset: Asset, holders: &dyn HolderSource) -> Self {
        let metrics = SupplyMetrics::compute(asset.total_supply, asset.staked_amount, asset.price_usd);
        let is_contract_active = is_contract_active(&asset.contract_address);
        let documents = supporting_documents(&asset.documents_uri, asset.created_at);
        let top_stakers = holders.top_stakers(asset.staked_amount);

        Self {
            asset,
            metrics,
            is_contract_active,
            documents,
            top_stakers,
        }
    }
}

/// Token statistics for a single asset.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenStats {
    pub total_supply: i64,
    /// Every unit of a tokenized RWA is considered circulating.
    pub circulating_supply: i64,
    pub holder_count: i64,
    pub price: f64,
    pub market_cap: f64,
}

impl TokenStats {
    pub fn derive(asset: &Asset, holders: &dyn HolderSource) -> Self {
        Self {
            total_supply: asset.total_supply,
            circulating_supply: asset.total_supply,
            holder_count: holders.holder_count(&asset.id),
            price: asset.price_usd,
            market_cap: asset.total_supply as f64 * asset.price_usd,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rwa_core::holders::PlaceholderHolders;
    use rwa_core::metrics::PENDING_CONTRACT;

    use super::*;

    fn sample_asset(total_supply: i64, staked_amount: i64) -> Asset {
        let created = chrono::Utc.with_ymd_and_hms(2025, 1, 15, 8, 30, 0).unwrap();
        Asset {
            id: "asset_test".to_string(),
            name: "Harbor Tower".to_string(),
            symbol: "HBT".to_string(),
            asset_type: "Real Estate".to_string(),
            institution: "Acme Bank".to_string(),
            institution_address: String::new(),
            description: String::new(),
            total_supply,
            staked_amount,
            price_usd: 2.0,
            annual_yield: 8.5,
            blockchain: "Lisk".to_string(),
            contract_address: PENDING_CONTRACT.to_string(),
            tx_hash: String::new(),
            documents_uri: String::new(),
            image_uri: String::new(),
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn view_serializes_record_and_metrics_flat() {
        let mut asset = sample_asset(1000, 250);
        asset.documents_uri = "ipfs://docs".to_string();

        let view = AssetView::derive(asset, &PlaceholderHolders);
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["id"], "asset_test");
        assert_eq!(json["type"], "Real Estate");
        assert_eq!(json["documentsURI"], "ipfs://docs");
        assert_eq!(json["availableSupply"], 750);
        assert_eq!(json["stakingProgress"], 25.0);
        assert_eq!(json["isContractActive"], false);
        assert_eq!(json["documents"][0]["date"], "2025-01-15");
        assert_eq!(json["topStakers"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn view_without_stake_or_documents_has_empty_lists() {
        let view = AssetView::derive(sample_asset(1000, 0), &PlaceholderHolders);
        assert!(view.documents.is_empty());
        assert!(view.top_stakers.is_empty());
    }

    #[test]
    fn token_stats_treat_all_supply_as_circulating() {
        let stats = TokenStats::derive(&sample_asset(1000, 100), &PlaceholderHolders);
        assert_eq!(stats.circulating_supply, 1000);
        assert_eq!(stats.holder_count, 3);
        assert_eq!(stats.market_cap, 2000.0);
    }
}
