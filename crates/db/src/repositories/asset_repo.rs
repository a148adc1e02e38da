//! Repository for the `assets` table.
//!
//! Every mutation is a single SQL statement, so SQLite's writer lock is all
//! the concurrency control the store needs.

use rwa_core::error::CoreError;
use rwa_core::minting::validate_staked_amount;
use sqlx::SqlitePool;
use validator::Validate;

use crate::models::asset::{Asset, NewAsset};
use crate::{is_unique_violation, StoreError};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, symbol, asset_type, institution, institution_address, \
    description, total_supply, staked_amount, price_usd, annual_yield, blockchain, \
    contract_address, tx_hash, documents_uri, image_uri, created_at, updated_at";

/// Provides the asset store operations.
pub struct AssetRepo;

impl AssetRepo {
    /// Insert a new asset, returning the stored row.
    ///
    /// Fails with `Validation` when required fields are empty, numbers are
    /// out of range or the staked amount exceeds the supply, and with
    /// `Conflict` when the id is already taken.
    pub async fn create(pool: &SqlitePool, input: &NewAsset) -> Result<Asset, StoreError> {
        input
            .validate()
            .map_err(|e| CoreError::Validation(e.to_string()))?;
        validate_staked_amount(input.staked_amount, input.total_supply)?;

        let now = chrono::Utc::now();
        let query = format!(
            "INSERT INTO assets ({COLUMNS}) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?17) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(&input.id)
            .bind(&input.name)
            .bind(&input.symbol)
            .bind(&input.asset_type)
            .bind(&input.institution)
            .bind(&input.institution_address)
            .bind(&input.description)
            .bind(input.total_supply)
            .bind(input.staked_amount)
            .bind(input.price_usd)
            .bind(input.annual_yield)
            .bind(&input.blockchain)
            .bind(&input.contract_address)
            .bind(&input.tx_hash)
            .bind(&input.documents_uri)
            .bind(&input.image_uri)
            .bind(now)
            .fetch_one(pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    tracing::warn!(asset_id = %input.id, "Asset id collision on insert");
                    StoreError::Core(CoreError::Conflict(format!(
                        "Asset with id {} already exists",
                        input.id
                    )))
                } else {
                    StoreError::Database(e)
                }
            })
    }

    /// Find an asset by its id.
    pub async fn find_by_id(pool: &SqlitePool, id: &str) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assets WHERE id = ?1");
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all assets, newest first.
    ///
    /// Rows created within the same instant fall back to insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Asset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assets ORDER BY created_at DESC, rowid DESC");
        sqlx::query_as::<_, Asset>(&query).fetch_all(pool).await
    }

    /// Record the deployed contract address of an asset.
    ///
    /// The transaction hash is only overwritten when `tx_hash` is non-empty.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_contract(
        pool: &SqlitePool,
        id: &str,
        contract_address: &str,
        tx_hash: Option<&str>,
    ) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!(
            "UPDATE assets SET \
                contract_address = ?2, \
                tx_hash = CASE WHEN ?3 = '' THEN tx_hash ELSE ?3 END, \
                updated_at = ?4 \
             WHERE id = ?1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .bind(contract_address)
            .bind(tx_hash.unwrap_or_default())
            .bind(chrono::Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// Set the staked amount of an asset.
    ///
    /// The supply ceiling is checked inside the `UPDATE` itself, so a
    /// rejected amount never touches the stored row.
    pub async fn update_staking(
        pool: &SqlitePool,
        id: &str,
        staked_amount: i64,
    ) -> Result<Asset, StoreError> {
        if staked_amount < 0 {
            return Err(CoreError::Validation(format!(
                "stakedAmount must be non-negative, got {staked_amount}"
            ))
            .into());
        }

        let query = format!(
            "UPDATE assets SET \
                staked_amount = ?2, \
                updated_at = ?3 \
             WHERE id = ?1 AND ?2 <= total_supply \
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .bind(staked_amount)
            .bind(chrono::Utc::now())
            .fetch_optional(pool)
            .await?;

        if let Some(asset) = updated {
            return Ok(asset);
        }

        // Nothing matched: either the asset is missing or the amount is
        // above its supply. Total supply is immutable, so re-reading is safe.
        let existing = Self::find_by_id(pool, id)
            .await?
            .ok_or_else(|| CoreError::NotFound {
                entity: "Asset",
                id: id.to_string(),
            })?;

        validate_staked_amount(staked_amount, existing.total_supply)?;
        Err(CoreError::Internal(format!("Staking update for asset {id} matched no row")).into())
    }

    /// Total number of stored assets.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM assets")
            .fetch_one(pool)
            .await
    }
}
