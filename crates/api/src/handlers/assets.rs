//! Handlers for the `/api/assets` resource.
//!
//! Each handler validates its input, calls [`AssetRepo`], and returns the
//! derived [`AssetView`] inside the standard envelope.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use rwa_core::error::CoreError;
use rwa_core::minting::{
    contract_or_pending, generate_asset_id, parse_price, parse_supply, parse_yield,
    require_non_empty, DEFAULT_ASSET_TYPE, DEFAULT_BLOCKCHAIN,
};
use rwa_db::models::asset::{Asset, AssetView, NewAsset, TokenStats};
use rwa_db::repositories::AssetRepo;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::envelope;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response DTOs
// ---------------------------------------------------------------------------

/// Mint payload. Numeric fields arrive as strings and are parsed here.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MintRequest {
    pub name: String,
    pub symbol: String,
    pub institution_name: String,
    pub institution_address: String,
    pub description: String,
    pub total_supply: String,
    pub expected_yield: String,
    #[serde(rename = "pricePerRWA")]
    pub price_per_rwa: Option<String>,
    pub contract_address: Option<String>,
    pub tx_hash: String,
    #[serde(rename = "documentsURI")]
    pub documents_uri: String,
    #[serde(rename = "imageURI")]
    pub image_uri: String,
}

impl MintRequest {
    /// Validate the payload and build the record to insert under `id`.
    ///
    /// New assets start with nothing staked and carry the default type and
    /// chain.
    pub fn into_new_asset(self, id: String) -> Result<NewAsset, CoreError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("symbol", &self.symbol)?;
        require_non_empty("institutionName", &self.institution_name)?;
        let total_supply = parse_supply("totalSupply", &self.total_supply)?;
        let annual_yield = parse_yield("expectedYield", &self.expected_yield)?;
        let price_usd = parse_price("pricePerRWA", self.price_per_rwa.as_deref())?;
        let contract_address = contract_or_pending(self.contract_address.as_deref());

        Ok(NewAsset {
            id,
            name: self.name,
            symbol: self.symbol,
            asset_type: DEFAULT_ASSET_TYPE.to_string(),
            institution: self.institution_name,
            institution_address: self.institution_address,
            description: self.description,
            total_supply,
            staked_amount: 0,
            price_usd,
            annual_yield,
            blockchain: DEFAULT_BLOCKCHAIN.to_string(),
            contract_address,
            tx_hash: self.tx_hash,
            documents_uri: self.documents_uri,
            image_uri: self.image_uri,
        })
    }
}

/// Payload for recording a deployed contract.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateContractRequest {
    pub contract_address: String,
    pub tx_hash: Option<String>,
}

/// Payload for setting the staked amount.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStakingRequest {
    pub staked_amount: i64,
}

/// Response body of a successful mint.
#[derive(Debug, Serialize)]
pub struct MintResponse {
    pub id: String,
    pub asset: AssetView,
}

/// Response body of the asset listing.
#[derive(Debug, Serialize)]
pub struct AssetList {
    pub assets: Vec<AssetView>,
    pub total: usize,
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn not_found(id: &str) -> CoreError {
    CoreError::NotFound {
        entity: "Asset",
        id: id.to_string(),
    }
}

fn view(state: &AppState, asset: Asset) -> AssetView {
    AssetView::derive(asset, state.holders.as_ref())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/assets
///
/// List every asset, newest first.
pub async fn list_assets(State(state): State<AppState>) -> AppResult<Response> {
    let assets: Vec<AssetView> = AssetRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(|asset| view(&state, asset))
        .collect();
    let total = assets.len();

    Ok(envelope(
        StatusCode::OK,
        "Assets fetched successfully",
        AssetList { assets, total },
    ))
}

/// POST /api/assets/mint
///
/// Mint a new asset from a string-encoded payload.
pub async fn mint_asset(
    State(state): State<AppState>,
    AppJson(input): AppJson<MintRequest>,
) -> AppResult<Response> {
    let new_asset = input.into_new_asset(generate_asset_id())?;
    let asset = AssetRepo::create(&state.pool, &new_asset).await?;

    tracing::info!(
        asset_id = %asset.id,
        symbol = %asset.symbol,
        total_supply = asset.total_supply,
        price_usd = asset.price_usd,
        "Asset minted",
    );

    let id = asset.id.clone();
    Ok(envelope(
        StatusCode::CREATED,
        "Asset minted successfully",
        MintResponse {
            id,
            asset: view(&state, asset),
        },
    ))
}

/// GET /api/assets/{id}
pub async fn get_asset(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let asset = AssetRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found(&id))?;

    Ok(envelope(
        StatusCode::OK,
        "Asset fetched successfully",
        view(&state, asset),
    ))
}

/// GET /api/assets/{id}/stats
///
/// Token statistics for one asset.
pub async fn get_asset_stats(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let asset = AssetRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found(&id))?;

    Ok(envelope(
        StatusCode::OK,
        "Asset stats fetched successfully",
        TokenStats::derive(&asset, state.holders.as_ref()),
    ))
}

/// PATCH /api/assets/{id}/contract
///
/// Record the deployed contract address. An empty or missing `txHash`
/// leaves the stored hash unchanged.
pub async fn update_contract(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(input): AppJson<UpdateContractRequest>,
) -> AppResult<Response> {
    let contract_address = require_non_empty("contractAddress", &input.contract_address)?;

    let asset = AssetRepo::update_contract(
        &state.pool,
        &id,
        contract_address,
        input.tx_hash.as_deref(),
    )
    .await?
    .ok_or_else(|| not_found(&id))?;

    tracing::info!(
        asset_id = %asset.id,
        contract_address = %asset.contract_address,
        "Asset contract address updated",
    );

    Ok(envelope(
        StatusCode::OK,
        "Contract address updated successfully",
        view(&state, asset),
    ))
}

/// PATCH /api/assets/{id}/staking
///
/// Set the staked amount; rejected when it exceeds the total supply.
pub async fn update_staking(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(input): AppJson<UpdateStakingRequest>,
) -> AppResult<Response> {
    let asset = AssetRepo::update_staking(&state.pool, &id, input.staked_amount).await?;

    tracing::info!(
        asset_id = %asset.id,
        staked_amount = asset.staked_amount,
        "Asset staking updated",
    );

    Ok(envelope(
        StatusCode::OK,
        "Staking updated successfully",
        view(&state, asset),
    ))
}
