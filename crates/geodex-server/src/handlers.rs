//! HTTP handlers for the country API and the synchronization trigger.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use geodex_core::{Country, CountryPatch, Currency, validate_country, validate_patch};
use geodex_sync::SyncStats;
use serde::Deserialize;
use serde_json::json;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn root() -> impl IntoResponse {
    let body = json!({
        "service": "Geodex Server",
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    });
    (StatusCode::OK, Json(body))
}

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

pub async fn list_countries(
    State(state): State<AppState>,
) -> Result<Json<Vec<Country>>, ApiError> {
    let countries = state.store.list().await?;
    Ok(Json(countries))
}

pub async fn get_country(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Country>, ApiError> {
    let country = state
        .store
        .find_by_code(&code)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(country))
}

/// Request body for country creation. The code and name are required; the
/// check is explicit rather than a deserialization failure so the response
/// names the missing fields.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCountryRequest {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub sub_region: Option<String>,
    #[serde(default)]
    pub demonym: Option<String>,
    #[serde(default)]
    pub population: Option<i64>,
    #[serde(default)]
    pub independent: Option<bool>,
    #[serde(default)]
    pub flag: Option<String>,
    #[serde(default)]
    pub currency: Option<Currency>,
}

pub async fn create_country(
    State(state): State<AppState>,
    Json(request): Json<CreateCountryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(code), Some(name)) = (request.code, request.name) else {
        return Err(ApiError::bad_request("code and name are required"));
    };

    let country = Country {
        code,
        name,
        region: request.region,
        sub_region: request.sub_region,
        demonym: request.demonym,
        population: request.population,
        independent: request.independent,
        flag: request.flag,
        currency: request.currency.unwrap_or_default(),
    };

    let errors = validate_country(&country);
    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    if state.store.find_by_code(&country.code).await?.is_some() {
        return Err(ApiError::Conflict);
    }

    state.store.insert(&country).await?;

    Ok((StatusCode::CREATED, Json(country)))
}

pub async fn update_country(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(patch): Json<CountryPatch>,
) -> Result<Json<Country>, ApiError> {
    let mut country = state
        .store
        .find_by_code(&code)
        .await?
        .ok_or(ApiError::NotFound)?;

    let errors = validate_patch(&patch);
    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    patch.apply(&mut country);
    state.store.update(&country).await?;

    Ok(Json(country))
}

pub async fn delete_country(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    if !state.store.delete(&code).await? {
        return Err(ApiError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn sync_countries(
    State(state): State<AppState>,
) -> Result<Json<SyncStats>, ApiError> {
    let stats = state.reconciler.synchronize().await?;
    Ok(Json(stats))
}
