use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use percent_encoding::percent_decode_str;
use serde_json::Value;
use tower_governor::{
    governor::GovernorConfigBuilder,
    key_extractor::GlobalKeyExtractor,
    GovernorLayer,
};
use tracing::{debug, warn};

use crate::assets::{sanitize_relative_path, serve_asset};
use crate::catalog::{self, CatalogKind};
use crate::model::{PaymentStage, SortOption};

use super::error::ApiError;
use super::responses::{map_asset_error, map_catalog_error, HealthResponse};
use super::state::AppState;

pub fn router(state: AppState) -> Router {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(20)
            .burst_size(50)
            .key_extractor(GlobalKeyExtractor)
            .finish()
            .expect("default governor config is valid"),
    );

    Router::new()
        .route("/health", get(health))
        .route("/api/countries", get(countries))
        .route("/api/skins", get(skins))
        .route("/api/sort-options", get(sort_options))
        .route("/api/payment-stages", get(payment_stages))
        .route("/countries", get(countries))
        .route("/skins", get(skins))
        .route("/assets/{*path}", get(asset))
        .layer(GovernorLayer::new(governor_conf))
        .layer(
            tower_http::request_id::SetRequestIdLayer::new(
                axum::http::header::HeaderName::from_static("x-request-id"),
                tower_http::request_id::MakeRequestUuid::default(),
            ),
        )
        .layer(tower_http::request_id::PropagateRequestIdLayer::new(
            axum::http::header::HeaderName::from_static("x-request-id"),
        ))
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let countries = catalog::entry_count(&state.data_dir, CatalogKind::Countries).await;
    let skins = catalog::entry_count(&state.data_dir, CatalogKind::Skins).await;
    Json(HealthResponse {
        status: "ok",
        countries,
        skins,
    })
}

async fn countries(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    serve_catalog(&state, CatalogKind::Countries).await
}

async fn skins(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    serve_catalog(&state, CatalogKind::Skins).await
}

/// One blocking read plus one parse per invocation; the parsed document is
/// passed through untouched.
async fn serve_catalog(state: &AppState, kind: CatalogKind) -> Result<Json<Value>, ApiError> {
    let document = match catalog::read_catalog(&state.data_dir, kind).await {
        Ok(document) => document,
        Err(error) => {
            warn!(catalog = kind.file_name(), error = %error, "catalog read failed");
            return Err(map_catalog_error(&error));
        }
    };
    debug!(catalog = kind.file_name(), "catalog served");
    Ok(Json(document))
}

async fn sort_options() -> Json<Vec<SortOption>> {
    debug!("sort options requested");
    Json(SortOption::canonical())
}

async fn payment_stages() -> Json<Vec<PaymentStage>> {
    debug!("payment stages requested");
    Json(PaymentStage::wizard())
}

async fn asset(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Response, ApiError> {
    let decoded = percent_decode_str(&path)
        .decode_utf8()
        .map_err(|_| ApiError::InvalidPath)?;
    let sanitized = sanitize_relative_path(&decoded).map_err(|e| map_asset_error(&e))?;

    match serve_asset(&state.assets_root, &sanitized).await {
        Ok(response) => Ok(response),
        Err(error) => {
            warn!(path = %sanitized.display(), error = %error, "asset request failed");
            Err(map_asset_error(&error))
        }
    }
}
