use serde::Serialize;

use crate::assets::AssetError;
use crate::catalog::CatalogError;

use super::error::ApiError;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countries: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skins: Option<usize>,
}

pub fn map_catalog_error(error: &CatalogError) -> ApiError {
    match error {
        CatalogError::Unavailable { .. } => ApiError::CatalogUnavailable,
        CatalogError::Malformed { .. } => ApiError::CatalogMalformed,
    }
}

pub fn map_asset_error(error: &AssetError) -> ApiError {
    match error {
        AssetError::InvalidPath => ApiError::InvalidPath,
        AssetError::NotFound => ApiError::NotFound,
        AssetError::Io(_) | AssetError::HeaderValue(_) => ApiError::Internal,
    }
}
