//! Catalog documents: static JSON files served verbatim.
//!
//! Each read parses the backing file fresh. Nothing is cached between
//! requests, so a redeployed file is picked up on the next invocation
//! without coordination.

use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

/// Which catalog document a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Countries,
    Skins,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 2] = [CatalogKind::Countries, CatalogKind::Skins];

    pub fn file_name(self) -> &'static str {
        match self {
            CatalogKind::Countries => "countries.json",
            CatalogKind::Skins => "skins.json",
        }
    }

    pub fn path(self, data_dir: &Path) -> PathBuf {
        data_dir.join(self.file_name())
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog file {path} is unavailable: {source}")]
    Unavailable {
        path: String,
        source: std::io::Error,
    },
    #[error("catalog file {path} is not valid JSON: {source}")]
    Malformed {
        path: String,
        source: serde_json::Error,
    },
}

/// Read and parse one catalog document. The parsed value is returned
/// verbatim; shape validation is the producer's responsibility, so unknown
/// fields and optional-field absence survive the round trip.
pub async fn read_catalog(data_dir: &Path, kind: CatalogKind) -> Result<Value, CatalogError> {
    let path = kind.path(data_dir);
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|source| CatalogError::Unavailable {
            path: path.display().to_string(),
            source,
        })?;

    serde_json::from_slice(&bytes).map_err(|source| CatalogError::Malformed {
        path: path.display().to_string(),
        source,
    })
}

/// Entry count of a catalog document, if it is currently a readable JSON
/// array. Used for health reporting; failures are reported as `None`.
pub async fn entry_count(data_dir: &Path, kind: CatalogKind) -> Option<usize> {
    match read_catalog(data_dir, kind).await {
        Ok(Value::Array(items)) => Some(items.len()),
        Ok(_) | Err(_) => None,
    }
}
