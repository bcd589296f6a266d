//! Static asset serving for the images referenced by catalog documents.
//!
//! Assets are immutable deployment artifacts, so responses carry a
//! long-lived cache-control header. Requested paths are sanitized before
//! they touch the filesystem.

use std::path::{Component, Path, PathBuf};

use axum::body::Body;
use axum::http::header::{CACHE_CONTROL, CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::HeaderValue;
use axum::response::Response;
use thiserror::Error;
use tokio::fs::File;
use tokio_util::io::ReaderStream;
use tracing::debug;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("invalid path")]
    InvalidPath,
    #[error("asset not found")]
    NotFound,
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid header value")]
    HeaderValue(#[from] axum::http::header::InvalidHeaderValue),
}

const ASSET_CACHE_CONTROL: &str = "public, max-age=604800, immutable";

/// Reject traversal and absolute components; keep only normal segments.
pub fn sanitize_relative_path(requested_path: &str) -> Result<PathBuf, AssetError> {
    let requested = Path::new(requested_path.trim_start_matches('/'));
    let mut sanitized = PathBuf::new();

    for component in requested.components() {
        match component {
            Component::Normal(part) => sanitized.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(AssetError::InvalidPath);
            }
        }
    }

    if sanitized.as_os_str().is_empty() {
        return Err(AssetError::InvalidPath);
    }

    Ok(sanitized)
}

/// Stream one asset file from the assets root with its guessed content
/// type. Full-body only; the storefront's images are small enough that
/// range requests are not worth supporting.
pub async fn serve_asset(root: &Path, relative: &Path) -> Result<Response, AssetError> {
    let path = root.join(relative);
    let metadata = tokio::fs::metadata(&path)
        .await
        .map_err(|_| AssetError::NotFound)?;

    if !metadata.is_file() {
        return Err(AssetError::NotFound);
    }

    let file = File::open(&path).await?;
    let stream = ReaderStream::new(file);
    debug!(
        path = %relative.display(),
        size = metadata.len(),
        "serving asset"
    );

    let mut response = Response::new(Body::from_stream(stream));
    response.headers_mut().insert(
        CONTENT_LENGTH,
        HeaderValue::from_str(&metadata.len().to_string())?,
    );

    let content_type = mime_guess::from_path(&path)
        .first_or_octet_stream()
        .essence_str()
        .to_string();
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_str(&content_type)?);
    response
        .headers_mut()
        .insert(CACHE_CONTROL, HeaderValue::from_static(ASSET_CACHE_CONTROL));

    Ok(response)
}
