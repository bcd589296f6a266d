use std::path::PathBuf;

/// Immutable per-process paths shared by every handler. Catalog documents
/// are re-read on each request, so no further state is held.
#[derive(Debug, Clone)]
pub struct AppState {
    pub data_dir: PathBuf,
    pub assets_root: PathBuf,
}
